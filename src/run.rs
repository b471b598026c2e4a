use core::fmt;

/// A maximal block of one repeated character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    /// The repeated byte.
    pub character: u8,
    /// How many times `character` repeats; at least 1 inside a list.
    pub count: usize,
}

impl Run {
    pub fn new(character: u8, count: usize) -> Self {
        Self { character, count }
    }

    /// Number of bytes this run takes in the encoded form.
    pub(crate) fn encoded_len(&self) -> usize {
        1 + crate::helpers::decimal_len(self.count) + 1
    }
}

/// Formats the run as an encoded record, with the character shown as Latin-1.
impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}", char::from(self.character), self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encoded_len_counts_digits() {
        assert_eq!(Run::new(b'a', 3).encoded_len(), 3);
        assert_eq!(Run::new(b'b', 12).encoded_len(), 4);
        assert_eq!(Run::new(b'c', 1000).encoded_len(), 6);
    }

    #[test]
    fn display_is_record() {
        assert_eq!(Run::new(b'#', 42).to_string(), "#42\n");
    }
}
