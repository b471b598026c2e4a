use ordermap::OrderMap;

/// An ordered byte-to-byte translation table, usable as a `map` function.
/// Bytes without an entry translate to themselves.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    table: OrderMap<u8, u8>,
}

impl Translation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `insert`.
    pub fn with(mut self, from: u8, to: u8) -> Self {
        self.insert(from, to);
        self
    }

    /// Adds or replaces the entry for `from`, returning the previous target.
    pub fn insert(&mut self, from: u8, to: u8) -> Option<u8> {
        self.table.insert(from, to)
    }

    /// Exchanges `a` and `b`.
    pub fn swap(a: u8, b: u8) -> Self {
        Self::new().with(a, b).with(b, a)
    }

    /// Inverts ascii art drawn with `@` on a blank background.
    pub fn invert() -> Self {
        Self::swap(b' ', b'@')
    }

    pub fn apply(&self, c: u8) -> u8 {
        self.table.get(&c).copied().unwrap_or(c)
    }

    /// Entries in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.table.iter().map(|(from, to)| (*from, *to))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RunList;
    use pretty_assertions::assert_eq;

    #[test]
    fn unmapped_bytes_pass_through() {
        let t = Translation::new().with(b'a', b'b');
        assert_eq!(t.apply(b'a'), b'b');
        assert_eq!(t.apply(b'c'), b'c');
    }

    #[test]
    fn insert_replaces_and_keeps_order() {
        let mut t = Translation::new().with(b'x', b'1').with(b'y', b'2');
        assert_eq!(t.insert(b'x', b'3'), Some(b'1'));
        assert_eq!(t.pairs().collect::<Vec<_>>(), vec![(b'x', b'3'), (b'y', b'2')]);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn invert_art() {
        let mut list = RunList::from_decoded(b"  @@\n@  @\n").unwrap();
        let t = Translation::invert();
        list.map(|c| t.apply(c));
        assert_eq!(list.to_decoded().unwrap(), b"@@  \n @@ \n");
    }

    #[test]
    fn collapsing_translation_merges_runs() {
        let mut list = RunList::from_decoded(b"aabbb").unwrap();
        let t = Translation::new().with(b'a', b'z').with(b'b', b'z');
        list.map(|c| t.apply(c));
        assert_eq!(list.to_encoded().unwrap(), b"z5\n");
    }
}
