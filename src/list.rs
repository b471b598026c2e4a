use core::fmt;
use std::convert::TryFrom;
use std::iter::FusedIterator;
use std::str::FromStr;

use log::{debug, trace};

use crate::codec;
use crate::error::{Error, Result};
use crate::run::Run;

/// An ordered sequence of runs representing a byte string.
///
/// Adjacent runs never share a character and every run has a count of at
/// least 1. The empty list holds no runs at all. Each run is owned by the
/// list alone; the successor of run `i` is run `i + 1`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RunList {
    pub(crate) runs: Vec<Run>,
    pub(crate) len: usize,
}

impl RunList {
    /// Creates a new, logically empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from a decoded byte string.
    pub fn from_decoded(bytes: &[u8]) -> Result<Self> {
        let mut list = Self::new();
        list.try_extend(bytes.iter().copied())?;
        Ok(list)
    }

    /// Parses the `<char><count>\n` encoded form.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self> {
        codec::decode(bytes)
    }

    /// Total number of characters, the sum of all run counts.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The runs of the list in order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Iterates over the decoded characters.
    pub fn iter(&self) -> Bytes<'_> {
        Bytes {
            runs: &self.runs,
            idx: 0,
            repeat: 0,
            left: self.len,
        }
    }

    /// Appends one occurrence of `c` to the end of the list.
    ///
    /// On allocation failure the list is left unchanged.
    pub fn push(&mut self, c: u8) -> Result<()> {
        match self.runs.last_mut() {
            Some(last) if last.character == c => last.count += 1,
            _ => {
                self.runs.try_reserve(1).map_err(|_| Error::OutOfMemory)?;
                self.runs.push(Run::new(c, 1));
            }
        }
        self.len += 1;
        trace!("appended {:#04x}, {} runs", c, self.runs.len());
        Ok(())
    }

    /// Appends every byte of `iter`, stopping at the first failure.
    pub fn try_extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) -> Result<()> {
        for c in iter {
            self.push(c)?;
        }
        Ok(())
    }

    /// Appends a whole run, merging it into the last one when characters match.
    /// Zero-count runs are ignored.
    pub(crate) fn push_run(&mut self, run: Run) -> Result<()> {
        if run.count == 0 {
            return Ok(());
        }
        match self.runs.last_mut() {
            Some(last) if last.character == run.character => last.count += run.count,
            _ => {
                self.runs.try_reserve(1).map_err(|_| Error::OutOfMemory)?;
                self.runs.push(run);
            }
        }
        self.len += run.count;
        Ok(())
    }

    /// Returns the position of the run holding logical `index`.
    fn locate(&self, index: usize) -> Result<usize> {
        let oob = || Error::IndexOutOfBounds {
            index: index as i128,
            len: self.len,
        };
        if index >= self.len {
            return Err(oob());
        }
        let mut before = 0;
        for (i, run) in self.runs.iter().enumerate() {
            if index < before + run.count {
                return Ok(i);
            }
            before += run.count;
        }
        Err(oob())
    }

    /// Returns the character at logical `index`.
    pub fn get(&self, index: usize) -> Result<u8> {
        let at = self.locate(index)?;
        Ok(self.runs[at].character)
    }

    /// Removes one occurrence of the character at logical `index` and
    /// returns it.
    ///
    /// A run whose count drops to zero is spliced out; if its former
    /// neighbours now share a character they are merged into one run.
    pub fn remove(&mut self, index: usize) -> Result<u8> {
        let at = self.locate(index)?;
        let run = &mut self.runs[at];
        let removed = run.character;
        run.count -= 1;
        self.len -= 1;
        if run.count == 0 {
            self.runs.remove(at);
            debug!("spliced out run {} ({:#04x})", at, removed);
            // `at` now names the successor, if there is one.
            if at > 0 && at < self.runs.len() {
                let (prev, next) = (self.runs[at - 1], self.runs[at]);
                if prev.character == next.character {
                    self.runs.remove(at);
                    self.runs[at - 1].count += next.count;
                    debug!(
                        "merged runs around {} into {} x{:#04x}",
                        at,
                        self.runs[at - 1].count,
                        prev.character
                    );
                }
            }
        }
        Ok(removed)
    }

    /// Replaces every character `c` with `f(c)`.
    ///
    /// `f` is called once per run. Runs that end up adjacent with equal
    /// characters are merged afterwards, so the list stays canonical.
    pub fn map<F: FnMut(u8) -> u8>(&mut self, mut f: F) {
        for run in self.runs.iter_mut() {
            run.character = f(run.character);
        }
        let before = self.runs.len();
        self.coalesce();
        if self.runs.len() != before {
            debug!("map merged {} runs into {}", before, self.runs.len());
        }
    }

    fn coalesce(&mut self) {
        self.runs.dedup_by(|next, prev| {
            if next.character == prev.character {
                prev.count += next.count;
                true
            } else {
                false
            }
        });
    }

    /// Exports the decoded form: every run's character repeated `count` times.
    pub fn to_decoded(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.try_reserve_exact(self.len)
            .map_err(|_| Error::OutOfMemory)?;
        for run in &self.runs {
            out.resize(out.len() + run.count, run.character);
        }
        Ok(out)
    }

    /// Exports the encoded form, one `<char><count>\n` record per run.
    pub fn to_encoded(&self) -> Result<Vec<u8>> {
        codec::encode(&self.runs)
    }
}

/// Writes the encoded form, showing characters as Latin-1.
impl fmt::Display for RunList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            write!(f, "{}", run)?;
        }
        Ok(())
    }
}

/// Parses the encoded form.
impl FromStr for RunList {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::from_encoded(s.as_bytes())
    }
}

/// Equivalent to `RunList::from_encoded`.
impl TryFrom<&[u8]> for RunList {
    type Error = Error;
    fn try_from(value: &[u8]) -> Result<Self> {
        Self::from_encoded(value)
    }
}

impl<'a> IntoIterator for &'a RunList {
    type Item = u8;
    type IntoIter = Bytes<'a>;
    fn into_iter(self) -> Bytes<'a> {
        self.iter()
    }
}

/// Iterator over the decoded characters of a `RunList`.
#[derive(Debug, Clone)]
pub struct Bytes<'a> {
    runs: &'a [Run],
    idx: usize,
    repeat: usize,
    left: usize,
}

impl<'a> Iterator for Bytes<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let run = self.runs.get(self.idx)?;
        self.repeat += 1;
        if self.repeat >= run.count {
            self.idx += 1;
            self.repeat = 0;
        }
        self.left -= 1;
        Some(run.character)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl ExactSizeIterator for Bytes<'_> {}

impl FusedIterator for Bytes<'_> {}
