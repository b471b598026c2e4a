use core::fmt::Display;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when manipulating or decoding run lists.
#[derive(Debug, Clone)]
pub enum Error {
    /// A required list handle or mapping function was absent.
    NullArgument,
    /// An allocation failed; the list was left untouched.
    OutOfMemory,
    /// Index outside `[0, len)`. Wide enough for any `usize` or `isize` index.
    IndexOutOfBounds { index: i128, len: usize },
    /// Generic failure wrapping an export problem.
    Failure(String),

    /// Encoded record ends before its line terminator.
    RecordTruncated(usize),
    /// Encoded record has no count digits after its character.
    RecordMissingCount(usize),
    /// Encoded record count starts with a zero digit.
    RecordLeadingZero(usize),
    /// Encoded record count is zero.
    RecordZeroCount(usize),
    /// Encoded record count does not fit in usize.
    RecordCountOverflow(usize),
    /// Encoded record count is followed by something other than a newline.
    RecordBadTerminator(usize),

    /// I/O error occurred.
    Io(Arc<std::io::Error>),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.into())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NullArgument => write!(f, "required argument is absent"),
            Error::OutOfMemory => write!(f, "allocation failed"),
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for list of length {}", index, len)
            }
            Error::Failure(s) => write!(f, "failure: {}", s),
            Error::RecordTruncated(at) => {
                write!(f, "record at byte {} ends without line terminator", at)
            }
            Error::RecordMissingCount(at) => write!(f, "record at byte {} has no count", at),
            Error::RecordLeadingZero(at) => {
                write!(f, "record at byte {} has count with leading zero", at)
            }
            Error::RecordZeroCount(at) => write!(f, "record at byte {} has zero count", at),
            Error::RecordCountOverflow(at) => {
                write!(f, "record at byte {} has count that overflows", at)
            }
            Error::RecordBadTerminator(at) => {
                write!(f, "record at byte {} is not terminated by newline", at)
            }
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        use Error::*;
        match (self, other) {
            (NullArgument, NullArgument) | (OutOfMemory, OutOfMemory) => true,
            (
                IndexOutOfBounds { index: a, len: la },
                IndexOutOfBounds { index: b, len: lb },
            ) => a == b && la == lb,
            (Failure(a), Failure(b)) => a == b,
            (RecordTruncated(a), RecordTruncated(b))
            | (RecordMissingCount(a), RecordMissingCount(b))
            | (RecordLeadingZero(a), RecordLeadingZero(b))
            | (RecordZeroCount(a), RecordZeroCount(b))
            | (RecordCountOverflow(a), RecordCountOverflow(b))
            | (RecordBadTerminator(a), RecordBadTerminator(b)) => a == b,
            (Io(a), Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}
