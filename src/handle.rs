//! Entry points working on possibly absent list handles.
//!
//! These mirror the classic handle-based run list interface: every
//! operation accepts an optional list (and, for `map`, an optional
//! function) and reports `Error::NullArgument` when one is missing.
//! Indexes are signed so that negative positions are reported as
//! `Error::IndexOutOfBounds` instead of being unrepresentable.

use std::convert::TryFrom;

use crate::error::{Error, Result};
use crate::list::RunList;

/// Creates a new empty list.
pub fn create() -> RunList {
    RunList::new()
}

/// Releases every run of the list. Absent lists are ignored.
pub fn destroy(list: Option<RunList>) {
    drop(list);
}

pub fn append(list: Option<&mut RunList>, c: u8) -> Result<()> {
    list.ok_or(Error::NullArgument)?.push(c)
}

/// Total number of characters, or `None` for an absent list.
pub fn size(list: Option<&RunList>) -> Option<usize> {
    list.map(RunList::len)
}

pub fn get(list: Option<&RunList>, index: isize) -> Result<u8> {
    let list = list.ok_or(Error::NullArgument)?;
    list.get(checked_index(list, index)?)
}

pub fn remove(list: Option<&mut RunList>, index: isize) -> Result<()> {
    let list = list.ok_or(Error::NullArgument)?;
    let index = checked_index(list, index)?;
    list.remove(index).map(|_| ())
}

/// Exports the decoded form.
pub fn export_to_string(list: Option<&RunList>) -> Result<Vec<u8>> {
    list.ok_or(Error::NullArgument)?.to_decoded()
}

/// Exports the encoded form.
pub fn export_encoded(list: Option<&RunList>) -> Result<Vec<u8>> {
    list.ok_or(Error::NullArgument)?.to_encoded()
}

pub fn map<F: FnMut(u8) -> u8>(list: Option<&mut RunList>, f: Option<F>) -> Result<()> {
    match (list, f) {
        (Some(list), Some(f)) => {
            list.map(f);
            Ok(())
        }
        _ => Err(Error::NullArgument),
    }
}

fn checked_index(list: &RunList, index: isize) -> Result<usize> {
    usize::try_from(index).map_err(|_| Error::IndexOutOfBounds {
        index: index as i128,
        len: list.len(),
    })
}
