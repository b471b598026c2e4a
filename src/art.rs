//! Reading ascii art into a run list and writing it back out.
//!
//! Writers are flushed but never closed here; the caller owns them.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::list::RunList;

/// Reads every byte of `r` into a new list, one append per byte.
pub fn read<R: Read>(r: R) -> Result<RunList> {
    let mut list = RunList::new();
    for byte in BufReader::new(r).bytes() {
        list.push(byte?)?;
    }
    debug!(
        "read {} characters into {} runs",
        list.len(),
        list.runs().len()
    );
    Ok(list)
}

/// Reads a list from a file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<RunList> {
    read(File::open(path)?)
}

/// Writes the decoded form of `list` to `w`.
pub fn print<W: Write>(list: &RunList, w: &mut W) -> Result<()> {
    let text = list
        .to_decoded()
        .map_err(|err| Error::Failure(format!("decoded export: {}", err)))?;
    write_out(w, &text)
}

/// Writes the encoded form of `list` to `w`.
pub fn print_encoded<W: Write>(list: &RunList, w: &mut W) -> Result<()> {
    let text = list
        .to_encoded()
        .map_err(|err| Error::Failure(format!("encoded export: {}", err)))?;
    write_out(w, &text)
}

/// Writes the decoded form of `list` to a new file.
pub fn print_file<P: AsRef<Path>>(list: &RunList, path: P) -> Result<()> {
    print(list, &mut File::create(path)?)
}

/// Writes the encoded form of `list` to a new file.
pub fn print_encoded_file<P: AsRef<Path>>(list: &RunList, path: P) -> Result<()> {
    print_encoded(list, &mut File::create(path)?)
}

fn write_out<W: Write>(w: &mut W, bytes: &[u8]) -> Result<()> {
    w.write_all(bytes)?;
    w.flush()?;
    Ok(())
}
