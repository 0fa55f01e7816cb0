//! Turns program files into the byte image handed to [`Core::load`].
//!
//! [`Core::load`]: crate::core::Core::load

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One base-2 number per line; lines not starting with a digit are skipped.
    Ls8,
    /// Bytes copied as-is.
    Raw,
}

/// Parses `.ls8` source text. Anything after the leading binary digits of a
/// line is ignored, and values keep only their low 8 bits.
pub fn parse_ls8(text: &str) -> Vec<u8> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<u8> {
    let digits: Vec<u8> = line
        .trim_start()
        .bytes()
        .take_while(|b| *b == b'0' || *b == b'1')
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(
        digits
            .iter()
            .fold(0u8, |acc, d| (acc << 1) | (d - b'0')),
    )
}

pub fn read_program<P: AsRef<Path>>(path: P, format: Format) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| Error::ProgramRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match format {
        Format::Raw => data,
        Format::Ls8 => parse_ls8(&String::from_utf8_lossy(&data)),
    })
}
