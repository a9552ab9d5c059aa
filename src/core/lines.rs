//! Line-by-line character reversal between two files.
//!
//! The whole source is read before the destination is opened, so a failed
//! read never leaves a truncated output behind.

use crate::error::TextError;
use crate::utils::file::ensure_parent_exists;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Default source used by the reference invocation
pub const DEFAULT_INPUT: &str = "input.txt";
/// Default destination used by the reference invocation
pub const DEFAULT_OUTPUT: &str = "output.txt";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReverseSummary {
    pub lines: usize,
    pub bytes_written: u64,
}

/// Reverse a line by Unicode scalar value.
pub fn reverse_line(line: &str) -> String {
    line.chars().rev().collect()
}

/// Read every line of `path`, without the `\n` terminator.
///
/// Only `\n` ends a line; a `\r` is line content and survives a round trip.
/// A missing final newline is fine.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, TextError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TextError::from_io(path, e))?;
    let io_err = |source| TextError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    };

    BufReader::new(file)
        .split(b'\n')
        .map(|chunk| {
            let bytes = chunk.map_err(io_err)?;
            String::from_utf8(bytes)
                .map_err(|e| io_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
        })
        .collect()
}

/// Write `lines` to `path`, each followed by exactly one `\n`.
///
/// Returns the number of bytes written.
pub fn write_lines<P, S>(path: P, lines: &[S]) -> Result<u64, TextError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let io_err = |source| TextError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    };

    ensure_parent_exists(path)?;

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    let mut written = 0u64;
    for line in lines {
        let line = line.as_ref();
        writer.write_all(line.as_bytes()).map_err(io_err)?;
        writer.write_all(b"\n").map_err(io_err)?;
        written += line.len() as u64 + 1;
    }
    writer.flush().map_err(io_err)?;

    Ok(written)
}

/// Reverse every line of `source` and write the result to `destination`.
pub fn reverse_file<P, Q>(source: P, destination: Q) -> Result<ReverseSummary, TextError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let source = source.as_ref();
    let destination = destination.as_ref();

    let lines = read_lines(source)?;
    log::debug!("Read {} lines from {}", lines.len(), source.display());

    let reversed: Vec<String> = lines.iter().map(|l| reverse_line(l)).collect();
    let bytes_written = write_lines(destination, &reversed)?;
    log::debug!(
        "Wrote {} bytes to {}",
        bytes_written,
        destination.display()
    );

    Ok(ReverseSummary {
        lines: reversed.len(),
        bytes_written,
    })
}
