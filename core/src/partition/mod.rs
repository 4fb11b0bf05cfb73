//! Header / data / trailer rewriting of line oriented files.
//!
//! The first line is the header. Following lines are scanned in
//! [`ScanState::ExpectData`] until a line without a space is met, which moves
//! the scanner to [`ScanState::ExpectTrailer`]. The output holds the header,
//! the data lines in reverse order, then the trailer.
//!
//! [`PartitionMode::Compat`] reproduces the historical reader exactly: a data
//! line is skipped and the line *after* it is collected, and the trailer is the
//! first non-data line glued to the raw rest of the file.
//! [`PartitionMode::Records`] collects data lines themselves and keeps the
//! trailer's line structure.

mod scan;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PartitionError;

pub use scan::{ScanState, DATA_DELIMITER};
use scan::{is_data_line, read_line, read_rest, read_rest_lines};

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionMode {
    Compat,
    Records,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub header: String,
    /// In insertion order.
    pub data: Vec<String>,
    pub trailer: String,
}

impl Partition {
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write_line(out, &self.header)?;
        for line in self.data.iter().rev() {
            write_line(out, line)?;
        }
        write_line(out, &self.trailer)?;
        out.flush()
    }
}

fn write_line<W: Write>(out: &mut W, line: &str) -> std::io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.write_all(LINE_SEPARATOR.as_bytes())
}

/// Splits `reader` into header, data and trailer. Input that ends before a
/// header, between a data line and the line it pairs with, or before any
/// trailer line is [`PartitionError::Malformed`].
pub fn partition<R: BufRead>(
    mut reader: R,
    mode: PartitionMode,
) -> Result<Partition, PartitionError> {
    let header =
        read_line(&mut reader)?.ok_or(PartitionError::Malformed("missing header line"))?;
    let mut data = Vec::new();
    let mut state = ScanState::ExpectData;

    let trailer = loop {
        match state {
            ScanState::ExpectData => {
                let line = read_line(&mut reader)?
                    .ok_or(PartitionError::Malformed("input ended before the trailer"))?;
                if !is_data_line(&line) {
                    state = ScanState::ExpectTrailer { first: line };
                    continue;
                }
                match mode {
                    PartitionMode::Compat => {
                        let next = read_line(&mut reader)?.ok_or(PartitionError::Malformed(
                            "data line without a following line",
                        ))?;
                        data.push(next);
                    }
                    PartitionMode::Records => data.push(line),
                }
            }
            ScanState::ExpectTrailer { first } => {
                break match mode {
                    PartitionMode::Compat => first + &read_rest(&mut reader)?,
                    PartitionMode::Records => {
                        let mut lines = vec![first];
                        lines.extend(read_rest_lines(&mut reader)?);
                        lines.join(LINE_SEPARATOR)
                    }
                };
            }
        }
    };

    Ok(Partition {
        header,
        data,
        trailer,
    })
}

/// Rewrites `input` into `output`. The output file is only created once the
/// input has been read completely.
pub fn partition_file(
    input: Option<&Path>,
    output: Option<&Path>,
    mode: PartitionMode,
) -> Result<Partition, PartitionError> {
    let input = input.ok_or(PartitionError::MissingInputPath)?;
    if !input.is_file() {
        return Err(PartitionError::InputNotFound);
    }
    let output = output.ok_or(PartitionError::MissingOutputPath)?;

    let parsed = {
        let reader = BufReader::new(File::open(input)?);
        partition(reader, mode)?
    };

    let mut writer = BufWriter::new(File::create(output)?);
    parsed.write_to(&mut writer)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        mode = ?mode,
        data_lines = parsed.data.len(),
        "partitioned file"
    );
    Ok(parsed)
}
