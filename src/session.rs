//! Load phase and command loop

use crate::commands::dispatch;
use crate::domain::Polygon;
use crate::output::ReplyWriter;
use crate::parser::{Cursor, read_polygon};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Outcome of the load phase
#[derive(Debug, Default)]
pub struct LoadReport {
    pub polygons: Vec<Polygon>,
    /// 1-based line numbers of rejected records
    pub skipped: Vec<usize>,
}

/// Parse one record line
///
/// The whole line must be consumed: a valid record followed by anything but
/// whitespace is rejected along with the rest of its line.
pub fn parse_record_line(line: &str) -> Option<Polygon> {
    let mut cursor = Cursor::new(line);
    let polygon = read_polygon(&mut cursor)?;
    if !cursor.is_at_end() {
        return None;
    }
    Some(polygon)
}

/// Read every record line, skipping and counting the malformed ones
///
/// Lines that are not valid UTF-8 count as malformed records. Only a failing
/// reader ends the load.
pub fn load_polygons<R: BufRead>(input: R) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for (index, bytes) in input.split(b'\n').enumerate() {
        let bytes = bytes.context("Failed to read polygon input")?;
        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(_) => {
                log::debug!("Skipping non-UTF-8 record on line {}", index + 1);
                report.skipped.push(index + 1);
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_record_line(&line) {
            Some(polygon) => report.polygons.push(polygon),
            None => {
                log::debug!("Skipping malformed record on line {}: {:?}", index + 1, line);
                report.skipped.push(index + 1);
            }
        }
    }

    log::info!(
        "Loaded {} polygons ({} malformed lines skipped)",
        report.polygons.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// Answer one command per input line until the input is exhausted
///
/// Command failures, including lines that are not valid UTF-8, are reported
/// as the invalid marker and never end the loop. Only I/O errors are returned.
pub fn run_commands<R: BufRead, W: Write>(
    polygons: &[Polygon],
    input: R,
    writer: &mut ReplyWriter<W>,
) -> Result<()> {
    for bytes in input.split(b'\n') {
        let bytes = bytes.context("Failed to read command")?;
        let Ok(line) = String::from_utf8(bytes) else {
            log::debug!("Rejecting non-UTF-8 command line");
            writer
                .invalid()
                .context("Failed to write command result")?;
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        let written = match dispatch(&line, polygons) {
            Ok(reply) => writer.reply(&reply),
            Err(e) => {
                log::debug!("{:?} rejected: {}", line.trim(), e);
                writer.invalid()
            }
        };
        written.context("Failed to write command result")?;
    }
    Ok(())
}
