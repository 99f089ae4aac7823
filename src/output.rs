//! Output formatting and persistence for summary tables.
//!
//! Tables are tab-separated, headerless and unquoted, one record per line.

use crate::error::{Result, TableError};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A tab-separated table file, created (or truncated) on open.
///
/// Every record is flushed as soon as it is written, so rows produced before
/// a later failure remain on disk.
pub struct TableWriter {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl TableWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Opened output table");

        let writer = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);

        Ok(Self {
            path: path.to_path_buf(),
            writer,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_record<I, T>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer.write_record(fields)?;
        self.writer.flush().map_err(|source| TableError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

/// Formats a float the way the plotting scripts expect: shortest
/// round-trip digits, integral values keep a trailing `.0`, exponents are
/// signed and at least two digits wide.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Wraps a method name in double quotes for the totals tables.
pub fn quote_name(name: &str) -> String {
    format!("\"{name}\"")
}

/// Logs a report as pretty-printed JSON.
pub fn print_json<T: Serialize>(report: &T) -> anyhow::Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(100.0), "100.0");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(95.55555555555556), "95.55555555555556");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(f64::NAN), "nan");
    }

    #[test]
    fn test_quote_name() {
        assert_eq!(quote_name("Unaire (CNF)"), "\"Unaire (CNF)\"");
    }

    #[test]
    fn test_writer_keeps_trailing_empty_field_and_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.data");

        let mut table = TableWriter::create(&path).unwrap();
        table.write_record(["4", "100.0", "50.0", ""]).unwrap();
        table
            .write_record([quote_name("Neider et Jansen"), format_float(75.0)])
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "4\t100.0\t50.0\t\n\"Neider et Jansen\"\t75.0\n"
        );
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.data");
        fs::write(&path, "stale\n").unwrap();

        let mut table = TableWriter::create(&path).unwrap();
        table.write_record(["1"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "1\n");
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&[1.0, 2.0]).unwrap();
    }
}
