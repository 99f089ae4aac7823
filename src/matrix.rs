//! Loading of whitespace-separated numeric result matrices.
//!
//! Each input file holds one trial per line, with alternating
//! `(value, fail-flag)` columns for every benchmarked method. Blank lines
//! and `#` comments are ignored.

use crate::analyzers::utility::{mean, median};
use crate::error::{Result, TableError};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// A rectangular table of trial observations, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl ResultMatrix {
    /// Reads and parses the matrix stored at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                TableError::MissingInput {
                    path: path.to_path_buf(),
                }
            } else {
                TableError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let matrix = Self::parse(&text, path)?;
        debug!(
            path = %path.display(),
            rows = matrix.rows,
            cols = matrix.cols,
            "Loaded result matrix"
        );
        Ok(matrix)
    }

    /// Parses matrix text. `origin` is only used in error reports.
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        let mut cols = None;
        let mut data = Vec::new();
        let mut rows = 0;

        for (idx, line) in text.lines().enumerate() {
            let line = match line.split_once('#') {
                Some((values, _comment)) => values,
                None => line,
            }
            .trim();
            if line.is_empty() {
                continue;
            }

            let malformed = |reason: String| TableError::Malformed {
                path: origin.to_path_buf(),
                line: idx + 1,
                reason,
            };

            let before = data.len();
            for token in line.split_whitespace() {
                let value: f64 = token
                    .parse()
                    .map_err(|_| malformed(format!("not a number: {token:?}")))?;
                data.push(value);
            }

            let width = data.len() - before;
            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(malformed(format!(
                        "expected {expected} columns, found {width}"
                    )));
                }
                Some(_) => {}
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(TableError::EmptyMatrix {
                path: origin.to_path_buf(),
            });
        }

        Ok(Self {
            rows,
            cols: cols.unwrap_or(0),
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Copies out column `index`, or `None` if the matrix is narrower.
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        (index < self.cols).then(|| self.column_values(index))
    }

    fn column_values(&self, index: usize) -> Vec<f64> {
        self.data
            .iter()
            .skip(index)
            .step_by(self.cols)
            .copied()
            .collect()
    }

    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.cols];
        for row in self.data.chunks(self.cols) {
            for (sum, value) in sums.iter_mut().zip(row) {
                *sum += value;
            }
        }
        sums
    }

    pub fn column_means(&self) -> Vec<f64> {
        (0..self.cols).map(|i| mean(&self.column_values(i))).collect()
    }

    pub fn column_medians(&self) -> Vec<f64> {
        (0..self.cols).map(|i| median(&self.column_values(i))).collect()
    }
}
