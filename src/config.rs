//! Run configuration shared by both aggregation jobs.

use crate::error::{Result, TableError};
use crate::methods::MethodTable;
use serde::Serialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Inclusive range of instance sizes processed by a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    min: u32,
    max: u32,
}

impl SizeRange {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(TableError::InvalidConfig(format!(
                "size range {min}..={max} is empty"
            )));
        }
        Ok(Self { min, max })
    }

    /// Sizes 4 to 14 of the loop-free experiments.
    pub fn loop_free() -> Self {
        Self { min: 4, max: 14 }
    }

    /// Sizes 1 to 10 of the random experiments.
    pub fn random() -> Self {
        Self { min: 1, max: 10 }
    }

    pub fn iter(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    pub fn len(&self) -> usize {
        (self.max - self.min) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// Which statistics feed the random job's totals table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TotalsMode {
    /// Only the last processed size, as the historical tables did.
    #[default]
    LastSize,
    /// Every row of every processed size.
    AllSizes,
}

/// Settings for one run of the tool.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub methods: MethodTable,
    pub loop_free_sizes: SizeRange,
    pub random_sizes: SizeRange,
    /// Pinned total of loop-free observations, checked against what was read.
    pub expected_observations: Option<usize>,
    pub totals_mode: TotalsMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            methods: MethodTable::default(),
            loop_free_sizes: SizeRange::loop_free(),
            random_sizes: SizeRange::random(),
            expected_observations: None,
            totals_mode: TotalsMode::default(),
        }
    }
}

impl RunConfig {
    /// Config reading from `input_dir` and writing to `output_dir` with
    /// every other setting at its default.
    pub fn with_dirs(input_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            input_dir: input_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn loop_free_input(&self, size: u32) -> PathBuf {
        self.input_dir.join(format!("loop-free-{size:02}"))
    }

    pub fn random_input(&self, size: u32) -> PathBuf {
        self.input_dir.join(format!("random-{size}"))
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}
