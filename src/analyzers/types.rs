//! Data types produced by the aggregation jobs.

use crate::config::TotalsMode;
use serde::Serialize;

/// Success percentage of one method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodSuccess {
    pub(crate) method: String,
    pub(crate) success_percent: f64,
}

impl MethodSuccess {
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn success_percent(&self) -> f64 {
        self.success_percent
    }
}

/// Per-method success percentages for a single loop-free size.
#[derive(Debug, Clone, Serialize)]
pub struct SizeSuccess {
    pub(crate) size: u32,
    pub(crate) observations: usize,
    pub(crate) success_percent: Vec<f64>,
}

impl SizeSuccess {
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn observations(&self) -> usize {
        self.observations
    }

    pub fn success_percent(&self) -> &[f64] {
        &self.success_percent
    }
}

/// Running failure counts of the loop-free job, one row per processed size.
#[derive(Debug, Default, Clone, Serialize)]
pub struct FailureTally {
    pub(crate) fails: Vec<Vec<f64>>,
    pub(crate) observations: usize,
}

impl FailureTally {
    /// Adds the per-method fail sums of one input file of `rows` trials.
    pub fn add(&mut self, fails: Vec<f64>, rows: usize) {
        self.fails.push(fails);
        self.observations += rows;
    }

    /// Total number of trials read so far.
    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Per-method fail sums over every processed size.
    pub fn method_totals(&self) -> Vec<f64> {
        let width = self.fails.first().map_or(0, Vec::len);
        let mut totals = vec![0.0; width];
        for row in &self.fails {
            for (total, fails) in totals.iter_mut().zip(row) {
                *total += fails;
            }
        }
        totals
    }
}

/// Outcome of the loop-free job.
#[derive(Debug, Clone, Serialize)]
pub struct LoopFreeReport {
    pub(crate) sizes: Vec<SizeSuccess>,
    pub(crate) observations: usize,
    pub(crate) totals: Vec<MethodSuccess>,
}

impl LoopFreeReport {
    pub fn sizes(&self) -> &[SizeSuccess] {
        &self.sizes
    }

    pub fn observations(&self) -> usize {
        self.observations
    }

    pub fn totals(&self) -> &[MethodSuccess] {
        &self.totals
    }
}

/// Mean and median of a method's value column plus its failure count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodStats {
    pub(crate) mean: f64,
    pub(crate) median: f64,
    pub(crate) fails: f64,
    pub(crate) fail_percent: f64,
}

impl MethodStats {
    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn median(&self) -> f64 {
        self.median
    }

    pub fn fails(&self) -> f64 {
        self.fails
    }

    pub fn fail_percent(&self) -> f64 {
        self.fail_percent
    }
}

/// Statistics for a single random-instance size.
#[derive(Debug, Clone, Serialize)]
pub struct SizeStats {
    pub(crate) size: u32,
    pub(crate) observations: usize,
    pub(crate) methods: Vec<MethodStats>,
}

impl SizeStats {
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn observations(&self) -> usize {
        self.observations
    }

    pub fn methods(&self) -> &[MethodStats] {
        &self.methods
    }
}

/// Outcome of the random job. Both totals variants are always computed;
/// only the selected one is written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct RandomReport {
    pub(crate) totals_mode: TotalsMode,
    pub(crate) sizes: Vec<SizeStats>,
    pub(crate) last_size_totals: Vec<MethodSuccess>,
    pub(crate) all_sizes_totals: Vec<MethodSuccess>,
}

impl RandomReport {
    /// Which totals variant was written to the totals table.
    pub fn totals_mode(&self) -> TotalsMode {
        self.totals_mode
    }

    /// The totals variant that was written to disk.
    pub fn written_totals(&self) -> &[MethodSuccess] {
        match self.totals_mode {
            TotalsMode::LastSize => &self.last_size_totals,
            TotalsMode::AllSizes => &self.all_sizes_totals,
        }
    }

    pub fn sizes(&self) -> &[SizeStats] {
        &self.sizes
    }

    pub fn last_size_totals(&self) -> &[MethodSuccess] {
        &self.last_size_totals
    }

    pub fn all_sizes_totals(&self) -> &[MethodSuccess] {
        &self.all_sizes_totals
    }
}
