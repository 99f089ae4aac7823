//! Success rates on the loop-free instances.
//!
//! Produces `loop_free_success.data` (one row per size) and
//! `loop_free_success_total.data` (one row per method).

use crate::analyzers::types::{FailureTally, LoopFreeReport, MethodSuccess, SizeSuccess};
use crate::analyzers::utility::success_percentage;
use crate::config::RunConfig;
use crate::error::{Result, TableError};
use crate::matrix::ResultMatrix;
use crate::methods::MethodTable;
use crate::output::{TableWriter, format_float, quote_name};
use tracing::{debug, info};

pub const SIZES_FILE: &str = "loop_free_success.data";
pub const TOTALS_FILE: &str = "loop_free_success_total.data";

/// Per-method fail sums of a single matrix, in method table order.
pub fn fail_sums(matrix: &ResultMatrix, methods: &MethodTable) -> Vec<f64> {
    let sums = matrix.column_sums();
    methods.iter().map(|m| sums[m.fail_column]).collect()
}

/// Per-method success percentages given fail sums over `observations` trials.
pub fn success_rates(fails: &[f64], observations: usize) -> Vec<f64> {
    fails
        .iter()
        .map(|&f| success_percentage(f, observations))
        .collect()
}

/// Overall success per method over everything accumulated in `tally`.
///
/// When `expected` is set it must equal the number of trials actually read.
pub fn overall_success(
    tally: &FailureTally,
    methods: &MethodTable,
    expected: Option<usize>,
) -> Result<Vec<MethodSuccess>> {
    let actual = tally.observations();
    if let Some(expected) = expected {
        if expected != actual {
            return Err(TableError::TotalCountMismatch { expected, actual });
        }
    }

    Ok(methods
        .iter()
        .zip(tally.method_totals())
        .map(|(method, fails)| MethodSuccess {
            method: method.name.clone(),
            success_percent: success_percentage(fails, actual),
        })
        .collect())
}

/// Runs the loop-free job over every configured size.
#[tracing::instrument(skip_all, fields(input_dir = %config.input_dir.display()))]
pub fn aggregate_loop_free(config: &RunConfig) -> Result<LoopFreeReport> {
    let methods = &config.methods;
    let mut tally = FailureTally::default();
    let mut sizes = Vec::with_capacity(config.loop_free_sizes.len());

    let mut table = TableWriter::create(&config.output(SIZES_FILE))?;
    for size in config.loop_free_sizes.iter() {
        let path = config.loop_free_input(size);
        let matrix = ResultMatrix::load(&path)?;
        methods.check_matrix(&matrix, &path)?;

        let fails = fail_sums(&matrix, methods);
        let success = success_rates(&fails, matrix.rows());

        let mut record = vec![size.to_string()];
        record.extend(success.iter().copied().map(format_float));
        record.push(String::new());
        table.write_record(&record)?;

        debug!(size, rows = matrix.rows(), ?success, "Processed loop-free size");

        tally.add(fails, matrix.rows());
        sizes.push(SizeSuccess {
            size,
            observations: matrix.rows(),
            success_percent: success,
        });
    }
    info!(path = %table.path().display(), rows = sizes.len(), "Wrote per-size table");

    let totals = overall_success(&tally, methods, config.expected_observations)?;

    let mut table = TableWriter::create(&config.output(TOTALS_FILE))?;
    for total in &totals {
        table.write_record([
            quote_name(&total.method),
            format_float(total.success_percent),
        ])?;
    }
    info!(
        path = %table.path().display(),
        observations = tally.observations(),
        "Wrote totals table"
    );

    Ok(LoopFreeReport {
        sizes,
        observations: tally.observations(),
        totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn two_methods() -> MethodTable {
        MethodTable::from_pairs(&[("a", "A"), ("b", "B")])
    }

    #[test]
    fn test_worked_example() {
        let matrix = ResultMatrix::parse("1 0 2 1\n1 1 2 0\n", Path::new("m")).unwrap();
        let fails = fail_sums(&matrix, &two_methods());
        assert_eq!(fails, vec![1.0, 1.0]);
        assert_eq!(success_rates(&fails, matrix.rows()), vec![50.0, 50.0]);
    }

    #[test]
    fn test_no_failures_and_all_failures() {
        let clean = ResultMatrix::parse("3 0 4 0\n5 0 6 0\n", Path::new("m")).unwrap();
        let broken = ResultMatrix::parse("3 1 4 1\n5 1 6 1\n", Path::new("m")).unwrap();
        let methods = two_methods();

        let rates = success_rates(&fail_sums(&clean, &methods), clean.rows());
        assert_eq!(rates, vec![100.0, 100.0]);

        let rates = success_rates(&fail_sums(&broken, &methods), broken.rows());
        assert_eq!(rates, vec![0.0, 0.0]);
    }

    #[test]
    fn test_tally_accumulates_per_size_sums() {
        let mut tally = FailureTally::default();
        tally.add(vec![1.0, 0.0], 4);
        tally.add(vec![2.0, 3.0], 4);
        tally.add(vec![0.0, 1.0], 2);

        assert_eq!(tally.method_totals(), vec![3.0, 4.0]);
        assert_eq!(tally.observations(), 10);

        let totals = overall_success(&tally, &two_methods(), None).unwrap();
        assert_eq!(totals[0].success_percent(), 70.0);
        assert_eq!(totals[1].success_percent(), 60.0);
        assert_eq!(totals[1].method(), "B");
    }

    #[test]
    fn test_pinned_total_mismatch() {
        let mut tally = FailureTally::default();
        tally.add(vec![0.0, 0.0], 45);

        let err = overall_success(&tally, &two_methods(), Some(495)).unwrap_err();
        assert!(matches!(
            err,
            TableError::TotalCountMismatch {
                expected: 495,
                actual: 45
            }
        ));
        assert!(overall_success(&tally, &two_methods(), Some(45)).is_ok());
    }
}
