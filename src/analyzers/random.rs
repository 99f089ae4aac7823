//! Statistics on the random instances.
//!
//! Produces `random.data` (mean, median and failure percentage of every
//! method, one row per size) and `random_success.data` (one row per method).

use crate::analyzers::types::{MethodStats, MethodSuccess, RandomReport, SizeStats};
use crate::analyzers::utility::{percentage, success_percentage};
use crate::config::{RunConfig, TotalsMode};
use crate::error::Result;
use crate::matrix::ResultMatrix;
use crate::methods::MethodTable;
use crate::output::{TableWriter, format_float, quote_name};
use tracing::{debug, info, warn};

pub const SIZES_FILE: &str = "random.data";
pub const TOTALS_FILE: &str = "random_success.data";

/// Mean and median of each method's value column and the percentage of
/// failed trials.
pub fn method_stats(matrix: &ResultMatrix, methods: &MethodTable) -> Vec<MethodStats> {
    let means = matrix.column_means();
    let medians = matrix.column_medians();
    let sums = matrix.column_sums();

    methods
        .iter()
        .map(|m| MethodStats {
            mean: means[m.value_column],
            median: medians[m.value_column],
            fails: sums[m.fail_column],
            fail_percent: percentage(sums[m.fail_column], matrix.rows()),
        })
        .collect()
}

/// Success per method using only the statistics of `last`.
pub fn last_size_success(last: &SizeStats, methods: &MethodTable) -> Vec<MethodSuccess> {
    methods
        .iter()
        .zip(&last.methods)
        .map(|(method, stats)| MethodSuccess {
            method: method.name.clone(),
            success_percent: 100.0 - stats.fail_percent,
        })
        .collect()
}

/// Success per method over every trial of every size in `sizes`.
pub fn all_sizes_success(sizes: &[SizeStats], methods: &MethodTable) -> Vec<MethodSuccess> {
    let observations: usize = sizes.iter().map(|s| s.observations).sum();

    methods
        .iter()
        .enumerate()
        .map(|(i, method)| {
            let fails: f64 = sizes.iter().map(|s| s.methods[i].fails).sum();
            MethodSuccess {
                method: method.name.clone(),
                success_percent: success_percentage(fails, observations),
            }
        })
        .collect()
}

/// Runs the random job over every configured size.
#[tracing::instrument(
    skip_all,
    fields(input_dir = %config.input_dir.display(), totals_mode = ?config.totals_mode)
)]
pub fn aggregate_random(config: &RunConfig) -> Result<RandomReport> {
    let methods = &config.methods;
    let mut sizes = Vec::with_capacity(config.random_sizes.len());

    let mut table = TableWriter::create(&config.output(SIZES_FILE))?;
    for size in config.random_sizes.iter() {
        let path = config.random_input(size);
        let matrix = ResultMatrix::load(&path)?;
        methods.check_matrix(&matrix, &path)?;

        let stats = method_stats(&matrix, methods);

        let mut record = vec![size.to_string()];
        for s in &stats {
            record.push(format_float(s.mean));
            record.push(format_float(s.median));
            record.push(format_float(s.fail_percent));
        }
        record.push(String::new());
        table.write_record(&record)?;

        debug!(size, rows = matrix.rows(), "Processed random size");

        sizes.push(SizeStats {
            size,
            observations: matrix.rows(),
            methods: stats,
        });
    }
    info!(path = %table.path().display(), rows = sizes.len(), "Wrote per-size table");

    let last_size_totals = match sizes.last() {
        Some(last) => last_size_success(last, methods),
        None => Vec::new(),
    };
    let all_sizes_totals = all_sizes_success(&sizes, methods);

    let (selected, last_size) = match config.totals_mode {
        TotalsMode::LastSize => (&last_size_totals, sizes.last().map(|s| s.size)),
        TotalsMode::AllSizes => (&all_sizes_totals, None),
    };
    if let Some(size) = last_size {
        warn!(size, "Random totals reflect the last size only, not all sizes");
    }

    let mut table = TableWriter::create(&config.output(TOTALS_FILE))?;
    for total in selected {
        table.write_record([
            quote_name(&total.method),
            format_float(total.success_percent),
        ])?;
    }
    info!(path = %table.path().display(), "Wrote totals table");

    Ok(RandomReport {
        totals_mode: config.totals_mode,
        sizes,
        last_size_totals,
        all_sizes_totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn two_methods() -> MethodTable {
        MethodTable::from_pairs(&[("a", "A"), ("b", "B")])
    }

    fn size_stats(size: u32, text: &str) -> SizeStats {
        let matrix = ResultMatrix::parse(text, Path::new("m")).unwrap();
        SizeStats {
            size,
            observations: matrix.rows(),
            methods: method_stats(&matrix, &two_methods()),
        }
    }

    #[test]
    fn test_method_stats() {
        let stats = size_stats(1, "1 0 2 1\n1 1 2 0\n4 1 8 0\n6 0 8 0\n");
        assert_eq!(stats.methods[0].mean(), 3.0);
        assert_eq!(stats.methods[0].median(), 2.5);
        assert_eq!(stats.methods[0].fail_percent(), 50.0);
        assert_eq!(stats.methods[1].mean(), 5.0);
        assert_eq!(stats.methods[1].median(), 5.0);
        assert_eq!(stats.methods[1].fail_percent(), 25.0);
    }

    #[test]
    fn test_last_size_versus_all_sizes() {
        let sizes = vec![
            size_stats(1, "1 1 1 1\n1 1 1 1\n"),
            size_stats(2, "1 0 1 1\n1 0 1 0\n"),
        ];
        let methods = two_methods();

        let last = last_size_success(sizes.last().unwrap(), &methods);
        assert_eq!(last[0].success_percent(), 100.0);
        assert_eq!(last[1].success_percent(), 50.0);

        let all = all_sizes_success(&sizes, &methods);
        assert_eq!(all[0].success_percent(), 50.0);
        assert_eq!(all[1].success_percent(), 25.0);
    }
}
