/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the median of a slice of values. For an even count this is the
/// mean of the two middle values. Returns 0.0 for empty input and NaN when
/// any value is NaN.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    if values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Percentage of successful trials given the number of failed ones.
pub fn success_percentage(fails: f64, observations: usize) -> f64 {
    100.0 - fails * 100.0 / observations as f64
}

/// Share of `sum` over `observations`, as a percentage.
pub fn percentage(sum: f64, observations: usize) -> f64 {
    sum / observations as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), 3.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_median_with_nan_is_nan() {
        assert!(median(&[1.0, f64::NAN, 3.0]).is_nan());
        assert!(median(&[f64::NAN]).is_nan());
    }

    #[test]
    fn test_success_percentage_bounds() {
        assert_eq!(success_percentage(0.0, 9), 100.0);
        assert_eq!(success_percentage(9.0, 9), 0.0);
        assert_eq!(success_percentage(1.0, 2), 50.0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1.0, 4), 25.0);
        assert_eq!(percentage(0.0, 4), 0.0);
    }
}
