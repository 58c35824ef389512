//! Descriptive statistics

/// Arithmetic mean, `None` for no values
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
/// `None` for no values and `0.0` for a single value.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    if values.len() < 2 {
        return Some(0.0);
    }
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[4.0]), Some(4.0));
        assert_eq!(mean(&[1.0, 2.0, 3.0, 6.0]), Some(3.0));
    }

    #[test]
    fn test_std_dev_small_samples() {
        assert_eq!(sample_std_dev(&[]), None);
        assert_eq!(sample_std_dev(&[7.5]), Some(0.0));
    }

    #[test]
    fn test_sample_std_dev() {
        // sample stdev of this set is 2.138089935299395
        let sd = sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((sd - 2.138089935299395).abs() < 1e-12);
    }
}
