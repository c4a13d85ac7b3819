use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coefficient of determination.
///
/// When the targets have zero variance the raw IEEE result of
/// `1 - ss_res / ss_tot` is returned (NaN if the residuals are also zero,
/// negative infinity otherwise).
pub fn r2_score(actual: &[f64], predicted: &[f64]) -> Result<f64, MetricsError> {
    let n = paired_len(actual, predicted)?;
    let mean = actual.iter().sum::<f64>() / n;
    let ss_tot = actual.iter().map(|a| (a - mean).powi(2)).sum::<f64>();
    let ss_res = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>();
    Ok(1.0 - ss_res / ss_tot)
}

pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> Result<f64, MetricsError> {
    let n = paired_len(actual, predicted)?;
    Ok(actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / n)
}

pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64, MetricsError> {
    let n = paired_len(actual, predicted)?;
    Ok(actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / n)
}

pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64, MetricsError> {
    mean_squared_error(actual, predicted).map(f64::sqrt)
}

fn paired_len(actual: &[f64], predicted: &[f64]) -> Result<f64, MetricsError> {
    if actual.is_empty() {
        return Err(MetricsError::EmptyInput);
    }

    if actual.len() != predicted.len() {
        return Err(MetricsError::LengthMismatch {
            actual: actual.len(),
            predicted: predicted.len(),
        });
    }

    Ok(actual.len() as f64)
}

/// The four evaluation statistics for one split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    pub r2: f64,
    pub mae: f64,
    pub mse: f64,
    pub rmse: f64,
    pub n_samples: usize,
}

impl RegressionMetrics {
    pub fn compute(actual: &[f64], predicted: &[f64]) -> Result<Self, MetricsError> {
        let mse = mean_squared_error(actual, predicted)?;
        Ok(Self {
            r2: r2_score(actual, predicted)?,
            mae: mean_absolute_error(actual, predicted)?,
            mse,
            rmse: mse.sqrt(),
            n_samples: actual.len(),
        })
    }
}

#[derive(Debug, Error, Clone)]
pub enum MetricsError {
    #[error("metric inputs must not be empty")]
    EmptyInput,

    #[error("actual and predicted lengths differ ({actual} vs {predicted})")]
    LengthMismatch { actual: usize, predicted: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_predictions_score_one_and_zero_errors() -> Result<(), anyhow::Error> {
        let y = [1.0, 2.0, 3.0];
        let m = RegressionMetrics::compute(&y, &y)?;
        assert_eq!(m.r2, 1.0);
        assert_eq!(m.mae, 0.0);
        assert_eq!(m.mse, 0.0);
        assert_eq!(m.rmse, 0.0);
        assert_eq!(m.n_samples, 3);
        Ok(())
    }

    #[test]
    fn known_values() -> Result<(), anyhow::Error> {
        let actual = [3.0, 5.0, 7.0];
        let predicted = [2.0, 5.0, 9.0];
        let m = RegressionMetrics::compute(&actual, &predicted)?;
        assert!((m.mae - 1.0).abs() < 1e-12);
        assert!((m.mse - 5.0 / 3.0).abs() < 1e-12);
        assert!((m.r2 - 0.375).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn rmse_is_square_root_of_mse() -> Result<(), anyhow::Error> {
        let actual = [1.0, 4.0, 9.0, 16.0];
        let predicted = [1.5, 3.0, 10.0, 14.0];
        let m = RegressionMetrics::compute(&actual, &predicted)?;
        assert!((m.rmse - m.mse.sqrt()).abs() < 1e-12);
        let rmse = root_mean_squared_error(&actual, &predicted)?;
        assert!((rmse - m.rmse).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn worse_than_mean_predictions_score_negative() -> Result<(), anyhow::Error> {
        let actual = [1.0, 2.0, 3.0];
        let predicted = [3.0, 3.0, -2.0];
        assert!(r2_score(&actual, &predicted)? < 0.0);
        Ok(())
    }

    // A single point has zero target variance, so R² is undefined. The
    // division convention propagates: 0/0 is NaN. The absolute errors are
    // still well defined.
    #[test]
    fn single_point_yields_nan_r2_and_zero_errors() -> Result<(), anyhow::Error> {
        let m = RegressionMetrics::compute(&[5.0], &[5.0])?;
        assert!(m.r2.is_nan());
        assert_eq!(m.mae, 0.0);
        assert_eq!(m.mse, 0.0);
        assert_eq!(m.rmse, 0.0);
        Ok(())
    }

    #[test]
    fn constant_targets_with_residuals_yield_negative_infinity() -> Result<(), anyhow::Error> {
        let r2 = r2_score(&[5.0, 5.0, 5.0], &[4.0, 5.0, 6.0])?;
        assert_eq!(r2, f64::NEG_INFINITY);
        Ok(())
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            mean_squared_error(&[], &[]),
            Err(MetricsError::EmptyInput)
        ));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(matches!(
            r2_score(&[1.0, 2.0], &[1.0]),
            Err(MetricsError::LengthMismatch {
                actual: 2,
                predicted: 1
            })
        ));
    }
}
