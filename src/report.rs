use crate::metrics::{MetricsError, RegressionMetrics};
use crate::predictor::Predictor;
use crate::split::Split;
use std::io::Write;
use thiserror::Error;

/// Writes the four evaluation metrics for one split as labeled lines.
///
/// Values are formatted with exactly three decimal places. Mismatched
/// prediction lengths and degenerate inputs surface as errors from the
/// metric computation.
pub fn regression_evaluation<P, W>(
    split: &Split,
    predictor: &P,
    out: &mut W,
) -> Result<(), ReportError>
where
    P: Predictor + ?Sized,
    W: Write,
{
    let predicted = predictor.predict(split).flatten();
    let m = RegressionMetrics::compute(split.targets(), &predicted)?;
    tracing::debug!(
        r2 = m.r2,
        mae = m.mae,
        mse = m.mse,
        rmse = m.rmse,
        n_samples = m.n_samples,
        "computed regression metrics"
    );

    writeln!(out, "R2 Score: {:.3}", m.r2)?;
    writeln!(out, "Mean Absolute Error: {:.3}", m.mae)?;
    writeln!(out, "Mean Squared Error: {:.3}", m.mse)?;
    writeln!(out, "Root Mean Squared Error: {:.3}", m.rmse)?;
    Ok(())
}

/// Writes the full train/test performance report.
pub fn regression_performance<P, W>(
    train: &Split,
    test: &Split,
    predictor: &P,
    out: &mut W,
) -> Result<(), ReportError>
where
    P: Predictor + ?Sized,
    W: Write,
{
    writeln!(out, "### Train Set")?;
    regression_evaluation(train, predictor, out)?;

    writeln!(out, "### Test Set")?;
    regression_evaluation(test, predictor, out)?;
    Ok(())
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
