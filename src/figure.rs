use crate::predictor::Predictor;
use crate::split::Split;
use crate::surface::{Surface, SurfaceError};
use itertools::Itertools as _;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The perfect-prediction diagonal overlaid on a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub points: Vec<(f64, f64)>,
    pub color: String,
}

/// One predicted-vs-actual scatter panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub alpha: f64,
    pub points: Vec<(f64, f64)>,
    pub reference_line: ReferenceLine,
}

impl Panel {
    fn new(
        title: &str,
        actual: &[f64],
        predicted: &[f64],
        alpha: f64,
    ) -> Result<Self, FigureError> {
        if actual.len() != predicted.len() {
            return Err(FigureError::PointCountMismatch {
                title: title.to_owned(),
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }

        // The diagonal runs along actual = actual; sorting makes it a
        // single left-to-right polyline.
        let reference_line = ReferenceLine {
            points: actual
                .iter()
                .copied()
                .sorted_by_key(|&v| OrderedFloat(v))
                .map(|v| (v, v))
                .collect(),
            color: "red".to_owned(),
        };

        Ok(Self {
            title: title.to_owned(),
            x_label: "Actual".to_owned(),
            y_label: "Predictions".to_owned(),
            alpha,
            points: actual.iter().copied().zip(predicted.iter().copied()).collect(),
            reference_line,
        })
    }
}

/// A two-panel figure: train on the left, test on the right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub width: u32,
    pub height: u32,
    pub panels: [Panel; 2],
}

#[derive(Debug, Clone)]
pub struct PlotOptions {
    alpha: f64,
}

impl PlotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scatter point transparency.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self { alpha: 0.5 }
    }
}

/// Builds the actual-vs-predicted scatter figure for both splits and hands
/// it to the display surface.
pub fn regression_evaluation_plots<P, S>(
    train: &Split,
    test: &Split,
    predictor: &P,
    options: PlotOptions,
    surface: &mut S,
) -> Result<(), FigureError>
where
    P: Predictor + ?Sized,
    S: Surface + ?Sized,
{
    let pred_train = predictor.predict(train).flatten();
    let pred_test = predictor.predict(test).flatten();

    let figure = Figure {
        width: 12,
        height: 6,
        panels: [
            Panel::new("Train Set", train.targets(), &pred_train, options.alpha)?,
            Panel::new("Test Set", test.targets(), &pred_test, options.alpha)?,
        ],
    };
    tracing::debug!(
        train_points = figure.panels[0].points.len(),
        test_points = figure.panels[1].points.len(),
        "built evaluation figure"
    );

    surface.display(&figure)?;
    Ok(())
}

#[derive(Debug, Error)]
pub enum FigureError {
    #[error("panel `{title}` has {actual} actual values but {predicted} predictions")]
    PointCountMismatch {
        title: String,
        actual: usize,
        predicted: usize,
    },

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
