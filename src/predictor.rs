use crate::split::Split;

/// A fitted regression model, opaque except for its ability to predict.
pub trait Predictor {
    fn predict(&self, split: &Split) -> PredictorOutput;
}

/// Raw predictor output, before shape normalization.
///
/// Some models emit one scalar per row, others a single-element row per
/// sample. `flatten` collapses both to a plain vector.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictorOutput {
    Flat(Vec<f64>),
    Columnar(Vec<Vec<f64>>),
}

impl PredictorOutput {
    pub fn flatten(self) -> Vec<f64> {
        match self {
            Self::Flat(values) => values,
            Self::Columnar(rows) => rows.into_iter().flatten().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Flat(values) => values.len(),
            Self::Columnar(rows) => rows.iter().map(|r| r.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A linear model: `y = w · x + b`.
#[derive(Debug, Clone)]
pub struct LinearPredictor {
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearPredictor {
    pub fn new(weights: Vec<f64>, intercept: f64) -> Self {
        Self { weights, intercept }
    }
}

impl Predictor for LinearPredictor {
    fn predict(&self, split: &Split) -> PredictorOutput {
        // Zipping would silently drop surplus columns, so check up front.
        assert_eq!(
            self.weights.len(),
            split.features_len(),
            "one weight per feature column"
        );

        let values = (0..split.rows_len())
            .map(|i| {
                split
                    .row(i)
                    .zip(self.weights.iter())
                    .map(|(x, w)| x * w)
                    .sum::<f64>()
                    + self.intercept
            })
            .collect();
        PredictorOutput::Flat(values)
    }
}
