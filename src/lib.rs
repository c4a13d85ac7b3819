pub use figure::{regression_evaluation_plots, Figure, FigureError, Panel, PlotOptions};
pub use metrics::{MetricsError, RegressionMetrics};
pub use predictor::{LinearPredictor, Predictor, PredictorOutput};
pub use report::{regression_evaluation, regression_performance, ReportError};
pub use split::{Split, SplitError};
pub use surface::{JsonSurface, Surface, SurfaceError};

pub mod figure;
pub mod metrics;
pub mod predictor;
pub mod report;
pub mod split;
pub mod surface;
