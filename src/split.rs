use thiserror::Error;

/// A dataset split: borrowed feature columns paired with a target vector.
///
/// Every feature column must have the same row count as the targets.
#[derive(Debug, Clone)]
pub struct Split<'a> {
    columns: Vec<&'a [f64]>,
    targets: &'a [f64],
}

impl<'a> Split<'a> {
    pub fn new(columns: Vec<&'a [f64]>, targets: &'a [f64]) -> Result<Self, SplitError> {
        if targets.is_empty() {
            return Err(SplitError::EmptySplit);
        }

        if columns.iter().any(|c| c.len() != targets.len()) {
            return Err(SplitError::RowSizeMismatch);
        }

        Ok(Self { columns, targets })
    }

    pub fn rows_len(&self) -> usize {
        self.targets.len()
    }

    pub fn features_len(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, column_index: usize) -> &[f64] {
        self.columns[column_index]
    }

    pub fn targets(&self) -> &[f64] {
        self.targets
    }

    /// Iterates over the feature values of a single sample.
    pub fn row(&self, row_index: usize) -> impl '_ + Iterator<Item = f64> + Clone {
        self.columns.iter().map(move |c| c[row_index])
    }
}

#[derive(Debug, Error, Clone)]
pub enum SplitError {
    #[error("split must have at least one row")]
    EmptySplit,

    #[error("some of feature columns have a different row count from the targets")]
    RowSizeMismatch,
}
