use anyhow::ensure;
use regeval::{JsonSurface, LinearPredictor, PlotOptions, Split};
use serde::Deserialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, Deserialize)]
struct Column {
    name: String,
    data: Vec<f64>,
}

/// One dataset split as JSON columns; the last column is the target.
#[derive(Debug, Deserialize)]
struct Input {
    train: Vec<Column>,
    test: Vec<Column>,
}

#[derive(Debug, StructOpt)]
struct Opt {
    /// Linear model weight, one per feature column.
    #[structopt(long = "weight")]
    weights: Vec<f64>,

    /// Linear model intercept.
    #[structopt(long, default_value = "0.0")]
    intercept: f64,

    /// Scatter point transparency.
    #[structopt(long, default_value = "0.5")]
    alpha: f64,

    /// Write the scatter figure as JSON to this path.
    #[structopt(long)]
    figure: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    let input: Input = serde_json::from_reader(std::io::stdin().lock())?;
    ensure!(!input.train.is_empty(), "train needs at least a target column");
    ensure!(!input.test.is_empty(), "test needs at least a target column");

    let train = to_split(&input.train)?;
    let test = to_split(&input.test)?;
    ensure!(
        test.features_len() == train.features_len(),
        "train has {} feature columns but test has {}",
        train.features_len(),
        test.features_len()
    );
    ensure!(
        opt.weights.len() == train.features_len(),
        "expected one --weight per feature column ({})",
        input.train[..input.train.len() - 1]
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let predictor = LinearPredictor::new(opt.weights, opt.intercept);
    regeval::regression_performance(&train, &test, &predictor, &mut std::io::stdout().lock())?;

    if let Some(path) = &opt.figure {
        let mut surface = JsonSurface::new(BufWriter::new(File::create(path)?));
        regeval::regression_evaluation_plots(
            &train,
            &test,
            &predictor,
            PlotOptions::new().alpha(opt.alpha),
            &mut surface,
        )?;
    }

    Ok(())
}

fn to_split(columns: &[Column]) -> anyhow::Result<Split<'_>> {
    let features = columns
        .iter()
        .take(columns.len() - 1)
        .map(|c| c.data.as_slice())
        .collect();
    let target = &columns[columns.len() - 1].data;
    Ok(Split::new(features, target)?)
}
