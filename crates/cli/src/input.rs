//! Load a `Problem` from a tabular file with `capability` and `rate` columns.
//!
//! CSV (header row required) and Parquet are read through polars; other
//! columns are ignored.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use rebootsched::Problem;
use std::path::Path;

pub const CAPABILITY_COLUMN: &str = "capability";
pub const RATE_COLUMN: &str = "rate";

pub fn read_problem(path: &Path) -> Result<Problem> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("opening {}", path.display()))?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("opening {}", path.display()))?,
        _ => bail!(
            "unsupported input {} (expected .csv or .parquet)",
            path.display()
        ),
    };
    let df = lf
        .select([col(CAPABILITY_COLUMN), col(RATE_COLUMN)])
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_shape");

    let capability = column_f64(&df, CAPABILITY_COLUMN)?;
    let rate = column_f64(&df, RATE_COLUMN)?;
    Ok(Problem::new(capability, rate)?)
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| anyhow!("column `{name}` is null at row {row}")))
        .collect()
}
