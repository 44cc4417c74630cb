use anyhow::{bail, Context, Result};
use hullscan::Point;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// Read a point set from `.csv` or `.parquet` with columns `x`, `y` and optional `label`.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        _ => bail!("unsupported point file {} (expected .csv or .parquet)", path.display()),
    };
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    points_from_frame(&df).with_context(|| format!("decoding points in {}", path.display()))
}

fn points_from_frame(df: &DataFrame) -> Result<Vec<Point>> {
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;
    let labels = match df.column("label") {
        Ok(c) => Some(c.cast(&DataType::String)?),
        Err(_) => None,
    };
    let labels = match &labels {
        Some(s) => Some(s.str()?),
        None => None,
    };
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.f64()?.into_iter().zip(ys.f64()?.into_iter()).enumerate() {
        let (Some(x), Some(y)) = (x, y) else {
            bail!("row {row}: missing coordinate");
        };
        let label = labels.and_then(|l| l.get(row)).filter(|s| !s.is_empty());
        out.push(match label {
            Some(l) => Point::labeled(x, y, l),
            None => Point::new(x, y),
        });
    }
    Ok(out)
}

/// Write points as CSV (`x`, `y`, `label`).
pub fn write_points_csv<P: AsRef<Path>>(path: P, points: &[Point]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let xs: Vec<f64> = points.iter().map(|p| p.x()).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y()).collect();
    let labels: Vec<Option<String>> = points
        .iter()
        .map(|p| p.label().map(str::to_string))
        .collect();
    let mut df = DataFrame::new(vec![
        Series::new("x".into(), xs),
        Series::new("y".into(), ys),
        Series::new("label".into(), labels),
    ])?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
