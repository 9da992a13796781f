use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use corrplot_core::Point;

/// Writes `points` as CSV with the header `x,y,idealY`.
pub fn write_csv<W: Write>(writer: W, points: &[Point]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for point in points {
        csv.serialize(point)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn export_csv(path: &Path, points: &[Point]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_csv(file, points)?;
    info!(path = %path.display(), rows = points.len(), "Exported sample");
    Ok(())
}
