//! SVG chart of a sample: the noisy points as a scatter, the ideal curve as
//! a line, x fixed to [0, 1].

use anyhow::{anyhow, Result};
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

use corrplot_core::{format_correlation, Point};

use crate::config::{parse_hex_color, PlotConfig};

const POINT_RADIUS: u32 = 3;
const CURVE_WIDTH: u32 = 2;

/// Y range covering every observed and ideal value, padded by 5%.
///
/// Falls back to `[0, 1]` for an empty sample and widens a flat one.
pub fn y_bounds(points: &[Point]) -> (f64, f64) {
    let (lo, hi) = points
        .iter()
        .flat_map(|p| [p.y, p.ideal_y])
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        return (0.0, 1.0);
    }
    if lo == hi {
        return (lo - 0.5, hi + 0.5);
    }
    let pad = 0.05 * (hi - lo);
    (lo - pad, hi + pad)
}

pub fn render_svg(
    out_path: &Path,
    points: &[Point],
    exponent: f64,
    correlation: f64,
    style: &PlotConfig,
) -> Result<()> {
    let (pr, pg, pb) = parse_hex_color(&style.point_color)?;
    let (lr, lg, lb) = parse_hex_color(&style.line_color)?;
    let point_color = RGBColor(pr, pg, pb);
    let line_color = RGBColor(lr, lg, lb);

    let (y_min, y_max) = y_bounds(points);

    let root = SVGBackend::new(out_path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow!("{e}"))?;

    let caption = format!(
        "y = x^{:.2}   r = {}",
        exponent,
        format_correlation(correlation)
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 22))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0f64..1.0f64, y_min..y_max)
        .map_err(|e| anyhow!("{e}"))?;

    chart
        .configure_mesh()
        .x_desc("X")
        .y_desc("Y")
        .draw()
        .map_err(|e| anyhow!("{e}"))?;

    let scatter = points
        .iter()
        .filter(|p| p.y.is_finite())
        .map(|p| Circle::new((p.x, p.y), POINT_RADIUS, point_color.mix(0.8).filled()));
    chart
        .draw_series(scatter)
        .map_err(|e| anyhow!("{e}"))?
        .label("Data Points")
        .legend(move |(x, y)| Circle::new((x + 10, y), POINT_RADIUS, point_color.filled()));

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.x, p.ideal_y)),
            line_color.stroke_width(CURVE_WIDTH),
        ))
        .map_err(|e| anyhow!("{e}"))?
        .label("Function")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_color));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| anyhow!("{e}"))?;

    root.present()
        .map_err(|e| anyhow!("writing {}: {e}", out_path.display()))?;

    info!(path = %out_path.display(), points = points.len(), "Rendered plot");
    Ok(())
}
