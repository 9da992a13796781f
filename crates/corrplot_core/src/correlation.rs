//! Pearson correlation coefficient of paired observations.

use alloc::format;
use alloc::string::String;

use crate::error::{CorrplotError, Result};
use crate::sample::Point;

/// Anything with an `x` and a `y`.
pub trait Paired {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Paired for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Paired for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

/// Pearson `r` between the `x` and `y` series of `points`.
///
/// Uses the raw-sums form:
///
/// ```text
/// r = (n·Σxy − Σx·Σy) / sqrt((n·Σx² − (Σx)²)·(n·Σy² − (Σy)²))
/// ```
///
/// A zero denominator (fewer than two points, or no spread in `x` or `y`) is
/// not trapped: the result is NaN or ±infinity. Use [`checked_correlation`]
/// to get an error instead.
pub fn compute_correlation<P: Paired>(points: &[P]) -> f64 {
    pearson(points.iter().map(|p| (p.x(), p.y())))
}

/// [`compute_correlation`], but a non-finite result becomes
/// [`CorrplotError::DegenerateCorrelation`].
pub fn checked_correlation<P: Paired>(points: &[P]) -> Result<f64> {
    finite_or_degenerate(compute_correlation(points))
}

/// Pearson `r` of two parallel series.
///
/// Returns:
///     `LengthMismatch` when the series differ in length,
///     `DegenerateCorrelation` when `r` is undefined.
pub fn correlation_of_series(xs: &[f64], ys: &[f64]) -> Result<f64> {
    if xs.len() != ys.len() {
        return Err(CorrplotError::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    finite_or_degenerate(pearson(xs.iter().copied().zip(ys.iter().copied())))
}

/// Four decimals for a defined `r`, `undefined` otherwise.
pub fn format_correlation(r: f64) -> String {
    if r.is_finite() {
        format!("{:.4}", r)
    } else {
        String::from("undefined")
    }
}

fn pearson<I: Iterator<Item = (f64, f64)>>(pairs: I) -> f64 {
    let (n, sum_x, sum_y, sum_xy, sum_x2, sum_y2) = pairs.fold(
        (0usize, 0.0, 0.0, 0.0, 0.0, 0.0),
        |(n, sx, sy, sxy, sx2, sy2), (x, y)| {
            (n + 1, sx + x, sy + y, sxy + x * y, sx2 + x * x, sy2 + y * y)
        },
    );
    let n = n as f64;

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = libm::sqrt((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y));

    numerator / denominator
}

fn finite_or_degenerate(r: f64) -> Result<f64> {
    if r.is_finite() {
        Ok(r)
    } else {
        Err(CorrplotError::DegenerateCorrelation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn line(slope: f64, intercept: f64, n: usize) -> Vec<(f64, f64)> {
        (0..n)
            .map(|i| {
                let x = i as f64 / n as f64;
                (x, slope * x + intercept)
            })
            .collect()
    }

    #[test]
    fn test_perfect_positive_line() {
        let r = compute_correlation(&line(3.0, -1.0, 50));
        assert!((r - 1.0).abs() < 1e-9, "r = {}", r);
    }

    #[test]
    fn test_perfect_negative_line() {
        let r = compute_correlation(&line(-0.5, 2.0, 50));
        assert!((r + 1.0).abs() < 1e-9, "r = {}", r);
    }

    #[test]
    fn test_empty_input_is_nan() {
        let empty: [(f64, f64); 0] = [];
        assert!(compute_correlation(&empty).is_nan());
        assert_eq!(
            checked_correlation(&empty),
            Err(CorrplotError::DegenerateCorrelation)
        );
    }

    #[test]
    fn test_constant_y_is_degenerate() {
        let flat = line(0.0, 4.0, 10);
        assert!(!compute_correlation(&flat).is_finite());
        assert!(checked_correlation(&flat).is_err());
    }

    #[test]
    fn test_series_length_mismatch() {
        let err = correlation_of_series(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, CorrplotError::LengthMismatch { left: 2, right: 1 });
    }

    #[test]
    fn test_series_matches_points() {
        let xs = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = vec![1.0, 3.0, 2.0, 5.0, 4.0];
        let pairs: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        let r = correlation_of_series(&xs, &ys).unwrap();
        assert_eq!(r, compute_correlation(&pairs));
        assert!((r - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_format_correlation() {
        assert_eq!(format_correlation(0.96712), "0.9671");
        assert_eq!(format_correlation(-1.0), "-1.0000");
        assert_eq!(format_correlation(f64::NAN), "undefined");
        assert_eq!(format_correlation(f64::INFINITY), "undefined");
    }
}
