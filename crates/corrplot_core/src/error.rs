use core::fmt;

/// Errors raised by the strict entry points of the core.
///
/// The plain [`compute_correlation`](crate::compute_correlation) never
/// returns one of these: a degenerate sample yields NaN or infinity there.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrplotError {
    /// Zero variance in `x` or `y` (or fewer than two points); `r` is undefined.
    DegenerateCorrelation,
    /// Two parallel series of different lengths.
    LengthMismatch { left: usize, right: usize },
    /// A parameter outside its accepted range, or not finite.
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl fmt::Display for CorrplotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrplotError::DegenerateCorrelation => {
                write!(f, "correlation is undefined for a zero-variance sample")
            }
            CorrplotError::LengthMismatch { left, right } => {
                write!(f, "series length mismatch: {} vs {}", left, right)
            }
            CorrplotError::OutOfRange {
                name,
                value,
                min,
                max,
            } => write!(f, "{} = {} is outside [{}, {}]", name, value, min, max),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CorrplotError {}

pub type Result<T> = core::result::Result<T, CorrplotError>;
