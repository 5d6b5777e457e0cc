//! Errors reported by spline construction and queries.

use thiserror::Error;

/// An error from building or querying a [`Spline`](crate::Spline).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    /// The samples cannot describe a spline.
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInput),
    /// Inversion was requested on a spline whose samples are not increasing in y.
    #[error("function is not increasing in y")]
    NotIncreasing,
    /// Two splines used as a parametric pair do not share a parameter axis.
    #[error("inconsistent spline axes: {0}")]
    InconsistentAxes(AxesMismatch),
}

/// The reason sample data was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidInput {
    #[error("only a single point provided")]
    SinglePoint,
    #[error("different number of points ({x} x values, {y} y values)")]
    LengthMismatch { x: usize, y: usize },
    /// `x[index + 1]` is not strictly greater than `x[index]`.
    #[error("non-increasing x values at index {index}")]
    NonIncreasingX { index: usize },
}

/// How the parameter axes of a parametric pair differ.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AxesMismatch {
    #[error("spline lengths differ ({left} vs {right})")]
    Length { left: usize, right: usize },
    #[error("spline parameters differ at index {index}")]
    Value { index: usize },
}

impl From<InvalidInput> for SplineError {
    fn from(err: InvalidInput) -> SplineError {
        SplineError::InvalidInput(err)
    }
}

impl From<AxesMismatch> for SplineError {
    fn from(err: AxesMismatch) -> SplineError {
        SplineError::InconsistentAxes(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err: SplineError = InvalidInput::LengthMismatch { x: 4, y: 3 }.into();
        assert_eq!(
            err.to_string(),
            "invalid input: different number of points (4 x values, 3 y values)"
        );
        let err: SplineError = AxesMismatch::Value { index: 2 }.into();
        assert_eq!(
            err.to_string(),
            "inconsistent spline axes: spline parameters differ at index 2"
        );
        assert_eq!(
            SplineError::NotIncreasing.to_string(),
            "function is not increasing in y"
        );
    }
}
