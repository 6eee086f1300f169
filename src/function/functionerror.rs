use thiserror::Error;

/// Failures raised by tabulated functions, tabulation, integration and the
/// stream codecs.
///
/// A query outside a function's domain is not an error: `value` returns NaN.
#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("index {index} is out of range [0, {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("x = {x} at index {index} breaks the strictly increasing order of abscissas")]
    OrderingViolation { index: usize, x: f64 },

    #[error("a point with x = {0} already exists")]
    DuplicatePoint(f64),

    #[error("cannot delete a point from a function with {0} points (at least 3 required)")]
    TooFewPoints(usize),

    #[error("function has no points")]
    EmptyFunction,

    #[error("interval [{left}, {right}] leaves the domain [{domain_left}, {domain_right}]")]
    DomainViolation {
        left: f64,
        right: f64,
        domain_left: f64,
        domain_right: f64
    },

    #[error("point count must be at least 2, got {0}")]
    InvalidCount(usize),

    #[error("left bound {left} must be less than right bound {right}")]
    InvalidBounds { left: f64, right: f64 },

    #[error("discretization step must be positive, got {0}")]
    InvalidStep(f64),

    #[error("malformed stream: {0}")]
    MalformedStream(String),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = FunctionError::IndexOutOfRange { index: 5, count: 3 };
        assert_eq!(err.to_string(), "index 5 is out of range [0, 3)");
        assert_eq!(
            FunctionError::TooFewPoints(2).to_string(),
            "cannot delete a point from a function with 2 points (at least 3 required)"
        );
        assert_eq!(
            FunctionError::MalformedStream("expected x".to_owned()).to_string(),
            "malformed stream: expected x"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn fail() -> Result<(), FunctionError> {
            Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof"))?;
            Ok(())
        }
        assert!(matches!(fail(), Err(FunctionError::Io(_))));
    }
}
