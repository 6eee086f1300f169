use super::function::Function;
use super::functionerror::FunctionError;

/// Wraps a closure together with the interval it is defined on.
pub struct ScalarFunction<F>
    where F: Fn(f64) -> f64 {
    left: f64,
    right: f64,
    f: F
}

impl<F> ScalarFunction<F>
    where F: Fn(f64) -> f64 {
    pub fn new(left: f64, right: f64, f: F) -> Result<ScalarFunction<F>, FunctionError> {
        if left > right || left.is_nan() || right.is_nan() {
            return Err(FunctionError::InvalidBounds { left, right });
        }
        Ok(ScalarFunction { left, right, f })
    }

    /// Defined on the whole real line.
    pub fn unbounded(f: F) -> ScalarFunction<F> {
        ScalarFunction { left: f64::NEG_INFINITY, right: f64::INFINITY, f }
    }
}

impl<F> Function for ScalarFunction<F>
    where F: Fn(f64) -> f64 {
    fn left_bound(&self) -> Result<f64, FunctionError> {
        Ok(self.left)
    }

    fn right_bound(&self) -> Result<f64, FunctionError> {
        Ok(self.right)
    }

    fn value(&self, x: f64) -> f64 {
        if x < self.left || x > self.right {
            f64::NAN
        } else {
            (self.f)(x)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_outside_domain_is_nan() {
        let cos = ScalarFunction::new(0.0, std::f64::consts::PI, f64::cos).unwrap();
        assert_eq!(cos.value(0.0), 1.0);
        assert!(cos.value(-0.1).is_nan());
        assert!(cos.value(4.0).is_nan());
    }

    #[test]
    fn test_rejects_reversed_bounds() {
        assert!(matches!(
            ScalarFunction::new(1.0, 0.0, |x| x),
            Err(FunctionError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_unbounded() {
        let line = ScalarFunction::unbounded(|x| 2.0 * x + 1.0);
        assert_eq!(line.left_bound().unwrap(), f64::NEG_INFINITY);
        assert_eq!(line.value(1e12), 2e12 + 1.0);
    }
}
