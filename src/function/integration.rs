use super::function::Function;
use super::functionerror::FunctionError;

/// Trapezoid rule over `[left, right]` with segments of length `step`; the
/// last segment is clipped at `right`.
///
/// Returns NaN as soon as the integrand is NaN at any sampled abscissa.
pub fn integrate<F>(function: &F, left: f64, right: f64, step: f64) -> Result<f64, FunctionError>
    where F: Function + ?Sized {
    let domain_left = function.left_bound()?;
    let domain_right = function.right_bound()?;
    if left < domain_left || right > domain_right {
        return Err(FunctionError::DomainViolation { left, right, domain_left, domain_right });
    }
    if left >= right {
        return Err(FunctionError::InvalidBounds { left, right });
    }
    if !(step > 0.0) {
        return Err(FunctionError::InvalidStep(step));
    }

    let mut integral = 0.0;
    let mut current_x = left;
    let mut current_y = function.value(current_x);
    while current_x < right {
        let next_x = f64::min(current_x + step, right);
        let next_y = function.value(next_x);
        if current_y.is_nan() || next_y.is_nan() {
            return Ok(f64::NAN);
        }
        integral += (current_y + next_y) * (next_x - current_x) / 2.0;
        current_x = next_x;
        current_y = next_y;
    }
    Ok(integral)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::scalarfunction::ScalarFunction;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_integrand_is_exact() {
        let line = ScalarFunction::new(0.0, 10.0, |x| 2.0 * x + 1.0).unwrap();
        let value = integrate(&line, 0.0, 4.0, 0.5).unwrap();
        assert_relative_eq!(value, 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_clipped_last_segment() {
        let constant = ScalarFunction::new(0.0, 1.0, |_| 3.0).unwrap();
        let value = integrate(&constant, 0.0, 1.0, 0.3).unwrap();
        assert_relative_eq!(value, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sine_converges() {
        let sin = ScalarFunction::new(0.0, std::f64::consts::PI, f64::sin).unwrap();
        let value = integrate(&sin, 0.0, std::f64::consts::PI, 1e-3).unwrap();
        assert_relative_eq!(value, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_argument_errors() {
        let line = ScalarFunction::new(0.0, 1.0, |x| x).unwrap();
        assert!(matches!(integrate(&line, -1.0, 1.0, 0.1), Err(FunctionError::DomainViolation { .. })));
        assert!(matches!(integrate(&line, 0.0, 2.0, 0.1), Err(FunctionError::DomainViolation { .. })));
        assert!(matches!(integrate(&line, 0.5, 0.5, 0.1), Err(FunctionError::InvalidBounds { .. })));
        assert!(matches!(integrate(&line, 0.0, 1.0, 0.0), Err(FunctionError::InvalidStep(_))));
        assert!(matches!(integrate(&line, 0.0, 1.0, f64::NAN), Err(FunctionError::InvalidStep(_))));
    }

    #[test]
    fn test_nan_integrand() {
        let holey = ScalarFunction::new(0.0, 1.0, |x| if x > 0.5 { f64::NAN } else { x }).unwrap();
        assert!(integrate(&holey, 0.0, 1.0, 0.1).unwrap().is_nan());
    }
}
