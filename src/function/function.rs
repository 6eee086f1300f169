use super::functionerror::FunctionError;

/// A real function of one variable defined on a closed interval.
pub trait Function {
    fn left_bound(&self) -> Result<f64, FunctionError>;

    fn right_bound(&self) -> Result<f64, FunctionError>;

    /// Value at `x`, or NaN when `x` lies outside the domain.
    fn value(&self, x: f64) -> f64;
}
