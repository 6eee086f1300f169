use std::io::{
    Read,
    Write
};

use tracing::debug;

use crate::function::function::Function;
use crate::function::functionerror::FunctionError;
use crate::function::functionpoint::FunctionPoint;
use crate::io::{
    binarycodec,
    textcodec
};
use crate::tabulated::tabulatedfunction::{
    FunctionKind,
    TabulatedFunction,
    check_count,
    uniform_abscissas
};
use crate::tabulated::tabulatedfunctionfactory::{
    ArrayTabulatedFunctionFactory,
    TabulatedFunctionFactory
};

/// Samples `count` evenly spaced points of `function` over `[left, right]`.
pub fn sample<F>(function: &F, left: f64, right: f64, count: usize) -> Result<Vec<FunctionPoint>, FunctionError>
    where F: Function + ?Sized {
    let domain_left = function.left_bound()?;
    let domain_right = function.right_bound()?;
    if left < domain_left || right > domain_right {
        return Err(FunctionError::DomainViolation { left, right, domain_left, domain_right });
    }
    check_count(count)?;
    Ok(uniform_abscissas(left, right, count)
        .map(|x| FunctionPoint::new(x, function.value(x)))
        .collect())
}

/// Construction provider: every function it creates, tabulates or decodes is
/// built by the currently selected factory.
///
/// Starts with the array-backed factory.
pub struct TabulatedFunctions {
    factory: Box<dyn TabulatedFunctionFactory>
}

impl TabulatedFunctions {
    pub fn new(factory: Box<dyn TabulatedFunctionFactory>) -> TabulatedFunctions {
        TabulatedFunctions { factory }
    }

    pub fn with_kind(kind: FunctionKind) -> TabulatedFunctions {
        TabulatedFunctions::new(kind.factory())
    }

    /// Replaces the factory used by all subsequent calls.
    pub fn set_factory(&mut self, factory: Box<dyn TabulatedFunctionFactory>) {
        debug!(from = %self.factory.kind(), to = %factory.kind(), "tabulated function factory replaced");
        self.factory = factory;
    }

    pub fn factory_kind(&self) -> FunctionKind {
        self.factory.kind()
    }

    pub fn create_from_count(&self,
                             left: f64,
                             right: f64,
                             count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        self.factory.create_from_count(left, right, count)
    }

    pub fn create_from_values(&self,
                              left: f64,
                              right: f64,
                              values: &[f64]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        self.factory.create_from_values(left, right, values)
    }

    pub fn create_from_points(&self, points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        self.factory.create_from_points(points)
    }

    /// Tabulates `function` on `[left, right]`, which must lie inside its
    /// domain, with `count >= 2` evenly spaced points.
    pub fn tabulate<F>(&self,
                       function: &F,
                       left: f64,
                       right: f64,
                       count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError>
        where F: Function + ?Sized {
        let points = sample(function, left, right, count)?;
        self.create_from_points(&points)
    }

    pub fn output_tabulated_function<F, W>(&self, function: &F, out: &mut W) -> Result<(), FunctionError>
        where F: TabulatedFunction + ?Sized,
              W: Write {
        binarycodec::write_points(function, out)
    }

    pub fn input_tabulated_function<R>(&self, input: &mut R) -> Result<Box<dyn TabulatedFunction>, FunctionError>
        where R: Read {
        let points = binarycodec::read_points(input)?;
        self.create_from_points(&points)
    }

    pub fn write_tabulated_function<F, W>(&self, function: &F, out: &mut W) -> Result<(), FunctionError>
        where F: TabulatedFunction + ?Sized,
              W: Write {
        textcodec::write_points(function, out)
    }

    pub fn read_tabulated_function<R>(&self, input: &mut R) -> Result<Box<dyn TabulatedFunction>, FunctionError>
        where R: Read {
        let points = textcodec::read_points(input)?;
        self.create_from_points(&points)
    }
}

impl Default for TabulatedFunctions {
    fn default() -> Self {
        TabulatedFunctions::new(Box::new(ArrayTabulatedFunctionFactory))
    }
}
