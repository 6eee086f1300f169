use crate::function::functionerror::FunctionError;
use crate::function::functionpoint::FunctionPoint;
use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use crate::tabulated::tabulatedfunction::{
    FunctionKind,
    TabulatedFunction
};

/// Builds tabulated functions of one concrete kind.
pub trait TabulatedFunctionFactory {
    fn kind(&self) -> FunctionKind;

    fn create_from_count(&self,
                         left: f64,
                         right: f64,
                         count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError>;

    fn create_from_values(&self,
                          left: f64,
                          right: f64,
                          values: &[f64]) -> Result<Box<dyn TabulatedFunction>, FunctionError>;

    fn create_from_points(&self, points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, FunctionError>;
}

pub struct ArrayTabulatedFunctionFactory;

impl TabulatedFunctionFactory for ArrayTabulatedFunctionFactory {
    fn kind(&self) -> FunctionKind {
        FunctionKind::Array
    }

    fn create_from_count(&self,
                         left: f64,
                         right: f64,
                         count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(ArrayTabulatedFunction::from_count(left, right, count)?))
    }

    fn create_from_values(&self,
                          left: f64,
                          right: f64,
                          values: &[f64]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(ArrayTabulatedFunction::from_values(left, right, values)?))
    }

    fn create_from_points(&self, points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(ArrayTabulatedFunction::from_points(points)?))
    }
}

pub struct LinkedListTabulatedFunctionFactory;

impl TabulatedFunctionFactory for LinkedListTabulatedFunctionFactory {
    fn kind(&self) -> FunctionKind {
        FunctionKind::LinkedList
    }

    fn create_from_count(&self,
                         left: f64,
                         right: f64,
                         count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(LinkedListTabulatedFunction::from_count(left, right, count)?))
    }

    fn create_from_values(&self,
                          left: f64,
                          right: f64,
                          values: &[f64]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(LinkedListTabulatedFunction::from_values(left, right, values)?))
    }

    fn create_from_points(&self, points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(LinkedListTabulatedFunction::from_points(points)?))
    }
}

impl FunctionKind {
    pub fn factory(&self) -> Box<dyn TabulatedFunctionFactory> {
        match self {
            FunctionKind::Array => Box::new(ArrayTabulatedFunctionFactory),
            FunctionKind::LinkedList => Box::new(LinkedListTabulatedFunctionFactory)
        }
    }
}
