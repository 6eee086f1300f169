use std::fmt;
use std::hash::{
    Hash,
    Hasher
};

use serde::{
    Deserialize,
    Serialize
};

use crate::function::function::Function;
use crate::function::functionerror::FunctionError;
use crate::function::functionpoint::FunctionPoint;
use crate::tabulated::pointiter::PointIter;

/// Minimal gap between two neighbouring abscissas.
pub const ABSCISSA_EPSILON: f64 = 1e-10;

/// Backing structure of a tabulated function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionKind {
    Array,
    LinkedList
}

impl FunctionKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            FunctionKind::Array => "ArrayTabulatedFunction",
            FunctionKind::LinkedList => "LinkedListTabulatedFunction"
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// A piecewise-linear function given by points with strictly increasing
/// abscissas.
///
/// Every accessor hands out copies, so nothing outside the function can
/// alias its storage. Implementations compare equal whenever they hold the
/// same points in the same order, whatever their backing structure.
pub trait TabulatedFunction: Function + fmt::Debug {
    fn kind(&self) -> FunctionKind;

    fn points_count(&self) -> usize;

    fn point(&self, index: usize) -> Result<FunctionPoint, FunctionError>;

    /// Replaces the point at `index`; its abscissa must stay strictly between
    /// the neighbouring ones.
    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), FunctionError>;

    fn point_x(&self, index: usize) -> Result<f64, FunctionError> {
        Ok(self.point(index)?.x())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), FunctionError> {
        let point = self.point(index)?;
        self.set_point(index, point.with_x(x))
    }

    fn point_y(&self, index: usize) -> Result<f64, FunctionError> {
        Ok(self.point(index)?.y())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), FunctionError>;

    /// Inserts `point` at the position that keeps abscissas increasing.
    fn add_point(&mut self, point: FunctionPoint) -> Result<(), FunctionError>;

    /// Removes the point at `index`. Refused while fewer than 3 points are held.
    fn delete_point(&mut self, index: usize) -> Result<(), FunctionError>;

    /// Fresh forward iterator over copies of the points.
    fn iter(&self) -> PointIter<'_>;

    fn box_clone(&self) -> Box<dyn TabulatedFunction>;

    fn equals(&self, other: &dyn TabulatedFunction) -> bool {
        self.points_count() == other.points_count() && self.iter().eq(other.iter())
    }
}

impl PartialEq for dyn TabulatedFunction + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Clone for Box<dyn TabulatedFunction> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

impl fmt::Display for dyn TabulatedFunction + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_points(f, self.iter())
    }
}

pub(crate) fn write_points(f: &mut fmt::Formatter<'_>, points: PointIter<'_>) -> fmt::Result {
    write!(f, "{{")?;
    for (i, point) in points.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", point)?;
    }
    write!(f, "}}")
}

pub(crate) fn hash_points<H: Hasher>(state: &mut H, points: PointIter<'_>) {
    points.len().hash(state);
    for point in points {
        point.hash(state);
    }
}

pub(crate) fn check_index(index: usize, count: usize) -> Result<(), FunctionError> {
    if index >= count {
        return Err(FunctionError::IndexOutOfRange { index, count });
    }
    Ok(())
}

pub(crate) fn check_bounds(left: f64, right: f64) -> Result<(), FunctionError> {
    if !(left < right) {
        return Err(FunctionError::InvalidBounds { left, right });
    }
    Ok(())
}

pub(crate) fn check_count(count: usize) -> Result<(), FunctionError> {
    if count < 2 {
        return Err(FunctionError::InvalidCount(count));
    }
    Ok(())
}

/// Abscissas closer than or exactly at the tolerance count as the same node.
pub(crate) fn is_duplicate(lhs_x: f64, rhs_x: f64) -> bool {
    (rhs_x - lhs_x).abs() <= ABSCISSA_EPSILON
}

pub(crate) fn is_separated(lhs_x: f64, rhs_x: f64) -> bool {
    rhs_x - lhs_x > ABSCISSA_EPSILON
}

/// Checks a point array handed to a constructor.
pub(crate) fn check_ordered(points: &[FunctionPoint]) -> Result<(), FunctionError> {
    check_count(points.len())?;
    for (i, pair) in points.windows(2).enumerate() {
        if is_duplicate(pair[0].x(), pair[1].x()) {
            return Err(FunctionError::DuplicatePoint(pair[1].x()));
        }
        if !is_separated(pair[0].x(), pair[1].x()) {
            return Err(FunctionError::OrderingViolation { index: i + 1, x: pair[1].x() });
        }
    }
    Ok(())
}

/// Checks that `x` fits strictly between the abscissas of the neighbours of
/// `index`.
pub(crate) fn check_neighbours(index: usize,
                               x: f64,
                               prev_x: Option<f64>,
                               next_x: Option<f64>) -> Result<(), FunctionError> {
    let after_prev = prev_x.is_none_or(|prev_x| is_separated(prev_x, x));
    let before_next = next_x.is_none_or(|next_x| is_separated(x, next_x));
    if !(after_prev && before_next) || x.is_nan() {
        return Err(FunctionError::OrderingViolation { index, x });
    }
    Ok(())
}

pub(crate) fn uniform_abscissas(left: f64, right: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = (right - left) / (count - 1) as f64;
    (0..count).map(move |i| left + i as f64 * step)
}
