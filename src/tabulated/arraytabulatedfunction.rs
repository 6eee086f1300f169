use std::fmt;
use std::hash::{
    Hash,
    Hasher
};

use tracing::trace;

use crate::function::function::Function;
use crate::function::functionerror::FunctionError;
use crate::function::functionpoint::FunctionPoint;
use crate::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use crate::tabulated::pointiter::PointIter;
use crate::tabulated::tabulatedfunction::{
    FunctionKind,
    TabulatedFunction,
    check_bounds,
    check_count,
    check_index,
    check_neighbours,
    check_ordered,
    hash_points,
    is_duplicate,
    uniform_abscissas,
    write_points
};

/// Extra slots reserved on construction.
const SPARE_CAPACITY: usize = 10;

/// Tabulated function stored in a contiguous buffer.
///
/// Storage starts at `count + 10` slots and doubles whenever an insertion
/// finds it full.
#[derive(Debug)]
pub struct ArrayTabulatedFunction {
    points: Vec<FunctionPoint>
}

impl ArrayTabulatedFunction {
    /// `count` evenly spaced points on `[left, right]`, all with zero ordinate.
    pub fn from_count(left: f64, right: f64, count: usize) -> Result<ArrayTabulatedFunction, FunctionError> {
        check_bounds(left, right)?;
        check_count(count)?;
        let mut points = Vec::with_capacity(count + SPARE_CAPACITY);
        points.extend(uniform_abscissas(left, right, count).map(|x| FunctionPoint::new(x, 0.0)));
        Ok(ArrayTabulatedFunction { points })
    }

    /// Evenly spaced points on `[left, right]` carrying `values`.
    pub fn from_values(left: f64, right: f64, values: &[f64]) -> Result<ArrayTabulatedFunction, FunctionError> {
        check_bounds(left, right)?;
        check_count(values.len())?;
        let mut points = Vec::with_capacity(values.len() + SPARE_CAPACITY);
        points.extend(
            uniform_abscissas(left, right, values.len())
                .zip(values)
                .map(|(x, &y)| FunctionPoint::new(x, y))
        );
        Ok(ArrayTabulatedFunction { points })
    }

    pub fn from_points(points: &[FunctionPoint]) -> Result<ArrayTabulatedFunction, FunctionError> {
        check_ordered(points)?;
        let mut stored = Vec::with_capacity(points.len() + SPARE_CAPACITY);
        stored.extend_from_slice(points);
        Ok(ArrayTabulatedFunction { points: stored })
    }

    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    /// Index of the segment `[x_i, x_{i+1}]` containing `x`, which must lie
    /// inside the domain.
    fn find_segment(&self, x: f64) -> usize {
        let pos = self.points.partition_point(|pt| pt.x() <= x);
        pos.clamp(1, self.points.len() - 1) - 1
    }
}

impl Default for ArrayTabulatedFunction {
    fn default() -> Self {
        ArrayTabulatedFunction { points: Vec::with_capacity(SPARE_CAPACITY) }
    }
}

impl Clone for ArrayTabulatedFunction {
    fn clone(&self) -> Self {
        let mut points = Vec::with_capacity(self.points.capacity());
        points.extend_from_slice(&self.points);
        ArrayTabulatedFunction { points }
    }
}

impl Function for ArrayTabulatedFunction {
    fn left_bound(&self) -> Result<f64, FunctionError> {
        self.points.first().map(|pt| pt.x()).ok_or(FunctionError::EmptyFunction)
    }

    fn right_bound(&self) -> Result<f64, FunctionError> {
        self.points.last().map(|pt| pt.x()).ok_or(FunctionError::EmptyFunction)
    }

    fn value(&self, x: f64) -> f64 {
        let (Ok(left), Ok(right)) = (self.left_bound(), self.right_bound()) else {
            return f64::NAN;
        };
        if !(x >= left && x <= right) {
            return f64::NAN;
        }
        if self.points.len() == 1 {
            return self.points[0].y();
        }
        let i = self.find_segment(x);
        FunctionPoint::interpolate(&self.points[i], &self.points[i + 1], x)
    }
}

impl TabulatedFunction for ArrayTabulatedFunction {
    fn kind(&self) -> FunctionKind {
        FunctionKind::Array
    }

    fn points_count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, FunctionError> {
        check_index(index, self.points.len())?;
        Ok(self.points[index])
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), FunctionError> {
        check_index(index, self.points.len())?;
        let prev_x = index.checked_sub(1).map(|i| self.points[i].x());
        let next_x = self.points.get(index + 1).map(|pt| pt.x());
        check_neighbours(index, point.x(), prev_x, next_x)?;
        self.points[index] = point;
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), FunctionError> {
        check_index(index, self.points.len())?;
        self.points[index] = self.points[index].with_y(y);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), FunctionError> {
        if let Some(existing) = self.points.iter().find(|pt| is_duplicate(pt.x(), point.x())) {
            return Err(FunctionError::DuplicatePoint(existing.x()));
        }
        let insert_index = self.points.iter().take_while(|pt| point.x() > pt.x()).count();
        if point.x().is_nan() {
            return Err(FunctionError::OrderingViolation { index: insert_index, x: point.x() });
        }
        if self.points.len() == self.points.capacity() {
            let extra = self.points.capacity().max(1);
            self.points.reserve_exact(extra);
        }
        self.points.insert(insert_index, point);
        trace!(index = insert_index, x = point.x(), count = self.points.len(), "point added");
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), FunctionError> {
        check_index(index, self.points.len())?;
        if self.points.len() < 3 {
            return Err(FunctionError::TooFewPoints(self.points.len()));
        }
        let removed = self.points.remove(index);
        trace!(index, x = removed.x(), count = self.points.len(), "point deleted");
        Ok(())
    }

    fn iter(&self) -> PointIter<'_> {
        PointIter::new(self.points.iter().copied(), self.points.len())
    }

    fn box_clone(&self) -> Box<dyn TabulatedFunction> {
        Box::new(self.clone())
    }
}

impl PartialEq for ArrayTabulatedFunction {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl PartialEq<LinkedListTabulatedFunction> for ArrayTabulatedFunction {
    fn eq(&self, other: &LinkedListTabulatedFunction) -> bool {
        self.equals(other)
    }
}

impl Eq for ArrayTabulatedFunction {}

impl Hash for ArrayTabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_points(state, self.iter());
    }
}

impl fmt::Display for ArrayTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_points(f, self.iter())
    }
}
