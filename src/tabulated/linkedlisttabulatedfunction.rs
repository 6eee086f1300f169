use std::fmt;
use std::hash::{
    Hash,
    Hasher
};
use std::iter;

use tracing::trace;

use crate::function::function::Function;
use crate::function::functionerror::FunctionError;
use crate::function::functionpoint::FunctionPoint;
use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
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

/// Slot of the sentinel node.
const HEAD: usize = 0;

#[derive(Debug)]
struct FunctionNode {
    point: FunctionPoint,
    prev: usize,
    next: usize
}

/// Tabulated function stored in a circular doubly linked list.
///
/// Nodes live in an arena and link to each other by slot. Slot 0 is the
/// sentinel: its `next` is the first point and its `prev` the last one.
/// Slots freed by deletion are reused by later insertions.
#[derive(Debug)]
pub struct LinkedListTabulatedFunction {
    nodes: Vec<FunctionNode>,
    free: Vec<usize>,
    size: usize
}

impl LinkedListTabulatedFunction {
    fn with_capacity(capacity: usize) -> LinkedListTabulatedFunction {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(FunctionNode { point: FunctionPoint::default(), prev: HEAD, next: HEAD });
        LinkedListTabulatedFunction { nodes, free: Vec::new(), size: 0 }
    }

    /// `count` evenly spaced points on `[left, right]`, all with zero ordinate.
    pub fn from_count(left: f64, right: f64, count: usize) -> Result<LinkedListTabulatedFunction, FunctionError> {
        check_bounds(left, right)?;
        check_count(count)?;
        let mut function = LinkedListTabulatedFunction::with_capacity(count);
        for x in uniform_abscissas(left, right, count) {
            function.add_node_to_tail(FunctionPoint::new(x, 0.0));
        }
        Ok(function)
    }

    /// Evenly spaced points on `[left, right]` carrying `values`.
    pub fn from_values(left: f64, right: f64, values: &[f64]) -> Result<LinkedListTabulatedFunction, FunctionError> {
        check_bounds(left, right)?;
        check_count(values.len())?;
        let mut function = LinkedListTabulatedFunction::with_capacity(values.len());
        for (x, &y) in uniform_abscissas(left, right, values.len()).zip(values) {
            function.add_node_to_tail(FunctionPoint::new(x, y));
        }
        Ok(function)
    }

    pub fn from_points(points: &[FunctionPoint]) -> Result<LinkedListTabulatedFunction, FunctionError> {
        check_ordered(points)?;
        let mut function = LinkedListTabulatedFunction::with_capacity(points.len());
        for point in points {
            function.add_node_to_tail(*point);
        }
        Ok(function)
    }

    fn allocate(&mut self, point: FunctionPoint) -> usize {
        let node = FunctionNode { point, prev: HEAD, next: HEAD };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            },
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Links a new node carrying `point` just before the node in slot `at`.
    fn insert_before(&mut self, at: usize, point: FunctionPoint) -> usize {
        let slot = self.allocate(point);
        let prev = self.nodes[at].prev;
        self.nodes[slot].prev = prev;
        self.nodes[slot].next = at;
        self.nodes[prev].next = slot;
        self.nodes[at].prev = slot;
        self.size += 1;
        slot
    }

    fn add_node_to_tail(&mut self, point: FunctionPoint) -> usize {
        self.insert_before(HEAD, point)
    }

    fn unlink(&mut self, slot: usize) -> FunctionPoint {
        let FunctionNode { point, prev, next } = self.nodes[slot];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.free.push(slot);
        self.size -= 1;
        point
    }

    /// Slot of the node at logical `index`, walking from the nearer end.
    fn node_by_index(&self, index: usize) -> usize {
        if index < self.size / 2 {
            let mut slot = self.nodes[HEAD].next;
            for _ in 0..index {
                slot = self.nodes[slot].next;
            }
            slot
        } else {
            let mut slot = self.nodes[HEAD].prev;
            for _ in index..(self.size - 1) {
                slot = self.nodes[slot].prev;
            }
            slot
        }
    }

    /// Slots of the data nodes in list order.
    fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        iter::successors(Some(self.nodes[HEAD].next), move |&slot| Some(self.nodes[slot].next))
            .take_while(|&slot| slot != HEAD)
    }
}

impl Default for LinkedListTabulatedFunction {
    fn default() -> Self {
        LinkedListTabulatedFunction::with_capacity(0)
    }
}

impl Clone for LinkedListTabulatedFunction {
    fn clone(&self) -> Self {
        let mut function = LinkedListTabulatedFunction::with_capacity(self.size);
        for point in self.iter() {
            function.add_node_to_tail(point);
        }
        function
    }
}

impl Function for LinkedListTabulatedFunction {
    fn left_bound(&self) -> Result<f64, FunctionError> {
        if self.size == 0 {
            return Err(FunctionError::EmptyFunction);
        }
        Ok(self.nodes[self.nodes[HEAD].next].point.x())
    }

    fn right_bound(&self) -> Result<f64, FunctionError> {
        if self.size == 0 {
            return Err(FunctionError::EmptyFunction);
        }
        Ok(self.nodes[self.nodes[HEAD].prev].point.x())
    }

    fn value(&self, x: f64) -> f64 {
        let (Ok(left), Ok(right)) = (self.left_bound(), self.right_bound()) else {
            return f64::NAN;
        };
        if !(x >= left && x <= right) {
            return f64::NAN;
        }
        let mut slot = self.nodes[HEAD].next;
        let mut next = self.nodes[slot].next;
        while next != HEAD {
            let (lhs_pt, rhs_pt) = (&self.nodes[slot].point, &self.nodes[next].point);
            if x >= lhs_pt.x() && x <= rhs_pt.x() {
                return FunctionPoint::interpolate(lhs_pt, rhs_pt, x);
            }
            slot = next;
            next = self.nodes[slot].next;
        }
        // Single point domain.
        self.nodes[slot].point.y()
    }
}

impl TabulatedFunction for LinkedListTabulatedFunction {
    fn kind(&self) -> FunctionKind {
        FunctionKind::LinkedList
    }

    fn points_count(&self) -> usize {
        self.size
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, FunctionError> {
        check_index(index, self.size)?;
        Ok(self.nodes[self.node_by_index(index)].point)
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), FunctionError> {
        check_index(index, self.size)?;
        let slot = self.node_by_index(index);
        let FunctionNode { prev, next, .. } = self.nodes[slot];
        let prev_x = (index > 0).then(|| self.nodes[prev].point.x());
        let next_x = (index + 1 < self.size).then(|| self.nodes[next].point.x());
        check_neighbours(index, point.x(), prev_x, next_x)?;
        self.nodes[slot].point = point;
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), FunctionError> {
        check_index(index, self.size)?;
        let slot = self.node_by_index(index);
        self.nodes[slot].point = self.nodes[slot].point.with_y(y);
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), FunctionError> {
        let mut insert_at = HEAD;
        let mut insert_index = self.size;
        for (i, slot) in self.slots().enumerate() {
            let x = self.nodes[slot].point.x();
            if is_duplicate(x, point.x()) {
                return Err(FunctionError::DuplicatePoint(x));
            }
            if insert_at == HEAD && point.x() <= x {
                insert_at = slot;
                insert_index = i;
            }
        }
        if point.x().is_nan() {
            return Err(FunctionError::OrderingViolation { index: 0, x: point.x() });
        }
        self.insert_before(insert_at, point);
        trace!(index = insert_index, x = point.x(), count = self.size, "point added");
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), FunctionError> {
        check_index(index, self.size)?;
        if self.size < 3 {
            return Err(FunctionError::TooFewPoints(self.size));
        }
        let slot = self.node_by_index(index);
        let removed = self.unlink(slot);
        trace!(index, x = removed.x(), count = self.size, "point deleted");
        Ok(())
    }

    fn iter(&self) -> PointIter<'_> {
        PointIter::new(self.slots().map(|slot| self.nodes[slot].point), self.size)
    }

    fn box_clone(&self) -> Box<dyn TabulatedFunction> {
        Box::new(self.clone())
    }
}

impl PartialEq for LinkedListTabulatedFunction {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialEq<ArrayTabulatedFunction> for LinkedListTabulatedFunction {
    fn eq(&self, other: &ArrayTabulatedFunction) -> bool {
        self.equals(other)
    }
}

impl Eq for LinkedListTabulatedFunction {}

impl Hash for LinkedListTabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_points(state, self.iter());
    }
}

impl fmt::Display for LinkedListTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_points(f, self.iter())
    }
}
