use std::iter::FusedIterator;

use crate::function::functionerror::FunctionError;
use crate::function::functionpoint::FunctionPoint;

/// Read-only cursor over the points of a tabulated function.
///
/// Yields owned copies; the function's storage is never exposed.
pub struct PointIter<'a> {
    inner: Box<dyn Iterator<Item = FunctionPoint> + 'a>,
    remaining: usize
}

impl<'a> PointIter<'a> {
    pub(crate) fn new<I>(inner: I, count: usize) -> PointIter<'a>
        where I: Iterator<Item = FunctionPoint> + 'a {
        PointIter { inner: Box::new(inner.take(count)), remaining: count }
    }

    /// Iteration never mutates the function, so removal always fails.
    pub fn remove(&mut self) -> Result<(), FunctionError> {
        Err(FunctionError::UnsupportedOperation("removal through a point iterator"))
    }
}

impl Iterator for PointIter<'_> {
    type Item = FunctionPoint;

    fn next(&mut self) -> Option<FunctionPoint> {
        let point = self.inner.next()?;
        self.remaining -= 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PointIter<'_> {}

impl FusedIterator for PointIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_count_items_then_stops() {
        let points = vec![FunctionPoint::new(0.0, 1.0), FunctionPoint::new(1.0, 2.0)];
        let mut iter = PointIter::new(points.iter().copied(), points.len());
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(FunctionPoint::new(0.0, 1.0)));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(FunctionPoint::new(1.0, 2.0)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_remove_is_unsupported() {
        let points = [FunctionPoint::new(0.0, 1.0)];
        let mut iter = PointIter::new(points.iter().copied(), 1);
        assert!(matches!(iter.remove(), Err(FunctionError::UnsupportedOperation(_))));
        assert_eq!(iter.count(), 1);
    }
}
