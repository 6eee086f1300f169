use std::fmt;
use std::hash::{
    Hash,
    Hasher
};

use serde::{
    Deserialize,
    Serialize
};

/// A single `(x, y)` node of a tabulated function.
///
/// Equality compares the bit patterns of both coordinates, so `0.0` and `-0.0`
/// are different points while two NaNs with the same payload are equal. This
/// keeps `Eq` and `Hash` consistent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FunctionPoint {
    x: f64,
    y: f64
}

impl FunctionPoint {
    pub fn new(x: f64, y: f64) -> FunctionPoint {
        FunctionPoint { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn with_x(&self, x: f64) -> FunctionPoint {
        FunctionPoint::new(x, self.y)
    }

    pub fn with_y(&self, y: f64) -> FunctionPoint {
        FunctionPoint::new(self.x, y)
    }

    /// Linear interpolation on the segment `[lhs_pt, rhs_pt]`.
    ///
    /// Returns the stored ordinate exactly when `x` hits either node.
    pub fn interpolate(lhs_pt: &FunctionPoint, rhs_pt: &FunctionPoint, x: f64) -> f64 {
        if x == lhs_pt.x {
            lhs_pt.y
        } else if x == rhs_pt.x {
            rhs_pt.y
        } else {
            lhs_pt.y + (rhs_pt.y - lhs_pt.y) * (x - lhs_pt.x) / (rhs_pt.x - lhs_pt.x)
        }
    }
}

impl PartialEq for FunctionPoint {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for FunctionPoint {}

impl Hash for FunctionPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl fmt::Display for FunctionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for FunctionPoint {
    fn from((x, y): (f64, f64)) -> Self {
        FunctionPoint::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_is_bitwise() {
        assert_eq!(FunctionPoint::new(1.0, 2.0), FunctionPoint::new(1.0, 2.0));
        assert_ne!(FunctionPoint::new(0.0, 1.0), FunctionPoint::new(-0.0, 1.0));
        assert_ne!(FunctionPoint::new(1.0, 2.0), FunctionPoint::new(1.0 + 1e-15, 2.0));
        assert_eq!(FunctionPoint::new(f64::NAN, 0.0), FunctionPoint::new(f64::NAN, 0.0));
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(FunctionPoint::new(1.0, 2.0));
        set.insert(FunctionPoint::new(1.0, 2.0));
        set.insert(FunctionPoint::new(2.0, 2.0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_with_returns_copy() {
        let p = FunctionPoint::new(1.0, 2.0);
        let q = p.with_y(5.0);
        assert_eq!(p.y(), 2.0);
        assert_eq!(q, FunctionPoint::new(1.0, 5.0));
        assert_eq!(p.with_x(3.0).x(), 3.0);
    }

    #[test]
    fn test_interpolate_is_exact_at_nodes() {
        let a = FunctionPoint::new(0.0, 0.1);
        let b = FunctionPoint::new(1.0, 0.3);
        assert_eq!(FunctionPoint::interpolate(&a, &b, 0.0), 0.1);
        assert_eq!(FunctionPoint::interpolate(&a, &b, 1.0), 0.3);
        assert!((FunctionPoint::interpolate(&a, &b, 0.5) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(FunctionPoint::new(1.5, -2.0).to_string(), "(1.5; -2)");
        assert_eq!(FunctionPoint::from((0.0, 1.0)), FunctionPoint::new(0.0, 1.0));
    }
}
