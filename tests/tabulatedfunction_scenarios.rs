//! End-to-end behaviour shared by both tabulated function implementations.

use approx::assert_relative_eq;

use tabfun::function::functionerror::FunctionError;
use tabfun::function::functionpoint::FunctionPoint;
use tabfun::function::scalarfunction::ScalarFunction;
use tabfun::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use tabfun::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use tabfun::tabulated::tabulatedfunction::{
    ABSCISSA_EPSILON,
    FunctionKind,
    TabulatedFunction
};
use tabfun::tabulated::tabulatedfunctions::TabulatedFunctions;

const KINDS: [FunctionKind; 2] = [FunctionKind::Array, FunctionKind::LinkedList];

fn cubic_nodes(kind: FunctionKind) -> Box<dyn TabulatedFunction> {
    TabulatedFunctions::with_kind(kind)
        .create_from_points(&[
            FunctionPoint::new(0.0, 0.0),
            FunctionPoint::new(1.0, 1.0),
            FunctionPoint::new(2.0, 8.0)
        ])
        .unwrap()
}

#[test]
fn test_interpolation_scenario() {
    for kind in KINDS {
        let f = cubic_nodes(kind);
        assert_relative_eq!(f.value(0.5), 0.5);
        assert_relative_eq!(f.value(1.5), 4.5);
        assert!(f.value(3.0).is_nan());
        assert!(f.value(-0.5).is_nan());
    }
}

#[test]
fn test_tabulate_scenario() {
    let line = ScalarFunction::new(0.0, 10.0, |x| 2.0 * x + 1.0).unwrap();
    for kind in KINDS {
        let f = TabulatedFunctions::with_kind(kind).tabulate(&line, 0.0, 10.0, 6).unwrap();
        assert_eq!(f.kind(), kind);
        let xs: Vec<f64> = f.iter().map(|pt| pt.x()).collect();
        let ys: Vec<f64> = f.iter().map(|pt| pt.y()).collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(ys, vec![1.0, 5.0, 9.0, 13.0, 17.0, 21.0]);
    }
}

#[test]
fn test_delete_down_to_two_then_refuse() {
    for kind in KINDS {
        let mut f = cubic_nodes(kind);
        f.delete_point(1).unwrap();
        assert_eq!(f.points_count(), 2);
        assert_eq!(f.left_bound().unwrap(), 0.0);
        assert_eq!(f.right_bound().unwrap(), 2.0);
        assert_relative_eq!(f.value(1.0), 4.0);
        assert!(matches!(f.delete_point(0), Err(FunctionError::TooFewPoints(2))));
        assert!(matches!(f.delete_point(5), Err(FunctionError::IndexOutOfRange { index: 5, count: 2 })));
    }
}

#[test]
fn test_accessor_errors() {
    for kind in KINDS {
        let mut f = cubic_nodes(kind);
        assert!(matches!(f.point(3), Err(FunctionError::IndexOutOfRange { .. })));
        assert!(matches!(f.point_x(3), Err(FunctionError::IndexOutOfRange { .. })));
        assert!(matches!(f.point_y(3), Err(FunctionError::IndexOutOfRange { .. })));
        assert!(matches!(f.set_point_y(3, 0.0), Err(FunctionError::IndexOutOfRange { .. })));
        assert!(matches!(
            f.set_point(1, FunctionPoint::new(0.0 + 5e-11, 1.0)),
            Err(FunctionError::OrderingViolation { index: 1, .. })
        ));
        f.set_point_y(1, 1e9).unwrap();
        assert_eq!(f.point_y(1).unwrap(), 1e9);
    }
}

#[test]
fn test_mixed_implementations_compare_equal() {
    let array = cubic_nodes(FunctionKind::Array);
    let list = cubic_nodes(FunctionKind::LinkedList);
    assert!(*array == *list);
    assert_eq!(array.to_string(), list.to_string());
    assert_eq!(array.to_string(), "{(0; 0), (1; 1), (2; 8)}");

    let concrete_array = ArrayTabulatedFunction::from_count(0.0, 1.0, 4).unwrap();
    let concrete_list = LinkedListTabulatedFunction::from_count(0.0, 1.0, 4).unwrap();
    assert!(concrete_array == concrete_list);
    assert!(concrete_list == concrete_array);

    let mut shorter = list.clone();
    shorter.delete_point(2).unwrap();
    assert!(*array != *shorter);
}

#[test]
fn test_clone_through_trait_object() {
    for kind in KINDS {
        let f = cubic_nodes(kind);
        let mut g = f.clone();
        assert_eq!(g.kind(), kind);
        g.add_point(FunctionPoint::new(3.0, 27.0)).unwrap();
        assert_eq!(f.points_count(), 3);
        assert_eq!(g.points_count(), 4);
    }
}

#[test]
fn test_iteration_is_restartable_and_read_only() {
    for kind in KINDS {
        let f = cubic_nodes(kind);
        let first: Vec<FunctionPoint> = f.iter().collect();
        let second: Vec<FunctionPoint> = f.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);

        let mut iter = f.iter();
        let copied = iter.next().unwrap().with_y(-7.0);
        assert_eq!(copied.y(), -7.0);
        assert_eq!(f.point_y(0).unwrap(), 0.0);
        assert!(matches!(iter.remove(), Err(FunctionError::UnsupportedOperation(_))));
        assert_eq!(iter.count(), 2);
    }
}

#[test]
fn test_add_point_into_every_gap() {
    for kind in KINDS {
        let mut f = TabulatedFunctions::with_kind(kind).create_from_count(0.0, 4.0, 5).unwrap();
        for x in [3.5, 0.5, 2.5, 1.5, -1.0, 10.0] {
            f.add_point(FunctionPoint::new(x, x)).unwrap();
        }
        let xs: Vec<f64> = f.iter().map(|pt| pt.x()).collect();
        assert_eq!(xs, vec![-1.0, 0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 10.0]);
        assert!(matches!(f.add_point(FunctionPoint::new(2.5, 0.0)), Err(FunctionError::DuplicatePoint(_))));
    }
}

#[test]
fn test_empty_defaults() {
    let empties: [Box<dyn TabulatedFunction>; 2] = [
        Box::new(ArrayTabulatedFunction::default()),
        Box::new(LinkedListTabulatedFunction::default())
    ];
    for mut f in empties {
        assert_eq!(f.points_count(), 0);
        assert!(matches!(f.left_bound(), Err(FunctionError::EmptyFunction)));
        assert!(matches!(f.right_bound(), Err(FunctionError::EmptyFunction)));
        assert!(f.value(0.0).is_nan());
        assert_eq!(f.to_string(), "{}");
        f.add_point(FunctionPoint::new(0.0, 1.0)).unwrap();
        f.add_point(FunctionPoint::new(1.0, 3.0)).unwrap();
        assert_relative_eq!(f.value(0.5), 2.0);
    }
}

#[test]
fn test_add_point_at_tolerance_boundary() {
    for kind in KINDS {
        let provider = TabulatedFunctions::with_kind(kind);
        let mut f = cubic_nodes(kind);
        assert!(matches!(
            f.add_point(FunctionPoint::new(ABSCISSA_EPSILON, 5.0)),
            Err(FunctionError::DuplicatePoint(_))
        ));
        assert_eq!(f.points_count(), 3);

        f.add_point(FunctionPoint::new(2.0 * ABSCISSA_EPSILON, 5.0)).unwrap();
        assert_eq!(f.point_x(1).unwrap(), 2.0 * ABSCISSA_EPSILON);

        let mut bytes = Vec::new();
        provider.output_tabulated_function(f.as_ref(), &mut bytes).unwrap();
        let decoded = provider.input_tabulated_function(&mut bytes.as_slice()).unwrap();
        assert!(*decoded == *f);

        let mut text = Vec::new();
        provider.write_tabulated_function(f.as_ref(), &mut text).unwrap();
        let decoded = provider.read_tabulated_function(&mut text.as_slice()).unwrap();
        assert!(*decoded == *f);

        assert!(matches!(
            f.set_point_x(1, ABSCISSA_EPSILON),
            Err(FunctionError::OrderingViolation { index: 1, .. })
        ));
        f.set_point_x(1, 3.0 * ABSCISSA_EPSILON).unwrap();
    }
}
