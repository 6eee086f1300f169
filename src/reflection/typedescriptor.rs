use std::fmt;

use crate::function::functionpoint::FunctionPoint;
use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use crate::tabulated::tabulatedfunction::FunctionKind;

/// Types that can be looked up by name in a `TypeRegistry`.
pub trait NamedType {
    const TYPE_NAME: &'static str;
}

impl NamedType for ArrayTabulatedFunction {
    const TYPE_NAME: &'static str = "ArrayTabulatedFunction";
}

impl NamedType for LinkedListTabulatedFunction {
    const TYPE_NAME: &'static str = "LinkedListTabulatedFunction";
}

impl NamedType for FunctionPoint {
    const TYPE_NAME: &'static str = "FunctionPoint";
}

/// Runtime handle naming a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    name: String
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> TypeDescriptor {
        TypeDescriptor { name: name.into() }
    }

    pub fn of<T: NamedType>() -> TypeDescriptor {
        TypeDescriptor::new(T::TYPE_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<FunctionKind> for TypeDescriptor {
    fn from(kind: FunctionKind) -> Self {
        TypeDescriptor::new(kind.type_name())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_type_names_agree() {
        assert_eq!(TypeDescriptor::from(FunctionKind::Array), TypeDescriptor::of::<ArrayTabulatedFunction>());
        assert_eq!(
            TypeDescriptor::from(FunctionKind::LinkedList),
            TypeDescriptor::of::<LinkedListTabulatedFunction>()
        );
        assert_eq!(TypeDescriptor::of::<FunctionPoint>().name(), "FunctionPoint");
    }
}
