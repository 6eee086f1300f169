use std::collections::HashMap;
use std::io::Read;

use tracing::debug;

use crate::function::function::Function;
use crate::function::functionerror::FunctionError;
use crate::function::functionpoint::FunctionPoint;
use crate::io::{
    binarycodec,
    textcodec
};
use crate::manager::managererror::ManagerError;
use crate::reflection::typedescriptor::TypeDescriptor;
use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use crate::tabulated::tabulatedfunction::TabulatedFunction;
use crate::tabulated::tabulatedfunctions::sample;

pub type CountConstructor = fn(f64, f64, usize) -> Result<Box<dyn TabulatedFunction>, FunctionError>;
pub type ValuesConstructor = fn(f64, f64, &[f64]) -> Result<Box<dyn TabulatedFunction>, FunctionError>;
pub type PointsConstructor = fn(&[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, FunctionError>;

const COUNT_SIGNATURE: &str = "(f64, f64, usize)";
const VALUES_SIGNATURE: &str = "(f64, f64, &[f64])";
const POINTS_SIGNATURE: &str = "(&[FunctionPoint])";

/// Constructor signatures a tabulated function type exposes.
#[derive(Clone, Copy, Default)]
pub struct Constructors {
    from_count: Option<CountConstructor>,
    from_values: Option<ValuesConstructor>,
    from_points: Option<PointsConstructor>
}

impl Constructors {
    pub fn new() -> Constructors {
        Constructors::default()
    }

    pub fn with_count(mut self, constructor: CountConstructor) -> Constructors {
        self.from_count = Some(constructor);
        self
    }

    pub fn with_values(mut self, constructor: ValuesConstructor) -> Constructors {
        self.from_values = Some(constructor);
        self
    }

    pub fn with_points(mut self, constructor: PointsConstructor) -> Constructors {
        self.from_points = Some(constructor);
        self
    }
}

pub enum RegisteredType {
    TabulatedFunction(Constructors),
    Other
}

/// Arguments of one constructor call; the variant selects the signature.
#[derive(Debug, Clone, Copy)]
pub enum ConstructorArgs<'a> {
    Count { left: f64, right: f64, count: usize },
    Values { left: f64, right: f64, values: &'a [f64] },
    Points(&'a [FunctionPoint])
}

impl ConstructorArgs<'_> {
    pub fn signature(&self) -> &'static str {
        match self {
            ConstructorArgs::Count { .. } => COUNT_SIGNATURE,
            ConstructorArgs::Values { .. } => VALUES_SIGNATURE,
            ConstructorArgs::Points(_) => POINTS_SIGNATURE
        }
    }
}

/// Instantiates tabulated functions from a runtime type name instead of a
/// factory chosen at compile time.
pub struct TypeRegistry {
    types: HashMap<String, RegisteredType>
}

impl TypeRegistry {
    pub fn empty() -> TypeRegistry {
        TypeRegistry { types: HashMap::new() }
    }

    pub fn register(&mut self, descriptor: TypeDescriptor, registered: RegisteredType) {
        self.types.insert(descriptor.name().to_owned(), registered);
    }

    pub fn is_registered(&self, descriptor: &TypeDescriptor) -> bool {
        self.types.contains_key(descriptor.name())
    }

    fn constructors(&self, descriptor: &TypeDescriptor) -> Result<&Constructors, ManagerError> {
        match self.types.get(descriptor.name()) {
            None => Err(ManagerError::TypeNotFound(descriptor.name().to_owned())),
            Some(RegisteredType::Other) => Err(ManagerError::NotAContainerType(descriptor.name().to_owned())),
            Some(RegisteredType::TabulatedFunction(constructors)) => Ok(constructors)
        }
    }

    fn points_constructor(&self, descriptor: &TypeDescriptor) -> Result<PointsConstructor, ManagerError> {
        self.constructors(descriptor)?
            .from_points
            .ok_or_else(|| ManagerError::NoMatchingConstructor {
                type_name: descriptor.name().to_owned(),
                signature: POINTS_SIGNATURE
            })
    }

    fn invoke<C>(descriptor: &TypeDescriptor,
                 signature: &'static str,
                 constructor: C) -> Result<Box<dyn TabulatedFunction>, ManagerError>
        where C: FnOnce() -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        debug!(type_name = descriptor.name(), signature, "dynamic construction");
        constructor().map_err(|source| ManagerError::ConstructionFailed {
            type_name: descriptor.name().to_owned(),
            source
        })
    }

    pub fn create(&self,
                  descriptor: &TypeDescriptor,
                  args: ConstructorArgs<'_>) -> Result<Box<dyn TabulatedFunction>, ManagerError> {
        let constructors = self.constructors(descriptor)?;
        let signature = args.signature();
        let no_match = || ManagerError::NoMatchingConstructor {
            type_name: descriptor.name().to_owned(),
            signature
        };
        match args {
            ConstructorArgs::Count { left, right, count } => {
                let constructor = constructors.from_count.ok_or_else(no_match)?;
                TypeRegistry::invoke(descriptor, signature, || constructor(left, right, count))
            },
            ConstructorArgs::Values { left, right, values } => {
                let constructor = constructors.from_values.ok_or_else(no_match)?;
                TypeRegistry::invoke(descriptor, signature, || constructor(left, right, values))
            },
            ConstructorArgs::Points(points) => {
                let constructor = constructors.from_points.ok_or_else(no_match)?;
                TypeRegistry::invoke(descriptor, signature, || constructor(points))
            }
        }
    }

    pub fn create_from_count(&self,
                             descriptor: &TypeDescriptor,
                             left: f64,
                             right: f64,
                             count: usize) -> Result<Box<dyn TabulatedFunction>, ManagerError> {
        self.create(descriptor, ConstructorArgs::Count { left, right, count })
    }

    pub fn create_from_values(&self,
                              descriptor: &TypeDescriptor,
                              left: f64,
                              right: f64,
                              values: &[f64]) -> Result<Box<dyn TabulatedFunction>, ManagerError> {
        self.create(descriptor, ConstructorArgs::Values { left, right, values })
    }

    pub fn create_from_points(&self,
                              descriptor: &TypeDescriptor,
                              points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, ManagerError> {
        self.create(descriptor, ConstructorArgs::Points(points))
    }

    /// Tabulates `function` into an instance of the described type.
    pub fn tabulate<F>(&self,
                       descriptor: &TypeDescriptor,
                       function: &F,
                       left: f64,
                       right: f64,
                       count: usize) -> Result<Box<dyn TabulatedFunction>, ManagerError>
        where F: Function + ?Sized {
        let points = sample(function, left, right, count)?;
        self.create_from_points(descriptor, &points)
    }

    pub fn input_tabulated_function<R>(&self,
                                       descriptor: &TypeDescriptor,
                                       input: &mut R) -> Result<Box<dyn TabulatedFunction>, ManagerError>
        where R: Read {
        let constructor = self.points_constructor(descriptor)?;
        let points = binarycodec::read_points(input)?;
        TypeRegistry::invoke(descriptor, POINTS_SIGNATURE, || constructor(&points))
    }

    pub fn read_tabulated_function<R>(&self,
                                      descriptor: &TypeDescriptor,
                                      input: &mut R) -> Result<Box<dyn TabulatedFunction>, ManagerError>
        where R: Read {
        let constructor = self.points_constructor(descriptor)?;
        let points = textcodec::read_points(input)?;
        TypeRegistry::invoke(descriptor, POINTS_SIGNATURE, || constructor(&points))
    }
}

fn array_constructors() -> Constructors {
    Constructors::new()
        .with_count(|left, right, count| Ok(Box::new(ArrayTabulatedFunction::from_count(left, right, count)?)))
        .with_values(|left, right, values| Ok(Box::new(ArrayTabulatedFunction::from_values(left, right, values)?)))
        .with_points(|points| Ok(Box::new(ArrayTabulatedFunction::from_points(points)?)))
}

fn linked_list_constructors() -> Constructors {
    Constructors::new()
        .with_count(|left, right, count| Ok(Box::new(LinkedListTabulatedFunction::from_count(left, right, count)?)))
        .with_values(|left, right, values| Ok(Box::new(LinkedListTabulatedFunction::from_values(left, right, values)?)))
        .with_points(|points| Ok(Box::new(LinkedListTabulatedFunction::from_points(points)?)))
}

impl Default for TypeRegistry {
    /// Both tabulated function implementations with every constructor, plus
    /// `FunctionPoint` as a known non-function type.
    fn default() -> Self {
        let mut registry = TypeRegistry::empty();
        registry.register(
            TypeDescriptor::of::<ArrayTabulatedFunction>(),
            RegisteredType::TabulatedFunction(array_constructors())
        );
        registry.register(
            TypeDescriptor::of::<LinkedListTabulatedFunction>(),
            RegisteredType::TabulatedFunction(linked_list_constructors())
        );
        registry.register(TypeDescriptor::of::<FunctionPoint>(), RegisteredType::Other);
        registry
    }
}
