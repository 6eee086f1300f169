use std::cell::{
    Cell,
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::reflection::typeregistry::TypeRegistry;
use crate::tabulated::tabulatedfunction::FunctionKind;
use crate::tabulated::tabulatedfunctionfactorymanager::TabulatedFunctionFactoryManager;
use crate::tabulated::tabulatedfunctions::TabulatedFunctions;


fn default_factory() -> FunctionKind {
    FunctionKind::Array
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default = "default_factory")]
    default_factory: FunctionKind,
    #[serde(default)]
    factories: Vec<serde_json::Value>
}

/// Library wide settings: the factory a fresh construction provider starts
/// with, named factory selections and the type registry used for dynamic
/// construction.
pub struct Configuration {
    default_kind_cell: Cell<FunctionKind>,
    factory_manager_cell: RefCell<Manager<FunctionKind>>,
    type_registry: TypeRegistry
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            default_kind_cell: Cell::new(default_factory()),
            factory_manager_cell: RefCell::new(TabulatedFunctionFactoryManager::new()),
            type_registry: TypeRegistry::default()
        }
    }

    pub fn default_kind(&self) -> FunctionKind {
        self.default_kind_cell.get()
    }

    pub fn set_default_kind(&self, kind: FunctionKind) {
        self.default_kind_cell.set(kind);
    }

    pub fn factory_manager(&self) -> RefMut<'_, Manager<FunctionKind>> {
        self.factory_manager_cell.borrow_mut()
    }

    pub fn type_registry(&self) -> &TypeRegistry {
        &self.type_registry
    }

    /// Construction provider starting with the configured default factory.
    pub fn tabulated_functions(&self) -> TabulatedFunctions {
        TabulatedFunctions::with_kind(self.default_kind())
    }

    /// Construction provider starting with the factory registered as `name`.
    pub fn named_tabulated_functions(&self, name: &str) -> Result<TabulatedFunctions, ManagerError> {
        let kind = self.factory_manager().get(name)?;
        Ok(TabulatedFunctions::with_kind(kind))
    }

    pub fn load_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        self.factory_manager().insert_obj_from_json_vec(&json_prop.factories)?;
        self.set_default_kind(json_prop.default_factory);
        debug!(
            default_factory = %json_prop.default_factory,
            named_factories = json_prop.factories.len(),
            "configuration loaded"
        );
        Ok(())
    }

    pub fn from_reader<P>(&self, file_path: P) -> Result<(), ManagerError>
        where P: AsRef<Path> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.load_json(json_value)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
