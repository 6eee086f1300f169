use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::tabulated::tabulatedfunction::FunctionKind;

#[derive(Deserialize)]
struct TabulatedFunctionFactoryJsonProp {
    kind: FunctionKind
}


fn get_function_kind_from_json(json_value: serde_json::Value) -> Result<FunctionKind, ManagerError> {
    let json_prop: TabulatedFunctionFactoryJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    Ok(json_prop.kind)
}


/// Named factory selections, e.g. `{"name": "dense", "kind": "Array"}`.
pub struct TabulatedFunctionFactoryManager;


impl TabulatedFunctionFactoryManager {
    pub fn new() -> Manager<FunctionKind> {
        Manager::new(get_function_kind_from_json)
    }
}
