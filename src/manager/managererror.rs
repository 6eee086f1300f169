use serde::Deserialize;
use thiserror::Error;

use crate::function::functionerror::FunctionError;

/// Failures raised while resolving named objects: registry lookups, dynamic
/// construction and configuration loading.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("type '{0}' is not registered")]
    TypeNotFound(String),

    #[error("type '{0}' is not a tabulated function")]
    NotAContainerType(String),

    #[error("type '{type_name}' has no constructor {signature}")]
    NoMatchingConstructor { type_name: String, signature: &'static str },

    #[error("failed to construct '{type_name}': {source}")]
    ConstructionFailed {
        type_name: String,
        #[source]
        source: FunctionError
    },

    #[error(transparent)]
    Function(#[from] FunctionError),

    #[error("key '{0}' not found")]
    NameNotFound(String),

    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error)
}

impl ManagerError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, Self>
        where T: for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFound(name.to_owned())
    }
}
