//! Error types for the gateway resource model

use resource_types::{ApiDataType, TypesError};

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The suffix, or the `(type, suffix)` pair, is not registered in the catalog
    #[error("Unknown attribute {suffix}")]
    UnknownAttribute {
        data_type: Option<ApiDataType>,
        suffix: String,
    },

    #[error("Duplicate attribute suffix: {0}")]
    DuplicateSuffix(String),

    #[error("Attribute catalog is already initialized")]
    CatalogInitialized,

    #[error("Unknown resource prefix: {0}")]
    UnknownPrefix(String),

    /// An initial value was rejected by the item
    #[error("Invalid value for {suffix}: {value}")]
    InvalidValue { suffix: String, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Types(#[from] TypesError),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(err.to_string())
    }
}
