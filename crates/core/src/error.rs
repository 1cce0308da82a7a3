//! Error types for PMS Core

use thiserror::Error;

use crate::models::EntityKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("Illegal transition for {kind} {id}: {from} -> {to}")]
    IllegalTransition {
        kind: EntityKind,
        id: String,
        from: String,
        to: String,
    },

    #[error("Invalid {kind} filter: {name}")]
    InvalidFilter { kind: EntityKind, name: String },

    #[error("Invalid tab: {0}")]
    InvalidTab(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Unknown quick action: {0}")]
    UnknownAction(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
