//! Error types for the type registry.

use jsr373_model::ModelError;
use thiserror::Error;

/// Registry construction failures. Any of these aborts initialization; there
/// is no partially populated registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("type {0} is registered more than once")]
    DuplicateKey(&'static str),

    #[error("types {first} and {second} share the name '{name}'")]
    DuplicateName {
        name: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("types {first} and {second} share the path '{path}'")]
    DuplicatePath {
        path: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("type '{child}' declares parent {parent}, which is not registered")]
    MissingParent {
        child: &'static str,
        parent: &'static str,
    },

    #[error("type '{child}' declares parent {parent} more than once")]
    DuplicateParent {
        child: &'static str,
        parent: &'static str,
    },

    #[error("parent cycle through type '{0}'")]
    ParentCycle(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("type registry initialization failed: {0}")]
    Registration(#[from] RegistrationError),

    #[error("template assembly failed: {0}")]
    Model(#[from] ModelError),

    #[error("already built a template for {name}")]
    TemplateAlreadyBound { name: String },

    #[error("no template has been built for {name}")]
    TemplateUnbound { name: String },

    #[error("unknown managed object type: {0}")]
    UnknownType(String),
}

pub type Result<T> = std::result::Result<T, TypeError>;
