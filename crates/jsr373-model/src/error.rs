use thiserror::Error;

/// Errors raised while assembling templates and instances.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Two descriptors with the same name were added to one template
    #[error("attribute '{attribute}' is already defined on template '{template}'")]
    DuplicateAttribute { template: String, attribute: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
