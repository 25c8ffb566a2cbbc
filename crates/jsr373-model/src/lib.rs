//! JSR-373 management model
//!
//! Attribute descriptors, per-type resource templates, resource instances and
//! the `ModelNode` tree they render to.

pub mod attribute;
pub mod error;
pub mod instance;
pub mod node;
pub mod template;

pub use attribute::{Attribute, AttributeBuilder, AttributeType};
pub use error::{ModelError, Result};
pub use instance::{ResourceInstance, ResourceInstanceBuilder};
pub use node::ModelNode;
pub use template::{ResourceTemplate, ResourceTemplateBuilder};
