//! JSR-373 managed object types
//!
//! A closed set of managed object type variants, the registry holding their
//! canonical instances, and the assembly of per-type templates and instance
//! defaults.

pub mod assembly;
pub mod config;
pub mod error;
pub mod links;
pub mod object_type;
pub mod registry;
pub mod types;

pub use assembly::{bind_template, build_template, new_instance, template_url};
pub use config::{Config, ConfigError};
pub use error::{RegistrationError, Result, TypeError};
pub use links::{add_type_link, describe_type, type_links};
pub use object_type::{
    apply_default_values, describe_attributes, ManagedObjectType, TemplateSlot, TypeKey,
    BASE_ATTRIBUTES, EVENT_PROVIDER, STATE_MANAGEABLE, STATISTICS_PROVIDER,
};
pub use registry::{Registration, TypeRegistry};
