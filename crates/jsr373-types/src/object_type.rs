//! Managed Object Types
//!
//! Every JSR-77 type variant implements [`ManagedObjectType`]. The three base
//! attributes shared by all variants are contributed by
//! [`describe_attributes`] and [`apply_default_values`] before the variant's
//! own contribution runs.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use jsr373_model::{
    Attribute, AttributeType, ModelError, ResourceInstanceBuilder, ResourceTemplate,
    ResourceTemplateBuilder,
};
use once_cell::sync::OnceCell;

use crate::error::{Result, TypeError};

pub const STATE_MANAGEABLE: &str = "stateManageable";
pub const STATISTICS_PROVIDER: &str = "statisticsProvider";
pub const EVENT_PROVIDER: &str = "eventProvider";

/// Base attribute names in the order they are contributed
pub const BASE_ATTRIBUTES: [&str; 3] = [STATE_MANAGEABLE, STATISTICS_PROVIDER, EVENT_PROVIDER];

const STATE_MANAGEABLE_DESCRIPTION: &str = "Whether the object is state manageable.";
const STATISTICS_PROVIDER_DESCRIPTION: &str =
    "Whether the object supports the generation of statistics.";

// Existing consumers see the stateManageable text here.
#[cfg(not(feature = "corrected-descriptions"))]
const EVENT_PROVIDER_DESCRIPTION: &str = STATE_MANAGEABLE_DESCRIPTION;
#[cfg(feature = "corrected-descriptions")]
const EVENT_PROVIDER_DESCRIPTION: &str = "Whether the object provides events.";

/// Identity of a concrete type variant.
///
/// Compares by the variant's Rust `TypeId`; the type name is kept only for
/// diagnostics.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    type_name: &'static str,
}

impl TypeKey {
    pub fn of<T: ManagedObjectType>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Rust type name of the variant, e.g. `jsr373_types::types::domain::J2eeServer`
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = self.type_name.rsplit("::").next().unwrap_or(self.type_name);
        write!(f, "TypeKey({})", short)
    }
}

/// Write-once holder for a variant's template.
///
/// Unbound until the first [`TemplateSlot::bind`]; bound is terminal.
#[derive(Default)]
pub struct TemplateSlot(OnceCell<ResourceTemplate>);

impl TemplateSlot {
    pub fn new() -> Self {
        Self(OnceCell::new())
    }

    pub fn bind(&self, type_name: &str, template: ResourceTemplate) -> Result<()> {
        self.0
            .set(template)
            .map_err(|_| TypeError::TemplateAlreadyBound {
                name: type_name.to_string(),
            })
    }

    pub fn get(&self) -> Option<&ResourceTemplate> {
        self.0.get()
    }

    pub fn is_bound(&self) -> bool {
        self.0.get().is_some()
    }
}

impl fmt::Debug for TemplateSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.get() {
            Some(template) => write!(f, "Bound({})", template.url()),
            None => write!(f, "Unbound"),
        }
    }
}

/// One kind of manageable object.
///
/// Implementors only describe what is specific to them; the base attributes
/// are added by [`describe_attributes`] and [`apply_default_values`].
pub trait ManagedObjectType: Send + Sync + 'static {
    /// Unique, stable name (e.g. `J2EEServer`)
    fn name(&self) -> &'static str;

    /// Stable path segment (e.g. `server`)
    fn path(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Declared parent types. Empty for a root type. Each call returns a new
    /// vector.
    fn parents(&self) -> Vec<TypeKey>;

    /// Add the descriptors specific to this variant.
    fn add_attribute_descriptions(
        &self,
        _builder: &mut ResourceTemplateBuilder,
    ) -> std::result::Result<(), ModelError> {
        Ok(())
    }

    /// Add the default values specific to this variant.
    fn set_default_attribute_values(&self, _builder: &mut ResourceInstanceBuilder) {}

    fn template_slot(&self) -> &TemplateSlot;

    /// Bind the built template. Fails if one is already bound.
    fn set_template(&self, template: ResourceTemplate) -> Result<()> {
        self.template_slot().bind(self.name(), template)
    }

    fn template(&self) -> Option<&ResourceTemplate> {
        self.template_slot().get()
    }
}

impl fmt::Debug for dyn ManagedObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedObjectType")
            .field("name", &self.name())
            .field("path", &self.path())
            .field("template", self.template_slot())
            .finish()
    }
}

/// Add the base attribute descriptors shared by every variant.
pub fn add_base_attribute_descriptions(
    builder: &mut ResourceTemplateBuilder,
) -> std::result::Result<(), ModelError> {
    builder
        .add_attribute(Attribute::new(
            STATE_MANAGEABLE,
            AttributeType::Boolean,
            STATE_MANAGEABLE_DESCRIPTION,
        ))?
        .add_attribute(Attribute::new(
            STATISTICS_PROVIDER,
            AttributeType::Boolean,
            STATISTICS_PROVIDER_DESCRIPTION,
        ))?
        .add_attribute(Attribute::new(
            EVENT_PROVIDER,
            AttributeType::Boolean,
            EVENT_PROVIDER_DESCRIPTION,
        ))?;
    Ok(())
}

/// Base descriptors first, then the variant's own.
pub fn describe_attributes(
    ty: &dyn ManagedObjectType,
    builder: &mut ResourceTemplateBuilder,
) -> Result<()> {
    add_base_attribute_descriptions(builder)?;
    ty.add_attribute_descriptions(builder)?;
    Ok(())
}

pub fn set_base_default_values(builder: &mut ResourceInstanceBuilder) {
    for name in BASE_ATTRIBUTES {
        builder.set_attribute(name, false);
    }
}

/// Base defaults (all `false`) first, then the variant's own.
pub fn apply_default_values(ty: &dyn ManagedObjectType, builder: &mut ResourceInstanceBuilder) {
    set_base_default_values(builder);
    ty.set_default_attribute_values(builder);
}

#[cfg(test)]
pub(crate) mod testing {
    //! Small hierarchy used by the registry and assembly tests.

    use super::*;

    #[derive(Debug, Default)]
    pub struct Root {
        template: TemplateSlot,
    }

    impl ManagedObjectType for Root {
        fn name(&self) -> &'static str {
            "root"
        }
        fn path(&self) -> &'static str {
            "root"
        }
        fn description(&self) -> &'static str {
            "Root of the test hierarchy"
        }
        fn parents(&self) -> Vec<TypeKey> {
            Vec::new()
        }
        fn template_slot(&self) -> &TemplateSlot {
            &self.template
        }
    }

    #[derive(Debug, Default)]
    pub struct Child {
        template: TemplateSlot,
    }

    impl ManagedObjectType for Child {
        fn name(&self) -> &'static str {
            "child"
        }
        fn path(&self) -> &'static str {
            "child"
        }
        fn description(&self) -> &'static str {
            "Child of root"
        }
        fn parents(&self) -> Vec<TypeKey> {
            vec![TypeKey::of::<Root>()]
        }
        fn add_attribute_descriptions(
            &self,
            builder: &mut ResourceTemplateBuilder,
        ) -> std::result::Result<(), ModelError> {
            builder.add_attribute(Attribute::new("label", AttributeType::String, "Display label"))?;
            Ok(())
        }
        fn set_default_attribute_values(&self, builder: &mut ResourceInstanceBuilder) {
            builder.set_attribute("label", "unnamed");
        }
        fn template_slot(&self) -> &TemplateSlot {
            &self.template
        }
    }

    /// Declares an attribute that collides with a base attribute.
    #[derive(Debug, Default)]
    pub struct Clashing {
        template: TemplateSlot,
    }

    impl ManagedObjectType for Clashing {
        fn name(&self) -> &'static str {
            "clashing"
        }
        fn path(&self) -> &'static str {
            "clashing"
        }
        fn description(&self) -> &'static str {
            "Redeclares stateManageable"
        }
        fn parents(&self) -> Vec<TypeKey> {
            Vec::new()
        }
        fn add_attribute_descriptions(
            &self,
            builder: &mut ResourceTemplateBuilder,
        ) -> std::result::Result<(), ModelError> {
            builder.add_attribute(Attribute::new(STATE_MANAGEABLE, AttributeType::String, "clash"))?;
            Ok(())
        }
        fn template_slot(&self) -> &TemplateSlot {
            &self.template
        }
    }

    macro_rules! construct_by_default {
        ($($ty:ty),*) => {
            $(impl crate::registry::Construct for $ty {
                fn construct() -> Self {
                    Self::default()
                }
            })*
        };
    }

    construct_by_default!(Root, Child, Clashing);
}
