//! Template and instance assembly for a managed object type.

use jsr373_model::{ResourceInstance, ResourceInstanceBuilder, ResourceTemplate};
use tracing::debug;

use crate::error::{Result, TypeError};
use crate::object_type::{apply_default_values, describe_attributes, ManagedObjectType};

/// External form of the help URL for `ty` under `base_url`
pub fn template_url(base_url: &str, ty: &dyn ManagedObjectType) -> String {
    format!(
        "{}/help/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(ty.path())
    )
}

/// Assemble the template of `ty` without binding it.
pub fn build_template(ty: &dyn ManagedObjectType, base_url: &str) -> Result<ResourceTemplate> {
    let mut builder = ResourceTemplate::builder(ty.name());
    describe_attributes(ty, &mut builder)?;
    Ok(builder.build(template_url(base_url, ty)))
}

/// Assemble the template of `ty` and bind it to the type.
pub fn bind_template<'a>(ty: &'a dyn ManagedObjectType, base_url: &str) -> Result<&'a ResourceTemplate> {
    let template = build_template(ty, base_url)?;
    ty.set_template(template)?;
    debug!("Bound template for {}", ty.name());
    ty.template().ok_or_else(|| TypeError::TemplateUnbound {
        name: ty.name().to_string(),
    })
}

/// Start an instance of `ty` named `name` with every default applied. The
/// caller may override values before building.
pub fn new_instance(ty: &dyn ManagedObjectType, name: impl Into<String>) -> ResourceInstanceBuilder {
    let mut builder = ResourceInstance::builder(ty.name(), name);
    apply_default_values(ty, &mut builder);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_type::testing::{Child, Clashing, Root};
    use crate::object_type::{BASE_ATTRIBUTES, EVENT_PROVIDER, STATE_MANAGEABLE, STATISTICS_PROVIDER};
    use crate::registry::TypeRegistry;
    use crate::types::{self, domain, J2eeServer, Jvm};
    use jsr373_model::{AttributeType, ModelError};
    use std::collections::HashSet;

    #[test]
    fn test_template_url() {
        let child = Child::default();
        assert_eq!(template_url("http://x", &child), "http://x/help/child");
        assert_eq!(template_url("http://x/", &child), "http://x/help/child");
    }

    #[test]
    fn test_child_template_attribute_set() {
        let template = build_template(&Child::default(), "http://x").unwrap();
        let names: HashSet<_> = template.attributes().iter().map(|a| a.name()).collect();
        let expected: HashSet<_> = [STATE_MANAGEABLE, STATISTICS_PROVIDER, EVENT_PROVIDER, "label"]
            .into_iter()
            .collect();
        assert_eq!(names, expected);
        assert_eq!(template.attributes().len(), expected.len());
        assert_eq!(template.attribute("label").unwrap().attribute_type(), AttributeType::String);
        assert_eq!(template.type_name(), "child");
    }

    #[test]
    fn test_build_template_does_not_bind() {
        let root = Root::default();
        build_template(&root, "http://x").unwrap();
        assert!(root.template().is_none());

        let bound = bind_template(&root, "http://x").unwrap();
        assert_eq!(bound.url(), "http://x/help/root");
        assert!(matches!(
            bind_template(&root, "http://x"),
            Err(TypeError::TemplateAlreadyBound { .. })
        ));
    }

    #[test]
    fn test_clash_leaves_type_unbound() {
        let clashing = Clashing::default();
        let err = bind_template(&clashing, "http://x").unwrap_err();
        assert!(matches!(err, TypeError::Model(ModelError::DuplicateAttribute { .. })));
        assert!(clashing.template().is_none());
    }

    #[test]
    fn test_every_builtin_template_starts_with_base_attributes() {
        let registry = TypeRegistry::new(types::registrations()).unwrap();
        for (_, ty) in registry.iter() {
            let template = build_template(ty.as_ref(), "http://localhost/api").unwrap();
            let names: Vec<_> = template.attributes().iter().map(|a| a.name()).collect();
            assert_eq!(&names[..3], &BASE_ATTRIBUTES[..], "{}", ty.name());
            let unique: HashSet<_> = names.iter().collect();
            assert_eq!(unique.len(), names.len(), "{}", ty.name());
        }
    }

    #[test]
    fn test_new_instance_defaults_and_overrides() {
        let registry = TypeRegistry::new(types::registrations()).unwrap();
        let server = registry.lookup_type::<J2eeServer>().unwrap();
        let mut builder = new_instance(server.as_ref(), "server-one");
        builder.set_attribute(STATE_MANAGEABLE, true);
        let instance = builder.build();

        assert_eq!(instance.type_name(), "J2EEServer");
        assert_eq!(instance.attribute(STATE_MANAGEABLE).unwrap().as_bool(), Some(true));
        assert_eq!(instance.attribute(STATISTICS_PROVIDER).unwrap().as_bool(), Some(false));
        assert_eq!(instance.attribute(EVENT_PROVIDER).unwrap().as_bool(), Some(false));
        assert_eq!(instance.attribute(domain::SERVER_VENDOR).unwrap().as_str(), Some("JBoss"));
    }

    #[test]
    fn test_new_instance_without_variant_defaults() {
        let registry = TypeRegistry::new(types::registrations()).unwrap();
        let jvm = registry.lookup_type::<Jvm>().unwrap();
        let instance = new_instance(jvm.as_ref(), "jvm-1").build();
        assert_eq!(instance.attributes().keys().len(), 3);
    }
}
