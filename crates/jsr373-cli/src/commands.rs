use std::sync::Arc;

use anyhow::{anyhow, bail};
use serde_json::{json, Value};

use jsr373_model::ModelNode;
use jsr373_types::{describe_type, new_instance, type_links, ManagedObjectType, TypeRegistry};

/// Resolve a type by name, falling back to its path
pub fn find_type<'a>(registry: &'a TypeRegistry, name: &str) -> Option<&'a Arc<dyn ManagedObjectType>> {
    registry
        .lookup_name(name)
        .or_else(|| registry.lookup_path(name))
}

pub fn list_types(registry: &TypeRegistry) -> Value {
    let types: Vec<Value> = registry
        .iter()
        .map(|(key, ty)| {
            let parents: Vec<&str> = registry
                .parents(key)
                .unwrap_or_default()
                .into_iter()
                .map(|parent| parent.name())
                .collect();
            json!({
                "name": ty.name(),
                "path": ty.path(),
                "description": ty.description(),
                "parents": parents,
            })
        })
        .collect();
    Value::Array(types)
}

pub fn show_template(registry: &TypeRegistry, name: &str) -> anyhow::Result<Value> {
    let ty = find_type(registry, name).ok_or_else(|| anyhow!("unknown type: {}", name))?;
    let key = registry
        .key_of(ty.as_ref())
        .ok_or_else(|| anyhow!("type {} is not held by the registry", ty.name()))?;
    Ok(describe_type(registry, key)?.to_value())
}

pub fn build_instance(
    registry: &TypeRegistry,
    type_name: &str,
    name: &str,
    overrides: &[String],
) -> anyhow::Result<Value> {
    let ty = find_type(registry, type_name).ok_or_else(|| anyhow!("unknown type: {}", type_name))?;
    let mut builder = new_instance(ty.as_ref(), name);
    for spec in overrides {
        let (attr, value) = parse_override(spec)?;
        if let Some(template) = ty.template() {
            if template.attribute(attr).is_none() {
                bail!("type {} has no attribute '{}'", ty.name(), attr);
            }
        }
        builder.set_attribute(attr, value);
    }
    Ok(builder.build().to_model().to_value())
}

pub fn links(registry: &TypeRegistry) -> anyhow::Result<Value> {
    Ok(type_links(registry)?.to_value())
}

/// Split `name=value`; `true`/`false` become booleans, anything else a string.
pub fn parse_override(spec: &str) -> anyhow::Result<(&str, ModelNode)> {
    let Some((name, raw)) = spec.split_once('=') else {
        bail!("override '{}' is not of the form NAME=VALUE", spec);
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("override '{}' has an empty attribute name", spec);
    }
    let value = match raw {
        "true" => ModelNode::from(true),
        "false" => ModelNode::from(false),
        other => ModelNode::from(other),
    };
    Ok((name, value))
}
