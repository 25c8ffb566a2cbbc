//! Help links and type documents

use jsr373_model::ModelNode;

use crate::error::{Result, TypeError};
use crate::object_type::{ManagedObjectType, TypeKey};
use crate::registry::TypeRegistry;

/// Add `{<type name>: {rel: "help", href: <template url>}}` to `doc`.
///
/// Fails without touching `doc` if the type has no bound template.
pub fn add_type_link(doc: &mut ModelNode, ty: &dyn ManagedObjectType) -> Result<()> {
    let template = ty.template().ok_or_else(|| TypeError::TemplateUnbound {
        name: ty.name().to_string(),
    })?;
    let link = doc.get(ty.name());
    link.get("rel").set("help");
    link.get("href").set(template.url());
    Ok(())
}

/// Document describing one registered type: identity, attributes, and help
/// links to its parents and children. Every type involved must have a bound
/// template.
pub fn describe_type(registry: &TypeRegistry, key: TypeKey) -> Result<ModelNode> {
    let ty = registry
        .lookup(key)
        .ok_or_else(|| TypeError::UnknownType(key.type_name().to_string()))?;
    let template = ty.template().ok_or_else(|| TypeError::TemplateUnbound {
        name: ty.name().to_string(),
    })?;

    let mut doc = ModelNode::new();
    doc.get("name").set(ty.name());
    doc.get("path").set(ty.path());
    doc.get("description").set(ty.description());
    doc.get("href").set(template.url());
    *doc.get("attributes") = template.to_model();

    let parents = doc.get("parents");
    for parent in registry.parents(key).unwrap_or_default() {
        add_type_link(parents, parent.as_ref())?;
    }
    let children = doc.get("children");
    for child in registry.children(key).unwrap_or_default() {
        add_type_link(children, child.as_ref())?;
    }
    Ok(doc)
}

/// Help links for every registered type, keyed by type name.
pub fn type_links(registry: &TypeRegistry) -> Result<ModelNode> {
    let mut doc = ModelNode::new();
    for (_, ty) in registry.iter() {
        add_type_link(&mut doc, ty.as_ref())?;
    }
    Ok(doc)
}
