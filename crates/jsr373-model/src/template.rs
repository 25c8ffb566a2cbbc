//! Resource Templates
//!
//! A template is the immutable attribute set shared by every instance of one
//! managed object type, plus the URL its help document is served from.

use std::collections::HashMap;

use crate::attribute::Attribute;
use crate::error::{ModelError, Result};
use crate::node::ModelNode;

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTemplate {
    type_name: String,
    url: String,
    attributes: Vec<Attribute>,
    /// Fast attribute name → position lookup
    index: HashMap<String, usize>,
}

impl ResourceTemplate {
    pub fn builder(type_name: impl Into<String>) -> ResourceTemplateBuilder {
        ResourceTemplateBuilder {
            type_name: type_name.into(),
            attributes: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// External form of the help URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Attributes in the order they were added
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.index.get(name).map(|idx| &self.attributes[*idx])
    }

    /// Describe the attribute set as `{name: {type, description, nillable}}`.
    pub fn to_model(&self) -> ModelNode {
        let mut model = ModelNode::new();
        for attr in &self.attributes {
            let node = model.get(attr.name());
            node.get("type").set(attr.attribute_type().to_string());
            node.get("description").set(attr.description());
            node.get("nillable").set(attr.is_nillable());
        }
        model
    }
}

/// Single-writer builder for [`ResourceTemplate`].
#[derive(Debug)]
pub struct ResourceTemplateBuilder {
    type_name: String,
    attributes: Vec<Attribute>,
    index: HashMap<String, usize>,
}

impl ResourceTemplateBuilder {
    /// Append a descriptor. Names must be unique within one template.
    pub fn add_attribute(&mut self, attribute: Attribute) -> Result<&mut Self> {
        if self.index.contains_key(attribute.name()) {
            return Err(ModelError::DuplicateAttribute {
                template: self.type_name.clone(),
                attribute: attribute.name().to_string(),
            });
        }
        self.index.insert(attribute.name().to_string(), self.attributes.len());
        self.attributes.push(attribute);
        Ok(self)
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(Attribute::name)
    }

    pub fn build(self, url: impl Into<String>) -> ResourceTemplate {
        ResourceTemplate {
            type_name: self.type_name,
            url: url.into(),
            attributes: self.attributes,
            index: self.index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeType;

    #[test]
    fn test_attributes_keep_insertion_order() {
        let mut builder = ResourceTemplate::builder("J2EEServer");
        builder
            .add_attribute(Attribute::new("b", AttributeType::Boolean, "second letter"))
            .unwrap()
            .add_attribute(Attribute::new("a", AttributeType::String, "first letter"))
            .unwrap();
        let template = builder.build("http://localhost/help/server");

        let names: Vec<_> = template.attributes().iter().map(Attribute::name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(template.attribute("a").unwrap().attribute_type(), AttributeType::String);
        assert_eq!(template.url(), "http://localhost/help/server");
        assert_eq!(template.type_name(), "J2EEServer");
    }

    #[test]
    fn test_duplicate_attribute_rejected() {
        let mut builder = ResourceTemplate::builder("JVM");
        builder
            .add_attribute(Attribute::new("node", AttributeType::String, "Host"))
            .unwrap();
        let err = builder
            .add_attribute(Attribute::new("node", AttributeType::Boolean, "Other"))
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateAttribute {
                template: "JVM".to_string(),
                attribute: "node".to_string(),
            }
        );
        assert_eq!(builder.attribute_names().count(), 1);
    }

    #[test]
    fn test_to_model() {
        let mut builder = ResourceTemplate::builder("JVM");
        builder
            .add_attribute(Attribute::new("javaVendor", AttributeType::String, "Vendor"))
            .unwrap();
        let model = builder.build("http://x/help/jvm").to_model();

        let attr = model.child("javaVendor").unwrap();
        assert_eq!(attr.child("type").unwrap().as_str(), Some("STRING"));
        assert_eq!(attr.child("description").unwrap().as_str(), Some("Vendor"));
        assert_eq!(attr.child("nillable").unwrap().as_bool(), Some(false));
    }
}
