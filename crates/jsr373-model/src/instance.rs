//! Resource Instances

use serde::{Deserialize, Serialize};

use crate::node::ModelNode;

/// A concrete managed resource carrying attribute values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInstance {
    type_name: String,
    name: String,
    attributes: ModelNode,
}

impl ResourceInstance {
    pub fn builder(type_name: impl Into<String>, name: impl Into<String>) -> ResourceInstanceBuilder {
        ResourceInstanceBuilder {
            type_name: type_name.into(),
            name: name.into(),
            attributes: ModelNode::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, name: &str) -> Option<&ModelNode> {
        self.attributes.child(name)
    }

    pub fn attributes(&self) -> &ModelNode {
        &self.attributes
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<ModelNode>) {
        self.attributes.get(name).set(value);
    }

    pub fn to_model(&self) -> ModelNode {
        let mut model = ModelNode::new();
        model.get("type").set(self.type_name.as_str());
        model.get("name").set(self.name.as_str());
        *model.get("attributes") = self.attributes.clone();
        model
    }
}

/// Single-writer builder for [`ResourceInstance`].
#[derive(Debug)]
pub struct ResourceInstanceBuilder {
    type_name: String,
    name: String,
    attributes: ModelNode,
}

impl ResourceInstanceBuilder {
    /// Set an attribute value. A later call for the same name wins.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<ModelNode>) -> &mut Self {
        self.attributes.get(name).set(value);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&ModelNode> {
        self.attributes.child(name)
    }

    pub fn build(self) -> ResourceInstance {
        ResourceInstance {
            type_name: self.type_name,
            name: self.name,
            attributes: self.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut builder = ResourceInstance::builder("J2EEServer", "server-one");
        builder
            .set_attribute("stateManageable", false)
            .set_attribute("stateManageable", true)
            .set_attribute("serverVendor", "JBoss");
        let instance = builder.build();

        assert_eq!(instance.type_name(), "J2EEServer");
        assert_eq!(instance.name(), "server-one");
        assert_eq!(instance.attribute("stateManageable").unwrap().as_bool(), Some(true));
        assert_eq!(instance.attribute("serverVendor").unwrap().as_str(), Some("JBoss"));
    }

    #[test]
    fn test_to_model() {
        let mut builder = ResourceInstance::builder("JVM", "jvm-1");
        builder.set_attribute("node", "localhost");
        let model = builder.build().to_model();

        assert_eq!(model.child("type").unwrap().as_str(), Some("JVM"));
        assert_eq!(
            model
                .child("attributes")
                .and_then(|attrs| attrs.child("node"))
                .and_then(ModelNode::as_str),
            Some("localhost")
        );
    }
}
