//! Model Node
//!
//! Tree-shaped value used for attribute values and response documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tree of named children with JSON leaf values.
///
/// An undefined node turns into an object the first time a child is selected
/// through [`ModelNode::get`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelNode {
    #[default]
    Undefined,
    Object(BTreeMap<String, ModelNode>),
    Leaf(Value),
}

impl ModelNode {
    pub fn new() -> Self {
        Self::Undefined
    }

    /// Select the child `name`, creating it (and turning this node into an
    /// object) if needed. A leaf value held by this node is discarded.
    pub fn get(&mut self, name: &str) -> &mut ModelNode {
        if !matches!(self, Self::Object(_)) {
            *self = Self::Object(BTreeMap::new());
        }
        match self {
            Self::Object(children) => children.entry(name.to_string()).or_default(),
            _ => unreachable!("node was just made an object"),
        }
    }

    /// Walk a path of child names, creating missing nodes along the way.
    pub fn get_path(&mut self, path: &[&str]) -> &mut ModelNode {
        path.iter().fold(self, |node, name| node.get(name))
    }

    /// Look up an existing child without creating it.
    pub fn child(&self, name: &str) -> Option<&ModelNode> {
        match self {
            Self::Object(children) => children.get(name),
            _ => None,
        }
    }

    pub fn set(&mut self, value: impl Into<ModelNode>) -> &mut Self {
        *self = value.into();
        self
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Leaf(value) => value.as_bool(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Leaf(value) => value.as_str(),
            _ => None,
        }
    }

    /// Child names in sorted order. Empty for leaves.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::Object(children) => children.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Undefined => Value::Null,
            Self::Object(children) => Value::Object(
                children
                    .iter()
                    .map(|(name, child)| (name.clone(), child.to_value()))
                    .collect(),
            ),
            Self::Leaf(value) => value.clone(),
        }
    }
}

impl From<Value> for ModelNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Undefined,
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(name, child)| (name, ModelNode::from(child)))
                    .collect(),
            ),
            leaf => Self::Leaf(leaf),
        }
    }
}

impl From<bool> for ModelNode {
    fn from(value: bool) -> Self {
        Self::Leaf(Value::Bool(value))
    }
}

impl From<&str> for ModelNode {
    fn from(value: &str) -> Self {
        Self::Leaf(Value::String(value.to_string()))
    }
}

impl From<String> for ModelNode {
    fn from(value: String) -> Self {
        Self::Leaf(Value::String(value))
    }
}

impl From<i64> for ModelNode {
    fn from(value: i64) -> Self {
        Self::Leaf(Value::from(value))
    }
}

impl From<Vec<String>> for ModelNode {
    fn from(values: Vec<String>) -> Self {
        Self::Leaf(Value::from(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_creates_children() {
        let mut node = ModelNode::new();
        assert!(!node.is_defined());

        node.get("server").get("rel").set("help");
        node.get_path(&["server", "href"]).set("http://x/help/server");

        let server = node.child("server").unwrap();
        assert_eq!(server.keys(), vec!["href", "rel"]);
        assert_eq!(server.child("rel").unwrap().as_str(), Some("help"));
        assert!(node.child("missing").is_none());
    }

    #[test]
    fn test_get_replaces_leaf() {
        let mut node = ModelNode::from(true);
        assert_eq!(node.as_bool(), Some(true));

        node.get("child").set(false);
        assert_eq!(node.as_bool(), None);
        assert_eq!(node.child("child").unwrap().as_bool(), Some(false));
    }

    #[test]
    fn test_serializes_as_plain_json() {
        let mut node = ModelNode::new();
        node.get("stateManageable").set(false);
        node.get("serverVendor").set("JBoss");

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value, json!({"serverVendor": "JBoss", "stateManageable": false}));
        assert_eq!(node.to_value(), value);

        let back: ModelNode = serde_json::from_value(value).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_undefined_serializes_as_null() {
        let value = serde_json::to_value(ModelNode::new()).unwrap();
        assert_eq!(value, Value::Null);
    }
}
