//! Attribute descriptors

use serde::{Deserialize, Serialize};

/// Value type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttributeType {
    Boolean,
    Int,
    Long,
    String,
    List,
    Object,
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean => write!(f, "BOOLEAN"),
            Self::Int => write!(f, "INT"),
            Self::Long => write!(f, "LONG"),
            Self::String => write!(f, "STRING"),
            Self::List => write!(f, "LIST"),
            Self::Object => write!(f, "OBJECT"),
        }
    }
}

/// Immutable description of one attribute on a resource template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    #[serde(rename = "type")]
    ty: AttributeType,
    description: String,
    #[serde(default)]
    nillable: bool,
}

impl Attribute {
    pub fn new(name: impl Into<String>, ty: AttributeType, description: impl Into<String>) -> Self {
        Self::builder(name, ty, description).build()
    }

    pub fn builder(
        name: impl Into<String>,
        ty: AttributeType,
        description: impl Into<String>,
    ) -> AttributeBuilder {
        AttributeBuilder {
            name: name.into(),
            ty,
            description: description.into(),
            nillable: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute_type(&self) -> AttributeType {
        self.ty
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether instances may leave this attribute undefined
    pub fn is_nillable(&self) -> bool {
        self.nillable
    }
}

pub struct AttributeBuilder {
    name: String,
    ty: AttributeType,
    description: String,
    nillable: bool,
}

impl AttributeBuilder {
    pub fn nillable(mut self, nillable: bool) -> Self {
        self.nillable = nillable;
        self
    }

    pub fn build(self) -> Attribute {
        Attribute {
            name: self.name,
            ty: self.ty,
            description: self.description,
            nillable: self.nillable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let attr = Attribute::new("stateManageable", AttributeType::Boolean, "Whether the object is state manageable.");
        assert_eq!(attr.name(), "stateManageable");
        assert_eq!(attr.attribute_type(), AttributeType::Boolean);
        assert!(!attr.is_nillable());

        let attr = Attribute::builder("node", AttributeType::String, "Host name").nillable(true).build();
        assert!(attr.is_nillable());
    }

    #[test]
    fn test_type_wire_names() {
        let value = serde_json::to_value(AttributeType::Boolean).unwrap();
        assert_eq!(value, serde_json::json!("BOOLEAN"));
        assert_eq!(AttributeType::List.to_string(), "LIST");
    }
}
