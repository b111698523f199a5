//! Widget descriptor types - the metadata the host frontend consumes.
//!
//! A `WidgetDescriptor` is a plain immutable record: it carries no behavior
//! beyond field access. Structural checks happen in the registry at
//! registration time, semantic validation of object types (`LogicQuestion`,
//! `CheckedProof`) belongs to the platform's schema engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema descriptor for a customization argument value.
///
/// Serializes with an internal `type` tag, e.g.
/// `{"type": "custom", "obj_type": "LogicQuestion"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Schema {
    /// Boolean value
    Bool,
    /// Integer value
    Int,
    /// Floating-point value
    Float,
    /// Unicode string
    Unicode,
    /// Sanitized HTML string
    Html,
    /// Homogeneous list of values
    List {
        /// Schema of each list element
        items: Box<Schema>,
    },
    /// Opaque platform object type, validated by the schema engine
    Custom {
        /// Name of the registered object type (e.g., "LogicQuestion")
        obj_type: String,
    },
}

impl Schema {
    /// Create a custom schema referencing a registered object type
    pub fn custom(obj_type: impl Into<String>) -> Self {
        Schema::Custom {
            obj_type: obj_type.into(),
        }
    }

    /// Create a list schema with the given element schema
    pub fn list(items: Schema) -> Self {
        Schema::List {
            items: Box::new(items),
        }
    }
}

/// A named, schema-typed, authorable input to a widget instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationArgSpec {
    /// Key under which the host supplies a value for this argument
    pub name: String,
    /// Description shown to the widget author
    pub description: String,
    /// Schema the supplied value must satisfy
    pub schema: Schema,
    /// Structured default matching the schema
    pub default_value: Value,
}

impl CustomizationArgSpec {
    /// Create a new customization argument spec
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schema: Schema,
        default_value: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema,
            default_value,
        }
    }
}

/// A trigger through which a learner's submission reaches grading logic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerSpec {
    /// Interaction trigger name (e.g., "submit")
    pub name: String,
    /// Object type of the submitted payload (e.g., "CheckedProof")
    pub obj_type: String,
}

impl HandlerSpec {
    /// Create a new handler spec
    pub fn new(name: impl Into<String>, obj_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            obj_type: obj_type.into(),
        }
    }
}

/// Static metadata describing one interactive widget.
///
/// Instances are built once by the widget modules, registered at startup,
/// and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    /// Stable machine identifier, unique within the registry
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Category the widget falls under in the widget repository
    pub category: String,
    /// Description of the widget
    pub description: String,
    /// Customization args with their schemas and default values
    pub customization_arg_specs: Vec<CustomizationArgSpec>,
    /// Learner actions that trigger a feedback interaction. Interactive
    /// widgets must declare at least one.
    pub handlers: Vec<HandlerSpec>,
    /// Client-side script bundles to load in pages containing this widget
    pub dependency_ids: Vec<String>,
}

impl WidgetDescriptor {
    /// Look up a customization argument by name
    pub fn customization_arg(&self, name: &str) -> Option<&CustomizationArgSpec> {
        self.customization_arg_specs.iter().find(|a| a.name == name)
    }

    /// Look up a handler by name
    pub fn handler(&self, name: &str) -> Option<&HandlerSpec> {
        self.handlers.iter().find(|h| h.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_schema_serialization() {
        let schema = Schema::custom("LogicQuestion");
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "custom", "obj_type": "LogicQuestion"})
        );

        let back: Schema = serde_json::from_value(json).unwrap();
        assert_eq!(back, schema);
    }

    #[test]
    fn test_list_schema_serialization() {
        let schema = Schema::list(Schema::Unicode);
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "list", "items": {"type": "unicode"}})
        );
    }

    #[test]
    fn test_handler_spec_wire_shape() {
        let handler = HandlerSpec::new("submit", "CheckedProof");
        let json = serde_json::to_value(&handler).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "submit", "obj_type": "CheckedProof"})
        );
    }

    #[test]
    fn test_descriptor_lookup_helpers() {
        let descriptor = WidgetDescriptor {
            id: "Sample".to_string(),
            name: "Sample".to_string(),
            category: "Custom".to_string(),
            description: "A sample widget.".to_string(),
            customization_arg_specs: vec![CustomizationArgSpec::new(
                "question",
                "Question to ask.",
                Schema::Unicode,
                serde_json::json!(""),
            )],
            handlers: vec![HandlerSpec::new("submit", "NormalizedString")],
            dependency_ids: vec![],
        };

        assert!(descriptor.customization_arg("question").is_some());
        assert!(descriptor.customization_arg("missing").is_none());
        assert_eq!(
            descriptor.handler("submit").unwrap().obj_type,
            "NormalizedString"
        );
    }
}
