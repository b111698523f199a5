//! LogicProof: interactive widget for entering logic proofs.

use crate::core::{CustomizationArgSpec, HandlerSpec, Schema, WidgetDescriptor};
use crate::objects::{LogicExpression, LogicQuestion};

/// Script bundles the frontend loads alongside this widget
const DEPENDENCY_IDS: [&str; 2] = ["logic_proof", "codemirror"];

/// Default question: assume p, show p, with an empty starter proof
fn default_question() -> LogicQuestion {
    LogicQuestion::new(
        vec![LogicExpression::variable("p")],
        vec![LogicExpression::variable("p")],
        "",
    )
}

/// Build the LogicProof widget descriptor
pub fn descriptor() -> WidgetDescriptor {
    let default_value = serde_json::to_value(default_question())
        .expect("LogicQuestion serializes to JSON");

    WidgetDescriptor {
        id: "LogicProof".to_string(),
        name: "Logic Proof".to_string(),
        category: "Custom".to_string(),
        description: "A widget where users prove simple logical statements.".to_string(),
        customization_arg_specs: vec![CustomizationArgSpec::new(
            "question",
            "Question to ask.",
            Schema::custom("LogicQuestion"),
            default_value,
        )],
        handlers: vec![HandlerSpec::new("submit", "CheckedProof")],
        dependency_ids: DEPENDENCY_IDS.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_fields_are_non_empty() {
        let descriptor = descriptor();
        assert!(!descriptor.id.is_empty());
        assert!(!descriptor.name.is_empty());
        assert!(!descriptor.category.is_empty());
        assert!(!descriptor.description.is_empty());
    }

    #[test]
    fn test_single_question_arg_with_custom_schema() {
        let descriptor = descriptor();
        assert_eq!(descriptor.customization_arg_specs.len(), 1);

        let arg = descriptor.customization_arg("question").unwrap();
        assert_eq!(arg.schema, Schema::custom("LogicQuestion"));
    }

    #[test]
    fn test_single_submit_handler() {
        let descriptor = descriptor();
        assert_eq!(descriptor.handlers.len(), 1);

        let handler = descriptor.handler("submit").unwrap();
        assert_eq!(handler.obj_type, "CheckedProof");
    }

    #[test]
    fn test_dependency_ids() {
        assert_eq!(descriptor().dependency_ids, ["logic_proof", "codemirror"]);
    }

    #[test]
    fn test_default_question_shape() {
        let descriptor = descriptor();
        let arg = descriptor.customization_arg("question").unwrap();
        let question: LogicQuestion =
            serde_json::from_value(arg.default_value.clone()).unwrap();

        assert_eq!(question.default_proof_string, "");
        assert_eq!(question.assumptions, vec![LogicExpression::variable("p")]);
        assert_eq!(question.results, vec![LogicExpression::variable("p")]);

        let node = &question.assumptions[0];
        assert_eq!(node.top_kind_name, "variable");
        assert_eq!(node.top_operator_name, "p");
        assert!(node.arguments.is_empty());
        assert!(node.dummies.is_empty());
    }

    #[test]
    fn test_descriptor_is_stable_across_reads() {
        assert_eq!(descriptor(), descriptor());
    }
}
