//! Typed payloads for the logic-proof object types.
//!
//! These mirror the wire shape the frontend editor and the proof checker
//! exchange. Semantic validation of a question (well-formedness of the
//! formulas, provability) lives in the checker, not here.

use serde::{Deserialize, Serialize};

/// A node in a logical-expression tree.
///
/// A formula is either a bare variable, an operator applied to argument
/// subtrees, or a quantifier binding dummy variables over a subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicExpression {
    /// Kind of the expression head (e.g., "variable", "binary_connective")
    pub top_kind_name: String,
    /// Operator or variable name at this node
    pub top_operator_name: String,
    /// Child expressions, empty for leaves
    #[serde(default)]
    pub arguments: Vec<LogicExpression>,
    /// Bound variable names, empty unless the head is a quantifier
    #[serde(default)]
    pub dummies: Vec<String>,
}

impl LogicExpression {
    /// Create a bare variable leaf
    pub fn variable(name: impl Into<String>) -> Self {
        Self {
            top_kind_name: "variable".to_string(),
            top_operator_name: name.into(),
            arguments: Vec::new(),
            dummies: Vec::new(),
        }
    }

    /// Create an operator node with arguments and bound dummies
    pub fn operator(
        kind: impl Into<String>,
        name: impl Into<String>,
        arguments: Vec<LogicExpression>,
        dummies: Vec<String>,
    ) -> Self {
        Self {
            top_kind_name: kind.into(),
            top_operator_name: name.into(),
            arguments,
            dummies,
        }
    }

    /// Whether this node is a leaf (no arguments, no dummies)
    pub fn is_leaf(&self) -> bool {
        self.arguments.is_empty() && self.dummies.is_empty()
    }
}

/// A logic-proof question: what may be assumed and what must be shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicQuestion {
    /// Formulas the learner may assume
    pub assumptions: Vec<LogicExpression>,
    /// Formulas the learner must derive
    pub results: Vec<LogicExpression>,
    /// Proof text pre-filled in the editor
    pub default_proof_string: String,
}

impl LogicQuestion {
    /// Create a new question
    pub fn new(
        assumptions: Vec<LogicExpression>,
        results: Vec<LogicExpression>,
        default_proof_string: impl Into<String>,
    ) -> Self {
        Self {
            assumptions,
            results,
            default_proof_string: default_proof_string.into(),
        }
    }
}
