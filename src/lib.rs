//! coursekit: interactive widget metadata for an educational platform.
//!
//! This library provides the descriptor model and registry for the
//! platform's interactive widgets, including:
//! - Widget descriptors (name, category, customization args, handlers)
//! - Schema descriptors for customization arguments
//! - Typed payloads for the logic-proof question object type
//! - A global widget registry populated once at startup

pub mod core;
pub mod objects;
pub mod widgets;

// Re-export commonly used types
pub use crate::core::{
    global_registry, CustomizationArgSpec, HandlerSpec, Schema, WidgetDescriptor, WidgetRegistry,
};
pub use objects::{LogicExpression, LogicQuestion};
