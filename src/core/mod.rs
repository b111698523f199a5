//! Core descriptor model and the widget registry.

mod descriptor;
mod registry;

pub use descriptor::{CustomizationArgSpec, HandlerSpec, Schema, WidgetDescriptor};
pub use registry::{global_registry, WidgetRegistry};
