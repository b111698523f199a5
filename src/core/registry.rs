//! Registry for widget descriptors.
//!
//! The registry is populated once at startup with the builtin widgets and
//! read concurrently afterwards. Structural validation of descriptors
//! happens here, at registration time; a malformed builtin is a startup
//! failure, not something to recover from later.

use crate::core::{Schema, WidgetDescriptor};
use anyhow::{anyhow, bail, Result};
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Registry of widget descriptors, keyed by widget id.
///
/// Listing order is registration order so the widget repository UI stays
/// stable across runs.
pub struct WidgetRegistry {
    widgets: HashMap<String, WidgetDescriptor>,
    order: Vec<String>,
}

impl WidgetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            widgets: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry populated with all builtin widgets
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        crate::widgets::register_builtin(&mut registry)?;
        Ok(registry)
    }

    /// Register a widget descriptor, validating its structure first
    pub fn register(&mut self, descriptor: WidgetDescriptor) -> Result<()> {
        validate(&descriptor)?;
        if self.widgets.contains_key(&descriptor.id) {
            bail!("Duplicate widget id: {}", descriptor.id);
        }
        debug!("Registered widget '{}' ({})", descriptor.id, descriptor.name);
        self.order.push(descriptor.id.clone());
        self.widgets.insert(descriptor.id.clone(), descriptor);
        Ok(())
    }

    /// Get a descriptor by widget id
    pub fn get(&self, id: &str) -> Option<&WidgetDescriptor> {
        self.widgets.get(id)
    }

    /// Check whether a widget id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.widgets.contains_key(id)
    }

    /// List registered widget ids in registration order
    pub fn list_ids(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Number of registered widgets
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural validation applied to every descriptor at registration.
///
/// Object type names (`obj_type`) are only checked for presence; resolving
/// them against the platform's object registry is the schema engine's job.
fn validate(descriptor: &WidgetDescriptor) -> Result<()> {
    let id = &descriptor.id;
    if id.is_empty() {
        bail!("Widget id must be non-empty");
    }
    for (field, value) in [
        ("name", &descriptor.name),
        ("category", &descriptor.category),
        ("description", &descriptor.description),
    ] {
        if value.is_empty() {
            bail!("Widget '{}': {} must be non-empty", id, field);
        }
    }

    if descriptor.handlers.is_empty() {
        bail!("Widget '{}': interactive widgets need at least one handler", id);
    }
    for handler in &descriptor.handlers {
        if handler.name.is_empty() || handler.obj_type.is_empty() {
            bail!("Widget '{}': handler name and obj_type must be non-empty", id);
        }
    }

    let mut seen_args = Vec::new();
    for arg in &descriptor.customization_arg_specs {
        if arg.name.is_empty() {
            bail!("Widget '{}': customization arg name must be non-empty", id);
        }
        if seen_args.contains(&arg.name.as_str()) {
            bail!("Widget '{}': duplicate customization arg '{}'", id, arg.name);
        }
        seen_args.push(arg.name.as_str());
        if let Schema::Custom { obj_type } = &arg.schema {
            if obj_type.is_empty() {
                bail!(
                    "Widget '{}': customization arg '{}' names an empty obj_type",
                    id,
                    arg.name
                );
            }
        }
    }

    if descriptor.dependency_ids.iter().any(String::is_empty) {
        bail!("Widget '{}': dependency ids must be non-empty", id);
    }

    Ok(())
}

/// Global registry holding the builtin widgets.
///
/// Built on first access and immutable afterwards, so any number of
/// request-handling threads can read it without synchronization.
static GLOBAL_REGISTRY: Lazy<WidgetRegistry> = Lazy::new(|| {
    WidgetRegistry::with_builtins()
        .map_err(|e| anyhow!("Invalid builtin widget descriptor: {e}"))
        .expect("builtin widget registration failed")
});

/// Get the global widget registry
pub fn global_registry() -> &'static WidgetRegistry {
    &GLOBAL_REGISTRY
}
