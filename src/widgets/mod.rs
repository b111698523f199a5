//! Builtin interactive widget definitions.

pub mod logic_proof;

use crate::core::WidgetRegistry;
use anyhow::Result;

/// Register all builtin widgets with the given registry
pub fn register_builtin(registry: &mut WidgetRegistry) -> Result<()> {
    registry.register(logic_proof::descriptor())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_builtin() {
        let mut registry = WidgetRegistry::new();
        register_builtin(&mut registry).unwrap();
        assert_eq!(registry.list_ids(), vec!["LogicProof"]);
    }
}
