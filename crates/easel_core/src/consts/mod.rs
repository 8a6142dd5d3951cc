//! The process-wide symbolic-constant registry.
//!
//! Constants are reachable two ways:
//! - **statically**, as typed items re-exported from [`names`] (`consts::RADIANS`, `consts::ENTER`, `consts::PI`).
//!   This has no failure mode.
//! - **dynamically**, by name through [`ConstantRegistry::get`], for tooling and script bindings that only have a
//!   string.
//!
//! ## Notes
//! - The registry is built once from [`table`], validated by [`builder::RegistryBuilder`], and frozen. It exposes no
//!   mutating API, so the same name yields the same value for the life of the process.
//! - Internal entries (`_DEFAULT_FILL`, ...) are filtered out of every public lookup.
//!
//! ## Examples
//! ```rust
//! use easel_core::consts::{self, ConstantRegistry};
//! use easel_core::consts::registry::ConstValue;
//!
//! let registry = ConstantRegistry::global();
//! assert_eq!(registry.get("RADIANS"), Ok(ConstValue::Str("radians")));
//! assert_eq!(registry.get("POINTS"), Ok(ConstValue::Int(0)));
//! assert!(registry.get("NOT_A_CONSTANT").is_err());
//! assert_eq!(consts::RETURN, consts::ENTER);
//! ```

pub mod builder;
pub mod families;
pub mod names;
pub mod registry;
pub(crate) mod table;

pub use names::*;

use std::collections::HashMap;
use std::sync::OnceLock;

use builder::RegistryBuilder;
use registry::{AliasDecl, Category, ConstValue, ConstantEntry};

use crate::errors::RegistryError;

static REGISTRY: OnceLock<ConstantRegistry> = OnceLock::new();

/// Frozen, name-keyed table of symbolic constants.
///
/// Only [`RegistryBuilder::build`] can construct one; every method takes `&self`.
#[derive(Debug)]
pub struct ConstantRegistry {
    pub(crate) entries: Vec<ConstantEntry>,
    pub(crate) index: HashMap<&'static str, usize>,
    pub(crate) aliases: Vec<AliasDecl>,
    pub(crate) alias_index: HashMap<&'static str, usize>,
}

impl ConstantRegistry {
    /// Return the process-wide registry, building it on first access.
    ///
    /// ## Panics
    /// - If the declared table fails validation. The process must not run with a corrupt registry.
    pub fn global() -> &'static ConstantRegistry {
        REGISTRY.get_or_init(|| {
            Self::declared().unwrap_or_else(|err| panic!("INVARIANT: declared constant table is invalid: {err}"))
        })
    }

    /// Build a fresh registry from the declared table.
    ///
    /// This is what [`ConstantRegistry::global`] runs once; validation tooling calls it directly to report
    /// defects without panicking.
    pub fn declared() -> Result<ConstantRegistry, RegistryError> {
        RegistryBuilder::new()
            .entries(table::ENTRIES)
            .aliases(table::ALIASES)
            .build()
    }

    /// Return the value bound to a public constant.
    ///
    /// ## Errors
    /// - [`RegistryError::UnknownName`] if `name` is not a registered public entry.
    pub fn get(&self, name: &str) -> Result<ConstValue, RegistryError> {
        self.entry(name).map(|e| e.value).ok_or_else(|| {
            tracing::trace!(name, "unknown constant");
            RegistryError::UnknownName { name: name.to_string() }
        })
    }

    /// Report whether a public constant named `name` is registered.
    pub fn has(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Return the full entry for a public constant.
    pub fn entry(&self, name: &str) -> Option<&ConstantEntry> {
        self.lookup(name).filter(|e| e.is_public())
    }

    /// Every public entry, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &ConstantEntry> {
        self.entries.iter().filter(|e| e.is_public())
    }

    /// Public entries of one category, in declaration order.
    pub fn entries_by_category(&self, category: Category) -> Vec<&ConstantEntry> {
        self.entries().filter(|e| e.category == category).collect()
    }

    /// Categories that have at least one public entry, in table order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|&c| self.entries().any(|e| e.category == c))
            .collect()
    }

    /// Every alias declaration, in declaration order.
    pub fn aliases(&self) -> &[AliasDecl] {
        &self.aliases
    }

    /// Return the name `name` is declared as an alias of, if any.
    pub fn alias_target(&self, name: &str) -> Option<&'static str> {
        self.alias_index.get(name).map(|&i| self.aliases[i].target)
    }

    /// Report whether two distinct names are declared aliases of one another.
    ///
    /// ## Notes
    /// - Symmetric, and transitive through a shared target (`A -> C` and `B -> C` makes `A` and `B` aliases).
    /// - Equal values alone never make two names aliases.
    pub fn are_aliases(&self, a: &str, b: &str) -> bool {
        let (Some(a), Some(b)) = (self.entry(a), self.entry(b)) else {
            return false;
        };
        a.name != b.name
            && builder::alias_root(a.name, &self.aliases, &self.alias_index)
                == builder::alias_root(b.name, &self.aliases, &self.alias_index)
    }

    /// Number of public entries.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries declared, internal ones included.
    pub fn declared_len(&self) -> usize {
        self.entries.len()
    }

    /// Find any entry, internal ones included.
    fn lookup(&self, name: &str) -> Option<&ConstantEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry::Visibility;

    #[test]
    fn test_declared_table_builds() {
        let registry = ConstantRegistry::declared().expect("declared table must validate");
        assert!(registry.len() > 100);
        assert_eq!(registry.declared_len(), table::ENTRIES.len());
    }

    #[test]
    fn test_internal_entries_are_hidden_from_public_lookup() {
        let registry = ConstantRegistry::global();
        for name in ["_DEFAULT_TEXT_FILL", "_DEFAULT_LEADMULT", "_CTX_MIDDLE", "_DEFAULT_STROKE", "_DEFAULT_FILL"] {
            assert!(!registry.has(name), "{name} must not be public");
            assert!(matches!(registry.get(name), Err(RegistryError::UnknownName { .. })));
            assert!(registry.lookup(name).is_some(), "{name} must be registered internally");
        }
        assert!(registry.entries().all(|e| e.visibility == Visibility::Public));
    }

    #[test]
    fn test_internal_values_match_rust_items() {
        let registry = ConstantRegistry::global();
        let value = |name: &str| registry.lookup(name).map(|e| e.value);
        assert_eq!(
            value("_DEFAULT_TEXT_FILL"),
            Some(ConstValue::Str(table::DEFAULT_TEXT_FILL))
        );
        assert_eq!(
            value("_DEFAULT_LEADMULT"),
            Some(ConstValue::Float(table::DEFAULT_LEADMULT))
        );
        assert_eq!(value("_CTX_MIDDLE"), Some(ConstValue::Str(table::CTX_MIDDLE)));
        assert_eq!(value("_DEFAULT_STROKE"), Some(ConstValue::Str(table::DEFAULT_STROKE)));
        assert_eq!(value("_DEFAULT_FILL"), Some(ConstValue::Str(table::DEFAULT_FILL)));
        assert_eq!(table::CTX_MIDDLE, "middle");
        assert_eq!(table::DEFAULT_STROKE, "#000000");
        assert_eq!(table::DEFAULT_FILL, "#FFFFFF");
    }

    #[test]
    fn test_internal_names_carry_the_private_marker() {
        for entry in table::ENTRIES {
            assert_eq!(
                entry.name.starts_with('_'),
                entry.visibility == Visibility::Internal,
                "visibility of {} does not match its name",
                entry.name
            );
        }
    }

    #[test]
    fn test_global_is_built_once() {
        let a: *const ConstantRegistry = ConstantRegistry::global();
        let b: *const ConstantRegistry = ConstantRegistry::global();
        assert_eq!(a, b);
    }

    #[test]
    fn test_vertical_center_uses_canvas_keyword() {
        use families::VertAlign;
        let registry = ConstantRegistry::global();
        assert_eq!(
            registry.lookup("_CTX_MIDDLE").and_then(|e| e.value.as_str()),
            Some(VertAlign::Center.canvas_baseline())
        );
        assert_eq!(VertAlign::Top.canvas_baseline(), "top");
    }
}
