//! Build-time validation pass for the constant table.
//!
//! [`RegistryBuilder`] collects declared entries and alias declarations, checks them, and freezes the result into a
//! [`ConstantRegistry`]. This is the only place a defect in the table can be caught, so every check fails the build
//! outright.
//!
//! ## Notes
//! - Checks run in a fixed order (names, code ranges, alias declarations, undeclared collisions) and the first
//!   defect found is returned, so a given table always reports the same error.
//! - Aliases are never inferred from equal values: two entries of one category that share a value must be linked
//!   by an [`AliasDecl`].
//!
//! ## Examples
//! ```rust
//! use easel_core::consts::builder::RegistryBuilder;
//! use easel_core::consts::registry::{AliasDecl, Category, ConstValue, ConstantEntry, Visibility};
//! use easel_core::errors::RegistryError;
//!
//! let enter = ConstantEntry {
//!     name: "ENTER",
//!     value: ConstValue::Int(13),
//!     visibility: Visibility::Public,
//!     category: Category::Input,
//!     description: "Enter key.",
//! };
//! let ret = ConstantEntry { name: "RETURN", description: "Return key.", ..enter };
//!
//! let err = RegistryBuilder::new().entries(&[enter, ret]).build().unwrap_err();
//! assert!(matches!(err, RegistryError::UndeclaredAlias { .. }));
//!
//! let registry = RegistryBuilder::new()
//!     .entries(&[enter, ret])
//!     .alias(AliasDecl { alias: "RETURN", target: "ENTER", note: "Same key." })
//!     .build()
//!     .unwrap();
//! assert!(registry.are_aliases("ENTER", "RETURN"));
//! ```

use std::collections::HashMap;

use super::ConstantRegistry;
use super::registry::{AliasDecl, ConstValue, ConstantEntry};
use crate::errors::RegistryError;

/// Collects declared entries and alias declarations for validation.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    entries: Vec<ConstantEntry>,
    aliases: Vec<AliasDecl>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare one entry
    pub fn entry(mut self, entry: ConstantEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Declare entries in order
    pub fn entries(mut self, entries: &[ConstantEntry]) -> Self {
        self.entries.extend_from_slice(entries);
        self
    }

    /// Declare one alias
    pub fn alias(mut self, decl: AliasDecl) -> Self {
        self.aliases.push(decl);
        self
    }

    /// Declare aliases in order
    pub fn aliases(mut self, decls: &[AliasDecl]) -> Self {
        self.aliases.extend_from_slice(decls);
        self
    }

    /// Validate the declarations and freeze them into a registry.
    ///
    /// ## Errors
    /// - [`RegistryError::DuplicateName`] if a name is declared twice (entries or alias names).
    /// - [`RegistryError::InvalidValueRange`] if an integer code falls outside its category's range.
    /// - [`RegistryError::SelfAlias`] if a declaration names the same entry on both sides.
    /// - [`RegistryError::UnregisteredAlias`] if an alias declaration names an entry that does not exist.
    /// - [`RegistryError::AliasCycle`] if following alias declarations leads back to where it started.
    /// - [`RegistryError::AliasValueMismatch`] if an alias and its target have different values.
    /// - [`RegistryError::UndeclaredAlias`] if two entries of one category share a value without a declaration.
    #[tracing::instrument(skip_all, fields(entry_count = self.entries.len(), alias_count = self.aliases.len()))]
    pub fn build(self) -> Result<ConstantRegistry, RegistryError> {
        let index = index_names(&self.entries)?;
        check_code_ranges(&self.entries)?;
        let alias_index = check_alias_decls(&self.entries, &index, &self.aliases)?;
        check_undeclared_collisions(&self.entries, &self.aliases, &alias_index)?;

        tracing::debug!(
            entries = self.entries.len(),
            aliases = self.aliases.len(),
            "constant registry validated"
        );

        Ok(ConstantRegistry {
            entries: self.entries,
            index,
            aliases: self.aliases,
            alias_index,
        })
    }
}

fn index_names(entries: &[ConstantEntry]) -> Result<HashMap<&'static str, usize>, RegistryError> {
    let mut index = HashMap::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        if index.insert(entry.name, i).is_some() {
            return Err(RegistryError::DuplicateName { name: entry.name });
        }
    }
    Ok(index)
}

fn check_code_ranges(entries: &[ConstantEntry]) -> Result<(), RegistryError> {
    for entry in entries {
        let (ConstValue::Int(value), Some((min, max))) = (entry.value, entry.category.code_range()) else {
            continue;
        };
        if !(min..=max).contains(&value) {
            return Err(RegistryError::InvalidValueRange {
                name: entry.name,
                category: entry.category,
                value,
                min,
                max,
            });
        }
    }
    Ok(())
}

/// Check every alias declaration and index them by alias name.
fn check_alias_decls(
    entries: &[ConstantEntry],
    index: &HashMap<&'static str, usize>,
    decls: &[AliasDecl],
) -> Result<HashMap<&'static str, usize>, RegistryError> {
    let mut alias_index = HashMap::with_capacity(decls.len());
    for (i, decl) in decls.iter().enumerate() {
        if decl.alias == decl.target {
            return Err(RegistryError::SelfAlias { name: decl.alias });
        }
        let lookup = |name: &'static str| {
            index
                .get(name)
                .map(|&idx| &entries[idx])
                .ok_or(RegistryError::UnregisteredAlias {
                    alias: decl.alias,
                    missing: name,
                })
        };
        let alias = lookup(decl.alias)?;
        let target = lookup(decl.target)?;

        if alias.value != target.value {
            return Err(RegistryError::AliasValueMismatch {
                alias: decl.alias,
                target: decl.target,
                alias_value: alias.value,
                target_value: target.value,
            });
        }
        if alias_index.insert(decl.alias, i).is_some() {
            return Err(RegistryError::DuplicateName { name: decl.alias });
        }
    }
    check_alias_cycles(decls, &alias_index)?;
    Ok(alias_index)
}

/// Every alias chain must end at a name that is not itself an alias.
fn check_alias_cycles(decls: &[AliasDecl], alias_index: &HashMap<&'static str, usize>) -> Result<(), RegistryError> {
    for decl in decls {
        let mut current = decl.target;
        // A chain longer than the declaration count revisits some name.
        for _ in 0..decls.len() {
            if current == decl.alias {
                return Err(RegistryError::AliasCycle { alias: decl.alias });
            }
            match alias_index.get(current) {
                Some(&i) => current = decls[i].target,
                None => break,
            }
        }
    }
    Ok(())
}

fn check_undeclared_collisions(
    entries: &[ConstantEntry],
    decls: &[AliasDecl],
    alias_index: &HashMap<&'static str, usize>,
) -> Result<(), RegistryError> {
    for (i, first) in entries.iter().enumerate() {
        for second in &entries[i + 1..] {
            if first.category != second.category || first.value != second.value {
                continue;
            }
            if alias_root(first.name, decls, alias_index) != alias_root(second.name, decls, alias_index) {
                return Err(RegistryError::UndeclaredAlias {
                    first: first.name,
                    second: second.name,
                    category: first.category,
                    value: first.value,
                });
            }
        }
    }
    Ok(())
}

/// Follow alias declarations to the entry a name ultimately aliases.
pub(crate) fn alias_root(
    name: &'static str,
    decls: &[AliasDecl],
    alias_index: &HashMap<&'static str, usize>,
) -> &'static str {
    let mut current = name;
    // Chains are acyclic once built; the bound only matters for unvalidated declarations.
    for _ in 0..=decls.len() {
        match alias_index.get(current) {
            Some(&i) => current = decls[i].target,
            None => break,
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::registry::{Category, Visibility};

    fn key(name: &'static str, code: u32) -> ConstantEntry {
        ConstantEntry {
            name,
            value: ConstValue::Int(code),
            visibility: Visibility::Public,
            category: Category::Input,
            description: "key",
        }
    }

    fn tag(name: &'static str, value: &'static str, category: Category) -> ConstantEntry {
        ConstantEntry {
            name,
            value: ConstValue::Str(value),
            visibility: Visibility::Public,
            category,
            description: "tag",
        }
    }

    // ========================================
    // Rejections
    // ========================================

    #[test]
    fn test_duplicate_name_fails_build() {
        let err = RegistryBuilder::new()
            .entry(key("TAB", 9))
            .entry(key("TAB", 10))
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName { name: "TAB" });
    }

    #[test]
    fn test_key_code_below_range_fails_build() {
        let err = RegistryBuilder::new().entry(key("NUL", 0)).build().unwrap_err();
        assert!(matches!(
            err,
            RegistryError::InvalidValueRange {
                name: "NUL",
                value: 0,
                min: 8,
                max: 255,
                ..
            }
        ));
    }

    #[test]
    fn test_key_code_above_range_fails_build() {
        let err = RegistryBuilder::new().entry(key("HUGE", 256)).build().unwrap_err();
        assert!(matches!(err, RegistryError::InvalidValueRange { value: 256, .. }));
    }

    #[test]
    fn test_topology_code_out_of_range_fails_build() {
        let entry = ConstantEntry {
            category: Category::Shape,
            ..key("PATCHES", 14)
        };
        let err = RegistryBuilder::new().entry(entry).build().unwrap_err();
        assert!(matches!(err, RegistryError::InvalidValueRange { name: "PATCHES", .. }));
    }

    #[test]
    fn test_alias_to_unregistered_target_fails_build() {
        let err = RegistryBuilder::new()
            .entry(key("RETURN", 13))
            .alias(AliasDecl {
                alias: "RETURN",
                target: "ENTER",
                note: "",
            })
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnregisteredAlias {
                alias: "RETURN",
                missing: "ENTER"
            }
        );
    }

    #[test]
    fn test_alias_with_different_value_fails_build() {
        let err = RegistryBuilder::new()
            .entries(&[key("ENTER", 13), key("ESCAPE", 27)])
            .alias(AliasDecl {
                alias: "ESCAPE",
                target: "ENTER",
                note: "",
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, RegistryError::AliasValueMismatch { alias: "ESCAPE", .. }));
    }

    #[test]
    fn test_alias_declared_twice_fails_build() {
        let decl = AliasDecl {
            alias: "RETURN",
            target: "ENTER",
            note: "",
        };
        let err = RegistryBuilder::new()
            .entries(&[key("ENTER", 13), key("RETURN", 13)])
            .aliases(&[decl, decl])
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName { name: "RETURN" });
    }

    #[test]
    fn test_coincidental_equal_values_fail_build() {
        let err = RegistryBuilder::new()
            .entries(&[key("ALT", 18), key("OPTION", 18)])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::UndeclaredAlias {
                first: "ALT",
                second: "OPTION",
                ..
            }
        ));
    }

    // ========================================
    // Accepted tables
    // ========================================

    #[test]
    fn test_equal_values_in_different_categories_are_allowed() {
        let registry = RegistryBuilder::new()
            .entry(tag("FILL", "#000000", Category::Defaults))
            .entry(tag("TEXT_FILL", "#000000", Category::Typography))
            .build()
            .unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_aliases_sharing_a_target_are_aliases_of_each_other() {
        let registry = RegistryBuilder::new()
            .entries(&[key("ENTER", 13), key("RETURN", 13), key("NUMPAD_ENTER", 13)])
            .aliases(&[
                AliasDecl {
                    alias: "RETURN",
                    target: "ENTER",
                    note: "",
                },
                AliasDecl {
                    alias: "NUMPAD_ENTER",
                    target: "ENTER",
                    note: "",
                },
            ])
            .build()
            .unwrap();
        assert!(registry.are_aliases("RETURN", "NUMPAD_ENTER"));
    }

    #[test]
    fn test_aliases_are_never_inferred() {
        let registry = RegistryBuilder::new()
            .entries(&[key("ENTER", 13), key("ESCAPE", 27)])
            .build()
            .unwrap();
        assert!(!registry.are_aliases("ENTER", "ESCAPE"));
        assert_eq!(registry.alias_target("ENTER"), None);
    }

    #[test]
    fn test_self_alias_fails_build() {
        let err = RegistryBuilder::new()
            .entry(key("ENTER", 13))
            .alias(AliasDecl {
                alias: "ENTER",
                target: "ENTER",
                note: "",
            })
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::SelfAlias { name: "ENTER" });
    }

    #[test]
    fn test_cyclic_alias_declarations_fail_build() {
        let err = RegistryBuilder::new()
            .entries(&[key("A", 13), key("B", 13)])
            .aliases(&[
                AliasDecl {
                    alias: "A",
                    target: "B",
                    note: "",
                },
                AliasDecl {
                    alias: "B",
                    target: "A",
                    note: "",
                },
            ])
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::AliasCycle { alias: "A" });
    }

    #[test]
    fn test_longer_alias_cycle_fails_build() {
        let err = RegistryBuilder::new()
            .entries(&[key("A", 13), key("B", 13), key("C", 13)])
            .aliases(&[
                AliasDecl {
                    alias: "A",
                    target: "B",
                    note: "",
                },
                AliasDecl {
                    alias: "B",
                    target: "C",
                    note: "",
                },
                AliasDecl {
                    alias: "C",
                    target: "A",
                    note: "",
                },
            ])
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::AliasCycle { alias: "A" });
    }

    #[test]
    fn test_alias_chain_resolves_to_root() {
        let registry = RegistryBuilder::new()
            .entries(&[key("A", 13), key("B", 13), key("C", 13)])
            .aliases(&[
                AliasDecl {
                    alias: "A",
                    target: "B",
                    note: "",
                },
                AliasDecl {
                    alias: "B",
                    target: "C",
                    note: "",
                },
            ])
            .build()
            .unwrap();
        assert!(registry.are_aliases("A", "C"));
        assert_eq!(registry.alias_target("A"), Some("B"));
    }

    #[test]
    fn test_alias_root_terminates_on_unvalidated_cycle() {
        let decls = [
            AliasDecl {
                alias: "A",
                target: "B",
                note: "",
            },
            AliasDecl {
                alias: "B",
                target: "A",
                note: "",
            },
        ];
        let index: HashMap<&'static str, usize> = [("A", 0), ("B", 1)].into_iter().collect();
        let root = alias_root("A", &decls, &index);
        assert!(root == "A" || root == "B");
    }
}
