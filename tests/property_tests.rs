//! Property-based tests for the constant registry
//!
//! These tests use proptest to verify lookup and validation invariants across many randomly
//! generated names and tables.

use std::collections::HashSet;

use easel_core::consts::builder::RegistryBuilder;
use easel_core::consts::registry::Visibility;
use easel_core::{Category, ConstValue, ConstantEntry, ConstantRegistry, RegistryError};
use proptest::prelude::*;

fn leak(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

fn color_entry(name: &'static str, code: u32) -> ConstantEntry {
    ConstantEntry {
        name,
        value: ConstValue::Int(code),
        visibility: Visibility::Public,
        category: Category::Color,
        description: "Generated test constant.",
    }
}

/// Distinct upper-snake names paired with distinct codes.
fn distinct_table() -> impl Strategy<Value = Vec<(String, u32)>> {
    prop::collection::hash_set("[A-Z][A-Z0-9_]{0,12}", 1..12).prop_flat_map(|names| {
        let len = names.len();
        (
            Just(names.into_iter().collect::<Vec<_>>()),
            prop::collection::hash_set(0u32..10_000, len),
        )
            .prop_map(|(names, codes)| names.into_iter().zip(codes).collect())
    })
}

// =============================================================================
// Lookup Properties
// =============================================================================

mod lookup_tests {
    use super::*;

    proptest! {
        /// Property: a lookup succeeds exactly when a public entry has that name
        #[test]
        fn lookup_matches_declared_names(name in "[A-Za-z_][A-Za-z0-9_]{0,20}") {
            let registry = ConstantRegistry::global();
            let declared = registry.entries().any(|e| e.name == name);
            match registry.get(&name) {
                Ok(_) => prop_assert!(declared),
                Err(RegistryError::UnknownName { name: reported }) => {
                    prop_assert!(!declared);
                    prop_assert_eq!(reported, name);
                }
                Err(other) => prop_assert!(false, "unexpected error {other:?}"),
            }
        }

        /// Property: repeated lookups of the same name return identical results
        #[test]
        fn lookup_is_stable(index in 0usize..512) {
            let registry = ConstantRegistry::global();
            let entries: Vec<_> = registry.entries().collect();
            let entry = entries[index % entries.len()];
            let first = registry.get(entry.name);
            for _ in 0..3 {
                prop_assert_eq!(&registry.get(entry.name), &first);
            }
            prop_assert_eq!(first, Ok(entry.value));
        }

        /// Property: lowercasing a mixed-case name never finds a different constant
        #[test]
        fn lookup_is_case_sensitive(index in 0usize..512) {
            let registry = ConstantRegistry::global();
            let entries: Vec<_> = registry.entries().collect();
            let entry = entries[index % entries.len()];
            let lower = entry.name.to_ascii_lowercase();
            if lower != entry.name {
                prop_assert!(!registry.has(&lower));
            }
        }
    }
}

// =============================================================================
// Validation Properties
// =============================================================================

mod validation_tests {
    use super::*;

    proptest! {
        /// Property: distinct names with distinct values always build
        #[test]
        fn distinct_tables_build(table in distinct_table()) {
            let builder = table
                .into_iter()
                .fold(RegistryBuilder::new(), |b, (name, code)| b.entry(color_entry(leak(name), code)));
            let registry = builder.build();
            prop_assert!(registry.is_ok(), "{:?}", registry.err());
        }

        /// Property: repeating any declared name is rejected
        #[test]
        fn repeated_names_are_rejected(table in distinct_table(), pick in any::<prop::sample::Index>()) {
            let (dup_name, _) = table[pick.index(table.len())].clone();
            let dup = leak(dup_name);
            let used: HashSet<u32> = table.iter().map(|(_, c)| *c).collect();
            let fresh_code = (10_000u32..).find(|c| !used.contains(c)).unwrap();

            let builder = table
                .into_iter()
                .fold(RegistryBuilder::new(), |b, (name, code)| b.entry(color_entry(leak(name), code)));
            let result = builder.entry(color_entry(dup, fresh_code)).build();
            prop_assert_eq!(result.err(), Some(RegistryError::DuplicateName { name: dup }));
        }

        /// Property: two undeclared names sharing a value in one category are rejected
        #[test]
        fn shared_values_need_a_declaration(table in distinct_table(), pick in any::<prop::sample::Index>()) {
            let shared_code = table[pick.index(table.len())].1;
            let names: HashSet<&str> = table.iter().map(|(n, _)| n.as_str()).collect();
            let twin = leak(
                (0..)
                    .map(|i| format!("TWIN_{i}"))
                    .find(|n| !names.contains(n.as_str()))
                    .unwrap(),
            );

            let builder = table
                .into_iter()
                .fold(RegistryBuilder::new(), |b, (name, code)| b.entry(color_entry(leak(name), code)));
            let result = builder.entry(color_entry(twin, shared_code)).build();
            prop_assert!(matches!(result, Err(RegistryError::UndeclaredAlias { .. })), "{:?}", result);
        }
    }
}
