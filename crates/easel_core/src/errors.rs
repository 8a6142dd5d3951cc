//! Error taxonomy for the constant registry.
//!
//! ## Notes
//! - `DuplicateName`, `InvalidValueRange`, `SelfAlias`, `UnregisteredAlias`, `AliasCycle`, `AliasValueMismatch`,
//!   and `UndeclaredAlias` are construction-time defects in the constant table. The process-wide registry refuses to start with any of them.
//! - `UnknownName` and `UnknownCategory` are recoverable lookup failures, reported out-of-band instead of through a
//!   sentinel value (`POINTS` is a legitimate `0`).

use miette::Diagnostic;
use thiserror::Error;

use crate::consts::registry::{Category, ConstValue};

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RegistryError {
    #[error("duplicate constant name `{name}`")]
    #[diagnostic(
        code(easel::registry::duplicate_name),
        help("every constant name must be declared exactly once")
    )]
    DuplicateName { name: &'static str },

    #[error("constant `{name}` has code {value}, outside the {category} range {min}..={max}")]
    #[diagnostic(code(easel::registry::invalid_value_range))]
    InvalidValueRange {
        name: &'static str,
        category: Category,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("`{name}` is declared as an alias of itself")]
    #[diagnostic(
        code(easel::registry::self_alias),
        help("an alias links two distinct names; remove the declaration")
    )]
    SelfAlias { name: &'static str },

    #[error("alias `{alias}` refers to unregistered constant `{missing}`")]
    #[diagnostic(
        code(easel::registry::unregistered_alias),
        help("both sides of an alias declaration must be registered entries")
    )]
    UnregisteredAlias { alias: &'static str, missing: &'static str },

    #[error("alias declarations starting at `{alias}` lead back to `{alias}`")]
    #[diagnostic(
        code(easel::registry::alias_cycle),
        help("every alias chain must end at a name that is not itself an alias")
    )]
    AliasCycle { alias: &'static str },

    #[error("alias `{alias}` is {alias_value} but its target `{target}` is {target_value}")]
    #[diagnostic(code(easel::registry::alias_value_mismatch))]
    AliasValueMismatch {
        alias: &'static str,
        target: &'static str,
        alias_value: ConstValue,
        target_value: ConstValue,
    },

    #[error("`{first}` and `{second}` share {value} in category `{category}` without an alias declaration")]
    #[diagnostic(
        code(easel::registry::undeclared_alias),
        help("declare the pair as an alias, or give one of them a distinct value")
    )]
    UndeclaredAlias {
        first: &'static str,
        second: &'static str,
        category: Category,
        value: ConstValue,
    },

    #[error("unknown constant `{name}`")]
    #[diagnostic(code(easel::registry::unknown_name))]
    UnknownName { name: String },

    #[error("unknown category `{slug}`")]
    #[diagnostic(code(easel::registry::unknown_category))]
    UnknownCategory { slug: String },
}

impl RegistryError {
    /// Whether this error is a defect in the constant table rather than a lookup failure.
    pub fn is_construction_defect(&self) -> bool {
        !matches!(
            self,
            RegistryError::UnknownName { .. } | RegistryError::UnknownCategory { .. }
        )
    }
}
