#![forbid(unsafe_code)]
//! Easel constant tooling
//!
//! Inspection tooling on top of [`easel_core`]'s symbolic-constant registry: a CLI for looking constants up,
//! listing them, re-running the table validation, and generating the Markdown constant reference.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: the only panic is [`easel_core::ConstantRegistry::global`] refusing to start with a
//!   corrupt constant table.

pub mod cli;
pub mod reference;
pub mod version;

pub use reference::{ReferenceConfig, ReferenceError, render_reference, write_reference};
