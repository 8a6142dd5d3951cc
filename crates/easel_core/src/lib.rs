#![forbid(unsafe_code)]
//! Provide the symbolic-constant registry for the Easel runtime.
//!
//! Every subsystem that needs a mode tag, a cursor style, a key code, or a default color reads it from here by
//! name instead of repeating a literal. The registry is a pure leaf: it depends on nothing and drives nothing.
//!
//! ## Notes
//!
//! - Constants are available as typed items ([`consts::RADIANS`], [`consts::ENTER`]) and by name through
//!   [`consts::ConstantRegistry`].
//! - The table is validated once and then frozen; see [`consts::builder`] for the checks.
//! - No IO. The only global state is the lazily built, immutable registry.

pub mod consts;
pub mod errors;

pub use consts::ConstantRegistry;
pub use consts::registry::{Category, ConstValue, ConstantEntry};
pub use errors::RegistryError;
