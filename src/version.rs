//! Easel tooling version information.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` (the CLI and the reference banner both use it).

/// The Easel version string (for example, `0.1.0`).
pub const EASEL_VERSION: &str = env!("CARGO_PKG_VERSION");
