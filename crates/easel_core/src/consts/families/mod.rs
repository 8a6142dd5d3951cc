//! Typed families of symbolic constants.
//!
//! Each closed set of tag values (render mode, blend mode, cursor style, ...) is an enum whose wire value is the
//! literal the rest of the runtime compares against. Consumers get exhaustiveness checking inside Rust while
//! collaborators that compare literal strings still see the same tokens.
//!
//! ## Notes
//! - Wire values are distinct within a family (checked by the guardrail tests).
//! - A variant's [`ConstFamily::const_name`] is the name it is registered under in the dynamic registry; the
//!   registry value for that name equals [`ConstFamily::value`].
//! - The same registry name may back variants of different families (`NORMAL` is both a [`TextStyle`] and a
//!   [`TextureMode`]).
//!
//! ## Examples
//! ```rust
//! use easel_core::consts::families::{BlendMode, ConstFamily};
//!
//! assert_eq!(BlendMode::Blend.as_str(), "source-over");
//! assert_eq!(BlendMode::Blend.const_name(), "BLEND");
//! assert_eq!("color-dodge".parse::<BlendMode>().ok(), Some(BlendMode::Dodge));
//! ```

pub mod environment;
pub mod input;
pub mod rendering;
pub mod shape;
pub mod texture;
pub mod typography;

use std::fmt;

use strum::VariantArray;

use super::registry::ConstValue;

pub use environment::{AngleMode, ColorMode, Cursor, Orientation, Renderer, Sizing};
pub use input::KeyCode;
pub use rendering::{BlendMode, DebugMode, DrawMode, Filter};
pub use shape::{ArcMode, CurveKind, HorizAlign, Primitive, ShapeClose, ShapeMode, StrokeCap, StrokeJoin, VertAlign};
pub use texture::{TextureFilter, TextureMode, TextureWrap};
pub use typography::TextStyle;

/// A closed family of constants backed by registry entries.
pub trait ConstFamily: VariantArray + Copy + Eq + fmt::Debug + 'static {
    /// Human-readable family name (used in docs and test messages).
    const FAMILY: &'static str;

    /// Registry name this variant is registered under.
    fn const_name(self) -> &'static str;

    /// Value this variant serializes to.
    fn value(self) -> ConstValue;

    /// Every variant, in declaration order.
    fn variants() -> &'static [Self] {
        Self::VARIANTS
    }

    /// Resolve a registry name to a variant of this family.
    fn from_const_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.const_name() == name)
    }
}
