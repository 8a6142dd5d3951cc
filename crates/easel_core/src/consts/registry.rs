//! Shareable metadata for the `easel_core::consts` registry.
//!
//! Every symbolic constant is described by a [`ConstantEntry`]: a stable name, a value, a visibility, and a
//! documentation category. Explicit aliases are described separately by [`AliasDecl`] so that two names sharing a
//! value is always a declared fact of the table, never a coincidence.
//!
//! ## Notes
//! - These types are `Copy` so the declared table can live in a `const` slice.
//! - Categories are for docs/tests only; they carry no runtime behavior.
//!
//! ## See also
//! - [`crate::consts::table`] for the declared entries.
//! - [`crate::consts::builder`] for the validation pass.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

/// The value bound to a symbolic constant.
///
/// ## Notes
/// - `Str` holds an opaque tag compared by equality elsewhere in the runtime (e.g. `"source-over"`).
/// - `Int` holds a small non-negative numeric code (key codes, primitive topology codes).
/// - `Float` holds the angle constants and the internal line-height multiplier.
/// - Equality on `Float` compares bit patterns, so repeated lookups can be checked for bit-identity.
///
/// ## Examples
/// ```rust
/// use easel_core::consts::registry::ConstValue;
///
/// assert_eq!(ConstValue::Int(13).as_int(), Some(13));
/// assert_eq!(ConstValue::Str("radians").as_str(), Some("radians"));
/// assert_eq!(ConstValue::Int(0).as_str(), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum ConstValue {
    Str(&'static str),
    Int(u32),
    Float(f64),
}

impl ConstValue {
    /// Return the string token, if this is a string value.
    pub const fn as_str(&self) -> Option<&'static str> {
        match self {
            ConstValue::Str(s) => Some(*s),
            _ => None,
        }
    }

    /// Return the numeric code, if this is an integer value.
    pub const fn as_int(&self) -> Option<u32> {
        match self {
            ConstValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Return the float value, if this is a float value.
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            ConstValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Return the value's type tag.
    pub const fn value_type(&self) -> ValueType {
        match self {
            ConstValue::Str(_) => ValueType::Str,
            ConstValue::Int(_) => ValueType::Int,
            ConstValue::Float(_) => ValueType::Float,
        }
    }
}

impl PartialEq for ConstValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ConstValue::Str(a), ConstValue::Str(b)) => a == b,
            (ConstValue::Int(a), ConstValue::Int(b)) => a == b,
            (ConstValue::Float(a), ConstValue::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for ConstValue {}

impl Hash for ConstValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            ConstValue::Str(s) => s.hash(state),
            ConstValue::Int(n) => n.hash(state),
            ConstValue::Float(x) => x.to_bits().hash(state),
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Str(s) => write!(f, "'{s}'"),
            ConstValue::Int(n) => write!(f, "{n}"),
            ConstValue::Float(x) => write!(f, "{x}"),
        }
    }
}

/// Type tag of a [`ConstValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Str,
    Int,
    Float,
}

impl ValueType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueType::Str => "string",
            ValueType::Int => "integer",
            ValueType::Float => "float",
        }
    }
}

/// Whether an entry is part of the stable external surface.
///
/// ## Notes
/// - `Internal` entries are only reachable from inside `easel_core`; every public lookup filters them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Internal,
}

/// Documentation grouping for constants.
///
/// The variants follow the sections of the constant table, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Renderer,
    Cursor,
    Trigonometry,
    Shape,
    Color,
    Dom,
    Input,
    BlendMode,
    Filter,
    Typography,
    Vertices,
    DrawMode,
    TextureMode,
    TextureWrap,
    Orientation,
    Defaults,
    Debug,
}

impl Category {
    /// Every category, in table order.
    pub const ALL: &'static [Category] = &[
        Category::Renderer,
        Category::Cursor,
        Category::Trigonometry,
        Category::Shape,
        Category::Color,
        Category::Dom,
        Category::Input,
        Category::BlendMode,
        Category::Filter,
        Category::Typography,
        Category::Vertices,
        Category::DrawMode,
        Category::TextureMode,
        Category::TextureWrap,
        Category::Orientation,
        Category::Defaults,
        Category::Debug,
    ];

    /// Return the kebab-case slug used by docs and the CLI.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Renderer => "renderer",
            Category::Cursor => "cursor",
            Category::Trigonometry => "trigonometry",
            Category::Shape => "shape",
            Category::Color => "color",
            Category::Dom => "dom",
            Category::Input => "input",
            Category::BlendMode => "blend-mode",
            Category::Filter => "filter",
            Category::Typography => "typography",
            Category::Vertices => "vertices",
            Category::DrawMode => "draw-mode",
            Category::TextureMode => "texture-mode",
            Category::TextureWrap => "texture-wrap",
            Category::Orientation => "orientation",
            Category::Defaults => "defaults",
            Category::Debug => "debug",
        }
    }

    /// Resolve a slug to a category.
    ///
    /// ## Notes
    /// - Matching is **case-sensitive**.
    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str() == slug)
    }

    /// Return the inclusive range numeric codes in this category must fall within, if the category has
    /// integer-valued entries.
    pub const fn code_range(self) -> Option<(u32, u32)> {
        match self {
            // Conventional platform key codes.
            Category::Input => Some((8, 255)),
            // Primitive topology codes.
            Category::Shape => Some((0, 6)),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One symbolic constant.
///
/// ## Notes
/// - `name` is unique across the whole table (checked by [`crate::consts::builder::RegistryBuilder`]).
/// - `description` is mandatory to keep generated docs consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantEntry {
    pub name: &'static str,
    pub value: ConstValue,
    pub visibility: Visibility,
    pub category: Category,
    pub description: &'static str,
}

impl ConstantEntry {
    pub const fn is_public(&self) -> bool {
        matches!(self.visibility, Visibility::Public)
    }
}

/// Explicit declaration that `alias` shares its value with `target`.
///
/// ## Examples
/// ```rust
/// use easel_core::consts::registry::AliasDecl;
///
/// let decl = AliasDecl { alias: "RETURN", target: "ENTER", note: "Same platform key code." };
/// assert_ne!(decl.alias, decl.target);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasDecl {
    pub alias: &'static str,
    pub target: &'static str,
    pub note: &'static str,
}

pub(crate) const fn public(
    name: &'static str,
    value: ConstValue,
    category: Category,
    description: &'static str,
) -> ConstantEntry {
    ConstantEntry {
        name,
        value,
        visibility: Visibility::Public,
        category,
        description,
    }
}

pub(crate) const fn internal(
    name: &'static str,
    value: ConstValue,
    category: Category,
    description: &'static str,
) -> ConstantEntry {
    ConstantEntry {
        name,
        value,
        visibility: Visibility::Internal,
        category,
        description,
    }
}
