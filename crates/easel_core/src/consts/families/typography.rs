//! Font style.

use strum_macros::{Display, EnumString, IntoStaticStr, VariantArray};

use super::ConstFamily;
use crate::consts::registry::ConstValue;

/// Font style passed to `textStyle`.
///
/// ## Examples
/// ```rust
/// use easel_core::consts::families::TextStyle;
///
/// assert_eq!(TextStyle::BoldItalic.as_str(), "bold italic");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum TextStyle {
    #[strum(to_string = "normal")]
    Normal,
    #[strum(to_string = "italic")]
    Italic,
    #[strum(to_string = "bold")]
    Bold,
    #[strum(to_string = "bold italic")]
    BoldItalic,
}

impl TextStyle {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for TextStyle {
    const FAMILY: &'static str = "text style";

    fn const_name(self) -> &'static str {
        match self {
            TextStyle::Normal => "NORMAL",
            TextStyle::Italic => "ITALIC",
            TextStyle::Bold => "BOLD",
            TextStyle::BoldItalic => "BOLDITALIC",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}
