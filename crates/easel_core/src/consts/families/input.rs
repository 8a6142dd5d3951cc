//! Keyboard key codes.
//!
//! ## Notes
//! - Codes are the conventional platform `keyCode` values and all fall within `8..=255`.
//! - `OPTION` and `RETURN` are declared aliases of `ALT` and `ENTER`; they resolve to the same variant.
//!
//! ## Examples
//! ```rust
//! use easel_core::consts::families::{ConstFamily, KeyCode};
//!
//! assert_eq!(KeyCode::Enter.code(), 13);
//! assert_eq!(KeyCode::from_code(27), Some(KeyCode::Escape));
//! assert_eq!(KeyCode::from_const_name("RETURN"), Some(KeyCode::Enter));
//! ```

use strum_macros::VariantArray;

use super::ConstFamily;
use crate::consts::registry::ConstValue;
use crate::consts::table;

/// Key codes with a registered symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, VariantArray)]
#[repr(u8)]
pub enum KeyCode {
    Backspace = 8,
    Tab = 9,
    Enter = 13,
    Shift = 16,
    Control = 17,
    Alt = 18,
    Escape = 27,
    LeftArrow = 37,
    UpArrow = 38,
    RightArrow = 39,
    DownArrow = 40,
    Delete = 46,
}

impl KeyCode {
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Resolve a raw key code to a named key.
    pub fn from_code(code: u8) -> Option<KeyCode> {
        <KeyCode as strum::VariantArray>::VARIANTS
            .iter()
            .copied()
            .find(|k| k.code() == code)
    }

    /// Names declared as aliases of this key in the constant table.
    pub fn alias_names(self) -> impl Iterator<Item = &'static str> {
        let name = self.const_name();
        table::ALIASES
            .iter()
            .filter(move |decl| decl.target == name)
            .map(|decl| decl.alias)
    }
}

impl ConstFamily for KeyCode {
    const FAMILY: &'static str = "key code";

    fn const_name(self) -> &'static str {
        match self {
            KeyCode::Backspace => "BACKSPACE",
            KeyCode::Tab => "TAB",
            KeyCode::Enter => "ENTER",
            KeyCode::Shift => "SHIFT",
            KeyCode::Control => "CONTROL",
            KeyCode::Alt => "ALT",
            KeyCode::Escape => "ESCAPE",
            KeyCode::LeftArrow => "LEFT_ARROW",
            KeyCode::UpArrow => "UP_ARROW",
            KeyCode::RightArrow => "RIGHT_ARROW",
            KeyCode::DownArrow => "DOWN_ARROW",
            KeyCode::Delete => "DELETE",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Int(u32::from(self.code()))
    }

    fn from_const_name(name: &str) -> Option<Self> {
        <KeyCode as strum::VariantArray>::VARIANTS
            .iter()
            .copied()
            .find(|k| k.const_name() == name || k.alias_names().any(|alias| alias == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_names_follow_declarations() {
        assert_eq!(KeyCode::Alt.alias_names().collect::<Vec<_>>(), ["OPTION"]);
        assert_eq!(KeyCode::Enter.alias_names().collect::<Vec<_>>(), ["RETURN"]);
        assert_eq!(KeyCode::Escape.alias_names().count(), 0);
    }

    #[test]
    fn test_every_key_alias_declaration_is_reachable() {
        for decl in table::ALIASES {
            let Some(key) = KeyCode::variants().iter().find(|k| k.const_name() == decl.target) else {
                continue;
            };
            assert!(key.alias_names().any(|alias| alias == decl.alias));
            assert_eq!(KeyCode::from_const_name(decl.alias), Some(*key));
        }
    }
}
