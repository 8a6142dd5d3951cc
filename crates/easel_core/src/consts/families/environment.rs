//! Environment-level families: renderer, cursor style, angle unit, color model, device orientation, sizing.

use strum_macros::{Display, EnumString, IntoStaticStr, VariantArray};

use super::ConstFamily;
use crate::consts::registry::ConstValue;

/// Graphics renderer backing a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum Renderer {
    #[strum(to_string = "p2d")]
    P2d,
    #[strum(to_string = "webgl")]
    Webgl,
}

impl Renderer {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for Renderer {
    const FAMILY: &'static str = "renderer";

    fn const_name(self) -> &'static str {
        match self {
            Renderer::P2d => "P2D",
            Renderer::Webgl => "WEBGL",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Mouse cursor style.
///
/// ## Notes
/// - Wire values are CSS `cursor` keywords, so `Arrow` is `"default"` and `Hand` is `"pointer"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum Cursor {
    #[strum(to_string = "default")]
    Arrow,
    #[strum(to_string = "crosshair")]
    Cross,
    #[strum(to_string = "pointer")]
    Hand,
    #[strum(to_string = "move")]
    Move,
    #[strum(to_string = "text")]
    Text,
    #[strum(to_string = "wait")]
    Wait,
}

impl Cursor {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for Cursor {
    const FAMILY: &'static str = "cursor";

    fn const_name(self) -> &'static str {
        match self {
            Cursor::Arrow => "ARROW",
            Cursor::Cross => "CROSS",
            Cursor::Hand => "HAND",
            Cursor::Move => "MOVE",
            Cursor::Text => "TEXT",
            Cursor::Wait => "WAIT",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Unit used to interpret angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum AngleMode {
    #[strum(to_string = "degrees")]
    Degrees,
    #[strum(to_string = "radians")]
    Radians,
}

impl AngleMode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for AngleMode {
    const FAMILY: &'static str = "angle mode";

    fn const_name(self) -> &'static str {
        match self {
            AngleMode::Degrees => "DEGREES",
            AngleMode::Radians => "RADIANS",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Color model used to interpret color components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum ColorMode {
    #[strum(to_string = "rgb")]
    Rgb,
    #[strum(to_string = "hsb")]
    Hsb,
    #[strum(to_string = "hsl")]
    Hsl,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for ColorMode {
    const FAMILY: &'static str = "color mode";

    fn const_name(self) -> &'static str {
        match self {
            ColorMode::Rgb => "RGB",
            ColorMode::Hsb => "HSB",
            ColorMode::Hsl => "HSL",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Device orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum Orientation {
    #[strum(to_string = "landscape")]
    Landscape,
    #[strum(to_string = "portrait")]
    Portrait,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for Orientation {
    const FAMILY: &'static str = "orientation";

    fn const_name(self) -> &'static str {
        match self {
            Orientation::Landscape => "LANDSCAPE",
            Orientation::Portrait => "PORTRAIT",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Automatic sizing for DOM elements (`size(AUTO, h)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum Sizing {
    #[strum(to_string = "auto")]
    Auto,
}

impl Sizing {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for Sizing {
    const FAMILY: &'static str = "sizing";

    fn const_name(self) -> &'static str {
        match self {
            Sizing::Auto => "AUTO",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}
