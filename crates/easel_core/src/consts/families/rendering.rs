//! Rendering families: compositing blend modes, image filters, WebGL draw modes, and debug overlays.

use strum_macros::{Display, EnumString, IntoStaticStr, VariantArray};

use super::ConstFamily;
use crate::consts::registry::ConstValue;

/// Compositing blend mode.
///
/// ## Notes
/// - Wire values are canvas `globalCompositeOperation` keywords: `Blend` is `"source-over"`, `Add` is
///   `"lighter"`, `Replace` is `"copy"`.
/// - `Subtract` has no 2D canvas equivalent; only the WebGL renderer honors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum BlendMode {
    #[strum(to_string = "source-over")]
    Blend,
    #[strum(to_string = "destination-out")]
    Remove,
    #[strum(to_string = "lighter")]
    Add,
    #[strum(to_string = "darken")]
    Darkest,
    #[strum(to_string = "lighten")]
    Lightest,
    #[strum(to_string = "difference")]
    Difference,
    #[strum(to_string = "subtract")]
    Subtract,
    #[strum(to_string = "exclusion")]
    Exclusion,
    #[strum(to_string = "multiply")]
    Multiply,
    #[strum(to_string = "screen")]
    Screen,
    #[strum(to_string = "copy")]
    Replace,
    #[strum(to_string = "overlay")]
    Overlay,
    #[strum(to_string = "hard-light")]
    HardLight,
    #[strum(to_string = "soft-light")]
    SoftLight,
    #[strum(to_string = "color-dodge")]
    Dodge,
    #[strum(to_string = "color-burn")]
    Burn,
}

impl BlendMode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for BlendMode {
    const FAMILY: &'static str = "blend mode";

    fn const_name(self) -> &'static str {
        match self {
            BlendMode::Blend => "BLEND",
            BlendMode::Remove => "REMOVE",
            BlendMode::Add => "ADD",
            BlendMode::Darkest => "DARKEST",
            BlendMode::Lightest => "LIGHTEST",
            BlendMode::Difference => "DIFFERENCE",
            BlendMode::Subtract => "SUBTRACT",
            BlendMode::Exclusion => "EXCLUSION",
            BlendMode::Multiply => "MULTIPLY",
            BlendMode::Screen => "SCREEN",
            BlendMode::Replace => "REPLACE",
            BlendMode::Overlay => "OVERLAY",
            BlendMode::HardLight => "HARD_LIGHT",
            BlendMode::SoftLight => "SOFT_LIGHT",
            BlendMode::Dodge => "DODGE",
            BlendMode::Burn => "BURN",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Image filter kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum Filter {
    #[strum(to_string = "threshold")]
    Threshold,
    #[strum(to_string = "gray")]
    Gray,
    #[strum(to_string = "opaque")]
    Opaque,
    #[strum(to_string = "invert")]
    Invert,
    #[strum(to_string = "posterize")]
    Posterize,
    #[strum(to_string = "dilate")]
    Dilate,
    #[strum(to_string = "erode")]
    Erode,
    #[strum(to_string = "blur")]
    Blur,
}

impl Filter {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for Filter {
    const FAMILY: &'static str = "filter";

    fn const_name(self) -> &'static str {
        match self {
            Filter::Threshold => "THRESHOLD",
            Filter::Gray => "GRAY",
            Filter::Opaque => "OPAQUE",
            Filter::Invert => "INVERT",
            Filter::Posterize => "POSTERIZE",
            Filter::Dilate => "DILATE",
            Filter::Erode => "ERODE",
            Filter::Blur => "BLUR",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// WebGL draw mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum DrawMode {
    #[strum(to_string = "stroke")]
    Stroke,
    #[strum(to_string = "fill")]
    Fill,
    #[strum(to_string = "texture")]
    Texture,
    #[strum(to_string = "immediate")]
    Immediate,
}

impl DrawMode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for DrawMode {
    const FAMILY: &'static str = "draw mode";

    fn const_name(self) -> &'static str {
        match self {
            DrawMode::Stroke => "STROKE",
            DrawMode::Fill => "FILL",
            DrawMode::Texture => "TEXTURE",
            DrawMode::Immediate => "IMMEDIATE",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Debug overlay drawn by `debugMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum DebugMode {
    #[strum(to_string = "grid")]
    Grid,
    #[strum(to_string = "axes")]
    Axes,
}

impl DebugMode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for DebugMode {
    const FAMILY: &'static str = "debug mode";

    fn const_name(self) -> &'static str {
        match self {
            DebugMode::Grid => "GRID",
            DebugMode::Axes => "AXES",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}
