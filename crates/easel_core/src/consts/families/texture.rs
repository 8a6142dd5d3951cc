//! WebGL texture families: coordinate mode, filtering, and wrapping.
//!
//! `NORMAL` and `LINEAR` are registered once (under typography and vertices) and reused here.

use strum_macros::{Display, EnumString, IntoStaticStr, VariantArray};

use super::ConstFamily;
use crate::consts::registry::ConstValue;

/// How texture coordinates are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum TextureMode {
    #[strum(to_string = "normal")]
    Normal,
    #[strum(to_string = "image")]
    Image,
}

impl TextureMode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for TextureMode {
    const FAMILY: &'static str = "texture mode";

    fn const_name(self) -> &'static str {
        match self {
            TextureMode::Normal => "NORMAL",
            TextureMode::Image => "IMAGE",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Texture sampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum TextureFilter {
    #[strum(to_string = "linear")]
    Linear,
    #[strum(to_string = "nearest")]
    Nearest,
}

impl TextureFilter {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for TextureFilter {
    const FAMILY: &'static str = "texture filter";

    fn const_name(self) -> &'static str {
        match self {
            TextureFilter::Linear => "LINEAR",
            TextureFilter::Nearest => "NEAREST",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Texture wrap behavior outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum TextureWrap {
    #[strum(to_string = "repeat")]
    Repeat,
    #[strum(to_string = "clamp")]
    Clamp,
    #[strum(to_string = "mirror")]
    Mirror,
}

impl TextureWrap {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for TextureWrap {
    const FAMILY: &'static str = "texture wrap";

    fn const_name(self) -> &'static str {
        match self {
            TextureWrap::Repeat => "REPEAT",
            TextureWrap::Clamp => "CLAMP",
            TextureWrap::Mirror => "MIRROR",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}
