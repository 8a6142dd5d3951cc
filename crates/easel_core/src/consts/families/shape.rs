//! Shape and vertex families: placement modes, text alignment, primitive topology, arc/close modes,
//! stroke caps and joins, and vertex curve kinds.
//!
//! ## Notes
//! - `CENTER` is shared by [`ShapeMode`], [`HorizAlign`], and [`VertAlign`]; `OPEN` by [`ShapeClose`] and
//!   [`ArcMode`]; `ROUND` by [`StrokeCap`] and [`StrokeJoin`]. They are one registry entry each.
//! - Stroke caps keep the canvas spellings: `PROJECT` is `"square"` and `SQUARE` is `"butt"`.

use strum_macros::{Display, EnumString, IntoStaticStr, VariantArray};

use super::ConstFamily;
use crate::consts::registry::ConstValue;

/// How rectangle/ellipse/image coordinates are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum ShapeMode {
    #[strum(to_string = "corner")]
    Corner,
    #[strum(to_string = "corners")]
    Corners,
    #[strum(to_string = "radius")]
    Radius,
    #[strum(to_string = "center")]
    Center,
}

impl ShapeMode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for ShapeMode {
    const FAMILY: &'static str = "shape mode";

    fn const_name(self) -> &'static str {
        match self {
            ShapeMode::Corner => "CORNER",
            ShapeMode::Corners => "CORNERS",
            ShapeMode::Radius => "RADIUS",
            ShapeMode::Center => "CENTER",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum HorizAlign {
    #[strum(to_string = "left")]
    Left,
    #[strum(to_string = "center")]
    Center,
    #[strum(to_string = "right")]
    Right,
}

impl HorizAlign {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for HorizAlign {
    const FAMILY: &'static str = "horizontal alignment";

    fn const_name(self) -> &'static str {
        match self {
            HorizAlign::Left => "LEFT",
            HorizAlign::Center => "CENTER",
            HorizAlign::Right => "RIGHT",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Vertical text alignment.
///
/// ## Notes
/// - `Baseline` serializes to the canvas keyword `"alphabetic"`.
/// - The canvas spelling for a vertically centered baseline is `"middle"`; see [`VertAlign::canvas_baseline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum VertAlign {
    #[strum(to_string = "top")]
    Top,
    #[strum(to_string = "center")]
    Center,
    #[strum(to_string = "bottom")]
    Bottom,
    #[strum(to_string = "alphabetic")]
    Baseline,
}

impl VertAlign {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Return the `textBaseline` keyword a 2D canvas context expects for this alignment.
    pub fn canvas_baseline(self) -> &'static str {
        match self {
            VertAlign::Center => crate::consts::table::CTX_MIDDLE,
            other => other.as_str(),
        }
    }
}

impl ConstFamily for VertAlign {
    const FAMILY: &'static str = "vertical alignment";

    fn const_name(self) -> &'static str {
        match self {
            VertAlign::Top => "TOP",
            VertAlign::Center => "CENTER",
            VertAlign::Bottom => "BOTTOM",
            VertAlign::Baseline => "BASELINE",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Primitive drawing mode passed to `beginShape`.
///
/// ## Notes
/// - The first seven kinds are GL topology codes (`POINTS` is `0`); the rest are string kinds handled by the
///   shape builder itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, VariantArray)]
pub enum Primitive {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
    Quads,
    QuadStrip,
    Tess,
}

impl Primitive {
    /// Return the GL topology code, for the kinds that have one.
    pub fn topology_code(self) -> Option<u32> {
        self.value().as_int()
    }

    /// Return the string tag, for the kinds without a topology code.
    pub fn tag(self) -> Option<&'static str> {
        self.value().as_str()
    }

    /// Resolve a registry value back to a primitive kind.
    pub fn from_value(value: ConstValue) -> Option<Primitive> {
        <Primitive as strum::VariantArray>::VARIANTS
            .iter()
            .copied()
            .find(|p| p.value() == value)
    }
}

impl ConstFamily for Primitive {
    const FAMILY: &'static str = "primitive";

    fn const_name(self) -> &'static str {
        match self {
            Primitive::Points => "POINTS",
            Primitive::Lines => "LINES",
            Primitive::LineLoop => "LINE_LOOP",
            Primitive::LineStrip => "LINE_STRIP",
            Primitive::Triangles => "TRIANGLES",
            Primitive::TriangleStrip => "TRIANGLE_STRIP",
            Primitive::TriangleFan => "TRIANGLE_FAN",
            Primitive::Quads => "QUADS",
            Primitive::QuadStrip => "QUAD_STRIP",
            Primitive::Tess => "TESS",
        }
    }

    fn value(self) -> ConstValue {
        match self {
            Primitive::Points => ConstValue::Int(0x0000),
            Primitive::Lines => ConstValue::Int(0x0001),
            Primitive::LineLoop => ConstValue::Int(0x0002),
            Primitive::LineStrip => ConstValue::Int(0x0003),
            Primitive::Triangles => ConstValue::Int(0x0004),
            Primitive::TriangleStrip => ConstValue::Int(0x0005),
            Primitive::TriangleFan => ConstValue::Int(0x0006),
            Primitive::Quads => ConstValue::Str("quads"),
            Primitive::QuadStrip => ConstValue::Str("quad_strip"),
            Primitive::Tess => ConstValue::Str("tess"),
        }
    }
}

/// Whether `endShape` closes the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum ShapeClose {
    #[strum(to_string = "open")]
    Open,
    #[strum(to_string = "close")]
    Close,
}

impl ShapeClose {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for ShapeClose {
    const FAMILY: &'static str = "shape close";

    fn const_name(self) -> &'static str {
        match self {
            ShapeClose::Open => "OPEN",
            ShapeClose::Close => "CLOSE",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// How an arc's ends are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum ArcMode {
    #[strum(to_string = "open")]
    Open,
    #[strum(to_string = "chord")]
    Chord,
    #[strum(to_string = "pie")]
    Pie,
}

impl ArcMode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for ArcMode {
    const FAMILY: &'static str = "arc mode";

    fn const_name(self) -> &'static str {
        match self {
            ArcMode::Open => "OPEN",
            ArcMode::Chord => "CHORD",
            ArcMode::Pie => "PIE",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Line end style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum StrokeCap {
    #[strum(to_string = "square")]
    Project,
    #[strum(to_string = "butt")]
    Square,
    #[strum(to_string = "round")]
    Round,
}

impl StrokeCap {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for StrokeCap {
    const FAMILY: &'static str = "stroke cap";

    fn const_name(self) -> &'static str {
        match self {
            StrokeCap::Project => "PROJECT",
            StrokeCap::Square => "SQUARE",
            StrokeCap::Round => "ROUND",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum StrokeJoin {
    #[strum(to_string = "round")]
    Round,
    #[strum(to_string = "bevel")]
    Bevel,
    #[strum(to_string = "miter")]
    Miter,
}

impl StrokeJoin {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for StrokeJoin {
    const FAMILY: &'static str = "stroke join";

    fn const_name(self) -> &'static str {
        match self {
            StrokeJoin::Round => "ROUND",
            StrokeJoin::Bevel => "BEVEL",
            StrokeJoin::Miter => "MITER",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}

/// Kind of vertex segment.
///
/// `LINEAR` doubles as the linear texture filter ([`crate::consts::families::TextureFilter::Linear`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantArray)]
pub enum CurveKind {
    #[strum(to_string = "linear")]
    Linear,
    #[strum(to_string = "quadratic")]
    Quadratic,
    #[strum(to_string = "bezier")]
    Bezier,
    #[strum(to_string = "curve")]
    Curve,
}

impl CurveKind {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ConstFamily for CurveKind {
    const FAMILY: &'static str = "curve kind";

    fn const_name(self) -> &'static str {
        match self {
            CurveKind::Linear => "LINEAR",
            CurveKind::Quadratic => "QUADRATIC",
            CurveKind::Bezier => "BEZIER",
            CurveKind::Curve => "CURVE",
        }
    }

    fn value(self) -> ConstValue {
        ConstValue::Str(self.as_str())
    }
}
