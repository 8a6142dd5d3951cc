//! Typed, statically checked access to every public constant under its registered name.
//!
//! Each item has the type of its family. A name that several families share takes the type of the first one
//! (`CENTER` is a [`ShapeMode`], `NORMAL` a [`TextStyle`]); the other families reach the same wire value through
//! their own variants (`HorizAlign::Center`, `TextureMode::Normal`).
//!
//! Declared aliases are defined in terms of their target, so they cannot drift apart.
//!
//! ## Examples
//! ```rust
//! use easel_core::consts::{self, families::AngleMode};
//!
//! assert_eq!(consts::RADIANS, AngleMode::Radians);
//! assert_eq!(consts::TWO_PI, consts::TAU);
//! assert_eq!(consts::OPTION.code(), 18);
//! ```

use super::families::{
    AngleMode, ArcMode, BlendMode, ColorMode, CurveKind, Cursor, DebugMode, DrawMode, Filter, HorizAlign, KeyCode,
    Orientation, Primitive, Renderer, ShapeClose, ShapeMode, Sizing, StrokeCap, StrokeJoin, TextStyle, TextureFilter,
    TextureMode, TextureWrap, VertAlign,
};

// Graphics renderer
pub const P2D: Renderer = Renderer::P2d;
pub const WEBGL: Renderer = Renderer::Webgl;

// Environment
pub const ARROW: Cursor = Cursor::Arrow;
pub const CROSS: Cursor = Cursor::Cross;
pub const HAND: Cursor = Cursor::Hand;
pub const MOVE: Cursor = Cursor::Move;
pub const TEXT: Cursor = Cursor::Text;
pub const WAIT: Cursor = Cursor::Wait;

// Trigonometry
pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;
pub const PI: f64 = std::f64::consts::PI;
pub const QUARTER_PI: f64 = std::f64::consts::FRAC_PI_4;
pub const TAU: f64 = std::f64::consts::TAU;
/// Declared alias of [`TAU`].
pub const TWO_PI: f64 = TAU;
pub const DEGREES: AngleMode = AngleMode::Degrees;
pub const RADIANS: AngleMode = AngleMode::Radians;
pub const DEG_TO_RAD: f64 = PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / PI;

// Shape
pub const CORNER: ShapeMode = ShapeMode::Corner;
pub const CORNERS: ShapeMode = ShapeMode::Corners;
pub const RADIUS: ShapeMode = ShapeMode::Radius;
pub const CENTER: ShapeMode = ShapeMode::Center;
pub const RIGHT: HorizAlign = HorizAlign::Right;
pub const LEFT: HorizAlign = HorizAlign::Left;
pub const TOP: VertAlign = VertAlign::Top;
pub const BOTTOM: VertAlign = VertAlign::Bottom;
pub const BASELINE: VertAlign = VertAlign::Baseline;
pub const POINTS: Primitive = Primitive::Points;
pub const LINES: Primitive = Primitive::Lines;
pub const LINE_STRIP: Primitive = Primitive::LineStrip;
pub const LINE_LOOP: Primitive = Primitive::LineLoop;
pub const TRIANGLES: Primitive = Primitive::Triangles;
pub const TRIANGLE_FAN: Primitive = Primitive::TriangleFan;
pub const TRIANGLE_STRIP: Primitive = Primitive::TriangleStrip;
pub const QUADS: Primitive = Primitive::Quads;
pub const QUAD_STRIP: Primitive = Primitive::QuadStrip;
pub const TESS: Primitive = Primitive::Tess;
pub const CLOSE: ShapeClose = ShapeClose::Close;
pub const OPEN: ShapeClose = ShapeClose::Open;
pub const CHORD: ArcMode = ArcMode::Chord;
pub const PIE: ArcMode = ArcMode::Pie;
pub const PROJECT: StrokeCap = StrokeCap::Project;
pub const SQUARE: StrokeCap = StrokeCap::Square;
pub const ROUND: StrokeCap = StrokeCap::Round;
pub const BEVEL: StrokeJoin = StrokeJoin::Bevel;
pub const MITER: StrokeJoin = StrokeJoin::Miter;

// Color
pub const RGB: ColorMode = ColorMode::Rgb;
pub const HSB: ColorMode = ColorMode::Hsb;
pub const HSL: ColorMode = ColorMode::Hsl;

// DOM extension
pub const AUTO: Sizing = Sizing::Auto;

// Input
pub const ALT: KeyCode = KeyCode::Alt;
pub const BACKSPACE: KeyCode = KeyCode::Backspace;
pub const CONTROL: KeyCode = KeyCode::Control;
pub const DELETE: KeyCode = KeyCode::Delete;
pub const DOWN_ARROW: KeyCode = KeyCode::DownArrow;
pub const ENTER: KeyCode = KeyCode::Enter;
pub const ESCAPE: KeyCode = KeyCode::Escape;
pub const LEFT_ARROW: KeyCode = KeyCode::LeftArrow;
/// Declared alias of [`ALT`].
pub const OPTION: KeyCode = ALT;
/// Declared alias of [`ENTER`].
pub const RETURN: KeyCode = ENTER;
pub const RIGHT_ARROW: KeyCode = KeyCode::RightArrow;
pub const SHIFT: KeyCode = KeyCode::Shift;
pub const TAB: KeyCode = KeyCode::Tab;
pub const UP_ARROW: KeyCode = KeyCode::UpArrow;

// Rendering
pub const BLEND: BlendMode = BlendMode::Blend;
pub const REMOVE: BlendMode = BlendMode::Remove;
pub const ADD: BlendMode = BlendMode::Add;
pub const DARKEST: BlendMode = BlendMode::Darkest;
pub const LIGHTEST: BlendMode = BlendMode::Lightest;
pub const DIFFERENCE: BlendMode = BlendMode::Difference;
pub const SUBTRACT: BlendMode = BlendMode::Subtract;
pub const EXCLUSION: BlendMode = BlendMode::Exclusion;
pub const MULTIPLY: BlendMode = BlendMode::Multiply;
pub const SCREEN: BlendMode = BlendMode::Screen;
pub const REPLACE: BlendMode = BlendMode::Replace;
pub const OVERLAY: BlendMode = BlendMode::Overlay;
pub const HARD_LIGHT: BlendMode = BlendMode::HardLight;
pub const SOFT_LIGHT: BlendMode = BlendMode::SoftLight;
pub const DODGE: BlendMode = BlendMode::Dodge;
pub const BURN: BlendMode = BlendMode::Burn;

// Filters
pub const THRESHOLD: Filter = Filter::Threshold;
pub const GRAY: Filter = Filter::Gray;
pub const OPAQUE: Filter = Filter::Opaque;
pub const INVERT: Filter = Filter::Invert;
pub const POSTERIZE: Filter = Filter::Posterize;
pub const DILATE: Filter = Filter::Dilate;
pub const ERODE: Filter = Filter::Erode;
pub const BLUR: Filter = Filter::Blur;

// Typography
pub const NORMAL: TextStyle = TextStyle::Normal;
pub const ITALIC: TextStyle = TextStyle::Italic;
pub const BOLD: TextStyle = TextStyle::Bold;
pub const BOLDITALIC: TextStyle = TextStyle::BoldItalic;

// Vertices
pub const LINEAR: CurveKind = CurveKind::Linear;
pub const QUADRATIC: CurveKind = CurveKind::Quadratic;
pub const BEZIER: CurveKind = CurveKind::Bezier;
pub const CURVE: CurveKind = CurveKind::Curve;

// WebGL draw modes
pub const STROKE: DrawMode = DrawMode::Stroke;
pub const FILL: DrawMode = DrawMode::Fill;
pub const TEXTURE: DrawMode = DrawMode::Texture;
pub const IMMEDIATE: DrawMode = DrawMode::Immediate;

// WebGL texture mode
pub const IMAGE: TextureMode = TextureMode::Image;

// WebGL texture wrap and filtering
pub const NEAREST: TextureFilter = TextureFilter::Nearest;
pub const REPEAT: TextureWrap = TextureWrap::Repeat;
pub const CLAMP: TextureWrap = TextureWrap::Clamp;
pub const MIRROR: TextureWrap = TextureWrap::Mirror;

// Device orientation
pub const LANDSCAPE: Orientation = Orientation::Landscape;
pub const PORTRAIT: Orientation = Orientation::Portrait;

// Debug
pub const GRID: DebugMode = DebugMode::Grid;
pub const AXES: DebugMode = DebugMode::Axes;
