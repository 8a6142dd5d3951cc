//! The declared constant table.
//!
//! [`ENTRIES`] lists every constant in section order; [`ALIASES`] lists every pair of names that intentionally share
//! a value. Nothing here is validated; [`crate::consts::builder::RegistryBuilder`] checks the table before it is
//! frozen into [`crate::consts::ConstantRegistry`].
//!
//! ## Notes
//! - Names starting with `_` are internal. They are declared with [`Visibility::Internal`](super::registry::Visibility)
//!   and their Rust items are `pub(crate)`.
//! - `NORMAL` (typography and texture mode) and `LINEAR` (vertices and texture filter) are registered once.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use super::registry::{AliasDecl, Category, ConstValue, ConstantEntry, internal, public};

use Category::*;
use ConstValue::{Float, Int, Str};

/// Default fill color for text.
pub(crate) const DEFAULT_TEXT_FILL: &str = "#000000";
/// Line height as a multiple of the font size.
pub(crate) const DEFAULT_LEADMULT: f64 = 1.25;
/// Canvas `textBaseline` keyword for vertical centering.
pub(crate) const CTX_MIDDLE: &str = "middle";
/// Default stroke color.
pub(crate) const DEFAULT_STROKE: &str = "#000000";
/// Default fill color.
pub(crate) const DEFAULT_FILL: &str = "#FFFFFF";

pub(crate) const ENTRIES: &[ConstantEntry] = &[
    // Graphics renderer
    public("P2D", Str("p2d"), Renderer, "The default, two-dimensional renderer."),
    public("WEBGL", Str("webgl"), Renderer, "The WebGL renderer, for 3D graphics."),
    // Environment
    public("ARROW", Str("default"), Cursor, "Default arrow cursor."),
    public("CROSS", Str("crosshair"), Cursor, "Crosshair cursor."),
    public("HAND", Str("pointer"), Cursor, "Pointing-hand cursor."),
    public("MOVE", Str("move"), Cursor, "Move cursor."),
    public("TEXT", Str("text"), Cursor, "Text-selection cursor."),
    public("WAIT", Str("wait"), Cursor, "Busy cursor."),
    // Trigonometry
    public("HALF_PI", Float(FRAC_PI_2), Trigonometry, "Half the ratio of a circle's circumference to its diameter."),
    public("PI", Float(PI), Trigonometry, "The ratio of a circle's circumference to its diameter."),
    public("QUARTER_PI", Float(FRAC_PI_4), Trigonometry, "A quarter of PI."),
    public("TAU", Float(TAU), Trigonometry, "The full-circle constant, twice PI."),
    public("TWO_PI", Float(TAU), Trigonometry, "Twice PI."),
    public("DEGREES", Str("degrees"), Trigonometry, "Angles are measured in degrees."),
    public("RADIANS", Str("radians"), Trigonometry, "Angles are measured in radians."),
    public("DEG_TO_RAD", Float(PI / 180.0), Trigonometry, "Multiply degrees by this to get radians."),
    public("RAD_TO_DEG", Float(180.0 / PI), Trigonometry, "Multiply radians by this to get degrees."),
    // Shape
    public("CORNER", Str("corner"), Shape, "Coordinates name the top-left corner."),
    public("CORNERS", Str("corners"), Shape, "Coordinates name two opposite corners."),
    public("RADIUS", Str("radius"), Shape, "Coordinates name the center; sizes are half-extents."),
    public("RIGHT", Str("right"), Shape, "Right alignment."),
    public("LEFT", Str("left"), Shape, "Left alignment."),
    public("CENTER", Str("center"), Shape, "Center alignment, or coordinates naming the center."),
    public("TOP", Str("top"), Shape, "Top alignment."),
    public("BOTTOM", Str("bottom"), Shape, "Bottom alignment."),
    public("BASELINE", Str("alphabetic"), Shape, "Alphabetic baseline alignment."),
    public("POINTS", Int(0x0000), Shape, "Draw each vertex as a point."),
    public("LINES", Int(0x0001), Shape, "Draw each vertex pair as a segment."),
    public("LINE_STRIP", Int(0x0003), Shape, "Draw a connected polyline."),
    public("LINE_LOOP", Int(0x0002), Shape, "Draw a closed polyline."),
    public("TRIANGLES", Int(0x0004), Shape, "Draw each vertex triple as a triangle."),
    public("TRIANGLE_FAN", Int(0x0006), Shape, "Draw triangles sharing the first vertex."),
    public("TRIANGLE_STRIP", Int(0x0005), Shape, "Draw triangles sharing consecutive edges."),
    public("QUADS", Str("quads"), Shape, "Draw each vertex quadruple as a quad."),
    public("QUAD_STRIP", Str("quad_strip"), Shape, "Draw quads sharing consecutive edges."),
    public("TESS", Str("tess"), Shape, "Tessellate an arbitrary polygon."),
    public("CLOSE", Str("close"), Shape, "Close the outline when ending a shape."),
    public("OPEN", Str("open"), Shape, "Leave an outline or arc open."),
    public("CHORD", Str("chord"), Shape, "Close an arc with a straight chord."),
    public("PIE", Str("pie"), Shape, "Close an arc through its center."),
    public("PROJECT", Str("square"), Shape, "Square line ends extending past the endpoint."),
    public("SQUARE", Str("butt"), Shape, "Square line ends flush with the endpoint."),
    public("ROUND", Str("round"), Shape, "Rounded line ends or joins."),
    public("BEVEL", Str("bevel"), Shape, "Beveled line joins."),
    public("MITER", Str("miter"), Shape, "Mitered line joins."),
    // Color
    public("RGB", Str("rgb"), Color, "Red, green, blue color model."),
    public("HSB", Str("hsb"), Color, "Hue, saturation, brightness color model."),
    public("HSL", Str("hsl"), Color, "Hue, saturation, lightness color model."),
    // DOM extension
    public("AUTO", Str("auto"), Dom, "Size a DOM element automatically."),
    // Input
    public("ALT", Int(18), Input, "Alt key."),
    public("BACKSPACE", Int(8), Input, "Backspace key."),
    public("CONTROL", Int(17), Input, "Control key."),
    public("DELETE", Int(46), Input, "Delete key."),
    public("DOWN_ARROW", Int(40), Input, "Down arrow key."),
    public("ENTER", Int(13), Input, "Enter key."),
    public("ESCAPE", Int(27), Input, "Escape key."),
    public("LEFT_ARROW", Int(37), Input, "Left arrow key."),
    public("OPTION", Int(18), Input, "Option key (the Alt key on macOS keyboards)."),
    public("RETURN", Int(13), Input, "Return key (the Enter key)."),
    public("RIGHT_ARROW", Int(39), Input, "Right arrow key."),
    public("SHIFT", Int(16), Input, "Shift key."),
    public("TAB", Int(9), Input, "Tab key."),
    public("UP_ARROW", Int(38), Input, "Up arrow key."),
    // Rendering
    public("BLEND", Str("source-over"), BlendMode, "Linear interpolation of colors; the default."),
    public("REMOVE", Str("destination-out"), BlendMode, "Remove pixels under the source."),
    public("ADD", Str("lighter"), BlendMode, "Additive blending."),
    public("DARKEST", Str("darken"), BlendMode, "Keep the darkest color."),
    public("LIGHTEST", Str("lighten"), BlendMode, "Keep the lightest color."),
    public("DIFFERENCE", Str("difference"), BlendMode, "Subtract colors from the underlying image."),
    public("SUBTRACT", Str("subtract"), BlendMode, "Remainder of two colors (WebGL only)."),
    public("EXCLUSION", Str("exclusion"), BlendMode, "Like DIFFERENCE, with less contrast."),
    public("MULTIPLY", Str("multiply"), BlendMode, "Multiply colors; the result is always darker."),
    public("SCREEN", Str("screen"), BlendMode, "Inverse multiply; the result is always lighter."),
    public("REPLACE", Str("copy"), BlendMode, "Replace pixels entirely."),
    public("OVERLAY", Str("overlay"), BlendMode, "MULTIPLY dark values and SCREEN light values."),
    public("HARD_LIGHT", Str("hard-light"), BlendMode, "SCREEN above 50% gray, MULTIPLY below."),
    public("SOFT_LIGHT", Str("soft-light"), BlendMode, "A softer HARD_LIGHT."),
    public("DODGE", Str("color-dodge"), BlendMode, "Lighten light tones and increase contrast."),
    public("BURN", Str("color-burn"), BlendMode, "Darken dark tones and increase contrast."),
    // Filters
    public("THRESHOLD", Str("threshold"), Filter, "Convert to black and white around a threshold."),
    public("GRAY", Str("gray"), Filter, "Convert to grayscale."),
    public("OPAQUE", Str("opaque"), Filter, "Set the alpha channel to fully opaque."),
    public("INVERT", Str("invert"), Filter, "Invert each pixel."),
    public("POSTERIZE", Str("posterize"), Filter, "Limit each channel to a number of levels."),
    public("DILATE", Str("dilate"), Filter, "Grow light areas."),
    public("ERODE", Str("erode"), Filter, "Shrink light areas."),
    public("BLUR", Str("blur"), Filter, "Gaussian blur."),
    // Typography
    public("NORMAL", Str("normal"), Typography, "Normal font style, or normalized texture coordinates."),
    public("ITALIC", Str("italic"), Typography, "Italic font style."),
    public("BOLD", Str("bold"), Typography, "Bold font style."),
    public("BOLDITALIC", Str("bold italic"), Typography, "Bold italic font style."),
    internal("_DEFAULT_TEXT_FILL", Str(DEFAULT_TEXT_FILL), Typography, "Default text fill color."),
    internal("_DEFAULT_LEADMULT", Float(DEFAULT_LEADMULT), Typography, "Default leading as a multiple of the text size."),
    internal("_CTX_MIDDLE", Str(CTX_MIDDLE), Typography, "Canvas keyword for a vertically centered baseline."),
    // Vertices
    public("LINEAR", Str("linear"), Vertices, "Straight segments, or linear texture filtering."),
    public("QUADRATIC", Str("quadratic"), Vertices, "Quadratic Bezier segments."),
    public("BEZIER", Str("bezier"), Vertices, "Cubic Bezier segments."),
    public("CURVE", Str("curve"), Vertices, "Catmull-Rom spline segments."),
    // WebGL draw modes
    public("STROKE", Str("stroke"), DrawMode, "Stroke draw mode."),
    public("FILL", Str("fill"), DrawMode, "Fill draw mode."),
    public("TEXTURE", Str("texture"), DrawMode, "Texture draw mode."),
    public("IMMEDIATE", Str("immediate"), DrawMode, "Immediate draw mode."),
    // WebGL texture mode
    public("IMAGE", Str("image"), TextureMode, "Texture coordinates in image pixels."),
    // WebGL texture wrap and filtering
    public("NEAREST", Str("nearest"), TextureWrap, "Nearest-neighbor texture filtering."),
    public("REPEAT", Str("repeat"), TextureWrap, "Repeat the texture."),
    public("CLAMP", Str("clamp"), TextureWrap, "Clamp texture coordinates to the edge."),
    public("MIRROR", Str("mirror"), TextureWrap, "Repeat the texture, mirroring every other tile."),
    // Device orientation
    public("LANDSCAPE", Str("landscape"), Orientation, "Landscape device orientation."),
    public("PORTRAIT", Str("portrait"), Orientation, "Portrait device orientation."),
    // Defaults
    internal("_DEFAULT_STROKE", Str(DEFAULT_STROKE), Defaults, "Default stroke color."),
    internal("_DEFAULT_FILL", Str(DEFAULT_FILL), Defaults, "Default fill color."),
    public("GRID", Str("grid"), Debug, "Draw a ground grid in debug mode."),
    public("AXES", Str("axes"), Debug, "Draw axes in debug mode."),
];

/// Every pair of names that intentionally share a value.
pub(crate) const ALIASES: &[AliasDecl] = &[
    AliasDecl {
        alias: "TWO_PI",
        target: "TAU",
        note: "Both name the full-circle angle 2π.",
    },
    AliasDecl {
        alias: "OPTION",
        target: "ALT",
        note: "The Option key reports the Alt key code.",
    },
    AliasDecl {
        alias: "RETURN",
        target: "ENTER",
        note: "Return and Enter report the same key code.",
    },
];
