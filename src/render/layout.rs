//! Label text and placement math
//!
//! Pure integer/float helpers, kept separate from the rasterizer so the
//! coordinate conventions are testable without a canvas.

/// The label text: decimal width, literal `" x "`, decimal height.
pub fn dimension_label(width: i32, height: i32) -> String {
    format!("{} x {}", width, height)
}

/// Label size scales with the canvas: one tenth of the width, in pixels.
pub fn label_font_size(width: i32) -> f32 {
    width as f32 / 10.0
}

/// Horizontal origin that centers a label of the given advance width.
/// May be negative when the label is wider than the canvas; the caller
/// clips at the canvas edge.
pub fn centered_x(canvas_width: i32, label_width: i32) -> i32 {
    (canvas_width - label_width) / 2
}

/// Baseline that centers the glyph band (ascent above, descent below) on
/// the vertical midpoint of the canvas. Metrics are whole pixels and the
/// divisions truncate; the exact arithmetic is part of the output contract.
pub fn baseline_y(canvas_height: i32, ascent: i32, descent: i32) -> i32 {
    let line_height = ascent + descent;
    canvas_height / 2 + ascent - line_height / 2
}
