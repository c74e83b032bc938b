//! Placeholder rasterization: solid fill, centered dimension label, PNG
//!
//! The whole pipeline is a pure, single-pass transformation: allocate a
//! canvas, fill it with the background color, shape and draw the
//! `"<width> x <height>"` label, encode as PNG. Identical inputs produce
//! byte-identical output.

pub mod layout;

use std::io::Cursor;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache};
use image::{ImageFormat, Rgba, RgbaImage};
use log::{debug, error};

use crate::color::Color;
use crate::error::RenderError;
use crate::font::FontFace;

/// Fixed ink for the dimension label, independent of the background.
pub const INK: Color = Color {
    r: 60,
    g: 60,
    b: 60,
    a: 255,
};

/// Canvas sides above this are rejected (Chrome's canvas limit).
const MAX_DIMENSION: i32 = 32767;

/// Renders placeholder images with a shared, read-only [`FontFace`].
///
/// The face is injected at construction; every render call builds its own
/// shaping state from it, so a single `Renderer` can serve concurrent
/// callers without synchronization.
pub struct Renderer {
    font: FontFace,
}

impl Renderer {
    pub fn new(font: FontFace) -> Self {
        Self { font }
    }

    /// Render a `width` x `height` placeholder PNG filled with `color`.
    ///
    /// Both sides must be positive (and within the canvas limit); the label
    /// is drawn centered, clipping at the canvas edge when it does not fit.
    pub fn render(&self, width: i32, height: i32, color: Color) -> Result<Vec<u8>, RenderError> {
        if width <= 0 || height <= 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let mut canvas = RgbaImage::from_pixel(
            width as u32,
            height as u32,
            Rgba([color.r, color.g, color.b, color.a]),
        );

        let label = layout::dimension_label(width, height);
        let font_size = layout::label_font_size(width);
        self.draw_label(&mut canvas, &label, font_size, width, height);

        let mut png = Vec::new();
        canvas
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| {
                error!("PNG encoding failed for {}x{}: {}", width, height, e);
                RenderError::EncodingFailed(e.to_string())
            })?;
        Ok(png)
    }

    /// Parse `hex` and render in one step, the shape an HTTP front end
    /// consumes: PNG bytes on success, a structured error otherwise.
    pub fn render_hex(&self, width: i32, height: i32, hex: &str) -> crate::Result<Vec<u8>> {
        let color = Color::from_hex(hex)?;
        Ok(self.render(width, height, color)?)
    }

    /// Shape the label, center it per the layout rules, and blend the glyph
    /// coverage onto the canvas.
    fn draw_label(
        &self,
        canvas: &mut RgbaImage,
        label: &str,
        font_size: f32,
        width: i32,
        height: i32,
    ) {
        let mut font_system =
            FontSystem::new_with_locale_and_db("en".to_string(), self.font.database().clone());

        let mut buffer = Buffer::new(&mut font_system, Metrics::new(font_size, font_size * 1.2));
        let attrs = Attrs::new().family(Family::SansSerif);
        buffer.set_text(&mut font_system, label, &attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut font_system, false);

        // Advance width and the baseline the buffer chose for its own
        // coordinate space; the label is a single line.
        let mut label_width: f32 = 0.0;
        let mut buffer_baseline: f32 = 0.0;
        for run in buffer.layout_runs() {
            label_width = label_width.max(run.line_w);
            buffer_baseline = run.line_y;
        }

        let scaled = self.font.scaled_metrics(font_size);
        let ascent = scaled.ascent.round() as i32;
        let descent = scaled.descent.round() as i32;

        let x = layout::centered_x(width, label_width.round() as i32);
        let y = layout::baseline_y(height, ascent, descent);
        debug!("label {:?}: {}px at origin ({}, {})", label, font_size, x, y);

        // Shift buffer-space pixels so the buffer's baseline lands on y.
        let dx = x;
        let dy = y - buffer_baseline.round() as i32;

        let ink = cosmic_text::Color::rgba(INK.r, INK.g, INK.b, INK.a);
        let mut cache = SwashCache::new();
        buffer.draw(&mut font_system, &mut cache, ink, |gx, gy, gw, gh, c| {
            let alpha = c.a() as u32;
            if alpha == 0 {
                return;
            }
            for row in 0..gh as i32 {
                for col in 0..gw as i32 {
                    let tx = dx + gx + col;
                    let ty = dy + gy + row;
                    if tx < 0 || ty < 0 || tx >= width || ty >= height {
                        continue;
                    }
                    let px = canvas.get_pixel_mut(tx as u32, ty as u32);
                    px.0[0] = blend(c.r(), px.0[0], alpha);
                    px.0[1] = blend(c.g(), px.0[1], alpha);
                    px.0[2] = blend(c.b(), px.0[2], alpha);
                }
            }
        });
    }
}

/// Source-over blend of one channel at the given coverage alpha.
fn blend(src: u8, dst: u8, alpha: u32) -> u8 {
    ((src as u32 * alpha + dst as u32 * (255 - alpha)) / 255) as u8
}
