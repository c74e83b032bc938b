//! Pixhold placeholder-image core
//!
//! Synthesizes solid-color placeholder PNGs with a centered text label
//! showing the image's dimensions. Two components compose linearly: a hex
//! color parser ([`Color::from_hex`]) and an image renderer ([`Renderer`])
//! that fills a canvas, draws the `"<width> x <height>"` label with the
//! embedded sans-serif face, and encodes PNG bytes.
//!
//! The renderer takes its [`FontFace`] by injection; load it once at
//! startup and share the `Renderer` freely — renders are pure and need no
//! locking.
//!
//! # Example
//!
//! ```
//! use pixhold::{Color, FontFace, Renderer};
//!
//! # fn main() -> pixhold::Result<()> {
//! let renderer = Renderer::new(FontFace::embedded()?);
//! let png = renderer.render(320, 200, Color::from_hex("#336699")?)?;
//! assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
//! # Ok(())
//! # }
//! ```
//!
//! An HTTP front end (out of scope here) maps [`Error::is_invalid_input`]
//! to its 400/500 split and serves the returned bytes as `image/png`.

pub mod color;
pub mod error;
pub mod font;
pub mod render;

pub use color::Color;
pub use error::{Error, FontError, ParseColorError, RenderError, Result};
pub use font::{FontFace, ScaledMetrics};
pub use render::{Renderer, INK};
