//! The embedded typeface shared by every render call
//!
//! The face is loaded once at startup into a private font database and then
//! used read-only; render calls build their per-call shaping state from it
//! without any locking. Load failures surface as a startup `FontError`
//! rather than a per-request condition.

use cosmic_text::fontdb;
use swash::FontRef;

use crate::error::FontError;

/// DejaVu Sans, the single sans-serif face shipped with the crate.
static EMBEDDED_SANS: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/DejaVuSans.ttf"));

/// Vertical font metrics scaled to a pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledMetrics {
    /// Distance glyphs extend above the baseline, in pixels
    pub ascent: f32,
    /// Distance glyphs extend below the baseline, in pixels (positive)
    pub descent: f32,
}

impl ScaledMetrics {
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// An immutable font resource, constructed once and passed into the
/// renderer.
///
/// Only the embedded face is registered; no system fonts are discovered, so
/// rendering behaves identically on every host.
pub struct FontFace {
    db: fontdb::Database,
    units_per_em: f32,
    ascent: f32,
    descent: f32,
}

impl FontFace {
    /// Load the embedded sans-serif face.
    pub fn embedded() -> Result<Self, FontError> {
        Self::from_bytes(EMBEDDED_SANS.to_vec())
    }

    /// Load a face from raw font bytes. Lets tests inject font data
    /// directly instead of relying on the embedded asset.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, FontError> {
        let font = FontRef::from_index(&data, 0).ok_or(FontError::UnparsableFont)?;
        let metrics = font.metrics(&[]);
        if metrics.units_per_em == 0 {
            return Err(FontError::UnparsableFont);
        }

        let mut db = fontdb::Database::new();
        db.load_font_data(data);

        // Point the generic sans-serif family at the loaded face so shaping
        // never falls back to host fonts.
        let family = db
            .faces()
            .next()
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
            .ok_or(FontError::NoUsableFace)?;
        db.set_sans_serif_family(family);

        Ok(Self {
            db,
            units_per_em: metrics.units_per_em as f32,
            ascent: metrics.ascent,
            descent: metrics.descent,
        })
    }

    /// Ascent and descent at a pixel size; font size and pixel dimensions
    /// share the same scale.
    pub fn scaled_metrics(&self, px: f32) -> ScaledMetrics {
        let scale = px / self.units_per_em;
        ScaledMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
        }
    }

    pub(crate) fn database(&self) -> &fontdb::Database {
        &self.db
    }
}
