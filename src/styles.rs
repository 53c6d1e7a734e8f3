//! Immutable paint records and font selection.
//!
//! # Paint Values Instead of Shared Paint Objects
//!
//! Every draw call builds a fresh [`TextPaint`] (color + alpha) from the
//! current animation ratio. Nothing about a fragment's appearance is stored
//! between frames, so a redraw at any ratio is reproducible on its own.
//!
//! # Fonts
//!
//! The display adapter measures and draws with monospace fonts. ProFont
//! ships in several fixed sizes; [`font_for_height`] picks the largest one
//! that fits a requested pixel height.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use profont::{
    PROFONT_7_POINT,
    PROFONT_9_POINT,
    PROFONT_10_POINT,
    PROFONT_12_POINT,
    PROFONT_14_POINT,
    PROFONT_18_POINT,
    PROFONT_24_POINT,
};

use crate::colors::blend;

// =============================================================================
// Fonts
// =============================================================================

/// All `ProFont` sizes, smallest first.
const PROFONT_SIZES: [&MonoFont; 7] = [
    &PROFONT_7_POINT,
    &PROFONT_9_POINT,
    &PROFONT_10_POINT,
    &PROFONT_12_POINT,
    &PROFONT_14_POINT,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

/// Largest `ProFont` whose glyph cell is at most `px` tall.
///
/// Falls back to the smallest size when nothing fits.
pub fn font_for_height(px: u32) -> &'static MonoFont<'static> {
    PROFONT_SIZES
        .iter()
        .rev()
        .find(|font| font.character_size.height <= px)
        .copied()
        .unwrap_or(PROFONT_SIZES[0])
}

// =============================================================================
// Text Paint
// =============================================================================

/// Convert an animation ratio into an 8-bit alpha: `floor(ratio * 255)`.
///
/// The ratio is clamped to `[0, 1]` first.
#[inline]
pub fn ratio_alpha(ratio: f32) -> u8 { (ratio.clamp(0.0, 1.0) * 255.0) as u8 }

/// Color and opacity for one text run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TextPaint {
    pub color: Rgb565,
    pub alpha: u8,
}

impl TextPaint {
    #[inline]
    pub const fn new(color: Rgb565, alpha: u8) -> Self { Self { color, alpha } }

    /// Paint that fades out as `ratio` goes 0 -> 1.
    ///
    /// With a full `max_alpha` of 255 this is `255 - floor(ratio * 255)`.
    pub fn fading_out(color: Rgb565, max_alpha: u8, ratio: f32) -> Self {
        Self::new(color, scale_alpha(255 - ratio_alpha(ratio), max_alpha))
    }

    /// Paint that fades in as `ratio` goes 0 -> 1.
    ///
    /// With a full `max_alpha` of 255 this is `floor(ratio * 255)`.
    pub fn fading_in(color: Rgb565, max_alpha: u8, ratio: f32) -> Self {
        Self::new(color, scale_alpha(ratio_alpha(ratio), max_alpha))
    }

    /// True when drawing this paint would not change any pixel.
    #[inline]
    pub const fn is_invisible(&self) -> bool { self.alpha == 0 }

    /// Final color once blended over `background`.
    #[inline]
    pub fn over(&self, background: Rgb565) -> Rgb565 { blend(self.color, background, self.alpha) }
}

fn scale_alpha(alpha: u8, max_alpha: u8) -> u8 {
    if max_alpha == u8::MAX {
        return alpha;
    }
    (u16::from(alpha) * u16::from(max_alpha) / 255) as u8
}
