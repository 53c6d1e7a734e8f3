//! Color constants and alpha blending for Rgb565 displays.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! # Emulated Alpha
//!
//! Rgb565 has no alpha channel, so a faded glyph is drawn in a color
//! interpolated between the text color and the background it sits on:
//!
//! ```text
//! out = bg + (fg - bg) * alpha / 255     (per channel)
//! ```
//!
//! At alpha 255 the text color is returned unchanged and at alpha 0 the
//! background color is returned unchanged.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

/// Pure black (0, 0, 0). Default text color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Default background.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Split an Rgb565 value into its raw (r, g, b) channels.
#[inline]
fn channels(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        ((raw >> 11) & 0x1F) as i32,
        ((raw >> 5) & 0x3F) as i32,
        (raw & 0x1F) as i32,
    )
}

/// Blend `fg` over `bg` with an 8-bit alpha.
///
/// Integer math with rounding to nearest, so the end points are exact.
pub fn blend(fg: Rgb565, bg: Rgb565, alpha: u8) -> Rgb565 {
    match alpha {
        0 => return bg,
        255 => return fg,
        _ => {}
    }

    let (fr, fg_g, fb) = channels(fg);
    let (br, bg_g, bb) = channels(bg);
    let a = i32::from(alpha);

    // Rounded (delta * a) / 255, symmetric for negative deltas
    let mix = |from: i32, to: i32| -> i32 {
        let scaled = (to - from) * a;
        let step = if scaled >= 0 { (scaled + 127) / 255 } else { (scaled - 127) / 255 };
        from + step
    };

    let r = mix(br, fr).clamp(0, 31) as u8;
    let g = mix(bg_g, fg_g).clamp(0, 63) as u8;
    let b = mix(bb, fb).clamp(0, 31) as u8;

    Rgb565::new(r, g, b)
}
