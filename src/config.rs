//! Widget configuration constants and the [`PopConfig`] record.
//!
//! Spacing values are expressed in scaled units and converted to pixels with a
//! display density factor, the same way a platform converts `sp` to pixels:
//! `px = round(sp * density)`.
//!
//! The constants below are the defaults. They are injected into the widget
//! through [`PopConfig`] rather than read as globals, so two widgets on the
//! same display can use different spacing or timing.

use core::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;

use crate::animations::Easing;
use crate::colors::{BLACK, WHITE};

// =============================================================================
// Spacing Configuration (scaled units)
// =============================================================================

/// Gap between the static prefix and the animated digits.
pub const LETTER_SPACING_SP: u32 = 4;

/// Gap between the before line and the after line while they slide.
pub const VERTICAL_SPACING_SP: u32 = 10;

/// Nominal text size. Used by the display adapter to pick a font.
pub const TEXT_SIZE_SP: u32 = 20;

// =============================================================================
// Color Configuration
// =============================================================================

/// Text color for all three fragments.
pub const TEXT_COLOR: Rgb565 = BLACK;

/// Opacity of fully visible text.
pub const TEXT_ALPHA: u8 = 255;

/// Color the adapter blends faded text against.
pub const BACKGROUND_COLOR: Rgb565 = WHITE;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Length of one pop animation run.
pub const POP_DURATION: Duration = Duration::from_millis(1000);

/// Target frame time for the demo renderer (~50 FPS).
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Convert scaled units to pixels for a display density.
#[inline]
pub fn sp_to_px(sp: u32, density: f32) -> u32 { (sp as f32 * density + 0.5) as u32 }

/// Inner spacing between the widget bounds and its content box.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    /// Same padding on all four sides.
    pub const fn uniform(px: u32) -> Self {
        Self {
            left: px,
            top: px,
            right: px,
            bottom: px,
        }
    }

    /// `left + right`
    #[inline]
    pub const fn horizontal(&self) -> u32 { self.left + self.right }

    /// `top + bottom`
    #[inline]
    pub const fn vertical(&self) -> u32 { self.top + self.bottom }
}

/// Everything a [`PopTextWidget`](crate::PopTextWidget) needs at construction.
///
/// Numbers are taken as signed so that negative input from a host (attribute
/// parsing, user entry) reaches the widget and is rejected there with
/// [`PopError::InvalidArgument`](crate::PopError::InvalidArgument).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PopConfig {
    /// Value shown before the animation.
    pub before: i64,
    /// Value shown after the animation.
    pub after: i64,
    pub padding: Padding,
    /// Pixels between the prefix and the diff block.
    pub letter_spacing: u32,
    /// Pixels between the before and after lines.
    pub vertical_spacing: u32,
    pub text_color: Rgb565,
    pub text_alpha: u8,
    /// Length of one animation run.
    pub duration: Duration,
    pub easing: Easing,
}

impl PopConfig {
    /// Default configuration at density 1.0 with both numbers set to zero.
    pub fn new() -> Self { Self::scaled(1.0) }

    /// Default configuration with spacing converted for `density`.
    pub fn scaled(density: f32) -> Self {
        Self {
            before: 0,
            after: 0,
            padding: Padding::default(),
            letter_spacing: sp_to_px(LETTER_SPACING_SP, density),
            vertical_spacing: sp_to_px(VERTICAL_SPACING_SP, density),
            text_color: TEXT_COLOR,
            text_alpha: TEXT_ALPHA,
            duration: POP_DURATION,
            easing: Easing::default(),
        }
    }

    /// Set the before/after numbers.
    #[must_use]
    pub const fn with_numbers(mut self, before: i64, after: i64) -> Self {
        self.before = before;
        self.after = after;
        self
    }

    #[must_use]
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for PopConfig {
    fn default() -> Self { Self::new() }
}
