// Crate-level lints: pixel math mixes signed, unsigned and float coordinates
#![allow(clippy::cast_possible_truncation)] // f32->i32 offsets, u32->u8 alpha
#![allow(clippy::cast_precision_loss)] // u32->f32 in layout calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 for coordinates in display range
#![allow(clippy::cast_sign_loss)] // f32->u32 where the value is clamped non-negative

//! Digit-diff pop animation for embedded-graphics displays.
//!
//! Shows a number changing from `before` to `after`. Digits that both numbers
//! share at the same leading positions stay still; the remaining digits of the
//! old number slide out and fade while the new ones slide in and fade up.
//!
//! ```
//! let d = pop_text::diff(123, 124).unwrap();
//! assert_eq!(d.same.as_str(), "12");
//! assert_eq!(d.before_diff.as_str(), "3");
//! assert_eq!(d.after_diff.as_str(), "4");
//! ```
//!
//! # Modules
//!
//! | Module | Role |
//! |--------|------|
//! | [`digits`] | number validation and positional prefix split |
//! | [`layout`] | measurement, content box, per-frame run positions |
//! | [`animations`] | easing and the single-slot ratio animator |
//! | [`styles`] | fonts and alpha paint |
//! | [`render`] | [`Canvas`] / [`TextMeasure`] host traits and the paint pass |
//! | [`display`] | adapter for any `DrawTarget<Color = Rgb565>` |
//! | [`widget`] | [`PopTextWidget`] tying it all together |
//! | [`input`] | gestures and debounced buttons |
//! | [`config`] | default constants and [`PopConfig`] |
//!
//! # Frame Loop
//!
//! The widget owns no clock and no display. The host supplies `Instant`s to
//! [`Widget::on_gesture`] and [`Widget::on_frame`] and a [`Canvas`] to
//! [`Widget::draw`]. Everything runs on the host's UI thread.

pub mod animations;
pub mod colors;
pub mod config;
pub mod digits;
pub mod display;
pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod styles;
pub mod widget;

pub use animations::{AnimationState, Easing, TickOutcome};
pub use config::{Padding, PopConfig};
pub use digits::{DiffResult, Direction, NumberPair, diff};
pub use error::{NumberRole, PopError};
pub use input::{ButtonState, Gesture};
pub use layout::{Layout, MeasureSpec, TextMetrics};
pub use render::{Canvas, RecordingCanvas, TextMeasure};
pub use styles::TextPaint;
pub use widget::{PopTextWidget, Widget};
