//! Measurement and fragment placement.
//!
//! # Visual Layout
//!
//! ```text
//!  padding.left
//!  |   same.width   letter   diff block
//!  v<------------>|<------>|<--------->
//!  +-----------------------------------+
//!  |                        4          |  <- after line (increasing), resting at y0 + distance
//!  |  1 2                   3          |  <- y0: before line baseline
//!  |                                   |
//!  +-----------------------------------+
//! ```
//!
//! `distance = before.height + vertical_spacing` is fixed when the layout is
//! built. While the ratio runs 0 -> 1 both diff lines move by
//! `floor(distance * ratio)`: up when the value increases, down when it
//! decreases. For a decreasing value the after line rests one line *above*
//! the before line instead of below it.
//!
//! # Baselines
//!
//! Positions are text baselines. A fragment of height `h` is vertically
//! centred in the content box with `y = top + (content.height + h) / 2`, the
//! prefix using its own height and both diff lines using the before diff's
//! height.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::config::Padding;
use crate::digits::{DiffResult, Direction};
use crate::render::TextMeasure;
use crate::styles::TextPaint;

// =============================================================================
// Measure Specs
// =============================================================================

/// Size constraint handed down by the host for one axis.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MeasureSpec {
    /// The host fixes the size.
    Exactly(u32),
    /// The widget sizes itself to its content. The available size is
    /// informational; the content size is used even if it is larger.
    AtMost(u32),
}

impl MeasureSpec {
    /// True when the host fixes the size on this axis.
    #[inline]
    pub const fn is_bounded(self) -> bool { matches!(self, Self::Exactly(_)) }

    /// Pick the final size for this axis given the content's wanted size.
    #[inline]
    pub const fn resolve(self, wanted: u32) -> u32 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost(_) => wanted,
        }
    }
}

// =============================================================================
// Text Metrics
// =============================================================================

/// Measured bounds of the three fragments. Empty fragments are zero-sized.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TextMetrics {
    pub same: Size,
    pub before_diff: Size,
    pub after_diff: Size,
}

impl TextMetrics {
    /// Measure all three fragments of `diff`.
    pub fn measure<M>(diff: &DiffResult, measurer: &M) -> Self
    where
        M: TextMeasure + ?Sized,
    {
        Self {
            same: measure_fragment(measurer, &diff.same),
            before_diff: measure_fragment(measurer, &diff.before_diff),
            after_diff: measure_fragment(measurer, &diff.after_diff),
        }
    }

    /// Width of the wider diff fragment.
    #[inline]
    pub fn diff_width(&self) -> u32 { self.before_diff.width.max(self.after_diff.width) }

    /// Height of the tallest fragment.
    #[inline]
    pub fn max_height(&self) -> u32 { self.same.height.max(self.before_diff.height).max(self.after_diff.height) }
}

fn measure_fragment<M>(measurer: &M, text: &str) -> Size
where
    M: TextMeasure + ?Sized,
{
    if text.is_empty() {
        Size::zero()
    } else {
        measurer.measure_text(text)
    }
}

/// Resolve the widget size for the given constraints.
///
/// Self-sized width is `padding + same.width`, plus
/// `letter_spacing + diff_width` when there is any diff to show. Self-sized
/// height is `padding + max_height`.
pub fn measure(
    width: MeasureSpec,
    height: MeasureSpec,
    metrics: &TextMetrics,
    padding: Padding,
    letter_spacing: u32,
) -> Size {
    let diff_width = metrics.diff_width();
    let diff_block = if diff_width > 0 { letter_spacing + diff_width } else { 0 };
    let wanted_width = padding.horizontal() + metrics.same.width + diff_block;
    let wanted_height = padding.vertical() + metrics.max_height();

    Size::new(width.resolve(wanted_width), height.resolve(wanted_height))
}

/// Drawable area of a widget of `size`: its bounds minus padding.
pub fn content_box(size: Size, padding: Padding) -> Rectangle {
    Rectangle::new(
        Point::new(padding.left as i32, padding.top as i32),
        Size::new(
            size.width.saturating_sub(padding.horizontal()),
            size.height.saturating_sub(padding.vertical()),
        ),
    )
}

// =============================================================================
// Layout
// =============================================================================

/// One text fragment ready to draw.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TextRun<'a> {
    pub text: &'a str,
    /// Baseline start.
    pub position: Point,
    pub paint: TextPaint,
}

/// Cached placement data, rebuilt whenever metrics or the content box change.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Layout {
    pub metrics: TextMetrics,
    pub content: Rectangle,
    pub letter_spacing: u32,
    /// Travel of each diff line over a full run.
    pub distance: u32,
}

impl Layout {
    pub fn new(metrics: TextMetrics, content: Rectangle, letter_spacing: u32, vertical_spacing: u32) -> Self {
        Self {
            metrics,
            content,
            letter_spacing,
            distance: metrics.before_diff.height + vertical_spacing,
        }
    }

    /// Baseline y for a fragment of `height`, centred in the content box.
    #[inline]
    fn centred_baseline(&self, height: u32) -> i32 {
        self.content.top_left.y + (self.content.size.height as i32 + height as i32) / 2
    }

    /// Baseline start of the static prefix.
    pub fn same_origin(&self) -> Point {
        Point::new(self.content.top_left.x, self.centred_baseline(self.metrics.same.height))
    }

    /// Baseline start of the before line at rest.
    pub fn diff_origin(&self) -> Point {
        Point::new(
            self.content.top_left.x + self.metrics.same.width as i32 + self.letter_spacing as i32,
            self.centred_baseline(self.metrics.before_diff.height),
        )
    }

    /// Pixels both diff lines have moved at `ratio`: `floor(distance * ratio)`.
    #[inline]
    pub fn offset(&self, ratio: f32) -> i32 { (self.distance as f32 * ratio.clamp(0.0, 1.0)) as i32 }

    /// Place the non-empty fragments for `ratio`.
    ///
    /// `base` is the fully visible paint; the diff lines fade relative to it.
    pub fn runs<'a>(&self, diff: &'a DiffResult, direction: Direction, ratio: f32, base: TextPaint) -> Vec<TextRun<'a>, 3> {
        let mut runs = Vec::new();

        if !diff.same.is_empty() {
            let _ = runs.push(TextRun {
                text: diff.same.as_str(),
                position: self.same_origin(),
                paint: base,
            });
        }

        // Sign of the slide and which side the after line rests on
        let step = match direction {
            Direction::Increasing => -1,
            Direction::Decreasing => 1,
            Direction::Unchanged => return runs,
        };

        let origin = self.diff_origin();
        let offset = self.offset(ratio) * step;
        let after_rest = Point::new(origin.x, origin.y - self.distance as i32 * step);

        if !diff.before_diff.is_empty() {
            let _ = runs.push(TextRun {
                text: diff.before_diff.as_str(),
                position: origin + Point::new(0, offset),
                paint: TextPaint::fading_out(base.color, base.alpha, ratio),
            });
        }
        if !diff.after_diff.is_empty() {
            let _ = runs.push(TextRun {
                text: diff.after_diff.as_str(),
                position: after_rest + Point::new(0, offset),
                paint: TextPaint::fading_in(base.color, base.alpha, ratio),
            });
        }

        runs
    }
}
