//! Host drawing interfaces and the paint pass.
//!
//! The widget never owns a display. The host hands it a [`Canvas`] for each
//! draw, and the canvas also answers text measurement so layout and paint
//! always agree on glyph sizes.
//!
//! # Paint Pass
//!
//! [`draw_pop_text`] turns the cached [`Layout`] and the current ratio into at
//! most three [`TextRun`]s and forwards each one to the canvas:
//!
//! | Run | Alpha | Vertical offset |
//! |-----|-------|-----------------|
//! | same prefix | full | none |
//! | before diff | `255 - floor(ratio * 255)` | slides out by `floor(distance * ratio)` |
//! | after diff | `floor(ratio * 255)` | slides in by `floor(distance * ratio)` |
//!
//! Empty fragments are skipped. When the numbers are equal only the prefix
//! is emitted.

use embedded_graphics::geometry::{Point, Size};

use crate::digits::{DiffResult, Direction};
use crate::layout::{Layout, TextRun};
use crate::styles::TextPaint;

/// Text measurement supplied by the rendering surface.
pub trait TextMeasure {
    /// Bounding size of `text` in the current font.
    ///
    /// Returning `Size::zero()` is always acceptable; the fragment is then
    /// laid out as empty.
    fn measure_text(&self, text: &str) -> Size;
}

/// A drawing surface that can place text runs.
pub trait Canvas: TextMeasure {
    /// Draw `text` with its baseline starting at `position`.
    fn draw_text(&mut self, text: &str, position: Point, paint: TextPaint);
}

/// Emit the draw calls for one frame. Returns how many runs were drawn.
pub fn draw_pop_text<C>(
    canvas: &mut C,
    ratio: f32,
    direction: Direction,
    diff: &DiffResult,
    layout: &Layout,
    base: TextPaint,
) -> usize
where
    C: Canvas + ?Sized,
{
    let runs = layout.runs(diff, direction, ratio, base);
    for run in &runs {
        canvas.draw_text(run.text, run.position, run.paint);
    }
    runs.len()
}

/// Draw runs into a plain list. Used by tests and by hosts that batch.
#[derive(Default, Debug)]
pub struct RecordingCanvas {
    /// Fixed advance per character, in pixels.
    pub char_size: Size,
    /// Every run drawn so far, in order.
    pub calls: Vec<(String, Point, TextPaint)>,
}

impl RecordingCanvas {
    /// Canvas that measures every character as `char_size`.
    pub const fn monospace(char_size: Size) -> Self {
        Self {
            char_size,
            calls: Vec::new(),
        }
    }

    /// Find the recorded run for `text`.
    pub fn call_for(&self, text: &str) -> Option<&(String, Point, TextPaint)> {
        self.calls.iter().find(|(t, _, _)| t == text)
    }
}

impl TextMeasure for RecordingCanvas {
    fn measure_text(&self, text: &str) -> Size {
        if text.is_empty() {
            return Size::zero();
        }
        Size::new(self.char_size.width * text.chars().count() as u32, self.char_size.height)
    }
}

impl Canvas for RecordingCanvas {
    fn draw_text(&mut self, text: &str, position: Point, paint: TextPaint) {
        self.calls.push((text.to_owned(), position, paint));
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::colors::BLACK;
    use crate::digits::diff;
    use crate::layout::TextMetrics;

    const CHAR: Size = Size::new(10, 20);

    fn layout_for(d: &DiffResult, canvas: &RecordingCanvas) -> Layout {
        let metrics = TextMetrics::measure(d, canvas);
        Layout::new(metrics, Rectangle::new(Point::zero(), Size::new(100, 40)), 4, 10)
    }

    #[test]
    fn test_draw_emits_three_runs() {
        let d = diff(123, 124).unwrap();
        let mut canvas = RecordingCanvas::monospace(CHAR);
        let layout = layout_for(&d, &canvas);

        let drawn = draw_pop_text(&mut canvas, 0.0, Direction::Increasing, &d, &layout, TextPaint::new(BLACK, 255));

        assert_eq!(drawn, 3);
        let texts: Vec<&str> = canvas.calls.iter().map(|(t, _, _)| t.as_str()).collect();
        assert_eq!(texts, ["12", "3", "4"]);
    }

    #[test]
    fn test_draw_equal_numbers_only_prefix() {
        let d = diff(77, 77).unwrap();
        let mut canvas = RecordingCanvas::monospace(CHAR);
        let layout = layout_for(&d, &canvas);

        let drawn = draw_pop_text(&mut canvas, 0.5, Direction::Unchanged, &d, &layout, TextPaint::new(BLACK, 255));

        assert_eq!(drawn, 1);
        let (_, _, paint) = canvas.call_for("77").unwrap();
        assert_eq!(paint.alpha, 255, "prefix is always opaque");
    }

    #[test]
    fn test_draw_skips_empty_fragments() {
        let d = diff(5, 50).unwrap();
        let mut canvas = RecordingCanvas::monospace(CHAR);
        let layout = layout_for(&d, &canvas);

        let drawn = draw_pop_text(&mut canvas, 0.0, Direction::Increasing, &d, &layout, TextPaint::new(BLACK, 255));

        assert_eq!(drawn, 2, "empty before diff is not drawn");
        assert!(canvas.call_for("").is_none());
    }

    #[test]
    fn test_recording_canvas_measure() {
        let canvas = RecordingCanvas::monospace(CHAR);
        assert_eq!(canvas.measure_text(""), Size::zero());
        assert_eq!(canvas.measure_text("123"), Size::new(30, 20));
    }
}
