//! embedded-graphics adapter: any `DrawTarget<Color = Rgb565>` as a [`Canvas`].
//!
//! # Measurement
//!
//! Fragments are measured with the same `MonoTextStyle` used to draw them
//! (`TextRenderer::measure_string` with an alphabetic baseline), so layout
//! and pixels always agree.
//!
//! # Alpha
//!
//! Rgb565 targets cannot blend, so a faded run is drawn in
//! `paint.over(background)`. Runs with alpha 0 are skipped entirely.
//!
//! # Widget Placement
//!
//! [`draw_widget`] clears the widget bounds, clips drawing to them and
//! translates the origin, so the widget paints in its own coordinates and the
//! sliding lines disappear at the widget edge instead of spilling over
//! neighbouring content.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};

use crate::colors::BLACK;
use crate::render::{Canvas, TextMeasure};
use crate::styles::TextPaint;
use crate::widget::Widget;

/// Bounding size of `text` rendered in `font`.
pub fn measure_mono(font: &MonoFont<'_>, text: &str) -> Size {
    if text.is_empty() {
        return Size::zero();
    }
    MonoTextStyle::new(font, BLACK)
        .measure_string(text, Point::zero(), Baseline::Alphabetic)
        .bounding_box
        .size
}

/// Text measurement without a display, for layout passes.
#[derive(Clone, Copy)]
pub struct MonoMeasure<'f> {
    font: &'f MonoFont<'f>,
}

impl<'f> MonoMeasure<'f> {
    pub const fn new(font: &'f MonoFont<'f>) -> Self { Self { font } }
}

impl TextMeasure for MonoMeasure<'_> {
    fn measure_text(&self, text: &str) -> Size { measure_mono(self.font, text) }
}

/// Canvas drawing monospace text onto an Rgb565 target.
pub struct DisplayCanvas<'a, 'f, D> {
    display: &'a mut D,
    font: &'f MonoFont<'f>,
    background: Rgb565,
}

impl<'a, 'f, D> DisplayCanvas<'a, 'f, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(display: &'a mut D, font: &'f MonoFont<'f>, background: Rgb565) -> Self {
        Self {
            display,
            font,
            background,
        }
    }
}

impl<D> TextMeasure for DisplayCanvas<'_, '_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn measure_text(&self, text: &str) -> Size { measure_mono(self.font, text) }
}

impl<D> Canvas for DisplayCanvas<'_, '_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn draw_text(&mut self, text: &str, position: Point, paint: TextPaint) {
        if paint.is_invisible() || text.is_empty() {
            return;
        }
        let style = MonoTextStyle::new(self.font, paint.over(self.background));
        Text::with_baseline(text, position, style, Baseline::Alphabetic)
            .draw(&mut *self.display)
            .ok();
    }
}

/// Paint `widget` into `bounds` of `display`.
///
/// The bounds are filled with `background` first, then the widget draws in
/// coordinates relative to `bounds.top_left`, clipped to `bounds`.
pub fn draw_widget<D, W>(display: &mut D, widget: &mut W, bounds: Rectangle, font: &MonoFont<'_>, background: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
    W: Widget + ?Sized,
{
    bounds
        .into_styled(PrimitiveStyle::with_fill(background))
        .draw(display)
        .ok();

    let mut clipped = display.clipped(&bounds);
    let mut local = clipped.translated(bounds.top_left);
    let mut canvas = DisplayCanvas::new(&mut local, font, background);
    widget.draw(&mut canvas);
}
