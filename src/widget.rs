//! The pop text widget: numbers in, three animated text runs out.
//!
//! # Lifecycle
//!
//! 1. [`PopTextWidget::new`] validates the numbers and splits them into
//!    fragments ([`DiffResult`]).
//! 2. [`Widget::measure`] measures the fragments and picks a size; the
//!    [`Layout`] (including the slide distance) is cached.
//! 3. [`Widget::on_gesture`] with [`Gesture::Released`] starts a run, unless
//!    one of the diff fragments is empty.
//! 4. The host calls [`Widget::on_frame`] every frame and redraws while it
//!    returns something other than [`TickOutcome::Idle`].
//! 5. [`Widget::detach`] tears the widget down; later ticks and gestures do
//!    nothing.
//!
//! # Host Loop
//!
//! ```ignore
//! if widget.on_gesture(Gesture::Released, Instant::now()) { /* started */ }
//! loop {
//!     let outcome = widget.on_frame(Instant::now());
//!     if outcome.needs_redraw() {
//!         widget.draw(&mut canvas);
//!     }
//!     if outcome == TickOutcome::Finished { break; }
//! }
//! ```

use std::time::Instant;

use embedded_graphics::geometry::Size;
use tracing::{debug, trace};

use crate::animations::{AnimationState, PopAnimator, TickOutcome};
use crate::config::PopConfig;
use crate::digits::{DiffResult, NumberPair};
use crate::error::PopError;
use crate::input::Gesture;
use crate::layout::{Layout, MeasureSpec, TextMetrics, content_box, measure};
use crate::render::{Canvas, TextMeasure, draw_pop_text};
use crate::styles::TextPaint;

/// What a host needs from any renderable widget.
pub trait Widget {
    /// Measure content and choose a size for the given constraints.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec, measurer: &dyn TextMeasure) -> Size;

    /// Paint the current frame.
    fn draw(&mut self, canvas: &mut dyn Canvas);

    /// Handle a gesture. Returns `true` if it started an animation.
    fn on_gesture(&mut self, gesture: Gesture, now: Instant) -> bool;

    /// Advance animations to `now`.
    fn on_frame(&mut self, now: Instant) -> TickOutcome;

    /// Tear down: stop animating and ignore further input.
    fn detach(&mut self);
}

/// Animated before/after number display.
pub struct PopTextWidget {
    config: PopConfig,
    pair: NumberPair,
    diff: DiffResult,
    /// Size chosen by the last measure (or set by the host).
    size: Size,
    layout: Option<Layout>,
    animator: PopAnimator,
    attached: bool,
}

impl PopTextWidget {
    /// Build a widget. Fails if either number in `config` is negative.
    pub fn new(config: PopConfig) -> Result<Self, PopError> {
        let pair = NumberPair::new(config.before, config.after)?;
        Ok(Self {
            config,
            pair,
            diff: DiffResult::from_pair(pair),
            size: Size::zero(),
            layout: None,
            animator: PopAnimator::new(config.duration, config.easing),
            attached: true,
        })
    }

    /// Replace the numbers.
    ///
    /// Recomputes the fragments, drops the cached layout, cancels any run and
    /// rewinds the ratio to 0. On error nothing changes.
    pub fn set_numbers(&mut self, before: i64, after: i64) -> Result<(), PopError> {
        let pair = NumberPair::new(before, after)?;
        self.pair = pair;
        self.diff = DiffResult::from_pair(pair);
        self.config.before = before;
        self.config.after = after;
        self.layout = None;
        self.animator.reset();
        debug!(before, after, "numbers updated");
        Ok(())
    }

    #[inline]
    pub const fn numbers(&self) -> NumberPair { self.pair }

    #[inline]
    pub const fn diff(&self) -> &DiffResult { &self.diff }

    #[inline]
    pub const fn config(&self) -> &PopConfig { &self.config }

    #[inline]
    pub fn animation_state(&self) -> AnimationState { self.animator.state() }

    #[inline]
    pub const fn is_animating(&self) -> bool { self.animator.is_running() }

    #[inline]
    pub const fn is_attached(&self) -> bool { self.attached }

    #[inline]
    pub const fn size(&self) -> Size { self.size }

    /// Cached layout from the last measure, if still valid.
    #[inline]
    pub const fn layout(&self) -> Option<&Layout> { self.layout.as_ref() }

    /// Override the size chosen by measure (host layout pass).
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        if let Some(layout) = self.layout {
            self.layout = Some(self.build_layout(layout.metrics));
        }
    }

    /// Start a run at `now` if there is something to animate.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if !self.attached {
            return false;
        }
        if !self.diff.is_animatable() {
            debug!(
                before = self.pair.before(),
                after = self.pair.after(),
                "pop suppressed: a diff fragment is empty"
            );
            return false;
        }

        let restarted = self.animator.start(now);
        debug!(
            before = self.pair.before(),
            after = self.pair.after(),
            restarted,
            "pop animation started"
        );
        true
    }

    fn build_layout(&self, metrics: TextMetrics) -> Layout {
        Layout::new(
            metrics,
            content_box(self.size, self.config.padding),
            self.config.letter_spacing,
            self.config.vertical_spacing,
        )
    }

    fn relayout(&mut self, width: MeasureSpec, height: MeasureSpec, metrics: TextMetrics) -> Layout {
        self.size = measure(width, height, &metrics, self.config.padding, self.config.letter_spacing);
        let layout = self.build_layout(metrics);
        trace!(?layout, "layout rebuilt");
        self.layout = Some(layout);
        layout
    }
}

impl Widget for PopTextWidget {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec, measurer: &dyn TextMeasure) -> Size {
        let metrics = TextMetrics::measure(&self.diff, measurer);
        self.relayout(width, height, metrics);
        self.size
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        if !self.attached {
            return;
        }

        let layout = match self.layout {
            Some(layout) => layout,
            None => {
                // Drawn before any measure pass: size to content
                let metrics = TextMetrics::measure(&self.diff, &*canvas);
                let (width, height) = if self.size == Size::zero() {
                    (MeasureSpec::AtMost(0), MeasureSpec::AtMost(0))
                } else {
                    (MeasureSpec::Exactly(self.size.width), MeasureSpec::Exactly(self.size.height))
                };
                self.relayout(width, height, metrics)
            }
        };

        let base = TextPaint::new(self.config.text_color, self.config.text_alpha);
        draw_pop_text(canvas, self.animator.ratio(), self.pair.direction(), &self.diff, &layout, base);
    }

    fn on_gesture(&mut self, gesture: Gesture, now: Instant) -> bool {
        match gesture {
            Gesture::Released => self.trigger(now),
            Gesture::Pressed | Gesture::Cancelled => false,
        }
    }

    fn on_frame(&mut self, now: Instant) -> TickOutcome {
        if !self.attached {
            return TickOutcome::Idle;
        }

        let outcome = self.animator.tick(now);
        match outcome {
            TickOutcome::Finished => debug!("pop animation finished"),
            TickOutcome::Redraw => trace!(ratio = self.animator.ratio(), "pop tick"),
            TickOutcome::Idle => {}
        }
        outcome
    }

    fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        if self.animator.cancel() {
            debug!(ratio = self.animator.ratio(), "pop animation cancelled on detach");
        }
    }
}
