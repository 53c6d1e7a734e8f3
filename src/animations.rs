//! Time-based pop animation: ratio interpolation and the Idle/Running state.
//!
//! # Ratio
//!
//! One run advances a ratio from 0 to 1 over a fixed wall-clock duration:
//!
//! ```text
//! t     = clamp(elapsed / duration, 0, 1)
//! ratio = easing(t)
//! ```
//!
//! The host decides the frame cadence. Because the ratio is derived from
//! elapsed time, a 30 FPS host and a 144 FPS host finish on the same tick
//! boundary: the first tick at or after `start + duration`.
//!
//! # State Machine
//!
//! ```text
//!          start()                 tick() at t >= 1
//!   Idle ----------> Running ---------------------> Idle (ratio holds at 1)
//!    ^                  |  start() again: restart from ratio 0
//!    +------------------+  cancel(): drop the run, ratio stays where it was
//! ```
//!
//! There is a single run slot. Triggering while Running restarts the run
//! instead of stacking a second one.
//!
//! # FPS Independence
//!
//! Uses `std::time::Instant` supplied by the caller, so tests can drive the
//! clock deterministically and hosts can pass their own frame timestamp.

use core::f32::consts::PI;
use std::time::{Duration, Instant};

// =============================================================================
// Easing
// =============================================================================

/// Shape of the ratio curve over one run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Easing {
    /// `ratio = t`
    Linear,
    /// Slow start and end: `cos((t + 1) * PI) / 2 + 0.5`.
    ///
    /// This is what a platform value animator applies when no interpolator is
    /// set, so it is the default.
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Map linear progress `t` to a ratio. Both end points are exact.
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => (((t + 1.0) * PI).cos() / 2.0 + 0.5).clamp(0.0, 1.0),
        }
    }
}

// =============================================================================
// Single Run
// =============================================================================

/// One animation run, alive from trigger until completion or cancel.
#[derive(Clone, Copy, Debug)]
pub struct PopAnimation {
    started_at: Instant,
    duration: Duration,
    easing: Easing,
    /// Highest ratio handed out so far (keeps the ratio monotonic).
    ratio: f32,
}

impl PopAnimation {
    pub const fn start(now: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            started_at: now,
            duration,
            easing,
            ratio: 0.0,
        }
    }

    /// Linear progress in `[0, 1]` at `now`.
    ///
    /// A zero duration is complete immediately. A clock that reads earlier
    /// than the start counts as no progress.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Advance to `now`. Returns the new ratio and whether the run is over.
    pub fn advance(&mut self, now: Instant) -> (f32, bool) {
        let t = self.progress(now);
        let finished = t >= 1.0 || now.saturating_duration_since(self.started_at) >= self.duration;
        let eased = if finished { 1.0 } else { self.easing.apply(t) };
        self.ratio = self.ratio.max(eased);
        (self.ratio, finished)
    }

    #[inline]
    pub const fn started_at(&self) -> Instant { self.started_at }
}

// =============================================================================
// Animator (Idle / Running)
// =============================================================================

/// Snapshot of the animation as seen by the widget.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AnimationState {
    /// Current ratio in `[0, 1]`.
    pub ratio: f32,
    /// True while a run is in progress.
    pub running: bool,
}

/// What the host should do after a tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// No run active; nothing changed.
    Idle,
    /// Ratio advanced; redraw and keep ticking.
    Redraw,
    /// Final ratio reached; redraw once more, then stop ticking.
    Finished,
}

impl TickOutcome {
    #[inline]
    pub const fn needs_redraw(self) -> bool { !matches!(self, Self::Idle) }
}

/// Owns the ratio and at most one running [`PopAnimation`].
#[derive(Clone, Debug)]
pub struct PopAnimator {
    duration: Duration,
    easing: Easing,
    ratio: f32,
    run: Option<PopAnimation>,
}

impl PopAnimator {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            ratio: 0.0,
            run: None,
        }
    }

    pub fn state(&self) -> AnimationState {
        AnimationState {
            ratio: self.ratio,
            running: self.run.is_some(),
        }
    }

    #[inline]
    pub const fn ratio(&self) -> f32 { self.ratio }

    #[inline]
    pub const fn is_running(&self) -> bool { self.run.is_some() }

    #[inline]
    pub const fn duration(&self) -> Duration { self.duration }

    /// Begin a run at `now`. A run already in progress is replaced.
    ///
    /// Returns `true` if a previous run was restarted.
    pub fn start(&mut self, now: Instant) -> bool {
        let restarted = self.run.is_some();
        self.run = Some(PopAnimation::start(now, self.duration, self.easing));
        self.ratio = 0.0;
        restarted
    }

    /// Advance the active run, if any.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let Some(run) = self.run.as_mut() else {
            return TickOutcome::Idle;
        };

        let (ratio, finished) = run.advance(now);
        self.ratio = ratio;

        if finished {
            self.run = None;
            TickOutcome::Finished
        } else {
            TickOutcome::Redraw
        }
    }

    /// Drop the active run. The ratio stays where the run left it.
    ///
    /// Returns `true` if a run was cancelled.
    pub fn cancel(&mut self) -> bool { self.run.take().is_some() }

    /// Cancel and rewind to ratio 0 (used when the numbers change).
    pub fn reset(&mut self) {
        self.run = None;
        self.ratio = 0.0;
    }
}
