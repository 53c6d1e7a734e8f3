//! Gesture input and button edge detection.
//!
//! The widget reacts to exactly one gesture: a tap being released. Hosts with
//! an event system map their touch/mouse "up" event to [`Gesture::Released`].
//! Hosts that only poll a level (GPIO button, key held, mouse button held)
//! feed it through [`ButtonState`], which turns the level into debounced
//! press/release edges.

use std::time::{Duration, Instant};

/// Debounce window for polled buttons.
pub const DEBOUNCE: Duration = Duration::from_millis(50);

/// Pointer/tap events the widget understands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Gesture {
    /// Finger/button went down. Ignored by the widget.
    Pressed,
    /// Finger/button came up. Triggers the animation.
    Released,
    /// The host took the gesture away (scroll, focus loss). Ignored.
    Cancelled,
}

/// Button debounce state with time-based edge detection.
pub struct ButtonState {
    was_pressed: bool,
    last_change: Option<Instant>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change: None,
        }
    }

    /// Feed the current level. Returns a gesture on an accepted edge.
    ///
    /// Changes within [`DEBOUNCE`] of the previous accepted change are treated
    /// as contact bounce and ignored.
    pub fn update(&mut self, pressed: bool, now: Instant) -> Option<Gesture> {
        if pressed == self.was_pressed {
            return None;
        }

        if let Some(last) = self.last_change
            && now.saturating_duration_since(last) < DEBOUNCE
        {
            return None;
        }

        self.was_pressed = pressed;
        self.last_change = Some(now);

        Some(if pressed { Gesture::Pressed } else { Gesture::Released })
    }

    #[inline]
    pub const fn is_pressed(&self) -> bool { self.was_pressed }
}

impl Default for ButtonState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    #[test]
    fn test_press_release_edges() {
        let t0 = Instant::now();
        let mut button = ButtonState::new();

        assert_eq!(button.update(false, t0), None, "idle level is not an edge");
        assert_eq!(button.update(true, t0), Some(Gesture::Pressed));
        assert_eq!(button.update(true, t0 + ms(100)), None, "held is not an edge");
        assert_eq!(button.update(false, t0 + ms(200)), Some(Gesture::Released));
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_bounce_ignored() {
        let t0 = Instant::now();
        let mut button = ButtonState::new();

        assert_eq!(button.update(true, t0), Some(Gesture::Pressed));
        // Contact bounce within the debounce window
        assert_eq!(button.update(false, t0 + ms(10)), None);
        assert_eq!(button.update(true, t0 + ms(20)), None);
        assert!(button.is_pressed());

        assert_eq!(button.update(false, t0 + ms(80)), Some(Gesture::Released));
    }
}
