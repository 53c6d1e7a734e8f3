//! Property tests for the digit differ and the widget run.
//!
//! The differ must split any pair of non-negative numbers into a shared
//! positional prefix plus two suffixes that reconstruct the originals, and the
//! widget must finish every run at ratio 1 regardless of frame cadence.

use std::time::{Duration, Instant};

use embedded_graphics::geometry::Size;
use pop_text::{
    Easing,
    Gesture,
    MeasureSpec,
    PopConfig,
    PopError,
    PopTextWidget,
    RecordingCanvas,
    TickOutcome,
    Widget,
    diff,
};
use proptest::prelude::*;

// =============================================================================
// Digit differ
// =============================================================================

proptest! {
    #[test]
    fn prefix_and_suffix_reconstruct_both_numbers(before in 0..=i64::MAX, after in 0..=i64::MAX) {
        let d = diff(before, after).unwrap();
        prop_assert_eq!(format!("{}{}", d.same, d.before_diff), before.to_string());
        prop_assert_eq!(format!("{}{}", d.same, d.after_diff), after.to_string());
    }

    #[test]
    fn same_is_the_longest_positional_prefix(before in 0..=i64::MAX, after in 0..=i64::MAX) {
        let d = diff(before, after).unwrap();
        // Prefix is maximal: the next characters differ, or one side ran out
        if let (Some(b), Some(a)) = (d.before_diff.chars().next(), d.after_diff.chars().next()) {
            prop_assert_ne!(b, a);
        }
    }

    #[test]
    fn equal_numbers_have_nothing_to_animate(n in 0..=i64::MAX) {
        let d = diff(n, n).unwrap();
        prop_assert_eq!(d.same.as_str(), n.to_string());
        prop_assert!(d.before_diff.is_empty());
        prop_assert!(d.after_diff.is_empty());
        prop_assert!(!d.is_animatable());
    }

    #[test]
    fn negative_numbers_are_rejected(neg in i64::MIN..0, other in 0..=i64::MAX) {
        let before_err = matches!(diff(neg, other), Err(PopError::InvalidArgument { .. }));
        let after_err = matches!(diff(other, neg), Err(PopError::InvalidArgument { .. }));
        prop_assert!(before_err);
        prop_assert!(after_err);
    }

    #[test]
    fn nonempty_diffs_are_animatable(before in 0..=i64::MAX, after in 0..=i64::MAX) {
        let d = diff(before, after).unwrap();
        prop_assert_eq!(d.is_animatable(), !d.before_diff.is_empty() && !d.after_diff.is_empty());
    }
}

// =============================================================================
// Widget run
// =============================================================================

proptest! {
    #[test]
    fn every_run_finishes_at_full_ratio(frame_ms in 1u64..=100, linear in any::<bool>()) {
        let easing = if linear { Easing::Linear } else { Easing::AccelerateDecelerate };
        let config = PopConfig::new().with_numbers(123, 124).with_easing(easing);
        let mut widget = PopTextWidget::new(config).unwrap();
        let mut canvas = RecordingCanvas::monospace(Size::new(10, 20));
        widget.measure(MeasureSpec::AtMost(0), MeasureSpec::AtMost(0), &canvas);

        let t0 = Instant::now();
        prop_assert!(widget.on_gesture(Gesture::Released, t0));

        let mut now = t0;
        let mut last_ratio = 0.0f32;
        let mut finished = false;
        for _ in 0..2_000 {
            now += Duration::from_millis(frame_ms);
            let outcome = widget.on_frame(now);
            let ratio = widget.animation_state().ratio;
            prop_assert!((0.0..=1.0).contains(&ratio));
            prop_assert!(ratio >= last_ratio, "ratio went backwards: {} -> {}", last_ratio, ratio);
            last_ratio = ratio;
            if outcome == TickOutcome::Finished {
                finished = true;
                break;
            }
        }

        prop_assert!(finished);
        prop_assert!(now.duration_since(t0) >= Duration::from_millis(1000));
        prop_assert!(now.duration_since(t0) < Duration::from_millis(1000 + frame_ms));

        widget.draw(&mut canvas);
        let (_, _, after) = canvas.call_for("4").unwrap();
        prop_assert_eq!(after.alpha, 255, "after diff fully opaque at the end");
        let (_, _, before) = canvas.call_for("3").unwrap();
        prop_assert_eq!(before.alpha, 0, "before diff fully faded at the end");
    }
}
