//! Digit differ: splits two numbers into a shared prefix and two suffixes.
//!
//! The widget only animates the digits that change. For `1299 -> 1300` the
//! static part is `"1"` and the animated parts are `"299"` and `"300"`.
//!
//! # Matching Rule
//!
//! Matching is positional on the decimal strings, left to right, and stops at
//! the first mismatch or when either string ends. It is *not* aligned by digit
//! place: `9 -> 10` shares nothing (`'9' != '1'`), while `10 -> 100` shares
//! `"10"`.
//!
//! ```text
//!   before: 1 2 3        same = "12"
//!   after:  1 2 4        before_diff = "3", after_diff = "4"
//!           ^ ^ x
//! ```
//!
//! # Heapless Strings
//!
//! Fragments live in `heapless::String<DIGITS_CAPACITY>`. A non-negative `i64`
//! has at most 19 decimal digits, so every fragment always fits.

use core::cmp::Ordering;
use core::fmt::Write;

use heapless::String;

use crate::error::{NumberRole, PopError};

/// Capacity of a digit fragment buffer (`i64::MAX` has 19 digits).
pub const DIGITS_CAPACITY: usize = 20;

/// Fixed-capacity buffer holding decimal digits.
pub type DigitText = String<DIGITS_CAPACITY>;

/// Direction of the value change, which decides the slide direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    /// `after > before`: fragments slide up.
    Increasing,
    /// `after < before`: fragments slide down.
    Decreasing,
    /// Nothing to animate.
    Unchanged,
}

/// The validated before/after pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NumberPair {
    before: u64,
    after: u64,
}

impl NumberPair {
    /// Validate and build a pair. Fails if either value is negative.
    pub fn new(before: i64, after: i64) -> Result<Self, PopError> {
        Ok(Self {
            before: non_negative(NumberRole::Before, before)?,
            after: non_negative(NumberRole::After, after)?,
        })
    }

    #[inline]
    pub const fn before(&self) -> u64 { self.before }

    #[inline]
    pub const fn after(&self) -> u64 { self.after }

    /// Numeric comparison of the pair.
    pub fn direction(&self) -> Direction {
        match self.after.cmp(&self.before) {
            Ordering::Greater => Direction::Increasing,
            Ordering::Less => Direction::Decreasing,
            Ordering::Equal => Direction::Unchanged,
        }
    }
}

fn non_negative(role: NumberRole, value: i64) -> Result<u64, PopError> {
    u64::try_from(value).map_err(|_| PopError::InvalidArgument { role, value })
}

/// The three text fragments derived from a [`NumberPair`].
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DiffResult {
    /// Common left-aligned prefix, drawn static.
    pub same: DigitText,
    /// Remainder of the before value, animated out.
    pub before_diff: DigitText,
    /// Remainder of the after value, animated in.
    pub after_diff: DigitText,
}

impl DiffResult {
    /// Split an already validated pair.
    pub fn from_pair(pair: NumberPair) -> Self {
        let before = decimal(pair.before());
        let after = decimal(pair.after());

        // Digits are ASCII, so byte positions are character positions
        let shared = before
            .bytes()
            .zip(after.bytes())
            .take_while(|(b, a)| b == a)
            .count();

        Self {
            same: fragment(&before[..shared]),
            before_diff: fragment(&before[shared..]),
            after_diff: fragment(&after[shared..]),
        }
    }

    /// True when both diff fragments have something to slide.
    #[inline]
    pub fn is_animatable(&self) -> bool { !self.before_diff.is_empty() && !self.after_diff.is_empty() }
}

/// Compute the shared prefix and differing suffixes of two numbers.
///
/// Fails with [`PopError::InvalidArgument`] if either number is negative.
///
/// # Example
/// ```
/// let d = pop_text::diff(123, 124).unwrap();
/// assert_eq!((d.same.as_str(), d.before_diff.as_str(), d.after_diff.as_str()), ("12", "3", "4"));
/// ```
pub fn diff(before: i64, after: i64) -> Result<DiffResult, PopError> {
    NumberPair::new(before, after).map(DiffResult::from_pair)
}

/// Decimal representation without sign or leading zeros.
pub fn decimal(value: u64) -> DigitText {
    let mut text = DigitText::new();
    let _ = write!(text, "{value}");
    text
}

fn fragment(digits: &str) -> DigitText {
    let mut text = DigitText::new();
    let _ = text.push_str(digits);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(d: &DiffResult) -> (&str, &str, &str) { (d.same.as_str(), d.before_diff.as_str(), d.after_diff.as_str()) }

    #[test]
    fn test_diff_last_digit() {
        let d = diff(123, 124).unwrap();
        assert_eq!(parts(&d), ("12", "3", "4"));
    }

    #[test]
    fn test_diff_first_digit_mismatch() {
        // '9' vs '1' differ at position 0, even though 100 has an extra digit
        let d = diff(99, 100).unwrap();
        assert_eq!(parts(&d), ("", "99", "100"));
    }

    #[test]
    fn test_diff_prefix_number() {
        let d = diff(5, 50).unwrap();
        assert_eq!(parts(&d), ("5", "", "0"));

        let d = diff(100, 10).unwrap();
        assert_eq!(parts(&d), ("10", "0", ""));
    }

    #[test]
    fn test_diff_equal_numbers() {
        for n in [0, 7, 42, 1000, i64::MAX] {
            let d = diff(n, n).unwrap();
            assert_eq!(d.same.as_str(), decimal(n as u64).as_str(), "same should be the whole number for {n}");
            assert!(d.before_diff.is_empty(), "before diff should be empty for {n}");
            assert!(d.after_diff.is_empty(), "after diff should be empty for {n}");
        }
    }

    #[test]
    fn test_diff_positional_not_place_aligned() {
        // 9 -> 10: no shared prefix, digit places are not aligned from the right
        let d = diff(9, 10).unwrap();
        assert_eq!(parts(&d), ("", "9", "10"));

        // 10 -> 100 shares the first two characters
        let d = diff(10, 100).unwrap();
        assert_eq!(parts(&d), ("10", "", "0"));
    }

    #[test]
    fn test_diff_zero() {
        let d = diff(0, 1).unwrap();
        assert_eq!(parts(&d), ("", "0", "1"));
    }

    #[test]
    fn test_diff_max_value_fits() {
        let d = diff(i64::MAX, i64::MAX - 1).unwrap();
        assert_eq!(d.same.as_str(), "922337203685477580");
        assert_eq!(d.before_diff.as_str(), "7");
        assert_eq!(d.after_diff.as_str(), "6");
    }

    #[test]
    fn test_diff_negative_before() {
        let err = diff(-1, 5).unwrap_err();
        assert_eq!(
            err,
            PopError::InvalidArgument {
                role: NumberRole::Before,
                value: -1
            }
        );
    }

    #[test]
    fn test_diff_negative_after() {
        let err = diff(5, -1).unwrap_err();
        assert_eq!(
            err,
            PopError::InvalidArgument {
                role: NumberRole::After,
                value: -1
            }
        );
    }

    #[test]
    fn test_direction() {
        assert_eq!(NumberPair::new(1, 2).unwrap().direction(), Direction::Increasing);
        assert_eq!(NumberPair::new(2, 1).unwrap().direction(), Direction::Decreasing);
        assert_eq!(NumberPair::new(3, 3).unwrap().direction(), Direction::Unchanged);
    }

    #[test]
    fn test_is_animatable() {
        assert!(diff(123, 124).unwrap().is_animatable());
        assert!(!diff(5, 50).unwrap().is_animatable(), "empty before diff");
        assert!(!diff(50, 5).unwrap().is_animatable(), "empty after diff");
        assert!(!diff(8, 8).unwrap().is_animatable(), "equal numbers");
    }
}
