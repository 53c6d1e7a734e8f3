//! Error type for widget configuration.
//!
//! Only construction can fail: both numbers must be non-negative. Measurement,
//! drawing and ticking never fail once the widget exists.

use core::fmt;

/// Which side of the number pair a value belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NumberRole {
    /// The value shown before the animation runs.
    Before,
    /// The value shown after the animation completes.
    After,
}

impl fmt::Display for NumberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => f.write_str("before"),
            Self::After => f.write_str("after"),
        }
    }
}

/// Errors raised while configuring a [`PopTextWidget`](crate::PopTextWidget).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PopError {
    /// One of the numbers is negative.
    #[error("{role} number must be non-negative, got {value}")]
    InvalidArgument { role: NumberRole, value: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = PopError::InvalidArgument {
            role: NumberRole::After,
            value: -7,
        };
        assert_eq!(err.to_string(), "after number must be non-negative, got -7");
    }
}
