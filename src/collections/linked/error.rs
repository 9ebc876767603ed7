//! Error types for the linked collections.
//!
//! Each failure is a small struct implementing [`Error`]. Operations that can fail in more than one
//! way return an enum over those structs instead, so that callers can match on (or convert into)
//! the specific failure without any dynamic dispatch.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A search by value reached the end of the list (or wrapped around a ring) without a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueNotFound;

impl Display for ValueNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Target value not found in the list!")
    }
}

impl Error for ValueNotFound {}

/// An operation needs the list to hold at least `required` elements, but it only holds `len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooShort {
    pub required: usize,
    pub len: usize,
}

impl Display for TooShort {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Operation requires at least {} elements, but the list has {}!",
            self.required, self.len
        )
    }
}

impl Error for TooShort {}

/// An operation that works relative to the head was invoked on a list with no head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyList;

impl Display for EmptyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a non-empty list!")
    }
}

impl Error for EmptyList {}

#[derive(Debug)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The ways that removing a value from a
/// [`CircularList`](crate::collections::linked::CircularList) can fail. A ring always holds at
/// least one node, so removing the only remaining node is rejected rather than performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum RingRemovalError {
    ValueNotFound(ValueNotFound),
    TooShort(TooShort),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ValueNotFound.to_string(), "Target value not found in the list!");
        assert_eq!(
            TooShort { required: 2, len: 1 }.to_string(),
            "Operation requires at least 2 elements, but the list has 1!"
        );
        assert_eq!(EmptyList.to_string(), "Operation requires a non-empty list!");
        assert_eq!(
            RingRemovalError::from(ValueNotFound).to_string(),
            ValueNotFound.to_string(),
            "The removal error should display the error it wraps."
        );
    }

    #[test]
    fn test_removal_error_conversions() {
        let err = RingRemovalError::from(TooShort { required: 2, len: 1 });
        assert!(err.is_too_short());
        assert!(!err.is_value_not_found());
        assert_eq!(
            TooShort::try_from(err).ok(),
            Some(TooShort { required: 2, len: 1 }),
        );
        assert!(ValueNotFound::try_from(err).is_err());
    }
}
