use std::num::NonZero;

use super::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The length of a list that holds at least one node.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const fn checked_add(self, other: usize) -> Option<Length> {
        Length::wrap_non_zero(self.0.checked_add(other))
    }

    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        Length::wrap_non_zero(match self.0.get().checked_sub(other) {
            Some(res) => NonZero::new(res),
            None => None,
        })
    }

    /// Adds one to the length.
    ///
    /// # Panics
    /// Panics if the length would overflow [`usize`].
    pub fn increment(self) -> Length {
        self.checked_add(1).ok_or(CapacityOverflow).throw()
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn wrap_non_zero(value: Option<NonZero<usize>>) -> Option<Length> {
        match value {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    #[cfg(test)]
    pub const fn new(value: usize) -> Option<Length> {
        Length::wrap_non_zero(NonZero::new(value))
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::panic::assert_panics;

    #[test]
    fn test_length_bounds() {
        assert_eq!(Length::new(0), None, "A Length can never be zero.");
        assert_eq!(ONE.get(), 1);
        assert_eq!(ONE.checked_sub(1), None, "Removing the last node should leave no Length.");
        assert_eq!(ONE.increment().get(), 2);

        let max = Length::new(usize::MAX).expect("usize::MAX is non-zero");
        assert_eq!(max.checked_add(1), None);
        assert_panics!({
            max.increment();
        });
    }
}
