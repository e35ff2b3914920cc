//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

/// Floating-point percentage.
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
pub struct Percent(Decimal);

impl Percent {
    /// `0%` value.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// `100%` value.
    pub const HUNDRED: Self = Self(Decimal::ONE_HUNDRED);

    /// Creates a new [`Percent`] by checking the provided value fits the
    /// `0..=100` range.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            #[expect(
                clippy::allow_attributes,
                reason = "TODO: Remove once clippy is fixed"
            )]
            #[allow(unsafe_code, reason = "invariants checked already")]
            Some(unsafe { Self::new_unchecked(val) })
        }
    }

    /// Creates a new [`Percent`] by clamping the provided value into the
    /// `0..=100` range.
    #[must_use]
    pub fn clamped(val: Decimal) -> Self {
        Self(val.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
    }

    /// Creates a new [`Percent`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must fit the `0..=100` range.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(val: Decimal) -> Self {
        Self(val)
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Percent;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn new_checks_range() {
        assert_eq!(Percent::new(decimal("0")), Some(Percent::ZERO));
        assert_eq!(Percent::new(decimal("100")), Some(Percent::HUNDRED));
        assert!(Percent::new(decimal("55.5")).is_some());

        assert_eq!(Percent::new(decimal("-0.01")), None);
        assert_eq!(Percent::new(decimal("100.01")), None);
    }

    #[test]
    fn clamped_caps_out_of_range_values() {
        assert_eq!(Percent::clamped(decimal("-12")), Percent::ZERO);
        assert_eq!(Percent::clamped(decimal("133.7")), Percent::HUNDRED);
        assert_eq!(
            Percent::clamped(decimal("55.5")),
            Percent::from_str("55.5").unwrap(),
        );
    }

    #[test]
    fn from_str() {
        assert_eq!(Percent::from_str("100").unwrap(), Percent::HUNDRED);
        assert!(Percent::from_str("50.5").is_ok());

        assert!(Percent::from_str("101").is_err());
        assert!(Percent::from_str("-1").is_err());
        assert!(Percent::from_str("half").is_err());
    }
}
