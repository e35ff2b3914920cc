//! Billing [`Terms`] of a [`Contract`].

use common::Money;
use derive_more::{Display, Into};
use rust_decimal::Decimal;

#[cfg(doc)]
use crate::domain::Contract;

use super::Kind;

/// Billing terms of a [`Contract`].
#[derive(Clone, Copy, Debug)]
pub struct Terms {
    /// Billing basis the [`rate`] is expressed in.
    ///
    /// [`rate`]: Terms::rate
    pub kind: Kind,

    /// Rate paid per one [`Kind`] unit of work.
    pub rate: Money,

    /// Declared workday length, if any.
    ///
    /// Meaningful for [`Kind::Daily`] contracts only.
    pub workday_hours: Option<WorkdayHours>,

    /// Declared total amount of work hours expected under the
    /// [`Contract`], if any.
    ///
    /// Serves as the completion target of [`Kind::Hourly`] and
    /// [`Kind::Monthly`] contracts, and as the month length a
    /// [`Kind::Monthly`] rate is normalized over.
    pub required_hours: Option<RequiredHours>,

    /// Declared total amount of workdays expected under the [`Contract`],
    /// if any.
    ///
    /// Serves as the completion target of [`Kind::Daily`] contracts.
    pub required_days: Option<RequiredDays>,
}

/// Workday length in hours.
#[derive(Clone, Copy, Debug, Display, Eq, Into, PartialEq)]
pub struct WorkdayHours(u8);

impl WorkdayHours {
    /// Creates a new [`WorkdayHours`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `hours` fit the `1..=24` range.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(hours: u8) -> Self {
        Self(hours)
    }

    /// Creates a new [`WorkdayHours`] by checking the provided value fits
    /// the `1..=24` range.
    #[must_use]
    pub fn new(hours: u8) -> Option<Self> {
        (1..=24).contains(&hours).then_some(Self(hours))
    }
}

/// Total amount of work hours declared by [`Terms`].
#[derive(Clone, Copy, Debug, Display, Eq, Into, PartialEq)]
pub struct RequiredHours(Decimal);

impl RequiredHours {
    /// Creates a new [`RequiredHours`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `hours` are positive.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(hours: Decimal) -> Self {
        Self(hours)
    }

    /// Creates a new [`RequiredHours`] by checking the provided value is
    /// positive.
    #[must_use]
    pub fn new(hours: Decimal) -> Option<Self> {
        (hours > Decimal::ZERO).then_some(Self(hours))
    }
}

/// Total amount of workdays declared by [`Terms`].
#[derive(Clone, Copy, Debug, Display, Eq, Into, PartialEq)]
pub struct RequiredDays(Decimal);

impl RequiredDays {
    /// Creates a new [`RequiredDays`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `days` are positive.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(days: Decimal) -> Self {
        Self(days)
    }

    /// Creates a new [`RequiredDays`] by checking the provided value is
    /// positive.
    #[must_use]
    pub fn new(days: Decimal) -> Option<Self> {
        (days > Decimal::ZERO).then_some(Self(days))
    }
}
