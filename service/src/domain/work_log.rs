//! Work log [`Entry`] definitions.

use common::{unit, DateOf, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(doc)]
use common::{Date, DateTime};

use crate::domain::{contract, employee};
#[cfg(doc)]
use crate::domain::Contract;

/// Single day of hours logged by an employee under a [`Contract`].
///
/// At most one [`Entry`] may exist per [`Contract`], employee and
/// [`WorkDate`] combination.
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    /// ID of this [`Entry`].
    pub id: Id,

    /// ID of the [`Contract`] the hours are billed under.
    pub contract_id: contract::Id,

    /// ID of the employee who worked the hours.
    pub employee_id: employee::Id,

    /// [`Date`] the hours were worked on.
    pub date: WorkDate,

    /// Amount of worked [`Hours`].
    pub hours: Hours,

    /// [`DateTime`] when this [`Entry`] was logged.
    pub created_at: CreationDateTime,
}

/// ID of an [`Entry`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Amount of hours worked within a single day.
#[derive(Clone, Copy, Debug, Display, Eq, Into, PartialEq)]
pub struct Hours(Decimal);

impl Hours {
    /// Creates a new [`Hours`] amount.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `hours` fit the `(0, 24]`
    /// range.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(hours: Decimal) -> Self {
        Self(hours)
    }

    /// Creates a new [`Hours`] amount by checking the provided value fits
    /// the `(0, 24]` range.
    #[must_use]
    pub fn new(hours: Decimal) -> Option<Self> {
        (hours > Decimal::ZERO && hours <= Decimal::from(24_u8))
            .then_some(Self(hours))
    }
}

/// [`Date`] the hours of an [`Entry`] were worked on.
pub type WorkDate = DateOf<Entry>;

/// [`DateTime`] when an [`Entry`] was logged.
pub type CreationDateTime = DateTimeOf<(Entry, unit::Creation)>;
