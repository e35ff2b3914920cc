//! [`Payment`] definitions.

use common::{define_kind, unit, DateOf, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(doc)]
use common::{Date, DateTime};

use crate::domain::{code, contract, rental};
#[cfg(doc)]
use crate::domain::{AreaRental, Contract};

/// Payment registered against a billable entity.
///
/// Only [`Status::Completed`] payments count towards settling the billed
/// amount.
#[derive(Clone, Debug)]
pub struct Payment {
    /// ID of this [`Payment`].
    pub id: Id,

    /// Reference [`Code`] of this [`Payment`].
    pub code: Code,

    /// [`Payee`] this [`Payment`] is registered against.
    pub payee: Payee,

    /// Paid amount.
    pub amount: Money,

    /// [`Status`] of this [`Payment`].
    pub status: Status,

    /// [`Date`] this [`Payment`] applies to.
    pub paid_on: PaidOnDate,

    /// [`DateTime`] when this [`Payment`] was registered.
    pub created_at: CreationDateTime,
}

/// ID of a [`Payment`].
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

/// Reference code of a [`Payment`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Code(String);

impl Code {
    /// Prefix of every [`Payment`] reference [`Code`].
    pub const PREFIX: &'static str = "PM";

    /// Creates a new [`Code`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `code` is a valid reference
    /// code.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Creates a new [`Code`] if the given `code` is valid.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        code::check(&code, Self::PREFIX).then_some(Self(code))
    }

    /// Generates a new random [`Code`].
    #[must_use]
    pub fn random() -> Self {
        Self(format!("{}-{}", Self::PREFIX, code::random_suffix()))
    }
}

impl FromStr for Code {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Code`")
    }
}

/// Target a [`Payment`] is registered against.
#[derive(Clone, Copy, Debug, Eq, From, PartialEq)]
pub enum Payee {
    /// [`Contract`] the [`Payment`] is registered against.
    Contract(contract::Id),

    /// [`AreaRental`] the [`Payment`] is registered against.
    Rental(rental::Id),
}

define_kind! {
    #[doc = "Status of a [`Payment`]."]
    enum Status {
        #[doc = "The [`Payment`] went through."]
        Completed = 1,

        #[doc = "The [`Payment`] is registered, but not through yet."]
        Pending = 2,

        #[doc = "The [`Payment`] failed."]
        Failed = 3,

        #[doc = "The [`Payment`] was cancelled."]
        Cancelled = 4,
    }
}

/// [`Date`] a [`Payment`] applies to.
pub type PaidOnDate = DateOf<Payment>;

/// [`DateTime`] when a [`Payment`] was registered.
pub type CreationDateTime = DateTimeOf<(Payment, unit::Creation)>;

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::{Code, Status};

    #[test]
    fn code_is_validated() {
        assert!(Code::new("PM-0A1B2C").is_some());
        assert!(Code::new("CT-0A1B2C").is_none());

        let random = Code::random();
        assert!(Code::new(random.to_string()).is_some());
    }

    #[test]
    fn status_parses_from_screaming_snake_case() {
        assert_eq!(Status::from_str("COMPLETED").unwrap(), Status::Completed);
        assert_eq!(Status::from_str("PENDING").unwrap(), Status::Pending);
        assert_eq!(Status::Cancelled.to_string(), "CANCELLED");
        assert!(Status::from_str("completed").is_err());
    }
}
