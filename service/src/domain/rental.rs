//! [`AreaRental`] definitions.

use common::{unit, DateOf, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(doc)]
use common::{Date, DateTime};

use crate::domain::{code, status};

/// Rental of a company area billed at a fixed monthly rate.
#[derive(Clone, Debug)]
pub struct AreaRental {
    /// ID of this [`AreaRental`].
    pub id: Id,

    /// Reference [`Code`] of this [`AreaRental`].
    pub code: Code,

    /// Rented [`Area`].
    pub area: Area,

    /// Rate billed per occupied month.
    pub monthly_rate: Money,

    /// Deposit paid at the beginning of the occupation, if any.
    ///
    /// Never counts towards settling the billed amount.
    pub deposit: Option<Money>,

    /// Occupation [`Term`] of this [`AreaRental`].
    pub term: Term,

    /// [`DateTime`] when this [`AreaRental`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`AreaRental`] became fully covered by
    /// completed payments, if it ever did.
    pub settled_at: Option<SettlementDateTime>,

    /// [`DateTime`] when this [`AreaRental`] was ended, if it was.
    pub ended_at: Option<EndDateTime>,
}

impl AreaRental {
    /// Returns the [`status::Settlement`] of this [`AreaRental`].
    #[must_use]
    pub fn settlement(&self) -> status::Settlement {
        if self.settled_at.is_some() {
            status::Settlement::Settled
        } else {
            status::Settlement::Outstanding
        }
    }

    /// Returns the [`status::Engagement`] of this [`AreaRental`].
    #[must_use]
    pub fn engagement(&self) -> status::Engagement {
        if self.ended_at.is_some() {
            status::Engagement::Ended
        } else {
            status::Engagement::Active
        }
    }

    /// Returns the joint [`status::Status`] of this [`AreaRental`].
    #[must_use]
    pub fn status(&self) -> status::Status {
        status::Status {
            settlement: self.settlement(),
            engagement: self.engagement(),
        }
    }

    /// Returns whether this [`AreaRental`] is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Returns whether this [`AreaRental`] is settled in full.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled_at.is_some()
    }
}

/// ID of an [`AreaRental`].
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

/// Reference code of an [`AreaRental`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Code(String);

impl Code {
    /// Prefix of every [`AreaRental`] reference [`Code`].
    pub const PREFIX: &'static str = "AR";

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

/// Name of a rented area.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Area(String);

impl Area {
    /// Creates a new [`Area`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `area` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(area: impl Into<String>) -> Self {
        Self(area.into())
    }

    /// Creates a new [`Area`] if the given `area` is valid.
    #[must_use]
    pub fn new(area: impl Into<String>) -> Option<Self> {
        let area = area.into();
        Self::check(&area).then_some(Self(area))
    }

    /// Checks whether the given `area` is a valid [`Area`].
    fn check(area: impl AsRef<str>) -> bool {
        let area = area.as_ref();
        area.trim() == area && !area.is_empty() && area.len() <= 512
    }
}

impl FromStr for Area {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Area`")
    }
}

/// Occupation term of an [`AreaRental`].
///
/// Both the starting and the ending [`Date`]s are billed.
#[derive(Clone, Copy, Debug)]
pub struct Term {
    /// First billed [`Date`] of the occupation.
    pub starts_on: StartDate,

    /// Last billed [`Date`] of the occupation, if agreed upfront.
    ///
    /// [`None`] means the occupation is open-ended.
    pub ends_on: Option<EndDate>,
}

/// Marker type indicating the start of a [`Term`].
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type indicating the end of a [`Term`].
#[derive(Clone, Copy, Debug)]
pub struct End;

/// [`Date`] a [`Term`] starts on.
pub type StartDate = DateOf<(Term, Start)>;

/// [`Date`] a [`Term`] ends on.
pub type EndDate = DateOf<(Term, End)>;

/// [`DateTime`] when an [`AreaRental`] was created.
pub type CreationDateTime = DateTimeOf<(AreaRental, unit::Creation)>;

/// [`DateTime`] when an [`AreaRental`] became fully covered by completed
/// payments.
pub type SettlementDateTime = DateTimeOf<(AreaRental, unit::Settlement)>;

/// [`DateTime`] when an [`AreaRental`] was ended.
pub type EndDateTime = DateTimeOf<(AreaRental, unit::Completion)>;
