//! [`Contract`] definitions.

pub mod terms;

use common::{define_kind, unit, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(doc)]
use common::DateTime;

use crate::domain::{code, status};

pub use self::terms::Terms;

/// Billable work contract.
#[derive(Clone, Debug)]
pub struct Contract {
    /// ID of this [`Contract`].
    pub id: Id,

    /// Reference [`Code`] of this [`Contract`].
    pub code: Code,

    /// [`Title`] of this [`Contract`].
    pub title: Title,

    /// Billing [`Terms`] of this [`Contract`].
    ///
    /// Mutable: earnings are always repriced from the terms effective at
    /// calculation time, never from the ones effective when the hours were
    /// logged.
    pub terms: Terms,

    /// [`DateTime`] when this [`Contract`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Contract`] became fully covered by completed
    /// payments, if it ever did.
    pub settled_at: Option<SettlementDateTime>,

    /// [`DateTime`] when this [`Contract`] was completed, if it was.
    pub completed_at: Option<CompletionDateTime>,
}

impl Contract {
    /// Returns the [`status::Settlement`] of this [`Contract`].
    #[must_use]
    pub fn settlement(&self) -> status::Settlement {
        if self.settled_at.is_some() {
            status::Settlement::Settled
        } else {
            status::Settlement::Outstanding
        }
    }

    /// Returns the [`status::Engagement`] of this [`Contract`].
    #[must_use]
    pub fn engagement(&self) -> status::Engagement {
        if self.completed_at.is_some() {
            status::Engagement::Ended
        } else {
            status::Engagement::Active
        }
    }

    /// Returns the joint [`status::Status`] of this [`Contract`].
    #[must_use]
    pub fn status(&self) -> status::Status {
        status::Status {
            settlement: self.settlement(),
            engagement: self.engagement(),
        }
    }

    /// Returns whether this [`Contract`] is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.completed_at.is_none()
    }

    /// Returns whether this [`Contract`] is settled in full.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled_at.is_some()
    }
}

/// ID of a [`Contract`].
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

/// Reference code of a [`Contract`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Code(String);

impl Code {
    /// Prefix of every [`Contract`] reference [`Code`].
    pub const PREFIX: &'static str = "CT";

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

/// Title of a [`Contract`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `title` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 512
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

define_kind! {
    #[doc = "Billing basis of a [`Contract`]."]
    enum Kind {
        #[doc = "Work is billed by the logged hour."]
        Hourly = 1,

        #[doc = "Work is billed by the workday."]
        Daily = 2,

        #[doc = "Work is billed by the full month of required hours."]
        Monthly = 3,
    }
}

/// [`DateTime`] when a [`Contract`] was created.
pub type CreationDateTime = DateTimeOf<(Contract, unit::Creation)>;

/// [`DateTime`] when a [`Contract`] became fully covered by completed
/// payments.
pub type SettlementDateTime = DateTimeOf<(Contract, unit::Settlement)>;

/// [`DateTime`] when a [`Contract`] was completed.
pub type CompletionDateTime = DateTimeOf<(Contract, unit::Completion)>;
