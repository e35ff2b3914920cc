//! Derived statuses of billable entities.
//!
//! Both axes are derived from timestamps and never stored on their own, so
//! flipping one never touches the other.

#[cfg(doc)]
use crate::domain::{AreaRental, Contract};

/// Billing axis of a [`Contract`] or an [`AreaRental`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Settlement {
    /// Completed payments don't cover the earned amount yet.
    Outstanding = 1,

    /// Completed payments cover the earned amount in full.
    Settled = 2,
}

/// Engagement axis of a [`Contract`] or an [`AreaRental`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Engagement {
    /// Work (or occupation) is still ongoing.
    Active = 1,

    /// Explicitly ended, no further work is expected.
    Ended = 2,
}

/// Joint view of both status axes.
///
/// All four combinations are legal: an entity may well be settled while
/// still active, or ended while still outstanding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Status {
    /// Billing axis.
    pub settlement: Settlement,

    /// Engagement axis.
    pub engagement: Engagement,
}
