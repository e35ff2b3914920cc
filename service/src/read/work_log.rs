//! Work log read definitions.

use derive_more::Deref;

use crate::domain::work_log;
#[cfg(doc)]
use crate::domain::Contract;

/// Full history of [`work_log::Entry`]s billed under a single [`Contract`].
///
/// [`work_log::Entry`]s are ordered by their [`work_log::WorkDate`], with ties
/// broken by the time they were logged.
#[derive(Clone, Debug, Default, Deref)]
pub struct Journal(pub Vec<work_log::Entry>);
