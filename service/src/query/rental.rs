//! [`Query`] collection related to a single [`AreaRental`].

use common::operations::By;

use crate::domain::{rental, AreaRental};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries an [`AreaRental`] by its [`rental::Id`].
pub type ById = DatabaseQuery<By<Option<AreaRental>, rental::Id>>;
