//! Financial report [`Query`]s.
//!
//! [`Query`]: crate::Query

pub mod rental_statement;
pub mod statement;

pub use self::{rental_statement::RentalStatement, statement::Statement};
