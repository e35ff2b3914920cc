//! Domain definitions.

pub mod code;
pub mod contract;
pub mod employee;
pub mod payment;
pub mod rental;
pub mod status;
pub mod work_log;

pub use self::{contract::Contract, payment::Payment, rental::AreaRental};
