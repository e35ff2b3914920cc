//! [`Command`] definition.

pub mod complete_contract;
pub mod create_area_rental;
pub mod create_contract;
pub mod end_rental;
pub mod log_work_hours;
pub mod record_contract_payment;
pub mod record_rental_payment;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    complete_contract::CompleteContract, create_area_rental::CreateAreaRental,
    create_contract::CreateContract, end_rental::EndRental,
    log_work_hours::LogWorkHours,
    record_contract_payment::RecordContractPayment,
    record_rental_payment::RecordRentalPayment,
};
