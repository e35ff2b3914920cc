//! Financial accounting calculations.
//!
//! Everything in here is a pure function of its inputs: the collaborating
//! commands and queries load the records, invoke a calculator and persist
//! or render whatever comes out. No calculator retains state between
//! calls, so all of them are safe to invoke concurrently.

pub mod accrual;
pub mod progress;
pub mod rate;
pub mod reconcile;
pub mod rental;

pub use self::{
    accrual::Accrual,
    reconcile::{OverpaymentPolicy, Reconciliation},
    rental::Quote,
};
