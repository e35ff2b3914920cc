//! Reconciliation of earnings against payments.

use common::Money;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::payment::{self, Payment};

/// Treatment of an overpaid balance in a [`Reconciliation`].
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverpaymentPolicy {
    /// Report the overpaid remainder as a negative credit balance.
    #[default]
    Signed,

    /// Clamp the remainder at zero, hiding any credit balance.
    ClampedToZero,
}

/// Netting of accrued earnings against registered [`Payment`]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Reconciliation {
    /// Sum of all completed [`Payment`]s.
    pub total_paid: Money,

    /// Amount still to be paid.
    pub remaining: Money,

    /// Whether completed [`Payment`]s cover the earned amount in full.
    pub is_fully_paid: bool,
}

impl Reconciliation {
    /// Calculates the [`Reconciliation`] of the provided earned amount
    /// against the provided [`Payment`]s.
    ///
    /// Only [`payment::Status::Completed`] payments count towards the paid
    /// total. The provided [`OverpaymentPolicy`] shapes the remainder
    /// only: full coverage is always judged on the unclamped amounts.
    #[must_use]
    pub fn calculate(
        earned: Money,
        payments: &[Payment],
        policy: OverpaymentPolicy,
    ) -> Self {
        let total_paid = payments
            .iter()
            .filter(|p| p.status == payment::Status::Completed)
            .fold(Money::zero(earned.currency), |mut paid, p| {
                paid.amount += p.amount.amount;
                paid
            });

        let remaining = match policy {
            OverpaymentPolicy::Signed => earned.amount - total_paid.amount,
            OverpaymentPolicy::ClampedToZero => {
                (earned.amount - total_paid.amount).max(Decimal::ZERO)
            }
        };

        Self {
            total_paid,
            remaining: Money {
                amount: remaining,
                currency: earned.currency,
            },
            is_fully_paid: total_paid.amount >= earned.amount,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::{DateTime, Money};

    use crate::domain::{contract, payment, Payment};

    use super::{OverpaymentPolicy, Reconciliation};

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn payment(amount: &str, status: payment::Status) -> Payment {
        Payment {
            id: payment::Id::new(),
            code: payment::Code::random(),
            payee: payment::Payee::Contract(contract::Id::default()),
            amount: money(amount),
            status,
            paid_on: "2024-01-15".parse().unwrap(),
            created_at: DateTime::now().coerce(),
        }
    }

    #[test]
    fn exact_coverage_settles_in_full() {
        let payments = [payment("1000USD", payment::Status::Completed)];

        let r = Reconciliation::calculate(
            money("1000USD"),
            &payments,
            OverpaymentPolicy::default(),
        );

        assert_eq!(r.total_paid, money("1000USD"));
        assert_eq!(r.remaining, money("0USD"));
        assert!(r.is_fully_paid);
    }

    #[test]
    fn only_completed_payments_count() {
        let payments = [
            payment("400USD", payment::Status::Completed),
            payment("300USD", payment::Status::Pending),
            payment("200USD", payment::Status::Failed),
            payment("100USD", payment::Status::Cancelled),
        ];

        let r = Reconciliation::calculate(
            money("1000USD"),
            &payments,
            OverpaymentPolicy::default(),
        );

        assert_eq!(r.total_paid, money("400USD"));
        assert_eq!(r.remaining, money("600USD"));
        assert!(!r.is_fully_paid);
    }

    #[test]
    fn overpayment_stays_signed_by_default() {
        let payments = [
            payment("600USD", payment::Status::Completed),
            payment("700USD", payment::Status::Completed),
        ];

        let r = Reconciliation::calculate(
            money("1000USD"),
            &payments,
            OverpaymentPolicy::Signed,
        );

        assert_eq!(r.remaining, money("-300USD"));
        assert!(r.is_fully_paid);
    }

    #[test]
    fn overpayment_clamps_on_request() {
        let payments = [
            payment("600USD", payment::Status::Completed),
            payment("700USD", payment::Status::Completed),
        ];

        let r = Reconciliation::calculate(
            money("1000USD"),
            &payments,
            OverpaymentPolicy::ClampedToZero,
        );

        assert_eq!(r.total_paid, money("1300USD"));
        assert_eq!(r.remaining, money("0USD"));
        assert!(r.is_fully_paid);
    }

    #[test]
    fn no_payments_leave_everything_remaining() {
        let r = Reconciliation::calculate(
            money("1000USD"),
            &[],
            OverpaymentPolicy::default(),
        );

        assert_eq!(r.total_paid, money("0USD"));
        assert_eq!(r.remaining, money("1000USD"));
        assert!(!r.is_fully_paid);
    }
}
