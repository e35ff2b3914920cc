//! Billing rate normalization.

use common::Money;
use rust_decimal::Decimal;

use crate::domain::contract::{Kind, Terms};

/// Workday length assumed for [`Kind::Daily`] terms not declaring one.
pub const DEFAULT_WORKDAY_HOURS: u8 = 8;

/// Amount of hours constituting a full month of work, assumed for
/// [`Kind::Monthly`] terms not declaring them.
pub const DEFAULT_MONTHLY_HOURS: u16 = 270;

/// Derives the effective hourly rate of the provided [`Terms`].
///
/// Every billing basis folds into a per-hour amount, so accrued earnings
/// are always `hours * rate` no matter how the rate was declared:
/// - [`Kind::Hourly`] rates pass through unchanged;
/// - [`Kind::Daily`] rates are divided by the declared workday length
///   (or [`DEFAULT_WORKDAY_HOURS`]);
/// - [`Kind::Monthly`] rates are divided by the declared hours of a full
///   month (or [`DEFAULT_MONTHLY_HOURS`]).
///
/// The division is exact decimal arithmetic. Rounding, if any, is up to
/// the displaying side.
#[must_use]
pub fn effective_hourly(terms: &Terms) -> Money {
    let divisor = match terms.kind {
        Kind::Hourly => return terms.rate,
        Kind::Daily => terms
            .workday_hours
            .map_or(Decimal::from(DEFAULT_WORKDAY_HOURS), |h| {
                Decimal::from(u8::from(h))
            }),
        Kind::Monthly => terms
            .required_hours
            .map_or(Decimal::from(DEFAULT_MONTHLY_HOURS), Decimal::from),
    };

    Money {
        amount: terms.rate.amount / divisor,
        currency: terms.rate.currency,
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::domain::contract::{
        terms::{RequiredHours, WorkdayHours},
        Kind, Terms,
    };

    use super::effective_hourly;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn terms(kind: Kind, rate: &str) -> Terms {
        Terms {
            kind,
            rate: rate.parse().unwrap(),
            workday_hours: None,
            required_hours: None,
            required_days: None,
        }
    }

    #[test]
    fn hourly_rate_passes_through() {
        let t = terms(Kind::Hourly, "160USD");
        assert_eq!(effective_hourly(&t), "160USD".parse().unwrap());
    }

    #[test]
    fn daily_rate_divides_by_workday() {
        let mut t = terms(Kind::Daily, "160USD");
        t.workday_hours = WorkdayHours::new(8);
        assert_eq!(effective_hourly(&t), "20USD".parse().unwrap());

        t.workday_hours = WorkdayHours::new(10);
        assert_eq!(effective_hourly(&t), "16USD".parse().unwrap());
    }

    #[test]
    fn daily_rate_defaults_workday_to_eight() {
        let t = terms(Kind::Daily, "160USD");
        assert_eq!(effective_hourly(&t), "20USD".parse().unwrap());
    }

    #[test]
    fn monthly_rate_divides_by_required_hours() {
        let mut t = terms(Kind::Monthly, "2700USD");
        t.required_hours = RequiredHours::new(decimal("200"));
        assert_eq!(effective_hourly(&t), "13.5USD".parse().unwrap());
    }

    #[test]
    fn monthly_rate_defaults_required_hours() {
        let t = terms(Kind::Monthly, "2700USD");
        assert_eq!(effective_hourly(&t), "10USD".parse().unwrap());
    }
}
