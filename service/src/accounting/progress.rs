//! Completion progress estimation.

use common::Percent;
use rust_decimal::Decimal;

use crate::domain::contract::{Kind, Terms};

use super::rate;

/// Estimates how far the provided [`Terms`] are towards their declared
/// work target after `total_hours` of logged work.
///
/// - [`Kind::Hourly`] and [`Kind::Monthly`] terms measure hours against
///   [`Terms::required_hours`];
/// - [`Kind::Daily`] terms first convert the hours into workdays (using
///   the declared workday length, or [`rate::DEFAULT_WORKDAY_HOURS`]) and
///   measure those against [`Terms::required_days`].
///
/// Terms declaring no target report zero progress. Overtime never pushes
/// the estimate past `100%`.
#[must_use]
pub fn completion(terms: &Terms, total_hours: Decimal) -> Percent {
    match terms.kind {
        Kind::Hourly | Kind::Monthly => terms
            .required_hours
            .map_or(Percent::ZERO, |required| {
                ratio(total_hours, required.into())
            }),
        Kind::Daily => {
            let workday = terms
                .workday_hours
                .map_or(Decimal::from(rate::DEFAULT_WORKDAY_HOURS), |h| {
                    Decimal::from(u8::from(h))
                });
            terms.required_days.map_or(Percent::ZERO, |required| {
                ratio(total_hours / workday, required.into())
            })
        }
    }
}

/// Expresses `reached` against `target` as a clamped [`Percent`].
fn ratio(reached: Decimal, target: Decimal) -> Percent {
    Percent::clamped(reached / target * Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod spec {
    use common::Percent;
    use rust_decimal::Decimal;

    use crate::domain::contract::{
        terms::{RequiredDays, RequiredHours, WorkdayHours},
        Kind, Terms,
    };

    use super::completion;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn percent(s: &str) -> Percent {
        s.parse().unwrap()
    }

    fn hourly_terms(required_hours: Option<&str>) -> Terms {
        Terms {
            kind: Kind::Hourly,
            rate: "10USD".parse().unwrap(),
            workday_hours: None,
            required_hours: required_hours
                .map(|h| RequiredHours::new(decimal(h)).unwrap()),
            required_days: None,
        }
    }

    #[test]
    fn measures_hours_against_required_hours() {
        let t = hourly_terms(Some("200"));

        assert_eq!(completion(&t, decimal("0")), Percent::ZERO);
        assert_eq!(completion(&t, decimal("50")), percent("25"));
        assert_eq!(completion(&t, decimal("100")), percent("50"));
        assert_eq!(completion(&t, decimal("200")), Percent::HUNDRED);
    }

    #[test]
    fn overtime_is_capped_at_hundred() {
        let t = hourly_terms(Some("100"));
        assert_eq!(completion(&t, decimal("250")), Percent::HUNDRED);
    }

    #[test]
    fn no_declared_target_reports_zero() {
        let t = hourly_terms(None);
        assert_eq!(completion(&t, decimal("500")), Percent::ZERO);
    }

    #[test]
    fn daily_terms_measure_workdays() {
        let t = Terms {
            kind: Kind::Daily,
            rate: "160USD".parse().unwrap(),
            workday_hours: WorkdayHours::new(8),
            required_hours: None,
            required_days: RequiredDays::new(decimal("20")),
        };

        // 80 hours over 8-hour workdays is 10 of the 20 required days.
        assert_eq!(completion(&t, decimal("80")), percent("50"));
        assert_eq!(completion(&t, decimal("160")), Percent::HUNDRED);
        assert_eq!(completion(&t, decimal("400")), Percent::HUNDRED);
    }

    #[test]
    fn is_monotonic_in_worked_hours() {
        let t = hourly_terms(Some("120"));

        let mut last = completion(&t, Decimal::ZERO);
        for hours in 1..=150 {
            let next = completion(&t, Decimal::from(hours));
            assert!(next >= last);
            last = next;
        }
    }
}
