//! Fixed-term rental pricing.

use common::Money;
use rust_decimal::Decimal;

use crate::domain::rental::Term;
#[cfg(doc)]
use crate::domain::AreaRental;

/// Fixed divisor deriving a daily rate from a monthly one.
///
/// Deliberately `30` regardless of the calendar month's actual length.
pub const MONTH_DAYS: u8 = 30;

/// Price quote of a fixed-term [`AreaRental`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Amount of billed occupation days, both [`Term`] bounds included.
    pub total_days: i64,

    /// Daily rate the [`total_days`] are billed at.
    ///
    /// [`total_days`]: Quote::total_days
    pub daily_rate: Money,

    /// Total amount billed over the whole [`Term`].
    pub total_amount: Money,
}

impl Quote {
    /// Calculates the [`Quote`] of the provided [`Term`] billed at the
    /// provided monthly rate.
    ///
    /// [`None`] is returned for an open-ended [`Term`]: without an end
    /// date there's no fixed total to quote.
    #[must_use]
    pub fn calculate(monthly_rate: Money, term: &Term) -> Option<Self> {
        let ends_on = term.ends_on?;

        // Both bounds are billed, hence one more than the difference.
        let total_days = (ends_on - term.starts_on).whole_days() + 1;
        let daily_rate = Money {
            amount: monthly_rate.amount / Decimal::from(MONTH_DAYS),
            currency: monthly_rate.currency,
        };

        Some(Self {
            total_days,
            daily_rate,
            total_amount: Money {
                amount: Decimal::from(total_days) * daily_rate.amount,
                currency: monthly_rate.currency,
            },
        })
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::domain::rental::Term;

    use super::Quote;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn term(starts_on: &str, ends_on: Option<&str>) -> Term {
        Term {
            starts_on: starts_on.parse().unwrap(),
            ends_on: ends_on.map(|d| d.parse().unwrap()),
        }
    }

    #[test]
    fn bills_both_bounds_inclusively() {
        let quote = Quote::calculate(
            money("3000USD"),
            &term("2024-01-01", Some("2024-01-31")),
        )
        .unwrap();

        assert_eq!(quote.total_days, 31);
        assert_eq!(quote.daily_rate, money("100USD"));
        assert_eq!(quote.total_amount, money("3100USD"));
    }

    #[test]
    fn divides_months_by_thirty_regardless_of_calendar() {
        // February 2024 has 29 days, but the daily rate still uses 30.
        let quote = Quote::calculate(
            money("3000USD"),
            &term("2024-02-01", Some("2024-02-29")),
        )
        .unwrap();

        assert_eq!(quote.total_days, 29);
        assert_eq!(quote.daily_rate, money("100USD"));
        assert_eq!(quote.total_amount, money("2900USD"));
    }

    #[test]
    fn spans_month_boundaries_by_whole_days() {
        let quote = Quote::calculate(
            money("3000USD"),
            &term("2024-01-10", Some("2024-02-09")),
        )
        .unwrap();

        assert_eq!(quote.total_days, 31);
        assert_eq!(quote.total_amount, money("3100USD"));
    }

    #[test]
    fn open_ended_term_has_no_quote() {
        assert_eq!(
            Quote::calculate(money("3000USD"), &term("2024-01-10", None)),
            None,
        );
    }

    #[test]
    fn two_day_term() {
        let quote = Quote::calculate(
            money("3000USD"),
            &term("2024-01-01", Some("2024-01-02")),
        )
        .unwrap();

        assert_eq!(quote.total_days, 2);
        assert_eq!(quote.total_amount, money("200USD"));
    }
}
