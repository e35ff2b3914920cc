//! Earnings accrual over a work log.

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

use common::{DateOf, Money};
use rust_decimal::Decimal;

use crate::domain::{contract::Terms, work_log};
#[cfg(doc)]
use crate::domain::Contract;

use super::rate;

/// Accrued earnings over a [`Contract`]'s work log.
///
/// Always priced from the [`Terms`] effective at calculation time: no rate
/// is locked in per [`work_log::Entry`], so editing the terms reprices the
/// whole history on the next calculation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Accrual {
    /// Amount earned by each [`work_log::Entry`].
    pub per_entry: HashMap<work_log::Id, Money>,

    /// Hours and earnings reached within each [`CalendarMonth`], iterable
    /// in chronological order.
    pub months: BTreeMap<CalendarMonth, MonthTotals>,

    /// Total worked hours.
    pub total_hours: Decimal,

    /// Total earned amount.
    pub total_earned: Money,
}

impl Accrual {
    /// Calculates the [`Accrual`] of the provided work log, priced by the
    /// provided [`Terms`].
    ///
    /// Pure: identical inputs produce an identical [`Accrual`].
    #[must_use]
    pub fn calculate(terms: &Terms, entries: &[work_log::Entry]) -> Self {
        let hourly = rate::effective_hourly(terms);

        let mut per_entry = HashMap::with_capacity(entries.len());
        let mut months = BTreeMap::new();
        let mut total_hours = Decimal::ZERO;
        let mut total_earned = Money::zero(hourly.currency);

        for entry in entries {
            let hours = Decimal::from(entry.hours);
            let earned = Money {
                amount: hours * hourly.amount,
                currency: hourly.currency,
            };

            _ = per_entry.insert(entry.id, earned);

            let totals = months
                .entry(CalendarMonth::of(entry.date))
                .or_insert_with(|| MonthTotals {
                    hours: Decimal::ZERO,
                    earned: Money::zero(hourly.currency),
                });
            totals.hours += hours;
            totals.earned.amount += earned.amount;

            total_hours += hours;
            total_earned.amount += earned.amount;
        }

        Self {
            per_entry,
            months,
            total_hours,
            total_earned,
        }
    }
}

/// Calendar month a [`work_log::Entry`] falls into.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CalendarMonth {
    /// Year of this [`CalendarMonth`].
    pub year: i32,

    /// Month number in the `1..=12` range.
    pub month: u8,
}

impl CalendarMonth {
    /// Returns the [`CalendarMonth`] the provided date falls into.
    #[must_use]
    pub fn of<Of: ?Sized>(date: DateOf<Of>) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
        }
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Totals accrued within a single [`CalendarMonth`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonthTotals {
    /// Hours worked within the month.
    pub hours: Decimal,

    /// Amount earned within the month.
    pub earned: Money,
}
