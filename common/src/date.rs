//! Calendar date utilities.

use std::{cmp::Ordering, fmt, marker::PhantomData, ops, str::FromStr};

use derive_more::{Debug, Display, Error};

/// Untyped calendar date.
pub type Date = DateOf;

/// Calendar date without a time-of-day or an offset.
#[derive(Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the date.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Creates a new [`Date`] from the provided calendar components.
    ///
    /// [`None`] is returned if the components don't form a valid calendar
    /// date.
    #[must_use]
    pub fn from_calendar(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(|inner| Self {
                inner,
                _of: PhantomData,
            })
    }

    /// Creates a new [`Date`] from the provided `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the string is not a valid `YYYY-MM-DD`
    /// calendar date.
    pub fn from_iso8601(input: &str) -> Result<Self, ParseError> {
        use ParseError as E;

        let (year, rest) = input.split_once('-').ok_or(E::Layout)?;
        let (month, day) = rest.split_once('-').ok_or(E::Layout)?;
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(E::Layout);
        }

        let year = year.parse::<i32>().map_err(|_| E::Layout)?;
        let month = month.parse::<u8>().map_err(|_| E::Layout)?;
        let day = day.parse::<u8>().map_err(|_| E::Layout)?;

        Self::from_calendar(year, month, day).ok_or(E::OutOfRange)
    }

    /// Returns the year of this [`Date`].
    #[must_use]
    pub fn year(self) -> i32 {
        self.inner.year()
    }

    /// Returns the month of this [`Date`].
    #[must_use]
    pub fn month(self) -> time::Month {
        self.inner.month()
    }

    /// Returns the day-of-month of this [`Date`].
    #[must_use]
    pub fn day(self) -> u8 {
        self.inner.day()
    }

    /// Coerces one kind of [`Date`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateOf<NewOf> {
        DateOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// Input doesn't match the `YYYY-MM-DD` layout.
    #[display("expected `YYYY-MM-DD` layout")]
    Layout,

    /// Parsed components don't form a valid calendar date.
    #[display("no such calendar date")]
    OutOfRange,
}

impl<Of: ?Sized> fmt::Display for DateOf<Of> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.inner.year(),
            u8::from(self.inner.month()),
            self.inner.day(),
        )
    }
}

impl<Of: ?Sized> FromStr for DateOf<Of> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso8601(s)
    }
}

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> From<time::Date> for DateOf<Of> {
    fn from(date: time::Date) -> Self {
        Self {
            inner: date,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> From<DateOf<Of>> for time::Date {
    fn from(date: DateOf<Of>) -> Self {
        date.inner
    }
}

impl<Of: ?Sized, OtherOf: ?Sized> ops::Sub<DateOf<OtherOf>> for DateOf<Of> {
    type Output = time::Duration;

    fn sub(self, rhs: DateOf<OtherOf>) -> Self::Output {
        self.inner - rhs.inner
    }
}

#[cfg(test)]
mod spec {
    use super::{Date, ParseError};

    fn date(s: &str) -> Date {
        Date::from_iso8601(s).unwrap()
    }

    #[test]
    fn from_iso8601() {
        let d = date("2024-01-31");
        assert_eq!(d.year(), 2024);
        assert_eq!(u8::from(d.month()), 1);
        assert_eq!(d.day(), 31);

        assert!(matches!(
            Date::from_iso8601("2024-1-31"),
            Err(ParseError::Layout),
        ));
        assert!(matches!(
            Date::from_iso8601("20240131"),
            Err(ParseError::Layout),
        ));
        assert!(matches!(
            Date::from_iso8601("31.01.2024"),
            Err(ParseError::Layout),
        ));
        assert!(matches!(
            Date::from_iso8601("2024-02-30"),
            Err(ParseError::OutOfRange),
        ));
        assert!(matches!(
            Date::from_iso8601("2024-13-01"),
            Err(ParseError::OutOfRange),
        ));
    }

    #[test]
    fn to_string() {
        assert_eq!(date("2024-01-31").to_string(), "2024-01-31");
        assert_eq!(date("0999-12-05").to_string(), "0999-12-05");
    }

    #[test]
    fn sub_counts_whole_days() {
        assert_eq!((date("2024-03-15") - date("2024-03-14")).whole_days(), 1);
        assert_eq!((date("2024-03-01") - date("2024-01-01")).whole_days(), 60);
        assert_eq!((date("2023-03-01") - date("2023-01-01")).whole_days(), 59);
        assert_eq!((date("2024-01-01") - date("2024-01-02")).whole_days(), -1);
    }

    #[test]
    fn ordered_chronologically() {
        assert!(date("2024-01-01") < date("2024-01-02"));
        assert!(date("2023-12-31") < date("2024-01-01"));
        assert_eq!(date("2024-06-15"), date("2024-06-15"));
    }
}
