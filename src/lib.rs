//! Persian (Jalali/Shamsi) calendar for Rust.
//!
//! The crate has two layers: a pure conversion kernel
//! ([`gregorian_to_jalali`], [`jalali_to_gregorian`], [`is_leap_year`]) and a
//! mutable [`PersianCalendar`] value that keeps a civil instant
//! (`chrono::DateTime<Local>`) and the derived Jalali fields consistent
//! through field arithmetic and setters.
//!
//! # Examples
//!
//! Plain date conversion with [`JalaliDate`]:
//!
//! ```
//! use persian_calendar::{JalaliDate, Month};
//!
//! let date = JalaliDate::from_gregorian(2024, 3, 20);
//! assert_eq!(1403, date.year());
//! assert_eq!(Month::Farvardin, date.month());
//! assert_eq!("1403/01/01", date.to_string());
//! ```
//!
//! Calendar values with arithmetic and formatting:
//!
//! ```
//! use persian_calendar::{Field, Locale, Month, PersianCalendar};
//!
//! let mut cal = PersianCalendar::new(1403, Month::Farvardin, 1).unwrap();
//! assert_eq!("Wed 01 Farvardin 1403", cal.long_date(Locale::English));
//!
//! cal.add(Field::Month, 1);
//! assert_eq!(Month::Ordibehesht, cal.month());
//! assert_eq!("1403/02/01", cal.short_date());
//! ```

mod consts;
mod convert;
mod fmt;
mod prelude;
mod types;

pub use chrono::Weekday;
pub use consts::*;
pub use convert::{gregorian_to_jalali, is_gregorian_leap_year, is_leap_year, jalali_to_gregorian};
pub use fmt::{long_date, long_date_time, short_date, weekday_name, weekday_name_short};
pub use types::{DateError, JalaliDate, Locale, Month, ParseError};

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{DateTime, Datelike, Local, LocalResult, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// Calendar fields that [`PersianCalendar::add`] can shift.
///
/// Weekday and the UTC offset are derived values and cannot be added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

/// A mutable Persian calendar value.
///
/// The civil instant is the single source of truth: equality, ordering and
/// hashing compare instants, and the Jalali fields are a derived view that is
/// recomputed after every mutation. Year and month arithmetic operates on the
/// Jalali fields (with day-of-month pinning and year carry); day and
/// time-of-day arithmetic delegates to the instant.
///
/// The value is not internally synchronized; wrap it in a lock or keep one
/// per thread for shared access.
#[derive(Debug, Clone)]
pub struct PersianCalendar {
    instant: DateTime<Local>,
    date: JalaliDate,
}

/// Resolves a naive local time to an instant. Ambiguous wall-clock times take
/// the earlier offset; times inside a transition gap advance into the hour
/// the clock jumped to.
fn resolve_local(naive: NaiveDateTime) -> DateTime<Local> {
    match naive.and_local_timezone(Local) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => instant,
        LocalResult::None => (naive + TimeDelta::hours(1))
            .and_local_timezone(Local)
            .earliest()
            .expect("local time unresolvable even an hour past a transition gap"),
    }
}

impl PersianCalendar {
    /// Creates a calendar holding the current instant.
    pub fn now() -> Self {
        Self::from_instant(Local::now())
    }

    /// Creates a calendar from an explicit instant.
    pub fn from_instant(instant: DateTime<Local>) -> Self {
        Self {
            instant,
            date: JalaliDate::from(instant.date_naive()),
        }
    }

    /// Creates a calendar at local midnight of the given Jalali date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in the month,
    /// or `DateError::YearOutOfRange` if the date has no representable
    /// instant.
    pub fn new(year: i32, month: Month, day: u32) -> Result<Self, DateError> {
        Self::with_time(year, month, day, 0, 0, 0)
    }

    /// Creates a calendar from a Jalali date and a local time of day.
    ///
    /// # Errors
    /// As [`PersianCalendar::new`], plus `DateError::InvalidTime` for an
    /// out-of-range time.
    pub fn with_time(
        year: i32,
        month: Month,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, DateError> {
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(DateError::InvalidTime {
            hour,
            minute,
            second,
        })?;
        let date = JalaliDate::new(year, month, day)?;
        let gregorian = date
            .to_naive_date()
            .ok_or(DateError::YearOutOfRange(year))?;
        Ok(Self::from_instant(resolve_local(gregorian.and_time(time))))
    }

    /// Creates a calendar at local midnight of an already-validated date.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the date has no representable
    /// instant.
    pub fn from_date(date: JalaliDate) -> Result<Self, DateError> {
        let gregorian = date
            .to_naive_date()
            .ok_or(DateError::YearOutOfRange(date.year()))?;
        Ok(Self::from_instant(resolve_local(
            gregorian.and_time(NaiveTime::MIN),
        )))
    }

    /// Returns the civil instant this calendar holds.
    pub fn instant(&self) -> DateTime<Local> {
        self.instant
    }

    /// Returns the Jalali date derived from the instant.
    pub fn date(&self) -> JalaliDate {
        self.date
    }

    /// Returns the Jalali year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the month.
    pub fn month(&self) -> Month {
        self.date.month()
    }

    /// Returns the 1-based day of the month.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Returns the weekday. The numbering is shared with the Gregorian
    /// calendar.
    pub fn weekday(&self) -> Weekday {
        self.instant.weekday()
    }

    /// Returns the hour of day (0..=23).
    pub fn hour(&self) -> u32 {
        self.instant.hour()
    }

    /// Returns the 12-hour clock reading as `(is_pm, hour)` with hour in
    /// 1..=12.
    pub fn hour12(&self) -> (bool, u32) {
        self.instant.hour12()
    }

    /// Returns the minute (0..=59).
    pub fn minute(&self) -> u32 {
        self.instant.minute()
    }

    /// Returns the second (0..=59).
    pub fn second(&self) -> u32 {
        self.instant.second()
    }

    /// Returns the millisecond within the second.
    pub fn millisecond(&self) -> u32 {
        self.instant.timestamp_subsec_millis()
    }

    /// Returns the local offset from UTC in seconds, DST included.
    pub fn utc_offset_seconds(&self) -> i32 {
        self.instant.offset().local_minus_utc()
    }

    /// Returns the number of days in the current month.
    pub fn days_in_month(&self) -> u32 {
        self.date.days_in_month()
    }

    /// Returns `true` if the current year is a Persian leap year.
    pub fn is_leap_year(&self) -> bool {
        self.date.is_leap_year()
    }

    fn refresh_date(&mut self) {
        self.date = JalaliDate::from(self.instant.date_naive());
    }

    /// Rebuilds the instant from the Jalali fields, keeping the time of day,
    /// then re-derives the fields from the result.
    fn rebuild_instant(&mut self) {
        let gregorian = self
            .date
            .to_naive_date()
            .expect("date outside the supported instant range");
        self.instant = resolve_local(gregorian.and_time(self.instant.time()));
        self.refresh_date();
    }

    fn shift(&mut self, delta: TimeDelta) {
        self.instant += delta;
        self.refresh_date();
    }

    /// Adds `amount` (which may be negative) to the given field.
    ///
    /// Zero amounts are a no-op. Year arithmetic remaps a non-positive result
    /// to `1 - year`, so the year never reaches zero or below; month
    /// arithmetic carries into the year with the same remap. After a year or
    /// month change the day of month is pinned down to the new month's
    /// length. The remaining fields shift the instant directly.
    pub fn add(&mut self, field: Field, amount: i32) {
        if amount == 0 {
            return;
        }
        match field {
            Field::Year => {
                let mut year = self.date.year() + amount;
                if year <= 0 {
                    year = 1 - year;
                }
                self.date = JalaliDate::pinned(year, self.date.month(), self.date.day());
                self.rebuild_instant();
            }
            Field::Month => {
                let months = self.date.month().index() as i32 + amount;
                let mut year = self.date.year();
                let carry = months.div_euclid(12);
                if carry != 0 {
                    year += carry;
                    if year <= 0 {
                        year = 1 - year;
                    }
                }
                let month = Month::ALL[months.rem_euclid(12) as usize];
                self.date = JalaliDate::pinned(year, month, self.date.day());
                self.rebuild_instant();
            }
            Field::Day => self.shift(TimeDelta::days(i64::from(amount))),
            Field::Hour => self.shift(TimeDelta::hours(i64::from(amount))),
            Field::Minute => self.shift(TimeDelta::minutes(i64::from(amount))),
            Field::Second => self.shift(TimeDelta::seconds(i64::from(amount))),
            Field::Millisecond => self.shift(TimeDelta::milliseconds(i64::from(amount))),
        }
    }

    /// Sets the year, pinning the day of month into the (possibly shorter)
    /// same month of the new year.
    pub fn set_year(&mut self, year: i32) {
        self.date = JalaliDate::pinned(year, self.date.month(), self.date.day());
        self.rebuild_instant();
    }

    /// Sets the month, pinning the day of month into the new month's length.
    pub fn set_month(&mut self, month: Month) {
        self.date = JalaliDate::pinned(self.date.year(), month, self.date.day());
        self.rebuild_instant();
    }

    /// Sets the day of month, clamped into the month's length.
    pub fn set_day(&mut self, day: u32) {
        self.date = JalaliDate::pinned(self.date.year(), self.date.month(), day);
        self.rebuild_instant();
    }

    /// Sets the local time of day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidTime` for an out-of-range time.
    pub fn set_time(&mut self, hour: u32, minute: u32, second: u32) -> Result<(), DateError> {
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(DateError::InvalidTime {
            hour,
            minute,
            second,
        })?;
        self.instant = resolve_local(self.instant.date_naive().and_time(time));
        self.refresh_date();
        Ok(())
    }

    /// Returns the month name in the given locale.
    pub fn month_name(&self, locale: Locale) -> &'static str {
        self.date.month().name(locale)
    }

    /// Returns the weekday name in the given locale.
    pub fn weekday_name(&self, locale: Locale) -> &'static str {
        fmt::weekday_name(self.weekday(), locale)
    }

    /// Formats a long date, e.g. `چهارشنبه 01 فروردین 1403`.
    pub fn long_date(&self, locale: Locale) -> String {
        fmt::long_date(self.date, self.weekday(), locale)
    }

    /// Formats a long date with time, e.g.
    /// `چهارشنبه 01 فروردین 1403, 20:10:06`.
    pub fn long_date_time(&self, locale: Locale) -> String {
        fmt::long_date_time(
            self.date,
            self.weekday(),
            self.hour(),
            self.minute(),
            self.second(),
            locale,
        )
    }

    /// Formats a short date with the default `/` delimiter, e.g.
    /// `1403/01/01`.
    pub fn short_date(&self) -> String {
        self.short_date_with(DEFAULT_DATE_DELIMITER)
    }

    /// Formats a short date with an explicit delimiter.
    pub fn short_date_with(&self, delimiter: char) -> String {
        fmt::short_date(self.date, delimiter)
    }

    /// Rolling a field without carrying into larger fields is not supported;
    /// this does nothing.
    pub fn roll(&mut self, _field: Field, _up: bool) {}

    /// Field bounds are not modeled. Always returns 0.
    pub fn minimum(&self, _field: Field) -> i32 {
        0
    }

    /// Field bounds are not modeled. Always returns 0.
    pub fn maximum(&self, _field: Field) -> i32 {
        0
    }

    /// Field bounds are not modeled. Always returns 0.
    pub fn greatest_minimum(&self, _field: Field) -> i32 {
        0
    }

    /// Field bounds are not modeled. Always returns 0.
    pub fn least_maximum(&self, _field: Field) -> i32 {
        0
    }
}

impl FromStr for PersianCalendar {
    type Err = ParseError;

    /// Parses `yyyy/mm/dd` or `yyyy-mm-dd` (delimiter auto-detected) into a
    /// calendar at local midnight of that date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date: JalaliDate = s.parse()?;
        Self::from_date(date).map_err(ParseError::from)
    }
}

impl From<DateTime<Local>> for PersianCalendar {
    fn from(instant: DateTime<Local>) -> Self {
        Self::from_instant(instant)
    }
}

impl From<PersianCalendar> for DateTime<Local> {
    fn from(cal: PersianCalendar) -> Self {
        cal.instant
    }
}

impl Display for PersianCalendar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.long_date(Locale::default()))
    }
}

impl PartialEq for PersianCalendar {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for PersianCalendar {}

impl PartialOrd for PersianCalendar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PersianCalendar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Hash for PersianCalendar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state);
    }
}
