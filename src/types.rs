use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::consts::{DEFAULT_DATE_DELIMITER, ISO_DATE_DELIMITER, MONTH_NAMES, MONTH_NAMES_EN};
use crate::convert::{gregorian_to_jalali, is_leap_year, jalali_to_gregorian};
use crate::prelude::*;

/// Error type for calendar field validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month number outside 1..=12.
    #[error("Invalid month number: {0} (must be 1-12)")]
    InvalidMonth(i32),

    /// Day outside the month's length.
    #[error("Invalid day {day} for month {year:04}/{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    /// Time-of-day components out of range.
    #[error("Invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    /// The year has no representable civil instant.
    #[error("Year {0} is outside the supported instant range")]
    YearOutOfRange(i32),
}

/// Error type for date-string parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Empty or all-whitespace input.
    #[error("Empty date string")]
    EmptyInput,

    /// Neither `/` nor `-` appears in the input.
    #[error("No date delimiter ('/' or '-') in {0:?}")]
    MissingDelimiter(String),

    /// The input does not split into exactly year, month and day.
    #[error("Expected 3 date tokens, found {0}")]
    WrongTokenCount(usize),

    /// A token failed integer parsing.
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// The tokens parsed but do not name a valid date.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// The selected language for month and weekday names. The distinction is
/// binary; Persian is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Persian,
    English,
}

/// A month of the Persian year. The discriminant is the 0-based month index
/// (Farvardin is 0, Esfand is 11); `Display` renders the transliterated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Month {
    #[display(fmt = "Farvardin")]
    Farvardin,
    #[display(fmt = "Ordibehesht")]
    Ordibehesht,
    #[display(fmt = "Khordad")]
    Khordad,
    #[display(fmt = "Tir")]
    Tir,
    #[display(fmt = "Mordad")]
    Mordad,
    #[display(fmt = "Shahrivar")]
    Shahrivar,
    #[display(fmt = "Mehr")]
    Mehr,
    #[display(fmt = "Aban")]
    Aban,
    #[display(fmt = "Azar")]
    Azar,
    #[display(fmt = "Dey")]
    Dey,
    #[display(fmt = "Bahman")]
    Bahman,
    #[display(fmt = "Esfand")]
    Esfand,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Farvardin,
        Self::Ordibehesht,
        Self::Khordad,
        Self::Tir,
        Self::Mordad,
        Self::Shahrivar,
        Self::Mehr,
        Self::Aban,
        Self::Azar,
        Self::Dey,
        Self::Bahman,
        Self::Esfand,
    ];

    /// Returns the 0-based month index (0..=11).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the 1-based month number (1..=12).
    #[inline]
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Looks up a month by its 0-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Looks up a month by its 1-based number.
    pub fn from_number(number: i32) -> Option<Self> {
        if (1..=12).contains(&number) {
            Some(Self::ALL[(number - 1) as usize])
        } else {
            None
        }
    }

    /// Returns the number of days of this month in `year`.
    ///
    /// The first six months have 31 days, the next five 30; Esfand has 30
    /// days only in leap years.
    pub fn days(self, year: i32) -> u32 {
        match self.index() {
            0..=5 => 31,
            6..=10 => 30,
            _ => {
                if is_leap_year(year) {
                    30
                } else {
                    29
                }
            }
        }
    }

    /// Returns the month name in the given locale.
    pub fn name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Persian => MONTH_NAMES[self.index()],
            Locale::English => MONTH_NAMES_EN[self.index()],
        }
    }
}

/// A Jalali calendar date. The day is validated against the month's length on
/// construction, so a value of this type always names a real day.
///
/// `Display` renders the short date (`1403/01/01`); ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    year: i32,
    month: Month,
    day: u32,
}

impl JalaliDate {
    /// Creates a new date, validating the day against the month's length.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` is 0 or past the end of the
    /// month.
    pub fn new(year: i32, month: Month, day: u32) -> Result<Self, DateError> {
        if !(1..=month.days(year)).contains(&day) {
            return Err(DateError::InvalidDay {
                year,
                month: month.number(),
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date with the day clamped into the month's length instead of
    /// rejected.
    pub(crate) fn pinned(year: i32, month: Month, day: u32) -> Self {
        Self {
            year,
            month,
            day: day.clamp(1, month.days(year)),
        }
    }

    /// Returns the year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month.
    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the 1-based day of the month.
    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Converts a Gregorian `(year, month, day)` triple (1-based month) to
    /// the equivalent Jalali date.
    ///
    /// # Example
    ///
    /// ```
    /// use persian_calendar::{JalaliDate, Month};
    ///
    /// let date = JalaliDate::from_gregorian(2024, 3, 20);
    /// assert_eq!(1403, date.year());
    /// assert_eq!(Month::Farvardin, date.month());
    /// assert_eq!(1, date.day());
    /// ```
    pub fn from_gregorian(gy: i32, gm: i32, gd: i32) -> Self {
        let (jy, jm, jd) = gregorian_to_jalali(gy, gm, gd);
        let month = Month::from_number(jm).expect("conversion yields months 1..=12");
        Self {
            year: jy,
            month,
            day: jd as u32,
        }
    }

    /// Converts this date to a Gregorian `(year, month, day)` triple with a
    /// 1-based month.
    pub fn to_gregorian(&self) -> (i32, i32, i32) {
        jalali_to_gregorian(self.year, self.month.number() as i32, self.day as i32)
    }

    /// Converts this date to a [`chrono::NaiveDate`].
    ///
    /// Returns `None` if the year falls outside chrono's representable range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let (gy, gm, gd) = self.to_gregorian();
        NaiveDate::from_ymd_opt(gy, gm as u32, gd as u32)
    }

    /// Parses a date string with an explicit delimiter.
    ///
    /// Falls back to delimiter auto-detection (as [`FromStr`]) when the
    /// given delimiter does not occur in the input.
    ///
    /// # Errors
    /// As [`FromStr`]: the input must split into exactly three numeric
    /// tokens naming a valid date.
    pub fn parse_with_delimiter(s: &str, delimiter: char) -> Result<Self, ParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if trimmed.contains(delimiter) {
            Self::parse_parts(trimmed, delimiter)
        } else {
            Self::parse_detecting(trimmed)
        }
    }

    fn parse_detecting(trimmed: &str) -> Result<Self, ParseError> {
        let delimiter = if trimmed.contains(DEFAULT_DATE_DELIMITER) {
            DEFAULT_DATE_DELIMITER
        } else if trimmed.contains(ISO_DATE_DELIMITER) {
            ISO_DATE_DELIMITER
        } else {
            return Err(ParseError::MissingDelimiter(trimmed.to_owned()));
        };
        Self::parse_parts(trimmed, delimiter)
    }

    fn parse_parts(trimmed: &str, delimiter: char) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = trimmed.split(delimiter).map(str::trim).collect();
        if tokens.len() != 3 {
            return Err(ParseError::WrongTokenCount(tokens.len()));
        }

        let year = parse_i32(tokens[0])?;
        let month_number = parse_i32(tokens[1])?;
        let day = parse_u32(tokens[2])?;

        let month = Month::from_number(month_number).ok_or(DateError::InvalidMonth(month_number))?;
        Ok(Self::new(year, month, day)?)
    }

    /// Returns `true` if this date's year is a Persian leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(&self) -> u32 {
        self.month.days(self.year)
    }
}

impl From<NaiveDate> for JalaliDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_gregorian(date.year(), date.month() as i32, date.day() as i32)
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{delim}{:02}{delim}{:02}",
            self.year,
            self.month.number(),
            self.day,
            delim = DEFAULT_DATE_DELIMITER
        )
    }
}

// --- parsing helpers ---

fn parse_i32(token: &str) -> Result<i32, ParseError> {
    token
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidNumber(token.to_owned()))
}

fn parse_u32(token: &str) -> Result<u32, ParseError> {
    token
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidNumber(token.to_owned()))
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    /// Parses `yyyy/mm/dd` or `yyyy-mm-dd` with the delimiter auto-detected,
    /// `/` taking precedence. Tokens are trimmed before integer parsing and
    /// the month token is 1-based.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Self::parse_detecting(trimmed)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_index_and_number() {
        assert_eq!(0, Month::Farvardin.index());
        assert_eq!(11, Month::Esfand.index());
        assert_eq!(1, Month::Farvardin.number());
        assert_eq!(12, Month::Esfand.number());
    }

    #[test]
    fn test_month_from_number() {
        for number in 1..=12 {
            let month = Month::from_number(number).unwrap();
            assert_eq!(number as u32, month.number());
        }
        assert_eq!(None, Month::from_number(0));
        assert_eq!(None, Month::from_number(13));
        assert_eq!(None, Month::from_number(-1));
    }

    #[test]
    fn test_month_from_index() {
        assert_eq!(Some(Month::Farvardin), Month::from_index(0));
        assert_eq!(Some(Month::Esfand), Month::from_index(11));
        assert_eq!(None, Month::from_index(12));
    }

    #[test]
    fn test_month_days() {
        for month in &Month::ALL[..6] {
            assert_eq!(31, month.days(1403), "{month} should have 31 days");
        }
        for month in &Month::ALL[6..11] {
            assert_eq!(30, month.days(1403), "{month} should have 30 days");
        }
        // Esfand depends on the leap year.
        assert_eq!(30, Month::Esfand.days(1403));
        assert_eq!(29, Month::Esfand.days(1404));
    }

    #[test]
    fn test_month_names() {
        assert_eq!("Farvardin", Month::Farvardin.name(Locale::English));
        assert_eq!("فروردین", Month::Farvardin.name(Locale::Persian));
        assert_eq!("Esfand", Month::Esfand.name(Locale::English));
        assert_eq!("اسفند", Month::Esfand.name(Locale::Persian));
    }

    #[test]
    fn test_month_display() {
        assert_eq!("Ordibehesht", Month::Ordibehesht.to_string());
    }

    #[test]
    fn test_new_valid() {
        assert!(JalaliDate::new(1403, Month::Farvardin, 1).is_ok());
        assert!(JalaliDate::new(1403, Month::Farvardin, 31).is_ok());
        assert!(JalaliDate::new(1403, Month::Mehr, 30).is_ok());
        assert!(JalaliDate::new(1403, Month::Esfand, 30).is_ok());
    }

    #[test]
    fn test_new_invalid_day() {
        let result = JalaliDate::new(1403, Month::Mehr, 31);
        assert!(matches!(
            result,
            Err(DateError::InvalidDay {
                year: 1403,
                month: 7,
                day: 31
            })
        ));
        assert!(JalaliDate::new(1403, Month::Farvardin, 0).is_err());
        // Esfand 30 only exists in leap years.
        assert!(JalaliDate::new(1404, Month::Esfand, 30).is_err());
    }

    #[test]
    fn test_pinned_clamps() {
        let date = JalaliDate::pinned(1404, Month::Esfand, 30);
        assert_eq!(29, date.day());
        let date = JalaliDate::pinned(1403, Month::Mehr, 0);
        assert_eq!(1, date.day());
    }

    #[test]
    fn test_gregorian_round_trip() {
        let date = JalaliDate::from_gregorian(1979, 2, 11);
        assert_eq!(1357, date.year());
        assert_eq!(Month::Bahman, date.month());
        assert_eq!(22, date.day());
        assert_eq!((1979, 2, 11), date.to_gregorian());
    }

    #[test]
    fn test_naive_date_conversions() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let date = JalaliDate::from(naive);
        assert_eq!(1403, date.year());
        assert_eq!(Some(naive), date.to_naive_date());
    }

    #[test]
    fn test_display() {
        let date = JalaliDate::new(1403, Month::Farvardin, 1).unwrap();
        assert_eq!("1403/01/01", date.to_string());
        let date = JalaliDate::new(1357, Month::Bahman, 22).unwrap();
        assert_eq!("1357/11/22", date.to_string());
    }

    #[test]
    fn test_ordering() {
        let earlier = JalaliDate::new(1402, Month::Esfand, 29).unwrap();
        let later = JalaliDate::new(1403, Month::Farvardin, 1).unwrap();
        assert!(earlier < later);

        let mid_year = JalaliDate::new(1403, Month::Mehr, 1).unwrap();
        assert!(later < mid_year);
    }

    #[test]
    fn test_parse_slash_and_hyphen() {
        let slash = "1403/01/01".parse::<JalaliDate>().unwrap();
        let hyphen = "1403-01-01".parse::<JalaliDate>().unwrap();
        assert_eq!(slash, hyphen);
        assert_eq!(1403, slash.year());
        assert_eq!(Month::Farvardin, slash.month());
        assert_eq!(1, slash.day());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let date = " 1403 / 06 / 31 ".parse::<JalaliDate>().unwrap();
        assert_eq!(Month::Shahrivar, date.month());
        assert_eq!(31, date.day());
    }

    #[test]
    fn test_parse_with_delimiter() {
        let date = JalaliDate::parse_with_delimiter("1403.01.01", '.').unwrap();
        assert_eq!(1403, date.year());
        assert_eq!(Month::Farvardin, date.month());

        // Falls back to auto-detection when the delimiter is absent.
        let date = JalaliDate::parse_with_delimiter("1403-11-22", '.').unwrap();
        assert_eq!(Month::Bahman, date.month());
        assert_eq!(22, date.day());

        assert_eq!(
            Err(ParseError::EmptyInput),
            JalaliDate::parse_with_delimiter("  ", '.')
        );
    }

    #[test]
    fn test_parse_failures() {
        struct TestCase {
            input: &'static str,
            expected: ParseError,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input: "",
                expected: ParseError::EmptyInput,
                description: "empty string",
            },
            TestCase {
                input: "   ",
                expected: ParseError::EmptyInput,
                description: "whitespace only",
            },
            TestCase {
                input: "14030101",
                expected: ParseError::MissingDelimiter("14030101".to_owned()),
                description: "no delimiter",
            },
            TestCase {
                input: "1/2",
                expected: ParseError::WrongTokenCount(2),
                description: "too few tokens",
            },
            TestCase {
                input: "1403/01/01/05",
                expected: ParseError::WrongTokenCount(4),
                description: "too many tokens",
            },
            TestCase {
                input: "abc/def/ghi",
                expected: ParseError::InvalidNumber("abc".to_owned()),
                description: "non-numeric tokens",
            },
            TestCase {
                input: "1403/13/01",
                expected: ParseError::Date(DateError::InvalidMonth(13)),
                description: "month out of range",
            },
            TestCase {
                input: "1403/07/31",
                expected: ParseError::Date(DateError::InvalidDay {
                    year: 1403,
                    month: 7,
                    day: 31,
                }),
                description: "day out of range",
            },
        ];

        for case in &cases {
            assert_eq!(
                Err(case.expected.clone()),
                case.input.parse::<JalaliDate>(),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let date = JalaliDate::new(1403, Month::Farvardin, 1).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(r#""1403/01/01""#, json);
        let parsed: JalaliDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<JalaliDate, _> = serde_json::from_str(r#""1403/13/01""#);
        assert!(result.is_err());
        let result: Result<JalaliDate, _> = serde_json::from_str(r#""1404/12/30""#);
        assert!(result.is_err());
        let result: Result<JalaliDate, _> = serde_json::from_str(r#""1403/12/30""#);
        assert!(result.is_ok());
    }
}
