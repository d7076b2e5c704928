//! Locale-aware date formatting.
//!
//! Free functions over the plain field values; [`crate::PersianCalendar`]
//! exposes the same formats as methods.

use chrono::Weekday;

use crate::consts::{WEEKDAY_NAMES, WEEKDAY_NAMES_SHORT, WEEKDAY_NAMES_SHORT_EN};
use crate::types::{JalaliDate, Locale};

/// Returns the weekday name in the given locale.
///
/// The Persian locale uses the full name, the English locale the abbreviated
/// one. Weekday numbering is Sunday-first in both calendars, so no conversion
/// is involved.
pub fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    let index = weekday.num_days_from_sunday() as usize;
    match locale {
        Locale::Persian => WEEKDAY_NAMES[index],
        Locale::English => WEEKDAY_NAMES_SHORT_EN[index],
    }
}

/// Returns the abbreviated weekday name in the given locale.
pub fn weekday_name_short(weekday: Weekday, locale: Locale) -> &'static str {
    let index = weekday.num_days_from_sunday() as usize;
    match locale {
        Locale::Persian => WEEKDAY_NAMES_SHORT[index],
        Locale::English => WEEKDAY_NAMES_SHORT_EN[index],
    }
}

/// Formats a long date, e.g. `چهارشنبه 01 فروردین 1403`.
pub fn long_date(date: JalaliDate, weekday: Weekday, locale: Locale) -> String {
    format!(
        "{} {:02} {} {:04}",
        weekday_name(weekday, locale),
        date.day(),
        date.month().name(locale),
        date.year()
    )
}

/// Formats a long date with time, e.g. `چهارشنبه 01 فروردین 1403, 20:10:06`.
pub fn long_date_time(
    date: JalaliDate,
    weekday: Weekday,
    hour: u32,
    minute: u32,
    second: u32,
    locale: Locale,
) -> String {
    format!(
        "{}, {hour:02}:{minute:02}:{second:02}",
        long_date(date, weekday, locale)
    )
}

/// Formats a short date as `yyyy<delimiter>mm<delimiter>dd` with a 1-based
/// month, e.g. `1403/01/01`.
pub fn short_date(date: JalaliDate, delimiter: char) -> String {
    format!(
        "{:04}{delimiter}{:02}{delimiter}{:02}",
        date.year(),
        date.month().number(),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Month;

    fn nowruz_1403() -> JalaliDate {
        JalaliDate::new(1403, Month::Farvardin, 1).unwrap()
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!("چهارشنبه", weekday_name(Weekday::Wed, Locale::Persian));
        assert_eq!("Wed", weekday_name(Weekday::Wed, Locale::English));
        assert_eq!("شنبه", weekday_name(Weekday::Sat, Locale::Persian));
        assert_eq!("Sun", weekday_name(Weekday::Sun, Locale::English));
    }

    #[test]
    fn test_weekday_names_short() {
        assert_eq!("چ", weekday_name_short(Weekday::Wed, Locale::Persian));
        assert_eq!("Wed", weekday_name_short(Weekday::Wed, Locale::English));
    }

    #[test]
    fn test_long_date() {
        assert_eq!(
            "چهارشنبه 01 فروردین 1403",
            long_date(nowruz_1403(), Weekday::Wed, Locale::Persian)
        );
        assert_eq!(
            "Wed 01 Farvardin 1403",
            long_date(nowruz_1403(), Weekday::Wed, Locale::English)
        );
    }

    #[test]
    fn test_long_date_time() {
        assert_eq!(
            "Wed 01 Farvardin 1403, 20:10:06",
            long_date_time(nowruz_1403(), Weekday::Wed, 20, 10, 6, Locale::English)
        );
    }

    #[test]
    fn test_short_date() {
        assert_eq!("1403/01/01", short_date(nowruz_1403(), '/'));
        assert_eq!("1403-01-01", short_date(nowruz_1403(), '-'));
        let date = JalaliDate::new(1357, Month::Bahman, 22).unwrap();
        assert_eq!("1357/11/22", short_date(date, '/'));
    }
}
