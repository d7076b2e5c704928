//! Conversion kernel between Gregorian and Jalali dates.
//!
//! Both directions work over a linear day index and use truncating integer
//! division; the calibration constants in [`crate::consts`] were tuned against
//! exactly that rounding, so the arithmetic here must not be "modernized" to
//! floor division. Months are 1-based at this layer. Inputs far outside the
//! supported era (deeply negative years and the like) are undefined rather
//! than guarded.

use crate::consts::{
    DAYS_PER_4_YEARS, DAYS_PER_33_YEARS, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, EPOCH_SHIFT_G2J,
    EPOCH_SHIFT_J2G, EPOCH_YEAR_SHIFT, FIRST_HALF_DAYS, GREGORIAN_DAYS_BEFORE_MONTH,
    LEAP_TABLE_FIRST, LEAP_TABLE_LAST, LEAP_YEARS,
};

/// Converts a Gregorian date to a Jalali `(year, month, day)` triple.
///
/// `gm` is the 1-based Gregorian month; the returned month is 1-based as well.
/// Exact over the proleptic Gregorian calendar from deep history through at
/// least year 3000.
///
/// # Example
///
/// ```
/// use persian_calendar::gregorian_to_jalali;
///
/// assert_eq!((1403, 1, 1), gregorian_to_jalali(2024, 3, 20));
/// ```
pub fn gregorian_to_jalali(gy: i32, gm: i32, gd: i32) -> (i32, i32, i32) {
    // The year is counted from March so the Gregorian leap day lands at the
    // end of the accumulated year.
    let leap_base = if gm > 2 { gy + 1 } else { gy };
    let mut days = EPOCH_SHIFT_G2J
        + 365 * gy
        + (leap_base + 3) / 4
        - (leap_base + 99) / 100
        + (leap_base + 399) / 400
        + gd
        + GREGORIAN_DAYS_BEFORE_MONTH[(gm - 1) as usize];

    let mut jy = -EPOCH_YEAR_SHIFT + 33 * (days / DAYS_PER_33_YEARS);
    days %= DAYS_PER_33_YEARS;
    jy += 4 * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    if days < FIRST_HALF_DAYS {
        // Farvardin..Shahrivar, 31 days each.
        (jy, 1 + days / 31, 1 + days % 31)
    } else {
        // Mehr..Esfand, 30 days each; Esfand's 30th only exists in leap
        // years, which the caller enforces via `is_leap_year`.
        let rest = days - FIRST_HALF_DAYS;
        (jy, 7 + rest / 30, 1 + rest % 30)
    }
}

/// Converts a Jalali date to a Gregorian `(year, month, day)` triple.
///
/// `jm` is the 1-based Jalali month; the returned month is 1-based as well.
/// Composing with [`gregorian_to_jalali`] in either order is the identity over
/// the valid domain.
///
/// # Example
///
/// ```
/// use persian_calendar::jalali_to_gregorian;
///
/// assert_eq!((2024, 3, 20), jalali_to_gregorian(1403, 1, 1));
/// ```
pub fn jalali_to_gregorian(jy: i32, jm: i32, jd: i32) -> (i32, i32, i32) {
    let jy = jy + EPOCH_YEAR_SHIFT;
    let day_of_year = if jm < 7 {
        (jm - 1) * 31
    } else {
        (jm - 7) * 30 + FIRST_HALF_DAYS
    };
    let mut days =
        -EPOCH_SHIFT_J2G + 365 * jy + (jy / 33) * 8 + ((jy % 33) + 3) / 4 + jd + day_of_year;

    let mut gy = 400 * (days / DAYS_PER_400_YEARS);
    days %= DAYS_PER_400_YEARS;
    if days > DAYS_PER_100_YEARS {
        days -= 1;
        gy += 100 * (days / DAYS_PER_100_YEARS);
        days %= DAYS_PER_100_YEARS;
        // A century that is not a multiple of 400 has no leap day; undo the
        // decrement for the years past the first.
        if days >= 365 {
            days += 1;
        }
    }
    gy += 4 * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;
    if days > 365 {
        gy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let february = if is_gregorian_leap_year(gy) { 29 } else { 28 };
    let month_lengths = [0, 31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let mut gd = days + 1;
    let mut gm = 0usize;
    while gm < 13 && gd > month_lengths[gm] {
        gd -= month_lengths[gm];
        gm += 1;
    }
    (gy, gm as i32, gd)
}

/// Determines whether `year` is a leap year in the Persian calendar.
///
/// Years in the window covered by the verified table are answered exactly from
/// it; all other years fall back to the 33-year cycle approximation. The true
/// rule is astronomical (vernal equinox) and has no short closed form, so the
/// cycle answer can deviate from observation far outside the table window.
///
/// # Example
///
/// ```
/// use persian_calendar::is_leap_year;
///
/// assert!(is_leap_year(1403));
/// assert!(!is_leap_year(1404));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    if (LEAP_TABLE_FIRST..=LEAP_TABLE_LAST).contains(&year) {
        return LEAP_YEARS.binary_search(&year).is_ok();
    }
    matches!(year % 33, 1 | 5 | 9 | 13 | 17 | 22 | 26 | 30)
}

/// Determines whether `year` is a leap year in the Gregorian calendar.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
