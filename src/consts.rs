use chrono::Weekday;

/// First day of the Persian week.
pub const FIRST_DAY_OF_WEEK: Weekday = Weekday::Sat;

/// The weekly holiday in the Persian calendar.
pub const WEEKDAY_HOLIDAY: Weekday = Weekday::Fri;

/// A Persian month never spans more than 6 distinct weeks.
pub const MAX_WEEKS_IN_MONTH: u32 = 6;

/// Delimiter used by short dates and by parsing when none is detected.
pub const DEFAULT_DATE_DELIMITER: char = '/';

/// Secondary delimiter accepted by the parser (ISO style).
pub const ISO_DATE_DELIMITER: char = '-';

/// Persian month names, indexed by 0-based month (Farvardin through Esfand).
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Transliterated month names, indexed by 0-based month.
pub const MONTH_NAMES_EN: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Persian weekday names, Sunday-first (the weekday numbering is shared with
/// the Gregorian calendar).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "یک‌شنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنج‌شنبه",
    "جمعه",
    "شنبه",
];

/// Single-letter Persian weekday names, Sunday-first.
pub const WEEKDAY_NAMES_SHORT: [&str; 7] = ["ی", "د", "س", "چ", "پ", "ج", "ش"];

/// English weekday names, Sunday-first.
pub const WEEKDAY_NAMES_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Abbreviated English weekday names, Sunday-first.
pub const WEEKDAY_NAMES_SHORT_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Persian (Shamsi) leap years from 1201 to 1597, from verified astronomical
/// data rather than a closed formula. The exact-lookup window is
/// [`LEAP_TABLE_FIRST`]`..=`[`LEAP_TABLE_LAST`]; outside it the 33-year cycle
/// approximation applies. Sorted ascending for binary search.
pub(crate) const LEAP_YEARS: [i32; 97] = [
    1201, 1205, //
    1210, 1214, 1218, 1222, 1226, 1230, 1234, 1238, 1243, //
    1247, 1251, 1255, 1259, 1263, 1267, 1271, 1276, //
    1280, 1284, 1288, 1292, 1296, 1300, 1304, 1309, //
    1313, 1317, 1321, 1325, 1329, 1333, 1337, 1342, //
    1346, 1350, 1354, 1358, 1362, 1366, 1370, 1375, //
    1379, 1383, 1387, 1391, 1395, 1399, 1403, 1408, //
    1412, 1416, 1420, 1424, 1428, 1432, 1436, 1441, //
    1445, 1449, 1453, 1457, 1461, 1465, 1469, 1474, //
    1478, 1482, 1486, 1490, 1494, 1498, //
    1502, 1507, 1511, 1515, 1519, 1523, 1527, 1531, 1535, 1540, 1544, 1548, //
    1552, 1556, 1560, 1564, 1568, 1573, 1577, 1581, 1585, 1589, 1593, 1597,
];

/// First year answered from the leap-year table.
pub(crate) const LEAP_TABLE_FIRST: i32 = 1200;

/// Last year answered from the leap-year table.
pub(crate) const LEAP_TABLE_LAST: i32 = 1500;

/// Day-count offset aligning the Gregorian day index with the Jalali epoch.
pub(crate) const EPOCH_SHIFT_G2J: i32 = 355_666;

/// Day-count offset for the inverse transform. Calibrated independently of
/// [`EPOCH_SHIFT_G2J`]; the two differ by two days.
pub(crate) const EPOCH_SHIFT_J2G: i32 = 355_668;

/// Year shift applied to the Jalali year before day counting.
pub(crate) const EPOCH_YEAR_SHIFT: i32 = 1595;

/// Days in a 33-year Jalali sub-cycle (8 leap years).
pub(crate) const DAYS_PER_33_YEARS: i32 = 12_053;

/// Days in a 4-year block (one leap day).
pub(crate) const DAYS_PER_4_YEARS: i32 = 1_461;

/// Days in the 400-year Gregorian cycle.
pub(crate) const DAYS_PER_400_YEARS: i32 = 146_097;

/// Days in a 100-year Gregorian cycle without the quadricentennial leap day.
pub(crate) const DAYS_PER_100_YEARS: i32 = 36_524;

/// Day of year at which the 31-day Jalali months give way to 30-day months.
pub(crate) const FIRST_HALF_DAYS: i32 = 186;

/// Cumulative days before each Gregorian month in a non-leap year, indexed by
/// 0-based month. Leap days are absorbed by the year-based leap-day terms.
pub(crate) const GREGORIAN_DAYS_BEFORE_MONTH: [i32; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
