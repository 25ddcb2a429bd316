/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Minimum valid year: the packed form reserves exactly four digits for it
pub const MIN_YEAR: u16 = 1000;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Years in one Gregorian era (the calendar repeats every 400 years)
pub(crate) const YEARS_PER_ERA: i64 = 400;
/// Days in one Gregorian era
pub(crate) const DAYS_PER_ERA: i64 = 146_097;

/// Number of decimal digits in the packed `YYYYMMDD` date form
pub const PACKED_DIGITS: u32 = 8;

/// Smallest integer whose decimal form has exactly eight digits
pub(crate) const MIN_PACKED: i32 = 10_000_000;
/// Largest integer whose decimal form has exactly eight digits
pub(crate) const MAX_PACKED: i32 = 99_999_999;

/// Divisor isolating the year field of a packed date
pub(crate) const PACKED_YEAR_BASE: i32 = 10_000;
/// Divisor isolating the month and day fields of a packed date
pub(crate) const PACKED_FIELD_BASE: i32 = 100;

/// Length of the weekly cycle
pub const DAYS_IN_WEEK: u8 = 7;

/// Sentinel returned by the legacy interface for any rejected input
pub const INVALID_INPUT: i32 = -1;
