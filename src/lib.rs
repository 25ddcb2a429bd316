mod consts;
mod prelude;
mod types;
mod weekday;

pub use consts::*;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use weekday::{
    LeapYearToken, Weekday, WeekdayError, weekday_code, weekday_from_packed, weekday_of,
};

use crate::prelude::*;
use std::str::FromStr;

/// A fully validated Gregorian calendar date.
/// Built from the packed eight-digit `YYYYMMDD` integer form
/// (e.g. `20160928` = September 28, 2016) and displayed the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}{:02}{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid packed date: {} (must have exactly {} digits)", "_0", PACKED_DIGITS)]
    WrongLength(i32),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Creates a date from its components, validating each one.
    ///
    /// # Errors
    /// Returns the `DateError` of the first component that fails validation.
    pub fn from_parts(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = types::Year::new(year)?;
        let month_t = types::Month::new(month)?;
        let day_t = types::Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Creates a date from the packed `YYYYMMDD` integer form.
    ///
    /// The decimal representation must have exactly eight digits: shorter
    /// values (e.g. `2010101`) would decode to a different, earlier date and
    /// are rejected, as are longer values, zero, and negatives.
    ///
    /// # Errors
    /// Returns `DateError::WrongLength` for a non-eight-digit value, or the
    /// component error for an impossible month or day.
    pub fn from_packed(packed: i32) -> Result<Self, DateError> {
        if !(MIN_PACKED..=MAX_PACKED).contains(&packed) {
            return Err(DateError::WrongLength(packed));
        }
        let year = packed / PACKED_YEAR_BASE;
        let month = (packed / PACKED_FIELD_BASE) % PACKED_FIELD_BASE;
        let day = packed % PACKED_FIELD_BASE;
        Self::from_parts(year as u16, month as u8, day as u8)
    }

    /// Returns the packed `YYYYMMDD` integer form of this date.
    pub fn to_packed(&self) -> i32 {
        i32::from(self.year.get()) * PACKED_YEAR_BASE
            + i32::from(self.month.get()) * PACKED_FIELD_BASE
            + i32::from(self.day.get())
    }

    /// Returns the year (1000..=9999)
    pub fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    pub fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day within the month (1..=31)
    pub fn day(&self) -> u8 {
        self.day.get()
    }

    /// Signed count of days since the civil epoch 0000-03-01, using
    /// era-based Gregorian arithmetic. Only differences between two
    /// day numbers are meaningful.
    pub fn day_number(&self) -> i64 {
        let mut y = i64::from(self.year.get());
        let m = i64::from(self.month.get());
        let d = i64::from(self.day.get());
        // The era year starts in March so leap days land at year end
        if m <= i64::from(FEBRUARY) {
            y -= 1;
        }
        let era = y / YEARS_PER_ERA;
        let year_of_era = y - era * YEARS_PER_ERA;
        let month_shifted = (m + 9) % 12; // March = 0 .. February = 11
        let day_of_year = (153 * month_shifted + 2) / 5 + d - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
        era * DAYS_PER_ERA + day_of_era
    }

    /// Signed number of calendar days from this date to `other`;
    /// positive when `other` is later, zero when the dates are equal.
    pub fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }
        // Digits only, so a leading zero fails the length rule exactly as
        // the equivalent integer would
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }
        let packed = trimmed
            .parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(trimmed.to_owned()))?;
        Self::from_packed(packed)
    }
}

impl TryFrom<i32> for CalendarDate {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_packed(value)
    }
}

impl From<CalendarDate> for i32 {
    fn from(date: CalendarDate) -> Self {
        date.to_packed()
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
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
    fn test_from_packed_valid() {
        let date = CalendarDate::from_packed(20160928).unwrap();
        assert_eq!(date.year(), 2016);
        assert_eq!(date.month(), 9);
        assert_eq!(date.day(), 28);
    }

    #[test]
    fn test_from_packed_too_short() {
        // Seven digits decode to year 201, a different date entirely
        let result = CalendarDate::from_packed(2010101);
        assert!(matches!(result, Err(DateError::WrongLength(2010101))));
    }

    #[test]
    fn test_from_packed_too_long() {
        let result = CalendarDate::from_packed(100000101);
        assert!(matches!(result, Err(DateError::WrongLength(100000101))));
    }

    #[test]
    fn test_from_packed_zero_and_negative() {
        assert!(matches!(
            CalendarDate::from_packed(0),
            Err(DateError::WrongLength(0))
        ));
        assert!(matches!(
            CalendarDate::from_packed(-20160928),
            Err(DateError::WrongLength(-20160928))
        ));
    }

    #[test]
    fn test_from_packed_invalid_month() {
        let result = CalendarDate::from_packed(20161301);
        assert!(matches!(result, Err(DateError::InvalidMonth(13))));

        let result = CalendarDate::from_packed(20160001);
        assert!(matches!(result, Err(DateError::InvalidMonth(0))));
    }

    #[test]
    fn test_from_packed_invalid_day() {
        let result = CalendarDate::from_packed(20160932);
        assert!(matches!(result, Err(DateError::InvalidDay { .. })));

        let result = CalendarDate::from_packed(20160900);
        assert!(matches!(result, Err(DateError::InvalidDay { .. })));
    }

    #[test]
    fn test_from_packed_leap_day() {
        // 2016 is a leap year, 2015 is not
        assert!(CalendarDate::from_packed(20160229).is_ok());
        assert!(matches!(
            CalendarDate::from_packed(20150229),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_from_packed_century_rule() {
        // 1900 is not a leap year (divisible by 100 but not 400)
        assert!(CalendarDate::from_packed(19000229).is_err());
        // 2000 is a leap year (divisible by 400)
        assert!(CalendarDate::from_packed(20000229).is_ok());
    }

    #[test]
    fn test_from_parts_validation_order() {
        assert!(matches!(
            CalendarDate::from_parts(999, 1, 1),
            Err(DateError::InvalidYear(999))
        ));
        assert!(matches!(
            CalendarDate::from_parts(2016, 13, 1),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            CalendarDate::from_parts(2016, 2, 30),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_to_packed_round_trip() {
        for packed in [20160101, 20160229, 20161231, 10000101, 99991231] {
            let date = CalendarDate::from_packed(packed).unwrap();
            assert_eq!(date.to_packed(), packed);
        }
    }

    #[test]
    fn test_parse_valid() {
        let date = "20160928".parse::<CalendarDate>().unwrap();
        assert_eq!(date.to_packed(), 20160928);

        let date = " 20160928 ".parse::<CalendarDate>().unwrap();
        assert_eq!(date.to_packed(), 20160928);
    }

    #[test]
    fn test_parse_leading_zero_rejected() {
        // "09990101" has eight characters but decodes to a seven-digit value
        let result = "09990101".parse::<CalendarDate>();
        assert!(matches!(result, Err(DateError::WrongLength(9990101))));
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            "".parse::<CalendarDate>(),
            Err(DateError::EmptyInput)
        ));
        assert!(matches!(
            "   ".parse::<CalendarDate>(),
            Err(DateError::EmptyInput)
        ));
    }

    #[test]
    fn test_parse_bad_tokens() {
        let result = "2016-09-28".parse::<CalendarDate>();
        assert!(matches!(result, Err(DateError::InvalidFormat(_))));

        let result = "2016092A".parse::<CalendarDate>();
        assert!(matches!(result, Err(DateError::InvalidFormat(_))));

        let result = "-20160928".parse::<CalendarDate>();
        assert!(matches!(result, Err(DateError::InvalidFormat(_))));
    }

    #[test]
    fn test_display() {
        let date = CalendarDate::from_packed(20160928).unwrap();
        assert_eq!(date.to_string(), "20160928");

        let date = CalendarDate::from_packed(10000101).unwrap();
        assert_eq!(date.to_string(), "10000101");
    }

    #[test]
    fn test_try_from_and_into() {
        let date: CalendarDate = 20160928.try_into().unwrap();
        assert_eq!(date.year(), 2016);

        let packed: i32 = date.into();
        assert_eq!(packed, 20160928);

        let result: Result<CalendarDate, _> = 2010101.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_ordering() {
        let a = CalendarDate::from_packed(20160831).unwrap();
        let b = CalendarDate::from_packed(20160901).unwrap();
        let c = CalendarDate::from_packed(20170101).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a, CalendarDate::from_packed(20160831).unwrap());
    }

    #[test]
    fn test_day_number_epoch() {
        // Known value: 1970-01-01 is day 719468 of the civil epoch
        let epoch = CalendarDate::from_parts(1970, 1, 1).unwrap();
        assert_eq!(epoch.day_number(), 719_468);
    }

    #[test]
    fn test_days_until_same_month() {
        let reference = CalendarDate::from_packed(20160901).unwrap();
        let target = CalendarDate::from_packed(20160928).unwrap();
        assert_eq!(reference.days_until(&target), 27);
        assert_eq!(target.days_until(&reference), -27);
        assert_eq!(reference.days_until(&reference), 0);
    }

    #[test]
    fn test_days_until_across_months() {
        let reference = CalendarDate::from_packed(20160901).unwrap();
        let target = CalendarDate::from_packed(20161005).unwrap();
        assert_eq!(reference.days_until(&target), 34);

        let earlier = CalendarDate::from_packed(20160807).unwrap();
        assert_eq!(reference.days_until(&earlier), -25);
    }

    #[test]
    fn test_days_until_across_leap_day() {
        // 2016 is a leap year, so February 29 sits between these two
        let before = CalendarDate::from_packed(20160228).unwrap();
        let after = CalendarDate::from_packed(20160301).unwrap();
        assert_eq!(before.days_until(&after), 2);

        // 1900 is not, despite being divisible by 4
        let before = CalendarDate::from_packed(19000228).unwrap();
        let after = CalendarDate::from_packed(19000301).unwrap();
        assert_eq!(before.days_until(&after), 1);
    }

    #[test]
    fn test_days_until_across_years() {
        let reference = CalendarDate::from_packed(20151231).unwrap();
        let target = CalendarDate::from_packed(20160101).unwrap();
        assert_eq!(reference.days_until(&target), 1);

        // Full leap year
        let start = CalendarDate::from_packed(20160101).unwrap();
        let end = CalendarDate::from_packed(20170101).unwrap();
        assert_eq!(start.days_until(&end), 366);

        // Full non-leap year
        let start = CalendarDate::from_packed(20150101).unwrap();
        let end = CalendarDate::from_packed(20160101).unwrap();
        assert_eq!(start.days_until(&end), 365);
    }

    #[test]
    fn test_serde() {
        let date = CalendarDate::from_packed(20160928).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""20160928""#);

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // Invalid month should be rejected
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""20161301""#);
        assert!(result.is_err());

        // Seven-digit form should be rejected
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2010101""#);
        assert!(result.is_err());

        // Valid date should succeed
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""20160229""#);
        assert!(result.is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = CalendarDate::from_packed(2010101).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid packed date: 2010101 (must have exactly 8 digits)"
        );

        let err = CalendarDate::from_packed(20161301).unwrap_err();
        assert_eq!(err.to_string(), "Invalid month: 13 (must be 1-12)");

        let err = CalendarDate::from_packed(20150229).unwrap_err();
        assert_eq!(err.to_string(), "Invalid day 29 for month 2015-02");
    }
}
