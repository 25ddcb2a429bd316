use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_IN_WEEK, INVALID_INPUT};
use crate::{CalendarDate, DateError};

/// Day of the week, numbered the way the packed-date interface expects:
/// zero-based starting at Monday, so Sunday is 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

/// Error type for weekday calculations over packed inputs.
///
/// Each of the four input validations has its own variant, so callers can
/// tell which input was rejected. The legacy [`weekday_code`] interface
/// collapses all of them into [`INVALID_INPUT`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekdayError {
    /// Target date failed packed-date validation.
    #[error("invalid target date: {0}")]
    InvalidTarget(#[source] DateError),

    /// Reference date failed packed-date validation.
    #[error("invalid reference date: {0}")]
    InvalidReference(#[source] DateError),

    /// The leap-year token must be strictly positive.
    #[error("invalid leap-year token: {value} (must be positive)")]
    NonPositiveLeapYear { value: i32 },

    /// The known weekday code must be in 0..=6.
    #[error("invalid weekday code: {value} (must be 0-6)")]
    WeekdayOutOfRange { value: i32 },
}

/// Weekdays in code order, for cyclic index arithmetic.
const WEEK: [Weekday; DAYS_IN_WEEK as usize] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Returns the zero-based code (Monday = 0 .. Sunday = 6)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// One step forward in the week; Sunday wraps to Monday.
    pub const fn succ(self) -> Self {
        match self {
            Self::Monday => Self::Tuesday,
            Self::Tuesday => Self::Wednesday,
            Self::Wednesday => Self::Thursday,
            Self::Thursday => Self::Friday,
            Self::Friday => Self::Saturday,
            Self::Saturday => Self::Sunday,
            Self::Sunday => Self::Monday,
        }
    }

    /// One step backward in the week; Monday wraps to Sunday.
    pub const fn pred(self) -> Self {
        match self {
            Self::Monday => Self::Sunday,
            Self::Tuesday => Self::Monday,
            Self::Wednesday => Self::Tuesday,
            Self::Thursday => Self::Wednesday,
            Self::Friday => Self::Thursday,
            Self::Saturday => Self::Friday,
            Self::Sunday => Self::Saturday,
        }
    }

    /// Walks `delta` days around the weekly cycle, in either direction.
    /// Equivalent to `delta` repeated [`succ`](Self::succ) or
    /// [`pred`](Self::pred) steps, computed in closed form.
    pub fn offset_by(self, delta: i64) -> Self {
        let index = (i64::from(self.index()) + delta).rem_euclid(i64::from(DAYS_IN_WEEK));
        WEEK[index as usize]
    }
}

impl TryFrom<i32> for Weekday {
    type Error = WeekdayError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Monday),
            1 => Ok(Self::Tuesday),
            2 => Ok(Self::Wednesday),
            3 => Ok(Self::Thursday),
            4 => Ok(Self::Friday),
            5 => Ok(Self::Saturday),
            6 => Ok(Self::Sunday),
            _ => Err(WeekdayError::WeekdayOutOfRange { value }),
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = WeekdayError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i32::from(value))
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.index()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

/// A leap-year context value, required to be strictly positive.
///
/// The weekday arithmetic never reads it: real leap-year handling happens in
/// the calendar day counting. Positivity is its entire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeapYearToken(NonZeroU32);

impl LeapYearToken {
    /// Creates a new token, validating that the value is positive.
    ///
    /// # Errors
    /// Returns `WeekdayError::NonPositiveLeapYear` if the value is 0 or
    /// negative.
    pub fn new(value: i32) -> Result<Self, WeekdayError> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(WeekdayError::NonPositiveLeapYear { value })
    }

    /// Returns the token value as u32
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<i32> for LeapYearToken {
    type Error = WeekdayError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Computes the weekday of `target`, given that `reference` falls on `known`.
///
/// Pure cyclic arithmetic over the signed day count between the two dates;
/// when they are equal the result is `known` unchanged. Which date plays the
/// reference role does not matter: walking forward from one is consistent
/// with walking backward from the other.
pub fn weekday_of(target: CalendarDate, reference: CalendarDate, known: Weekday) -> Weekday {
    known.offset_by(reference.days_until(&target))
}

/// Validates packed inputs and computes the weekday of `target`.
///
/// Inputs are checked in a fixed order before any arithmetic: target date,
/// reference date, leap-year token, weekday code. The first failure is
/// returned.
///
/// # Errors
/// Returns the [`WeekdayError`] variant describing the rejected input.
pub fn weekday_from_packed(
    target: i32,
    leap_year: i32,
    reference: i32,
    known_weekday: i32,
) -> Result<Weekday, WeekdayError> {
    let target = CalendarDate::from_packed(target).map_err(WeekdayError::InvalidTarget)?;
    let reference = CalendarDate::from_packed(reference).map_err(WeekdayError::InvalidReference)?;
    let _token = LeapYearToken::new(leap_year)?;
    let known = Weekday::try_from(known_weekday)?;
    Ok(weekday_of(target, reference, known))
}

/// Legacy interface over [`weekday_from_packed`]: returns the weekday code
/// in `0..=6`, or [`INVALID_INPUT`] when any of the four inputs is rejected.
/// All failure kinds collapse into the one sentinel; use
/// [`weekday_from_packed`] to distinguish them. Never panics.
pub fn weekday_code(target: i32, leap_year: i32, reference: i32, known_weekday: i32) -> i32 {
    match weekday_from_packed(target, leap_year, reference, known_weekday) {
        Ok(day) => i32::from(day.index()),
        Err(_) => INVALID_INPUT,
    }
}
