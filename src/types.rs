use crate::consts::{ABBREVIATION_LEN, DAYS_IN_WEEK, MAX_DAY_CODE, MIN_DAY_CODE, WEEKDAY_LABELS};
use crate::prelude::*;
use crate::{InvalidCode, UnknownWeekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A day code guaranteed to be in the range `MIN_DAY_CODE..=MAX_DAY_CODE` (1..=7)
/// Uses `NonZeroU8` internally, so 0 is not a valid code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DayCode(NonZeroU8);

impl DayCode {
    /// Creates a new `DayCode`, validating that it lies in `1..=7`
    ///
    /// # Errors
    /// Returns `InvalidCode` carrying the rejected value if it is outside `1..=7`.
    pub fn new(value: i64) -> Result<Self, InvalidCode> {
        let byte = u8::try_from(value).map_err(|_| InvalidCode(value))?;
        let non_zero = NonZeroU8::new(byte).ok_or(InvalidCode(value))?;
        if byte > MAX_DAY_CODE {
            return Err(InvalidCode(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the code value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<i64> for DayCode {
    type Error = InvalidCode;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayCode> for u8 {
    fn from(code: DayCode) -> Self {
        code.0.get()
    }
}

impl From<DayCode> for i64 {
    fn from(code: DayCode) -> Self {
        Self::from(code.0.get())
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the seven weekday labels, in week order starting from Sunday.
///
/// Discriminants match the day code of each weekday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday = 1,
    #[display(fmt = "Monday")]
    Monday = 2,
    #[display(fmt = "Tuesday")]
    Tuesday = 3,
    #[display(fmt = "Wednesday")]
    Wednesday = 4,
    #[display(fmt = "Thursday")]
    Thursday = 5,
    #[display(fmt = "Friday")]
    Friday = 6,
    #[display(fmt = "Saturday")]
    Saturday = 7,
}

impl Weekday {
    /// All weekdays in code order
    pub const ALL: [Self; DAYS_IN_WEEK] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday name, e.g. `"Wednesday"`
    #[inline]
    pub const fn label(self) -> &'static str {
        WEEKDAY_LABELS[self as usize]
    }

    /// Returns the day code this weekday is selected by
    pub const fn code(self) -> DayCode {
        DayCode(NonZeroU8::MIN.saturating_add(self as u8 - MIN_DAY_CODE))
    }
}

impl From<DayCode> for Weekday {
    fn from(code: DayCode) -> Self {
        debug_assert!(code.get() >= MIN_DAY_CODE && code.get() <= MAX_DAY_CODE);
        Self::ALL[usize::from(code.get() - MIN_DAY_CODE)]
    }
}

impl From<Weekday> for DayCode {
    fn from(day: Weekday) -> Self {
        day.code()
    }
}

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    /// Parses a weekday name, ignoring case. Three-letter abbreviations
    /// ("sun", "Mon", ...) are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| {
                let label = day.label().to_ascii_lowercase();
                needle == label || needle == label[..ABBREVIATION_LEN]
            })
            .ok_or_else(|| UnknownWeekday(s.to_owned()))
    }
}
