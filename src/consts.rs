/// Lowest valid day code (Sunday)
pub const MIN_DAY_CODE: u8 = 1;

/// Highest valid day code (Saturday)
pub const MAX_DAY_CODE: u8 = 7;

/// Number of days in a week
pub const DAYS_IN_WEEK: usize = 7;

/// Weekday labels indexed by day code (index 0 is unused, codes are 1-indexed)
pub const WEEKDAY_LABELS: [&str; DAYS_IN_WEEK + 1] = [
    "",          // index 0 unused (codes are 1-indexed)
    "Sunday",    // 1
    "Monday",    // 2
    "Tuesday",   // 3
    "Wednesday", // 4
    "Thursday",  // 5
    "Friday",    // 6
    "Saturday",  // 7
];

/// Length of the abbreviated weekday form accepted when parsing ("Wed")
pub(crate) const ABBREVIATION_LEN: usize = 3;

/// Prompt written before reading a day code from standard input
pub const PROMPT: &str = "Enter a number (1-7) corresponding to the day of the week: ";

/// Message written for any input that does not resolve to a weekday
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter a number between 1 and 7.";
