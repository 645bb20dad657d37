mod consts;
mod prelude;
pub mod shell;
mod types;

pub use consts::*;
pub use shell::InputError;
pub use types::{DayCode, Weekday};

use crate::prelude::*;

/// A day code outside `1..=7`, carrying the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "Invalid day code: {} (must be {}-{})", "_0", MIN_DAY_CODE, MAX_DAY_CODE)]
pub struct InvalidCode(pub i64);

impl std::error::Error for InvalidCode {}

/// A string that names no weekday.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "Unknown weekday: {_0:?}")]
pub struct UnknownWeekday(pub String);

impl std::error::Error for UnknownWeekday {}

/// Resolves a day code to its weekday.
///
/// The mapping is fixed: 1 is Sunday, 2 is Monday, and so on up to 7 for
/// Saturday. Any other integer is rejected.
///
/// # Errors
/// Returns `InvalidCode` if `code` is outside `1..=7`.
pub fn resolve(code: i64) -> Result<Weekday, InvalidCode> {
    let resolved = DayCode::new(code).map(Weekday::from);
    match &resolved {
        Ok(day) => log::debug!("resolved day code {code} to {day}"),
        Err(err) => log::debug!("rejected day code: {err}"),
    }
    resolved
}
