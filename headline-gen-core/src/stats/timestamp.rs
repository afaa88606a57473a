use chrono::NaiveTime;

use crate::error::{Error, Result};

/// Layout of the leading time-of-day field.
const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// Extracts the date key of a `"HH:MM <date>"` timestamp.
///
/// The first space-delimited field must be a valid 24h time of day (a
/// one-digit hour is accepted). Everything after the first space is the
/// date key and is returned verbatim, so `"08:15 12 octubre 2022"` yields
/// `"12 octubre 2022"`. No locale-specific date parsing takes place.
///
/// # Errors
/// Returns [`Error::MalformedTimestamp`] if there is no space, if the first
/// field is not a time of day, or if the date key is blank.
pub fn date_key(timestamp: &str) -> Result<&str> {
	let malformed = || Error::MalformedTimestamp(timestamp.to_owned());

	let (time, date) = timestamp.split_once(' ').ok_or_else(malformed)?;
	NaiveTime::parse_from_str(time, TIME_OF_DAY_FORMAT).map_err(|_| malformed())?;
	if date.trim().is_empty() {
		return Err(malformed());
	}

	Ok(date)
}
