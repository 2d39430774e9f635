//! Parsing of user-supplied latitude and longitude strings.
//!
//! Accepted forms, with an optional hemisphere letter or sign on either
//! end: plain decimal degrees (`51.5`, `N51.5°`), degrees and decimal
//! minutes (`51°30′`), and degrees, minutes and decimal seconds
//! (`51°30′15″`). ASCII `'` and `"` work in place of the prime marks.
//! `S` and `W` negate the magnitude. Results are rounded to five decimal
//! places, the precision the data tree stores.

use anyhow::{Result, bail};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	static ref DEGREES: Regex = Regex::new(r"^([0-9.]+)\s*°?$").unwrap();
	static ref DEGREES_MINUTES: Regex = Regex::new(r"^([0-9]+)\s*°\s*([0-9.]+)\s*[′']?\s*$").unwrap();
	static ref DEGREES_MINUTES_SECONDS: Regex =
		Regex::new("^([0-9]+)\\s*°\\s*([0-9]+)\\s*[′']\\s*([0-9.]+)\\s*[″\"]?\\s*$").unwrap();
}

/// Parse a latitude; `N`/`+` keep the sign, `S`/`-` negate.
pub fn parse_latitude(text: &str) -> Result<f64> {
	angle_to_float(text, &['N', '+'], &['S', '-'])
}

/// Parse a longitude; `E`/`+` keep the sign, `W`/`-` negate.
pub fn parse_longitude(text: &str) -> Result<f64> {
	angle_to_float(text, &['E', '+'], &['W', '-'])
}

/// Render a latitude in the hemisphere-letter export form, e.g. `N51.5`.
#[must_use]
pub fn format_latitude(latitude: f64) -> String {
	format_angle(latitude, 'N', 'S')
}

/// Render a longitude in the hemisphere-letter export form, e.g. `W0.1`.
#[must_use]
pub fn format_longitude(longitude: f64) -> String {
	format_angle(longitude, 'E', 'W')
}

fn format_angle(value: f64, positive: char, negative: char) -> String {
	if value < 0.0 {
		format!("{negative}{}", -value)
	} else {
		format!("{positive}{value}")
	}
}

/// Round to the five decimal places stored in the tree (about 1 m).
#[must_use]
pub fn round_coordinate(value: f64) -> f64 {
	(value * 100_000.0).round() / 100_000.0
}

fn angle_to_float(text: &str, positive: &[char], negative: &[char]) -> Result<f64> {
	let angle = text.trim().trim_matches(|c| positive.contains(&c));
	let stripped = angle.trim_matches(|c| negative.contains(&c));
	let sign = if stripped == angle { 1.0 } else { -1.0 };
	let angle = stripped.trim();

	let magnitude = if let Some(capture) = DEGREES.captures(angle) {
		number(&capture[1])?
	} else if let Some(capture) = DEGREES_MINUTES.captures(angle) {
		number(&capture[1])? + number(&capture[2])? / 60.0
	} else if let Some(capture) = DEGREES_MINUTES_SECONDS.captures(angle) {
		number(&capture[1])? + number(&capture[2])? / 60.0 + number(&capture[3])? / 3600.0
	} else {
		bail!("the angle '{text}' is not recognised");
	};

	Ok(round_coordinate(sign * magnitude))
}

fn number(digits: &str) -> Result<f64> {
	// The character class admits strings like "1.2.3"; reject them here.
	digits
		.parse::<f64>()
		.map_err(|_| anyhow::anyhow!("'{digits}' is not a number"))
}
