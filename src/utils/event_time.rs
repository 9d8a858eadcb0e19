// src/utils/event_time.rs
use std::fmt;

use serde::de::{self, Deserializer, Visitor};

/// Parse an elapsed match time into seconds.
///
/// Accepts an ISO-8601 duration (`PT1M30S`, `P1DT2H`, `PT0.5S`) or a clock
/// string (`MM:SS` or `HH:MM:SS`, with optional fractional seconds).
///
/// # Examples
///
/// ```
/// use blindstat_backend::utils::event_time::parse_elapsed;
///
/// assert_eq!(parse_elapsed("PT1M30S"), Ok(90.0));
/// assert_eq!(parse_elapsed("01:02:03.5"), Ok(3723.5));
/// assert!(parse_elapsed("soon").is_err());
/// ```
pub fn parse_elapsed(value: &str) -> Result<f64, String> {
    let value = value.trim();
    if let Some(rest) = value.strip_prefix(['P', 'p']) {
        parse_iso8601(rest)
    } else if value.contains(':') {
        parse_clock(value)
    } else {
        Err(format!("invalid duration '{}': expected seconds, ISO-8601 or HH:MM:SS", value))
    }
}

/// `deserialize_with` target for fields holding elapsed seconds.
///
/// Numbers are taken as seconds; strings go through [`parse_elapsed`].
pub fn deserialize_seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(SecondsVisitor)
}

struct SecondsVisitor;

impl<'de> Visitor<'de> for SecondsVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number of seconds, an ISO-8601 duration or an HH:MM:SS string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        parse_elapsed(v).map_err(E::custom)
    }
}

const DATE_UNITS: &[(char, f64)] = &[('W', 604_800.0), ('D', 86_400.0)];
const TIME_UNITS: &[(char, f64)] = &[('H', 3_600.0), ('M', 60.0), ('S', 1.0)];

// Everything after the leading `P`
fn parse_iso8601(rest: &str) -> Result<f64, String> {
    let invalid = || format!("invalid ISO-8601 duration 'P{}'", rest);

    let (date_part, time_part) = match rest.split_once(['T', 't']) {
        Some((date, time)) if !time.is_empty() => (date, Some(time)),
        Some(_) => return Err(invalid()),
        None => (rest, None),
    };

    let date = sum_components(date_part, DATE_UNITS).ok_or_else(invalid)?;
    let time = match time_part {
        Some(part) => sum_components(part, TIME_UNITS).ok_or_else(invalid)?,
        None => None,
    };

    match (date, time) {
        (None, None) => Err(invalid()),
        (date, time) => Ok(date.unwrap_or(0.0) + time.unwrap_or(0.0)),
    }
}

/// Sum `<number><unit>` components. Units must appear in the order of `units`,
/// each at most once. `Some(None)` means the part was empty.
fn sum_components(part: &str, units: &[(char, f64)]) -> Option<Option<f64>> {
    let mut total = None;
    let mut next_unit = 0;
    let mut number = String::new();

    for c in part.chars() {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            number.push(if c == ',' { '.' } else { c });
            continue;
        }

        let unit = c.to_ascii_uppercase();
        let offset = units[next_unit..].iter().position(|(u, _)| *u == unit)?;
        let (_, factor) = units[next_unit + offset];
        next_unit += offset + 1;

        let amount = parse_plain_number(&number)?;
        total = Some(total.unwrap_or(0.0) + amount * factor);
        number.clear();
    }

    // Trailing number without a unit
    if !number.is_empty() {
        return None;
    }
    Some(total)
}

fn parse_plain_number(number: &str) -> Option<f64> {
    if number.is_empty() || number.starts_with('.') || number.ends_with('.') {
        return None;
    }
    number.parse::<f64>().ok()
}

fn parse_clock(value: &str) -> Result<f64, String> {
    let invalid = || format!("invalid clock time '{}': expected MM:SS or HH:MM:SS", value);

    let fields: Vec<&str> = value.split(':').collect();
    let (hours, minutes, seconds) = match fields.as_slice() {
        [m, s] => ("0", *m, *s),
        [h, m, s] => (*h, *m, *s),
        _ => return Err(invalid()),
    };

    let hours = parse_whole(hours).ok_or_else(invalid)?;
    let minutes = parse_whole(minutes).ok_or_else(invalid)?;
    let seconds = parse_plain_number(seconds)
        .filter(|_| seconds.chars().all(|c| c.is_ascii_digit() || c == '.'))
        .ok_or_else(invalid)?;

    if minutes >= 60 || seconds >= 60.0 {
        return Err(invalid());
    }

    Ok(f64::from(hours) * 3_600.0 + f64::from(minutes) * 60.0 + seconds)
}

fn parse_whole(field: &str) -> Option<u32> {
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
