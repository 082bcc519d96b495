/// Natural-language date parsing
///
/// Understands the phrases people type into date conditions:
/// - `now`, `today`, `yesterday`, `tomorrow`
/// - `3 days ago`, `2 weeks ago`, `in 1 month`, `in 2 years`
/// - ISO dates (`2024-01-05`), RFC 3339 timestamps, US dates (`01/05/2024`)
/// - day-note titles (`January 5th, 2024`)
///
/// Dates without a time of day resolve to midnight UTC.
use chrono::{DateTime, Days, Month, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use super::{DateParser, HostError};

lazy_static! {
    static ref RELATIVE_PAST: Regex =
        Regex::new(r"(?i)^(\d+)\s+(day|week|month|year)s?\s+ago$").unwrap();
    static ref RELATIVE_FUTURE: Regex =
        Regex::new(r"(?i)^in\s+(\d+)\s+(day|week|month|year)s?$").unwrap();
    static ref DAY_NOTE_TITLE: Regex =
        Regex::new(r"(?i)^([a-z]+)\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "day" => Some(Unit::Day),
            "week" => Some(Unit::Week),
            "month" => Some(Unit::Month),
            "year" => Some(Unit::Year),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NaturalDateParser {
    /// Fixed "now" for relative phrases; the wall clock when unset.
    reference: Option<DateTime<Utc>>,
}

impl NaturalDateParser {
    pub fn new() -> Self {
        Self { reference: None }
    }

    pub fn with_reference(reference: DateTime<Utc>) -> Self {
        Self {
            reference: Some(reference),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.reference.unwrap_or_else(Utc::now)
    }
}

impl DateParser for NaturalDateParser {
    fn parse(&self, text: &str) -> Result<DateTime<Utc>, HostError> {
        let trimmed = text.trim();
        let now = self.now();
        let today = now.date_naive();

        match trimmed.to_lowercase().as_str() {
            "now" => return Ok(now),
            "today" => return Ok(midnight(today)),
            "yesterday" => return shift(text, today, -1, Unit::Day),
            "tomorrow" => return shift(text, today, 1, Unit::Day),
            _ => {}
        }

        if let Some(caps) = RELATIVE_PAST.captures(trimmed) {
            let (amount, unit) = relative_parts(text, &caps[1], &caps[2])?;
            return shift(text, today, -amount, unit);
        }
        if let Some(caps) = RELATIVE_FUTURE.captures(trimmed) {
            let (amount, unit) = relative_parts(text, &caps[1], &caps[2])?;
            return shift(text, today, amount, unit);
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(instant.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%d", "%m/%d/%Y"] {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Ok(midnight(date));
            }
        }

        if let Some(caps) = DAY_NOTE_TITLE.captures(trimmed) {
            let month = caps[1]
                .parse::<Month>()
                .map_err(|_| HostError::date_parse(text, format!("unknown month '{}'", &caps[1])))?;
            let day: u32 = caps[2]
                .parse()
                .map_err(|_| HostError::date_parse(text, "invalid day"))?;
            let year: i32 = caps[3]
                .parse()
                .map_err(|_| HostError::date_parse(text, "invalid year"))?;
            return NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
                .map(midnight)
                .ok_or_else(|| HostError::date_parse(text, "day out of range for month"));
        }

        Err(HostError::date_parse(text, "unrecognized date expression"))
    }
}

fn relative_parts(text: &str, amount: &str, unit: &str) -> Result<(i64, Unit), HostError> {
    let amount: i64 = amount
        .parse()
        .map_err(|_| HostError::date_parse(text, "amount out of range"))?;
    let unit =
        Unit::parse(unit).ok_or_else(|| HostError::date_parse(text, "unknown unit"))?;
    Ok((amount, unit))
}

fn shift(text: &str, from: NaiveDate, amount: i64, unit: Unit) -> Result<DateTime<Utc>, HostError> {
    let magnitude = amount.unsigned_abs();
    let shifted = match unit {
        Unit::Day | Unit::Week => {
            let days = if unit == Unit::Week {
                magnitude.checked_mul(7)
            } else {
                Some(magnitude)
            };
            days.map(Days::new).and_then(|days| {
                if amount < 0 {
                    from.checked_sub_days(days)
                } else {
                    from.checked_add_days(days)
                }
            })
        }
        Unit::Month | Unit::Year => {
            let months = if unit == Unit::Year {
                magnitude.checked_mul(12)
            } else {
                Some(magnitude)
            };
            months
                .and_then(|m| u32::try_from(m).ok())
                .map(Months::new)
                .and_then(|months| {
                    if amount < 0 {
                        from.checked_sub_months(months)
                    } else {
                        from.checked_add_months(months)
                    }
                })
        }
    };
    shifted
        .map(midnight)
        .ok_or_else(|| HostError::date_parse(text, "date out of range"))
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}
