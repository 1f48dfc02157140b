use crate::error::ExtractError;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `GMT` + `YYYYMMDD` + `-` + `HHMMSS`. Only the date group is captured.
static GMT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GMT([0-9]{8})-[0-9]{6}").unwrap());

/// Capture date recovered from a recording's filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedTimestamp {
    date: NaiveDate,
}

impl ParsedTimestamp {
    /// The date as `YYYY-MM-DD`, the form used in output names.
    pub fn date_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParsedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

/// Find the first GMT token in `file_name` and parse its date group.
///
/// Returns [`ExtractError::NotFound`] when the name carries no token at all;
/// such files are expected to be left alone by the caller. A token whose
/// digits don't form a Gregorian date yields [`ExtractError::InvalidDate`].
pub fn extract(file_name: &str) -> Result<ParsedTimestamp, ExtractError> {
    let captures = GMT_TOKEN
        .captures(file_name)
        .ok_or(ExtractError::NotFound)?;
    let token = &captures[1];

    parse_yyyymmdd(token)
        .map(|date| ParsedTimestamp { date })
        .ok_or_else(|| ExtractError::InvalidDate {
            token: token.to_string(),
        })
}

fn parse_yyyymmdd(digits: &str) -> Option<NaiveDate> {
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year = digits[0..4].parse::<i32>().ok()?;
    let month = digits[4..6].parse::<u32>().ok()?;
    let day = digits[6..8].parse::<u32>().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
