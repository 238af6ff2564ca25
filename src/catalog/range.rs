use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RangeError {
    #[error("range must be two numbers separated by a '-'")]
    NotAPair,
    #[error("range must be 'month-month'")]
    NotAMonthPair,
    #[error("{0} in range was not an int")]
    NotAnInt(String),
    #[error("{0} is out of range 0-{1}")]
    OutOfRange(u32, u32),
    #[error("couldn't find month {0}")]
    UnknownMonth(String),
}

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Inclusive range from `min` to `max` that wraps past `modulus` back to 0.
pub fn range_nums(min: u32, max: u32, modulus: u32) -> Vec<u32> {
    let max = if max < min { max + modulus } else { max };
    (min..=max).map(|n| n % modulus).collect()
}

/// Parses `"a-b"` into the wrapping range of ints, e.g. `"22-4"` over 24 hours.
pub fn range_string(r: &str, modulus: u32) -> Result<Vec<u32>, RangeError> {
    let (min, max) = r.trim().split_once('-').ok_or(RangeError::NotAPair)?;
    if max.contains('-') {
        return Err(RangeError::NotAPair);
    }

    let min = parse_bound(min, modulus)?;
    let max = parse_bound(max, modulus)?;
    Ok(range_nums(min, max, modulus))
}

fn parse_bound(s: &str, modulus: u32) -> Result<u32, RangeError> {
    let n: u32 = s
        .trim()
        .parse()
        .map_err(|_| RangeError::NotAnInt(s.trim().to_string()))?;
    if n >= modulus {
        return Err(RangeError::OutOfRange(n, modulus - 1));
    }
    Ok(n)
}

/// Parses a month range such as `"mar-Sept"` or `"dec-February"` into 0-based
/// month numbers. Only the first three letters of each side matter.
pub fn range_months(r: &str) -> Result<Vec<u32>, RangeError> {
    let (min, max) = r.trim().split_once('-').ok_or(RangeError::NotAMonthPair)?;
    if max.contains('-') {
        return Err(RangeError::NotAMonthPair);
    }
    Ok(range_nums(month_number(min)?, month_number(max)?, 12))
}

pub fn month_number(name: &str) -> Result<u32, RangeError> {
    let name = name.trim().to_lowercase();
    let prefix: String = name.chars().take(3).collect();
    MONTHS
        .iter()
        .position(|m| *m == prefix)
        .map(|i| i as u32)
        .ok_or(RangeError::UnknownMonth(prefix))
}

pub fn all_hours() -> Vec<u32> {
    (0..24).collect()
}

pub fn all_months() -> Vec<u32> {
    (0..12).collect()
}
