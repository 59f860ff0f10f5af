//! What makes a submission acceptable.
//!
//! Both checks trim surrounding whitespace first, byte order marks included. The name only has to be non-empty. The
//! age has to read as a number the way a browser's `Number("...")` would, so `0x1E`, `0o36`, and `0b11110` all count
//! as 30 alongside ordinary decimals, and land in `[AGE_MIN, AGE_MAX]`, inclusive. Anything else, whether it's empty,
//! not a number, or out of range, is the same [`FormError::InvalidAge`].

use std::fmt;

use crate::{
    constants::form::{AGE_MAX, AGE_MIN, INVALID_AGE, MISSING_NAME, WELCOME_AGE, WELCOME_PREFIX},
    form::FieldId,
};

/// A user-correctable problem with a submission. Never fatal: the user is told, and gets to try again.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormError {
    /// The name was empty after trimming.
    MissingName,
    /// The age was empty, not a number, or outside the accepted range.
    InvalidAge,
}

impl FormError {
    /// What the user is told.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingName => MISSING_NAME,
            Self::InvalidAge => INVALID_AGE,
        }
    }

    /// The field the user should fix, and where focus goes.
    pub fn field(&self) -> FieldId {
        match self {
            Self::MissingName => FieldId::Name,
            Self::InvalidAge => FieldId::Age,
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FormError {}

/// A submission that passed validation. Only lives until the form is reset.
#[derive(Clone, PartialEq, Debug)]
pub struct Submission {
    /// The name, trimmed.
    pub name: String,
    /// The age as the user typed it, trimmed.
    pub age: String,
    age_value: f64,
}

impl Submission {
    /// The age as a number.
    pub fn age_value(&self) -> f64 {
        self.age_value
    }

    /// The acknowledgment shown on success, e.g. `Welcome, Alice! Age: 30`.
    pub fn greeting(&self) -> String {
        format!("{}{}{}{}", WELCOME_PREFIX, self.name, WELCOME_AGE, self.age)
    }
}

/// Strip surrounding whitespace. A stray byte order mark counts as whitespace too.
fn trim(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Read a `0x`/`0o`/`0b` prefixed integer. No sign is allowed after a prefix.
fn parse_prefixed(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    // from_str_radix takes a leading '+', which isn't a digit
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok().map(|v| v as f64)
}

/// Trim the name, rejecting it if that leaves nothing.
pub fn validate_name(raw: &str) -> Result<String, FormError> {
    let name = trim(raw);
    if name.is_empty() {
        return Err(FormError::MissingName);
    }
    Ok(name.into())
}

/// Trim and parse the age, rejecting anything empty, non-numeric, or out of range.
pub fn parse_age(raw: &str) -> Result<f64, FormError> {
    let raw = trim(raw);
    let age = match parse_prefixed(raw) {
        Some(age) => age,
        None => raw.parse().map_err(|_| FormError::InvalidAge)?,
    };
    // NaN fails both comparisons, so check the range this way round
    if !(AGE_MIN..=AGE_MAX).contains(&age) {
        return Err(FormError::InvalidAge);
    }
    Ok(age)
}

/// Check the name, then the age. The first failure wins; the age isn't looked at if the name is missing.
pub fn validate(name: &str, age: &str) -> Result<Submission, FormError> {
    let name = validate_name(name)?;
    let age_value = parse_age(age)?;
    Ok(Submission {
        name,
        age: trim(age).into(),
        age_value,
    })
}
