use std::fmt;

/// Shortest password the form accepts.
pub const MIN_LENGTH: usize = 4;
/// Longest password the form accepts.
pub const MAX_LENGTH: usize = 16;

/// Why the length field failed validation. Messages match the form's
/// inline error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthError {
    Required,
    NotANumber,
    TooShort,
    TooLong,
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthError::Required => write!(f, "Length is required"),
            LengthError::NotANumber => write!(f, "Must be a whole number"),
            LengthError::TooShort => write!(f, "Should be min of {MIN_LENGTH} characters"),
            LengthError::TooLong => write!(f, "Should be max of {MAX_LENGTH} characters"),
        }
    }
}

impl std::error::Error for LengthError {}

/// Parses the raw length field into a usable length in [MIN_LENGTH, MAX_LENGTH].
pub fn parse_length(input: &str) -> Result<usize, LengthError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LengthError::Required);
    }
    let length: usize = trimmed.parse().map_err(|_| LengthError::NotANumber)?;
    if length < MIN_LENGTH {
        return Err(LengthError::TooShort);
    }
    if length > MAX_LENGTH {
        return Err(LengthError::TooLong);
    }
    Ok(length)
}
