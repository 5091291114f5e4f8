use rand::Rng;
use std::fmt;

/// The four fixed character classes, concatenated in this order when enabled:
/// uppercase, lowercase, symbols, digits.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const SYMBOLS: &str = "!@#$%^&*()_+";
pub const DIGITS: &str = "0123456789";

/// One of the four toggleable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

/// Which character classes to draw from. All-off is representable;
/// `generate` rejects it rather than guessing a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSelection {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl ClassSelection {
    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.digits || self.symbols)
    }

    /// Flip one class toggle, returning the updated selection.
    pub fn toggled(mut self, class: CharClass) -> Self {
        match class {
            CharClass::Uppercase => self.uppercase = !self.uppercase,
            CharClass::Lowercase => self.lowercase = !self.lowercase,
            CharClass::Digits => self.digits = !self.digits,
            CharClass::Symbols => self.symbols = !self.symbols,
        }
        self
    }

    /// Concatenates the enabled class literals, in the fixed order
    /// uppercase, lowercase, symbols, digits.
    pub fn alphabet(&self) -> String {
        let mut alphabet = String::new();
        if self.uppercase {
            alphabet.push_str(UPPERCASE);
        }
        if self.lowercase {
            alphabet.push_str(LOWERCASE);
        }
        if self.symbols {
            alphabet.push_str(SYMBOLS);
        }
        if self.digits {
            alphabet.push_str(DIGITS);
        }
        alphabet
    }
}

/// Why a generation request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// Requested length was zero.
    InvalidLength,
    /// No character class enabled, so there is nothing to sample from.
    EmptyAlphabet,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidLength => write!(f, "Password length must be at least 1"),
            GenerateError::EmptyAlphabet => write!(f, "Select at least one character type"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Generates a password of exactly `length` characters, each drawn
/// independently and uniformly (with replacement) from the enabled classes.
///
/// Uses the thread-local general-purpose RNG from `rand`, not a
/// cryptographically secure source. Fine for a casual utility; do not
/// rely on it for high-value secrets.
pub fn generate(selection: ClassSelection, length: usize) -> Result<String, GenerateError> {
    if length == 0 {
        return Err(GenerateError::InvalidLength);
    }

    let chars: Vec<char> = selection.alphabet().chars().collect();
    if chars.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }

    let mut rng = rand::rng();
    let password = (0..length)
        .map(|_| {
            let idx = rng.random_range(0..chars.len());
            chars[idx]
        })
        .collect();

    Ok(password)
}
