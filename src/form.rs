//! Form state as an explicit value advanced by discrete actions.
//!
//! Every change the screen can make (toggle a class, edit the length
//! field, generate, reset) is a `FormAction` applied through
//! `FormState::apply`. The old state is consumed and a new one returned;
//! nothing is mutated behind the screen's back.

use std::fmt;
use zeroize::Zeroize;

use crate::password::{self, CharClass, ClassSelection, GenerateError};
use crate::validation::{self, LengthError};

/// A discrete transition of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    ToggleClass(CharClass),
    SetLengthInput(String),
    Generate,
    Reset,
}

/// What went wrong on the last transition, shown inline by the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    Length(LengthError),
    Generate(GenerateError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Length(e) => e.fmt(f),
            FormError::Generate(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for FormError {}

/// The whole screen state. Initial state matches the form's first render:
/// empty length field, every class off, no password yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub length_input: String,
    pub selection: ClassSelection,
    pub password: String,
    pub generated: bool,
    pub error: Option<FormError>,
}

impl FormState {
    /// Validated length from the current field value, if any.
    pub fn parsed_length(&self) -> Result<usize, LengthError> {
        validation::parse_length(&self.length_input)
    }

    /// Whether the Generate button should be enabled.
    pub fn can_generate(&self) -> bool {
        self.parsed_length().is_ok()
    }

    /// Apply one action, consuming this state and returning the next.
    pub fn apply(mut self, action: FormAction) -> Self {
        match action {
            FormAction::ToggleClass(class) => Self {
                selection: self.selection.toggled(class),
                error: None,
                ..self
            },
            FormAction::SetLengthInput(input) => Self {
                length_input: input,
                error: None,
                ..self
            },
            FormAction::Generate => {
                let length = match self.parsed_length() {
                    Ok(len) => len,
                    Err(e) => return self.failed(FormError::Length(e)),
                };
                match password::generate(self.selection, length) {
                    Ok(pwd) => {
                        self.password.zeroize();
                        Self {
                            password: pwd,
                            generated: true,
                            error: None,
                            ..self
                        }
                    }
                    Err(e) => self.failed(FormError::Generate(e)),
                }
            }
            FormAction::Reset => {
                self.password.zeroize();
                Self::default()
            }
        }
    }

    /// Failed transition: drop any previous password, keep the inputs.
    fn failed(mut self, error: FormError) -> Self {
        self.password.zeroize();
        Self {
            password: String::new(),
            generated: false,
            error: Some(error),
            ..self
        }
    }
}
