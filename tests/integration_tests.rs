//! Integration tests for the PassForge form lifecycle.
//!
//! These tests verify the complete generate flow:
//! - Length validation
//! - Character class selection
//! - Password generation and alphabet membership
//! - Error signalling
//! - Reset behavior

use PassForge::form::{FormAction, FormError, FormState};
use PassForge::password::{
    self, CharClass, ClassSelection, DIGITS, GenerateError, LOWERCASE, SYMBOLS, UPPERCASE,
};
use PassForge::validation::{self, LengthError, MAX_LENGTH, MIN_LENGTH};

// ============================================================================
// Test Module: Generation Contract
// ============================================================================

mod generation_tests {
    use super::*;

    fn full_selection() -> ClassSelection {
        ClassSelection {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }

    #[test]
    fn test_length_and_membership_across_range() {
        let alphabet = full_selection().alphabet();
        for len in 1..=64 {
            let pwd = password::generate(full_selection(), len).unwrap();
            assert_eq!(pwd.chars().count(), len, "length mismatch at {}", len);
            for c in pwd.chars() {
                assert!(alphabet.contains(c), "{:?} not in alphabet", c);
            }
        }
    }

    #[test]
    fn test_every_single_class_selection() {
        let cases = [
            (CharClass::Uppercase, UPPERCASE),
            (CharClass::Lowercase, LOWERCASE),
            (CharClass::Digits, DIGITS),
            (CharClass::Symbols, SYMBOLS),
        ];
        for (class, literal) in cases {
            let selection = ClassSelection::default().toggled(class);
            let pwd = password::generate(selection, 16).unwrap();
            assert!(
                pwd.chars().all(|c| literal.contains(c)),
                "{:?} produced {:?}",
                class,
                pwd
            );
        }
    }

    #[test]
    fn test_empty_selection_is_a_hard_error() {
        for len in [1, 8, 16] {
            assert_eq!(
                password::generate(ClassSelection::default(), len),
                Err(GenerateError::EmptyAlphabet)
            );
        }
    }

    #[test]
    fn test_repeated_calls_keep_invariants() {
        let selection = ClassSelection {
            lowercase: true,
            symbols: true,
            ..ClassSelection::default()
        };
        for _ in 0..100 {
            let pwd = password::generate(selection, 12).unwrap();
            assert_eq!(pwd.len(), 12);
            assert!(pwd
                .chars()
                .all(|c| LOWERCASE.contains(c) || SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn test_symbol_class_coverage() {
        // All 12 symbols should appear over a large sample; a dropped
        // character would indicate a truncated literal.
        let selection = ClassSelection::default().toggled(CharClass::Symbols);
        let mut seen = vec![false; SYMBOLS.len()];
        for _ in 0..300 {
            for c in password::generate(selection, 16).unwrap().chars() {
                seen[SYMBOLS.find(c).unwrap()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "symbol never sampled: {:?}", seen);
    }
}

// ============================================================================
// Test Module: Length Validation
// ============================================================================

mod length_validation_tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(validation::parse_length("4"), Ok(MIN_LENGTH));
        assert_eq!(validation::parse_length("16"), Ok(MAX_LENGTH));
        assert_eq!(validation::parse_length("3"), Err(LengthError::TooShort));
        assert_eq!(validation::parse_length("17"), Err(LengthError::TooLong));
    }

    #[test]
    fn test_garbage_input() {
        assert_eq!(validation::parse_length(""), Err(LengthError::Required));
        assert_eq!(
            validation::parse_length("twelve"),
            Err(LengthError::NotANumber)
        );
        assert_eq!(validation::parse_length("1e3"), Err(LengthError::NotANumber));
    }
}

// ============================================================================
// Test Module: Form Lifecycle
// ============================================================================

mod form_lifecycle_tests {
    use super::*;

    #[test]
    fn test_full_generate_flow() {
        let state = FormState::default()
            .apply(FormAction::SetLengthInput("12".into()))
            .apply(FormAction::ToggleClass(CharClass::Uppercase))
            .apply(FormAction::ToggleClass(CharClass::Digits))
            .apply(FormAction::Generate);

        assert!(state.generated);
        assert!(state.error.is_none());
        assert_eq!(state.password.len(), 12);
        assert!(state
            .password
            .chars()
            .all(|c| UPPERCASE.contains(c) || DIGITS.contains(c)));
    }

    #[test]
    fn test_generate_button_gating_follows_length_field() {
        let state = FormState::default();
        assert!(!state.can_generate());
        let state = state.apply(FormAction::SetLengthInput("10".into()));
        assert!(state.can_generate());
        let state = state.apply(FormAction::SetLengthInput("100".into()));
        assert!(!state.can_generate());
    }

    #[test]
    fn test_generate_without_classes_reports_error() {
        let state = FormState::default()
            .apply(FormAction::SetLengthInput("8".into()))
            .apply(FormAction::Generate);
        assert_eq!(
            state.error,
            Some(FormError::Generate(GenerateError::EmptyAlphabet))
        );
        assert_eq!(
            state.error.unwrap().to_string(),
            "Select at least one character type"
        );
    }

    #[test]
    fn test_length_error_messages_surface_verbatim() {
        let state = FormState::default()
            .apply(FormAction::ToggleClass(CharClass::Lowercase))
            .apply(FormAction::SetLengthInput("2".into()))
            .apply(FormAction::Generate);
        assert_eq!(
            state.error.unwrap().to_string(),
            "Should be min of 4 characters"
        );
    }

    #[test]
    fn test_reset_after_generate() {
        let state = FormState::default()
            .apply(FormAction::SetLengthInput("8".into()))
            .apply(FormAction::ToggleClass(CharClass::Symbols))
            .apply(FormAction::Generate)
            .apply(FormAction::Reset);
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn test_selection_survives_length_edits() {
        let state = FormState::default()
            .apply(FormAction::ToggleClass(CharClass::Lowercase))
            .apply(FormAction::SetLengthInput("8".into()))
            .apply(FormAction::SetLengthInput("9".into()));
        assert!(state.selection.lowercase);
        assert_eq!(state.length_input, "9");
    }
}
