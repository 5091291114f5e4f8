//! A small desktop form for generating random passwords from selectable
//! character classes (uppercase, lowercase, digits, symbols) and a
//! desired length, with copy-to-clipboard and a reset action.
//!
//! Passwords are sampled with the general-purpose `rand` thread RNG, not
//! a cryptographically secure source. That is a deliberate, documented
//! limitation of this casual utility.

pub mod app;
pub mod form;
pub mod password;
pub mod validation;
