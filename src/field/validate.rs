//! Field validators.
//!
//! A validator gates two moments: each character as it is typed
//! (`validate_char`) and the whole buffer when the cursor tries to leave
//! the field (`validate`). Navigation away from a field with invalid
//! contents is denied by the driver.

/// Content validation for a field.
///
/// Both methods default to accepting everything, so an implementation
/// only overrides the checks it cares about.
pub trait Validator {
    /// Accept or reject a single typed character.
    fn validate_char(&self, ch: char) -> bool {
        let _ = ch;
        true
    }

    /// Accept or reject the full buffer contents when leaving the field.
    fn validate(&self, contents: &str) -> bool {
        let _ = contents;
        true
    }
}

/// Accepts decimal digits only; the buffer must be non-empty to leave.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl Validator for Integer {
    fn validate_char(&self, ch: char) -> bool {
        ch.is_ascii_digit()
    }

    fn validate(&self, contents: &str) -> bool {
        !contents.is_empty() && contents.chars().all(|c| c.is_ascii_digit())
    }
}

/// Accepts alphabetic characters and spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alpha;

impl Validator for Alpha {
    fn validate_char(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == ' '
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AcceptAll;
    impl Validator for AcceptAll {}

    #[test]
    fn test_default_accepts_everything() {
        let v = AcceptAll;
        assert!(v.validate_char('!'));
        assert!(v.validate(""));
    }

    #[test]
    fn test_integer_chars() {
        let v = Integer;
        assert!(v.validate_char('0'));
        assert!(v.validate_char('9'));
        assert!(!v.validate_char('a'));
        assert!(!v.validate_char('-'));
    }

    #[test]
    fn test_integer_contents() {
        let v = Integer;
        assert!(v.validate("42"));
        assert!(!v.validate(""));
        assert!(!v.validate("4x2"));
    }

    #[test]
    fn test_alpha() {
        let v = Alpha;
        assert!(v.validate_char('a'));
        assert!(v.validate_char(' '));
        assert!(!v.validate_char('1'));
        assert!(v.validate("any contents"));
    }
}
