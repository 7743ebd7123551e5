//! Short code generation and custom alias validation.

use std::sync::LazyLock;

use crate::error::AppError;
use rand::Rng;
use regex::Regex;

/// Alphanumerics without look-alikes (`0`/`O`, `1`/`l`/`I`).
pub const UNAMBIGUOUS_ALPHABET: &str = "23456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

pub const DEFAULT_CODE_LENGTH: usize = 7;

pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

pub const MIN_ALIAS_LENGTH: usize = 3;

pub const MAX_CODE_LENGTH: usize = 32;

/// Aliases that would shadow service routes.
const RESERVED_CODES: &[&str] = &["api", "health", "shorten", "static"];

static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias pattern is valid"));

/// Random fixed-length code generator over a configurable alphabet.
///
/// The code space is `alphabet.len() ^ length`. `max_attempts` bounds how many
/// colliding candidates the registry tolerates before giving up.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    alphabet: Vec<char>,
    length: usize,
    max_attempts: usize,
}

impl CodeGenerator {
    /// Creates a generator.
    ///
    /// Empty alphabets, zero lengths and zero attempts are clamped to the
    /// smallest usable value.
    pub fn new(alphabet: &str, length: usize, max_attempts: usize) -> Self {
        let mut alphabet: Vec<char> = alphabet.chars().collect();
        if alphabet.is_empty() {
            alphabet = UNAMBIGUOUS_ALPHABET.chars().collect();
        }

        Self {
            alphabet,
            length: length.clamp(1, MAX_CODE_LENGTH),
            max_attempts: max_attempts.max(1),
        }
    }

    /// Generator over [`UNAMBIGUOUS_ALPHABET`] with the given length and retry bound.
    pub fn with_length(length: usize, max_attempts: usize) -> Self {
        Self::new(UNAMBIGUOUS_ALPHABET, length, max_attempts)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Draws one candidate code. Uniqueness is the caller's job.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::with_length(DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 3-32 characters
/// - Allowed characters: ASCII letters, digits, `-`, `_`
/// - Cannot be a reserved route name
///
/// Aliases are case-sensitive: `Promo` and `promo` are different codes.
///
/// # Errors
///
/// Returns [`AppError::InvalidAlias`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    let invalid = |reason: String| AppError::InvalidAlias {
        alias: code.to_string(),
        reason,
    };

    let length = code.chars().count();
    if !(MIN_ALIAS_LENGTH..=MAX_CODE_LENGTH).contains(&length) {
        return Err(invalid(format!(
            "must be {MIN_ALIAS_LENGTH}-{MAX_CODE_LENGTH} characters, got {length}"
        )));
    }

    if !ALIAS_REGEX.is_match(code) {
        return Err(invalid(
            "can only contain letters, numbers, hyphens and underscores".to_string(),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(invalid("this code is reserved".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_configured_length() {
        let generator = CodeGenerator::with_length(8, 10);
        assert_eq!(generator.generate().len(), 8);
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        let generator = CodeGenerator::default();
        for _ in 0..100 {
            let code = generator.generate();
            assert!(code.chars().all(|c| UNAMBIGUOUS_ALPHABET.contains(c)));
        }
    }

    #[test]
    fn test_alphabet_has_no_lookalikes() {
        for c in ['0', 'O', '1', 'l', 'I'] {
            assert!(!UNAMBIGUOUS_ALPHABET.contains(c), "{c} is ambiguous");
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let generator = CodeGenerator::default();
        let codes: HashSet<_> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_single_symbol_alphabet_is_deterministic() {
        let generator = CodeGenerator::new("x", 3, 5);
        assert_eq!(generator.generate(), "xxx");
    }

    #[test]
    fn test_new_clamps_degenerate_settings() {
        let generator = CodeGenerator::new("", 0, 0);
        assert_eq!(generator.length(), 1);
        assert_eq!(generator.max_attempts(), 1);
        assert!(UNAMBIGUOUS_ALPHABET.contains(generator.generate().as_str()));
    }

    #[test]
    fn test_generated_codes_pass_charset_rule() {
        let generator = CodeGenerator::default();
        assert!(ALIAS_REGEX.is_match(&generator.generate()));
    }

    #[test]
    fn test_validate_accepts_letters_digits_hyphen_underscore() {
        assert!(validate_custom_code("my-link_2024").is_ok());
        assert!(validate_custom_code("Promo").is_ok());
        assert!(validate_custom_code("abc").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        let err = validate_custom_code("ab").unwrap_err();
        assert!(matches!(err, AppError::InvalidAlias { .. }));
        assert!(err.to_string().contains("3-32 characters"));
    }

    #[test]
    fn test_validate_maximum_length() {
        assert!(validate_custom_code(&"a".repeat(32)).is_ok());
        assert!(validate_custom_code(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_validate_special_characters() {
        assert!(validate_custom_code("my code").is_err());
        assert!(validate_custom_code("promo@2024").is_err());
        assert!(validate_custom_code("café").is_err());
        assert!(validate_custom_code("a/b/c").is_err());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_all_reserved_codes() {
        for &reserved in RESERVED_CODES {
            let result = validate_custom_code(reserved);
            assert!(
                result.is_err(),
                "Reserved code '{}' should be invalid",
                reserved
            );
        }
    }
}
