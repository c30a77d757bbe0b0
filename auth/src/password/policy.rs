use super::errors::WeakPasswordError;

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A single strength rule: a predicate over the candidate password paired
/// with the rejection it produces.
struct Rule {
    check: fn(&str, &PasswordPolicy) -> bool,
    reject: fn(&PasswordPolicy) -> WeakPasswordError,
}

/// Rules are evaluated in order; the first failing rule wins.
const RULES: &[Rule] = &[
    Rule {
        check: |password, policy| password.chars().count() >= policy.min_length,
        reject: |policy| WeakPasswordError::TooShort {
            min: policy.min_length,
        },
    },
    Rule {
        check: |password, _| password.chars().any(|c| c.is_ascii_uppercase()),
        reject: |_| WeakPasswordError::MissingUppercase,
    },
    Rule {
        check: |password, _| password.chars().any(|c| c.is_ascii_lowercase()),
        reject: |_| WeakPasswordError::MissingLowercase,
    },
    Rule {
        check: |password, _| password.chars().any(|c| c.is_ascii_digit()),
        reject: |_| WeakPasswordError::MissingDigit,
    },
    Rule {
        check: |password, _| password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        reject: |_| WeakPasswordError::MissingSpecial,
    },
];

/// Password strength policy.
///
/// Declarative rule table: minimum length plus character-class diversity
/// (uppercase, lowercase, digit, special). Constructed once from
/// configuration and injected wherever passwords are accepted.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    pub const DEFAULT_MIN_LENGTH: usize = 8;

    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Validate a candidate password against every rule in order.
    ///
    /// # Errors
    /// * `WeakPasswordError` - The first rule the password fails
    pub fn validate(&self, password: &str) -> Result<(), WeakPasswordError> {
        for rule in RULES {
            if !(rule.check)(password, self) {
                return Err((rule.reject)(self));
            }
        }
        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LENGTH)
    }
}
