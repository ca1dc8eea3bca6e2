//! Syntax validation for email addresses and domains
//!
//! Validation runs before any canonicalization: malformed input is rejected,
//! never cleaned up.

use crate::{EmailInput, Result, ValidationConfig, ValidationError};
use email_address::EmailAddress;
use tracing::debug;

const MAX_LABEL_LEN: usize = 63;

/// Validates the address and domain of an [`EmailInput`]
#[derive(Debug, Clone, Default)]
pub struct SyntaxValidator {
    config: ValidationConfig,
}

impl SyntaxValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Check both fields of the input, address first
    ///
    /// # Returns
    /// * `Ok(())` if every present field is well formed
    /// * `Err(ValidationError)` naming the first offending field
    pub fn validate(&self, input: &EmailInput) -> Result<()> {
        if let Some(address) = &input.address {
            if !self.is_email(address) {
                debug!("Rejected malformed address (length: {})", address.len());
                return Err(ValidationError::InvalidAddress(address.clone()));
            }
        }

        if let Some(domain) = &input.domain {
            if !self.is_fqdn(domain) {
                debug!("Rejected malformed domain: {}", domain);
                return Err(ValidationError::InvalidDomain(domain.clone()));
            }
        }

        Ok(())
    }

    /// RFC 5322 address whose domain is also a fully-qualified domain name
    ///
    /// The FQDN requirement rules out domain literals, display-name forms
    /// and trailing dots, all of which the address grammar alone admits.
    pub fn is_email(&self, address: &str) -> bool {
        let Some((_, domain)) = address.rsplit_once('@') else {
            return false;
        };

        EmailAddress::is_valid(address) && self.is_fqdn(domain)
    }

    /// Fully-qualified domain name check
    pub fn is_fqdn(&self, domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();
        let Some(tld) = labels.last() else {
            return false;
        };

        if self.config.require_tld {
            if labels.len() < 2 {
                return false;
            }
            if !self.config.allow_numeric_tld && !is_valid_tld(tld) {
                return false;
            }
        }

        if !self.config.allow_numeric_tld && !tld.is_empty() && tld.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        labels.iter().all(|label| self.is_valid_label(label))
    }

    fn is_valid_label(&self, label: &str) -> bool {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return false;
        }

        if label.starts_with('-') || label.ends_with('-') {
            return false;
        }

        if !self.config.allow_underscores && label.contains('_') {
            return false;
        }

        label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || is_extended_label_char(c))
    }
}

/// Non-ASCII characters allowed in a label. Full-width ASCII variants are
/// excluded.
fn is_extended_label_char(c: char) -> bool {
    matches!(c, '\u{00a1}'..='\u{ffff}') && !matches!(c, '\u{ff01}'..='\u{ff5e}')
}

/// Two or more letters, or a punycode label
fn is_valid_tld(tld: &str) -> bool {
    let lower = tld.to_ascii_lowercase();
    if let Some(encoded) = lower.strip_prefix("xn") {
        if encoded.len() >= 2
            && encoded
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return true;
        }
    }

    tld.chars().count() >= 2 && tld.chars().all(is_tld_letter)
}

fn is_tld_letter(c: char) -> bool {
    matches!(c,
        'a'..='z'
        | 'A'..='Z'
        | '\u{00a1}'..='\u{00a8}'
        | '\u{00aa}'..='\u{d7ff}'
        | '\u{f900}'..='\u{fdcf}'
        | '\u{fdf0}'..='\u{ffef}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn validator() -> SyntaxValidator {
        SyntaxValidator::default()
    }

    #[test]
    fn test_valid_addresses() {
        let validator = validator();
        assert!(validator.is_email("foo@bar.com"));
        assert!(validator.is_email("Test+alias@maxmind.com"));
        assert!(validator.is_email("+@maxmind.com"));
        assert!(validator.is_email("foo.bar.baz@gmail.com"));
        assert!(validator.is_email("alias@user.fastmail.com"));
        assert!(validator.is_email("test@gamil.com"));
    }

    #[test]
    fn test_invalid_addresses() {
        let validator = validator();
        assert!(!validator.is_email("123"));
        assert!(!validator.is_email(""));
        assert!(!validator.is_email("foo@"));
        assert!(!validator.is_email("@bar.com"));
        assert!(!validator.is_email("foo@bar"));
        assert!(!validator.is_email("foo@bar.com."));
        assert!(!validator.is_email("foo@bar.com.."));
        assert!(!validator.is_email("foo@[127.0.0.1]"));
        assert!(!validator.is_email("Foo <foo@bar.com>"));
        assert!(!validator.is_email("foo bar@bar.com"));
    }

    #[test]
    fn test_valid_domains() {
        let validator = validator();
        assert!(validator.is_fqdn("bar.com"));
        assert!(validator.is_fqdn("sub.example.co.uk"));
        assert!(validator.is_fqdn("test-domain.com"));
        assert!(validator.is_fqdn("bücher.de"));
        assert!(validator.is_fqdn("example.xn--p1ai"));
        assert!(validator.is_fqdn("123.com"));
    }

    #[test]
    fn test_invalid_domains() {
        let validator = validator();
        assert!(!validator.is_fqdn("123"));
        assert!(!validator.is_fqdn("bar"));
        assert!(!validator.is_fqdn(""));
        assert!(!validator.is_fqdn("bar.com."));
        assert!(!validator.is_fqdn(".bar.com"));
        assert!(!validator.is_fqdn("bar..com"));
        assert!(!validator.is_fqdn("-bar.com"));
        assert!(!validator.is_fqdn("bar-.com"));
        assert!(!validator.is_fqdn("bar.c"));
        assert!(!validator.is_fqdn("bar.123"));
        assert!(!validator.is_fqdn("foo_bar.com"));
        assert!(!validator.is_fqdn("bar com.org"));
        assert!(!validator.is_fqdn("ｂａｒ.com"));
        assert!(!validator.is_fqdn(&format!("{}.com", "a".repeat(64))));
    }

    #[test]
    fn test_config_relaxations() {
        let validator = SyntaxValidator::new(ValidationConfig {
            require_tld: false,
            allow_underscores: true,
            allow_numeric_tld: true,
        });

        assert!(validator.is_fqdn("localhost"));
        assert!(validator.is_fqdn("foo_bar.com"));
        assert!(validator.is_fqdn("10.0.0.1"));
        assert!(!validator.is_fqdn("bar.com."));
    }

    #[test]
    fn test_validate_reports_field() {
        let validator = validator();

        let input = EmailInput {
            address: Some("123".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validator.validate(&input),
            Err(ValidationError::InvalidAddress("123".to_string()))
        );

        let input = EmailInput {
            domain: Some("123".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validator.validate(&input),
            Err(ValidationError::InvalidDomain("123".to_string()))
        );

        // Address is checked first
        let input = EmailInput {
            address: Some("nope".to_string()),
            domain: Some("nope".to_string()),
            hash_address: true,
        };
        assert_eq!(validator.validate(&input).unwrap_err().field(), "email.address");

        assert_eq!(validator.validate(&EmailInput::default()), Ok(()));
    }
}
