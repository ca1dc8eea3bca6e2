//! # email_identity
//!
//! Email address canonicalization and hashing for fraud-scoring request
//! payloads.
//!
//! Syntactically distinct addresses that reach the same mailbox collapse to
//! the same identity key, so the scoring service can deduplicate them without
//! ever seeing the address in the clear.
//!
//! ## Pipeline
//!
//! 1. **Syntax validation** of the address and domain ([`syntax`])
//! 2. **Domain canonicalization**: IDNA, repeated `.com` suffixes, numeric
//!    gmail prefixes, TLD and domain typos, equivalent domains ([`domain`])
//! 3. **Local-part canonicalization**: alias tags, gmail dots, Fastmail
//!    subdomain aliases ([`local_part`])
//! 4. **Encoding** of the request-side email fields ([`identity_encoder`])
//!
//! ## Example
//!
//! ```rust
//! use email_identity::{EmailInput, EmailOutput};
//!
//! let input = EmailInput {
//!     address: Some("Test+alias@maxmind.com".to_string()),
//!     domain: None,
//!     hash_address: true,
//! };
//!
//! let email = EmailOutput::try_from(input)?;
//! assert_eq!(email.address.as_deref(), Some("977577b140bfb7c516e4746204fbdb01"));
//! assert_eq!(email.domain.as_deref(), Some("maxmind.com"));
//! # Ok::<(), email_identity::ValidationError>(())
//! ```

pub mod domain;
pub mod identity;
pub mod identity_encoder;
pub mod local_part;
pub mod syntax;
pub mod tables;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options for the domain-name syntax check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Require at least two labels and an alphabetic or punycode TLD
    pub require_tld: bool,
    /// Accept `_` inside labels
    pub allow_underscores: bool,
    /// Accept an all-digit TLD
    pub allow_numeric_tld: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_tld: true,
            allow_underscores: false,
            allow_numeric_tld: false,
        }
    }
}

/// Caller-supplied email information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailInput {
    /// Email address as entered by the end user
    pub address: Option<String>,
    /// Domain of the address, may be sent without the address
    pub domain: Option<String>,
    /// Send the MD5 of the canonical address instead of the address itself
    #[serde(default)]
    pub hash_address: bool,
}

/// Email fields of the outbound request payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailOutput {
    /// Raw address, or the hex MD5 of the canonical address when hashing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Raw domain, never canonicalized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// Errors that can occur while building the email fields
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("`email.address` is an invalid email address: {0}")]
    InvalidAddress(String),
    #[error("`email.domain` is an invalid domain: {0}")]
    InvalidDomain(String),
}

impl ValidationError {
    /// Name of the rejected field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidAddress(_) => "email.address",
            ValidationError::InvalidDomain(_) => "email.domain",
        }
    }

    /// The rejected value, as supplied
    pub fn value(&self) -> &str {
        match self {
            ValidationError::InvalidAddress(value) | ValidationError::InvalidDomain(value) => value,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;

// Re-export main types
pub use domain::canonicalize_domain;
pub use identity::CanonicalIdentity;
pub use identity_encoder::IdentityEncoder;
pub use local_part::canonicalize_local_part;
pub use syntax::SyntaxValidator;
pub use ValidationConfig as Config;
