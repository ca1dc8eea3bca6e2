//! Builds the request-side email fields
//!
//! Validation always runs first; once it passes, canonicalization and
//! hashing cannot fail.

use crate::{
    identity::CanonicalIdentity, syntax::SyntaxValidator, EmailInput, EmailOutput, Result,
    ValidationConfig, ValidationError,
};
use tracing::{debug, instrument};

/// Validates an [`EmailInput`] and encodes it into an [`EmailOutput`]
#[derive(Debug, Clone, Default)]
pub struct IdentityEncoder {
    validator: SyntaxValidator,
}

impl IdentityEncoder {
    /// Create an encoder with the given domain syntax options
    pub fn new(config: ValidationConfig) -> Self {
        debug!("Identity encoder initialized with {:?}", config);
        Self {
            validator: SyntaxValidator::new(config),
        }
    }

    /// Validate and encode the email fields
    ///
    /// # Arguments
    /// * `input` - Caller-supplied address, domain and hashing flag
    ///
    /// # Returns
    /// * `Ok(EmailOutput)` with the raw or hashed address and the raw domain
    /// * `Err(ValidationError)` if the address or domain is malformed
    #[instrument(skip_all, fields(hash_address = input.hash_address))]
    pub fn encode(&self, input: &EmailInput) -> Result<EmailOutput> {
        self.validator.validate(input)?;

        let address = input.address.as_deref().map(|address| {
            if input.hash_address {
                CanonicalIdentity::from_address(address).to_hash()
            } else {
                address.to_string()
            }
        });

        let domain = input
            .domain
            .clone()
            .or_else(|| input.address.as_deref().and_then(raw_domain).map(str::to_string));

        debug!(
            "Encoded email fields (address: {}, domain: {})",
            address.is_some(),
            domain.is_some()
        );

        Ok(EmailOutput { address, domain })
    }
}

/// Everything after the **first** `@`, as typed
///
/// Canonicalization splits at the last `@` instead; the two only differ for
/// quoted local parts containing `@`.
fn raw_domain(address: &str) -> Option<&str> {
    address.split_once('@').map(|(_, domain)| domain)
}

impl TryFrom<EmailInput> for EmailOutput {
    type Error = ValidationError;

    fn try_from(input: EmailInput) -> Result<Self> {
        IdentityEncoder::default().encode(&input)
    }
}
