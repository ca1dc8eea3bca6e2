//! Canonical identity construction and hashing
//!
//! A [`CanonicalIdentity`] is the normalized `local@domain` pair. It only
//! exists to be hashed and is never transmitted in the clear.

use crate::{domain::canonicalize_domain, local_part::canonicalize_local_part};
use std::fmt;
use tracing::debug;

/// Normalized mailbox identity used as hash input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalIdentity {
    local_part: String,
    domain: String,
}

impl CanonicalIdentity {
    /// Build the canonical identity of a syntactically valid address
    ///
    /// The address is trimmed and lowercased, then split at its **last** `@`
    /// so quoted local parts containing `@` keep their full domain. The
    /// domain is canonicalized first because local-part rules depend on it.
    ///
    /// An address without `@` is treated as a bare local part with an empty
    /// domain; this never happens for validated input.
    pub fn from_address(address: &str) -> Self {
        let address = address.trim().to_lowercase();
        let (local_part, domain) = match address.rfind('@') {
            Some(at) => (&address[..at], &address[at + 1..]),
            None => (address.as_str(), ""),
        };

        let domain = canonicalize_domain(domain);
        let (local_part, domain) = canonicalize_local_part(local_part, &domain);

        debug!(
            "Canonical identity built (local part length: {}, domain: {})",
            local_part.len(),
            domain
        );

        Self { local_part, domain }
    }

    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Hex-encoded MD5 digest of `local@domain`
    ///
    /// # Returns
    /// * 32 lowercase hex characters
    pub fn to_hash(&self) -> String {
        let digest = md5::compute(self.to_string().as_bytes());
        let hex_hash = format!("{digest:x}");
        debug!("Hashed canonical identity -> {}...", &hex_hash[..8]);
        hex_hash
    }
}

impl fmt::Display for CanonicalIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn canonical(address: &str) -> String {
        CanonicalIdentity::from_address(address).to_string()
    }

    #[test]
    fn test_case_and_whitespace_folding() {
        assert_eq!(canonical("Test@MaxMind.com"), "test@maxmind.com");
        assert_eq!(canonical("  test@maxmind.com\t"), "test@maxmind.com");
    }

    #[test]
    fn test_full_pipeline() {
        assert_eq!(canonical("Test+alias@maxmind.com"), "test@maxmind.com");
        assert_eq!(canonical("foo@googlemail.com"), "foo@gmail.com");
        assert_eq!(canonical("Foo.Bar+x@googlemail.com"), "foobar@gmail.com");
        assert_eq!(canonical("alias@user.fastmail.com"), "user@fastmail.com");
        assert_eq!(canonical("foo-bar@yahoo.com"), "foo@yahoo.com");
        assert_eq!(canonical("foo@gamil.con"), "foo@gmail.com");
        assert_eq!(canonical("foo@bücher.de"), "foo@xn--bcher-kva.de");
    }

    #[test]
    fn test_domain_is_canonical_before_local_rules() {
        // Dots are only folded once the domain is known to be gmail.com
        assert_eq!(canonical("f.o.o@gmial.com"), "foo@gmail.com");
        assert_eq!(canonical("f.o.o@12gmail.com"), "foo@gmail.com");
    }

    #[test]
    fn test_split_at_last_at_sign() {
        let identity = CanonicalIdentity::from_address("\"a@b\"@example.com");
        assert_eq!(identity.local_part(), "\"a@b\"");
        assert_eq!(identity.domain(), "example.com");
    }

    #[test]
    fn test_address_without_at_sign() {
        let identity = CanonicalIdentity::from_address("foo");
        assert_eq!(identity.local_part(), "foo");
        assert_eq!(identity.domain(), "");
    }

    #[test]
    fn test_hash() {
        let identity = CanonicalIdentity::from_address("Test+alias@maxmind.com");
        assert_eq!(identity.to_hash(), "977577b140bfb7c516e4746204fbdb01");

        let identity = CanonicalIdentity::from_address("foo@bar.com");
        assert_eq!(identity.to_hash(), "f3ada405ce890b6f8204094deb12d8a8");
    }

    #[test]
    fn test_hash_shape() {
        let hash = CanonicalIdentity::from_address("+@maxmind.com").to_hash();
        assert_eq!(hash.len(), 32);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
