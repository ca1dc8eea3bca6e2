//! Local-part canonicalization
//!
//! Provider rules are selected by the already-canonicalized domain, so this
//! always runs after [`crate::canonicalize_domain`].

use crate::tables::{FASTMAIL_DOMAINS, YAHOO_DOMAINS};
use tracing::debug;

const DOT_INSENSITIVE_DOMAIN: &str = "gmail.com";

/// Canonicalize a local part against its canonical domain
///
/// Returns the canonical `(local_part, domain)` pair. The domain only changes
/// when a subdomain alias is unwrapped.
///
/// # Arguments
/// * `local_part` - Trimmed, lowercased local part
/// * `domain` - Output of [`crate::canonicalize_domain`]
///
/// # Example
/// ```rust
/// use email_identity::canonicalize_local_part;
///
/// let (local, domain) = canonicalize_local_part("f.o.o+news", "gmail.com");
/// assert_eq!((local.as_str(), domain.as_str()), ("foo", "gmail.com"));
///
/// let (local, domain) = canonicalize_local_part("alias", "user.fastmail.com");
/// assert_eq!((local.as_str(), domain.as_str()), ("user", "fastmail.com"));
/// ```
pub fn canonicalize_local_part(local_part: &str, domain: &str) -> (String, String) {
    let delimiter = alias_delimiter(domain);
    let mut local_part = strip_alias(local_part, delimiter).to_string();

    if domain == DOT_INSENSITIVE_DOMAIN {
        local_part.retain(|c| c != '.');
    }

    match unwrap_subdomain_alias(domain) {
        Some((mailbox, base)) => {
            debug!("Unwrapped subdomain alias: {} -> {}", domain, base);
            if !local_part.is_empty() {
                local_part = mailbox.to_string();
            }
            (local_part, base.to_string())
        }
        None => (local_part, domain.to_string()),
    }
}

/// Yahoo domains tag aliases with `-`, everyone else with `+`
fn alias_delimiter(domain: &str) -> char {
    if YAHOO_DOMAINS.contains(domain) {
        '-'
    } else {
        '+'
    }
}

/// Cut the local part at the first delimiter. A delimiter in first position
/// is part of the mailbox name.
fn strip_alias(local_part: &str, delimiter: char) -> &str {
    match local_part.find(delimiter) {
        Some(idx) if idx > 0 => &local_part[..idx],
        _ => local_part,
    }
}

/// Split `<mailbox>.<base>` when `<base>` is a Fastmail hosted domain
fn unwrap_subdomain_alias(domain: &str) -> Option<(&str, &str)> {
    let (first, rest) = domain.split_once('.')?;
    // more than two labels
    if !rest.contains('.') {
        return None;
    }
    FASTMAIL_DOMAINS.contains(rest).then_some((first, rest))
}
