//! Domain canonicalization
//!
//! Maps a validated domain onto the form used for identity hashing. The rules
//! run in a fixed order and each one only sees the output of the previous
//! rule, so a domain is normalized toward table-key form before every lookup.

use crate::tables::{EQUIVALENT_DOMAINS, TYPO_DOMAINS, TYPO_TLDS};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static REPEATED_COM_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\.com){2,}$").expect("valid repeated suffix pattern"));

static NUMERIC_PREFIX_GMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+gmail?\.com$").expect("valid numeric prefix pattern"));

/// Canonicalize a domain for identity hashing
///
/// Unknown domains only go through IDNA transcoding and case folding.
///
/// # Arguments
/// * `domain` - A domain that already passed syntax validation
///
/// # Example
/// ```rust
/// use email_identity::canonicalize_domain;
///
/// assert_eq!(canonicalize_domain("GoogleMail.com"), "gmail.com");
/// assert_eq!(canonicalize_domain("example.con"), "example.com");
/// assert_eq!(canonicalize_domain("example.org"), "example.org");
/// ```
pub fn canonicalize_domain(domain: &str) -> String {
    let ascii = to_ascii(domain);
    let collapsed = collapse_repeated_suffix(&ascii);
    let prefixed = fix_numeric_prefix(&collapsed);
    let tld_fixed = fix_tld_typo(&prefixed);
    let typo_fixed = fix_domain_typo(&tld_fixed);
    let canonical = fold_equivalent(&typo_fixed);

    if canonical != domain {
        debug!("Canonicalized domain: {} -> {}", domain, canonical);
    }

    canonical
}

/// Transcode internationalized labels to their ASCII-compatible form
fn to_ascii(domain: &str) -> String {
    match idna::domain_to_ascii(domain) {
        Ok(ascii) => ascii,
        Err(e) => {
            debug!("IDNA transcoding failed for {}: {:?}", domain, e);
            domain.to_lowercase()
        }
    }
}

fn collapse_repeated_suffix(domain: &str) -> String {
    REPEATED_COM_SUFFIX.replace(domain, ".com").into_owned()
}

fn fix_numeric_prefix(domain: &str) -> String {
    if NUMERIC_PREFIX_GMAIL.is_match(domain) {
        return "gmail.com".to_string();
    }
    domain.to_string()
}

/// Replace a mistyped final label, keeping everything before it
fn fix_tld_typo(domain: &str) -> String {
    if let Some((rest, tld)) = domain.rsplit_once('.') {
        if let Some(fixed) = TYPO_TLDS.get(tld) {
            return format!("{rest}.{fixed}");
        }
    }
    domain.to_string()
}

fn fix_domain_typo(domain: &str) -> String {
    TYPO_DOMAINS
        .get(domain)
        .map_or_else(|| domain.to_string(), |fixed| fixed.to_string())
}

fn fold_equivalent(domain: &str) -> String {
    EQUIVALENT_DOMAINS
        .get(domain)
        .map_or_else(|| domain.to_string(), |canonical| canonical.to_string())
}
