//! Static knowledge tables used by the canonicalizers
//!
//! Every table is built once on first access and is read-only afterwards, so
//! lookups from any number of threads need no locking.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Whole-domain spelling corrections, applied after TLD correction
pub static TYPO_DOMAINS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // gmail.com
        ("35gmai.com", "gmail.com"),
        ("636gmail.com", "gmail.com"),
        ("gamil.com", "gmail.com"),
        ("gmail.comu", "gmail.com"),
        ("gmial.com", "gmail.com"),
        ("gmil.com", "gmail.com"),
        ("yahoogmail.com", "gmail.com"),
        // outlook.com
        ("putlook.com", "outlook.com"),
    ])
});

/// Mistyped top-level labels that resolve to `com`
pub static TYPO_TLDS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        // doubled or trailing keys
        "comm", "commm", "commmm", "comn",
        // wrong middle letter
        "cbm", "ccm", "cdm", "cem", "cfm", "cgm", "chm", "cim", "cjm", "ckm", "clm", "cmm",
        "cnm", "cpm", "cqm", "crm", "csm", "ctm", "cum", "cvm", "cwm", "cxm", "cym", "czm",
        // wrong last letter
        "col", "con",
        // wrong first letter
        "dom", "don", "som", "son", "vom", "von", "xom", "xon",
        // run-together
        "clam", "colm", "comcom",
    ]
    .into_iter()
    .map(|tld| (tld, "com"))
    .collect()
});

/// Distinct domains served from a single mailbox namespace
pub static EQUIVALENT_DOMAINS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("googlemail.com", "gmail.com"),
        ("pm.me", "protonmail.com"),
        ("proton.me", "protonmail.com"),
        ("yandex.by", "yandex.ru"),
        ("yandex.com", "yandex.ru"),
        ("yandex.kz", "yandex.ru"),
        ("yandex.ua", "yandex.ru"),
        ("ya.ru", "yandex.ru"),
    ])
});

/// Fastmail hosted domains. Any `<user>.<domain>` subdomain delivers to
/// `<user>@<domain>`.
pub static FASTMAIL_DOMAINS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "123mail.org",
        "150mail.com",
        "150ml.com",
        "16mail.com",
        "2-mail.com",
        "4email.net",
        "50mail.com",
        "airpost.net",
        "allmail.net",
        "bestmail.us",
        "cluemail.com",
        "elitemail.org",
        "emailcorner.net",
        "emailengine.net",
        "emailengine.org",
        "emailgroups.net",
        "emailplus.org",
        "emailuser.net",
        "eml.cc",
        "f-m.fm",
        "fast-email.com",
        "fast-mail.org",
        "fastem.com",
        "fastemail.us",
        "fastemailer.com",
        "fastest.cc",
        "fastimap.com",
        "fastmail.cn",
        "fastmail.co.uk",
        "fastmail.com",
        "fastmail.com.au",
        "fastmail.de",
        "fastmail.es",
        "fastmail.fm",
        "fastmail.fr",
        "fastmail.im",
        "fastmail.in",
        "fastmail.jp",
        "fastmail.mx",
        "fastmail.net",
        "fastmail.nl",
        "fastmail.org",
        "fastmail.se",
        "fastmail.to",
        "fastmail.tw",
        "fastmail.uk",
        "fastmail.us",
        "fastmailbox.net",
        "fastmessaging.com",
        "fea.st",
        "fmail.co.uk",
        "fmailbox.com",
        "fmgirl.com",
        "fmguy.com",
        "ftml.net",
        "h-mail.us",
        "hailmail.net",
        "imap-mail.com",
        "imap.cc",
        "imapmail.org",
        "inoutbox.com",
        "internet-e-mail.com",
        "internet-mail.org",
        "internetemails.net",
        "internetmailing.net",
        "jetemail.net",
        "justemail.net",
        "letterboxes.org",
        "mail-central.com",
        "mail-page.com",
        "mailandftp.com",
        "mailas.com",
        "mailbolt.com",
        "mailc.net",
        "mailcan.com",
        "mailforce.net",
        "mailftp.com",
        "mailhaven.com",
        "mailingaddress.org",
        "mailite.com",
        "mailmight.com",
        "mailnew.com",
        "mailsent.net",
        "mailservice.ms",
        "mailup.net",
        "mailworks.org",
        "ml1.net",
        "mm.st",
        "myfastmail.com",
        "mymacmail.com",
        "nospammail.net",
        "ownmail.net",
        "petml.com",
        "postinbox.com",
        "postpro.net",
        "proinbox.com",
        "promessage.com",
        "realemail.net",
        "reallyfast.biz",
        "reallyfast.info",
        "rushpost.com",
        "sent.as",
        "sent.at",
        "sent.com",
        "speedpost.net",
        "speedymail.org",
        "ssl-mail.com",
        "swift-mail.com",
        "the-fastest.net",
        "the-quickest.com",
        "theinternetemail.com",
        "veryfast.biz",
        "veryspeedy.net",
        "warpmail.net",
        "xsmail.com",
        "yepmail.net",
        "your-mail.com",
    ])
});

/// Yahoo domains. These use `-` rather than `+` as the alias delimiter.
pub static YAHOO_DOMAINS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "yahoo.com",
        "yahoo.ae",
        "yahoo.at",
        "yahoo.be",
        "yahoo.ca",
        "yahoo.ch",
        "yahoo.co.id",
        "yahoo.co.il",
        "yahoo.co.in",
        "yahoo.co.jp",
        "yahoo.co.nz",
        "yahoo.co.th",
        "yahoo.co.uk",
        "yahoo.co.za",
        "yahoo.com.ar",
        "yahoo.com.au",
        "yahoo.com.br",
        "yahoo.com.co",
        "yahoo.com.hk",
        "yahoo.com.hr",
        "yahoo.com.mx",
        "yahoo.com.my",
        "yahoo.com.ph",
        "yahoo.com.sg",
        "yahoo.com.tr",
        "yahoo.com.tw",
        "yahoo.com.vn",
        "yahoo.cz",
        "yahoo.de",
        "yahoo.dk",
        "yahoo.es",
        "yahoo.fi",
        "yahoo.fr",
        "yahoo.gr",
        "yahoo.hu",
        "yahoo.ie",
        "yahoo.in",
        "yahoo.it",
        "yahoo.nl",
        "yahoo.no",
        "yahoo.pl",
        "yahoo.pt",
        "yahoo.ro",
        "yahoo.ru",
        "yahoo.se",
    ])
});
