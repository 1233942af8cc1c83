use std::sync::LazyLock;

use regex::Regex;

use super::{Page, Rule};

static TEL_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)href=["']tel:([^"']+)"#).unwrap());
static PHONE_PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(?\d{3}\)?[\s.-]\d{3}[\s.-]\d{4}").unwrap());
static PHONE_PLAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3}[\s.-]\d{3}[\s.-]\d{4}").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());
static STREET_ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\d{1,5}\s+[A-Z][a-zA-Z\s]+",
        r"(?:Street|St|Avenue|Ave|Boulevard|Blvd|Drive|Dr|Road|Rd|Lane|Ln|Court|Ct|Way|Circle|Cir|Place|Pl)",
        r"\.?[\s,]+(?:Suite|Ste|#|Apt\.?)?\s*\d*[\s,]+",
        r"[A-Z][a-zA-Z\s]+,?\s*[A-Z]{2}\s+\d{5}",
    ))
    .unwrap()
});
static LOOSE_ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,5}\s+\S+\s+\S+[.,]\s*\S+[.,]?\s*[A-Z]{2}\s+\d{5}").unwrap()
});

/// Fragments of addresses that belong to templates, tracking or markup
/// vendors rather than the business itself.
const PLACEHOLDER_EMAIL_FRAGMENTS: &[&str] = &[
    "example.",
    "placeholder.",
    "sentry.",
    "wixpress.",
    "w3.org",
    "schema.org",
    "domain.",
    "email.",
    "yoursite.",
    "test.",
];

const MIN_PHONE_DIGITS: usize = 7;

pub const PHONE_RULES: &[Rule<String>] = &[
    Rule { name: "tel link", apply: phone_from_tel_link },
    Rule { name: "parenthesized pattern", apply: phone_from_paren_pattern },
    Rule { name: "plain pattern", apply: phone_from_plain_pattern },
];

pub const EMAIL_RULES: &[Rule<String>] = &[Rule { name: "first real address", apply: first_real_email }];

pub const ADDRESS_RULES: &[Rule<String>] = &[
    Rule { name: "street pattern", apply: street_address },
    Rule { name: "loose pattern", apply: loose_address },
];

fn phone_from_tel_link(page: &Page<'_>) -> Option<String> {
    let caps = TEL_LINK_RE.captures(page.html)?;
    normalize_tel(&caps[1])
}

fn phone_from_paren_pattern(page: &Page<'_>) -> Option<String> {
    phone_from_text(&PHONE_PAREN_RE, &page.text)
}

fn phone_from_plain_pattern(page: &Page<'_>) -> Option<String> {
    phone_from_text(&PHONE_PLAIN_RE, &page.text)
}

fn phone_from_text(re: &Regex, text: &str) -> Option<String> {
    let raw = re.find(text)?.as_str();
    Some(format_us_phone(&digits_of(raw)).unwrap_or_else(|| raw.to_string()))
}

/// Normalize the target of a `tel:` link.
///
/// `1` + ten digits is reduced to ten digits and formatted. Anything else with
/// at least seven digits is passed through as written; shorter is rejected.
pub fn normalize_tel(raw: &str) -> Option<String> {
    let mut digits = digits_of(raw);
    if digits.len() == 11 && digits.starts_with('1') {
        digits.remove(0);
    }
    if let Some(formatted) = format_us_phone(&digits) {
        return Some(formatted);
    }
    if digits.len() >= MIN_PHONE_DIGITS {
        Some(raw.trim().to_string())
    } else {
        None
    }
}

fn format_us_phone(digits: &str) -> Option<String> {
    if digits.len() != 10 {
        return None;
    }
    Some(format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]))
}

fn digits_of(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn first_real_email(page: &Page<'_>) -> Option<String> {
    EMAIL_RE
        .find_iter(page.html)
        .map(|m| m.as_str())
        .find(|email| is_real_email(email))
        .map(str::to_string)
}

fn is_real_email(email: &str) -> bool {
    let lower = email.to_lowercase();
    !PLACEHOLDER_EMAIL_FRAGMENTS
        .iter()
        .any(|fragment| lower.contains(fragment))
}

fn street_address(page: &Page<'_>) -> Option<String> {
    STREET_ADDRESS_RE
        .find(&page.text)
        .map(|m| m.as_str().trim().to_string())
}

fn loose_address(page: &Page<'_>) -> Option<String> {
    LOOSE_ADDRESS_RE
        .find(&page.text)
        .map(|m| m.as_str().trim().to_string())
}
