use std::sync::LazyLock;

use regex::Regex;

use super::{Colors, Page, Rule};

pub(crate) static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").unwrap());
static TITLE_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[|–—\-]\s*").unwrap());
static OG_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)property=["']og:title["'][^>]*content=["']([^"']+)"#).unwrap()
});
static URL_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://(www\.)?").unwrap());
static META_DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)name=["']description["'][^>]*content=["']([^"']+)"#).unwrap()
});
static OG_DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)property=["']og:description["'][^>]*content=["']([^"']+)"#).unwrap()
});
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h[2-4][^>]*>([^<]{3,60})</h[2-4]>").unwrap());
static PRIMARY_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--(?:primary|brand|main)[^:]*:\s*(#[0-9a-fA-F]{3,8})").unwrap()
});
static ACCENT_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--(?:accent|secondary|highlight)[^:]*:\s*(#[0-9a-fA-F]{3,8})").unwrap()
});

pub const DEFAULT_PRIMARY: &str = "#1a2332";
pub const DEFAULT_ACCENT: &str = "#ff6b35";

/// Navigation, legal and call-to-action words that disqualify a heading.
const HEADING_STOP_WORDS: &[&str] = &[
    "welcome", "hello", "click", "learn more", "read more", "view", "see",
    "our team", "meet", "get started", "sign up", "log in", "subscribe",
    "menu", "navigation", "footer", "header", "copyright", "cookie", "privacy",
];

pub const BUSINESS_NAME_RULES: &[Rule<String>] = &[
    Rule { name: "title tag", apply: name_from_title },
    Rule { name: "og:title", apply: name_from_og_title },
    Rule { name: "url domain", apply: name_from_url },
];

pub const META_DESCRIPTION_RULES: &[Rule<String>] = &[
    Rule { name: "meta description", apply: description_from_meta },
    Rule { name: "og:description", apply: description_from_og },
];

fn name_from_title(page: &Page<'_>) -> Option<String> {
    let title = first_capture(&TITLE_RE, page.html)?;
    // Drop taglines: "Acme Roofing | Indianapolis" → "Acme Roofing"
    let name = TITLE_SEPARATOR_RE.split(&title).next()?.trim();
    non_empty(name)
}

fn name_from_og_title(page: &Page<'_>) -> Option<String> {
    first_capture(&OG_TITLE_RE, page.html)
}

fn name_from_url(page: &Page<'_>) -> Option<String> {
    let stripped = URL_PREFIX_RE.replace_all(page.url?, "");
    let label = stripped.split('/').next()?.split('.').next()?;
    non_empty(&title_case(&label.replace(['-', '_'], " ")))
}

fn description_from_meta(page: &Page<'_>) -> Option<String> {
    first_capture(&META_DESCRIPTION_RE, page.html)
}

fn description_from_og(page: &Page<'_>) -> Option<String> {
    first_capture(&OG_DESCRIPTION_RE, page.html)
}

/// Capitalize the first letter of every alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

pub fn service_headings(page: &Page<'_>) -> Vec<String> {
    HEADING_RE
        .captures_iter(page.html)
        .map(|caps| caps[1].trim().to_string())
        .filter(|h| !h.is_empty())
        .filter(|h| {
            let lower = h.to_lowercase();
            !HEADING_STOP_WORDS.iter().any(|sw| lower.contains(sw))
        })
        .collect()
}

pub fn brand_colors(page: &Page<'_>) -> Colors {
    Colors {
        primary: first_capture(&PRIMARY_VAR_RE, page.html)
            .unwrap_or_else(|| DEFAULT_PRIMARY.to_string()),
        accent: first_capture(&ACCENT_VAR_RE, page.html)
            .unwrap_or_else(|| DEFAULT_ACCENT.to_string()),
    }
}

fn first_capture(re: &Regex, haystack: &str) -> Option<String> {
    let caps = re.captures(haystack)?;
    non_empty(caps[1].trim())
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::super::resolve;
    use super::*;

    fn name(html: &str, url: Option<&str>) -> Option<String> {
        resolve("business name", &Page::new(html, url), BUSINESS_NAME_RULES)
    }

    #[test]
    fn title_tagline_dropped() {
        assert_eq!(
            name("<title>Summit Roofing – Indy's Best Roofers</title>", None).as_deref(),
            Some("Summit Roofing")
        );
        assert_eq!(
            name("<TITLE> Bright Dental — Home </TITLE>", None).as_deref(),
            Some("Bright Dental")
        );
        assert_eq!(
            name("<title>Green-Lawn Care</title>", None).as_deref(),
            Some("Green")
        );
    }

    #[test]
    fn og_title_when_title_missing() {
        let html = r#"<meta property="og:title" content="Hoosier HVAC">"#;
        assert_eq!(name(html, Some("https://x.com")).as_deref(), Some("Hoosier HVAC"));
    }

    #[test]
    fn og_title_when_title_is_only_separator() {
        let html = r#"<title> | Home</title><meta property="og:title" content="Hoosier HVAC">"#;
        assert_eq!(name(html, None).as_deref(), Some("Hoosier HVAC"));
    }

    #[test]
    fn url_derived_name() {
        assert_eq!(
            name("", Some("https://www.joes-plumbing_co.com/about")).as_deref(),
            Some("Joes Plumbing Co")
        );
        assert_eq!(name("", Some("http://ACMEROOF.net")).as_deref(), Some("Acmeroof"));
    }

    #[test]
    fn no_name_without_url() {
        assert_eq!(name("<p>nothing here</p>", None), None);
        assert_eq!(name("", Some("")), None);
    }

    #[test]
    fn meta_description_prefers_name_over_og() {
        let html = r#"<meta property="og:description" content="OG text"><meta name="description" content="Plain text">"#;
        let page = Page::new(html, None);
        assert_eq!(
            resolve("meta", &page, META_DESCRIPTION_RULES).as_deref(),
            Some("Plain text")
        );

        let html = r#"<meta property="og:description" content="OG text">"#;
        let page = Page::new(html, None);
        assert_eq!(
            resolve("meta", &page, META_DESCRIPTION_RULES).as_deref(),
            Some("OG text")
        );
    }

    #[test]
    fn headings_filter_stop_words_and_length() {
        let html = "<h2>Water Heater Repair</h2>\
                    <h2>Welcome to our site</h2>\
                    <h3>Ok</h3>\
                    <h4 class=\"title\">Drain Cleaning</h4>\
                    <h2>Meet the crew</h2>\
                    <h5>Sewer Lines</h5>\
                    <h2><span>Nested</span></h2>\
                    <h3>Privacy Policy</h3>";
        let page = Page::new(html, None);
        assert_eq!(
            service_headings(&page),
            vec!["Water Heater Repair", "Drain Cleaning"]
        );
    }

    #[test]
    fn colors_from_custom_properties() {
        let html = "<style>:root { --brand-color: #123abc; --secondary: #fff; --primary: #000000; }</style>";
        let colors = brand_colors(&Page::new(html, None));
        assert_eq!(colors.primary, "#123abc");
        assert_eq!(colors.accent, "#fff");
    }

    #[test]
    fn colors_default_when_absent() {
        let colors = brand_colors(&Page::new("<style>body { color: red; }</style>", None));
        assert_eq!(colors.primary, DEFAULT_PRIMARY);
        assert_eq!(colors.accent, DEFAULT_ACCENT);
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("joes plumbing"), "Joes Plumbing");
        assert_eq!(title_case("abc123def"), "Abc123Def");
    }
}
