pub mod checks;
pub mod contact;
pub mod identity;

use serde::Serialize;
use tracing::debug;

use super::text::extract_text;
pub use checks::SiteChecks;

/// Returned by any contact field whose fallback chain comes up empty.
pub const NOT_FOUND: &str = "Not found";
pub const NO_META_DESCRIPTION: &str = "No meta description found";

const META_DESCRIPTION_MAX_CHARS: usize = 500;
const MAX_SERVICE_HEADINGS: usize = 15;

/// Everything the later stages know about a prospect's site.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facts {
    pub url: String,
    pub business_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub meta_description: String,
    pub service_headings: Vec<String>,
    pub site_checks: SiteChecks,
    pub colors: Colors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Colors {
    pub primary: String,
    pub accent: String,
}

impl Facts {
    pub fn with_business_name(mut self, name: &str) -> Self {
        self.business_name = name.to_string();
        self
    }

    pub fn has_real_meta_description(&self) -> bool {
        !self.meta_description.is_empty() && self.meta_description != NO_META_DESCRIPTION
    }
}

/// One document, pre-digested once so every rule sees the same views.
pub struct Page<'a> {
    pub html: &'a str,
    pub html_lower: String,
    pub text: String,
    pub text_lower: String,
    pub url: Option<&'a str>,
}

impl<'a> Page<'a> {
    pub fn new(html: &'a str, url: Option<&'a str>) -> Self {
        let text = extract_text(html);
        Page {
            html,
            html_lower: html.to_lowercase(),
            text_lower: text.to_lowercase(),
            text,
            url: url.filter(|u| !u.is_empty()),
        }
    }
}

/// A single step of a fallback chain.
pub struct Rule<T> {
    pub name: &'static str,
    pub apply: fn(&Page<'_>) -> Option<T>,
}

/// Run `rules` in order and keep the first hit; later rules are never evaluated.
pub fn resolve<T>(field: &str, page: &Page<'_>, rules: &[Rule<T>]) -> Option<T> {
    rules.iter().find_map(|rule| {
        let value = (rule.apply)(page)?;
        debug!("{} resolved by {}", field, rule.name);
        Some(value)
    })
}

pub fn extract_facts(html: &str, url: Option<&str>) -> Facts {
    let page = Page::new(html, url);

    let business_name = resolve("business name", &page, identity::BUSINESS_NAME_RULES)
        .unwrap_or_default();
    let phone = resolve("phone", &page, contact::PHONE_RULES).unwrap_or_else(|| NOT_FOUND.into());
    let email = resolve("email", &page, contact::EMAIL_RULES).unwrap_or_else(|| NOT_FOUND.into());
    let address =
        resolve("address", &page, contact::ADDRESS_RULES).unwrap_or_else(|| NOT_FOUND.into());
    let meta_description = resolve("meta description", &page, identity::META_DESCRIPTION_RULES)
        .unwrap_or_else(|| NO_META_DESCRIPTION.into());

    let mut service_headings = identity::service_headings(&page);
    service_headings.truncate(MAX_SERVICE_HEADINGS);

    Facts {
        url: page.url.unwrap_or_default().to_string(),
        business_name,
        phone,
        email,
        address,
        meta_description: meta_description
            .chars()
            .take(META_DESCRIPTION_MAX_CHARS)
            .collect(),
        service_headings,
        site_checks: SiteChecks::from_page(&page),
        colors: identity::brand_colors(&page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOES: &str = r#"<html><head><title>Joe's Plumbing | Indianapolis</title><meta name="description" content="24/7 plumbing repair"></head><body><h1>Welcome</h1><a href="tel:13175551234">Call</a><form></form></body></html>"#;

    #[test]
    fn joes_plumbing_scenario() {
        let f = extract_facts(JOES, Some("https://joesplumbing.com"));
        assert_eq!(f.business_name, "Joe's Plumbing");
        assert_eq!(f.phone, "(317) 555-1234");
        assert_eq!(f.meta_description, "24/7 plumbing repair");
        assert!(f.site_checks.uses_https);
        assert!(f.site_checks.has_h1);
        assert!(f.site_checks.has_forms);
        assert_eq!(f.site_checks.form_count, 1);
    }

    #[test]
    fn empty_document_falls_back_everywhere() {
        let f = extract_facts("", None);
        assert_eq!(f.url, "");
        assert_eq!(f.business_name, "");
        assert_eq!(f.phone, NOT_FOUND);
        assert_eq!(f.email, NOT_FOUND);
        assert_eq!(f.address, NOT_FOUND);
        assert_eq!(f.meta_description, NO_META_DESCRIPTION);
        assert!(f.service_headings.is_empty());
        assert_eq!(f.colors.primary, "#1a2332");
        assert_eq!(f.colors.accent, "#ff6b35");
        assert!(!f.has_real_meta_description());
    }

    #[test]
    fn extraction_is_deterministic() {
        let html = std::fs::read_to_string("tests/fixtures/acme_remodeling.html").unwrap();
        let a = extract_facts(&html, Some("https://acme-remodeling.com"));
        let b = extract_facts(&html, Some("https://acme-remodeling.com"));
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn acme_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/acme_remodeling.html").unwrap();
        let f = extract_facts(&html, Some("https://acme-remodeling.com"));
        assert_eq!(f.business_name, "Acme Remodeling");
        assert_eq!(f.phone, "(317) 555-8800");
        assert_eq!(f.email, "hello@acmeremodeling.com");
        assert_eq!(f.address, "1200 North Meridian Street, Indianapolis, IN 46204");
        assert_eq!(
            f.service_headings,
            vec!["Kitchen Remodeling", "Bathroom Renovation", "Basement Conversions", "Custom Decks"]
        );
        assert_eq!(f.colors.primary, "#0b3d91");
        assert_eq!(f.colors.accent, "#f4a261");
        assert!(f.site_checks.has_schema_markup);
        assert!(f.site_checks.has_social_links);
        assert!(f.site_checks.has_chat_widget);
        assert!(f.site_checks.uses_https);
        assert!(f.site_checks.has_viewport);
    }

    #[test]
    fn facts_after_minified_script_still_resolve() {
        let html = std::fs::read_to_string("tests/fixtures/acme_remodeling.html")
            .unwrap()
            .replace("tel:", "x-tel:");
        let f = extract_facts(&html, None);
        assert_eq!(f.phone, "(317) 555-8800");
        assert_eq!(f.address, "1200 North Meridian Street, Indianapolis, IN 46204");
        assert_eq!(f.site_checks.review_mentions, 2);
        assert!(f.site_checks.has_review_language);
        let page = Page::new(&html, None);
        assert!(!page.text.contains("hidden"));
        assert!(page.text.contains("Request Estimate"));
    }

    #[test]
    fn inline_script_comparisons_keep_text_facts() {
        let html = "<script>for(var i=0;i<n;i++){}</script><p>Call 317-555-1234. Read our reviews</p>";
        let f = extract_facts(html, None);
        assert_eq!(f.phone, "(317) 555-1234");
        assert_eq!(f.site_checks.review_mentions, 1);
        assert_eq!(f.site_checks.content_length, 35);
    }

    #[test]
    fn meta_description_truncated_to_500_chars() {
        let long = "a".repeat(800);
        let html = format!(r#"<meta name="description" content="{}">"#, long);
        let f = extract_facts(&html, None);
        assert_eq!(f.meta_description.chars().count(), 500);
    }

    #[test]
    fn headings_capped_at_fifteen() {
        let html: String = (0..20).map(|i| format!("<h3>Service {}</h3>", i)).collect();
        let f = extract_facts(&html, None);
        assert_eq!(f.service_headings.len(), 15);
        assert_eq!(f.service_headings[0], "Service 0");
        assert_eq!(f.service_headings[14], "Service 14");
    }

    #[test]
    fn name_override_replaces_extracted_name() {
        let f = extract_facts(JOES, None).with_business_name("Joe Smith Plumbing LLC");
        assert_eq!(f.business_name, "Joe Smith Plumbing LLC");
    }

    #[test]
    fn serializes_with_source_field_names() {
        let f = extract_facts(JOES, Some("https://joesplumbing.com"));
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v["businessName"], "Joe's Plumbing");
        assert_eq!(v["siteChecks"]["hasSSL"], true);
        assert_eq!(v["siteChecks"]["hasCTA"], false);
        assert_eq!(v["colors"]["primary"], "#1a2332");
    }

    #[test]
    fn resolve_stops_at_first_hit() {
        fn never(_: &Page<'_>) -> Option<u8> {
            None
        }
        fn one(_: &Page<'_>) -> Option<u8> {
            Some(1)
        }
        fn two(_: &Page<'_>) -> Option<u8> {
            Some(2)
        }
        let page = Page::new("", None);
        let rules = [
            Rule { name: "never", apply: never },
            Rule { name: "one", apply: one },
            Rule { name: "two", apply: two },
        ];
        assert_eq!(resolve("test", &page, &rules), Some(1));
        assert_eq!(resolve("test", &page, &rules[..1]), None);
    }
}
