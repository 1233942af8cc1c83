use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::identity::TITLE_RE;
use super::Page;

static SCHEMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"application/ld\+json|schema\.org|itemtype").unwrap());
static REVIEW_LANGUAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"review|testimonial|rating|stars").unwrap());
static REVIEW_MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"review|testimonial").unwrap());
static CTA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"btn|button|cta|get.*quote|free.*estimate|contact.*us|call.*now|schedule|book.*now",
    )
    .unwrap()
});
static CHAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"livechat|tawk|intercom|drift|crisp|zendesk|hubspot.*chat|chat.*widget|messenger",
    )
    .unwrap()
});
static SOCIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"facebook|instagram|twitter|linkedin|youtube|yelp|google.*business|bbb\.org")
        .unwrap()
});

/// "Many" images starts above this count.
const MANY_IMAGES_THRESHOLD: usize = 3;

/// Presence flags and counters computed once per document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteChecks {
    pub has_viewport: bool,
    pub has_forms: bool,
    #[serde(rename = "hasSchema")]
    pub has_schema_markup: bool,
    #[serde(rename = "hasReviews")]
    pub has_review_language: bool,
    #[serde(rename = "hasCTA")]
    pub has_call_to_action: bool,
    pub has_h1: bool,
    pub has_clickable_phone: bool,
    #[serde(rename = "hasChat")]
    pub has_chat_widget: bool,
    #[serde(rename = "hasSSL")]
    pub uses_https: bool,
    pub has_title_tag: bool,
    #[serde(rename = "hasImages")]
    pub has_many_images: bool,
    #[serde(rename = "hasSocial")]
    pub has_social_links: bool,
    pub content_length: usize,
    pub review_mentions: usize,
    pub cta_count: usize,
    pub form_count: usize,
    pub image_count: usize,
}

impl SiteChecks {
    pub fn from_page(page: &Page<'_>) -> Self {
        let html = page.html_lower.as_str();
        let text = page.text_lower.as_str();
        let image_count = html.matches("<img").count();
        let form_count = html.matches("<form").count();

        SiteChecks {
            has_viewport: html.contains("viewport"),
            has_forms: form_count > 0,
            has_schema_markup: SCHEMA_RE.is_match(html),
            has_review_language: REVIEW_LANGUAGE_RE.is_match(text),
            has_call_to_action: CTA_RE.is_match(html),
            has_h1: html.contains("<h1"),
            has_clickable_phone: html.contains("tel:"),
            has_chat_widget: CHAT_RE.is_match(html),
            uses_https: page.url.is_some_and(|u| u.starts_with("https://")),
            has_title_tag: TITLE_RE.is_match(page.html),
            has_many_images: image_count > MANY_IMAGES_THRESHOLD,
            has_social_links: SOCIAL_RE.is_match(html),
            content_length: page.text.chars().count(),
            review_mentions: REVIEW_MENTION_RE.find_iter(text).count(),
            cta_count: CTA_RE.find_iter(html).count(),
            form_count,
            image_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checks(html: &str, url: Option<&str>) -> SiteChecks {
        SiteChecks::from_page(&Page::new(html, url))
    }

    #[test]
    fn empty_page_has_no_signals() {
        assert_eq!(checks("", None), SiteChecks::default());
    }

    #[test]
    fn https_comes_from_url_not_markup() {
        let html = r#"<a href="https://facebook.com/acme">FB</a>"#;
        assert!(!checks(html, None).uses_https);
        assert!(!checks(html, Some("http://acme.com")).uses_https);
        assert!(checks(html, Some("https://acme.com")).uses_https);
    }

    #[test]
    fn review_language_reads_visible_text_only() {
        let hidden = "<script>loadReviews()</script><p>Hello</p>";
        let c = checks(hidden, None);
        assert!(!c.has_review_language);
        assert_eq!(c.review_mentions, 0);

        let shown = "<p>Read our reviews and testimonials. 5 stars! Another Review.</p>";
        let c = checks(shown, None);
        assert!(c.has_review_language);
        assert_eq!(c.review_mentions, 3);
    }

    #[test]
    fn counters() {
        let html = "<IMG src=a><img src=b><img src=c><img src=d>\
                    <form id=quote></form><form id=news></form>\
                    <a class=\"btn\">Go</a><button>Send</button>";
        let c = checks(html, None);
        assert_eq!(c.image_count, 4);
        assert!(c.has_many_images);
        assert_eq!(c.form_count, 2);
        assert!(c.has_forms);
        // "btn", "button", "button" (closing tag)
        assert_eq!(c.cta_count, 3);
        assert!(c.has_call_to_action);
    }

    #[test]
    fn three_images_are_not_many() {
        let c = checks("<img><img><img>", None);
        assert_eq!(c.image_count, 3);
        assert!(!c.has_many_images);
    }

    #[test]
    fn markup_signals() {
        let html = r#"<head><title>X</title><meta name="viewport" content="width=device-width">
            <script type="application/ld+json">{}</script></head>
            <body><h1>Hi</h1><a href="tel:3175550000">Call</a>
            <script src="https://embed.tawk.to/123"></script>
            <a href="https://www.yelp.com/biz/x">Yelp</a></body>"#;
        let c = checks(html, None);
        assert!(c.has_title_tag);
        assert!(c.has_viewport);
        assert!(c.has_schema_markup);
        assert!(c.has_h1);
        assert!(c.has_clickable_phone);
        assert!(c.has_chat_widget);
        assert!(c.has_social_links);
    }

    #[test]
    fn content_length_counts_characters() {
        let c = checks("<p>Café</p>", None);
        assert_eq!(c.content_length, 4);
    }
}
