use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::facts::{Facts, SiteChecks, NOT_FOUND};

pub const MAX_CATEGORY_SCORE: u32 = 10;
const MAX_ISSUES: usize = 3;
const MAX_RECOMMENDATIONS: usize = 5;
const AVG_JOB_VALUE: &str = "$15,000";

const COMPETITOR_NOTES: &[&str] = &[
    "Top-ranking competitors in your area have 10+ service pages — they're capturing search traffic you're missing",
    "Competitors with reviews displayed on their site convert 2-3x more visitors into leads",
];

const ALWAYS_RECOMMENDED: &[&str] = &[
    "Implement structured data markup for rich search results",
    "Add a lead magnet (free guide, checklist) to capture email leads",
];

/// The growth audit handed to the report renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    pub business_name: String,
    pub owner_name: &'static str,
    pub website: String,
    pub phone: String,
    pub date: String,
    pub avg_job_value: &'static str,
    pub overall_score: u32,
    pub executive_summary: String,
    pub categories: [CategoryScore; 5],
    pub revenue_impact: RevenueImpact,
    pub competitors: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub name: &'static str,
    pub icon: &'static str,
    pub score: u32,
    pub max_score: u32,
    pub issues: Vec<&'static str>,
    pub benchmark: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueImpact {
    pub current_conversion: &'static str,
    pub potential_conversion: &'static str,
    pub estimated_monthly_visitors: u32,
    pub avg_job_value: &'static str,
    pub lost_leads_per_month: &'static str,
    pub annual_revenue_lost: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    FirstImpressions,
    Mobile,
    Trust,
    LeadCapture,
    Seo,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::FirstImpressions => "First Impressions",
            Category::Mobile => "Mobile Experience",
            Category::Trust => "Trust & Credibility",
            Category::LeadCapture => "Lead Capture",
            Category::Seo => "SEO & Visibility",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Category::FirstImpressions => "👁️",
            Category::Mobile => "📱",
            Category::Trust => "⭐",
            Category::LeadCapture => "🎯",
            Category::Seo => "🔍",
        }
    }

    fn benchmark(self) -> &'static str {
        match self {
            Category::FirstImpressions => {
                "Top businesses have a clear value prop + contact form visible immediately"
            }
            Category::Mobile => {
                "60%+ of visitors are on mobile. They should be able to call you in one tap."
            }
            Category::Trust => {
                "Customers check 3-5 businesses before calling. Reviews and photos win."
            }
            Category::LeadCapture => "Best sites have a form above the fold + click-to-call everywhere.",
            Category::Seo => {
                "Local SEO = free leads forever. Service area pages rank for '[service] in [city]'."
            }
        }
    }

    /// Issues reported when no specific deficiency was found.
    fn fallback_issues(self) -> &'static [&'static str] {
        match self {
            Category::FirstImpressions => {
                &["Homepage could benefit from a stronger hero section and visual hierarchy"]
            }
            Category::Mobile => &[
                "Mobile layout could be optimized for thumb-friendly navigation",
                "Key information may be hidden below the fold on mobile",
            ],
            Category::Trust => &["License and insurance information not prominently displayed"],
            Category::LeadCapture => &["Contact form could be simplified to reduce friction"],
            Category::Seo => &["No dedicated service area pages for local SEO"],
        }
    }
}

impl CategoryScore {
    fn new(category: Category, raw_score: u32, mut issues: Vec<&'static str>) -> Self {
        if issues.is_empty() {
            issues.extend_from_slice(category.fallback_issues());
        }
        issues.truncate(MAX_ISSUES);
        CategoryScore {
            name: category.name(),
            icon: category.icon(),
            score: raw_score.min(MAX_CATEGORY_SCORE),
            max_score: MAX_CATEGORY_SCORE,
            issues,
            benchmark: category.benchmark(),
        }
    }
}

/// Score a site on the five growth categories and assemble the audit.
pub fn score(facts: &Facts, generated_on: NaiveDate) -> Audit {
    let checks = &facts.site_checks;

    let first = first_impressions(checks);
    let mobile = mobile_experience(checks);
    let trust = trust_and_credibility(checks);
    let lead = lead_capture(checks);
    let seo = seo_and_visibility(checks, facts.has_real_meta_description());

    let overall_score = 2 * (first.score + mobile.score + trust.score + lead.score + seo.score);
    debug!(
        "{}: overall {} (first {}, mobile {}, trust {}, lead {}, seo {})",
        facts.business_name, overall_score, first.score, mobile.score, trust.score, lead.score,
        seo.score
    );

    let recommendations = recommendations(checks, &mobile, &trust, &lead, &seo);
    let revenue_impact = revenue_impact(checks, &lead);

    Audit {
        business_name: facts.business_name.clone(),
        owner_name: "Owner",
        website: if facts.url.is_empty() {
            NOT_FOUND.to_string()
        } else {
            facts.url.clone()
        },
        phone: facts.phone.clone(),
        date: generated_on.format("%B %d, %Y").to_string(),
        avg_job_value: AVG_JOB_VALUE,
        overall_score,
        executive_summary: executive_summary(&facts.business_name, overall_score),
        categories: [first, mobile, trust, lead, seo],
        revenue_impact,
        competitors: COMPETITOR_NOTES.to_vec(),
        recommendations,
    }
}

fn first_impressions(c: &SiteChecks) -> CategoryScore {
    let mut score = 3;
    if c.has_h1 {
        score += 2;
    }
    if c.cta_count > 2 {
        score += 2;
    } else if c.has_call_to_action {
        score += 1;
    }
    if c.image_count > 5 {
        score += 2;
    } else if c.image_count >= 1 {
        score += 1;
    }
    if c.content_length > 5000 {
        score += 1;
    }

    let mut issues = Vec::new();
    if !c.has_h1 {
        issues.push("No clear headline — visitors don't know what you do in 3 seconds");
    }
    if !c.has_call_to_action || c.cta_count < 3 {
        issues.push("Weak or missing call-to-action — visitors aren't guided to contact you");
    }
    if c.image_count < 5 {
        issues.push("Few or no project images — missing visual proof of your work");
    }
    if c.content_length < 3000 {
        issues.push("Thin content — not enough information to build confidence");
    }

    CategoryScore::new(Category::FirstImpressions, score, issues)
}

fn mobile_experience(c: &SiteChecks) -> CategoryScore {
    let mut score = 3;
    if c.has_viewport {
        score += 3;
    }
    if c.has_clickable_phone {
        score += 2;
    }
    if c.uses_https {
        score += 1;
    }
    if c.has_call_to_action {
        score += 1;
    }

    let mut issues = Vec::new();
    if !c.has_viewport {
        issues.push("No viewport meta tag — site may not be mobile-responsive");
    }
    if !c.has_clickable_phone {
        issues.push("Phone number not clickable — mobile users can't tap to call");
    }
    if !c.uses_https {
        issues.push("Not using HTTPS — browsers show 'Not Secure' warning");
    }

    CategoryScore::new(Category::Mobile, score, issues)
}

fn trust_and_credibility(c: &SiteChecks) -> CategoryScore {
    let mut score = 2;
    if c.review_mentions > 5 {
        score += 3;
    } else if c.review_mentions > 0 {
        score += 1;
    }
    if c.has_social_links {
        score += 2;
    }
    if c.image_count > 10 {
        score += 2;
    } else if c.image_count >= 1 {
        score += 1;
    }
    if c.has_schema_markup {
        score += 1;
    }

    let mut issues = Vec::new();
    if c.review_mentions < 3 {
        issues.push("No Google reviews or testimonials displayed on website");
    }
    if c.image_count < 10 {
        issues.push("Limited portfolio — no before/after project showcase");
    }
    if !c.has_social_links {
        issues.push("No social media links — missing social proof opportunities");
    }

    CategoryScore::new(Category::Trust, score, issues)
}

fn lead_capture(c: &SiteChecks) -> CategoryScore {
    let mut score = 2;
    if c.form_count > 1 {
        score += 3;
    } else if c.has_forms {
        score += 2;
    }
    if c.has_clickable_phone {
        score += 2;
    }
    if c.has_chat_widget {
        score += 2;
    }
    if c.cta_count > 3 {
        score += 1;
    }

    let mut issues = Vec::new();
    if c.form_count < 2 {
        issues.push(
            "No quote request form on homepage — forcing visitors to hunt for contact info",
        );
    }
    if !c.has_clickable_phone {
        issues.push("No sticky phone number — mobile users lose the number when scrolling");
    }
    if !c.has_chat_widget {
        issues.push("No live chat or chat widget — missing instant engagement opportunity");
    }

    CategoryScore::new(Category::LeadCapture, score, issues)
}

fn seo_and_visibility(c: &SiteChecks, has_meta_description: bool) -> CategoryScore {
    let mut score = 2;
    if c.has_title_tag {
        score += 2;
    }
    if c.has_schema_markup {
        score += 2;
    }
    if c.content_length > 10000 {
        score += 2;
    } else if c.content_length > 3000 {
        score += 1;
    }
    if c.uses_https {
        score += 1;
    }
    if has_meta_description {
        score += 1;
    }

    let mut issues = Vec::new();
    if !c.has_title_tag {
        issues.push("Missing or generic title tag — invisible to Google searchers");
    }
    if !has_meta_description {
        issues.push("No meta description — Google shows random text in search results");
    }
    if !c.has_schema_markup {
        issues.push("No schema markup — missing rich snippets in search results");
    }
    if c.content_length < 5000 {
        issues.push("Thin content — not enough text for Google to understand your services");
    }

    CategoryScore::new(Category::Seo, score, issues)
}

fn executive_summary(business_name: &str, overall: u32) -> String {
    match overall {
        0..=29 => format!(
            "{business_name} has significant gaps in their online presence that are costing them leads every day. \
             Critical issues in mobile experience, lead capture, and SEO mean potential customers are finding competitors instead. \
             The good news: these are all fixable, and fixing them would put you ahead of 90% of local competitors."
        ),
        30..=49 => format!(
            "{business_name} has a basic web presence, but major gaps in lead capture, trust signals, and SEO are leaving money on the table. \
             Competitors with better-optimized sites are capturing the leads that should be yours. \
             Strategic improvements could double your online lead generation within 90 days."
        ),
        50..=69 => format!(
            "{business_name} has a decent foundation online, but specific gaps in conversion optimization and local SEO are limiting your growth. \
             Targeted improvements in lead capture and trust-building could significantly increase your lead flow."
        ),
        _ => format!(
            "{business_name} has a solid online presence with room for strategic improvements. \
             Fine-tuning your conversion funnel and local SEO presence would help capture more market share."
        ),
    }
}

fn recommendations(
    c: &SiteChecks,
    mobile: &CategoryScore,
    trust: &CategoryScore,
    lead: &CategoryScore,
    seo: &CategoryScore,
) -> Vec<&'static str> {
    let mut recs = Vec::new();
    if lead.score < 5 {
        recs.push("Add a prominent quote request form above the fold on every page");
    }
    if !c.has_clickable_phone {
        recs.push("Make phone number click-to-call and sticky on mobile");
    }
    if trust.score < 5 {
        recs.push("Display your best Google reviews and before/after project photos");
    }
    if mobile.score < 5 {
        recs.push("Rebuild for mobile-first — 60%+ of your visitors are on phones");
    }
    if seo.score < 5 {
        recs.push("Create service area pages targeting '[service] + [city]' keywords");
    }
    if recs.is_empty() {
        recs.push("Optimize conversion funnel for higher lead capture rate");
    }
    recs.extend_from_slice(ALWAYS_RECOMMENDED);
    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}

fn revenue_impact(c: &SiteChecks, lead: &CategoryScore) -> RevenueImpact {
    RevenueImpact {
        current_conversion: if lead.score > 5 { "1-2%" } else { "under 1%" },
        potential_conversion: "5-8%",
        estimated_monthly_visitors: if c.content_length > 10000 { 800 } else { 500 },
        avg_job_value: AVG_JOB_VALUE,
        lost_leads_per_month: "10-25",
        annual_revenue_lost: "$100K-300K",
    }
}
