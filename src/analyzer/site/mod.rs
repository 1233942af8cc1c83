pub mod catalog;

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::facts::{Facts, NOT_FOUND};
pub use catalog::Industry;
use catalog::{default_services, icon_for, INDUSTRY_KEYWORDS};

pub const DEFAULT_CITY: &str = "Indianapolis";
pub const MAX_SERVICES: usize = 6;

const PLACEHOLDER_PHONE: &str = "(317) 555-0000";
const PLACEHOLDER_EMAIL: &str = "info@example.com";
const LIGHT_SHADE: &str = "#f8f9fa";
const BUSINESS_HOURS: &str = "Mon–Fri 8AM–6PM, Sat 9AM–2PM";
const NEARBY_AREAS: [&str; 9] = [
    "Carmel", "Fishers", "Noblesville", "Westfield", "Zionsville", "Brownsburg", "Avon",
    "Greenwood", "Lawrence",
];
const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d195370.23!2d-86.33!3d39.78!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x886b50ffa7796a03%3A0xd68e9df640b9ea7c!2sIndianapolis%2C+IN!5e0!3m2!1sen!2sus";

/// Everything the demo-site template needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub business_name: String,
    pub tagline: String,
    pub industry: Industry,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub address: String,
    pub hours: &'static str,
    pub years_in_business: u32,
    pub projects_completed: &'static str,
    pub review_count: &'static str,
    pub license_number: &'static str,
    pub colors: Theme,
    pub services: Vec<Service>,
    pub service_areas: Vec<String>,
    pub testimonials: [Testimonial; 3],
    pub form_action: &'static str,
    pub map_embed: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub primary: String,
    pub accent: String,
    pub light: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub name: String,
    pub description: String,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub text: String,
    pub rating: u8,
    pub date: &'static str,
    pub project: String,
}

/// Guess the trade from the meta description, the name and the headings.
pub fn detect_industry(facts: &Facts) -> Industry {
    let haystack = format!(
        "{} {} {}",
        facts.meta_description.to_lowercase(),
        facts.business_name.to_lowercase(),
        facts.service_headings.join(" ").to_lowercase()
    );
    INDUSTRY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|(industry, _)| *industry)
        .unwrap_or(Industry::General)
}

/// Extracted headings first, then the industry's stock services, up to six.
pub fn build_services(headings: &[String], industry: Industry) -> Vec<Service> {
    let mut services = Vec::with_capacity(MAX_SERVICES);
    let mut used: HashSet<String> = HashSet::new();

    for heading in headings.iter().take(MAX_SERVICES) {
        let name = heading.trim();
        if name.chars().count() <= 2 || !used.insert(name.to_lowercase()) {
            continue;
        }
        services.push(Service {
            name: name.to_string(),
            description: format!(
                "Professional {} services delivered with quality craftsmanship and attention to detail.",
                name.to_lowercase()
            ),
            icon: icon_for(name),
        });
    }

    for (name, description) in default_services(industry) {
        if services.len() >= MAX_SERVICES {
            break;
        }
        if !used.insert(name.to_lowercase()) {
            continue;
        }
        services.push(Service {
            name: name.to_string(),
            description: description.to_string(),
            icon: icon_for(name),
        });
    }

    services
}

pub fn build_site_config(facts: &Facts, city: &str) -> SiteConfig {
    let name = facts.business_name.as_str();
    let industry = detect_industry(facts);
    debug!("{}: detected industry {}", name, industry.tag());

    let services = build_services(&facts.service_headings, industry);
    let project = |i: usize| {
        services
            .get(i)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "Service".to_string())
    };
    let testimonials = [
        Testimonial {
            name: "Sarah M.",
            text: format!(
                "Amazing experience with {name}! Professional, responsive, and delivered exactly what was promised. \
                 Highly recommend to anyone looking for quality service."
            ),
            rating: 5,
            date: "2 months ago",
            project: project(0),
        },
        Testimonial {
            name: "James K.",
            text: format!(
                "We've used {name} twice now and both times exceeded expectations. \
                 Fair pricing, great communication, and outstanding results."
            ),
            rating: 5,
            date: "3 weeks ago",
            project: project(1),
        },
        Testimonial {
            name: "Michael R.",
            text: format!(
                "Couldn't be happier with the work. {name} was respectful, on time, and the quality speaks for itself. \
                 Worth every penny."
            ),
            rating: 5,
            date: "1 month ago",
            project: project(2),
        },
    ];

    let service_areas = std::iter::once(city.to_string())
        .chain(NEARBY_AREAS.iter().map(|a| a.to_string()))
        .collect();

    SiteConfig {
        business_name: name.to_string(),
        tagline: format!("{name} — Your Trusted Local Partner"),
        industry,
        phone: found_or(&facts.phone, PLACEHOLDER_PHONE.to_string()),
        email: found_or(&facts.email, PLACEHOLDER_EMAIL.to_string()),
        website: facts.url.clone(),
        address: found_or(&facts.address, format!("{city}, IN")),
        hours: BUSINESS_HOURS,
        years_in_business: 10,
        projects_completed: "500+",
        review_count: "100+",
        license_number: "Licensed & Insured",
        colors: Theme {
            primary: facts.colors.primary.clone(),
            accent: facts.colors.accent.clone(),
            light: LIGHT_SHADE,
        },
        services,
        service_areas,
        testimonials,
        form_action: "#",
        map_embed: MAP_EMBED,
    }
}

fn found_or(value: &str, placeholder: String) -> String {
    if value == NOT_FOUND {
        placeholder
    } else {
        value.to_string()
    }
}
