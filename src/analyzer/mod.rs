pub mod audit;
pub mod facts;
pub mod site;
pub mod text;

use chrono::NaiveDate;

use audit::Audit;
use facts::Facts;
use site::SiteConfig;

/// One prospect page plus the knobs the caller controls.
pub struct ProspectInput<'a> {
    pub html: &'a str,
    pub url: Option<&'a str>,
    pub override_name: Option<&'a str>,
    pub city: &'a str,
    pub generated_on: NaiveDate,
}

pub struct Analysis {
    pub facts: Facts,
    pub audit: Audit,
    pub site: SiteConfig,
}

/// HTML → facts, then audit and site config from the same facts.
pub fn analyze(input: &ProspectInput<'_>) -> Analysis {
    let mut facts = facts::extract_facts(input.html, input.url);
    if let Some(name) = input.override_name.filter(|n| !n.is_empty()) {
        facts = facts.with_business_name(name);
    }
    let audit = audit::score(&facts, input.generated_on);
    let site = site::build_site_config(&facts, input.city);
    Analysis { facts, audit, site }
}
