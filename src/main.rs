mod analyzer;
mod manifest;
mod output;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use analyzer::{analyze, Analysis, ProspectInput};
use output::OutputPaths;

#[derive(Parser)]
#[command(
    name = "prospect_analyzer",
    about = "Turn a fetched small-business homepage into research, audit and demo-site JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single fetched HTML page
    Analyze {
        /// Path to the fetched HTML file
        #[arg(long)]
        html: PathBuf,
        /// Original URL of the page
        #[arg(long, default_value = "")]
        url: String,
        /// Output path for the research JSON
        #[arg(long)]
        research_out: PathBuf,
        /// Output path for the audit JSON
        #[arg(long)]
        audit_out: PathBuf,
        /// Output path for the site config JSON
        #[arg(long)]
        site_config_out: PathBuf,
        /// Use this business name instead of the extracted one
        #[arg(long, default_value = "")]
        override_name: String,
        /// City the demo site's service areas are built around
        #[arg(long, env = "PROSPECT_CITY", default_value = analyzer::site::DEFAULT_CITY)]
        city: String,
    },
    /// Analyze every page listed in a JSON manifest, in parallel
    Batch {
        /// JSON array of {html, url?, name?, slug?}
        #[arg(short, long)]
        manifest: PathBuf,
        /// Each prospect gets <out-dir>/<slug>/{research,audit,site-config}.json
        #[arg(short, long, default_value = "out")]
        out_dir: PathBuf,
        #[arg(long, env = "PROSPECT_CITY", default_value = analyzer::site::DEFAULT_CITY)]
        city: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let today = Local::now().date_naive();

    let result = match cli.command {
        Commands::Analyze {
            html,
            url,
            research_out,
            audit_out,
            site_config_out,
            override_name,
            city,
        } => {
            info!("Reading HTML {}", html.display());
            let document = output::read_html(&html);
            let analysis = analyze(&ProspectInput {
                html: &document,
                url: Some(url.as_str()),
                override_name: Some(override_name.as_str()),
                city: &city,
                generated_on: today,
            });
            print_analysis(&analysis);

            let paths = OutputPaths {
                research: research_out,
                audit: audit_out,
                site_config: site_config_out,
            };
            output::save_analysis(&paths, &analysis)
        }
        Commands::Batch {
            manifest,
            out_dir,
            city,
        } => {
            let entries = manifest::load(&manifest)?;
            if entries.is_empty() {
                println!("Manifest has no prospects.");
                return Ok(());
            }
            println!("Analyzing {} prospects...", entries.len());
            let rows = run_batch(&entries, &out_dir, &city, today)?;
            print_overview(&rows);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn print_analysis(analysis: &Analysis) {
    let facts = &analysis.facts;
    println!("Business: {}", facts.business_name);
    println!("Phone:    {}", facts.phone);
    println!("Email:    {}", facts.email);
    println!("Address:  {}", facts.address);

    println!("\nOverall Score: {}/100", analysis.audit.overall_score);
    for category in &analysis.audit.categories {
        println!("  {}: {}/{}", category.name, category.score, category.max_score);
    }

    let site = &analysis.site;
    println!("\nDetected industry: {}", site.industry.tag());
    let services: Vec<&str> = site.services.iter().map(|s| s.name.as_str()).collect();
    println!("Services: {}", services.join(", "));
    println!("Colors:   {} / {}", site.colors.primary, site.colors.accent);
}

/// One line of the batch overview table.
struct OverviewRow {
    slug: String,
    business_name: String,
    score: u32,
    industry: &'static str,
    phone: String,
}

fn run_batch(
    entries: &[manifest::ManifestEntry],
    out_dir: &Path,
    city: &str,
    today: NaiveDate,
) -> Result<Vec<OverviewRow>> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let slugs = manifest::unique_slugs(entries);
    let results: Vec<_> = entries
        .par_iter()
        .zip(slugs)
        .map(|(entry, slug)| {
            let row = analyze_entry(entry, &slug, out_dir, city, today);
            pb.inc(1);
            (slug, row)
        })
        .collect();
    pb.finish_and_clear();

    let mut rows = Vec::with_capacity(results.len());
    let mut errors = 0usize;
    for (slug, result) in results {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                warn!("Prospect {} failed: {:#}", slug, e);
                errors += 1;
            }
        }
    }
    println!("Done: {} analyzed ({} errors).", rows.len(), errors);
    Ok(rows)
}

fn analyze_entry(
    entry: &manifest::ManifestEntry,
    slug: &str,
    out_dir: &Path,
    city: &str,
    today: NaiveDate,
) -> Result<OverviewRow> {
    let document = output::read_html(&entry.html);
    let analysis = analyze(&ProspectInput {
        html: &document,
        url: entry.url.as_deref(),
        override_name: entry.name.as_deref(),
        city,
        generated_on: today,
    });
    output::save_analysis(&OutputPaths::in_dir(&out_dir.join(slug)), &analysis)?;

    Ok(OverviewRow {
        slug: slug.to_string(),
        business_name: analysis.facts.business_name,
        score: analysis.audit.overall_score,
        industry: analysis.site.industry.tag(),
        phone: analysis.facts.phone,
    })
}

fn print_overview(rows: &[OverviewRow]) {
    if rows.is_empty() {
        return;
    }
    println!(
        "{:>3} | {:<24} | {:<28} | {:>5} | {:<12} | {:<14}",
        "#", "Slug", "Business", "Score", "Industry", "Phone"
    );
    println!("{}", "-".repeat(100));
    for (i, r) in rows.iter().enumerate() {
        println!(
            "{:>3} | {:<24} | {:<28} | {:>5} | {:<12} | {:<14}",
            i + 1,
            truncate(&r.slug, 24),
            truncate(&r.business_name, 28),
            r.score,
            r.industry,
            r.phone
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    let (h, m, s) = (secs / 3600, secs / 60 % 60, secs % 60);
    match (h, m) {
        (0, 0) => format!("{:.1}s", d.as_secs_f64()),
        (0, _) => format!("{}m {}s", m, s),
        _ => format!("{}h {}m {}s", h, m, s),
    }
}
