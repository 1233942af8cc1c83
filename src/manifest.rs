use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

/// One prospect in a batch manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub html: PathBuf,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl ManifestEntry {
    /// Output directory name: explicit slug, else URL host, else file stem.
    pub fn slug(&self) -> String {
        if let Some(slug) = self.slug.as_deref().filter(|s| !s.trim().is_empty()) {
            return slug.trim().to_string();
        }
        if let Some(host) = self.url.as_deref().and_then(host_of) {
            return host;
        }
        self.html
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "prospect".to_string())
    }
}

fn host_of(url: &str) -> Option<String> {
    let rest = url.split("//").nth(1).unwrap_or(url);
    let host = rest
        .split('/')
        .next()
        .unwrap_or("")
        .trim_start_matches("www.");
    if host.is_empty() {
        None
    } else {
        Some(host.to_lowercase())
    }
}

/// Slugs for a whole batch, in entry order. Repeats get `-2`, `-3`, ... so no
/// two entries share an output directory.
pub fn unique_slugs(entries: &[ManifestEntry]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    entries
        .iter()
        .map(|entry| {
            let base = entry.slug();
            let mut slug = base.clone();
            let mut n = 2;
            while !taken.insert(slug.clone()) {
                slug = format!("{}-{}", base, n);
                n += 1;
            }
            if slug != base {
                warn!("Duplicate slug {}, writing to {}", base, slug);
            }
            slug
        })
        .collect()
}

/// Load a JSON array of entries; relative HTML paths resolve against the manifest's directory.
pub fn load(path: &Path) -> Result<Vec<ManifestEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    let mut entries: Vec<ManifestEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid manifest {}", path.display()))?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    for entry in &mut entries {
        if entry.html.is_relative() {
            entry.html = base.join(&entry.html);
        }
    }

    info!("Loaded {} prospects from {}", entries.len(), path.display());
    Ok(entries)
}
