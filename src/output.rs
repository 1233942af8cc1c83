use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::analyzer::Analysis;

/// Stands in for a page that could not be read, so the pipeline still runs.
pub const STUB_DOCUMENT: &str = "<html><head><title>Unknown</title></head><body></body></html>";

pub struct OutputPaths {
    pub research: PathBuf,
    pub audit: PathBuf,
    pub site_config: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: &Path) -> Self {
        OutputPaths {
            research: dir.join("research.json"),
            audit: dir.join("audit.json"),
            site_config: dir.join("site-config.json"),
        }
    }
}

pub fn read_html(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!("Could not read HTML {}: {}", path.display(), e);
            STUB_DOCUMENT.to_string()
        }
    }
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn save_analysis(paths: &OutputPaths, analysis: &Analysis) -> Result<()> {
    write_json(&paths.research, &analysis.facts)?;
    info!("Research saved: {}", paths.research.display());
    write_json(&paths.audit, &analysis.audit)?;
    info!("Audit saved: {}", paths.audit.display());
    write_json(&paths.site_config, &analysis.site)?;
    info!("Site config saved: {}", paths.site_config.display());
    Ok(())
}
