// src/config/file.rs
//
// Optional `dashboard.toml`. Every key is optional; whatever is present
// overrides the defaults, and the environment overrides both.
//
// [data]
// dir = "output"                 # or: url = "https://host/output"
//
// [export]
// out_dir = "out"
// paper = "a4"                   # a4 | letter
// oversample = 2.0
//
// [refresh]
// owner = "club"
// repo = "radio-dashboard"
// workflow = "update-data.yml"
// ref = "main"

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use super::options::{AppOptions, DataSource, Paper};
use crate::error::ConfigError;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub data: DataSection,
    pub export: ExportSection,
    pub refresh: RefreshSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataSection {
    pub dir: Option<PathBuf>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportSection {
    pub out_dir: Option<PathBuf>,
    pub paper: Option<Paper>,
    pub oversample: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RefreshSection {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub workflow: Option<String>,
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    pub api_base: Option<String>,
}

impl SettingsFile {
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn apply(self, opts: &mut AppOptions) {
        // url wins over dir when both are given
        if let Some(dir) = self.data.dir {
            opts.data.source = DataSource::Dir(dir);
        }
        if let Some(url) = self.data.url {
            opts.data.source = DataSource::Url(url);
        }

        if let Some(dir) = self.export.out_dir { opts.export.out_dir = dir; }
        if let Some(paper) = self.export.paper { opts.export.paper = paper; }
        if let Some(k) = self.export.oversample {
            // Print legibility needs at least 2x
            opts.export.oversample = k.max(EXPORT_OVERSAMPLE);
        }

        let r = &mut opts.refresh;
        if self.refresh.owner.is_some() { r.owner = self.refresh.owner; }
        if self.refresh.repo.is_some() { r.repo = self.refresh.repo; }
        if let Some(w) = self.refresh.workflow { r.workflow = w; }
        if let Some(g) = self.refresh.git_ref { r.git_ref = g; }
        if let Some(a) = self.refresh.api_base { r.api_base = a; }
    }
}

/// Resolve options: defaults → settings file → environment.
///
/// An explicit `path` must exist. Without one, `dashboard.toml` in the working
/// directory is used when present.
pub fn load(path: Option<&Path>) -> Result<AppOptions, ConfigError> {
    let mut opts = AppOptions::default();

    let chosen = match path {
        Some(p) => Some(p.to_path_buf()),
        None => {
            let p = PathBuf::from(SETTINGS_FILE);
            p.is_file().then_some(p)
        }
    };

    if let Some(p) = chosen {
        let text = fs::read_to_string(&p)
            .map_err(|source| ConfigError::Read { path: p.clone(), source })?;
        SettingsFile::parse(&text, &p)?.apply(&mut opts);
        logf!("Config: Loaded {}", p.display());
    } else {
        logd!("Config: No {} found, using defaults", SETTINGS_FILE);
    }

    apply_env_with(&mut opts, |k| std::env::var(k).ok());
    Ok(opts)
}

/// Apply environment overrides through `lookup` (tests pass a map).
pub fn apply_env_with<F>(opts: &mut AppOptions, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(dir) = get(ENV_DATA_DIR) {
        opts.data.source = DataSource::Dir(PathBuf::from(dir));
    }
    if let Some(url) = get(ENV_DATA_URL) {
        opts.data.source = DataSource::Url(url);
    }

    let r = &mut opts.refresh;
    if let Some(t) = get(ENV_TOKEN) { r.token = Some(t); }
    if let Some(o) = get(ENV_OWNER) { r.owner = Some(o); }
    if let Some(p) = get(ENV_REPO) { r.repo = Some(p); }
    if let Some(w) = get(ENV_WORKFLOW) { r.workflow = w; }
    if let Some(g) = get(ENV_REF) { r.git_ref = g; }
}
