// src/config/options.rs
use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use super::consts::*;
use crate::export::PageSize;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppOptions {
    pub data: DataOptions,
    pub export: ExportOptions,
    pub refresh: RefreshOptions,
}

/// Where the analytics JSON files come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Local directory holding `all_matches.json` etc.
    Dir(PathBuf),
    /// Base URL the files are served under (e.g. `https://host/output`).
    Url(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataOptions {
    pub source: DataSource,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self { source: DataSource::Dir(PathBuf::from(DEFAULT_DATA_DIR)) }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paper {
    #[default]
    A4,
    Letter,
}

impl Paper {
    pub fn page_size(self) -> PageSize {
        match self {
            Paper::A4 => PageSize::A4,
            Paper::Letter => PageSize::LETTER,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Some(Paper::A4),
            "letter" | "us-letter" => Some(Paper::Letter),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub paper: Paper,
    /// Pixel oversampling applied when rasterizing a capture region.
    pub oversample: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            paper: Paper::A4,
            oversample: EXPORT_OVERSAMPLE,
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<stem>.pdf`; a stem that already ends in `.pdf` is kept as is.
    pub fn out_path(&self, stem: &str) -> PathBuf {
        let name = if stem.to_ascii_lowercase().ends_with(".pdf") {
            s!(stem)
        } else {
            join!(stem, ".", PDF_EXT)
        };
        self.out_dir.join(name)
    }
}

/// Workflow dispatch settings. The token only ever comes from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshOptions {
    pub token: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub workflow: String,
    pub git_ref: String,
    pub api_base: String,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            token: None,
            owner: None,
            repo: None,
            workflow: s!(DEFAULT_WORKFLOW),
            git_ref: s!(DEFAULT_REF),
            api_base: s!(GITHUB_API),
        }
    }
}

impl fmt::Debug for RefreshOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshOptions")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("workflow", &self.workflow)
            .field("git_ref", &self.git_ref)
            .field("api_base", &self.api_base)
            .finish()
    }
}
