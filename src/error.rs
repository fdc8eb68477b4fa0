// src/error.rs
//
// One error enum per concern. Sorting and derived metrics have none: they
// degrade absent or malformed values to sentinels instead of failing.

use std::path::PathBuf;

use thiserror::Error;

/// Loading a batch of named result sets. Any single failure fails the batch.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {name} from {path}: {source}")]
    Read {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {name}: {message}")]
    Fetch { name: &'static str, message: String },

    #[error("failed to load {name}: HTTP {status}")]
    Status { name: &'static str, status: u16 },

    #[error("invalid JSON in {name}: {source}")]
    Json {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected shape in {name}: {detail}")]
    Shape { name: &'static str, detail: String },
}

impl IngestError {
    /// File name of the result set that broke the batch.
    pub fn set_name(&self) -> &'static str {
        match self {
            IngestError::Read { name, .. }
            | IngestError::Fetch { name, .. }
            | IngestError::Status { name, .. }
            | IngestError::Json { name, .. }
            | IngestError::Shape { name, .. } => name,
        }
    }
}

/// Asking the external workflow to regenerate the data files.
/// Messages are shown to the operator verbatim.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("Missing GitHub configuration. Set {}.", .missing.join(", "))]
    MissingConfig { missing: Vec<&'static str> },

    #[error("Failed to dispatch GitHub workflow (HTTP {status}): {details}")]
    Rejected { status: u16, details: String },

    #[error("Failed to reach GitHub: {0}")]
    Network(String),
}

/// Rasterize-and-paginate export. Terminal: no partial file is left behind.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("rasterization failed: {0}")]
    Raster(String),

    #[error("capture region `{0}` has no pixels")]
    EmptyRegion(String),

    #[error("document composition failed: {0}")]
    Document(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("export cancelled")]
    Cancelled,
}

/// Settings file problems. A missing default settings file is not an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
