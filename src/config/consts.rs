// src/config/consts.rs

// Data
pub const DEFAULT_DATA_DIR: &str = "output";
pub const FETCH_TIMEOUT_SECS: u64 = 15;

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Settings file
pub const SETTINGS_FILE: &str = "dashboard.toml";

// Derived metrics: media-equivalent value per 1000 listeners (EUR)
pub const MEDIA_UNIT_RATE: f64 = 25.0;
pub const MEDIA_UNIT_SIZE: f64 = 1000.0;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_OVERSAMPLE: f32 = 2.0;
pub const PDF_EXT: &str = "pdf";

// Refresh (workflow dispatch)
pub const GITHUB_API: &str = "https://api.github.com";
pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const DEFAULT_WORKFLOW: &str = "update-data.yml";
pub const DEFAULT_REF: &str = "main";
pub const REFETCH_DELAY_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("radio_dash/", env!("CARGO_PKG_VERSION"));

// Environment overrides
pub const ENV_DATA_DIR: &str = "DASH_DATA_DIR";
pub const ENV_DATA_URL: &str = "DASH_DATA_URL";
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_OWNER: &str = "GITHUB_OWNER";
pub const ENV_REPO: &str = "GITHUB_REPO";
pub const ENV_WORKFLOW: &str = "GITHUB_WORKFLOW";
pub const ENV_REF: &str = "GITHUB_REF";
