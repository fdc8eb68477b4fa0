// tests/config_file.rs
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use radio_dash::config::file::{apply_env_with, load, SettingsFile};
use radio_dash::config::options::{AppOptions, DataSource, Paper};
use radio_dash::error::ConfigError;
use radio_dash::export::PageSize;

const FULL: &str = r#"
[data]
url = "https://host/output"

[export]
out_dir = "pdfs"
paper = "letter"
oversample = 3.0

[refresh]
owner = "club"
repo = "radio-dashboard"
workflow = "nightly.yml"
ref = "release"
"#;

fn parsed(text: &str) -> AppOptions {
    let mut opts = AppOptions::default();
    SettingsFile::parse(text, Path::new("dashboard.toml")).unwrap().apply(&mut opts);
    opts
}

#[test]
fn defaults_without_a_file() {
    let opts = AppOptions::default();
    assert_eq!(opts.data.source, DataSource::Dir(PathBuf::from("output")));
    assert_eq!(opts.export.paper, Paper::A4);
    assert_eq!(opts.export.oversample, 2.0);
    assert_eq!(opts.refresh.workflow, "update-data.yml");
    assert_eq!(opts.refresh.git_ref, "main");
    assert!(opts.refresh.token.is_none());
}

#[test]
fn every_section_applies() {
    let opts = parsed(FULL);
    assert_eq!(opts.data.source, DataSource::Url("https://host/output".into()));
    assert_eq!(opts.export.out_dir, PathBuf::from("pdfs"));
    assert_eq!(opts.export.paper.page_size(), PageSize::LETTER);
    assert_eq!(opts.export.oversample, 3.0);
    assert_eq!(opts.refresh.owner.as_deref(), Some("club"));
    assert_eq!(opts.refresh.repo.as_deref(), Some("radio-dashboard"));
    assert_eq!(opts.refresh.workflow, "nightly.yml");
    assert_eq!(opts.refresh.git_ref, "release");
}

#[test]
fn oversample_never_drops_below_two() {
    let opts = parsed("[export]\noversample = 1.0\n");
    assert_eq!(opts.export.oversample, 2.0);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = SettingsFile::parse("[export]\ncolour = \"red\"\n", Path::new("x.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("x.toml"));
}

#[test]
fn environment_overrides_the_file() {
    let mut opts = parsed(FULL);
    let env: HashMap<&str, &str> = HashMap::from([
        ("DASH_DATA_DIR", "/srv/data"),
        ("GITHUB_TOKEN", " secret "),
        ("GITHUB_OWNER", "other"),
        ("GITHUB_REPO", ""),
    ]);
    apply_env_with(&mut opts, |k| env.get(k).map(|v| v.to_string()));

    assert_eq!(opts.data.source, DataSource::Dir(PathBuf::from("/srv/data")));
    assert_eq!(opts.refresh.token.as_deref(), Some("secret"));
    assert_eq!(opts.refresh.owner.as_deref(), Some("other"));
    // blank values do not clear the file's setting
    assert_eq!(opts.refresh.repo.as_deref(), Some("radio-dashboard"));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn explicit_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.toml");
    std::fs::write(&path, "[export]\npaper = \"letter\"\n").unwrap();

    let opts = load(Some(&path)).unwrap();
    assert_eq!(opts.export.paper, Paper::Letter);
}

#[test]
fn paper_names() {
    assert_eq!(Paper::parse("A4"), Some(Paper::A4));
    assert_eq!(Paper::parse("letter"), Some(Paper::Letter));
    assert_eq!(Paper::parse("legal"), None);
}

#[test]
fn out_path_adds_extension_once() {
    let opts = AppOptions::default().export;
    assert_eq!(opts.out_path("matches"), PathBuf::from("out/matches.pdf"));
    assert_eq!(opts.out_path("matches.PDF"), PathBuf::from("out/matches.PDF"));
}
