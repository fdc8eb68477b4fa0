// tests/refresh_trigger.rs
mod common;

use radio_dash::config::options::RefreshOptions;
use radio_dash::error::RefreshError;
use radio_dash::ingest::refresh::{dispatch_url, trigger, STARTED_MESSAGE};

fn configured(api_base: &str) -> RefreshOptions {
    RefreshOptions {
        token: Some("t0ken".into()),
        owner: Some("club".into()),
        repo: Some("radio-dashboard".into()),
        api_base: api_base.into(),
        ..RefreshOptions::default()
    }
}

#[test]
fn missing_token_names_the_variable() {
    let opts = RefreshOptions { token: None, ..configured("http://127.0.0.1:9") };
    let err = trigger(&opts).unwrap_err();
    assert!(matches!(err, RefreshError::MissingConfig { .. }));
    assert_eq!(err.to_string(), "Missing GitHub configuration. Set GITHUB_TOKEN.");
}

#[test]
fn every_missing_variable_is_listed() {
    let err = trigger(&RefreshOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing GitHub configuration. Set GITHUB_TOKEN, GITHUB_OWNER, GITHUB_REPO."
    );

    let opts = RefreshOptions { repo: Some(String::new()), ..configured("http://127.0.0.1:9") };
    assert_eq!(trigger(&opts).unwrap_err().to_string(), "Missing GitHub configuration. Set GITHUB_REPO.");
}

#[test]
fn accepted_dispatch_reports_started() {
    let (base, log) = common::serve(|_| (204, Vec::new()));
    let opts = configured(&base);

    assert_eq!(trigger(&opts).unwrap(), STARTED_MESSAGE);

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 1);
    let req = &log[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.path(), "/repos/club/radio-dashboard/actions/workflows/update-data.yml/dispatches");
    assert_eq!(req.header("authorization"), Some("Bearer t0ken"));
    assert_eq!(req.header("accept"), Some("application/vnd.github+json"));
    assert_eq!(req.header("x-github-api-version"), Some("2022-11-28"));

    let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
    assert_eq!(body, serde_json::json!({ "ref": "main" }));
}

#[test]
fn rejected_dispatch_carries_status_and_details() {
    let (base, _log) = common::serve(|_| (422, br#"{"message":"No ref found for: nope"}"#.to_vec()));
    let opts = RefreshOptions { git_ref: "nope".into(), ..configured(&base) };

    match trigger(&opts).unwrap_err() {
        RefreshError::Rejected { status, details } => {
            assert_eq!(status, 422);
            assert!(details.contains("No ref found"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn dispatch_url_trims_trailing_slash() {
    let opts = configured("https://api.example.test/");
    assert_eq!(
        dispatch_url(&opts, "o", "r"),
        "https://api.example.test/repos/o/r/actions/workflows/update-data.yml/dispatches"
    );
}

#[test]
fn debug_output_hides_the_token() {
    let shown = format!("{:?}", configured("x"));
    assert!(!shown.contains("t0ken"));
    assert!(shown.contains("<redacted>"));
}
