// src/ingest/refresh.rs
//! Ask the upstream workflow to regenerate the data files.
//!
//! Acceptance only means the run was queued. Callers re-load after
//! `REFETCH_DELAY_SECS` rather than assuming new data exists.

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::Serialize;

use crate::config::consts::{ENV_OWNER, ENV_REPO, ENV_TOKEN, FETCH_TIMEOUT_SECS, GITHUB_API_VERSION, USER_AGENT};
use crate::config::options::RefreshOptions;
use crate::error::RefreshError;

pub const STARTED_MESSAGE: &str = "Update started. It can take a few minutes to deploy.";

#[derive(Serialize)]
struct DispatchBody<'a> {
    #[serde(rename = "ref")]
    git_ref: &'a str,
}

/// Resolved dispatch target; all three credentials present.
struct Target<'a> {
    token: &'a str,
    owner: &'a str,
    repo: &'a str,
}

fn resolve(opts: &RefreshOptions) -> Result<Target<'_>, RefreshError> {
    let token = opts.token.as_deref().filter(|s| !s.is_empty());
    let owner = opts.owner.as_deref().filter(|s| !s.is_empty());
    let repo = opts.repo.as_deref().filter(|s| !s.is_empty());

    match (token, owner, repo) {
        (Some(token), Some(owner), Some(repo)) => Ok(Target { token, owner, repo }),
        _ => {
            let missing = [(token, ENV_TOKEN), (owner, ENV_OWNER), (repo, ENV_REPO)]
                .into_iter()
                .filter(|(v, _)| v.is_none())
                .map(|(_, name)| name)
                .collect();
            Err(RefreshError::MissingConfig { missing })
        }
    }
}

pub fn dispatch_url(opts: &RefreshOptions, owner: &str, repo: &str) -> String {
    format!(
        "{}/repos/{owner}/{repo}/actions/workflows/{}/dispatches",
        opts.api_base.trim_end_matches('/'),
        opts.workflow,
    )
}

/// POST a `workflow_dispatch`. Returns the operator-facing success message.
pub fn trigger(opts: &RefreshOptions) -> Result<String, RefreshError> {
    let target = resolve(opts)?;
    let url = dispatch_url(opts, target.owner, target.repo);
    logd!("Refresh: POST {url} ref={}", opts.git_ref);

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| RefreshError::Network(e.to_string()))?;

    let resp = client
        .post(&url)
        .bearer_auth(target.token)
        .header(ACCEPT, "application/vnd.github+json")
        .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
        .json(&DispatchBody { git_ref: &opts.git_ref })
        .send()
        .map_err(|e| RefreshError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        let details = resp.text().unwrap_or_default();
        loge!("Refresh: Rejected status={} details={}", status.as_u16(), details);
        return Err(RefreshError::Rejected { status: status.as_u16(), details });
    }

    logf!("Refresh: Dispatched workflow={} ref={}", opts.workflow, opts.git_ref);
    Ok(s!(STARTED_MESSAGE))
}
