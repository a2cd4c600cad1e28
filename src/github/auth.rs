use anyhow::{Result, bail};
use std::process::Command;
use tracing::debug;

use crate::util::config::GithubConfig;

pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

/// Resolve the GraphQL endpoint:
/// 1. `--api-url` on the command line
/// 2. `GITHUB_API_URL` environment variable
/// 3. `api_url` in the config file
/// 4. the public GitHub endpoint
pub fn resolve_api_url<E>(cli_url: Option<&str>, config: &GithubConfig, env: E) -> String
where
    E: Fn(&str) -> Option<String>,
{
    if let Some(url) = cli_url.filter(|u| !u.is_empty()) {
        return url.to_string();
    }
    if let Some(url) = env("GITHUB_API_URL").filter(|u| !u.is_empty()) {
        debug!("API URL resolved via GITHUB_API_URL env var");
        return url;
    }
    config
        .api_url
        .clone()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Resolve the bearer token:
/// 1. `GITHUB_TOKEN` environment variable
/// 2. `GH_TOKEN` environment variable
/// 3. `token` in the config file
/// 4. `gh auth token` subprocess
pub fn resolve_token<E, G>(config: &GithubConfig, env: E, gh: G) -> Result<String>
where
    E: Fn(&str) -> Option<String>,
    G: FnOnce() -> Option<String>,
{
    for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Some(token) = env(var).filter(|t| !t.is_empty()) {
            debug!(var, "Token resolved via env var");
            return Ok(token);
        }
    }

    if let Some(token) = config.token.as_ref().filter(|t| !t.is_empty()) {
        debug!("Token resolved via config file");
        return Ok(token.clone());
    }

    if let Some(token) = gh() {
        debug!("Token resolved via gh CLI");
        return Ok(token);
    }

    bail!(
        "Could not resolve GitHub token. Please either:\n\
         - Set the GITHUB_TOKEN or GH_TOKEN environment variable\n\
         - Add `token = \"...\"` under [github] in the config file\n\
         - Run `gh auth login` to authenticate with the GitHub CLI"
    )
}

/// Ask the GitHub CLI for its token.
pub fn gh_auth_token() -> Option<String> {
    debug!("Attempting to resolve token via `gh auth token`");
    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!token.is_empty()).then_some(token)
}

pub fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
