use std::{fs, io::ErrorKind, path::Path, time::Duration};

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::{DEFAULT_REQUEST_TIMEOUT, DEFAULT_USERS_ENDPOINT};

pub const SETTINGS_FILE_NAME: &str = "user_cards.toml";
pub const ENDPOINT_ENV_VAR: &str = "USER_CARDS_ENDPOINT";
pub const TIMEOUT_ENV_VAR: &str = "USER_CARDS_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub endpoint: Url,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_USERS_ENDPOINT).expect("default endpoint is a valid URL"),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Values supplied on the command line; they win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    endpoint: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Defaults, then `user_cards.toml` in the working directory, then environment, then overrides.
pub fn load_settings(overrides: &SettingsOverrides) -> Result<ClientSettings> {
    let file = read_settings_file(Path::new(SETTINGS_FILE_NAME));
    resolve_settings(file.as_deref(), &|name: &str| std::env::var(name).ok(), overrides)
}

/// A missing file is the normal case; any other read failure is reported and skipped.
fn read_settings_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(raw) => Some(raw),
        Err(err) if err.kind() == ErrorKind::NotFound => None,
        Err(err) => {
            warn!("ignoring unreadable {}: {err}", path.display());
            None
        }
    }
}

pub fn resolve_settings(
    file_contents: Option<&str>,
    env: &dyn Fn(&str) -> Option<String>,
    overrides: &SettingsOverrides,
) -> Result<ClientSettings> {
    let mut endpoint = DEFAULT_USERS_ENDPOINT.to_string();
    let mut timeout_secs = DEFAULT_REQUEST_TIMEOUT.as_secs();

    if let Some(raw) = file_contents {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.endpoint {
                    endpoint = v;
                }
                if let Some(v) = file_cfg.request_timeout_secs {
                    timeout_secs = v;
                }
            }
            Err(err) => warn!("ignoring unreadable {SETTINGS_FILE_NAME}: {err}"),
        }
    }

    if let Some(v) = non_empty(env(ENDPOINT_ENV_VAR)) {
        endpoint = v;
    }
    if let Some(v) = non_empty(env(TIMEOUT_ENV_VAR)) {
        timeout_secs = v
            .parse::<u64>()
            .with_context(|| format!("{TIMEOUT_ENV_VAR} must be a whole number of seconds"))?;
    }

    if let Some(v) = &overrides.endpoint {
        endpoint = v.clone();
    }
    if let Some(v) = overrides.timeout_secs {
        timeout_secs = v;
    }

    if timeout_secs == 0 {
        bail!("request timeout must be at least one second");
    }

    Ok(ClientSettings {
        endpoint: parse_endpoint(&endpoint)?,
        request_timeout: Duration::from_secs(timeout_secs),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid endpoint URL '{raw}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!(
            "endpoint '{raw}' uses unsupported scheme '{other}'; expected http or https"
        )),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
