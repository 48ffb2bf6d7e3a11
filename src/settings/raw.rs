use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail, ensure};
use inqdesk_core::app_dirs;
use inqdesk_tui::style;
use log::LevelFilter;
use serde::Deserialize;
use url::Url;

use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration as read from files and the environment, before CLI
/// overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    api: ApiSection,
    ui: UiSection,
    export: ExportSection,
    log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
    base_url: Option<String>,
    token: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    theme: Option<String>,
    initial_query: Option<String>,
    input_title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ExportSection {
    directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
    level: Option<String>,
    file: Option<PathBuf>,
}

impl RawConfig {
    /// CLI flags win over every other source.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(url) = cli.base_url.clone() {
            self.api.base_url = Some(url);
        }
        if let Some(token) = cli.token.clone() {
            self.api.token = Some(token);
        }
        if let Some(secs) = cli.timeout {
            self.api.timeout_secs = Some(secs);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
        if let Some(query) = cli.initial_query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(title) = cli.title.clone() {
            self.ui.input_title = Some(title);
        }
        if let Some(dir) = cli.export_dir.clone() {
            self.export.directory = Some(dir);
        }
        if let Some(level) = cli.log_level.clone() {
            self.log.level = Some(level);
        }
        if let Some(file) = cli.log_file.clone() {
            self.log.file = Some(file);
        }
    }

    /// Validate the merged values and fill in defaults.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let Self {
            api,
            ui,
            export,
            log,
        } = self;

        let base_url = resolve_base_url(api.base_url.as_deref())?;

        let timeout_secs = api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        ensure!(timeout_secs > 0, "api timeout must be greater than zero");

        let theme = match ui.theme {
            Some(name) => {
                let theme = style::by_name(&name).ok_or_else(|| {
                    anyhow!(
                        "unknown theme `{name}`; available themes: {}",
                        style::names().join(", ")
                    )
                })?;
                Some((name, theme))
            }
            None => None,
        };

        let log_level = match log.level.as_deref() {
            Some(level) => LevelFilter::from_str(level.trim())
                .map_err(|_| anyhow!("invalid log level `{level}`"))?,
            None => LevelFilter::Info,
        };
        let log_file = log.file.or_else(|| app_dirs::default_log_file().ok());

        Ok(ResolvedConfig {
            base_url,
            token: api.token.filter(|token| !token.trim().is_empty()),
            timeout: Duration::from_secs(timeout_secs),
            input_title: ui.input_title,
            initial_query: ui.initial_query.unwrap_or_default(),
            theme_name: theme.as_ref().map(|(name, _)| name.clone()),
            theme: theme.map(|(_, theme)| theme),
            export_dir: export.directory.unwrap_or_else(|| PathBuf::from(".")),
            log_level,
            log_file,
        })
    }
}

fn resolve_base_url(value: Option<&str>) -> Result<Url> {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        bail!("no API base URL configured; pass --base-url or set `base_url` under [api]");
    };
    let url = Url::parse(value).with_context(|| format!("invalid API base URL `{value}`"))?;
    ensure!(
        matches!(url.scheme(), "http" | "https"),
        "API base URL must use http or https, got `{}`",
        url.scheme()
    );
    Ok(url)
}

#[cfg(test)]
mod tests;
