use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use inqdesk_core::app_dirs;

use crate::cli::CliArgs;

/// Prefix of environment overrides, e.g. `INQDESK__API__BASE_URL`.
const ENV_PREFIX: &str = "INQDESK";

/// Stack the configuration sources, lowest priority first: default files,
/// files passed with `--config`, then environment variables.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let defaults = if cli.no_config {
        Vec::new()
    } else {
        default_config_files()
    };

    let builder = defaults
        .into_iter()
        .map(|path| File::from(path).required(false))
        .chain(cli.config.iter().map(|path| File::from(path.clone()).required(true)))
        .fold(Config::builder(), |builder, file| builder.add_source(file));

    builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("failed to load configuration")
}

/// `config.toml` in the config directory, then `.inqdesk.toml` and
/// `inqdesk.toml` in the working directory.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let user = app_dirs::get_config_dir()
        .ok()
        .map(|dir| dir.join("config.toml"));
    let local = env::current_dir()
        .ok()
        .into_iter()
        .flat_map(|cwd| [cwd.join(".inqdesk.toml"), cwd.join("inqdesk.toml")]);

    user.into_iter().chain(local).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_directory_files_come_last() {
        let files = default_config_files();
        let names: Vec<_> = files
            .iter()
            .rev()
            .take(2)
            .filter_map(|path| path.file_name())
            .collect();
        assert_eq!(names, ["inqdesk.toml", ".inqdesk.toml"]);
    }
}
