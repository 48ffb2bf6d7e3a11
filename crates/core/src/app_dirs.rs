//! Where `inqdesk` keeps its configuration and log file.
//!
//! `INQDESK_CONFIG_DIR` and `INQDESK_DATA_DIR` take precedence over the
//! platform locations from `directories`. An empty variable counts as unset.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

/// File name of the log inside the data directory.
pub const LOG_FILE_NAME: &str = "inqdesk.log";

#[derive(Clone, Copy)]
enum Location {
	Config,
	Data,
}

impl Location {
	const fn env_var(self) -> &'static str {
		match self {
			Self::Config => "INQDESK_CONFIG_DIR",
			Self::Data => "INQDESK_DATA_DIR",
		}
	}

	fn platform_dir(self, dirs: &ProjectDirs) -> &Path {
		match self {
			Self::Config => dirs.config_local_dir(),
			Self::Data => dirs.data_local_dir(),
		}
	}

	fn resolve(self) -> Result<PathBuf> {
		if let Some(dir) = env::var_os(self.env_var()).filter(|value| !value.is_empty()) {
			return Ok(PathBuf::from(dir));
		}
		let dirs = ProjectDirs::from("io", "inqdesk", "inqdesk")
			.ok_or_else(|| anyhow!("no home directory to place inqdesk files in"))?;
		Ok(self.platform_dir(&dirs).to_path_buf())
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	Location::Config.resolve()
}

/// Directory holding the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	Location::Data.resolve()
}

/// Default log file path.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(LOG_FILE_NAME))
}
