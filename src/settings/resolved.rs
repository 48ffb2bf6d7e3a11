use std::path::PathBuf;
use std::time::Duration;

use inqdesk_tui::Theme;
use log::LevelFilter;
use url::Url;

/// Application-ready configuration.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub base_url: Url,
    pub token: Option<String>,
    pub timeout: Duration,
    pub input_title: Option<String>,
    pub initial_query: String,
    pub theme_name: Option<String>,
    pub theme: Option<Theme>,
    pub export_dir: PathBuf,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Base URL: {}", self.base_url);
        println!(
            "  Token: {}",
            if self.token.is_some() { "(set)" } else { "(none)" }
        );
        println!("  Timeout: {}s", self.timeout.as_secs());
        println!(
            "  UI theme: {}",
            self.theme_name.as_deref().unwrap_or("(default)")
        );
        if let Some(title) = &self.input_title {
            println!("  Prompt title: {title}");
        }
        if !self.initial_query.is_empty() {
            println!("  Initial query: {}", self.initial_query);
        }
        println!("  Export directory: {}", self.export_dir.display());
        println!("  Log level: {}", self.log_level);
        match &self.log_file {
            Some(path) => println!("  Log file: {}", path.display()),
            None => println!("  Log file: (disabled)"),
        }
    }
}
