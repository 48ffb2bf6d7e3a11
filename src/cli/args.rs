use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use inqdesk_core::app_dirs;

use super::help::mute_help_annotations;

/// Version banner that also reports where configuration and logs live.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let data_dir = match app_dirs::get_data_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("inqdesk {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "data directory: {data_dir}");

    Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
    let mut matches = tinted_cli_command().get_matches();
    CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn tinted_cli_command() -> Command {
    CliArgs::command().mut_args(mute_help_annotations)
}

#[derive(Parser, Debug)]
#[command(
    name = "inqdesk",
    version,
    long_version = long_version(),
    about = "Browse, search and export contact-form inquiries",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `inqdesk` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "INQDESK_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'u',
        long = "base-url",
        value_name = "URL",
        env = "INQDESK_BASE_URL",
        help = "Base URL of the deployment serving /api/contact"
    )]
    pub(crate) base_url: Option<String>,
    #[arg(
        long,
        value_name = "TOKEN",
        env = "INQDESK_TOKEN",
        hide_env_values = true,
        help = "Bearer token sent with every request (default: none)"
    )]
    pub(crate) token: Option<String>,
    #[arg(
        long,
        value_name = "SECS",
        help = "Request timeout in seconds (default: 15)"
    )]
    pub(crate) timeout: Option<u64>,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "QUERY",
        help = "Start with this search term committed (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the search prompt title (default: Search)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'e',
        long = "export-dir",
        value_name = "DIR",
        help = "Directory CSV exports are written to (default: current directory)"
    )]
    pub(crate) export_dir: Option<PathBuf>,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        env = "INQDESK_LOG",
        help = "Log verbosity: off, error, warn, info, debug, trace (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        help = "Write logs to this file (default: inqdesk.log in the data directory)"
    )]
    pub(crate) log_file: Option<PathBuf>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit"
    )]
    pub(crate) list_themes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        let mut matches = CliArgs::command().get_matches_from(args.iter().copied());
        CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
    }

    #[test]
    fn command_supports_custom_styles() {
        let command = tinted_cli_command();
        assert!(command.get_about().is_some());
    }

    #[test]
    fn config_files_accumulate() {
        let parsed = parse(&["inqdesk", "-c", "a.toml", "--config", "b.toml"]);
        assert_eq!(
            parsed.config,
            vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
        );
    }

    #[test]
    fn connection_flags_are_parsed() {
        let parsed = parse(&[
            "inqdesk",
            "--base-url",
            "https://admin.example",
            "--timeout",
            "5",
            "-q",
            "acme",
        ]);
        assert_eq!(parsed.base_url.as_deref(), Some("https://admin.example"));
        assert_eq!(parsed.timeout, Some(5));
        assert_eq!(parsed.initial_query.as_deref(), Some("acme"));
    }
}
