mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::{Result, bail};
use cli::parse_cli;
use inqdesk_tui::BrowserOutcome;
use settings::ResolvedConfig;
use workflow::BrowseWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in inqdesk_tui::style::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    run_browser(resolved)
}

/// Run the browser and translate a rejected session into an error exit.
fn run_browser(settings: ResolvedConfig) -> Result<()> {
    logging::initialize(settings.log_level, settings.log_file.as_deref())?;

    let workflow = BrowseWorkflow::from_config(settings)?;
    match workflow.run()? {
        BrowserOutcome::Closed => Ok(()),
        BrowserOutcome::LoginRequired { login_url } => match login_url {
            Some(url) => bail!("the server rejected the session; sign in at {url}"),
            None => bail!("the server rejected the session; sign in again"),
        },
    }
}
