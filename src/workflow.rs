use std::sync::Arc;

use anyhow::{Context, Result};
use inqdesk_core::{HttpInquirySource, HttpSourceOptions};
use inqdesk_tui::{App, BrowserOutcome, UiLabels};

use crate::settings::ResolvedConfig;

/// Wires the resolved configuration into a ready-to-run browser.
pub(crate) struct BrowseWorkflow {
    app: App<'static>,
}

impl BrowseWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let ResolvedConfig {
            base_url,
            token,
            timeout,
            input_title,
            initial_query,
            theme,
            export_dir,
            ..
        } = config;

        let source = HttpInquirySource::new(&base_url, HttpSourceOptions { token, timeout })
            .context("failed to build the HTTP client")?;
        log::info!("listing inquiries from {}", source.endpoint());
        let login_url = source.login_url().to_string();

        let mut labels = UiLabels::default();
        if let Some(title) = input_title {
            labels = labels.with_input_title(title);
        }

        let app = App::new(Arc::new(source))
            .with_ui_labels(labels)
            .with_theme(theme.unwrap_or_default())
            .with_export_dir(export_dir)
            .with_login_url(login_url)
            .with_initial_query(initial_query);

        Ok(Self { app })
    }

    pub(crate) fn run(mut self) -> Result<BrowserOutcome> {
        self.app.run()
    }
}

