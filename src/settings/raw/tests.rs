use std::fs;

use clap::Parser;
use config::{Config, File, FileFormat};

use super::*;

fn raw_from_toml(toml: &str) -> RawConfig {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

fn cli(args: &[&str]) -> CliArgs {
    CliArgs::parse_from(args.iter().copied())
}

#[test]
fn file_values_resolve_with_defaults() {
    let raw = raw_from_toml(
        r#"
        [api]
        base_url = "https://admin.example/"
        token = "secret"
        "#,
    );
    let resolved = raw.resolve().unwrap();
    assert_eq!(resolved.base_url.as_str(), "https://admin.example/");
    assert_eq!(resolved.token.as_deref(), Some("secret"));
    assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert_eq!(resolved.log_level, LevelFilter::Info);
    assert_eq!(resolved.export_dir, PathBuf::from("."));
    assert!(resolved.theme.is_none());
    assert!(resolved.initial_query.is_empty());
}

#[test]
fn cli_flags_override_file_values() {
    let mut raw = raw_from_toml(
        r#"
        [api]
        base_url = "https://file.example"
        timeout_secs = 30

        [ui]
        theme = "light"
        "#,
    );
    raw.apply_cli_overrides(&cli(&[
        "inqdesk",
        "--base-url",
        "http://localhost:3000",
        "--theme",
        "solarized",
        "--log-level",
        "debug",
        "-q",
        "acme",
    ]));
    let resolved = raw.resolve().unwrap();
    assert_eq!(resolved.base_url.as_str(), "http://localhost:3000/");
    assert_eq!(resolved.timeout, Duration::from_secs(30));
    assert_eq!(resolved.theme_name.as_deref(), Some("solarized"));
    assert_eq!(resolved.log_level, LevelFilter::Debug);
    assert_eq!(resolved.initial_query, "acme");
}

#[test]
fn missing_base_url_is_rejected() {
    let err = RawConfig::default().resolve().unwrap_err();
    assert!(err.to_string().contains("base URL"), "{err}");
}

#[test]
fn non_http_base_url_is_rejected() {
    let raw = raw_from_toml("[api]\nbase_url = \"ftp://admin.example\"\n");
    let err = raw.resolve().unwrap_err();
    assert!(err.to_string().contains("http or https"), "{err}");
}

#[test]
fn zero_timeout_is_rejected() {
    let raw = raw_from_toml("[api]\nbase_url = \"https://a.example\"\ntimeout_secs = 0\n");
    assert!(raw.resolve().is_err());
}

#[test]
fn unknown_theme_lists_the_alternatives() {
    let raw = raw_from_toml("[api]\nbase_url = \"https://a.example\"\n[ui]\ntheme = \"neon\"\n");
    let err = raw.resolve().unwrap_err().to_string();
    assert!(err.contains("neon") && err.contains("slate"), "{err}");
}

#[test]
fn blank_token_counts_as_unset() {
    let raw = raw_from_toml("[api]\nbase_url = \"https://a.example\"\ntoken = \"  \"\n");
    assert!(raw.resolve().unwrap().token.is_none());
}

#[test]
fn explicit_config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        "[api]\nbase_url = \"https://custom.example\"\n[export]\ndirectory = \"/tmp/exports\"\n",
    )
    .unwrap();

    let path_arg = path.to_string_lossy().into_owned();
    let args = cli(&["inqdesk", "--no-config", "--config", &path_arg]);
    let resolved = crate::settings::load(&args).unwrap();
    assert_eq!(resolved.base_url.as_str(), "https://custom.example/");
    assert_eq!(resolved.export_dir, PathBuf::from("/tmp/exports"));
}
