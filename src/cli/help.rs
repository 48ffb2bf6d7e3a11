use clap::Arg;
use clap::builder::StyledStr;
use clap::builder::styling::{AnsiColor, Color, Style};

fn muted() -> Style {
    Style::new()
        .fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
        .dimmed()
}

/// Mute `(default: …)` hints and the env annotation in an argument's help.
pub(crate) fn mute_help_annotations(mut arg: Arg) -> Arg {
    let Some(help) = arg.get_help().map(ToString::to_string) else {
        return arg;
    };
    let mut styled = muted_defaults(&help);

    if let Some(name) = arg.get_env().map(|env| env.to_string_lossy().into_owned())
        && !name.trim().is_empty()
    {
        arg = arg.hide_env(true);
        let style = muted();
        let _ = std::fmt::write(&mut styled, format_args!(" {style}[env: {name}]{style:#}"));
    }

    arg.help(styled)
}

/// Style every `(default: …)` span of `text` with the muted style.
fn muted_defaults(text: &str) -> StyledStr {
    const MARKER: &str = "(default: ";

    let style = muted();
    let mut styled = StyledStr::new();
    let mut rest = text;
    while let Some(start) = rest.find(MARKER) {
        let Some(len) = rest[start..].find(')') else {
            break;
        };
        let end = start + len + 1;
        styled.push_str(&rest[..start]);
        let _ = std::fmt::write(
            &mut styled,
            format_args!("{style}{}{style:#}", &rest[start..end]),
        );
        rest = &rest[end..];
    }
    styled.push_str(rest);
    styled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_survives_muting() {
        let text = "Request timeout in seconds (default: 15) per call";
        assert_eq!(muted_defaults(text).to_string(), text);
    }

    #[test]
    fn env_annotation_is_appended() {
        let arg = Arg::new("token").help("Bearer token").env("INQDESK_TOKEN");
        let arg = mute_help_annotations(arg);
        assert!(arg.is_hide_env_set());
        let help = arg.get_help().map(ToString::to_string).unwrap_or_default();
        assert!(help.ends_with("[env: INQDESK_TOKEN]"), "{help}");
    }
}
