mod args;
mod help;

pub(crate) use args::{CliArgs, parse_cli};
