//! Hand URIs to the platform's default handler.

use std::io;
use std::process::{Command, Stdio};
use std::thread;

/// Something that can open a URI outside the terminal.
pub trait UriOpener: Send {
	fn open(&self, uri: &str) -> io::Result<()>;
}

/// Opens URIs with `xdg-open`, `open`, or `start` depending on the platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UriOpener for SystemOpener {
	fn open(&self, uri: &str) -> io::Result<()> {
		launch(platform_command(uri)).map(|_| ())
	}
}

/// Spawn `command` detached from the terminal and reap it off-thread.
fn launch(mut command: Command) -> io::Result<thread::JoinHandle<()>> {
	command
		.stdin(Stdio::null())
		.stdout(Stdio::null())
		.stderr(Stdio::null());
	log::debug!("launching {command:?}");
	let mut child = command.spawn()?;
	Ok(thread::spawn(move || {
		if let Err(err) = child.wait() {
			log::warn!("failed to reap URI opener: {err}");
		}
	}))
}

#[cfg(target_os = "macos")]
fn platform_command(uri: &str) -> Command {
	let mut command = Command::new("open");
	command.arg(uri);
	command
}

#[cfg(target_os = "windows")]
fn platform_command(uri: &str) -> Command {
	let mut command = Command::new("cmd");
	command.args(["/C", "start", "", uri]);
	command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_command(uri: &str) -> Command {
	let mut command = Command::new("xdg-open");
	command.arg(uri);
	command
}

#[cfg(all(test, unix))]
mod tests {
	use super::*;

	#[test]
	fn launched_helper_is_reaped() {
		let reaper = launch(Command::new("true")).expect("spawn true");
		reaper.join().expect("reaper thread");
	}

	#[test]
	fn missing_helper_reports_spawn_error() {
		let err = launch(Command::new("inqdesk-no-such-opener")).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::NotFound);
	}
}
