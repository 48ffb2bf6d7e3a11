//! Background execution of page requests.
//!
//! The UI thread hands [`FetchCommand`]s to a dispatcher thread, which starts
//! one short-lived thread per request so a slow response never blocks a newer
//! one. Responses come back stamped with the sequence number of the request
//! that produced them; reconciling them is the job of
//! [`crate::state::BrowserState`].

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use crate::client::{InquirySource, PageRequest};
use crate::error::FetchError;
use crate::response::InquiryPage;

/// Commands understood by the dispatcher thread.
#[derive(Debug)]
pub enum FetchCommand {
	/// Resolve a page request.
	Load {
		/// Sequence stamp assigned by [`FetchRuntime::issue`].
		seq: u64,
		request: PageRequest,
	},
	/// Stop the dispatcher. Requests already running still report back.
	Shutdown,
}

/// Outcome of one request, tagged with its sequence stamp.
#[derive(Debug)]
pub struct FetchResponse {
	pub seq: u64,
	pub request: PageRequest,
	pub result: Result<InquiryPage, FetchError>,
}

/// Launch the dispatcher thread and return its command and response channels.
pub fn spawn(source: Arc<dyn InquirySource>) -> (Sender<FetchCommand>, Receiver<FetchResponse>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (response_tx, response_rx) = mpsc::channel();

	thread::spawn(move || dispatch_loop(source, command_rx, response_tx));

	(command_tx, response_rx)
}

fn dispatch_loop(
	source: Arc<dyn InquirySource>,
	command_rx: Receiver<FetchCommand>,
	response_tx: Sender<FetchResponse>,
) {
	while let Ok(command) = command_rx.recv() {
		match command {
			FetchCommand::Load { seq, request } => {
				let source = Arc::clone(&source);
				let response_tx = response_tx.clone();
				thread::spawn(move || {
					let result = source.fetch_page(&request);
					let _ = response_tx.send(FetchResponse {
						seq,
						request,
						result,
					});
				});
			}
			FetchCommand::Shutdown => break,
		}
	}
}

/// UI-side handle on the dispatcher: stamps requests and drains responses.
pub struct FetchRuntime {
	tx: Sender<FetchCommand>,
	rx: Receiver<FetchResponse>,
	next_seq: u64,
}

impl FetchRuntime {
	#[must_use]
	pub fn new(source: Arc<dyn InquirySource>) -> Self {
		let (tx, rx) = spawn(source);
		Self { tx, rx, next_seq: 0 }
	}

	/// Queue a request and return the sequence stamp it was given.
	pub fn issue(&mut self, request: PageRequest) -> u64 {
		self.next_seq = self.next_seq.saturating_add(1);
		let seq = self.next_seq;
		log::debug!(
			"issuing request #{seq}: page {} search {:?}",
			request.page,
			request.search
		);
		if self.tx.send(FetchCommand::Load { seq, request }).is_err() {
			log::error!("fetch dispatcher is gone; request #{seq} dropped");
		}
		seq
	}

	/// Non-blocking receive of the next finished response.
	pub fn try_recv(&self) -> Result<FetchResponse, TryRecvError> {
		self.rx.try_recv()
	}

	/// Stop the dispatcher thread.
	pub fn shutdown(&self) {
		let _ = self.tx.send(FetchCommand::Shutdown);
	}
}

impl Drop for FetchRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::sync::mpsc::RecvTimeoutError;
	use std::time::Duration;

	use super::*;

	#[derive(Default)]
	struct RecordingSource {
		seen: Mutex<Vec<PageRequest>>,
	}

	impl InquirySource for RecordingSource {
		fn fetch_page(&self, request: &PageRequest) -> Result<InquiryPage, FetchError> {
			self.seen.lock().unwrap().push(request.clone());
			Ok(InquiryPage::bare(Vec::new()))
		}
	}

	#[test]
	fn responses_carry_their_sequence_stamp() {
		let source = Arc::new(RecordingSource::default());
		let mut runtime = FetchRuntime::new(source.clone());

		let first = runtime.issue(PageRequest::new(1, ""));
		let second = runtime.issue(PageRequest::new(2, "acme"));
		assert_eq!((first, second), (1, 2));

		let mut stamps = Vec::new();
		while stamps.len() < 2 {
			let response = runtime.rx.recv_timeout(Duration::from_secs(5)).unwrap();
			assert!(response.result.is_ok());
			stamps.push((response.seq, response.request.page));
		}
		stamps.sort_unstable();
		assert_eq!(stamps, vec![(1, 1), (2, 2)]);
		assert_eq!(source.seen.lock().unwrap().len(), 2);
	}

	#[test]
	fn shutdown_stops_dispatching() {
		let source = Arc::new(RecordingSource::default());
		let (tx, rx) = spawn(source);
		tx.send(FetchCommand::Shutdown).unwrap();
		match rx.recv_timeout(Duration::from_secs(5)) {
			Err(RecvTimeoutError::Disconnected) => {}
			other => panic!("expected the response channel to close, got {other:?}"),
		}
	}
}
