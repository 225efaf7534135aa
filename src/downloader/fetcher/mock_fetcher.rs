use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use super::{FileDownloader, Response};

/// Canned answer for one URL. Replayed on every fetch of that URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Body(Vec<u8>),
    Status(u16),
    NetworkError,
    /// Yields the bytes, then fails mid-stream.
    BrokenBody(Vec<u8>),
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"))
    }
}

/// Thread-safe fake transport. Unknown URLs fail as network errors.
/// Tracks how many fetches are in flight and the highest count observed.
pub struct MockFetcher {
    responses: HashMap<String, MockResponse>,
    delays: HashMap<String, Duration>,
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl FileDownloader for MockFetcher {
    fn fetch(&self, url: &str) -> Response {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        thread::sleep(self.delays.get(url).copied().unwrap_or(self.delay));

        let response = match self.responses.get(url) {
            Some(MockResponse::Body(body)) => Response::ok(Cursor::new(body.clone())),
            Some(MockResponse::Status(code)) => Response::status(*code),
            Some(MockResponse::BrokenBody(body)) => {
                Response::ok(Cursor::new(body.clone()).chain(BrokenReader))
            }
            Some(MockResponse::NetworkError) | None => {
                Response::network_error(format!("could not connect to {}", url))
            }
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        response
    }
}

impl MockFetcher {
    pub fn new(responses: Vec<(&str, MockResponse)>) -> Self {
        Self {
            responses: responses
                .into_iter()
                .map(|(url, response)| (url.to_string(), response))
                .collect(),
            delays: HashMap::new(),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_delay_for(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}
