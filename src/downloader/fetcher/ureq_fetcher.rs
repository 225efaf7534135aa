use std::time::Duration;

use tracing::debug;
use ureq::Error::{Status, Transport};
use ureq::{Agent, AgentBuilder};

use super::{FileDownloader, Response};

pub struct UReqFetcher {
    agent: Agent,
}

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let response = self.agent.get(url).call();

        match response {
            Ok(response) if response.status() == 200 => {
                debug!(url, content_type = response.content_type(), "response ok");
                Response::ok(response.into_reader())
            }

            Ok(response) => Response::status(response.status()),

            Err(Status(code, _)) => Response::status(code),

            Err(Transport(transport)) => Response::network_error(transport.to_string()),
        }
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        Self::with_timeout(None)
    }

    /// `None` leaves requests unbounded, which is ureq's default.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        let builder = AgentBuilder::new();

        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };

        UReqFetcher {
            agent: builder.build(),
        }
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
