// Shared harness: a wiremock server driven from synchronous tests.
//
// The blocking reqwest client must never run inside an async context, so the
// runtime is only entered to start the server, mount mocks and read back the
// recorded requests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use clockify::{Logger, Session};
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request};

pub const TOKEN: &str = "test-key";

pub struct MockApi {
    server: MockServer,
    runtime: Runtime,
}

impl MockApi {
    pub fn start() -> Self {
        let runtime = Runtime::new().unwrap();
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn session(&self) -> Session {
        self.session_with(TOKEN, Logger::disabled())
    }

    pub fn session_with(&self, token: &str, logger: Logger) -> Session {
        Session::builder(token)
            .base_url(self.uri())
            .logger(logger)
            .build()
            .unwrap()
    }

    pub fn received(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    pub fn single_request(&self) -> Request {
        let mut requests = self.received();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}

pub fn capturing_logger() -> (Logger, Arc<Mutex<Vec<String>>>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&lines);
    let logger = Logger::from_fn(move |line| sink.lock().unwrap().push(line.to_string()));
    (logger, lines)
}
