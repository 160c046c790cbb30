//! Shared fixtures: a recording transport and client constructors

#![allow(dead_code)]

use async_trait::async_trait;
use identity_registry_client::registry::{ApiRequest, HttpTransport, RawResponse, TransportFailure};
use identity_registry_client::{Endpoints, Logger, RegistryClient};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const API_ROOT: &str = "https://registry.test/v1";
pub const APP_ID: &str = "test-app-id";
pub const APP_SECRET: &str = "test-app-secret";

/// Answers every request with the same canned reply and records what it saw
pub struct RecordingTransport {
    reply: std::result::Result<RawResponse, TransportFailure>,
    calls: AtomicUsize,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn replying(reply: std::result::Result<RawResponse, TransportFailure>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(status: u16, body: &str) -> Arc<Self> {
        Self::replying(Ok(RawResponse::new(status, body.as_bytes().to_vec())))
    }

    pub fn failing(failure: TransportFailure) -> Arc<Self> {
        Self::replying(Err(failure))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_url(&self) -> String {
        self.requests()
            .last()
            .map(|request| request.url.to_string())
            .expect("at least one request")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> std::result::Result<RawResponse, TransportFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }
}

pub fn configured_client(transport: Arc<RecordingTransport>) -> RegistryClient {
    let client = unconfigured_client(transport);
    client.initialize(APP_ID, APP_SECRET);
    client
}

pub fn unconfigured_client(transport: Arc<RecordingTransport>) -> RegistryClient {
    RegistryClient::builder()
        .with_endpoints(Endpoints::with_root(API_ROOT).unwrap())
        .with_transport(transport)
        .with_logger(Logger::new_quiet())
        .build()
        .unwrap()
}
