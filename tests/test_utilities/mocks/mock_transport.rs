use anolis_errata::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock Transport for testing
///
/// Serves a canned aggregate document and per-URL detail responses,
/// and records every request so tests can assert on attempt counts
/// and URL shapes. Cloning shares the recorded state, so tests can
/// keep a handle after moving a clone into the use case.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    oval_body: Mutex<Option<Vec<u8>>>,
    detail_responses: Mutex<HashMap<String, HttpResponse>>,
    aggregate_requests: Mutex<Vec<(String, u32)>>,
    detail_requests: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_oval(self, body: &str) -> Self {
        *self.inner.oval_body.lock().unwrap() = Some(body.as_bytes().to_vec());
        self
    }

    /// Registers a detail response for a normalized ref-ID under the
    /// default CSAF base URL.
    pub fn with_detail(self, normalized_id: &str, status: u16, body: &str) -> Self {
        let url = format!(
            "https://anas.openanolis.cn/api/data/CSAF/advisories/{}.json",
            normalized_id
        );
        self.inner.detail_responses.lock().unwrap().insert(
            url,
            HttpResponse {
                status,
                body: body.as_bytes().to_vec(),
            },
        );
        self
    }

    pub fn aggregate_requests(&self) -> Vec<(String, u32)> {
        self.inner.aggregate_requests.lock().unwrap().clone()
    }

    pub fn detail_requests(&self) -> Vec<String> {
        self.inner.detail_requests.lock().unwrap().clone()
    }

    pub fn detail_request_count(&self, normalized_id: &str) -> usize {
        let needle = format!("/{}.json", normalized_id);
        self.detail_requests()
            .iter()
            .filter(|url| url.ends_with(&needle))
            .count()
    }
}

impl Transport for MockTransport {
    fn fetch_with_retry(&self, url: &str, retries: u32) -> Result<Vec<u8>> {
        self.inner
            .aggregate_requests
            .lock()
            .unwrap()
            .push((url.to_string(), retries));
        match self.inner.oval_body.lock().unwrap().as_ref() {
            Some(body) => Ok(body.clone()),
            None => anyhow::bail!("mock aggregate endpoint unreachable"),
        }
    }

    fn fetch(&self, url: &str) -> Result<HttpResponse> {
        self.inner
            .detail_requests
            .lock()
            .unwrap()
            .push(url.to_string());
        match self.inner.detail_responses.lock().unwrap().get(url) {
            Some(response) => Ok(response.clone()),
            None => anyhow::bail!("mock transport failure for {}", url),
        }
    }
}
