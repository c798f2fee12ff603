use crate::ports::outbound::{HttpResponse, Transport};
use crate::shared::Result;
use std::time::Duration;

/// HttpTransport adapter backed by a blocking reqwest client.
///
/// Implements the Transport port for the real Anolis endpoints. The
/// retry budget applies only to `fetch_with_retry` (the aggregate
/// document); `fetch` is a strict single attempt.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a new transport with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("anolis-errata/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    fn fetch_once(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            anyhow::bail!("unexpected status code {} from {}", response.status(), url);
        }

        Ok(response.bytes()?.to_vec())
    }
}

impl Transport for HttpTransport {
    fn fetch_with_retry(&self, url: &str, retries: u32) -> Result<Vec<u8>> {
        let attempts = retries.max(1);
        let mut last_error = None;

        for attempt in 1..=attempts {
            match self.fetch_once(url) {
                Ok(body) => return Ok(body),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < attempts {
                        // Retry after a short, linearly growing wait
                        std::thread::sleep(Duration::from_millis(100 * attempt as u64));
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("no fetch attempt was made")))
    }

    fn fetch(&self, url: &str) -> Result<HttpResponse> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
