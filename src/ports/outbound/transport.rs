use crate::shared::Result;

/// Raw outcome of a single HTTP exchange: status code plus body bytes.
/// Status interpretation belongs to the caller.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Transport port for fetching remote documents over HTTP.
///
/// The core treats the transport as a black box: retry policy and
/// timeouts live behind this interface, not in the pipeline.
/// Implementations must be `Send + Sync`.
pub trait Transport: Send + Sync {
    /// Fetches `url` with a retry budget, returning the body of the
    /// first successful response.
    ///
    /// Used once per run, for the aggregate OVAL document. `retries` is
    /// the total attempt budget; a budget of zero still makes one
    /// attempt.
    ///
    /// # Errors
    /// Returns the last attempt's error once the budget is exhausted.
    fn fetch_with_retry(&self, url: &str, retries: u32) -> Result<Vec<u8>>;

    /// Fetches `url` in a single attempt, returning status and body.
    ///
    /// Used per errata detail. Non-success statuses are returned as
    /// data, not errors; deliberately no retry here - the original
    /// contract retries only the aggregate fetch.
    ///
    /// # Errors
    /// Returns an error only on network-level failure (no response).
    fn fetch(&self, url: &str) -> Result<HttpResponse>;
}
