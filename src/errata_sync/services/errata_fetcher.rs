use crate::errata_sync::domain::errata::Errata;
use crate::errata_sync::domain::ref_id::normalize_ref_id;
use crate::ports::outbound::Transport;
use crate::shared::error::FetchError;

/// Success status for the CSAF detail endpoint.
const STATUS_OK: u16 = 200;

/// Fetches and parses one CSAF errata record by OVAL reference ID.
///
/// Normalizes the ref-ID, issues a single GET through the injected
/// transport and decodes the body. One outbound call per invocation,
/// no retry: the advisory corpus applies a retry budget only to the
/// aggregate document fetch, and this layer keeps that asymmetry.
pub struct ErrataFetcher<'a, T: Transport> {
    transport: &'a T,
    csaf_base_url: &'a str,
}

impl<'a, T: Transport> ErrataFetcher<'a, T> {
    pub fn new(transport: &'a T, csaf_base_url: &'a str) -> Self {
        Self {
            transport,
            csaf_base_url,
        }
    }

    /// Detail endpoint URL for a (possibly unnormalized) reference ID.
    pub fn errata_url(&self, ref_id: &str) -> String {
        format!(
            "{}/{}.json",
            self.csaf_base_url.trim_end_matches('/'),
            normalize_ref_id(ref_id)
        )
    }

    /// Fetches the errata record for `ref_id`.
    ///
    /// # Errors
    /// - [`FetchError::Transport`] when the request fails at the network level
    /// - [`FetchError::UnexpectedStatus`] when the endpoint answers with a non-success status
    /// - [`FetchError::MalformedRecord`] when a success body cannot be decoded as CSAF
    pub fn fetch(&self, ref_id: &str) -> Result<Errata, FetchError> {
        let url = self.errata_url(ref_id);

        let response = self
            .transport
            .fetch(&url)
            .map_err(|e| FetchError::Transport {
                details: e.to_string(),
            })?;

        if response.status != STATUS_OK {
            return Err(FetchError::UnexpectedStatus {
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| FetchError::MalformedRecord {
            details: e.to_string(),
        })
    }
}
