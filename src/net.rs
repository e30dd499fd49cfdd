// Network access module
//
// The page itself renders entirely from the local portfolio document, but
// remote assets (resume, project images) are probed through this seam so
// availability checks can be retried and mocked.

use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors produced by the fetch seam.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("request exhausted after {attempts} attempts: {last}")]
    Exhausted { attempts: u32, last: String },
}

/// A request to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub method: String,
    pub url: String,
}

impl FetchRequest {
    pub fn head(url: &str) -> Self {
        Self {
            method: "HEAD".to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Transport seam. Implementations perform one attempt; retry policy lives
/// in [`retry_with_backoff`], not in the transport.
#[cfg_attr(test, mockall::automock)]
pub trait Fetch: Send + Sync {
    fn send(&self, request: &FetchRequest) -> Result<FetchResponse, NetworkError>;
}

/// Transport that fails every request. Used when asset probing is disabled;
/// callers observe the same error path as an offline host.
#[derive(Debug, Default)]
pub struct NullFetch;

impl Fetch for NullFetch {
    fn send(&self, request: &FetchRequest) -> Result<FetchResponse, NetworkError> {
        Err(NetworkError::RequestFailed(format!(
            "no transport configured for {} {}",
            request.method, request.url
        )))
    }
}

/// Send a request with exponential backoff.
///
/// Attempt `n` (1-based) is followed, on failure, by a delay of
/// `base_delay * 2^(n-1)`. The last failure is surfaced in
/// [`NetworkError::Exhausted`] once `max_attempts` is reached.
pub async fn retry_with_backoff<F: Fetch + ?Sized>(
    fetch: &F,
    request: &FetchRequest,
    max_attempts: u32,
    base_delay: Duration,
) -> Result<FetchResponse, NetworkError> {
    let mut last_error = NetworkError::RequestFailed("no attempts made".to_string());

    for attempt in 1..=max_attempts {
        match fetch.send(request) {
            Ok(response) => {
                debug!(
                    "Fetch succeeded: {} {} (attempt {}/{})",
                    request.method, request.url, attempt, max_attempts
                );
                return Ok(response);
            }
            Err(err) => {
                warn!(
                    "Fetch attempt {}/{} failed for {}: {}",
                    attempt, max_attempts, request.url, err
                );
                last_error = err;

                if attempt < max_attempts {
                    let delay = base_delay * 2u32.pow(attempt - 1);
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    Err(NetworkError::Exhausted {
        attempts: max_attempts,
        last: last_error.to_string(),
    })
}
