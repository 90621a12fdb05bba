//! Blocking downloads from the BOE open-data service.
//!
//! The BOE answers `404 Not Found` for every document of a day without a
//! gazette (weekends, public holidays), so a missing document surfaces as
//! [`HarvesterError::NotFound`] instead of a generic HTTP failure. Gateway
//! errors and dropped connections are retried with exponential backoff.

use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;

use crate::config::{HTTP_TIMEOUT_SECS, MAX_RETRIES, RETRY_BASE_DELAY_MS};
use crate::error::{HarvesterError, Result};

const USER_AGENT: &str = concat!("borme-harvester/", env!("CARGO_PKG_VERSION"));

/// What to do with the answer to one request.
enum Attempt {
    Done(Vec<u8>),
    Retry(String),
}

/// Create the shared client: request timeout plus an identifying user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Delay before retry number `attempt` (1-based): 500ms, 1s, 2s, ...
fn backoff(attempt: u32) -> Duration {
    Duration::from_millis(RETRY_BASE_DELAY_MS << attempt.saturating_sub(1).min(16))
}

fn read_response(url: &str, response: Response) -> Result<Attempt> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(HarvesterError::NotFound {
            url: url.to_string(),
        });
    }
    if status.is_server_error() {
        return Ok(Attempt::Retry(format!("Server error: {status}")));
    }
    let bytes = response.error_for_status()?.bytes()?;
    Ok(Attempt::Done(bytes.to_vec()))
}

/// Fetch the body of `url`.
///
/// # Errors
/// [`HarvesterError::NotFound`] when the BOE has not published the document,
/// [`HarvesterError::Http`] for other client errors and malformed URLs,
/// [`HarvesterError::RetriesExhausted`] when every attempt hit a 5xx answer,
/// a timeout or a refused connection.
pub fn download_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let mut last_error = String::from("no attempt made");

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            let delay = backoff(attempt);
            tracing::debug!(url, attempt, delay_ms = delay.as_millis() as u64, "Retrying");
            thread::sleep(delay);
        }

        let outcome = match client.get(url).send() {
            Ok(response) => read_response(url, response)?,
            Err(e) if e.is_connect() || e.is_timeout() => Attempt::Retry(e.to_string()),
            Err(e) => return Err(HarvesterError::Http(e)),
        };

        match outcome {
            Attempt::Done(bytes) => {
                tracing::debug!(url, size = bytes.len(), "Downloaded");
                return Ok(bytes);
            }
            Attempt::Retry(reason) => {
                tracing::warn!(
                    url,
                    reason = %reason,
                    attempt = attempt + 1,
                    max_retries = MAX_RETRIES,
                    "Transient failure"
                );
                last_error = reason;
            }
        }
    }

    Err(HarvesterError::RetriesExhausted {
        attempts: MAX_RETRIES,
        message: last_error,
    })
}

/// Download a URL to `dest`, creating parent directories.
///
/// Nothing is written when the download fails.
pub fn download_file(client: &Client, url: &str, dest: &Path) -> Result<()> {
    let bytes = download_bytes(client, url)?;
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, bytes)?;
    tracing::debug!(url, dest = %dest.display(), "Saved download");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        let client = create_client();
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url_is_not_retried() {
        let client = create_client().unwrap();
        let err = download_bytes(&client, "not a url").unwrap_err();
        assert!(matches!(err, HarvesterError::Http(_)));
    }

    #[test]
    fn test_backoff_doubles() {
        assert_eq!(backoff(1), Duration::from_millis(RETRY_BASE_DELAY_MS));
        assert_eq!(backoff(2), Duration::from_millis(RETRY_BASE_DELAY_MS * 2));
        assert_eq!(backoff(3), Duration::from_millis(RETRY_BASE_DELAY_MS * 4));
    }
}
