extern crate log;
extern crate reqwest;
extern crate tokio;

use super::error::{network_error, Result};
use crate::config::retry::{RETRY_COUNT, RETRY_DELAY, THROTTLE_DELAY};
use log::debug;
use reqwest::{RequestBuilder, Response, StatusCode};
use std::time::Duration;
use tokio::time::sleep;

fn should_retry(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}
fn delay_for(status: Option<StatusCode>) -> Duration {
    match status {
        Some(StatusCode::TOO_MANY_REQUESTS) | Some(StatusCode::SERVICE_UNAVAILABLE) => {
            THROTTLE_DELAY
        }
        _ => RETRY_DELAY,
    }
}

/// Sends the request built by `build`, retrying transport failures and
/// throttled or server-side answers. The last answer is returned as is.
pub(super) async fn send_retry<F>(build: F) -> Result<Response>
where
    F: Fn() -> RequestBuilder,
{
    for attempt in 1..RETRY_COUNT {
        match build().send().await {
            Ok(v) if !should_retry(v.status()) => return Ok(v),
            Ok(v) => {
                debug!("Attempt {} answered {}, retrying", attempt, v.status());
                sleep(delay_for(Some(v.status()))).await;
            }
            Err(e) => {
                debug!("Attempt {} failed: {}", attempt, e);
                sleep(delay_for(e.status())).await;
            }
        }
    }
    build().send().await.map_err(network_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_retry() {
        assert!(should_retry(StatusCode::SERVICE_UNAVAILABLE));
        assert!(should_retry(StatusCode::TOO_MANY_REQUESTS));
        assert!(should_retry(StatusCode::BAD_GATEWAY));
        assert!(!should_retry(StatusCode::OK));
        assert!(!should_retry(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_throttle_delay() {
        assert_eq!(delay_for(Some(StatusCode::TOO_MANY_REQUESTS)), THROTTLE_DELAY);
        assert_eq!(delay_for(Some(StatusCode::INTERNAL_SERVER_ERROR)), RETRY_DELAY);
        assert_eq!(delay_for(None), RETRY_DELAY);
    }
}
