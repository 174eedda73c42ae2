//! Outbound HTTP
//!
//! Every service-to-service call goes through a `reqwest::Client` built here,
//! so all of them share one fixed timeout and no retry policy.

use std::time::Duration;

/// Default bound on one outbound request, connect included
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Build the shared client
///
/// The client is cheap to clone and safe for concurrent use.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
}

/// Join a base URL and an absolute path without doubling the slash
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://catalog:8080", "/products/7"),
            "http://catalog:8080/products/7"
        );
        assert_eq!(
            join_url("http://catalog:8080/", "products/7"),
            "http://catalog:8080/products/7"
        );
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)).is_ok());
    }
}
