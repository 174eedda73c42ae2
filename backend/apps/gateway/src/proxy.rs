//! Request forwarding
//!
//! Requests and responses are buffered whole. Method, path, query, headers
//! and body pass through unchanged except for hop-by-hop headers, `Host` and
//! any client-supplied `X-User-ID`.

use axum::body::Body;
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderName, HeaderValue, header};
use axum::response::Response;
use kernel::id::UserId;
use platform::http::join_url;
use platform::identity::USER_ID_HEADER;

use crate::error::GatewayError;

/// Largest request body the gateway will buffer
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

fn connection_tokens(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(|token| token.trim().to_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

fn is_hop_by_hop(name: &HeaderName, listed: &[String]) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
        || name == header::CONTENT_LENGTH
        || listed.iter().any(|token| token == name.as_str())
}

/// Headers to send upstream; never carries the caller's `Host` or `X-User-ID`
pub fn upstream_headers(headers: &HeaderMap) -> HeaderMap {
    let listed = connection_tokens(headers);
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name, &listed) || name == header::HOST || name.as_str() == USER_ID_HEADER {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

fn downstream_headers(headers: &HeaderMap) -> HeaderMap {
    let listed = connection_tokens(headers);
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !is_hop_by_hop(name, &listed) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Send `request` to `base_url`, setting `X-User-ID` when `identity` is known
pub async fn forward(
    client: &reqwest::Client,
    base_url: &str,
    request: Request,
    identity: Option<UserId>,
) -> Result<Response, GatewayError> {
    let (parts, body) = request.into_parts();

    let target = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = join_url(base_url, target);

    let mut headers = upstream_headers(&parts.headers);
    if let Some(user_id) = identity {
        headers.insert(USER_ID_HEADER, HeaderValue::from(user_id.get()));
    }

    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| GatewayError::Body(e.to_string()))?;

    let upstream = client
        .request(parts.method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(GatewayError::Upstream)?;

    let status = upstream.status();
    let headers = downstream_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(GatewayError::Upstream)?;

    tracing::debug!(%url, status = status.as_u16(), "Forwarded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_headers_filtering() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("gateway.local"));
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive, x-trace"));
        headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
        headers.insert("x-trace", HeaderValue::from_static("1"));
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("999"));
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-request-id", HeaderValue::from_static("req-1"));

        let out = upstream_headers(&headers);

        assert!(!out.contains_key(header::HOST));
        assert!(!out.contains_key(header::CONNECTION));
        assert!(!out.contains_key("keep-alive"));
        assert!(!out.contains_key("x-trace"));
        assert!(!out.contains_key(USER_ID_HEADER));
        assert_eq!(out[header::AUTHORIZATION], "Bearer abc");
        assert_eq!(out[header::CONTENT_TYPE], "application/json");
        assert_eq!(out["x-request-id"], "req-1");
    }

    #[test]
    fn test_downstream_headers_keep_end_to_end() {
        let mut headers = HeaderMap::new();
        headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let out = downstream_headers(&headers);
        assert!(!out.contains_key(header::TRANSFER_ENCODING));
        assert_eq!(out[header::CONTENT_TYPE], "application/json");
    }
}
