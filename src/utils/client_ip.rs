//! Client IP resolution.
//!
//! Resolution order: first non-empty entry of `X-Forwarded-For` (a header
//! of only separators counts as absent), then `X-Real-IP`, then the socket
//! peer address. Upstream infrastructure is trusted to
//! set the forwarding headers; entries are used as opaque strings and are
//! not validated as well-formed IP addresses.
//!
//! Requests whose IP cannot be determined resolve to `"unknown"`, which
//! never matches a whitelist entry.

use std::net::SocketAddr;

use axum::{
    extract::ConnectInfo,
    http::{Extensions, HeaderMap},
};

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Resolve the client IP from headers, falling back to the peer address.
pub fn resolve_client_ip(headers: &HeaderMap, extensions: &Extensions) -> String {
    if let Some(ip) = headers
        .get(X_FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(first_forwarded_ip)
    {
        return ip;
    }

    if let Some(ip) = headers
        .get(X_REAL_IP)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        return ip.to_string();
    }

    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// First non-empty entry of a comma-separated `X-Forwarded-For` value.
pub fn first_forwarded_ip(value: &str) -> Option<String> {
    value
        .split(',')
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_forwarded_ip_single() {
        assert_eq!(first_forwarded_ip("1.2.3.4"), Some("1.2.3.4".to_string()));
    }

    #[test]
    fn test_first_forwarded_ip_chain() {
        assert_eq!(
            first_forwarded_ip("1.2.3.4, 10.0.0.1, 10.0.0.2"),
            Some("1.2.3.4".to_string())
        );
    }

    #[test]
    fn test_first_forwarded_ip_leading_separator() {
        assert_eq!(
            first_forwarded_ip(" , 5.6.7.8"),
            Some("5.6.7.8".to_string())
        );
    }

    #[test]
    fn test_first_forwarded_ip_empty() {
        assert_eq!(first_forwarded_ip(""), None);
        assert_eq!(first_forwarded_ip(" , "), None);
    }
}
