use crate::utils::error::{FeedError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FeedError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_route(field_name: &str, route: &str) -> Result<()> {
    if !route.starts_with('/') {
        return Err(FeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: route.to_string(),
            reason: "Route must start with '/'".to_string(),
        });
    }
    Ok(())
}

/// Accepts `ip:port` or `host:port`, whatever `TcpListener::bind` can resolve.
pub fn validate_bind_addr(field_name: &str, addr: &str) -> Result<()> {
    if addr.parse::<std::net::SocketAddr>().is_ok() {
        return Ok(());
    }

    let invalid = |reason: String| FeedError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: addr.to_string(),
        reason,
    };

    let (host, port) = addr
        .rsplit_once(':')
        .ok_or_else(|| invalid("Expected host:port".to_string()))?;
    if host.is_empty() || host.contains(char::is_whitespace) {
        return Err(invalid("Host cannot be empty or contain whitespace".to_string()));
    }
    port.parse::<u16>()
        .map_err(|e| invalid(format!("Invalid port '{}': {}", port, e)))?;

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FeedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_base", "https://www.googleapis.com/blogger/v3").is_ok());
        assert!(validate_url("api_base", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("api_base", "").is_err());
        assert!(validate_url("api_base", "invalid-url").is_err());
        assert!(validate_url("api_base", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("max_results", 100, 1, 500).is_ok());
        assert!(validate_range("max_results", 0, 1, 500).is_err());
        assert!(validate_range("max_results", 501, 1, 500).is_err());
    }

    #[test]
    fn test_validate_route_and_addr() {
        assert!(validate_route("feed.route", "/api/blogs").is_ok());
        assert!(validate_route("feed.route", "api/blogs").is_err());
        assert!(validate_bind_addr("server.bind", "0.0.0.0:3000").is_ok());
        assert!(validate_bind_addr("server.bind", "[::1]:3000").is_ok());
        assert!(validate_bind_addr("server.bind", "localhost:3000").is_ok());
        assert!(validate_bind_addr("server.bind", "localhost").is_err());
        assert!(validate_bind_addr("server.bind", ":3000").is_err());
        assert!(validate_bind_addr("server.bind", "localhost:http").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("feed.placeholder_thumbnail", "/p.jpg").is_ok());
        assert!(validate_non_empty_string("feed.placeholder_thumbnail", "  ").is_err());
    }
}
