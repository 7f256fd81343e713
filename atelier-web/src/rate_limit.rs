use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Minimum pause between contact submissions from one client.
const CONTACT_MIN_INTERVAL: Duration = Duration::from_secs(10);

pub type SharedContactLimiter = Arc<ContactRateLimiter>;

/// Create the rate limiter guarding the contact endpoint
pub fn create_contact_rate_limiter() -> SharedContactLimiter {
    Arc::new(ContactRateLimiter::new(CONTACT_MIN_INTERVAL))
}

/// Per-client minimum-interval limiter. Each key remembers when it last
/// succeeded; a rejected attempt leaves that timestamp untouched, so
/// hammering the endpoint never extends the wait.
pub struct ContactRateLimiter {
    min_interval: Duration,
    last_allowed: Mutex<HashMap<String, Instant>>,
}

impl ContactRateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_allowed: Mutex::new(HashMap::new()),
        }
    }

    pub fn allow(&self, key: &str) -> bool {
        self.allow_at(key, Instant::now())
    }

    fn allow_at(&self, key: &str, now: Instant) -> bool {
        let mut last_allowed = self
            .last_allowed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(last) = last_allowed.get(key) {
            if now.duration_since(*last) < self.min_interval {
                return false;
            }
        }

        last_allowed.insert(key.to_string(), now);
        true
    }
}

/// Key identifying the client for rate limiting: the first hop of
/// `X-Forwarded-For` when running behind a proxy, otherwise the peer
/// address.
#[derive(Debug, Clone)]
pub struct ClientKey(pub String);

impl<S> FromRequestParts<S> for ClientKey
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(forwarded) = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
        {
            if let Some(ip) = forwarded.split(',').next() {
                let ip = ip.trim();
                if !ip.is_empty() {
                    return Ok(ClientKey(ip.to_string()));
                }
            }
        }

        if let Some(ConnectInfo(addr)) = parts.extensions.get::<ConnectInfo<SocketAddr>>() {
            return Ok(ClientKey(addr.ip().to_string()));
        }

        // No connect info in tests or behind unix sockets
        Ok(ClientKey("local".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_is_allowed() {
        let limiter = ContactRateLimiter::new(Duration::from_secs(10));
        assert!(limiter.allow("1.2.3.4"));
    }

    #[test]
    fn test_second_call_within_interval_is_rejected() {
        let limiter = ContactRateLimiter::new(Duration::from_secs(10));
        let start = Instant::now();

        assert!(limiter.allow_at("1.2.3.4", start));
        assert!(!limiter.allow_at("1.2.3.4", start + Duration::from_secs(5)));
    }

    #[test]
    fn test_call_after_interval_is_allowed() {
        let limiter = ContactRateLimiter::new(Duration::from_secs(10));
        let start = Instant::now();

        assert!(limiter.allow_at("1.2.3.4", start));
        assert!(limiter.allow_at("1.2.3.4", start + Duration::from_secs(10)));
    }

    #[test]
    fn test_rejected_call_does_not_reset_the_window() {
        let limiter = ContactRateLimiter::new(Duration::from_secs(10));
        let start = Instant::now();

        assert!(limiter.allow_at("1.2.3.4", start));
        // Rejected at 9s; the window still measures from the first call
        assert!(!limiter.allow_at("1.2.3.4", start + Duration::from_secs(9)));
        assert!(limiter.allow_at("1.2.3.4", start + Duration::from_secs(10)));
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = ContactRateLimiter::new(Duration::from_secs(10));
        let start = Instant::now();

        assert!(limiter.allow_at("1.2.3.4", start));
        assert!(limiter.allow_at("5.6.7.8", start));
        assert!(!limiter.allow_at("1.2.3.4", start + Duration::from_secs(1)));
    }

    #[test]
    fn test_allowed_call_starts_a_new_window() {
        let limiter = ContactRateLimiter::new(Duration::from_secs(10));
        let start = Instant::now();

        assert!(limiter.allow_at("1.2.3.4", start));
        assert!(limiter.allow_at("1.2.3.4", start + Duration::from_secs(10)));
        // The second success reset the clock
        assert!(!limiter.allow_at("1.2.3.4", start + Duration::from_secs(15)));
    }

    #[tokio::test]
    async fn test_client_key_prefers_forwarded_header() {
        let request = axum::http::Request::builder()
            .uri("/contact")
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let ClientKey(key) = ClientKey::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(key, "203.0.113.7");
    }

    #[tokio::test]
    async fn test_client_key_falls_back_to_local() {
        let request = axum::http::Request::builder()
            .uri("/contact")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let ClientKey(key) = ClientKey::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(key, "local");
    }
}
