use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use dotenvy::dotenv;
use std::env;

/// Bearer credentials for the search service.
///
/// The token is opaque to this crate. How it gets minted (a service account
/// key file pointed at by GOOGLE_APPLICATION_CREDENTIALS, `gcloud auth
/// print-access-token`, a metadata server) is the caller's business; the
/// library only ever sees the injected value.
#[derive(Debug, Clone)]
pub struct Credentials {
    access_token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>) -> Credentials {
        Credentials {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Credentials {
        self.expires_at = Some(expires_at);
        self
    }

    /// Read RETAIL_ACCESS_TOKEN (required) and RETAIL_TOKEN_EXPIRY (optional,
    /// RFC 3339) from the environment. Meant for the binary, not library code.
    pub fn from_env() -> Result<Credentials> {
        dotenv().ok();
        let access_token = env::var("RETAIL_ACCESS_TOKEN")
            .context("Missing required environment variable: RETAIL_ACCESS_TOKEN")?;
        let expires_at = match env::var("RETAIL_TOKEN_EXPIRY") {
            Ok(raw) => Some(
                DateTime::parse_from_rfc3339(&raw)
                    .context("RETAIL_TOKEN_EXPIRY is not a valid RFC 3339 timestamp")?
                    .with_timezone(&Utc),
            ),
            Err(_) => None,
        };
        Ok(Credentials {
            access_token,
            expires_at,
        })
    }

    pub fn bearer_token(&self) -> &str {
        &self.access_token
    }

    /// Diagnostic only. A stale token is still sent; rejecting it is the
    /// service's job.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => at <= Utc::now(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_no_expiry_is_never_expired() {
        let credentials = Credentials::new("ya29.token");
        assert!(!credentials.is_expired());
        assert_eq!(credentials.bearer_token(), "ya29.token");
    }

    #[test]
    fn test_expiry_in_the_past() {
        let credentials =
            Credentials::new("ya29.token").with_expiry(Utc::now() - Duration::minutes(5));
        assert!(credentials.is_expired());
    }

    #[test]
    fn test_expiry_in_the_future() {
        let credentials =
            Credentials::new("ya29.token").with_expiry(Utc::now() + Duration::minutes(30));
        assert!(!credentials.is_expired());
    }
}
