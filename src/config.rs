use crate::domain::payout::MerchantIdentity;
use crate::error::{PayoutError, Result};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const INITIATE_PATH: &str = "/api/v1/payouts/initiate";
pub const SECRET_KEY_HEADER: &str = "X-Secret-Key";

pub const DEFAULT_MERCHANT_ID: &str = "021aaba9-ab1b-11ef-b842-0a58a9feac02";
pub const DEFAULT_AFFILIATE_ID: &str = "PEER7b28f4";

/// Pre-shared key sent with every payout request.
///
/// The value never appears in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(**redacted**)")
    }
}

/// Where and how payout requests are sent.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub endpoint_path: String,
    pub secret_key: SecretKey,
    /// Overall request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>, secret_key: SecretKey) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint_path: INITIATE_PATH.to_string(),
            secret_key,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL of the payout-initiation endpoint.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint_path.trim_start_matches('/')
        )
    }

    /// Rejects configurations that could never produce a valid request.
    pub fn validate(&self) -> Result<()> {
        if self.secret_key.expose().trim().is_empty() {
            return Err(PayoutError::ConfigError(
                "secret key must not be empty".to_string(),
            ));
        }
        let url = self.endpoint_url();
        let parsed = reqwest::Url::parse(&url)
            .map_err(|e| PayoutError::ConfigError(format!("invalid base URL '{url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PayoutError::ConfigError(format!(
                "unsupported URL scheme '{}'",
                parsed.scheme()
            )));
        }
        Ok(())
    }
}

impl Default for MerchantIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_MERCHANT_ID, DEFAULT_AFFILIATE_ID)
    }
}
