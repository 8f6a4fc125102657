use crate::config::{GatewayConfig, SECRET_KEY_HEADER, SecretKey};
use crate::domain::payout::PayoutRequest;
use crate::domain::ports::{GatewayError, PayoutGateway};
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Sends payout requests to the remote payout-initiation endpoint over HTTP.
#[derive(Clone)]
pub struct HttpPayoutGateway {
    client: reqwest::Client,
    endpoint: String,
    secret_key: SecretKey,
}

impl HttpPayoutGateway {
    /// Builds a gateway from validated configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint_url(),
            secret_key: config.secret_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Interprets a response body: JSON when it parses, the raw text otherwise,
/// and nothing at all when the body is empty.
fn decode_body(bytes: &[u8]) -> Option<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    Some(
        serde_json::from_slice(bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned())),
    )
}

#[async_trait]
impl PayoutGateway for HttpPayoutGateway {
    async fn initiate(&self, request: &PayoutRequest) -> std::result::Result<Value, GatewayError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            reference = %request.form.reference,
            "sending payout request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(SECRET_KEY_HEADER, self.secret_key.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let body = decode_body(&bytes);

        if status.is_success() {
            Ok(body.unwrap_or(Value::Null))
        } else {
            Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
