use super::form::FormData;
use super::ports::GatewayError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message surfaced when a failed submission carries no usable error payload.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred.";

/// Fixed identifiers tagging the submitting merchant on every payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantIdentity {
    #[serde(rename = "merchantID")]
    pub merchant_id: String,
    #[serde(rename = "affiliateID")]
    pub affiliate_id: String,
}

impl MerchantIdentity {
    pub fn new(merchant_id: impl Into<String>, affiliate_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            affiliate_id: affiliate_id.into(),
        }
    }
}

/// Body of the payout-initiation call: the form fields merged with the
/// merchant identifiers into a single flat JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRequest {
    #[serde(flatten)]
    pub form: FormData,
    #[serde(flatten)]
    pub identity: MerchantIdentity,
}

impl PayoutRequest {
    pub fn new(form: FormData, identity: MerchantIdentity) -> Self {
        Self { form, identity }
    }
}

/// Outcome of the most recent submission: the server's payload on success,
/// the failure payload otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Success(Value),
    Failure(Value),
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    pub fn data(&self) -> &Value {
        match self {
            ApiResponse::Success(data) | ApiResponse::Failure(data) => data,
        }
    }
}

impl From<GatewayError> for ApiResponse {
    /// Keeps the server's error payload when it sent one; everything else
    /// (transport failures, empty bodies) collapses into the generic message.
    fn from(error: GatewayError) -> Self {
        let data = match error {
            GatewayError::Rejected {
                body: Some(body), ..
            } if !is_blank(&body) => body,
            _ => Value::String(GENERIC_FAILURE_MESSAGE.to_string()),
        };
        ApiResponse::Failure(data)
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
