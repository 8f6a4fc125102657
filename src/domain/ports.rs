use super::payout::PayoutRequest;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Why a payout-initiation call did not succeed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The endpoint answered with a non-success status, optionally carrying
    /// an error payload.
    #[error("payout rejected with status {status}")]
    Rejected { status: u16, body: Option<Value> },
    /// The request never produced a response.
    #[error("payout request failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait PayoutGateway: Send + Sync {
    /// Sends one payout-initiation request and returns the server's payload.
    async fn initiate(&self, request: &PayoutRequest) -> Result<Value, GatewayError>;
}

/// A gateway shared between every form the shell mounts.
pub type SharedGateway = Arc<dyn PayoutGateway>;

#[async_trait]
impl<G: PayoutGateway + ?Sized> PayoutGateway for Arc<G> {
    async fn initiate(&self, request: &PayoutRequest) -> Result<Value, GatewayError> {
        (**self).initiate(request).await
    }
}
