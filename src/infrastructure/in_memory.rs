use crate::domain::payout::PayoutRequest;
use crate::domain::ports::{GatewayError, PayoutGateway};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An in-process payout gateway that records every request it receives.
///
/// Scripted outcomes are returned in order; once they run out every request is
/// accepted with a small acknowledgement echoing the payout reference. Backs
/// `--dry-run` and the test-suite, where no endpoint is reachable.
#[derive(Default, Clone)]
pub struct InMemoryGateway {
    requests: Arc<RwLock<Vec<PayoutRequest>>>,
    outcomes: Arc<RwLock<VecDeque<Result<Value, GatewayError>>>>,
}

impl InMemoryGateway {
    /// Creates a gateway that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the outcome returned for the next unscripted request.
    pub async fn push_outcome(&self, outcome: Result<Value, GatewayError>) {
        self.outcomes.write().await.push_back(outcome);
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<PayoutRequest> {
        self.requests.read().await.clone()
    }

    fn acknowledgement(request: &PayoutRequest) -> Value {
        json!({
            "status": "ACCEPTED",
            "reference": request.form.reference,
            "amount": request.form.amount,
            "transactionType": request.form.transaction_type,
        })
    }
}

#[async_trait]
impl PayoutGateway for InMemoryGateway {
    async fn initiate(&self, request: &PayoutRequest) -> Result<Value, GatewayError> {
        self.requests.write().await.push(request.clone());
        let scripted = self.outcomes.write().await.pop_front();
        scripted.unwrap_or_else(|| Ok(Self::acknowledgement(request)))
    }
}
