use super::state::FormState;
use super::view::FormView;
use crate::domain::form::FormField;
use crate::domain::payout::{ApiResponse, MerchantIdentity};
use crate::domain::ports::PayoutGateway;
use crate::error::Result;

/// What a call to [`PayoutForm::submit`] ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    /// The payout was accepted by the endpoint.
    Succeeded,
    /// The request was sent but failed; the failure is in the response.
    Failed,
}

/// The payout form component.
///
/// `PayoutForm` owns the form state and the gateway submissions go through.
/// Every mutation takes `&mut self`, so edits and submissions are serialized
/// by ownership; the network call in [`submit`](Self::submit) is the only
/// suspension point.
pub struct PayoutForm<G: PayoutGateway> {
    state: FormState,
    gateway: G,
    identity: MerchantIdentity,
}

impl<G: PayoutGateway> PayoutForm<G> {
    /// Creates an empty form.
    ///
    /// # Arguments
    ///
    /// * `gateway` - Where validated payouts are sent.
    /// * `identity` - Merchant identifiers attached to every submission.
    pub fn new(gateway: G, identity: MerchantIdentity) -> Self {
        Self {
            state: FormState::new(),
            gateway,
            identity,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn response(&self) -> Option<&ApiResponse> {
        self.state.response()
    }

    pub fn view(&self) -> FormView {
        self.state.view()
    }

    pub fn change(&mut self, field: FormField, value: impl Into<String>) -> Result<()> {
        self.state.change(field, value)
    }

    pub fn validate(&mut self) -> bool {
        self.state.validate()
    }

    /// Validates the form and, when it is valid, sends it to the gateway.
    ///
    /// Submission failures are captured into the form's response rather than
    /// returned; the only error is [`PayoutError::SubmissionInFlight`].
    ///
    /// [`PayoutError::SubmissionInFlight`]: crate::error::PayoutError::SubmissionInFlight
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let Some(submission) = self.state.begin_submission(&self.identity)? else {
            tracing::debug!("payout form failed validation");
            return Ok(SubmitOutcome::Invalid);
        };

        let outcome = self.gateway.initiate(submission.request()).await;
        let result = match &outcome {
            Ok(_) => {
                tracing::info!(
                    reference = %submission.request().form.reference,
                    "payout initiated"
                );
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                tracing::warn!(
                    reference = %submission.request().form.reference,
                    error = %e,
                    "payout submission failed"
                );
                SubmitOutcome::Failed
            }
        };
        submission.complete(outcome);
        Ok(result)
    }
}
