use super::view::FormView;
use crate::domain::form::{FormData, FormField};
use crate::domain::payout::{ApiResponse, MerchantIdentity, PayoutRequest};
use crate::domain::ports::GatewayError;
use crate::domain::validation::{self, ValidationErrors};
use crate::error::{PayoutError, Result};
use serde_json::Value;

/// State owned by a single mounted payout form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    form: FormData,
    errors: ValidationErrors,
    response: Option<ApiResponse>,
    in_flight: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn response(&self) -> Option<&ApiResponse> {
        self.response.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Applies a single field edit. No validation runs here.
    pub fn change(&mut self, field: FormField, value: impl Into<String>) -> Result<()> {
        self.form.set(field, value)
    }

    /// Re-validates the whole form, replacing any previous errors.
    pub fn validate(&mut self) -> bool {
        self.errors = validation::validate(&self.form);
        self.errors.is_empty()
    }

    /// Starts a submission.
    ///
    /// Returns `Ok(None)` when validation fails, in which case nothing should
    /// be sent. Otherwise the returned [`Submission`] holds the request to send
    /// and keeps the form marked as in flight until it is dropped.
    pub fn begin_submission(
        &mut self,
        identity: &MerchantIdentity,
    ) -> Result<Option<Submission<'_>>> {
        if self.in_flight {
            return Err(PayoutError::SubmissionInFlight);
        }
        if !self.validate() {
            return Ok(None);
        }

        let request = PayoutRequest::new(self.form.clone(), identity.clone());
        self.in_flight = true;
        Ok(Some(Submission {
            state: self,
            request,
        }))
    }

    pub fn view(&self) -> FormView {
        FormView::build(
            &self.form,
            &self.errors,
            self.response.as_ref(),
            self.in_flight,
        )
    }
}

/// An in-flight submission.
///
/// The in-flight flag is released when this value is dropped, whether the
/// submission completed, failed, or was abandoned mid-request.
pub struct Submission<'a> {
    state: &'a mut FormState,
    request: PayoutRequest,
}

impl Submission<'_> {
    pub fn request(&self) -> &PayoutRequest {
        &self.request
    }

    pub fn state(&self) -> &FormState {
        &*self.state
    }

    /// Records the gateway's answer. Success also clears validation errors.
    pub fn complete(self, outcome: std::result::Result<Value, GatewayError>) {
        self.state.response = Some(match outcome {
            Ok(body) => {
                self.state.errors.clear();
                ApiResponse::Success(body)
            }
            Err(error) => ApiResponse::from(error),
        });
    }
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        self.state.in_flight = false;
    }
}
