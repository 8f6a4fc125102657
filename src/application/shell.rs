use super::form::PayoutForm;
use crate::domain::payout::MerchantIdentity;
use crate::domain::ports::PayoutGateway;
use crate::error::{PayoutError, Result};

/// The only route the application serves.
pub const FORM_ROUTE: &str = "/";

/// Application shell: owns the configured gateway and identity and mounts a
/// fresh payout form for the single route it knows.
pub struct Shell<G: PayoutGateway + Clone> {
    gateway: G,
    identity: MerchantIdentity,
}

impl<G: PayoutGateway + Clone> Shell<G> {
    pub fn new(gateway: G, identity: MerchantIdentity) -> Self {
        Self { gateway, identity }
    }

    /// Mounts the component for `path`. Every mount starts from an empty form.
    pub fn mount(&self, path: &str) -> Result<PayoutForm<G>> {
        if path != FORM_ROUTE {
            return Err(PayoutError::RouteNotFound(path.to_string()));
        }
        Ok(PayoutForm::new(self.gateway.clone(), self.identity.clone()))
    }
}
