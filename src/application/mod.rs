//! Application layer: the payout form component and the shell that mounts it.
//!
//! `FormState` holds the component's state and enforces the submission
//! lifecycle, `PayoutForm` drives it against a gateway, and `FormView`
//! describes what a front end should present.

pub mod form;
pub mod shell;
pub mod state;
pub mod view;
