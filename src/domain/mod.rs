//! Domain model of the payout form: the form values, the rules they are
//! validated against, the request built from them and the gateway port the
//! request is sent through.

pub mod form;
pub mod payout;
pub mod ports;
pub mod validation;
