//! Front ends driving the payout form: an interactive terminal session and a
//! CSV batch runner.

pub mod csv;
pub mod terminal;
