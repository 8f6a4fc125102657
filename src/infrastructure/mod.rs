//! Adapters implementing the payout gateway port.

pub mod http;
pub mod in_memory;
