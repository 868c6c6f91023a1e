//! Application layer orchestrating the purchase-authorization workflow.

pub mod manager;
