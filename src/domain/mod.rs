//! Domain types and ports for the purchase-authorization workflow.

pub mod card;
pub mod order;
pub mod ports;
pub mod validation;
