//! Adapters for the domain ports: storage and merchant backends.

pub mod authorizers;
pub mod in_memory;
