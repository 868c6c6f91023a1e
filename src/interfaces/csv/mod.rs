//! CSV readers and writers for the CLI's order intake and output.

pub mod order_reader;
pub mod order_writer;
pub mod purchase_reader;
