//! CLI command handlers

pub mod commands;

pub use commands::{detect, init_tracing, merge};
