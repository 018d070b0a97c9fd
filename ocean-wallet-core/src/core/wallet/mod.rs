//! Wallet state kept alongside the core flows

pub mod tokens;

pub use tokens::*;
