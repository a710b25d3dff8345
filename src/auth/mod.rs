//! Auth persistence module
//!
//! Durable storage for the bearer token, the only state that survives
//! a restart.

pub mod token_store;

pub use token_store::TokenStore;
