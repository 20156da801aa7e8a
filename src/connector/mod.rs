//! # Connector Layer
//!
//! External integrations implementing application ports:
//! - HTTP chat-completion client (reqwest)
//! - Offline mock client
//! - Credential resolution from the environment

pub mod adapter;
pub mod credentials;

pub use adapter::*;
