//! # Domain Layer
//!
//! Core models and the prompt composer. This layer is pure: no I/O, no
//! frameworks, and every function is deterministic for identical input.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
