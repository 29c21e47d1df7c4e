//! Shared types and models for the weather map
//!
//! This crate contains the data model, display rules and render model shared
//! between the backend and the browser (via WASM). It performs no I/O.

pub mod format;
pub mod models;
pub mod types;
pub mod validation;
pub mod view;

pub use models::*;
pub use types::*;
pub use validation::*;
