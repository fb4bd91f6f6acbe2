//! DocVault API Library
//!
//! This crate provides the HTTP handlers, error rendering and application setup.

mod api_doc;
pub mod constants;
mod handlers;
mod telemetry;

pub mod error;
pub mod setup;
pub mod state;

pub use error::{ErrorResponse, HttpAppError};
