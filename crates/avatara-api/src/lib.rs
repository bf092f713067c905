//! Avatara API Library
//!
//! This crate provides the HTTP handlers, error mapping, and application
//! setup for the avatar generation service.

mod api_doc;
mod handlers;
mod services;

pub mod error;
pub mod setup;
pub mod state;
pub mod telemetry;

pub use error::ErrorResponse;
