//! # muawin-api
//!
//! HTTP server for the patient intake form.
//!
//! This crate provides:
//! - Server-rendered HTML pages for lookup, edit and save
//! - A JSON API over the same record store
//! - A health check endpoint
//! - The [`Server`] that binds and serves the router

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{Error, Result};
pub use routes::router;
pub use server::Server;
pub use state::AppState;
