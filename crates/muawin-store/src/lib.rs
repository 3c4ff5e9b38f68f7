//! # muawin-store
//!
//! Record store for patient intake data.
//!
//! - [`PatientStore`]: lookup / upsert / list-all over the patient table
//! - [`SqliteStore`]: the on-disk backend, one connection per operation
//! - [`MemoryStore`]: an in-process backend for tests
//! - [`codec`]: column encoding shared with files written by older tools

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod memory;
pub mod sqlite;
pub mod traits;

mod proptests;

pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::PatientStore;
