//! Transient upload storage.
//!
//! Uploaded images live for the duration of request processing in a local
//! directory with no retention policy. Every upload gets a collision-resistant
//! name, so concurrent requests never contend for the same path.

pub mod keys;
mod local;
mod traits;

pub use keys::upload_key;
pub use local::LocalUploadStore;
pub use traits::{StorageError, StorageResult, StoredUpload, UploadStore};
