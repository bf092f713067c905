//! Collision-resistant key generation for transient uploads.
//!
//! Key format: `image-{unix_millis}-{random}.{extension}`. The monotone time
//! component plus a random component in `0..1e9` keeps concurrent uploads
//! from colliding; the original extension is preserved.

use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Generate a storage key for an upload with the given (already validated,
/// lowercase) extension.
pub fn upload_key(extension: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
    format!("image-{}-{}.{}", millis, suffix, extension)
}
