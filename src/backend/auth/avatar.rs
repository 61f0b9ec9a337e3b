//! Gravatar URLs for new users.
//!
//! The avatar is computed once at registration and stored with the user.

use md5::{Digest, Md5};

/// Image size in pixels
const SIZE: u32 = 200;
/// Highest rating allowed
const RATING: &str = "pg";
/// Fallback image when no Gravatar exists ("mystery man")
const DEFAULT_IMAGE: &str = "mm";

/// Build the protocol-relative Gravatar URL for an email address
///
/// The hash input is the trimmed, lowercased address, as Gravatar requires.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let hash = hex::encode(Md5::digest(normalized.as_bytes()));
    format!(
        "//www.gravatar.com/avatar/{}?s={}&r={}&d={}",
        hash, SIZE, RATING, DEFAULT_IMAGE
    )
}
