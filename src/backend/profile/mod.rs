//! Profile Module
//!
//! Developer profiles: one per user, written by upsert and read together
//! with the owner's name and avatar.
//!
//! - **`profiles`** - `Profile`, `ProfilePatch` and `ProfileRepository`
//! - **`handlers`** - HTTP handlers under `/api/profile`

pub mod profiles;

pub mod handlers;

pub use profiles::{OwnedProfile, Owner, Profile, ProfilePatch, ProfileRepository, Social};
