//! Profile Handlers Module
//!
//! - **`read`** - `get_my_profile`, `list_profiles`, `get_profile_by_user`
//! - **`write`** - `upsert_profile`, `delete_account`
//! - **`types`** - `ProfileForm`, the POST body

pub mod types;

pub mod read;

pub mod write;

pub use read::{get_my_profile, get_profile_by_user, list_profiles};
pub use types::ProfileForm;
pub use write::{delete_account, upsert_profile};
