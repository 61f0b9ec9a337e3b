/**
 * Profile Handler Types
 *
 * `ProfileForm` is the body of POST /api/profile. Text fields are flat,
 * including the social links, and `skills` is a comma-delimited string.
 */

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::backend::profile::profiles::{ProfilePatch, Social};

/// Create or update profile request
#[derive(Deserialize, Serialize, Debug, Default, Clone, Validate)]
#[serde(default)]
pub struct ProfileForm {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
    pub githubusername: Option<String>,
    /// Comma-delimited, e.g. `"rust, tokio, axum"`
    #[validate(length(min = 1, message = "Skills are required"))]
    pub skills: String,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl From<ProfileForm> for ProfilePatch {
    fn from(form: ProfileForm) -> Self {
        ProfilePatch {
            skills: ProfilePatch::skills(Some(form.skills.as_str())),
            company: ProfilePatch::text(form.company),
            website: ProfilePatch::text(form.website),
            location: ProfilePatch::text(form.location),
            bio: ProfilePatch::text(form.bio),
            status: ProfilePatch::text(Some(form.status)),
            githubusername: ProfilePatch::text(form.githubusername),
            social: Social {
                youtube: ProfilePatch::text(form.youtube),
                twitter: ProfilePatch::text(form.twitter),
                facebook: ProfilePatch::text(form.facebook),
                linkedin: ProfilePatch::text(form.linkedin),
                instagram: ProfilePatch::text(form.instagram),
            },
        }
    }
}
