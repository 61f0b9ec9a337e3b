/**
 * Profile Model and Repository
 *
 * A profile extends exactly one user. It is written through
 * `ProfileRepository::upsert_by_user`, which inserts the profile on first
 * use and merges a `ProfilePatch` into it afterwards.
 *
 * # Merge Rule
 *
 * Every patch field is optional. A present value replaces the stored value,
 * an absent one leaves it untouched. Social links merge one key at a time.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::store::StoreError;

/// Social network links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl Social {
    fn merge(&mut self, other: Social) {
        merge_field(&mut self.youtube, other.youtube);
        merge_field(&mut self.twitter, other.twitter);
        merge_field(&mut self.facebook, other.facebook);
        merge_field(&mut self.linkedin, other.linkedin);
        merge_field(&mut self.instagram, other.instagram);
    }
}

/// Owner summary attached to profiles on read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

/// A user profile
///
/// `U` is the owner reference: the bare user id as stored, or an `Owner`
/// when the profile is read together with its user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile<U = Uuid> {
    pub id: Uuid,
    pub user: U,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub social: Social,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile joined with its owner's name and avatar
pub type OwnedProfile = Profile<Owner>;

impl Profile {
    /// An empty profile for `user_id`
    pub fn new(user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: user_id,
            company: None,
            website: None,
            location: None,
            bio: None,
            status: None,
            githubusername: None,
            skills: Vec::new(),
            social: Social::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a patch into this profile
    pub fn apply(&mut self, patch: ProfilePatch, now: DateTime<Utc>) {
        merge_field(&mut self.company, patch.company);
        merge_field(&mut self.website, patch.website);
        merge_field(&mut self.location, patch.location);
        merge_field(&mut self.bio, patch.bio);
        merge_field(&mut self.status, patch.status);
        merge_field(&mut self.githubusername, patch.githubusername);
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        self.social.merge(patch.social);
        self.updated_at = now;
    }

    /// Replace the owner id with the owner summary
    pub fn with_owner(self, owner: Owner) -> OwnedProfile {
        Profile {
            id: self.id,
            user: owner,
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            status: self.status,
            githubusername: self.githubusername,
            skills: self.skills,
            social: self.social,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn merge_field(target: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *target = value;
    }
}

/// Partial profile update
///
/// Build it with `ProfilePatch::text` and `ProfilePatch::skills` so that
/// empty inputs never become present values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Option<Vec<String>>,
    pub social: Social,
}

impl ProfilePatch {
    /// Keep a text input only if it is non-empty
    pub fn text(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.is_empty())
    }

    /// Split a comma-delimited skills input into trimmed tokens
    ///
    /// Empty tokens are dropped; an input with no tokens is absent.
    pub fn skills(value: Option<&str>) -> Option<Vec<String>> {
        let skills: Vec<String> = value?
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_owned)
            .collect();
        if skills.is_empty() {
            None
        } else {
            Some(skills)
        }
    }
}

/// Persistence operations on profiles
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Get the profile of a user, joined with the owner
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<OwnedProfile>, StoreError>;

    /// Get all profiles, joined with their owners, oldest first
    async fn find_all(&self) -> Result<Vec<OwnedProfile>, StoreError>;

    /// Insert the user's profile or merge the patch into the existing one
    ///
    /// Atomic: concurrent calls for one user never create two profiles.
    /// Fails with `StoreError::UnknownUser` if the user does not exist.
    async fn upsert_by_user(&self, user_id: Uuid, patch: ProfilePatch) -> Result<Profile, StoreError>;

    /// Delete the user's profile. Returns true if a record was removed.
    async fn delete_by_user(&self, user_id: Uuid) -> Result<bool, StoreError>;
}
