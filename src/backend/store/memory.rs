/**
 * In-Memory Store
 *
 * Users and profiles held in two maps behind a single `RwLock`. Reads take
 * the read lock; every write (including check-then-insert sequences) holds
 * the write lock for its whole duration.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User, UserRepository};
use crate::backend::profile::profiles::{Owner, OwnedProfile, Profile, ProfilePatch, ProfileRepository};
use crate::backend::store::{Store, StoreError};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    /// Keyed by owning user id
    profiles: HashMap<Uuid, Profile>,
}

impl Tables {
    fn join(&self, profile: &Profile) -> Option<OwnedProfile> {
        let user = self.users.get(&profile.user)?;
        Some(profile.clone().with_owner(Owner {
            id: user.id,
            name: user.name.clone(),
            avatar: user.avatar.clone(),
        }))
    }
}

/// Process-local store
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        let user = user.into_user();
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    /// Deletes the user's profile with it, like the foreign key cascade
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        tables.profiles.remove(&id);
        Ok(tables.users.remove(&id).is_some())
    }
}

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<OwnedProfile>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.profiles.get(&user_id).and_then(|p| tables.join(p)))
    }

    async fn find_all(&self) -> Result<Vec<OwnedProfile>, StoreError> {
        let tables = self.tables.read().await;
        let mut profiles: Vec<OwnedProfile> =
            tables.profiles.values().filter_map(|p| tables.join(p)).collect();
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(profiles)
    }

    async fn upsert_by_user(&self, user_id: Uuid, patch: ProfilePatch) -> Result<Profile, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&user_id) {
            return Err(StoreError::UnknownUser(user_id));
        }

        let now = Utc::now();
        let profile = tables
            .profiles
            .entry(user_id)
            .or_insert_with(|| Profile::new(user_id, now));
        profile.apply(patch, now);
        Ok(profile.clone())
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<bool, StoreError> {
        Ok(self.tables.write().await.profiles.remove(&user_id).is_some())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn delete_account(&self, user_id: Uuid) -> Result<Option<User>, StoreError> {
        let mut tables = self.tables.write().await;
        let user = tables.users.remove(&user_id);
        if user.is_some() {
            tables.profiles.remove(&user_id);
        }
        Ok(user)
    }
}
