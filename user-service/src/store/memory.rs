use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use tracklet_shared::error::{Result, ServiceError};

use super::UserStore;
use crate::models::{CreateUserRequest, UserRecord};

struct Inner {
    // Keyed by id; ids are monotonic, so iteration order == creation order
    users: BTreeMap<u64, UserRecord>,
    next_id: u64,
}

/// In-memory implementation of UserStore
///
/// Lifetime is the process lifetime; ids are never reused.
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

impl MemoryUserStore {
    /// Creates a new empty in-memory user store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, user: CreateUserRequest) -> Result<UserRecord> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ServiceError::Internal("Failed to acquire write lock".into()))?;

        // Mint and insert under one lock acquisition so ids stay unique
        let id = inner.next_id;
        inner.next_id += 1;

        let record = UserRecord {
            id,
            name: user.name,
            age: user.age,
            email: user.email,
        };

        inner.users.insert(id, record.clone());
        Ok(record)
    }

    async fn get_user(&self, id: u64) -> Result<UserRecord> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ServiceError::Internal("Failed to acquire read lock".into()))?;

        inner
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("User with id {} not found", id)))
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ServiceError::Internal("Failed to acquire read lock".into()))?;

        Ok(inner.users.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ServiceError::Internal("Failed to acquire read lock".into()))?;

        Ok(inner.users.len())
    }
}
