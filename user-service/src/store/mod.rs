use async_trait::async_trait;

use tracklet_shared::error::Result;

use crate::models::{CreateUserRequest, UserRecord};

// In-memory store implementation
pub mod memory;

/// UserStore trait defining the interface for user storage implementations
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Mints the next id and stores a new user
    async fn create_user(&self, user: CreateUserRequest) -> Result<UserRecord>;

    /// Gets a user by id
    async fn get_user(&self, id: u64) -> Result<UserRecord>;

    /// Gets all users in creation order
    async fn list_users(&self) -> Result<Vec<UserRecord>>;

    /// Number of stored users
    async fn count(&self) -> Result<usize>;
}
