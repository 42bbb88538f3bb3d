use async_trait::async_trait;

use tracklet_shared::error::Result;

use crate::models::{CreateTodoRequest, TodoRecord};

// In-memory store implementation
pub mod memory;

/// TodoStore trait defining the interface for todo storage implementations
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Mints the next id, stamps timestamps, and stores a new todo
    async fn create_todo(&self, todo: CreateTodoRequest) -> Result<TodoRecord>;

    /// Gets all todos in creation order, optionally filtered by completion flag
    async fn list_todos(&self, completed: Option<bool>) -> Result<Vec<TodoRecord>>;

    /// Gets a todo by id
    async fn get_todo(&self, id: u64) -> Result<TodoRecord>;

    /// Full replace of title/description/completed, refreshing updated_at
    async fn replace_todo(&self, id: u64, todo: CreateTodoRequest) -> Result<TodoRecord>;

    /// Forces completed to true (never toggles), refreshing updated_at
    async fn complete_todo(&self, id: u64) -> Result<TodoRecord>;

    /// Deletes a todo; its id is never reused
    async fn delete_todo(&self, id: u64) -> Result<()>;
}
