use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use tracklet_shared::error::{Result, ServiceError};
use tracklet_shared::models::now_str;

use super::TodoStore;
use crate::models::{CreateTodoRequest, TodoRecord};

fn not_found(id: u64) -> ServiceError {
    ServiceError::NotFound(format!("Todo with id {} not found", id))
}

struct Inner {
    // Keyed by id; ids are monotonic, so iteration order == creation order
    todos: BTreeMap<u64, TodoRecord>,
    next_id: u64,
}

/// In-memory implementation of TodoStore
///
/// Lifetime is the process lifetime; ids are never reused, even after delete.
pub struct MemoryTodoStore {
    inner: RwLock<Inner>,
}

impl MemoryTodoStore {
    /// Creates a new empty in-memory todo store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                todos: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn create_todo(&self, todo: CreateTodoRequest) -> Result<TodoRecord> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ServiceError::Internal("Failed to acquire write lock".into()))?;

        // Mint and insert under one lock acquisition so ids stay unique
        let id = inner.next_id;
        inner.next_id += 1;

        // created_at == updated_at at creation
        let now = now_str();
        let record = TodoRecord {
            id,
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
            created_at: now.clone(),
            updated_at: now,
        };

        inner.todos.insert(id, record.clone());
        Ok(record)
    }

    async fn list_todos(&self, completed: Option<bool>) -> Result<Vec<TodoRecord>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ServiceError::Internal("Failed to acquire read lock".into()))?;

        let todos = inner
            .todos
            .values()
            .filter(|todo| completed.map_or(true, |flag| todo.completed == flag))
            .cloned()
            .collect();

        Ok(todos)
    }

    async fn get_todo(&self, id: u64) -> Result<TodoRecord> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ServiceError::Internal("Failed to acquire read lock".into()))?;

        inner.todos.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    async fn replace_todo(&self, id: u64, todo: CreateTodoRequest) -> Result<TodoRecord> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ServiceError::Internal("Failed to acquire write lock".into()))?;

        let record = inner.todos.get_mut(&id).ok_or_else(|| not_found(id))?;

        // Full replace, not a merge: the request's defaults overwrite
        // whatever was stored before
        record.title = todo.title;
        record.description = todo.description;
        record.completed = todo.completed;
        record.updated_at = now_str();

        Ok(record.clone())
    }

    async fn complete_todo(&self, id: u64) -> Result<TodoRecord> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ServiceError::Internal("Failed to acquire write lock".into()))?;

        let record = inner.todos.get_mut(&id).ok_or_else(|| not_found(id))?;

        // Forced true, never toggled
        record.completed = true;
        record.updated_at = now_str();

        Ok(record.clone())
    }

    async fn delete_todo(&self, id: u64) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ServiceError::Internal("Failed to acquire write lock".into()))?;

        if inner.todos.remove(&id).is_none() {
            return Err(not_found(id));
        }

        Ok(())
    }
}
