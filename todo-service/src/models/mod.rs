use serde::{Deserialize, Serialize};

// Request DTOs
//
// Also the PUT body: an update is a full replace, so omitted optional
// fields land as their defaults and overwrite the stored values.
#[derive(Deserialize, Debug)]
pub struct CreateTodoRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

// Stored record
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TodoRecord {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

// Query params for GET /todos
#[derive(Deserialize, Debug)]
pub struct TodoListQuery {
    pub completed: Option<bool>,
}

// Response DTO for GET /stats
#[derive(Serialize, Debug)]
pub struct StatsResponse {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub completion_rate: String,
}
