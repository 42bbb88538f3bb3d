use serde::{Deserialize, Serialize};

// Request DTOs
#[derive(Deserialize, Debug)]
pub struct CreateUserRequest {
    pub name: String,
    pub age: u32,
    pub email: Option<String>,
}

// Stored record; ids are minted by the store, strictly increasing from 1
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub email: Option<String>,
}

// Response DTOs
#[derive(Serialize, Debug)]
pub struct CreateUserResponse {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub email: Option<String>,
    pub message: String,
}

impl CreateUserResponse {
    // The confirmation message only appears on the creation response,
    // never on later reads of the same record.
    pub fn created(user: UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
            email: user.email,
            message: "User created successfully".into(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct UserListResponse {
    pub users: Vec<UserRecord>,
    pub count: usize,
}

#[derive(Serialize, Debug)]
pub struct ServiceStatus {
    pub message: String,
    pub total_users: usize,
}
