use chrono::Local;
use serde::Serialize;

// Response DTOs for general use across services
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

// Helper function to get current timestamp as string
// Local process time at second precision: YYYY-MM-DD HH:MM:SS
pub fn now_str() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
