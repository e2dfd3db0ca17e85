// User Service Library
// In-memory user records and the manager that owns them

pub mod config;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::UserManagerConfig;
pub use error::{ServiceError, ServiceResult};
pub use models::User;
pub use services::{SharedUser, UserManager};
