//! Users Domain
//!
//! User management and credential authentication, plus the capability
//! matrix presentation layers use to gate operations by role. Follows the
//! same handlers → service → repository → models layering as the inventory
//! domain; the services themselves never enforce roles.

pub mod access;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use access::{Operation, can_access};
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryUserRepository;
pub use models::{CreateUser, LoginRequest, Role, User};
pub use repository::UserRepository;
pub use service::UserService;
