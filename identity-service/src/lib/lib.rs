pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

// Re-export commonly used types
pub use domain::user;
pub use domain::user::service::IdentityService;
pub use outbound::repositories;
