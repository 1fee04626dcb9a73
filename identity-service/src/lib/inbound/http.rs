pub mod handlers;
pub mod middleware;
pub mod payload;
pub mod router;
