pub mod api;
pub mod middleware;
