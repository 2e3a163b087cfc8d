mod response;

pub use response::{not_found, ApiError, ApiResponse};
