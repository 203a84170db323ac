pub mod api_middleware;

pub use api_middleware::{logging_middleware, security_headers_middleware};
