//! HTTP contract of the backend: endpoint paths and the error body.

pub mod error_body;
pub mod paths;

pub use error_body::ApiErrorBody;
