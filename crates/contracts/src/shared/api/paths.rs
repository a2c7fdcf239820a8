//! Endpoint paths, relative to the API base URL.

use crate::domain::a001_document::aggregate::DocumentId;

pub const DOCUMENTS: &str = "/api/documents";
pub const CHAT: &str = "/api/chat";

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

pub fn document(id: &DocumentId) -> String {
    format!("{}/{}", DOCUMENTS, urlencoding::encode(&id.to_string()))
}
