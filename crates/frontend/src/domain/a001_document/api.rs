use crate::shared::api_utils::{ensure_success, read_json, ApiError};
use crate::shared::config::AppConfig;
use async_trait::async_trait;
use contracts::domain::a001_document::aggregate::{Document, DocumentId};
use contracts::shared::api::paths;
use gloo_net::http::Request;
use web_sys::FormData;

#[async_trait(?Send)]
pub trait DocumentsApi {
    /// File handle accepted by `upload_document`.
    type File: 'static;

    async fn list_documents(&self) -> Result<Vec<Document>, ApiError>;

    async fn upload_document(&self, file: Self::File) -> Result<(), ApiError>;

    async fn delete_document(&self, id: &DocumentId) -> Result<(), ApiError>;
}

/// `DocumentsApi` over `fetch`
#[derive(Debug, Clone)]
pub struct HttpDocumentsApi {
    config: AppConfig,
}

impl HttpDocumentsApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl DocumentsApi for HttpDocumentsApi {
    type File = web_sys::File;

    async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        let response = Request::get(&self.config.api_url(paths::DOCUMENTS))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::network)?;

        read_json(response).await
    }

    async fn upload_document(&self, file: web_sys::File) -> Result<(), ApiError> {
        let form_data = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
        form_data
            .append_with_blob_and_filename(paths::UPLOAD_FIELD, &file, &file.name())
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;

        let response = Request::post(&self.config.api_url(paths::DOCUMENTS))
            .body(form_data)
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;

        // The created document is not needed, the list is refetched instead.
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete_document(&self, id: &DocumentId) -> Result<(), ApiError> {
        let response = Request::delete(&self.config.api_url(&paths::document(id)))
            .send()
            .await
            .map_err(ApiError::network)?;

        ensure_success(response).await?;
        Ok(())
    }
}
