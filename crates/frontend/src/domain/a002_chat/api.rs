use crate::shared::api_utils::{read_json, ApiError};
use crate::shared::config::AppConfig;
use async_trait::async_trait;
use contracts::domain::a002_chat::aggregate::{ChatRequest, ChatResponse};
use contracts::shared::api::paths;
use gloo_net::http::Request;

#[async_trait(?Send)]
pub trait ChatApi {
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;
}

/// `ChatApi` over `fetch`
#[derive(Debug, Clone)]
pub struct HttpChatApi {
    config: AppConfig,
}

impl HttpChatApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ChatApi for HttpChatApi {
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let response = Request::post(&self.config.api_url(paths::CHAT))
            .json(request)
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;

        read_json(response).await
    }
}
