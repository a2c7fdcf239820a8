use super::api::ChatApi;
use super::state::ChatState;
use crate::shared::markup::Markup;
use crate::shared::store::StateCell;
use contracts::domain::a002_chat::aggregate::ChatRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, or an exchange is already in flight.
    Ignored,
    Answered,
    Failed,
}

/// Runs one chat exchange against the backend.
#[derive(Debug, Clone)]
pub struct ChatController<A, M, S> {
    api: A,
    markup: M,
    state: S,
}

impl<A, M, S> ChatController<A, M, S>
where
    A: ChatApi,
    M: Markup,
    S: StateCell<ChatState>,
{
    pub fn new(api: A, markup: M, state: S) -> Self {
        Self { api, markup, state }
    }

    /// Submits the current draft.
    ///
    /// No state borrow is held while the request is pending.
    pub async fn submit(&self) -> SubmitOutcome {
        let pending = self
            .state
            .update_state(|s| s.begin_submit(&self.markup))
            .flatten();
        let Some(pending) = pending else {
            return SubmitOutcome::Ignored;
        };

        let request = ChatRequest::new(pending.message.clone());
        let result = self.api.send_message(&request).await;
        let outcome = match &result {
            Ok(response) => {
                log::debug!("Chat answered with {} sources", response.sources.len());
                SubmitOutcome::Answered
            }
            Err(e) => {
                log::error!("Chat request failed: {}", e);
                SubmitOutcome::Failed
            }
        };

        self.state
            .update_state(|s| s.resolve(pending, result, &self.markup));
        outcome
    }
}
