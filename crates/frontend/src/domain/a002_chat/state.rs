//! Chat submission state machine.
//!
//! `Idle -> begin_submit -> (request) -> resolve -> Idle`. `begin_submit`
//! refuses to start while an exchange is in flight, so there is at most one
//! chat request at a time.

use super::model::{EntryId, TranscriptEntry};
use crate::shared::api_utils::ApiError;
use crate::shared::markup::Markup;
use contracts::domain::a002_chat::aggregate::ChatResponse;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    pub entries: Vec<TranscriptEntry>,
    /// Current contents of the message input.
    pub draft: String,
    placeholder_visible: bool,
    is_loading: bool,
    next_id: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            draft: String::new(),
            placeholder_visible: true,
            is_loading: false,
            next_id: 1,
        }
    }
}

/// An accepted submission waiting for the backend.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingExchange {
    pub message: String,
    pub loading_id: EntryId,
}

impl ChatState {
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn send_enabled(&self) -> bool {
        !self.is_loading
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    /// Validates the draft and, if accepted, moves to the sending state:
    /// user message and loading indicator appended, draft cleared.
    pub fn begin_submit(&mut self, markup: &impl Markup) -> Option<PendingExchange> {
        let message = self.draft.trim().to_string();
        if message.is_empty() || self.is_loading {
            return None;
        }

        if self.placeholder_visible {
            self.placeholder_visible = false;
            self.entries.clear();
        }

        let user_id = self.next_entry_id();
        self.entries
            .push(TranscriptEntry::user(user_id, &message, markup));
        self.draft.clear();

        self.is_loading = true;
        let loading_id = self.next_entry_id();
        self.entries.push(TranscriptEntry::loading(loading_id));

        Some(PendingExchange {
            message,
            loading_id,
        })
    }

    /// Replaces the loading indicator with the outcome and returns to idle.
    pub fn resolve(
        &mut self,
        pending: PendingExchange,
        result: Result<ChatResponse, ApiError>,
        markup: &impl Markup,
    ) {
        self.entries.retain(|e| e.id != pending.loading_id);

        let id = self.next_entry_id();
        let entry = match result {
            Ok(response) => TranscriptEntry::assistant(id, &response, markup),
            Err(_) => TranscriptEntry::error(id, markup),
        };
        self.entries.push(entry);

        self.is_loading = false;
    }

    fn next_entry_id(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }
}
