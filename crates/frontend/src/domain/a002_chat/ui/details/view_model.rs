//! Chat Panel - View Model

use crate::domain::a002_chat::model::{EntryId, TranscriptEntry};
use crate::domain::a002_chat::state::ChatState;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatPanelVm {
    pub state: RwSignal<ChatState>,
    /// Memos keep keystrokes in the draft from re-rendering the transcript.
    pub entries: Memo<Vec<TranscriptEntry>>,
    pub last_entry: Memo<Option<EntryId>>,
    pub is_loading: Memo<bool>,
    pub placeholder_visible: Memo<bool>,
}

impl ChatPanelVm {
    pub fn new() -> Self {
        let state = RwSignal::new(ChatState::default());
        Self {
            state,
            entries: Memo::new(move |_| state.with(|s| s.entries.clone())),
            last_entry: Memo::new(move |_| state.with(|s| s.entries.last().map(|e| e.id))),
            is_loading: Memo::new(move |_| state.with(|s| s.is_loading())),
            placeholder_visible: Memo::new(move |_| state.with(|s| s.placeholder_visible())),
        }
    }

    pub fn draft(&self) -> String {
        self.state.with(|s| s.draft.clone())
    }

    pub fn set_draft(&self, value: String) {
        self.state.update(|s| s.draft = value);
    }
}
