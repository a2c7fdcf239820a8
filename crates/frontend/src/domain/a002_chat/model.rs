//! Transcript entries as they are rendered.

use crate::shared::markup::Markup;
use contracts::domain::a002_chat::aggregate::{ChatResponse, ChatSource};

/// Characters of a source shown before it is cut.
pub const SOURCE_PREVIEW_CHARS: usize = 150;
pub const CHAT_FAILED_MESSAGE: &str = "Failed to get response. Please try again.";
pub const WELCOME_MESSAGE: &str = "Upload a document, then ask a question about it.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

/// Who a transcript message is from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
    /// Local failure notice
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Start,
    End,
    Center,
}

impl Alignment {
    pub fn justify(&self) -> &'static str {
        match self {
            Alignment::Start => "flex-start",
            Alignment::End => "flex-end",
            Alignment::Center => "center",
        }
    }
}

/// Cited source under an assistant answer
#[derive(Debug, Clone, PartialEq)]
pub struct SourceView {
    /// 1-based position in the answer's source list.
    pub ordinal: usize,
    pub excerpt_html: String,
    pub truncated: bool,
    pub similarity_percent: i64,
}

impl SourceView {
    pub fn new(index: usize, source: &ChatSource, markup: &impl Markup) -> Self {
        let (excerpt, truncated) = truncate_excerpt(&source.content, SOURCE_PREVIEW_CHARS);
        Self {
            ordinal: index + 1,
            excerpt_html: markup.escape_text(&excerpt),
            truncated,
            similarity_percent: similarity_percent(source.similarity),
        }
    }

    pub fn ordinal_label(&self) -> String {
        format!("[{}]", self.ordinal)
    }

    pub fn ellipsis(&self) -> &'static str {
        if self.truncated {
            "..."
        } else {
            ""
        }
    }

    pub fn percent_label(&self) -> String {
        format!("({}%)", self.similarity_percent)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Message {
        role: ChatRole,
        html: String,
        sources: Vec<SourceView>,
    },
    /// Placeholder shown while a request is in flight.
    Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub id: EntryId,
    pub kind: EntryKind,
}

impl TranscriptEntry {
    /// User input is never interpreted as markup.
    pub fn user(id: EntryId, text: &str, markup: &impl Markup) -> Self {
        Self::message(id, ChatRole::User, markup.escape_text(text), Vec::new())
    }

    pub fn assistant(id: EntryId, response: &ChatResponse, markup: &impl Markup) -> Self {
        let sources = response
            .sources
            .iter()
            .enumerate()
            .map(|(i, s)| SourceView::new(i, s, markup))
            .collect();
        Self::message(
            id,
            ChatRole::Assistant,
            markup.render_markdown(&response.answer),
            sources,
        )
    }

    pub fn error(id: EntryId, markup: &impl Markup) -> Self {
        Self::message(
            id,
            ChatRole::Error,
            markup.escape_text(CHAT_FAILED_MESSAGE),
            Vec::new(),
        )
    }

    pub fn loading(id: EntryId) -> Self {
        Self {
            id,
            kind: EntryKind::Loading,
        }
    }

    fn message(id: EntryId, role: ChatRole, html: String, sources: Vec<SourceView>) -> Self {
        Self {
            id,
            kind: EntryKind::Message { role, html, sources },
        }
    }

    pub fn role(&self) -> Option<ChatRole> {
        match &self.kind {
            EntryKind::Message { role, .. } => Some(*role),
            EntryKind::Loading => None,
        }
    }

    pub fn alignment(&self) -> Alignment {
        match self.role() {
            Some(ChatRole::User) => Alignment::End,
            Some(ChatRole::Error) => Alignment::Center,
            Some(ChatRole::Assistant) | None => Alignment::Start,
        }
    }
}

/// First `limit` characters of `content`, and whether anything was cut.
pub fn truncate_excerpt(content: &str, limit: usize) -> (String, bool) {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(limit).collect();
    let truncated = chars.next().is_some();
    (head, truncated)
}

/// Similarity in `[0, 1]` as a whole percentage.
pub fn similarity_percent(similarity: f64) -> i64 {
    (similarity * 100.0).round() as i64
}
