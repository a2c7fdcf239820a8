use crate::shared::markup::Markup;
use contracts::domain::a001_document::aggregate::{Document, DocumentId};

pub const EMPTY_PLACEHOLDER: &str = "No documents yet";
pub const UPLOAD_LABEL: &str = "Upload Document";
pub const UPLOADING_LABEL: &str = "Uploading...";
pub const DELETE_CONFIRM: &str = "Delete this document?";
/// Shown when an upload error carries no `detail`.
pub const UPLOAD_FALLBACK: &str = "Upload failed";
pub const DELETE_FAILED: &str = "Delete failed";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentPanelState {
    /// Latest successful listing.
    pub documents: Vec<Document>,
    pub upload_busy: bool,
}

impl DocumentPanelState {
    pub fn upload_label(&self) -> &'static str {
        if self.upload_busy {
            UPLOADING_LABEL
        } else {
            UPLOAD_LABEL
        }
    }
}

/// One rendered document card
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentCard {
    pub id: DocumentId,
    pub filename_html: String,
    pub chunks_label: String,
    /// Tooltip with the upload time, when the backend sends it.
    pub created_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentListView {
    Empty,
    Cards(Vec<DocumentCard>),
}

pub fn render_documents(documents: &[Document], markup: &impl Markup) -> DocumentListView {
    if documents.is_empty() {
        return DocumentListView::Empty;
    }

    let cards = documents
        .iter()
        .map(|doc| DocumentCard {
            id: doc.id,
            filename_html: markup.escape_text(&doc.filename),
            chunks_label: format!("{} chunks", doc.chunk_count),
            created_label: doc
                .created_at
                .map(|at| format!("Uploaded {}", at.format("%d.%m.%Y %H:%M"))),
        })
        .collect();

    DocumentListView::Cards(cards)
}
