use super::api::DocumentsApi;
use super::state::{DocumentPanelState, DELETE_CONFIRM, DELETE_FAILED, UPLOAD_FALLBACK};
use crate::shared::notify::Notifier;
use crate::shared::store::StateCell;
use contracts::domain::a001_document::aggregate::DocumentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// No file selected, or an upload is already running.
    Skipped,
    Uploaded,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed,
}

/// Sequences document operations: backend call, state update, user alert.
#[derive(Debug, Clone)]
pub struct DocumentPanelController<A, N, S> {
    api: A,
    notifier: N,
    state: S,
}

impl<A, N, S> DocumentPanelController<A, N, S>
where
    A: DocumentsApi,
    N: Notifier,
    S: StateCell<DocumentPanelState>,
{
    pub fn new(api: A, notifier: N, state: S) -> Self {
        Self {
            api,
            notifier,
            state,
        }
    }

    /// Refreshes the list. Failures are only logged and keep the previous
    /// list on screen.
    pub async fn load_documents(&self) -> bool {
        match self.api.list_documents().await {
            Ok(documents) => {
                log::debug!("Loaded {} documents", documents.len());
                self.state.update_state(|s| s.documents = documents);
                true
            }
            Err(e) => {
                log::error!("Failed to load documents: {}", e);
                false
            }
        }
    }

    pub async fn handle_file_upload(&self, file: Option<A::File>) -> UploadOutcome {
        let Some(file) = file else {
            return UploadOutcome::Skipped;
        };
        let started = self
            .state
            .update_state(|s| !std::mem::replace(&mut s.upload_busy, true))
            .unwrap_or(false);
        if !started {
            return UploadOutcome::Skipped;
        }

        let outcome = match self.api.upload_document(file).await {
            Ok(()) => {
                log::debug!("Document uploaded");
                self.load_documents().await;
                UploadOutcome::Uploaded
            }
            Err(e) => {
                log::error!("Failed to upload document: {}", e);
                let message = e.user_message(UPLOAD_FALLBACK);
                self.notifier
                    .alert(&format!("Failed to upload: {}", message));
                UploadOutcome::Failed(message)
            }
        };

        self.state.update_state(|s| s.upload_busy = false);
        outcome
    }

    pub async fn delete_document(&self, id: DocumentId) -> DeleteOutcome {
        if !self.notifier.confirm(DELETE_CONFIRM) {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_document(&id).await {
            Ok(()) => {
                log::debug!("Document {} deleted", id);
                self.load_documents().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                log::error!("Failed to delete document {}: {}", id, e);
                self.notifier
                    .alert(&format!("Failed to delete: {}", DELETE_FAILED));
                DeleteOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::ApiError;
    use crate::shared::testing::RecordingNotifier;
    use async_trait::async_trait;
    use crate::domain::a001_document::state::{UPLOADING_LABEL, UPLOAD_LABEL};
    use contracts::domain::a001_document::aggregate::Document;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::RefCell;
    use std::rc::Rc;
    use uuid::Uuid;

    /// In-memory backend. Files are plain names.
    #[derive(Clone, Default)]
    struct FakeBackend {
        documents: Rc<RefCell<Vec<Document>>>,
        fail_list: Rc<RefCell<bool>>,
        upload_error: Rc<RefCell<Option<ApiError>>>,
        delete_error: Rc<RefCell<Option<ApiError>>>,
        /// When set, the next upload waits for this reply.
        held_upload: Rc<RefCell<Option<oneshot::Receiver<Result<(), ApiError>>>>>,
        list_calls: Rc<RefCell<usize>>,
        upload_calls: Rc<RefCell<usize>>,
        delete_calls: Rc<RefCell<usize>>,
    }

    impl FakeBackend {
        fn with_documents(names: &[&str]) -> Self {
            let backend = Self::default();
            for name in names {
                backend.documents.borrow_mut().push(doc(name));
            }
            backend
        }

        fn hold_next_upload(&self) -> oneshot::Sender<Result<(), ApiError>> {
            let (tx, rx) = oneshot::channel();
            *self.held_upload.borrow_mut() = Some(rx);
            tx
        }
    }

    fn doc(name: &str) -> Document {
        Document {
            id: DocumentId::new(Uuid::new_v4()),
            filename: name.to_string(),
            chunk_count: 2,
            created_at: None,
        }
    }

    #[async_trait(?Send)]
    impl DocumentsApi for FakeBackend {
        type File = String;

        async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
            *self.list_calls.borrow_mut() += 1;
            if *self.fail_list.borrow() {
                return Err(ApiError::Status {
                    status: 500,
                    detail: None,
                });
            }
            Ok(self.documents.borrow().clone())
        }

        async fn upload_document(&self, file: String) -> Result<(), ApiError> {
            *self.upload_calls.borrow_mut() += 1;
            let held = self.held_upload.borrow_mut().take();
            if let Some(rx) = held {
                rx.await
                    .unwrap_or_else(|_| Err(ApiError::network("connection dropped")))?;
            }
            if let Some(err) = self.upload_error.borrow().clone() {
                return Err(err);
            }
            self.documents.borrow_mut().push(doc(&file));
            Ok(())
        }

        async fn delete_document(&self, id: &DocumentId) -> Result<(), ApiError> {
            *self.delete_calls.borrow_mut() += 1;
            if let Some(err) = self.delete_error.borrow().clone() {
                return Err(err);
            }
            self.documents.borrow_mut().retain(|d| d.id != *id);
            Ok(())
        }
    }

    type State = Rc<RefCell<DocumentPanelState>>;

    fn controller(
        backend: &FakeBackend,
        notifier: &RecordingNotifier,
    ) -> (DocumentPanelController<FakeBackend, RecordingNotifier, State>, State) {
        let state: State = Rc::new(RefCell::new(DocumentPanelState::default()));
        let ctl = DocumentPanelController::new(backend.clone(), notifier.clone(), state.clone());
        (ctl, state)
    }

    fn filenames(state: &State) -> Vec<String> {
        state
            .borrow()
            .documents
            .iter()
            .map(|d| d.filename.clone())
            .collect()
    }

    #[test]
    fn test_load_replaces_list() {
        let backend = FakeBackend::with_documents(&["a.txt", "b.txt"]);
        let notifier = RecordingNotifier::default();
        let (ctl, state) = controller(&backend, &notifier);

        assert!(block_on(ctl.load_documents()));
        assert_eq!(filenames(&state), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_load_failure_keeps_stale_list_silently() {
        let backend = FakeBackend::with_documents(&["a.txt"]);
        let notifier = RecordingNotifier::default();
        let (ctl, state) = controller(&backend, &notifier);
        block_on(ctl.load_documents());

        backend.documents.borrow_mut().clear();
        *backend.fail_list.borrow_mut() = true;

        assert!(!block_on(ctl.load_documents()));
        assert_eq!(filenames(&state), vec!["a.txt"]);
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn test_upload_success_refreshes_and_releases_control() {
        let backend = FakeBackend::default();
        let notifier = RecordingNotifier::default();
        let (ctl, state) = controller(&backend, &notifier);

        let outcome = block_on(ctl.handle_file_upload(Some("report.md".to_string())));

        assert_eq!(outcome, UploadOutcome::Uploaded);
        assert_eq!(filenames(&state), vec!["report.md"]);
        assert!(!state.borrow().upload_busy);
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn test_upload_failure_surfaces_detail() {
        let backend = FakeBackend::with_documents(&["a.txt"]);
        let notifier = RecordingNotifier::default();
        let (ctl, state) = controller(&backend, &notifier);
        block_on(ctl.load_documents());
        let list_calls = *backend.list_calls.borrow();

        *backend.upload_error.borrow_mut() = Some(ApiError::Status {
            status: 400,
            detail: Some("Unsupported file type".into()),
        });

        let outcome = block_on(ctl.handle_file_upload(Some("image.png".to_string())));

        assert_eq!(outcome, UploadOutcome::Failed("Unsupported file type".into()));
        assert_eq!(notifier.alerts(), vec!["Failed to upload: Unsupported file type"]);
        assert_eq!(filenames(&state), vec!["a.txt"]);
        assert_eq!(*backend.list_calls.borrow(), list_calls);
        assert!(!state.borrow().upload_busy);
    }

    #[test]
    fn test_upload_failure_without_detail_uses_fallback() {
        let backend = FakeBackend::default();
        let notifier = RecordingNotifier::default();
        let (ctl, _state) = controller(&backend, &notifier);
        *backend.upload_error.borrow_mut() = Some(ApiError::Status {
            status: 500,
            detail: None,
        });

        block_on(ctl.handle_file_upload(Some("a.txt".to_string())));

        assert_eq!(notifier.alerts(), vec!["Failed to upload: Upload failed"]);
    }

    #[test]
    fn test_upload_in_flight_shows_busy_and_skips_second() {
        let backend = FakeBackend::default();
        let notifier = RecordingNotifier::default();
        let (ctl, state) = controller(&backend, &notifier);
        let reply = backend.hold_next_upload();

        let mut first = Box::pin(ctl.handle_file_upload(Some("report.md".to_string())));
        assert!(first.as_mut().now_or_never().is_none());

        assert!(state.borrow().upload_busy);
        assert_eq!(state.borrow().upload_label(), UPLOADING_LABEL);

        let second = block_on(ctl.handle_file_upload(Some("other.md".to_string())));
        assert_eq!(second, UploadOutcome::Skipped);
        assert_eq!(*backend.upload_calls.borrow(), 1);
        assert!(state.borrow().upload_busy);

        reply.send(Ok(())).unwrap();
        assert_eq!(block_on(first), UploadOutcome::Uploaded);

        assert!(!state.borrow().upload_busy);
        assert_eq!(state.borrow().upload_label(), UPLOAD_LABEL);
        assert_eq!(filenames(&state), vec!["report.md"]);
    }

    #[test]
    fn test_upload_without_file_is_noop() {
        let backend = FakeBackend::default();
        let notifier = RecordingNotifier::default();
        let (ctl, state) = controller(&backend, &notifier);

        assert_eq!(block_on(ctl.handle_file_upload(None)), UploadOutcome::Skipped);
        assert!(!state.borrow().upload_busy);
        assert_eq!(*backend.list_calls.borrow(), 0);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let backend = FakeBackend::with_documents(&["a.txt"]);
        let notifier = RecordingNotifier::declining();
        let (ctl, state) = controller(&backend, &notifier);
        block_on(ctl.load_documents());
        let id = state.borrow().documents[0].id;

        assert_eq!(block_on(ctl.delete_document(id)), DeleteOutcome::Cancelled);
        assert_eq!(*backend.delete_calls.borrow(), 0);
        assert_eq!(notifier.confirms.borrow().as_slice(), [DELETE_CONFIRM]);
    }

    #[test]
    fn test_delete_refreshes_list() {
        let backend = FakeBackend::with_documents(&["a.txt", "b.txt"]);
        let notifier = RecordingNotifier::accepting();
        let (ctl, state) = controller(&backend, &notifier);
        block_on(ctl.load_documents());
        let id = state.borrow().documents[0].id;

        assert_eq!(block_on(ctl.delete_document(id)), DeleteOutcome::Deleted);
        assert_eq!(filenames(&state), vec!["b.txt"]);
    }

    #[test]
    fn test_delete_failure_is_generic() {
        let backend = FakeBackend::with_documents(&["a.txt"]);
        let notifier = RecordingNotifier::accepting();
        let (ctl, state) = controller(&backend, &notifier);
        block_on(ctl.load_documents());
        let id = state.borrow().documents[0].id;
        *backend.delete_error.borrow_mut() = Some(ApiError::Status {
            status: 404,
            detail: Some("Document not found".into()),
        });

        assert_eq!(block_on(ctl.delete_document(id)), DeleteOutcome::Failed);
        assert_eq!(notifier.alerts(), vec!["Failed to delete: Delete failed"]);
        assert_eq!(filenames(&state), vec!["a.txt"]);
    }
}
