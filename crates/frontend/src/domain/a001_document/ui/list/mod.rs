use crate::domain::a001_document::api::HttpDocumentsApi;
use crate::domain::a001_document::controller::DocumentPanelController;
use crate::domain::a001_document::state::{
    render_documents, DocumentCard, DocumentListView, DocumentPanelState, EMPTY_PLACEHOLDER,
};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::markup::HtmlMarkup;
use crate::shared::notify::BrowserNotifier;
use leptos::prelude::*;
use thaw::*;

type Controller = DocumentPanelController<HttpDocumentsApi, BrowserNotifier, RwSignal<DocumentPanelState>>;

#[component]
#[allow(non_snake_case)]
pub fn DocumentPanel() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let state = RwSignal::new(DocumentPanelState::default());
    let controller: Controller =
        DocumentPanelController::new(HttpDocumentsApi::new(config), BrowserNotifier, state);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    {
        let controller = controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller.load_documents().await;
        });
    }

    let on_file_change = {
        let controller = controller.clone();
        move |_ev: web_sys::Event| {
            let Some(input) = file_input_ref.get() else {
                return;
            };
            let file = input.files().and_then(|files| files.get(0));
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.handle_file_upload(file).await;
                input.set_value("");
            });
        }
    };

    let upload_busy = Signal::derive(move || state.with(|s| s.upload_busy));
    let cards = Memo::new(move |_| state.with(|s| render_documents(&s.documents, &HtmlMarkup)));

    view! {
        <div style="display: flex; flex-direction: column; gap: 12px; height: 100%;">
            <input
                type="file"
                accept=".txt,.md,.markdown,.rst,.csv,.json,.html"
                style="display: none;"
                id="file-input"
                node_ref=file_input_ref
                on:change=on_file_change
            />
            <Button
                appearance=ButtonAppearance::Primary
                attr:id="upload-btn"
                disabled=upload_busy
                on_click=move |_| {
                    if let Some(input) = file_input_ref.get() {
                        input.click();
                    }
                }
            >
                {icon("upload")}
                {move || format!(" {}", state.with(|s| s.upload_label()))}
            </Button>

            <div id="document-list" style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 8px;">
                {move || match cards.get() {
                    DocumentListView::Empty => view! {
                        <p style="font-size: 13px; color: var(--colorNeutralForeground3); text-align: center;">
                            {EMPTY_PLACEHOLDER}
                        </p>
                    }.into_any(),
                    DocumentListView::Cards(cards) => cards
                        .into_iter()
                        .map(|card| {
                            let controller = controller.clone();
                            view! { <DocumentCardView card=card controller=controller /> }
                        })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn DocumentCardView(card: DocumentCard, controller: Controller) -> impl IntoView {
    let id = card.id;
    let on_delete = move |_: web_sys::MouseEvent| {
        let controller = controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller.delete_document(id).await;
        });
    };

    view! {
        <div
            class="document-card"
            title=card.created_label.unwrap_or_default()
            style="padding: 10px 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; display: flex; align-items: flex-start; justify-content: space-between; gap: 8px;"
        >
            <div style="flex: 1; min-width: 0;">
                <p
                    style="font-size: 14px; font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;"
                    inner_html=card.filename_html
                ></p>
                <p style="font-size: 12px; color: var(--colorNeutralForeground3);">
                    {card.chunks_label}
                </p>
            </div>
            <button
                title="Delete document"
                style="background: none; border: none; cursor: pointer; padding: 2px; color: var(--colorNeutralForeground3);"
                on:click=on_delete
            >
                {icon("delete")}
            </button>
        </div>
    }
}
