use super::sources::SourcesBlock;
use crate::domain::a002_chat::model::{ChatRole, EntryKind, TranscriptEntry};
use leptos::prelude::*;
use thaw::*;

const BUBBLE: &str = "padding: 8px 16px; border-radius: 8px; max-width: 42rem;";

#[component]
#[allow(non_snake_case)]
pub fn MessageBubble(entry: TranscriptEntry) -> impl IntoView {
    let justify = entry.alignment().justify();
    let row_style = format!("display: flex; justify-content: {};", justify);

    let bubble = match entry.kind {
        EntryKind::Loading => view! {
            <div class="chat-loading" style=format!("{} background: var(--colorNeutralBackground3);", BUBBLE)>
                <Spinner size=SpinnerSize::Small />
            </div>
        }
        .into_any(),
        EntryKind::Message { role: ChatRole::User, html, .. } => view! {
            <div
                class="chat-message chat-message--user"
                style=format!("{} background: var(--colorBrandBackground); color: var(--colorNeutralForegroundOnBrand); white-space: pre-wrap;", BUBBLE)
                inner_html=html
            ></div>
        }
        .into_any(),
        EntryKind::Message { role: ChatRole::Assistant, html, sources } => {
            let has_sources = !sources.is_empty();
            view! {
                <div
                    class="chat-message chat-message--assistant"
                    style=format!("{} background: var(--colorNeutralBackground3);", BUBBLE)
                >
                    <div class="chat-markdown" inner_html=html></div>
                    {has_sources.then(|| view! { <SourcesBlock sources=sources /> })}
                </div>
            }
            .into_any()
        }
        EntryKind::Message { role: ChatRole::Error, html, .. } => view! {
            <div
                class="chat-message chat-message--error"
                style="padding: 8px 16px; border-radius: 8px; background: var(--colorPaletteRedBackground1); color: var(--colorPaletteRedForeground1);"
                inner_html=html
            ></div>
        }
        .into_any(),
    };

    view! { <div style=row_style>{bubble}</div> }
}
