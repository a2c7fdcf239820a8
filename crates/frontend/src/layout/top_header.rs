use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <header
            class="top-header"
            style="display: flex; align-items: center; gap: 8px; padding: 12px 16px; border-bottom: 1px solid var(--colorNeutralStroke2);"
        >
            {icon("chat")}
            <h1 style="font-size: 18px; font-weight: bold; margin: 0;">"RAG Chatbot"</h1>
        </header>
    }
}
