//! Chat Panel - View Component

use super::message::MessageBubble;
use super::view_model::ChatPanelVm;
use crate::domain::a002_chat::api::HttpChatApi;
use crate::domain::a002_chat::controller::{ChatController, SubmitOutcome};
use crate::domain::a002_chat::model::WELCOME_MESSAGE;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::markup::HtmlMarkup;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let vm = ChatPanelVm::new();
    let controller = ChatController::new(HttpChatApi::new(config), HtmlMarkup, vm.state);
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    // Every append changes the last entry id
    Effect::new(move |_| {
        vm.last_entry.track();
        scroll_to_bottom();
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if controller.submit().await != SubmitOutcome::Ignored {
                if let Some(input) = input_ref.get() {
                    let _ = input.focus();
                }
            }
        });
    };

    view! {
        <div style="height: 100%; display: flex; flex-direction: column;">
            <div
                id="messages"
                node_ref=messages_container_ref
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 16px; padding: 16px;"
            >
                <Show when=move || vm.placeholder_visible.get()>
                    <div style="text-align: center; color: var(--colorNeutralForeground3); margin-top: 48px;">
                        {icon("chat")}
                        <p>{WELCOME_MESSAGE}</p>
                    </div>
                </Show>
                <For
                    each=move || vm.entries.get()
                    key=|entry| entry.id
                    let:entry
                >
                    <MessageBubble entry=entry />
                </For>
            </div>

            <form
                id="chat-form"
                style="display: flex; gap: 8px; padding: 16px; border-top: 1px solid var(--colorNeutralStroke2);"
                on:submit=handle_submit
            >
                <input
                    id="message-input"
                    type="text"
                    autocomplete="off"
                    placeholder="Ask a question about your documents..."
                    node_ref=input_ref
                    style="flex: 1; padding: 8px 12px; border: 1px solid var(--colorNeutralStroke1); border-radius: 6px;"
                    prop:value=move || vm.draft()
                    on:input=move |ev| vm.set_draft(event_target_value(&ev))
                />
                <button
                    id="send-btn"
                    type="submit"
                    style="display: flex; align-items: center; gap: 6px; padding: 8px 16px; border: none; border-radius: 6px; background: var(--colorBrandBackground); color: var(--colorNeutralForegroundOnBrand); cursor: pointer;"
                    disabled=move || vm.is_loading.get()
                >
                    {icon("send")}
                    " Send"
                </button>
            </form>
        </div>
    }
}
