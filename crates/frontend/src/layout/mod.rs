pub mod center;
pub mod left;
pub mod top_header;

use crate::domain::a001_document::ui::list::DocumentPanel;
use crate::domain::a002_chat::ui::details::ChatPanel;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Documents  |           Chat             |
/// |   (Left)    |         (Center)           |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout" style="height: 100vh; display: flex; flex-direction: column;">
            <TopHeader />
            <div class="app-body" style="flex: 1; display: flex; min-height: 0;">
                <left::Left>
                    <DocumentPanel />
                </left::Left>
                <center::Center>
                    <ChatPanel />
                </center::Center>
            </div>
        </div>
    }
}
