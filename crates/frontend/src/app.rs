use crate::layout::Shell;
use crate::shared::config::AppConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Read once; panels build their HTTP clients from it.
    provide_context(AppConfig::from_document());

    view! {
        <ConfigProvider>
            <Shell />
        </ConfigProvider>
    }
}
