use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    view! {
        <div
            data-zone="left"
            class="left"
            style="width: 288px; padding: 16px; border-right: 1px solid var(--colorNeutralStroke2); background: var(--colorNeutralBackground2); display: flex; flex-direction: column; gap: 8px;"
        >
            <h2 style="font-size: 14px; font-weight: 600; margin: 0;">"Documents"</h2>
            {children()}
        </div>
    }
}
