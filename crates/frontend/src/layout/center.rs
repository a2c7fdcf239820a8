use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" style="flex: 1; min-width: 0; overflow: hidden;">
            {children()}
        </div>
    }
}
