use crate::domain::a002_chat::model::SourceView;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn SourcesBlock(sources: Vec<SourceView>) -> impl IntoView {
    view! {
        <div style="margin-top: 12px; padding-top: 12px; border-top: 1px solid var(--colorNeutralStroke2);">
            <p style="font-size: 12px; color: var(--colorNeutralForeground3); margin-bottom: 8px;">"Sources:"</p>
            <div style="display: flex; flex-direction: column; gap: 8px;">
                {sources
                    .into_iter()
                    .map(|source| {
                        view! {
                            <div class="chat-source" style="background: var(--colorNeutralBackground1); border-radius: 4px; padding: 8px; font-size: 12px;">
                                <span style="color: var(--colorNeutralForeground4);">{source.ordinal_label()}</span>
                                " "
                                <span style="color: var(--colorNeutralForeground2);" inner_html=source.excerpt_html.clone()></span>
                                <span style="color: var(--colorNeutralForeground2);">{source.ellipsis()}</span>
                                <span style="color: var(--colorNeutralForeground4); margin-left: 4px;">{source.percent_label()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
