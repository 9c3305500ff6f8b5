use leptos::prelude::*;

/// Short labels in authored order. An empty list still renders the container.
#[component]
pub fn TagList(
    tags: Vec<String>,
    #[prop(into)] container_class: String,
    #[prop(into)] tag_class: String,
) -> impl IntoView {
    view! {
        <div class=container_class>
            {tags
                .into_iter()
                .map(|tag| view! { <span class=tag_class.clone()>{tag}</span> })
                .collect_view()}
        </div>
    }
}
