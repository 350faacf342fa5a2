use leptos::prelude::*;

/// SectionHeader component - centered title + subtitle above a page section
#[component]
pub fn SectionHeader(
    /// Section title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-header__title">{title}</h2>
            {move || subtitle.get().map(|s| view! {
                <p class="section-header__subtitle">{s}</p>
            })}
        </div>
    }
}
