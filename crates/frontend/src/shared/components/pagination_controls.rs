use crate::shared::icons::icon;
use contracts::shared::pagination::{build_page_tokens, PageToken};
use leptos::prelude::*;
use thaw::*;

/// PaginationControls component - previous / numbered pages / next
///
/// Pages are 1-based. Numbered tokens come from `build_page_tokens`, so the
/// window around the current page looks like `1 … 4 5 6 … 42`.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback with the requested page; the receiver clamps it
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let tokens = move || build_page_tokens(current_page.get(), total_pages.get());

    view! {
        <nav class="pagination" aria-label="pagination">
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                attr:class="pagination__nav"
                attr:title="Previous page"
                disabled=Signal::derive(move || current_page.get() <= 1)
                on_click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
            >
                {icon("chevron-left")}
                <span>"Previous"</span>
            </Button>

            {move || {
                let current = current_page.get();
                tokens()
                    .into_iter()
                    .map(|token| match token {
                        PageToken::Page(page) => view! {
                            <Button
                                appearance=page_appearance(token, current)
                                size=ButtonSize::Small
                                attr:class="pagination__page"
                                attr:aria-current=token.is_active(current).then_some("page")
                                on_click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </Button>
                        }
                        .into_any(),
                        PageToken::Ellipsis => view! {
                            <span class="pagination__ellipsis" aria-hidden="true">
                                {icon("more-horizontal")}
                            </span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}

            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                attr:class="pagination__nav"
                attr:title="Next page"
                disabled=Signal::derive(move || current_page.get() >= total_pages.get())
                on_click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
            >
                <span>"Next"</span>
                {icon("chevron-right")}
            </Button>
        </nav>
    }
}

/// Активная страница выделяется обводкой
fn page_appearance(token: PageToken, current_page: usize) -> ButtonAppearance {
    if token.is_active(current_page) {
        ButtonAppearance::Secondary
    } else {
        ButtonAppearance::Subtle
    }
}
