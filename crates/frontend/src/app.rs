use crate::domain::a001_project::ui::list::ProjectsSection;
use contracts::shared::config::{load_config, CatalogConfig};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config(None).unwrap_or_else(|e| {
        log::error!("Failed to load catalog config, using defaults: {:#}", e);
        CatalogConfig::default()
    });

    view! {
        <ConfigProvider>
            <main class="portfolio">
                <ProjectsSection config=config />
            </main>
        </ConfigProvider>
    }
}
