use contracts::domain::a001_project::{ProjectCatalog, PROJECTS};
use contracts::shared::config::CatalogConfig;
use leptos::prelude::*;

pub fn create_state(config: &CatalogConfig) -> RwSignal<ProjectCatalog<'static>> {
    RwSignal::new(ProjectCatalog::new(PROJECTS, config))
}
