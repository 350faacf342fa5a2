pub mod state;

use self::state::create_state;
use super::card::ProjectCard;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::section_header::SectionHeader;
use crate::shared::dom::scroll_to_anchor;
use contracts::enums::CategoryFilter;
use contracts::shared::config::CatalogConfig;
use leptos::prelude::*;
use thaw::*;

const SECTION_TITLE: &str = "Featured Projects";
const SECTION_SUBTITLE: &str =
    "A selection of my recent work showcasing my skills and expertise.";

/// Пары (value, подпись) для вкладок категорий, в порядке конфига
fn tab_items(tabs: &[CategoryFilter]) -> Vec<(&'static str, &'static str)> {
    tabs.iter().copied().map(|tab| (tab.code(), tab.tab_label())).collect()
}

/// Секция «Проекты»: вкладки категорий, сетка карточек и пагинация
#[component]
pub fn ProjectsSection(config: CatalogConfig) -> impl IntoView {
    let catalog = create_state(&config);
    let anchor_id = StoredValue::new(config.anchor_id.clone());
    let selected_tab = RwSignal::new(CategoryFilter::All.code().to_string());

    // Sync selected_tab -> catalog; первый запуск пропускаем, вкладка "all" уже активна
    Effect::new(move |prev: Option<String>| {
        let current = selected_tab.get();
        if prev.is_some_and(|prev| prev != current) {
            let mut result = Ok(());
            catalog.update(|c| result = c.set_category_code(&current));
            if let Err(e) = result {
                log::error!("ProjectsSection: tab event ignored: {}", e);
            }
        }
        current
    });

    let view_state = Memo::new(move |_| catalog.with(|c| c.query()));

    let on_page_change = Callback::new(move |page: usize| {
        let page = catalog
            .try_update(|c| c.go_to_page(page as i64))
            .unwrap_or(1);
        log::debug!("ProjectsSection: page {}", page);
        anchor_id.with_value(|id| scroll_to_anchor(id));
    });

    let current_page = Signal::derive(move || view_state.with(|v| v.current_page));
    let total_pages = Signal::derive(move || view_state.with(|v| v.total_pages));

    view! {
        <section id=config.anchor_id.clone() class="projects-section">
            <div class="container">
                <SectionHeader title=SECTION_TITLE subtitle=SECTION_SUBTITLE.to_string() />

                <div class="projects-section__tabs">
                    <TabList selected_value=selected_tab>
                        {tab_items(&config.tabs)
                            .into_iter()
                            .map(|(value, label)| view! {
                                <Tab value=value>{label}</Tab>
                            })
                            .collect_view()}
                    </TabList>
                </div>

                <div class="projects-grid">
                    {move || view_state.with(|v| {
                        if v.visible_projects.is_empty() {
                            return view! {
                                <p class="projects-grid__empty">"No projects in this category yet."</p>
                            }
                            .into_any();
                        }
                        v.visible_projects
                            .iter()
                            .enumerate()
                            .map(|(position, project)| view! {
                                <ProjectCard project=*project position=position />
                            })
                            .collect_view()
                            .into_any()
                    })}
                </div>

                <Show when=move || view_state.with(|v| v.show_pagination())>
                    <div class="projects-section__pagination">
                        <PaginationControls
                            current_page=current_page
                            total_pages=total_pages
                            on_page_change=on_page_change
                        />
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ProjectCategory;

    #[test]
    fn test_tab_items_follow_config_order() {
        let config = CatalogConfig::default();
        assert_eq!(
            tab_items(&config.tabs),
            vec![
                ("all", "All Projects"),
                ("fullstack", "Full Stack"),
                ("frontend", "Frontend"),
            ]
        );
    }

    #[test]
    fn test_tab_items_outlive_config() {
        let items = {
            let tabs = vec![CategoryFilter::Only(ProjectCategory::Other)];
            tab_items(&tabs)
        };
        assert_eq!(items, vec![("other", "Other")]);
    }
}
