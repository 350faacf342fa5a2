//! Контроллер каталога проектов: фильтр по категории + постраничный вывод.
//!
//! Состояние меняется только через `set_category` и `go_to_page`;
//! всё, что нужно для отрисовки, возвращает чистый `query`.

use super::aggregate::{Project, PROJECTS};
use crate::enums::CategoryFilter;
use crate::error::CatalogError;
use crate::shared::config::{load_config, CatalogConfig};
use crate::shared::pagination::{build_page_tokens, PageToken};
use serde::Serialize;

/// Mutable part of the catalog. `current_page` is 1-based and always within
/// `[1, total_pages]` for `active_category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogState {
    pub active_category: CategoryFilter,
    pub current_page: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            active_category: CategoryFilter::All,
            current_page: 1,
        }
    }
}

/// Что рисовать для текущего состояния
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView<'a> {
    pub visible_projects: Vec<&'a Project>,
    pub current_page: usize,
    pub total_pages: usize,
    pub active_category: CategoryFilter,
    /// Сколько проектов прошло фильтр
    pub total_count: usize,
    /// Индекс первой видимой карточки в отфильтрованном списке
    pub first_index: usize,
}

impl CatalogView<'_> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Pagination is hidden when everything fits on one page
    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn page_tokens(&self) -> Vec<PageToken> {
        build_page_tokens(self.current_page, self.total_pages)
    }
}

#[derive(Debug, Clone)]
pub struct ProjectCatalog<'a> {
    projects: &'a [Project],
    page_size: usize,
    state: CatalogState,
}

impl ProjectCatalog<'static> {
    /// Catalog over the compiled-in project list with the embedded config.
    /// Falls back to `CatalogConfig::default()` if the embedded TOML is broken.
    pub fn with_defaults() -> Self {
        let config = load_config(None).unwrap_or_else(|e| {
            log::error!("catalog: embedded config rejected, using defaults: {:#}", e);
            CatalogConfig::default()
        });
        ProjectCatalog::new(PROJECTS, &config)
    }
}

impl<'a> ProjectCatalog<'a> {
    pub fn new(projects: &'a [Project], config: &CatalogConfig) -> Self {
        Self {
            projects,
            // защита от деления на ноль, если конфиг не прошёл validate()
            page_size: config.page_size.max(1),
            state: CatalogState::default(),
        }
    }

    pub fn state(&self) -> CatalogState {
        self.state
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Selects a category tab. The page always goes back to 1, so a page
    /// number from a larger filtered set is never applied to a smaller one.
    pub fn set_category(&mut self, filter: CategoryFilter) {
        log::debug!(
            "catalog: category {} -> {}, page reset to 1",
            self.state.active_category,
            filter
        );
        self.state.active_category = filter;
        self.state.current_page = 1;
    }

    /// Same as [`set_category`](Self::set_category) for a raw tab value.
    /// Unknown codes leave the state untouched.
    pub fn set_category_code(&mut self, code: &str) -> Result<(), CatalogError> {
        match CategoryFilter::from_code(code) {
            Ok(filter) => {
                self.set_category(filter);
                Ok(())
            }
            Err(e) => {
                log::warn!("catalog: rejected category code '{}'", code);
                Err(e)
            }
        }
    }

    /// Moves to `page`, clamped into `[1, total_pages]`. Returns the page
    /// actually selected.
    pub fn go_to_page(&mut self, page: i64) -> usize {
        let total_pages = self.total_pages();
        let clamped = page.clamp(1, total_pages as i64) as usize;
        if clamped as i64 != page {
            log::debug!(
                "catalog: page {} clamped to {} (total {})",
                page,
                clamped,
                total_pages
            );
        }
        self.state.current_page = clamped;
        clamped
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.state.current_page as i64 + 1)
    }

    pub fn previous_page(&mut self) -> usize {
        self.go_to_page(self.state.current_page as i64 - 1)
    }

    pub fn query(&self) -> CatalogView<'a> {
        let filtered = self.filtered();
        let total_count = filtered.len();
        let total_pages = total_pages_for(total_count, self.page_size);
        let current_page = self.state.current_page.clamp(1, total_pages);
        let first_index = (current_page - 1) * self.page_size;

        let visible_projects = filtered
            .into_iter()
            .skip(first_index)
            .take(self.page_size)
            .collect();

        CatalogView {
            visible_projects,
            current_page,
            total_pages,
            active_category: self.state.active_category,
            total_count,
            first_index,
        }
    }

    fn filtered(&self) -> Vec<&'a Project> {
        let filter = self.state.active_category;
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }

    fn total_pages(&self) -> usize {
        let count = self
            .projects
            .iter()
            .filter(|p| self.state.active_category.matches(p))
            .count();
        total_pages_for(count, self.page_size)
    }
}

/// `max(1, ceil(count / page_size))`
fn total_pages_for(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ProjectCategory;

    fn project(title: &'static str, category: ProjectCategory) -> Project {
        Project {
            title,
            description: "",
            image: "",
            tags: &[],
            live_url: None,
            category,
        }
    }

    fn sample(count: usize) -> Vec<Project> {
        const TITLES: [&str; 10] = ["p0", "p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9"];
        (0..count)
            .map(|i| {
                let category = if i % 2 == 0 {
                    ProjectCategory::Frontend
                } else {
                    ProjectCategory::Fullstack
                };
                project(TITLES[i], category)
            })
            .collect()
    }

    fn titles(view: &CatalogView<'_>) -> Vec<&'static str> {
        view.visible_projects.iter().map(|p| p.title).collect()
    }

    fn all_filters() -> Vec<CategoryFilter> {
        let mut filters = vec![CategoryFilter::All];
        filters.extend(ProjectCategory::all().into_iter().map(CategoryFilter::Only));
        filters
    }

    #[test]
    fn test_initial_state() {
        let catalog = ProjectCatalog::with_defaults();
        assert_eq!(catalog.state(), CatalogState::default());
        assert_eq!(catalog.page_size(), 3);

        let view = catalog.query();
        assert_eq!(view.active_category, CategoryFilter::All);
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn test_with_defaults_uses_embedded_config() {
        let embedded = load_config(None).unwrap();
        let catalog = ProjectCatalog::with_defaults();
        assert_eq!(catalog.page_size(), embedded.page_size);
    }

    #[test]
    fn test_five_projects_two_pages() {
        let mut catalog = ProjectCatalog::with_defaults();

        let view = catalog.query();
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.total_count, 5);
        assert_eq!(
            titles(&view),
            vec!["QR Code Generator", "E-Commerce App", "Ticket Booking"]
        );

        assert_eq!(catalog.go_to_page(2), 2);
        let view = catalog.query();
        assert_eq!(view.first_index, 3);
        assert_eq!(titles(&view), vec!["Micro Finance App", "Welfare Management"]);
    }

    #[test]
    fn test_filter_by_category() {
        let mut catalog = ProjectCatalog::with_defaults();
        catalog.set_category(ProjectCategory::Fullstack.into());

        let view = catalog.query();
        assert_eq!(view.total_pages, 1);
        assert!(!view.show_pagination());
        assert_eq!(titles(&view), vec!["Micro Finance App", "Welfare Management"]);
    }

    #[test]
    fn test_pages_cover_filtered_set_in_order() {
        let projects = sample(10);
        let config = CatalogConfig::default();

        for filter in all_filters() {
            let mut catalog = ProjectCatalog::new(&projects, &config);
            catalog.set_category(filter);

            let expected: Vec<&str> = projects
                .iter()
                .filter(|p| filter.matches(p))
                .map(|p| p.title)
                .collect();

            let total_pages = catalog.query().total_pages;
            let mut seen = Vec::new();
            for page in 1..=total_pages {
                catalog.go_to_page(page as i64);
                let view = catalog.query();
                assert!(view.visible_projects.len() <= catalog.page_size());
                seen.extend(titles(&view));
            }
            assert_eq!(seen, expected, "filter {}", filter);
        }
    }

    #[test]
    fn test_empty_category_has_one_page() {
        let projects = sample(4);
        let mut catalog = ProjectCatalog::new(&projects, &CatalogConfig::default());
        catalog.set_category(ProjectCategory::Other.into());

        let view = catalog.query();
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
        assert!(view.visible_projects.is_empty());
        assert!(!view.has_previous());
        assert!(!view.has_next());
        assert_eq!(view.page_tokens(), vec![PageToken::Page(1)]);

        assert_eq!(catalog.go_to_page(3), 1);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ProjectCatalog::new(&[], &CatalogConfig::default());
        let view = catalog.query();
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.total_count, 0);
    }

    #[test]
    fn test_set_category_resets_page() {
        let projects = sample(10);
        let mut catalog = ProjectCatalog::new(&projects, &CatalogConfig::default());

        for filter in all_filters() {
            catalog.set_category(CategoryFilter::All);
            catalog.go_to_page(4);
            assert_eq!(catalog.state().current_page, 4);

            catalog.set_category(filter);
            assert_eq!(catalog.state().current_page, 1);
            assert_eq!(catalog.query().current_page, 1);
        }
    }

    #[test]
    fn test_same_category_still_resets_page() {
        let mut catalog = ProjectCatalog::with_defaults();
        catalog.go_to_page(2);
        catalog.set_category(CategoryFilter::All);
        assert_eq!(catalog.state().current_page, 1);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let projects = sample(10);
        let mut catalog = ProjectCatalog::new(&projects, &CatalogConfig::default());
        // 10 проектов по 3 -> 4 страницы
        for (requested, expected) in [
            (i64::MIN, 1),
            (-5, 1),
            (0, 1),
            (1, 1),
            (3, 3),
            (4, 4),
            (5, 4),
            (i64::MAX, 4),
        ] {
            assert_eq!(catalog.go_to_page(requested), expected, "page {}", requested);
            assert_eq!(catalog.state().current_page, expected);
        }
    }

    #[test]
    fn test_next_and_previous_stop_at_bounds() {
        let mut catalog = ProjectCatalog::with_defaults();
        assert_eq!(catalog.previous_page(), 1);
        assert_eq!(catalog.next_page(), 2);
        assert_eq!(catalog.next_page(), 2);

        let view = catalog.query();
        assert!(view.has_previous());
        assert!(!view.has_next());
    }

    #[test]
    fn test_set_category_code() {
        let mut catalog = ProjectCatalog::with_defaults();
        catalog.go_to_page(2);

        assert_eq!(
            catalog.set_category_code("mobile"),
            Err(CatalogError::InvalidCategory("mobile".to_string()))
        );
        assert_eq!(catalog.state().current_page, 2);
        assert_eq!(catalog.state().active_category, CategoryFilter::All);

        catalog.set_category_code("frontend").unwrap();
        assert_eq!(
            catalog.state(),
            CatalogState {
                active_category: CategoryFilter::Only(ProjectCategory::Frontend),
                current_page: 1,
            }
        );
    }

    #[test]
    fn test_query_is_idempotent() {
        let mut catalog = ProjectCatalog::with_defaults();
        catalog.go_to_page(2);
        assert_eq!(catalog.query(), catalog.query());
    }

    #[test]
    fn test_custom_page_size() {
        let projects = sample(10);
        let config = CatalogConfig {
            page_size: 4,
            ..CatalogConfig::default()
        };
        let mut catalog = ProjectCatalog::new(&projects, &config);
        assert_eq!(catalog.query().total_pages, 3);

        catalog.go_to_page(3);
        assert_eq!(titles(&catalog.query()), vec!["p8", "p9"]);
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let projects = sample(2);
        let config = CatalogConfig {
            page_size: 0,
            ..CatalogConfig::default()
        };
        let catalog = ProjectCatalog::new(&projects, &config);
        assert_eq!(catalog.page_size(), 1);
        assert_eq!(catalog.query().total_pages, 2);
    }

    #[test]
    fn test_total_pages_for() {
        assert_eq!(total_pages_for(0, 3), 1);
        assert_eq!(total_pages_for(3, 3), 1);
        assert_eq!(total_pages_for(4, 3), 2);
        assert_eq!(total_pages_for(10, 3), 4);
    }
}
