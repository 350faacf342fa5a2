use crate::domain::a001_project::Project;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Категории проектов в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Frontend,
    Fullstack,
    Other,
}

impl ProjectCategory {
    /// Получить код категории
    pub fn code(&self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "frontend",
            ProjectCategory::Fullstack => "fullstack",
            ProjectCategory::Other => "other",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::Fullstack => "Full Stack",
            ProjectCategory::Other => "Other",
        }
    }

    /// Получить все категории
    pub fn all() -> Vec<ProjectCategory> {
        vec![
            ProjectCategory::Frontend,
            ProjectCategory::Fullstack,
            ProjectCategory::Other,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "frontend" => Some(ProjectCategory::Frontend),
            "fullstack" => Some(ProjectCategory::Fullstack),
            "other" => Some(ProjectCategory::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Фильтр вкладок каталога: `all` либо одна конкретная категория
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    pub const ALL_CODE: &'static str = "all";

    pub fn code(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_CODE,
            CategoryFilter::Only(category) => category.code(),
        }
    }

    /// Подпись вкладки
    pub fn tab_label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Only(category) => category.display_name(),
        }
    }

    /// Parses a tab value. Anything outside the fixed set is an
    /// [`CatalogError::InvalidCategory`].
    pub fn from_code(code: &str) -> Result<Self, CatalogError> {
        if code == Self::ALL_CODE {
            return Ok(CategoryFilter::All);
        }
        ProjectCategory::from_code(code)
            .map(CategoryFilter::Only)
            .ok_or_else(|| CatalogError::InvalidCategory(code.to_string()))
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
        }
    }
}

impl From<ProjectCategory> for CategoryFilter {
    fn from(category: ProjectCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CategoryFilter::from_code(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.code().to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
