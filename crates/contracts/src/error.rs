use thiserror::Error;

/// Ошибки каталога проектов
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Код категории не входит в фиксированный набор (ошибка интеграции UI)
    #[error("invalid project category: '{0}'")]
    InvalidCategory(String),

    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(usize),

    #[error("catalog anchor id must not be empty")]
    InvalidAnchor,
}
