//! Построение индикатора страниц: `1 … 4 5 6 … 42`.
//!
//! Первая и последняя страницы закреплены, вокруг текущей показываются
//! соседние, пропуски заменяются одним многоточием.

use serde::Serialize;

/// Один элемент индикатора страниц
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageToken {
    /// Номер страницы (с 1)
    Page(usize),
    Ellipsis,
}

impl PageToken {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(page) => Some(*page),
            PageToken::Ellipsis => None,
        }
    }

    pub fn is_active(&self, current_page: usize) -> bool {
        self.page() == Some(current_page)
    }
}

/// Builds the page-indicator tokens for `current_page` out of `total_pages`.
///
/// Page 1 always comes first, the last page always comes last when there is
/// more than one page, and the neighbours of the current page sit between
/// them. An ellipsis is emitted after page 1 when `current_page > 3` and
/// before the last page when `current_page < total_pages - 2`.
///
/// `total_pages` below 1 is treated as 1.
pub fn build_page_tokens(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    let total_pages = total_pages.max(1);
    let mut tokens = vec![PageToken::Page(1)];

    if current_page > 3 {
        tokens.push(PageToken::Ellipsis);
    }

    let start = current_page.saturating_sub(1).max(2);
    let end = (total_pages - 1).min(current_page.saturating_add(1));
    for page in start..=end {
        if page == 1 || page == total_pages {
            continue;
        }
        tokens.push(PageToken::Page(page));
    }

    // current_page < total_pages - 2, без вычитания в usize
    if current_page.saturating_add(2) < total_pages {
        tokens.push(PageToken::Ellipsis);
    }

    if total_pages > 1 {
        tokens.push(PageToken::Page(total_pages));
    }

    tokens
}
