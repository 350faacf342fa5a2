//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в `portfolio.css` (`@keyframes card-appear`).
//! Для stagger-эффекта в сетке проектов задержка растёт с индексом карточки:
//!
//! ```ignore
//! <CardAnimated delay_ms=stagger_delay_ms(0)>   // карточка 1
//! <CardAnimated delay_ms=stagger_delay_ms(1)>   // карточка 2
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Шаг задержки между соседними карточками, мс
pub const STAGGER_STEP_MS: u32 = 100;

/// Задержка появления карточки с порядковым номером `index` на странице
pub fn stagger_delay_ms(index: usize) -> u32 {
    STAGGER_STEP_MS.saturating_mul(index as u32)
}

fn animation_style(delay_ms: u32, style: &str) -> String {
    if style.is_empty() {
        format!("animation: card-appear 0.3s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.3s ease-out {}ms both; {}",
            delay_ms, style
        )
    }
}

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные inline-стили (добавляются после стилей анимации).
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = animation_style(delay_ms, &style);

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
