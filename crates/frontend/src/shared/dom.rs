//! Мелкие DOM-утилиты (прокрутка к якорю секции)

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smoothly scrolls the element with `anchor_id` into view.
///
/// Missing window or element is logged and ignored.
pub fn scroll_to_anchor(anchor_id: &str) {
    let id = anchor_id.trim_start_matches('#');
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("scroll_to_anchor: element '#{}' not found", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

