pub mod card_animated;
pub mod pagination_controls;
pub mod section_header;
