use crate::enums::ProjectCategory;
use serde::Serialize;

/// Картинка-заглушка для карточек без изображения
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=500";

/// Project record shown as a card in the catalog.
///
/// Records are compiled in from `projects.json` and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub category: ProjectCategory,
}

impl Project {
    pub fn image_or_placeholder(&self) -> &'static str {
        if self.image.trim().is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            self.image
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/projects_gen.rs"));
