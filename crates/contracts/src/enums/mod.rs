pub mod project_category;

pub use project_category::{CategoryFilter, ProjectCategory};
