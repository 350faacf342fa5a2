pub mod aggregate;
pub mod catalog;

pub use aggregate::{Project, PROJECTS};
pub use catalog::{CatalogState, CatalogView, ProjectCatalog};
