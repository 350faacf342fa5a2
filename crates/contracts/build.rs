//! Build script for generating the static project list from projects.json
//!
//! The catalog is authored as JSON next to the aggregate and compiled into a
//! `static PROJECTS: &[Project]` so the frontend never parses it at runtime.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

const PROJECTS_JSON: &str = "src/domain/a001_project/projects.json";
const KNOWN_CATEGORIES: &[&str] = &["frontend", "fullstack", "other"];

fn main() {
    println!("cargo:rerun-if-changed={}", PROJECTS_JSON);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let output_rs = Path::new(&out_dir).join("projects_gen.rs");

    if let Err(e) = generate_projects(Path::new(PROJECTS_JSON), &output_rs) {
        panic!("Failed to generate project list: {}", e);
    }
}

// ============================================================================
// JSON Schema Types (owned Strings for serde deserialization)
// ============================================================================

#[derive(Debug, Deserialize)]
struct ProjectJson {
    title: String,
    description: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    tags: Vec<String>,
    live_url: Option<String>,
    category: String,
}

// ============================================================================
// Code Generation
// ============================================================================

fn generate_projects(
    json_path: &Path,
    output_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_content = fs::read_to_string(json_path)?;
    let projects: Vec<ProjectJson> = serde_json::from_str(&json_content)?;

    for project in &projects {
        if !KNOWN_CATEGORIES.contains(&project.category.as_str()) {
            return Err(format!(
                "project '{}' has unknown category '{}'",
                project.title, project.category
            )
            .into());
        }
    }

    fs::write(output_path, generate_rust_code(&projects))?;
    Ok(())
}

fn generate_rust_code(projects: &[ProjectJson]) -> String {
    let mut code = String::new();

    code.push_str(
        "// ============================================================================\n\
         // AUTO-GENERATED FROM projects.json - DO NOT EDIT MANUALLY\n\
         // ============================================================================\n\n",
    );

    code.push_str("/// Projects shown in the catalog, in display order\n");
    code.push_str("pub static PROJECTS: &[Project] = &[\n");
    for project in projects {
        code.push_str(&generate_project(project));
    }
    code.push_str("];\n");

    code
}

fn generate_project(project: &ProjectJson) -> String {
    let tags = project
        .tags
        .iter()
        .map(|t| format!("{:?}", t))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "    Project {{\n\
         \x20       title: {:?},\n\
         \x20       description: {:?},\n\
         \x20       image: {:?},\n\
         \x20       tags: &[{}],\n\
         \x20       live_url: {},\n\
         \x20       category: ProjectCategory::{},\n\
         \x20   }},\n",
        project.title,
        project.description,
        project.image,
        tags,
        option_str(&project.live_url),
        category_variant(&project.category),
    )
}

fn option_str(value: &Option<String>) -> String {
    match value {
        Some(s) if !s.is_empty() => format!("Some({:?})", s),
        _ => "None".to_string(),
    }
}

fn category_variant(code: &str) -> &'static str {
    match code {
        "frontend" => "Frontend",
        "fullstack" => "Fullstack",
        _ => "Other",
    }
}
