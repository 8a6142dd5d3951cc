//! Generate the Markdown constant reference from the registry.
//!
//! The page lists every public constant grouped by category, followed by the declared aliases.
//!
//! ## Notes
//! - The generated file is meant to be checked into the repo and treated as a derived artifact.
//! - Do not edit the generated Markdown by hand; update the constant table instead.
//! - Output is deterministic: categories and entries follow table order.

mod config;
mod markdown;

pub use config::ReferenceConfig;

use std::fs;
use std::path::{Path, PathBuf};

use easel_core::{Category, ConstantRegistry};
use miette::Diagnostic;
use thiserror::Error;

use crate::version::EASEL_VERSION;
use markdown::{code, escape_cell, push_row, push_table_header, start_section};

/// Where `easel reference` writes by default, relative to the working directory.
pub const DEFAULT_REFERENCE_PATH: &str = "docs/reference/constants.md";

#[derive(Debug, Error, Diagnostic)]
pub enum ReferenceError {
    #[error("failed to write reference to {}", path.display())]
    #[diagnostic(code(easel::reference::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render the full reference page.
#[tracing::instrument(skip_all, fields(title = %config.title))]
pub fn render_reference(registry: &ConstantRegistry, config: &ReferenceConfig) -> String {
    let categories = selected_categories(registry, config);

    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", config.title));
    if config.generated_banner {
        out.push_str("!!! warning \"Generated file\"\n");
        out.push_str("    Do not edit this page by hand.\n");
        out.push_str(&format!("    Generated by easel {EASEL_VERSION}.\n"));
        out.push('\n');
        out.push_str("    Regenerate with: `easel reference`\n\n");
    }

    out.push_str("## Contents\n\n");
    for category in &categories {
        out.push_str(&format!("- [{category}](#{category})\n"));
    }
    if config.include_aliases {
        out.push_str("- [aliases](#aliases)\n");
    }
    out.push('\n');

    for &category in &categories {
        render_category_section(&mut out, registry, category, config);
    }
    if config.include_aliases {
        render_aliases_section(&mut out, registry);
    }

    out.truncate(out.trim_end_matches('\n').len());
    out.push('\n');
    tracing::debug!(categories = categories.len(), bytes = out.len(), "rendered constant reference");
    out
}

/// Render `## <category>` and its constant table.
pub fn render_category_section(
    out: &mut String,
    registry: &ConstantRegistry,
    category: Category,
    config: &ReferenceConfig,
) {
    start_section(out, &format!("## {category}"));

    if config.include_descriptions {
        push_table_header(out, &["Name", "Value", "Type", "Description"]);
    } else {
        push_table_header(out, &["Name", "Value", "Type"]);
    }

    for entry in registry.entries_by_category(category) {
        let mut cells = vec![
            code(entry.name),
            code(&entry.value.to_string()),
            entry.value.value_type().as_str().to_string(),
        ];
        if config.include_descriptions {
            cells.push(escape_cell(entry.description));
        }
        push_row(out, cells);
    }
    out.push('\n');
}

/// Render `## aliases` with one row per declaration.
pub fn render_aliases_section(out: &mut String, registry: &ConstantRegistry) {
    start_section(out, "## aliases");
    push_table_header(out, &["Alias", "Target", "Note"]);
    for decl in registry.aliases() {
        push_row(out, [code(decl.alias), code(decl.target), escape_cell(decl.note)]);
    }
    out.push('\n');
}

/// Render the reference and write it to `path`, creating parent directories as needed.
///
/// ## Errors
/// - [`ReferenceError::Io`] if the directory or file cannot be written.
pub fn write_reference(
    registry: &ConstantRegistry,
    path: &Path,
    config: &ReferenceConfig,
) -> Result<(), ReferenceError> {
    let io_err = |source| ReferenceError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, render_reference(registry, config)).map_err(io_err)?;
    tracing::info!(path = %path.display(), "wrote constant reference");
    Ok(())
}

fn selected_categories(registry: &ConstantRegistry, config: &ReferenceConfig) -> Vec<Category> {
    match &config.categories {
        Some(chosen) => chosen.clone(),
        None => registry.categories(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> &'static ConstantRegistry {
        ConstantRegistry::global()
    }

    #[test]
    fn test_page_lists_every_public_constant() {
        let page = render_reference(registry(), &ReferenceConfig::default());
        for entry in registry().entries() {
            assert!(page.contains(&format!("| `{}` |", entry.name)), "missing {}", entry.name);
        }
    }

    #[test]
    fn test_page_hides_internal_entries() {
        let page = render_reference(registry(), &ReferenceConfig::default());
        assert!(!page.contains("_DEFAULT_FILL"));
        assert!(!page.contains("_CTX_MIDDLE"));
    }

    #[test]
    fn test_page_ends_with_single_newline() {
        let page = render_reference(registry(), &ReferenceConfig::default());
        assert!(page.ends_with('\n'));
        assert!(!page.ends_with("\n\n"));
    }

    #[test]
    fn test_categories_follow_table_order() {
        let page = render_reference(registry(), &ReferenceConfig::default());
        let renderer = page.find("## renderer").unwrap();
        let color = page.find("## color").unwrap();
        let debug = page.find("## debug").unwrap();
        assert!(renderer < color && color < debug);
    }

    #[test]
    fn test_category_filter_and_no_aliases() {
        let config = ReferenceConfig::new()
            .with_categories([Category::Input])
            .with_aliases(false);
        let page = render_reference(registry(), &config);
        assert!(page.contains("## input"));
        assert!(!page.contains("## color"));
        assert!(!page.contains("## aliases"));
        assert!(page.contains("| `RETURN` | `13` | integer |"));
    }

    #[test]
    fn test_no_descriptions_drops_column() {
        let config = ReferenceConfig::new().with_descriptions(false);
        let mut out = String::new();
        render_category_section(&mut out, registry(), Category::Renderer, &config);
        assert!(out.contains("| Name | Value | Type |\n"));
        assert!(out.contains("| `P2D` | `'p2d'` | string |\n"));
    }

    #[test]
    fn test_banner_is_optional() {
        let with = render_reference(registry(), &ReferenceConfig::default());
        let without = render_reference(registry(), &ReferenceConfig::new().with_generated_banner(false));
        assert!(with.contains("Generated file"));
        assert!(!without.contains("Generated file"));
    }
}
