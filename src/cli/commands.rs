//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! Each command is split into a `render_*` function that builds the output text and a thin wrapper that prints it,
//! so the output can be tested without capturing stdout.

use std::path::Path;

use easel_core::{Category, ConstValue, ConstantEntry, ConstantRegistry, RegistryError};
use serde_json::{Value, json};

use super::{CliError, CliResult, ExitCode};
use crate::reference::{self, ReferenceConfig};

// ============================================================================
// get
// ============================================================================

/// Print the value bound to `name`.
pub fn get_constant(name: &str, json: bool) -> CliResult<ExitCode> {
    println!("{}", render_get(ConstantRegistry::global(), name, json)?);
    Ok(ExitCode::SUCCESS)
}

pub fn render_get(registry: &ConstantRegistry, name: &str, json: bool) -> CliResult<String> {
    let Some(entry) = registry.entry(name) else {
        let mut message = registry_failure(RegistryError::UnknownName { name: name.to_string() });
        let upper = name.to_ascii_uppercase();
        if upper != name && registry.has(&upper) {
            message.push_str(&format!("\nhint: constant names are case-sensitive; did you mean `{upper}`?"));
        }
        return Err(CliError::failure(message));
    };
    let alias_of = registry.alias_target(entry.name);

    if json {
        let mut doc = entry_json(entry);
        doc["alias_of"] = alias_of.map_or(Value::Null, Value::from);
        return to_pretty_json(&doc);
    }

    let mut line = format!(
        "{} = {} ({}, {})",
        entry.name,
        entry.value,
        entry.value.value_type().as_str(),
        entry.category
    );
    if let Some(target) = alias_of {
        line.push_str(&format!(", alias of {target}"));
    }
    Ok(line)
}

// ============================================================================
// list
// ============================================================================

/// List public constants, optionally restricted to one category.
pub fn list_constants(category: Option<&str>, json: bool) -> CliResult<ExitCode> {
    println!("{}", render_list(ConstantRegistry::global(), category, json)?);
    Ok(ExitCode::SUCCESS)
}

pub fn render_list(registry: &ConstantRegistry, category: Option<&str>, json: bool) -> CliResult<String> {
    let entries: Vec<&ConstantEntry> = match category {
        Some(slug) => registry.entries_by_category(parse_category(slug)?),
        None => registry.entries().collect(),
    };

    if json {
        let docs: Vec<Value> = entries.iter().map(|e| entry_json(e)).collect();
        return to_pretty_json(&Value::Array(docs));
    }

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    let lines: Vec<String> = entries
        .iter()
        .map(|e| format!("{:<width$}  {:<20}  {}", e.name, e.value.to_string(), e.category))
        .collect();
    Ok(lines.join("\n").trim_end().to_string())
}

// ============================================================================
// check
// ============================================================================

/// Rebuild the declared table and report the first defect, if any.
pub fn check_registry() -> CliResult<ExitCode> {
    println!("{}", render_check(ConstantRegistry::declared())?);
    Ok(ExitCode::SUCCESS)
}

pub fn render_check(built: Result<ConstantRegistry, RegistryError>) -> CliResult<String> {
    let registry = built.map_err(|err| {
        tracing::error!(error = %err, "constant table failed validation");
        CliError::failure(registry_failure(err))
    })?;
    Ok(format!(
        "ok: {} public constants ({} declared), {} aliases, {} categories",
        registry.len(),
        registry.declared_len(),
        registry.aliases().len(),
        registry.categories().len()
    ))
}

// ============================================================================
// reference
// ============================================================================

/// Write the Markdown constant reference to `out`.
pub fn generate_reference(
    out: &Path,
    categories: &[String],
    include_descriptions: bool,
    include_aliases: bool,
) -> CliResult<ExitCode> {
    let mut config = ReferenceConfig::new()
        .with_descriptions(include_descriptions)
        .with_aliases(include_aliases);
    if !categories.is_empty() {
        let parsed = categories
            .iter()
            .map(|slug| parse_category(slug))
            .collect::<CliResult<Vec<_>>>()?;
        config = config.with_categories(parsed);
    }

    reference::write_reference(ConstantRegistry::global(), out, &config)
        .map_err(|err| CliError::failure(format!("{:?}", miette::Report::new(err))))?;
    println!("Wrote {}", out.display());
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_category(slug: &str) -> CliResult<Category> {
    Category::from_slug(slug).ok_or_else(|| {
        let mut message = registry_failure(RegistryError::UnknownCategory { slug: slug.to_string() });
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        message.push_str(&format!("\nknown categories: {}", known.join(", ")));
        CliError::failure(message)
    })
}

/// Render a registry error as a miette report.
fn registry_failure(err: RegistryError) -> String {
    format!("{:?}", miette::Report::new(err))
}

fn entry_json(entry: &ConstantEntry) -> Value {
    json!({
        "name": entry.name,
        "value": value_json(entry.value),
        "type": entry.value.value_type().as_str(),
        "category": entry.category.as_str(),
        "description": entry.description,
    })
}

fn value_json(value: ConstValue) -> Value {
    match value {
        ConstValue::Str(s) => Value::from(s),
        ConstValue::Int(n) => Value::from(n),
        ConstValue::Float(x) => Value::from(x),
    }
}

fn to_pretty_json(value: &Value) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|err| CliError::failure(format!("failed to encode JSON: {err}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn registry() -> &'static ConstantRegistry {
        ConstantRegistry::global()
    }

    #[test]
    fn test_get_text() {
        assert_eq!(
            render_get(registry(), "RADIANS", false).unwrap(),
            "RADIANS = 'radians' (string, trigonometry)"
        );
        assert_eq!(render_get(registry(), "POINTS", false).unwrap(), "POINTS = 0 (integer, shape)");
    }

    #[test]
    fn test_get_reports_alias_target() {
        assert_eq!(
            render_get(registry(), "RETURN", false).unwrap(),
            "RETURN = 13 (integer, input), alias of ENTER"
        );
    }

    #[test]
    fn test_get_json() {
        let doc: Value = serde_json::from_str(&render_get(registry(), "TWO_PI", true).unwrap()).unwrap();
        assert_eq!(doc["name"], "TWO_PI");
        assert_eq!(doc["value"], std::f64::consts::TAU);
        assert_eq!(doc["type"], "float");
        assert_eq!(doc["alias_of"], "TAU");

        let doc: Value = serde_json::from_str(&render_get(registry(), "TAU", true).unwrap()).unwrap();
        assert!(doc["alias_of"].is_null());
    }

    #[test]
    fn test_get_unknown_name_fails() {
        let err = render_get(registry(), "NOT_A_CONSTANT", false).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("NOT_A_CONSTANT"));
    }

    #[test]
    fn test_get_suggests_uppercase_name() {
        let err = render_get(registry(), "radians", false).unwrap_err();
        assert!(err.message.contains("did you mean `RADIANS`?"));
    }

    #[test]
    fn test_get_hides_internal_entries() {
        assert!(render_get(registry(), "_DEFAULT_FILL", false).is_err());
    }

    #[test]
    fn test_list_category() {
        let out = render_list(registry(), Some("renderer"), false).unwrap();
        let names: Vec<&str> = out.lines().filter_map(|l| l.split_whitespace().next()).collect();
        assert_eq!(names, ["P2D", "WEBGL"]);
    }

    #[test]
    fn test_list_json_covers_every_public_entry() {
        let doc: Value = serde_json::from_str(&render_list(registry(), None, true).unwrap()).unwrap();
        assert_eq!(doc.as_array().unwrap().len(), registry().len());
    }

    #[test]
    fn test_list_unknown_category_fails() {
        let err = render_list(registry(), Some("colour"), false).unwrap_err();
        assert!(err.message.contains("colour"));
        assert!(err.message.contains("known categories"));
    }

    #[test]
    fn test_check_declared_table() {
        let out = render_check(ConstantRegistry::declared()).unwrap();
        assert!(out.starts_with("ok: "));
        assert!(out.contains("3 aliases"));
    }

    #[test]
    fn test_check_reports_defect() {
        let err = render_check(Err(RegistryError::DuplicateName { name: "PI" })).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("duplicate constant name `PI`"));
    }
}
