//! @acp:module "Metadata Loader"
//! @acp:summary "Parse action.yml files into ActionMetadata"
//! @acp:domain cli
//! @acp:layer io

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use super::types::*;
use crate::error::{ActionDocsError, Result};

/// Load and parse an action metadata file
pub fn load_metadata(path: &Path) -> Result<ActionMetadata> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8(bytes)
        .map_err(|err| invalid(path, format!("not valid UTF-8: {}", err.utf8_error())))?;
    parse_metadata_at(&content, path)
}

/// Parse metadata from in-memory YAML text
pub fn parse_metadata(content: &str) -> Result<ActionMetadata> {
    parse_metadata_at(content, Path::new("<memory>"))
}

fn parse_metadata_at(content: &str, path: &Path) -> Result<ActionMetadata> {
    if is_blank_document(content) {
        return Ok(ActionMetadata::default());
    }

    let value: Value = serde_yaml::from_str(content).map_err(|source| ActionDocsError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;

    let root = match value {
        Value::Null => return Ok(ActionMetadata::default()),
        Value::Mapping(map) => map,
        other => return Err(invalid(path, format!("expected a mapping, found {}", kind(&other)))),
    };

    Ok(ActionMetadata {
        name: root.get("name").and_then(scalar_text),
        description: root.get("description").and_then(scalar_text),
        inputs: parse_inputs(root.get("inputs"), path)?,
        outputs: parse_outputs(root.get("outputs"), path)?,
        runs: parse_runs(root.get("runs"), path)?,
    })
}

fn parse_inputs(value: Option<&Value>, path: &Path) -> Result<Vec<InputSpec>> {
    let Some(entries) = section_mapping(value, "inputs", path)? else {
        return Ok(Vec::new());
    };

    let mut inputs = Vec::with_capacity(entries.len());
    for (key, spec) in entries {
        let name = entry_name(key, "inputs", path)?;
        let fields = entry_mapping(spec, "inputs", &name, path)?;

        let mut input = InputSpec::new(name);
        if let Some(fields) = fields {
            input.required = fields.get("required").map(is_truthy).unwrap_or(false);
            input.default = fields
                .get("default")
                .and_then(scalar_text)
                .filter(|d| !d.is_empty());
            input.description = fields
                .get("description")
                .and_then(scalar_text)
                .unwrap_or_default();
        }
        inputs.push(input);
    }

    Ok(inputs)
}

fn parse_outputs(value: Option<&Value>, path: &Path) -> Result<Vec<OutputSpec>> {
    let Some(entries) = section_mapping(value, "outputs", path)? else {
        return Ok(Vec::new());
    };

    let mut outputs = Vec::with_capacity(entries.len());
    for (key, spec) in entries {
        let name = entry_name(key, "outputs", path)?;
        let description = entry_mapping(spec, "outputs", &name, path)?
            .and_then(|fields| fields.get("description"))
            .and_then(scalar_text)
            .unwrap_or_default();
        outputs.push(OutputSpec { name, description });
    }

    Ok(outputs)
}

fn parse_runs(value: Option<&Value>, path: &Path) -> Result<RunsSpec> {
    let Some(runs) = section_mapping(value, "runs", path)? else {
        return Ok(RunsSpec::default());
    };

    let text = |key: &str| {
        runs.get(key)
            .and_then(scalar_text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    Ok(RunsSpec {
        using: text("using"),
        image: text("image"),
    })
}

/// A top-level section that must be a mapping when present
fn section_mapping<'a>(
    value: Option<&'a Value>,
    section: &str,
    path: &Path,
) -> Result<Option<&'a Mapping>> {
    match value.map(untag) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Mapping(map)) => Ok(Some(map)),
        Some(other) => Err(invalid(
            path,
            format!("`{}` must be a mapping, found {}", section, kind(other)),
        )),
    }
}

/// A single input/output entry; null entries carry no fields
fn entry_mapping<'a>(
    value: &'a Value,
    section: &str,
    name: &str,
    path: &Path,
) -> Result<Option<&'a Mapping>> {
    match untag(value) {
        Value::Null => Ok(None),
        Value::Mapping(map) => Ok(Some(map)),
        other => Err(invalid(
            path,
            format!("`{}.{}` must be a mapping, found {}", section, name, kind(other)),
        )),
    }
}

fn entry_name(key: &Value, section: &str, path: &Path) -> Result<String> {
    scalar_text(key).ok_or_else(|| invalid(path, format!("`{}` contains a non-scalar key", section)))
}

/// Plain text of a scalar value; `None` for null and collections
fn scalar_text(value: &Value) -> Option<String> {
    match untag(value) {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match untag(value) {
        Value::Bool(b) => *b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn kind(value: &Value) -> &'static str {
    match untag(value) {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn invalid(path: &Path, reason: String) -> ActionDocsError {
    ActionDocsError::InvalidMetadata {
        path: PathBuf::from(path),
        reason,
    }
}

/// Empty files and files holding only comments or a document marker
fn is_blank_document(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}
