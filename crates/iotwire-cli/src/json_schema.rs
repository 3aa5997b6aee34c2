//! JSON Schema generation from model schemas.

use anyhow::{Context, Result};
use iotwire_json::{FieldKind, ModelSchema};
use iotwire_model::Catalog;
use serde_json::{Value, json};
use std::io::Write;

/// Write the JSON Schema for one model (and what it refers to) or for the whole catalog.
pub fn run(catalog: &Catalog, model: Option<&str>, out: &mut impl Write) -> Result<()> {
    let schemas = collect_schemas(catalog, model)?;
    let document = generate_json_schema(&schemas);

    serde_json::to_writer_pretty(&mut *out, &document).context("failed to write schema")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Pick the schemas to emit: every model, or one model followed by its dependencies.
fn collect_schemas(catalog: &Catalog, model: Option<&str>) -> Result<Vec<&'static ModelSchema>> {
    let Some(name) = model else {
        return Ok(catalog.iter().map(|entry| entry.schema()).collect());
    };

    let root = catalog
        .get(name)
        .context("run `iotwire models` to list known models")?
        .schema();

    let mut out = vec![root];
    let mut next = 0;
    while next < out.len() {
        for dependency in out[next].dependencies() {
            if !out.iter().any(|s| s.name == dependency) {
                out.push(catalog.get(dependency)?.schema());
            }
        }
        next += 1;
    }
    Ok(out)
}

/// Generate JSON Schema from model schemas.
pub fn generate_json_schema(schemas: &[&ModelSchema]) -> Value {
    let mut definitions = serde_json::Map::new();

    for schema in schemas {
        definitions.insert(schema.name.to_string(), generate_model_schema(schema));
    }

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "definitions": definitions,
    })
}

/// Generate JSON Schema for a single model.
///
/// Every field is optional, so no `required` list is emitted.
fn generate_model_schema(schema: &ModelSchema) -> Value {
    let mut properties = serde_json::Map::new();

    for field in &schema.fields {
        properties.insert(field.wire_name.to_string(), generate_field_schema(&field.kind));
    }

    json!({
        "type": "object",
        "properties": properties,
    })
}

/// Generate JSON Schema for a field kind.
fn generate_field_schema(kind: &FieldKind) -> Value {
    match kind {
        FieldKind::String => json!({"type": "string"}),
        FieldKind::Boolean => json!({"type": "boolean"}),
        FieldKind::Integer => json!({"type": "integer", "format": "int32"}),
        FieldKind::Long => json!({"type": "integer", "format": "int64"}),
        FieldKind::Double => json!({"type": "number"}),
        FieldKind::Timestamp => json!({
            "type": "number",
            "description": "seconds since the Unix epoch",
        }),
        FieldKind::Object(schema) => json!({
            "$ref": format!("#/definitions/{}", schema().name)
        }),
        FieldKind::List(inner) => json!({
            "type": "array",
            "items": generate_field_schema(inner),
        }),
        FieldKind::Map(inner) => json!({
            "type": "object",
            "additionalProperties": generate_field_schema(inner),
        }),
    }
}
