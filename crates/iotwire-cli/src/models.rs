//! Listing and describing modeled types

use anyhow::{Context, Result};
use iotwire_model::Catalog;
use std::io::Write;

/// Print every model name with its field count
pub fn list(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    for entry in catalog.iter() {
        let fields = entry.schema().fields.len();
        writeln!(out, "{:<40} {fields:>2} field{}", entry.name(), plural(fields))?;
    }
    out.flush()?;
    Ok(())
}

/// Print the fields of one model: Rust name, wire name and kind
pub fn describe(catalog: &Catalog, name: &str, out: &mut impl Write) -> Result<()> {
    let entry = catalog
        .get(name)
        .context("run `iotwire models` to list known models")?;
    let schema = entry.schema();

    writeln!(out, "{}", schema.name)?;
    if schema.fields.is_empty() {
        writeln!(out, "  (no fields)")?;
    }
    for field in &schema.fields {
        writeln!(
            out,
            "  {:<32} {:<32} {}",
            field.name,
            field.wire_name,
            field.kind.type_name()
        )?;
    }

    let dependencies = schema.dependencies();
    if !dependencies.is_empty() {
        writeln!(out, "  refers to: {}", dependencies.join(", "))?;
    }

    out.flush()?;
    Ok(())
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
