//! Re-marshalling wire documents through a model's codec

use anyhow::{Context, Result};
use iotwire_json::JsonCodec;
use iotwire_model::Catalog;
use std::io::{Read, Write};

/// Read a document as `model` and write it back out
///
/// Returns `false`, writing nothing, when the input is not a JSON object.
pub fn run(
    catalog: &Catalog,
    codec: &JsonCodec,
    model: &str,
    input: &mut impl Read,
    out: &mut impl Write,
) -> Result<bool> {
    let entry = catalog
        .get(model)
        .context("run `iotwire models` to list known models")?;

    let mut data = Vec::new();
    input
        .read_to_end(&mut data)
        .context("failed to read input document")?;
    tracing::debug!(model, bytes = data.len(), "normalizing document");

    let Some(normalized) = entry
        .normalize(codec, &data)
        .with_context(|| format!("failed to normalize {model} document"))?
    else {
        return Ok(false);
    };

    out.write_all(&normalized)?;
    writeln!(out)?;
    out.flush()?;
    Ok(true)
}
