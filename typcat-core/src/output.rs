//! Streaming output helpers (made by FontLab https://www.fontlab.com/)

use std::io::Write;

use anyhow::Result;

use crate::catalog::FontCatalogEntry;

/// Write entries as a prettified JSON array.
pub fn write_json_pretty(entries: &[FontCatalogEntry], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    w.write_all(json.as_bytes())?;
    Ok(())
}

/// Write entries as newline-delimited JSON (NDJSON).
pub fn write_ndjson(entries: &[FontCatalogEntry], mut w: impl Write) -> Result<()> {
    for entry in entries {
        let line = serde_json::to_string(entry)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}
