use crate::errors::AppResult;
use serde::Serialize;
use std::path::Path;

/// Write records as pretty-printed JSON, using the stored field names.
pub fn write_json<T: Serialize>(path: &Path, records: &[T]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}
