use crate::error::{Result, ZooError};
use crate::models::YearRecord;
use crate::validate::validate;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Relative path the raw snapshot is written to by default.
pub const DEFAULT_DATA_PATH: &str = "data/raw/data.json";

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ZooError + '_ {
    move |source| ZooError::Persistence {
        path: path.to_path_buf(),
        source,
    }
}

/// Save the raw payload as JSON indented by four spaces, keys in received
/// order and non-ASCII kept verbatim, creating missing parent directories.
pub fn save_json<P: AsRef<Path>>(payload: &Value, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }
    let mut buf = Vec::new();
    let fmt = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    payload.serialize(&mut ser).map_err(ZooError::Decode)?;
    let mut f = File::create(path).map_err(io_err(path))?;
    f.write_all(&buf).map_err(io_err(path))?;
    log::info!("saved {} bytes to {}", buf.len(), path.display());
    Ok(())
}

/// Read a snapshot back as raw JSON.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let txt = fs::read_to_string(path).map_err(io_err(path))?;
    serde_json::from_str(&txt).map_err(ZooError::MalformedResponse)
}

/// Read, validate and decode a snapshot.
pub fn load_year<P: AsRef<Path>>(path: P) -> Result<YearRecord> {
    let payload = load_json(path)?;
    validate(&payload)?;
    YearRecord::from_value(&payload)
}
