use crate::error::{JsonError, Result};
use serde_json::{Map, Value, ser::PrettyFormatter};
use std::{fs, io::Write, path::Path};

const INDENT: &[u8] = b"    ";

/// Reads a JSON document whose root must be an object.
pub fn load(filepath: impl AsRef<Path>) -> Result<Map<String, Value>> {
    let path = filepath.as_ref();
    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content)? {
        Value::Object(map) => Ok(map),
        _ => Err(JsonError::NotAnObject {
            path: path.display().to_string(),
        }),
    }
}

/// Pretty prints with a 4-space indent.
pub fn dumps<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    // serde_json only ever emits valid utf-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn dump<T: serde::Serialize>(value: &T, filepath: impl AsRef<Path>) -> Result<()> {
    let content = dumps(value)?;
    fs::write(filepath, content)?;
    Ok(())
}

/// Writes next to the target first and renames over it, so readers never
/// observe a half written document.
pub fn dump_atomic<T: serde::Serialize>(value: &T, filepath: impl AsRef<Path>) -> Result<()> {
    let path = filepath.as_ref();
    let content = dumps(value)?;

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    drop(file);

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}
