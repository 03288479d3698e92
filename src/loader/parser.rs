use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Parses a JSON file into a given type `T`.
///
/// A file that does not exist yet is read as `T::default()`, so a fresh store
/// starts out empty.
///
/// Errors are automatically converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file exists but cannot be read.
/// - `Error::DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned + Default>(file_path: &Path) -> Result<T> {
    let data = match fs::read_to_string(file_path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("Store file '{}' does not exist yet, starting empty.", file_path.display());
            return Ok(T::default());
        }
        Err(e) => return Err(Error::IoError(e)),
    };

    let parsed_data: T = serde_json::from_str(&data).map_err(Error::DeserializationError)?;

    Ok(parsed_data)
}

/// Renders `value` as JSON indented with four spaces.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    buffer.push(b'\n');

    Ok(buffer)
}

/// Writes `value` to `file_path` as pretty JSON.
///
/// The document goes to a sibling `.tmp` file first and is then renamed over the
/// target, so readers only ever see the old or the new document.
pub fn write_json_file<T: Serialize>(file_path: &Path, value: &T) -> Result<()> {
    let bytes = to_pretty_json(value)?;

    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = file_path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    fs::write(tmp_path, bytes)?;
    if let Err(e) = fs::rename(tmp_path, file_path) {
        let _ = fs::remove_file(tmp_path);
        return Err(Error::IoError(e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let bytes = to_pretty_json(&vec![1, 2]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "[\n    1,\n    2\n]\n");
    }

    #[test]
    fn missing_file_reads_as_default() {
        let path = std::env::temp_dir().join("hotel_records_parser_does_not_exist.json");
        let parsed: Vec<u32> = parse_json_file(&path).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn failed_rename_removes_the_tmp_file() {
        let target = std::env::temp_dir().join(format!("hotel_records_parser_dir_{}", std::process::id()));
        fs::create_dir_all(target.join("occupied")).unwrap();

        let result = write_json_file(&target, &vec![1, 2]);
        let mut tmp_name = target.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_left = Path::new(&tmp_name).exists();
        fs::remove_dir_all(&target).unwrap();

        assert!(matches!(result, Err(Error::IoError(_))));
        assert!(!tmp_left);
    }
}
