//! Shared helpers for driver implementations

use std::path::Path;

use cube_domain::error::{Error, Result};

use crate::constants::FILE_URI_SCHEME;

/// Build a `file://` URI for an absolute local path
///
/// Characters outside the unreserved set (and `/`) are percent-encoded.
pub fn file_uri(path: &Path) -> Result<String> {
    if !path.is_absolute() {
        return Err(Error::invalid_argument(format!(
            "Storage path must be absolute: {}",
            path.display()
        )));
    }
    let Some(raw) = path.to_str() else {
        return Err(Error::invalid_argument(format!(
            "Storage path is not valid UTF-8: {}",
            path.display()
        )));
    };

    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.replace('\\', "/").bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' | b':' => {
                encoded.push(char::from(byte));
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    if !encoded.starts_with('/') {
        encoded.insert(0, '/');
    }
    Ok(format!("{FILE_URI_SCHEME}://{encoded}"))
}
