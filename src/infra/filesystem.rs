//! Filesystem operations
//!
//! Reading and overwriting the netplan file.

use std::fs::{self, OpenOptions, Permissions};
use std::io::Write;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::Path;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Overwrite a file with `content` and set its permission bits to `mode`
///
/// The mode is reapplied after writing since `OpenOptions::mode` only takes
/// effect when the file is created.
pub fn write_file(path: &Path, content: &str, mode: u32) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }

    let write_err = |e: std::io::Error| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(path)
        .map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;
    fs::set_permissions(path, Permissions::from_mode(mode)).map_err(write_err)
}

/// Read content from a file
///
/// Invalid UTF-8 is replaced rather than rejected, so hand-edited files can
/// still be displayed.
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    let bytes = fs::read(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parents_and_sets_mode() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("netplan").join("01-netcfg.yaml");

        write_file(&path, "network: {}\n", 0o600).unwrap();

        assert_eq!(read_file(&path).unwrap(), "network: {}\n");
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_write_overwrites_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("01-netcfg.yaml");
        fs::write(&path, "a much longer previous body\n").unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o644)).unwrap();

        write_file(&path, "short\n", 0o600).unwrap();

        assert_eq!(read_file(&path).unwrap(), "short\n");
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_read_replaces_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("01-netcfg.yaml");
        fs::write(&path, [b'a', 0xff, b'b']).unwrap();

        assert_eq!(read_file(&path).unwrap(), "a\u{fffd}b");
    }

    #[test]
    fn test_read_missing_file_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_file(&temp_dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(FilesystemError::ReadFile { .. })));
    }
}
