use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, StageError};

/// Every file below `dir`, relative to it, slash-separated and sorted.
///
/// Useful for staging a whole generated directory rather than a fixed list.
pub fn list_generated_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(dir).to_path_buf();
            StageError::Io {
                path,
                source: err.into(),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(dir) {
            files.push(PathBuf::from(relative.to_string_lossy().replace('\\', "/")));
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_nested_files_sorted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("routes")).unwrap();
        fs::write(dir.path().join("server.js"), "").unwrap();
        fs::write(dir.path().join("routes/users.js"), "").unwrap();
        fs::write(dir.path().join("handler.js"), "").unwrap();

        let files = list_generated_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("handler.js"),
                PathBuf::from("routes/users.js"),
                PathBuf::from("server.js"),
            ]
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(list_generated_files(dir.path().join("absent")).is_err());
    }
}
