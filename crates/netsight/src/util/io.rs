//! I/O utility functions

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Temporary sibling used while writing `path`, e.g. `report.yaml.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write content to a file atomically using write-then-rename.
///
/// Missing parent directories are created. A reader never observes a
/// half-written report.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp = temp_path(path);
    fs::write(&temp, content)?;
    fs::rename(&temp, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("report.yaml");

        atomic_write(&path, "metrics: {}\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "metrics: {}\n");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        atomic_write(&path, "first").unwrap();
        atomic_write(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_temp_path_keeps_extension() {
        assert_eq!(
            temp_path(Path::new("/tmp/out/report.yaml")),
            PathBuf::from("/tmp/out/report.yaml.tmp")
        );
    }
}
