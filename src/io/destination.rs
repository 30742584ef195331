//! Destination collaborator: where artifacts and the manifest are written.
//!
//! The pipeline only needs three capabilities (`list`, `delete`, `write`), so
//! tests can swap the filesystem for an in-memory or failing implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Flat, name-addressed file store.
///
/// Implementations must be shareable across threads; purge and write fan out
/// over a rayon pool.
pub trait Destination: Sync {
    /// Names of every file currently held, sorted.
    fn list(&self) -> io::Result<Vec<String>>;
    fn delete(&self, name: &str) -> io::Result<()>;
    fn write(&self, name: &str, content: &[u8]) -> io::Result<()>;
    /// Human-readable location, for logs and reports.
    fn describe(&self) -> String;
}

/// A directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsDestination {
    dir: PathBuf,
}

impl FsDestination {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Destination for FsDestination {
    fn list(&self) -> io::Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            // A lossy name could not be deleted again, so refuse to list it.
            let name = entry.file_name().into_string().map_err(|raw| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("file name is not valid UTF-8: {}", raw.to_string_lossy()),
                )
            })?;
            names.push(name);
        }
        names.sort();
        Ok(names)
    }

    fn delete(&self, name: &str) -> io::Result<()> {
        fs::remove_file(self.dir.join(name))
    }

    fn write(&self, name: &str, content: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(name), content)
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_lists_empty_and_is_created_on_write() {
        let root = tempfile::tempdir().unwrap();
        let dest = FsDestination::new(root.path().join("out"));
        assert!(dest.list().unwrap().is_empty());

        dest.write("b.json", b"{}").unwrap();
        dest.write("a.json", b"{}").unwrap();
        assert_eq!(dest.list().unwrap(), vec!["a.json".to_string(), "b.json".to_string()]);

        dest.delete("a.json").unwrap();
        assert_eq!(dest.list().unwrap(), vec!["b.json".to_string()]);
    }

    #[test]
    fn subdirectories_are_not_listed() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("nested")).unwrap();
        fs::write(root.path().join("x.json"), "{}").unwrap();
        let dest = FsDestination::new(root.path());
        assert_eq!(dest.list().unwrap(), vec!["x.json".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_fail_the_listing() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join(OsStr::from_bytes(b"bad\xff.json")), "{}").unwrap();
        let dest = FsDestination::new(root.path());

        let err = dest.list().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("bad"));
    }
}
