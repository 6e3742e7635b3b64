//! # Upload Store
//!
//! Owns the uploads directory. Filenames are made collision-resistant at
//! write time by prefixing the original name with the upload timestamp and a
//! random component, so a stored name never needs renaming later: the
//! exporter reuses it verbatim inside the bundle's `media/` folder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(UploadStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Unique storage name for an uploaded file:
    /// `<millis>-<random>-<original>`.
    pub fn unique_name(&self, original: &str) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let random = Uuid::new_v4().simple().to_string();
        format!("{millis}-{}-{original}", &random[..9])
    }

    /// Absolute path for a stored filename. Rejects names that would escape
    /// the uploads directory.
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return None;
        }
        Some(self.dir.join(filename))
    }

    pub fn exists(&self, filename: &str) -> bool {
        self.resolve(filename).is_some_and(|p| p.exists())
    }

    /// Reads a stored upload fully into memory. Large files simply take
    /// proportionally longer; the content is never truncated.
    pub fn read(&self, filename: &str) -> std::io::Result<Vec<u8>> {
        let path = self.resolve(filename).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid upload filename")
        })?;
        fs::read(path)
    }

    pub fn write(&self, filename: &str, bytes: &[u8]) -> std::io::Result<()> {
        let path = self.resolve(filename).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid upload filename")
        })?;
        fs::write(path, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_names_differ_and_keep_original() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UploadStore::new(dir.path()).expect("store");

        let a = store.unique_name("photo.png");
        let b = store.unique_name("photo.png");
        assert_ne!(a, b);
        assert!(a.ends_with("-photo.png"));
    }

    #[test]
    fn resolve_rejects_path_escapes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UploadStore::new(dir.path()).expect("store");

        assert!(store.resolve("../etc/passwd").is_none());
        assert!(store.resolve("a/b.png").is_none());
        assert!(store.resolve("").is_none());
        assert!(store.resolve("ok.png").is_some());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UploadStore::new(dir.path()).expect("store");

        store.write("abc.png", b"png-bytes").expect("write");
        assert!(store.exists("abc.png"));
        assert_eq!(store.read("abc.png").expect("read"), b"png-bytes");
    }
}
