use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::error::StoreError;
use super::store::KeyValueStore;

/// A [`KeyValueStore`] keeping one `.json` file per key in a directory.
///
/// The directory is created on first access, so an unusable location shows
/// up as a failed read or write rather than a failure to construct the store.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: path.into(),
        }
    }

    /// Returns the directory holding the stored values.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the file path for a given key.
    ///
    /// Path separators in the key are replaced with `_` so a key can never
    /// name a file outside the base directory.
    fn value_path(&self, key: &str) -> PathBuf {
        let safe_key = key.replace(['/', '\\'], "_");
        self.base_path.join(format!("{safe_key}.json"))
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    /// Writes a value through a temporary file renamed over the old one.
    ///
    /// If `write` fails the temporary file is discarded and the previous
    /// value is untouched.
    fn replace_value(
        &self,
        key: &str,
        write: impl FnOnce(&mut File) -> io::Result<()>,
    ) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let mut tmp = NamedTempFile::new_in(&self.base_path)?;
        write(tmp.as_file_mut())?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.value_path(key)).map_err(|e| e.error)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.ensure_dir()?;
        match fs::read(self.value_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.replace_value(key, |file| file.write_all(value))
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.value_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn make_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store"));
        (dir, store)
    }

    fn file_count(path: &Path) -> usize {
        fs::read_dir(path).unwrap().count()
    }

    #[test]
    fn first_access_creates_directory() {
        let (_dir, store) = make_store();
        assert!(!store.base_path().exists());
        store.get("draft").unwrap();
        assert!(store.base_path().is_dir());
    }

    #[test]
    fn get_missing_key_is_none() {
        let (_dir, store) = make_store();
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn set_then_get_returns_value() {
        let (_dir, mut store) = make_store();
        store.set("draft", br#"["a"]"#).unwrap();
        assert_eq!(store.get("draft").unwrap().as_deref(), Some(&br#"["a"]"#[..]));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let (_dir, mut store) = make_store();
        store.set("draft", b"a much longer first value").unwrap();
        store.set("draft", b"short").unwrap();
        assert_eq!(store.get("draft").unwrap().as_deref(), Some(&b"short"[..]));
        assert_eq!(file_count(store.base_path()), 1);
    }

    #[test]
    fn failed_overwrite_keeps_previous_value() {
        let (_dir, mut store) = make_store();
        store.set("draft", br#"["good draft",""]"#).unwrap();

        let result = store.replace_value("draft", |file| {
            file.write_all(br#"["good draft","yyyy"#)?;
            Err(io::Error::other("file too large"))
        });

        assert!(matches!(result, Err(StoreError::Io(_))));
        assert_eq!(
            store.get("draft").unwrap().as_deref(),
            Some(&br#"["good draft",""]"#[..])
        );
        assert_eq!(file_count(store.base_path()), 1, "temporary file left behind");
    }

    #[test]
    fn delete_removes_value() {
        let (_dir, mut store) = make_store();
        store.set("draft", b"x").unwrap();
        store.delete("draft").unwrap();
        assert_eq!(store.get("draft").unwrap(), None);
    }

    #[test]
    fn delete_missing_key_succeeds() {
        let (_dir, mut store) = make_store();
        store.delete("never-set").unwrap();
    }

    #[test]
    fn keys_with_separators_stay_inside_base() {
        let (dir, mut store) = make_store();
        store.set("../escape", b"x").unwrap();
        assert!(!dir.path().join("escape.json").exists());
        assert!(store.base_path().join(".._escape.json").exists());
        assert_eq!(store.get("../escape").unwrap().as_deref(), Some(&b"x"[..]));
    }

    #[test]
    fn values_survive_a_new_store_instance() {
        let (dir, mut store) = make_store();
        store.set("draft", b"persisted").unwrap();
        let reopened = FileStore::new(dir.path().join("store"));
        assert_eq!(
            reopened.get("draft").unwrap().as_deref(),
            Some(&b"persisted"[..])
        );
    }

    #[test]
    fn non_utf8_value_is_returned_as_stored() {
        let (_dir, mut store) = make_store();
        store.set("draft", &[0xff, 0xfe, b'[']).unwrap();
        assert_eq!(
            store.get("draft").unwrap().as_deref(),
            Some(&[0xff, 0xfe, b'['][..])
        );
    }

    #[test]
    fn unreadable_value_is_an_error() {
        let (_dir, store) = make_store();
        // A directory where the value file should be cannot be read.
        fs::create_dir_all(store.base_path().join("draft.json")).unwrap();
        assert!(matches!(store.get("draft"), Err(StoreError::Io(_))));
    }

    #[test]
    fn uncreatable_directory_fails_reads_and_writes() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let mut store = FileStore::new(blocker.join("store"));

        assert!(matches!(store.get("draft"), Err(StoreError::Io(_))));
        assert!(matches!(store.set("draft", b"x"), Err(StoreError::Io(_))));
    }
}
