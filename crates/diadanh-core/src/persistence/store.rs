// crates/diadanh-core/src/persistence/store.rs
use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// In-process store; contents vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One file per key (`<dir>/<key>.json`).
///
/// The directory is created on first write. Read errors are reported as a
/// missing value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Some(s),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("cannot read '{key}' from {}: {e}", self.dir.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut s = MemoryStore::new();
        assert_eq!(s.get("k"), None);
        s.set("k", "v").unwrap();
        assert_eq!(s.get("k").as_deref(), Some("v"));
        s.remove("k").unwrap();
        assert_eq!(s.get("k"), None);
    }

    #[test]
    fn file_store_creates_dir_and_persists() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("state");
        let mut s = FileStore::new(&dir);
        assert_eq!(s.get("diadanh_history"), None);

        s.set("diadanh_history", "[\"ha noi\"]").unwrap();
        assert!(dir.join("diadanh_history.json").exists());

        let reopened = FileStore::new(&dir);
        assert_eq!(reopened.get("diadanh_history").as_deref(), Some("[\"ha noi\"]"));

        s.remove("diadanh_history").unwrap();
        s.remove("diadanh_history").unwrap();
        assert_eq!(s.get("diadanh_history"), None);
    }

    #[test]
    fn file_names_are_sanitized() {
        let s = FileStore::new("/tmp/x");
        assert_eq!(s.path_for("a/b c"), PathBuf::from("/tmp/x/a_b_c.json"));
    }
}
