//! File-backed store backend
//!
//! The whole collection lives in one JSON document. Every operation
//! reads and rewrites the file; the smoke test touches a handful of rows
//! so simplicity wins over efficiency here.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::{Reservation, Store};
use crate::common::{Error, Result};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<Vec<Reservation>> {
        if !self.path.exists() {
            return Err(Error::SchemaMissing);
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| Error::file_read(&self.path, &e))?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, rows: &[Reservation]) -> Result<()> {
        let content = serde_json::to_string_pretty(rows)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Store for FileStore {
    fn create_schema(&mut self) -> Result<()> {
        debug!(path = %self.path.display(), "creating file store");
        self.save(&[])
    }

    fn upsert(&mut self, reservation: &Reservation) -> Result<()> {
        let mut rows = self.load()?;
        match rows
            .iter_mut()
            .find(|r| r.confirmation == reservation.confirmation)
        {
            Some(existing) => *existing = reservation.clone(),
            None => rows.push(reservation.clone()),
        }
        self.save(&rows)
    }

    fn all(&self) -> Result<Vec<Reservation>> {
        self.load()
    }

    fn delete(&mut self, confirmation: &str) -> Result<()> {
        let mut rows = self.load()?;
        let before = rows.len();
        rows.retain(|r| r.confirmation != confirmation);
        if rows.len() == before {
            return Err(Error::ReservationNotFound(confirmation.to_string()));
        }
        self.save(&rows)
    }

    fn artifact(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("reservations.json"))
    }

    #[test]
    fn test_create_schema_writes_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.create_schema().unwrap();
        assert!(store.artifact().unwrap().exists());
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn test_upsert_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reservations.json");

        let mut store = FileStore::new(path.clone());
        store.create_schema().unwrap();
        let res = Reservation::new("Bob", "Smith", "999999", "bob.smith@example.com");
        store.upsert(&res).unwrap();

        let reopened = FileStore::new(path);
        let rows = reopened.all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].confirmation, "999999");
    }

    #[test]
    fn test_operations_fail_without_schema() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let res = Reservation::new("Bob", "Smith", "999999", "bob.smith@example.com");
        assert!(matches!(store.upsert(&res), Err(Error::SchemaMissing)));
        assert!(matches!(store.all(), Err(Error::SchemaMissing)));
    }

    #[test]
    fn test_corrupt_file_surfaces_as_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reservations.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(path);
        assert!(matches!(store.all(), Err(Error::Json(_))));
    }
}
