//! Reservation store collaborator
//!
//! The smoke test only consumes a narrow contract: create the schema,
//! stage entities into a session, commit, query everything back, and
//! delete. Three interchangeable backends implement it.

pub mod file;
pub mod memory;
pub mod model;
pub mod remote;

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::ValueEnum;
use tracing::debug;

use crate::common::config::StoreConfig;
use crate::common::{Error, Result};

pub use file::FileStore;
pub use memory::MemoryStore;
pub use model::{Flight, FlightLeg, FlightLegLocation, Reservation};
pub use remote::RemoteStore;

/// Which store implementation backs the database suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// In-process, nothing persisted
    Memory,
    /// JSON document on disk
    File,
    /// Remote HTTP/JSON reservation service
    ManagedService,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Backend::Memory => "memory",
            Backend::File => "file",
            Backend::ManagedService => "managed-service",
        };
        f.write_str(name)
    }
}

/// The narrow persistence contract the suite exercises.
///
/// `upsert` persists the current state of a reservation keyed by its
/// confirmation code; committing twice with more nested data each time
/// must leave the richer state behind.
pub trait Store {
    fn create_schema(&mut self) -> Result<()>;
    fn upsert(&mut self, reservation: &Reservation) -> Result<()>;
    fn all(&self) -> Result<Vec<Reservation>>;
    fn delete(&mut self, confirmation: &str) -> Result<()>;

    /// On-disk artifact backing this store, if any. The suite removes it
    /// as its final cleanup step for the file backend.
    fn artifact(&self) -> Option<PathBuf> {
        None
    }
}

/// Session-style facade over a [`Store`].
///
/// Entities are shared handles: the suite keeps mutating a reservation
/// between commits and every `commit` flushes the current state of all
/// tracked entities. Single-threaded by design, hence `Rc<RefCell<_>>`.
pub struct Database {
    store: Box<dyn Store>,
    session: Vec<Rc<RefCell<Reservation>>>,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}

impl Database {
    /// Open the backend selected for this run.
    ///
    /// The managed-service backend needs a base URL from the settings;
    /// its absence is a configuration failure before any store operation
    /// is attempted.
    pub fn open(backend: Backend, config: &StoreConfig) -> Result<Self> {
        debug!(%backend, "opening reservation store");
        let store: Box<dyn Store> = match backend {
            Backend::Memory => Box::new(MemoryStore::new()),
            Backend::File => Box::new(FileStore::new(config.file_path.clone())),
            Backend::ManagedService => {
                let url = config
                    .service_url
                    .clone()
                    .ok_or(Error::MissingServiceUrl)?;
                Box::new(RemoteStore::new(url)?)
            }
        };
        Ok(Self::with_store(store))
    }

    /// Wrap an arbitrary store implementation. Used by tests to inject
    /// failing collaborators.
    pub fn with_store(store: Box<dyn Store>) -> Self {
        Self {
            store,
            session: Vec::new(),
        }
    }

    pub fn create_schema(&mut self) -> Result<()> {
        self.store.create_schema()
    }

    /// Stage an entity; it is persisted on the next `commit` and on every
    /// commit after that.
    pub fn add(&mut self, entity: Rc<RefCell<Reservation>>) {
        self.session.push(entity);
    }

    /// Flush the current state of every tracked entity.
    pub fn commit(&mut self) -> Result<()> {
        for entity in &self.session {
            self.store.upsert(&entity.borrow())?;
        }
        Ok(())
    }

    pub fn query(&self) -> Result<Vec<Reservation>> {
        self.store.all()
    }

    /// Delete a reservation from the backend and stop tracking it.
    pub fn delete_reservation(&mut self, reservation: &Reservation) -> Result<()> {
        self.store.delete(&reservation.confirmation)?;
        self.session
            .retain(|e| e.borrow().confirmation != reservation.confirmation);
        Ok(())
    }

    pub fn artifact(&self) -> Option<PathBuf> {
        self.store.artifact()
    }

    /// Remove the backend's on-disk artifact, if it has one.
    pub fn remove_artifact(&self) -> Result<()> {
        if let Some(path) = self.store.artifact() {
            debug!(path = %path.display(), "removing store artifact");
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_flushes_latest_entity_state() {
        let mut db = Database::with_store(Box::new(MemoryStore::new()));
        db.create_schema().unwrap();

        let res = Rc::new(RefCell::new(Reservation::new(
            "Bob",
            "Smith",
            "999999",
            "bob.smith@example.com",
        )));
        db.add(Rc::clone(&res));
        db.commit().unwrap();

        // Mutate after the first commit, then commit again.
        res.borrow_mut().flights.push(Flight::with_sched_time(10.0));
        db.commit().unwrap();

        let rows = db.query().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].flights.len(), 1);
        assert_eq!(rows[0].flights[0].sched_time, Some(10.0));
    }

    #[test]
    fn test_delete_reservation_stops_tracking() {
        let mut db = Database::with_store(Box::new(MemoryStore::new()));
        db.create_schema().unwrap();

        let res = Rc::new(RefCell::new(Reservation::new(
            "Bob",
            "Smith",
            "999999",
            "bob.smith@example.com",
        )));
        db.add(Rc::clone(&res));
        db.commit().unwrap();

        let snapshot = res.borrow().clone();
        db.delete_reservation(&snapshot).unwrap();
        assert!(db.query().unwrap().is_empty());

        // A later commit must not resurrect the deleted entity.
        db.commit().unwrap();
        assert!(db.query().unwrap().is_empty());
    }

    #[test]
    fn test_managed_service_without_url_is_a_config_error() {
        let config = StoreConfig::default();
        let err = Database::open(Backend::ManagedService, &config).unwrap_err();
        assert!(matches!(err, Error::MissingServiceUrl));
    }
}
