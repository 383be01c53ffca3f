//! In-process store backend

use super::{Reservation, Store};
use crate::common::{Error, Result};

/// Keeps reservations in a plain `Vec`; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    schema_created: bool,
    rows: Vec<Reservation>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn create_schema(&mut self) -> Result<()> {
        self.schema_created = true;
        Ok(())
    }

    fn upsert(&mut self, reservation: &Reservation) -> Result<()> {
        if !self.schema_created {
            return Err(Error::SchemaMissing);
        }
        match self
            .rows
            .iter_mut()
            .find(|r| r.confirmation == reservation.confirmation)
        {
            Some(existing) => *existing = reservation.clone(),
            None => self.rows.push(reservation.clone()),
        }
        Ok(())
    }

    fn all(&self) -> Result<Vec<Reservation>> {
        if !self.schema_created {
            return Err(Error::SchemaMissing);
        }
        Ok(self.rows.clone())
    }

    fn delete(&mut self, confirmation: &str) -> Result<()> {
        let before = self.rows.len();
        self.rows.retain(|r| r.confirmation != confirmation);
        if self.rows.len() == before {
            return Err(Error::ReservationNotFound(confirmation.to_string()));
        }
        Ok(())
    }
}
