//! Managed-service store backend
//!
//! Talks to a remote reservation service over HTTP/JSON:
//!
//! - `POST   /schema`                    create the schema
//! - `PUT    /reservations/{code}`       upsert one reservation
//! - `GET    /reservations`              fetch all reservations
//! - `DELETE /reservations/{code}`       delete one reservation

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use tracing::debug;

use super::{Reservation, Store};
use crate::common::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct RemoteStore {
    client: Client,
    base_url: String,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into a status error carrying the body.
    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().unwrap_or_default();
        Err(Error::remote_status(status.as_u16(), message))
    }
}

impl Store for RemoteStore {
    fn create_schema(&mut self) -> Result<()> {
        debug!(url = %self.base_url, "creating schema on managed service");
        let response = self.client.post(self.url("/schema")).send()?;
        Self::check(response)?;
        Ok(())
    }

    fn upsert(&mut self, reservation: &Reservation) -> Result<()> {
        let url = self.url(&format!("/reservations/{}", reservation.confirmation));
        let response = self.client.put(url).json(reservation).send()?;
        Self::check(response)?;
        Ok(())
    }

    fn all(&self) -> Result<Vec<Reservation>> {
        let response = self.client.get(self.url("/reservations")).send()?;
        let response = Self::check(response)?;
        Ok(response.json()?)
    }

    fn delete(&mut self, confirmation: &str) -> Result<()> {
        let url = self.url(&format!("/reservations/{}", confirmation));
        let response = self.client.delete(url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::ReservationNotFound(confirmation.to_string()));
        }
        Self::check(response)?;
        Ok(())
    }
}
