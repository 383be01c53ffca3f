//! Database suite
//!
//! Builds up one reservation through a fixed sequence of commits, reads
//! it back, and cleans up after itself on the backends that leave state
//! behind. Every step runs regardless of earlier failures; steps that
//! depend on state an earlier failure never produced fail on their own
//! and are recorded on their own.

use std::cell::RefCell;
use std::rc::Rc;

use colored::Colorize;

use crate::common::config::StoreConfig;
use crate::common::Error;
use crate::runner::Runner;
use crate::store::{Backend, Database, Flight, FlightLeg, FlightLegLocation, Reservation};

/// Run the database suite against the selected backend.
pub fn run(runner: &mut Runner, backend: Backend, config: &StoreConfig) {
    println!("\n{}", "Testing database...".blue());

    let db = match Database::open(backend, config) {
        Ok(db) => db,
        Err(cause) => {
            // No handle for any step to run against.
            runner.record("Failed to open the database", cause);
            return;
        }
    };

    run_with(runner, db, backend);
}

/// Run the suite steps against an already-opened database.
///
/// Split out so tests can inject a database wrapping a misbehaving store.
pub fn run_with(runner: &mut Runner, mut db: Database, backend: Backend) {
    runner.step("Creating the schema", || db.create_schema());

    let res = Rc::new(RefCell::new(Reservation::new(
        "Bob",
        "Smith",
        "999999",
        "bob.smith@example.com",
    )));

    runner.step("Adding a reservation", || {
        db.add(Rc::clone(&res));
        db.commit()
    });

    runner.step("Adding a flight", || {
        {
            let mut r = res.borrow_mut();
            r.flights.push(Flight::with_sched_time(10.0));
            r.flights.push(Flight::default());
        }
        db.commit()
    });

    runner.step("Adding a flight leg", || {
        {
            let mut r = res.borrow_mut();
            for flight in r.flights.iter_mut() {
                flight.legs.push(FlightLeg::default());
            }
            let leg = r
                .flights
                .get_mut(0)
                .and_then(|f| f.legs.get_mut(0))
                .ok_or_else(|| Error::Internal("reservation has no flight leg".to_string()))?;
            leg.flight_number = Some("1234".to_string());
        }
        db.commit()
    });

    runner.step("Adding a flight location", || {
        {
            let mut r = res.borrow_mut();
            let leg = r
                .flights
                .get_mut(0)
                .and_then(|f| f.legs.get_mut(0))
                .ok_or_else(|| Error::Internal("reservation has no flight leg".to_string()))?;
            leg.depart = Some(FlightLegLocation::new("AUS"));
        }
        db.commit()
    });

    runner.step("Querying data", || {
        for instance in db.query()? {
            println!(
                "    {} Reservation: {} {}",
                ">".dimmed(),
                instance.first_name,
                instance.confirmation
            );

            let flight = instance
                .flights
                .first()
                .ok_or_else(|| Error::Internal("reservation has no flights".to_string()))?;
            println!(
                "    {} First flight scheduled time: {:?}",
                ">".dimmed(),
                flight.sched_time
            );

            let leg = flight
                .legs
                .first()
                .ok_or_else(|| Error::Internal("flight has no legs".to_string()))?;
            println!(
                "    {} First flight, first leg, flight #: {}",
                ">".dimmed(),
                leg.flight_number.as_deref().unwrap_or("<none>")
            );

            let depart = leg
                .depart
                .as_ref()
                .ok_or_else(|| Error::Internal("leg has no departure location".to_string()))?;
            println!(
                "    {} First flight, first leg location's airport: {}",
                ">".dimmed(),
                depart.airport
            );
        }
        Ok(())
    });

    match backend {
        Backend::ManagedService => {
            runner.step("Deleting the test reservation", || {
                let snapshot = res.borrow().clone();
                db.delete_reservation(&snapshot)
            });
        }
        Backend::File => {
            runner.step("Deleting the test database file", || db.remove_artifact());
        }
        Backend::Memory => {}
    }
}
