// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for SalonDesk.
//!
//! This crate stores booking requests, consultation submissions,
//! consultation form schemas, and usage metrics. It is built on Diesel
//! over `SQLite`.
//!
//! ## Backend
//!
//! `SQLite` is the only supported backend:
//! - In-memory databases for unit and integration tests
//! - File-based databases (WAL mode) for deployments
//!
//! It requires no external infrastructure, so standard `cargo test`
//! covers the full persistence surface.
//!
//! ## Layout
//!
//! - `backend/` - connection setup, migrations, PRAGMA configuration
//! - `queries/` - read-side operations in Diesel DSL
//! - `mutations/` - write-side operations in Diesel DSL
//! - `data_models` - row structs and domain conversions
//!
//! The [`Persistence`] adapter owns the connection and is the only type
//! callers interact with.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use rand::distr::{Alphanumeric, Distribution};
use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use salon_desk_domain::{
    BookingRequest, BookingStatus, ConsultationStatus, ConsultationSubmission, FormField,
};
use salon_desk_usage::{UsageEvent, UsageKind};

pub mod backend;
pub mod data_models;
pub mod diesel_schema;
pub mod error;
pub mod mutations;
pub mod queries;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;

pub use error::PersistenceError;

use data_models::{NewBookingRow, NewConsultationRow, NewFormFieldRow, NewUsageMetricRow};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Length of generated request and consultation identifiers.
pub const REQUEST_ID_LENGTH: usize = 20;

/// Generates a random alphanumeric identifier for a new record.
///
/// Identifiers are 20 characters drawn from `[A-Za-z0-9]`, matching the
/// shape of the IDs the intake forms produce.
#[must_use]
pub fn generate_request_id() -> String {
    Alphanumeric
        .sample_iter(&mut rand::rng())
        .take(REQUEST_ID_LENGTH)
        .map(char::from)
        .collect()
}

/// The persistence adapter.
///
/// Owns the database connection. All reads and writes go through the
/// methods on this type; callers never touch Diesel directly.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        // Use atomic counter instead of timestamp to eliminate race conditions.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // WAL mode for better read concurrency on file-based databases
        backend::sqlite::enable_wal_mode(&mut conn)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is active on the connection.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    /// Retrieves every booking request belonging to a salon.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn bookings_for_salon(
        &mut self,
        salon_id: &str,
    ) -> Result<Vec<BookingRequest>, PersistenceError> {
        queries::requests::bookings_for_salon(&mut self.conn, salon_id)
    }

    /// Retrieves every consultation belonging to a salon.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn consultations_for_salon(
        &mut self,
        salon_id: &str,
    ) -> Result<Vec<ConsultationSubmission>, PersistenceError> {
        queries::requests::consultations_for_salon(&mut self.conn, salon_id)
    }

    /// Retrieves a single booking request by ID, scoped to its salon.
    ///
    /// # Errors
    ///
    /// Returns `BookingNotFound` if no matching row exists.
    pub fn get_booking(
        &mut self,
        salon_id: &str,
        booking_id: &str,
    ) -> Result<BookingRequest, PersistenceError> {
        queries::requests::get_booking(&mut self.conn, salon_id, booking_id)
    }

    /// Retrieves a single consultation by ID, scoped to its salon.
    ///
    /// # Errors
    ///
    /// Returns `ConsultationNotFound` if no matching row exists.
    pub fn get_consultation(
        &mut self,
        salon_id: &str,
        consultation_id: &str,
    ) -> Result<ConsultationSubmission, PersistenceError> {
        queries::requests::get_consultation(&mut self.conn, salon_id, consultation_id)
    }

    /// Inserts a new booking request.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_booking(&mut self, booking: &BookingRequest) -> Result<(), PersistenceError> {
        let row = NewBookingRow::from_domain(booking);
        mutations::requests::insert_booking(&mut self.conn, &row)
    }

    /// Inserts a new consultation submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the consultation cannot be encoded or the
    /// insert fails.
    pub fn insert_consultation(
        &mut self,
        consultation: &ConsultationSubmission,
    ) -> Result<(), PersistenceError> {
        let row = NewConsultationRow::from_domain(consultation)?;
        mutations::requests::insert_consultation(&mut self.conn, &row)
    }

    /// Updates the status of a booking request and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `BookingNotFound` if no matching row exists.
    pub fn update_booking_status(
        &mut self,
        salon_id: &str,
        booking_id: &str,
        status: BookingStatus,
        updated_at: &str,
    ) -> Result<(), PersistenceError> {
        mutations::requests::update_booking_status(
            &mut self.conn,
            salon_id,
            booking_id,
            status,
            updated_at,
        )
    }

    /// Updates the status of a consultation and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `ConsultationNotFound` if no matching row exists.
    pub fn update_consultation_status(
        &mut self,
        salon_id: &str,
        consultation_id: &str,
        status: ConsultationStatus,
        updated_at: &str,
    ) -> Result<(), PersistenceError> {
        mutations::requests::update_consultation_status(
            &mut self.conn,
            salon_id,
            consultation_id,
            status,
            updated_at,
        )
    }

    /// Retrieves a salon's consultation form schema ordered by display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn form_schema(&mut self, salon_id: &str) -> Result<Vec<FormField>, PersistenceError> {
        queries::form_schema::form_fields_for_salon(&mut self.conn, salon_id)
    }

    /// Replaces a salon's consultation form schema wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if a field cannot be encoded or the transactional
    /// replace fails.
    pub fn replace_form_schema(
        &mut self,
        salon_id: &str,
        fields: &[FormField],
    ) -> Result<(), PersistenceError> {
        let rows: Vec<NewFormFieldRow> = fields
            .iter()
            .map(|field| NewFormFieldRow::from_domain(salon_id, field))
            .collect::<Result<_, _>>()?;
        mutations::form_schema::replace_form_fields(&mut self.conn, salon_id, &rows)
    }

    /// Records a usage event.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn record_usage(&mut self, event: &UsageEvent) -> Result<(), PersistenceError> {
        let row = NewUsageMetricRow::from_event(event);
        mutations::usage::insert_usage_metric(&mut self.conn, &row)
    }

    /// Counts recorded usage events for a salon, grouped by kind.
    ///
    /// Kinds with no recorded events are absent from the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored kind string is
    /// not recognized.
    pub fn usage_counts(
        &mut self,
        salon_id: &str,
    ) -> Result<Vec<(UsageKind, i64)>, PersistenceError> {
        queries::usage::usage_counts_for_salon(&mut self.conn, salon_id)?
            .into_iter()
            .map(|(kind, count)| {
                UsageKind::from_str(&kind)
                    .map(|parsed| (parsed, count))
                    .map_err(PersistenceError::SerializationError)
            })
            .collect()
    }
}
