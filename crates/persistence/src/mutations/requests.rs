// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation operations for booking requests and consultations.
//!
//! Status updates are last-write-wins. A concurrent update that lands
//! between a read and a write is silently overwritten, matching the
//! behavior of the admin tooling this backs.

use crate::data_models::{NewBookingRow, NewConsultationRow};
use crate::diesel_schema::{booking_requests, consultations};
use crate::error::PersistenceError;
use diesel::prelude::*;
use salon_desk_domain::{BookingStatus, ConsultationStatus};

/// Inserts a new booking request row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `row` - The row to insert
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_booking(
    conn: &mut SqliteConnection,
    row: &NewBookingRow,
) -> Result<(), PersistenceError> {
    diesel::insert_into(booking_requests::table)
        .values(row)
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("insert_booking: {e}")))?;
    Ok(())
}

/// Inserts a new consultation row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `row` - The row to insert
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_consultation(
    conn: &mut SqliteConnection,
    row: &NewConsultationRow,
) -> Result<(), PersistenceError> {
    diesel::insert_into(consultations::table)
        .values(row)
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("insert_consultation: {e}")))?;
    Ok(())
}

/// Updates the status of a booking request, scoped to its salon.
///
/// The `updated_at` column is refreshed alongside the status. Any target
/// status is accepted from any current status.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `salon_id` - The salon the request must belong to
/// * `booking_id` - The request ID
/// * `status` - The new status
/// * `updated_at` - RFC 3339 timestamp for the update
///
/// # Errors
///
/// Returns `BookingNotFound` if no matching row exists.
pub fn update_booking_status(
    conn: &mut SqliteConnection,
    salon_id: &str,
    booking_id: &str,
    status: BookingStatus,
    updated_at: &str,
) -> Result<(), PersistenceError> {
    let affected = diesel::update(
        booking_requests::table
            .filter(booking_requests::salon_id.eq(salon_id))
            .filter(booking_requests::id.eq(booking_id)),
    )
    .set((
        booking_requests::status.eq(status.as_str()),
        booking_requests::updated_at.eq(updated_at),
    ))
    .execute(conn)
    .map_err(|e| PersistenceError::QueryFailed(format!("update_booking_status: {e}")))?;

    if affected == 0 {
        return Err(PersistenceError::BookingNotFound(booking_id.to_string()));
    }
    Ok(())
}

/// Updates the status of a consultation, scoped to its salon.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `salon_id` - The salon the consultation must belong to
/// * `consultation_id` - The consultation ID
/// * `status` - The new status
/// * `updated_at` - RFC 3339 timestamp for the update
///
/// # Errors
///
/// Returns `ConsultationNotFound` if no matching row exists.
pub fn update_consultation_status(
    conn: &mut SqliteConnection,
    salon_id: &str,
    consultation_id: &str,
    status: ConsultationStatus,
    updated_at: &str,
) -> Result<(), PersistenceError> {
    let affected = diesel::update(
        consultations::table
            .filter(consultations::salon_id.eq(salon_id))
            .filter(consultations::id.eq(consultation_id)),
    )
    .set((
        consultations::status.eq(status.as_str()),
        consultations::updated_at.eq(updated_at),
    ))
    .execute(conn)
    .map_err(|e| PersistenceError::QueryFailed(format!("update_consultation_status: {e}")))?;

    if affected == 0 {
        return Err(PersistenceError::ConsultationNotFound(
            consultation_id.to_string(),
        ));
    }
    Ok(())
}
