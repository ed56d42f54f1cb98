// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query operations for booking requests and consultations.

use crate::data_models::{BookingRow, ConsultationRow};
use crate::diesel_schema::{booking_requests, consultations};
use crate::error::PersistenceError;
use diesel::prelude::*;
use salon_desk_domain::{BookingRequest, ConsultationSubmission};

/// Retrieves every booking request belonging to a salon.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `salon_id` - The salon whose requests to load
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be decoded.
pub fn bookings_for_salon(
    conn: &mut SqliteConnection,
    salon_id: &str,
) -> Result<Vec<BookingRequest>, PersistenceError> {
    let rows: Vec<BookingRow> = booking_requests::table
        .filter(booking_requests::salon_id.eq(salon_id))
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("bookings_for_salon: {e}")))?;

    rows.into_iter().map(BookingRow::into_domain).collect()
}

/// Retrieves every consultation belonging to a salon.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `salon_id` - The salon whose consultations to load
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be decoded.
pub fn consultations_for_salon(
    conn: &mut SqliteConnection,
    salon_id: &str,
) -> Result<Vec<ConsultationSubmission>, PersistenceError> {
    let rows: Vec<ConsultationRow> = consultations::table
        .filter(consultations::salon_id.eq(salon_id))
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("consultations_for_salon: {e}")))?;

    rows.into_iter().map(ConsultationRow::into_domain).collect()
}

/// Retrieves a single booking request by ID, scoped to its salon.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `salon_id` - The salon the request must belong to
/// * `booking_id` - The request ID
///
/// # Errors
///
/// Returns `BookingNotFound` if no matching row exists.
pub fn get_booking(
    conn: &mut SqliteConnection,
    salon_id: &str,
    booking_id: &str,
) -> Result<BookingRequest, PersistenceError> {
    let row: BookingRow = booking_requests::table
        .filter(booking_requests::salon_id.eq(salon_id))
        .filter(booking_requests::id.eq(booking_id))
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_booking: {e}")))?
        .ok_or_else(|| PersistenceError::BookingNotFound(booking_id.to_string()))?;

    row.into_domain()
}

/// Retrieves a single consultation by ID, scoped to its salon.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `salon_id` - The salon the consultation must belong to
/// * `consultation_id` - The consultation ID
///
/// # Errors
///
/// Returns `ConsultationNotFound` if no matching row exists.
pub fn get_consultation(
    conn: &mut SqliteConnection,
    salon_id: &str,
    consultation_id: &str,
) -> Result<ConsultationSubmission, PersistenceError> {
    let row: ConsultationRow = consultations::table
        .filter(consultations::salon_id.eq(salon_id))
        .filter(consultations::id.eq(consultation_id))
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_consultation: {e}")))?
        .ok_or_else(|| PersistenceError::ConsultationNotFound(consultation_id.to_string()))?;

    row.into_domain()
}
