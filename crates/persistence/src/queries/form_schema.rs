// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query operations for consultation form schemas.

use crate::data_models::FormFieldRow;
use crate::diesel_schema::consultation_form_fields;
use crate::error::PersistenceError;
use diesel::prelude::*;
use salon_desk_domain::FormField;

/// Retrieves a salon's consultation form schema ordered by display order.
///
/// An empty result means the salon has no custom schema configured.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `salon_id` - The salon whose schema to load
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be decoded.
pub fn form_fields_for_salon(
    conn: &mut SqliteConnection,
    salon_id: &str,
) -> Result<Vec<FormField>, PersistenceError> {
    let rows: Vec<FormFieldRow> = consultation_form_fields::table
        .filter(consultation_form_fields::salon_id.eq(salon_id))
        .order(consultation_form_fields::display_order.asc())
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("form_fields_for_salon: {e}")))?;

    rows.into_iter().map(FormFieldRow::into_domain).collect()
}
