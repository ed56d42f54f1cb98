// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation operations for consultation form schemas.

use crate::data_models::NewFormFieldRow;
use crate::diesel_schema::consultation_form_fields;
use crate::error::PersistenceError;
use diesel::prelude::*;

/// Replaces a salon's consultation form schema wholesale.
///
/// The existing schema is deleted and the new fields inserted inside a
/// single transaction, so readers never observe a partial schema.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `salon_id` - The salon whose schema to replace
/// * `rows` - The new schema rows
///
/// # Errors
///
/// Returns an error if the delete or insert fails. The transaction is
/// rolled back and the previous schema remains in place.
pub fn replace_form_fields(
    conn: &mut SqliteConnection,
    salon_id: &str,
    rows: &[NewFormFieldRow],
) -> Result<(), PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::delete(
            consultation_form_fields::table
                .filter(consultation_form_fields::salon_id.eq(salon_id)),
        )
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("replace_form_fields delete: {e}")))?;

        diesel::insert_into(consultation_form_fields::table)
            .values(rows)
            .execute(conn)
            .map_err(|e| {
                PersistenceError::QueryFailed(format!("replace_form_fields insert: {e}"))
            })?;

        Ok(())
    })
}
