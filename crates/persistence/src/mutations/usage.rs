// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation operations for usage metrics.

use crate::data_models::NewUsageMetricRow;
use crate::diesel_schema::usage_metrics;
use crate::error::PersistenceError;
use diesel::prelude::*;

/// Inserts a usage metric row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `row` - The row to insert
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_usage_metric(
    conn: &mut SqliteConnection,
    row: &NewUsageMetricRow,
) -> Result<(), PersistenceError> {
    diesel::insert_into(usage_metrics::table)
        .values(row)
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("insert_usage_metric: {e}")))?;
    Ok(())
}
