// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query operations for usage metrics.

use crate::diesel_schema::usage_metrics;
use crate::error::PersistenceError;
use diesel::dsl::count_star;
use diesel::prelude::*;

/// Counts recorded usage events for a salon, grouped by kind.
///
/// Kinds with no recorded events are absent from the result.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `salon_id` - The salon whose usage to count
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn usage_counts_for_salon(
    conn: &mut SqliteConnection,
    salon_id: &str,
) -> Result<Vec<(String, i64)>, PersistenceError> {
    usage_metrics::table
        .filter(usage_metrics::salon_id.eq(salon_id))
        .group_by(usage_metrics::kind)
        .select((usage_metrics::kind, count_star()))
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("usage_counts_for_salon: {e}")))
}
