// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Duration, Utc};
use salon_desk_domain::UnifiedRequest;

/// How long a non-pending item counts as recently completed.
pub const RECENTLY_COMPLETED_WINDOW_HOURS: i64 = 48;

/// The grouped dashboard view of an aggregated queue.
///
/// Buckets are independent predicates over the full set, not a partition:
/// an item may legitimately appear in more than one bucket. In particular a
/// `contacted` booking updated within the window shows up in both
/// `contacted` and `recently_completed`; the dashboard surfaces urgency in
/// two places on purpose.
#[derive(Debug, Clone, Default)]
pub struct RequestBuckets {
    /// Items with status `pending`.
    pub pending: Vec<UnifiedRequest>,
    /// Items with status `provider-requested`.
    pub provider_requested: Vec<UnifiedRequest>,
    /// Items with status `contacted` (bookings only, by construction).
    pub contacted: Vec<UnifiedRequest>,
    /// Non-pending items whose `updated_at` falls within the last
    /// [`RECENTLY_COMPLETED_WINDOW_HOURS`] hours.
    pub recently_completed: Vec<UnifiedRequest>,
}

/// Partitions an aggregated queue into dashboard buckets.
///
/// `now` is passed explicitly so the 48-hour window is deterministic under
/// test. An `updated_at` that fails to normalize never qualifies as
/// recently completed.
#[must_use]
pub fn partition_by_bucket(requests: &[UnifiedRequest], now: DateTime<Utc>) -> RequestBuckets {
    let window_floor: DateTime<Utc> = now - Duration::hours(RECENTLY_COMPLETED_WINDOW_HOURS);

    let mut buckets = RequestBuckets::default();
    for request in requests {
        match request.status_key() {
            "pending" => buckets.pending.push(request.clone()),
            "provider-requested" => buckets.provider_requested.push(request.clone()),
            "contacted" => buckets.contacted.push(request.clone()),
            _ => {}
        }

        // Independent predicate: overlaps with the status buckets above.
        if !request.is_pending()
            && request
                .updated_at()
                .is_some_and(|updated| updated >= window_floor && updated <= now)
        {
            buckets.recently_completed.push(request.clone());
        }
    }
    buckets
}
