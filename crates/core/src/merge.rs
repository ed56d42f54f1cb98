// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};
use salon_desk_domain::{
    BookingRequest, ConsultationSubmission, PriorityTable, UnifiedRequest,
};

/// Merges booking requests and consultation submissions into one ordered
/// queue.
///
/// Sort order is a total order, descending on both keys:
/// 1. status priority (per `priorities`)
/// 2. recency: booking `created_at`, consultation `submitted_at`
///
/// The sort is stable, so items with equal priority and equal (or
/// unparsable) recency keep their relative input order. A timestamp that
/// fails to normalize sorts as oldest rather than aborting the merge.
///
/// The output always contains exactly every input item: nothing is
/// dropped, nothing is duplicated.
#[must_use]
pub fn merge_requests(
    bookings: Vec<BookingRequest>,
    consultations: Vec<ConsultationSubmission>,
    priorities: &PriorityTable,
) -> Vec<UnifiedRequest> {
    let mut merged: Vec<UnifiedRequest> = Vec::with_capacity(bookings.len() + consultations.len());
    merged.extend(bookings.into_iter().map(UnifiedRequest::Booking));
    merged.extend(consultations.into_iter().map(UnifiedRequest::Consultation));

    merged.sort_by(|a, b| {
        let priority_order = b.priority(priorities).cmp(&a.priority(priorities));
        priority_order.then_with(|| sort_recency(b).cmp(&sort_recency(a)))
    });

    merged
}

/// Recency key with malformed timestamps pinned to the epoch floor.
fn sort_recency(request: &UnifiedRequest) -> DateTime<Utc> {
    request.recency().unwrap_or(DateTime::<Utc>::MIN_UTC)
}
