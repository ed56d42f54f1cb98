// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{booking, consultation};
use crate::partition_by_bucket;
use chrono::{DateTime, Duration, Utc};
use salon_desk_domain::{BookingStatus, ConsultationStatus, RawTimestamp, UnifiedRequest};

fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-02-10T12:00:00Z")
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn with_updated_at(mut request: UnifiedRequest, updated_at: DateTime<Utc>) -> UnifiedRequest {
    let raw = RawTimestamp::from_datetime(updated_at);
    match &mut request {
        UnifiedRequest::Booking(b) => b.updated_at = raw,
        UnifiedRequest::Consultation(c) => c.updated_at = raw,
    }
    request
}

#[test]
fn test_status_buckets() {
    let queue = vec![
        UnifiedRequest::Booking(booking(
            "pending",
            BookingStatus::Pending,
            "2026-02-01T10:00:00Z",
        )),
        UnifiedRequest::Booking(booking(
            "provider",
            BookingStatus::ProviderRequested,
            "2026-02-01T10:00:00Z",
        )),
        UnifiedRequest::Booking(booking(
            "contacted",
            BookingStatus::Contacted,
            "2026-02-01T10:00:00Z",
        )),
        UnifiedRequest::Consultation(consultation(
            "c-pending",
            ConsultationStatus::Pending,
            "2026-02-01T10:00:00Z",
        )),
    ];

    let buckets = partition_by_bucket(&queue, fixed_now());

    assert_eq!(buckets.pending.len(), 2);
    assert_eq!(buckets.provider_requested.len(), 1);
    assert_eq!(buckets.contacted.len(), 1);
    assert_eq!(buckets.contacted[0].id(), "contacted");
}

#[test]
fn test_recently_completed_overlaps_contacted() {
    // A contacted booking updated two hours ago appears in BOTH buckets.
    let now = fixed_now();
    let item = with_updated_at(
        UnifiedRequest::Booking(booking(
            "b1",
            BookingStatus::Contacted,
            "2026-02-01T10:00:00Z",
        )),
        now - Duration::hours(2),
    );

    let buckets = partition_by_bucket(&[item], now);

    assert_eq!(buckets.contacted.len(), 1);
    assert_eq!(buckets.recently_completed.len(), 1);
    assert_eq!(buckets.contacted[0].id(), "b1");
    assert_eq!(buckets.recently_completed[0].id(), "b1");
}

#[test]
fn test_pending_items_never_recently_completed() {
    let now = fixed_now();
    let item = with_updated_at(
        UnifiedRequest::Booking(booking(
            "b1",
            BookingStatus::Pending,
            "2026-02-01T10:00:00Z",
        )),
        now - Duration::hours(1),
    );

    let buckets = partition_by_bucket(&[item], now);

    assert_eq!(buckets.pending.len(), 1);
    assert!(buckets.recently_completed.is_empty());
}

#[test]
fn test_recently_completed_window_boundary() {
    let now = fixed_now();
    let inside = with_updated_at(
        UnifiedRequest::Booking(booking(
            "inside",
            BookingStatus::Booked,
            "2026-02-01T10:00:00Z",
        )),
        now - Duration::hours(47),
    );
    let outside = with_updated_at(
        UnifiedRequest::Booking(booking(
            "outside",
            BookingStatus::Booked,
            "2026-02-01T10:00:00Z",
        )),
        now - Duration::hours(49),
    );

    let buckets = partition_by_bucket(&[inside, outside], now);

    assert_eq!(buckets.recently_completed.len(), 1);
    assert_eq!(buckets.recently_completed[0].id(), "inside");
}

#[test]
fn test_reviewed_consultation_counts_as_recently_completed() {
    let now = fixed_now();
    let item = with_updated_at(
        UnifiedRequest::Consultation(consultation(
            "c1",
            ConsultationStatus::Reviewed,
            "2026-02-01T10:00:00Z",
        )),
        now - Duration::hours(3),
    );

    let buckets = partition_by_bucket(&[item], now);

    // Reviewed is non-pending and recent; it joins no status bucket but
    // does join recently_completed.
    assert!(buckets.pending.is_empty());
    assert!(buckets.contacted.is_empty());
    assert_eq!(buckets.recently_completed.len(), 1);
}

#[test]
fn test_malformed_updated_at_never_qualifies() {
    let now = fixed_now();
    let mut b = booking("b1", BookingStatus::Booked, "2026-02-01T10:00:00Z");
    b.updated_at = RawTimestamp::Text(String::from("garbage"));

    let buckets = partition_by_bucket(&[UnifiedRequest::Booking(b)], now);
    assert!(buckets.recently_completed.is_empty());
}
