// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{booking, consultation};
use crate::{FilterCriteria, RequestTypeFilter, filter_requests};
use salon_desk_domain::{BookingStatus, ConsultationStatus, UnifiedRequest};

fn sample_queue() -> Vec<UnifiedRequest> {
    vec![
        UnifiedRequest::Booking(booking(
            "b1",
            BookingStatus::Pending,
            "2026-02-01T10:00:00Z",
        )),
        UnifiedRequest::Booking(booking(
            "b2",
            BookingStatus::Contacted,
            "2026-02-02T10:00:00Z",
        )),
        UnifiedRequest::Consultation(consultation(
            "c1",
            ConsultationStatus::Pending,
            "2026-02-03T10:00:00Z",
        )),
        UnifiedRequest::Consultation(consultation(
            "c2",
            ConsultationStatus::Reviewed,
            "2026-02-04T10:00:00Z",
        )),
    ]
}

#[test]
fn test_request_type_filter() {
    let queue = sample_queue();

    let bookings = filter_requests(
        &queue,
        &FilterCriteria {
            request_type: RequestTypeFilter::Bookings,
            ..FilterCriteria::default()
        },
    );
    assert_eq!(bookings.len(), 2);
    assert!(bookings.iter().all(|r| r.request_type() == "booking"));

    let consultations = filter_requests(
        &queue,
        &FilterCriteria {
            request_type: RequestTypeFilter::Consultations,
            ..FilterCriteria::default()
        },
    );
    assert_eq!(consultations.len(), 2);
}

#[test]
fn test_status_filter_is_literal_not_semantic() {
    let queue = sample_queue();

    // `contacted` matches the booking only; the reviewed consultation is
    // NOT surfaced even though the statuses share a priority tier.
    let contacted = filter_requests(
        &queue,
        &FilterCriteria {
            status: Some(String::from("contacted")),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(contacted.len(), 1);
    assert_eq!(contacted[0].id(), "b2");

    let reviewed = filter_requests(
        &queue,
        &FilterCriteria {
            status: Some(String::from("reviewed")),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(reviewed.len(), 1);
    assert_eq!(reviewed[0].id(), "c2");

    // `pending` exists in both vocabularies and matches both.
    let pending = filter_requests(
        &queue,
        &FilterCriteria {
            status: Some(String::from("pending")),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(pending.len(), 2);
}

#[test]
fn test_search_matches_name_and_email_case_insensitively() {
    let queue = sample_queue();

    let by_name = filter_requests(
        &queue,
        &FilterCriteria {
            search_term: Some(String::from("DANA")),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(by_name.len(), 2);

    let by_email = filter_requests(
        &queue,
        &FilterCriteria {
            search_term: Some(String::from("mia@example")),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(by_email.len(), 2);
}

#[test]
fn test_search_matches_booking_service_and_notes() {
    let mut noted = booking("b9", BookingStatus::Pending, "2026-02-05T10:00:00Z");
    noted.notes = Some(String::from("prefers quiet mornings"));
    let queue = vec![
        UnifiedRequest::Booking(noted),
        UnifiedRequest::Booking(booking(
            "b1",
            BookingStatus::Pending,
            "2026-02-01T10:00:00Z",
        )),
    ];

    let by_service = filter_requests(
        &queue,
        &FilterCriteria {
            search_term: Some(String::from("cut and color")),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(by_service.len(), 2);

    let by_notes = filter_requests(
        &queue,
        &FilterCriteria {
            search_term: Some(String::from("quiet mornings")),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(by_notes.len(), 1);
    assert_eq!(by_notes[0].id(), "b9");
}

#[test]
fn test_search_matches_consultation_phone_and_literal_phrase() {
    let queue = sample_queue();

    let by_phone = filter_requests(
        &queue,
        &FilterCriteria {
            search_term: Some(String::from("555-0102")),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(by_phone.len(), 2);
    assert!(by_phone.iter().all(|r| r.request_type() == "consultation"));

    // The literal phrase surfaces every consultation and no booking.
    let by_phrase = filter_requests(
        &queue,
        &FilterCriteria {
            search_term: Some(String::from("virtual consult")),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(by_phrase.len(), 2);
    assert!(by_phrase.iter().all(|r| r.request_type() == "consultation"));
}

#[test]
fn test_filtering_is_idempotent() {
    let queue = sample_queue();
    let criteria = FilterCriteria {
        search_term: Some(String::from("example.com")),
        request_type: RequestTypeFilter::Bookings,
        status: Some(String::from("pending")),
    };

    let once = filter_requests(&queue, &criteria);
    let twice = filter_requests(&once, &criteria);
    assert_eq!(once, twice);
}

#[test]
fn test_blank_search_term_admits_everything() {
    let queue = sample_queue();
    let filtered = filter_requests(
        &queue,
        &FilterCriteria {
            search_term: Some(String::from("   ")),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(filtered.len(), queue.len());
}

#[test]
fn test_filter_preserves_input_order() {
    let queue = sample_queue();
    let filtered = filter_requests(&queue, &FilterCriteria::default());
    let ids: Vec<&str> = filtered.iter().map(UnifiedRequest::id).collect();
    assert_eq!(ids, vec!["b1", "b2", "c1", "c2"]);
}
