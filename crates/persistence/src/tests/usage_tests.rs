// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use salon_desk_usage::{UsageEvent, UsageKind};

#[test]
fn test_record_and_count_usage() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    persistence
        .record_usage(&UsageEvent::new(
            String::from("salon-1"),
            UsageKind::BookingSubmitted,
            String::from("bk-1"),
        ))
        .unwrap();
    persistence
        .record_usage(&UsageEvent::new(
            String::from("salon-1"),
            UsageKind::BookingSubmitted,
            String::from("bk-2"),
        ))
        .unwrap();
    persistence
        .record_usage(&UsageEvent::new(
            String::from("salon-1"),
            UsageKind::ConsultationSubmitted,
            String::from("cs-1"),
        ))
        .unwrap();

    let mut counts = persistence.usage_counts("salon-1").unwrap();
    counts.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
    assert_eq!(
        counts,
        vec![
            (UsageKind::BookingSubmitted, 2),
            (UsageKind::ConsultationSubmitted, 1),
        ]
    );
}

#[test]
fn test_usage_counts_scoped_to_salon() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    persistence
        .record_usage(&UsageEvent::new(
            String::from("salon-1"),
            UsageKind::BookingSubmitted,
            String::from("bk-1"),
        ))
        .unwrap();
    persistence
        .record_usage(&UsageEvent::new(
            String::from("salon-2"),
            UsageKind::BookingSubmitted,
            String::from("bk-2"),
        ))
        .unwrap();

    let counts = persistence.usage_counts("salon-1").unwrap();
    assert_eq!(counts, vec![(UsageKind::BookingSubmitted, 1)]);
}

#[test]
fn test_usage_counts_empty_for_unknown_salon() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.usage_counts("salon-9").unwrap().is_empty());
}
