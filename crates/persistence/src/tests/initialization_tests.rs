// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Persistence, REQUEST_ID_LENGTH, generate_request_id};

#[test]
fn test_new_in_memory_initializes_schema() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    // A fresh database answers queries against every table.
    assert!(persistence.bookings_for_salon("salon-1").unwrap().is_empty());
    assert!(
        persistence
            .consultations_for_salon("salon-1")
            .unwrap()
            .is_empty()
    );
    assert!(persistence.form_schema("salon-1").unwrap().is_empty());
    assert!(persistence.usage_counts("salon-1").unwrap().is_empty());
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first: Persistence = Persistence::new_in_memory().unwrap();
    let mut second: Persistence = Persistence::new_in_memory().unwrap();

    let booking = crate::tests::create_test_booking("bk-iso", "salon-1");
    first.insert_booking(&booking).unwrap();

    assert_eq!(first.bookings_for_salon("salon-1").unwrap().len(), 1);
    assert!(second.bookings_for_salon("salon-1").unwrap().is_empty());
}

#[test]
fn test_foreign_key_enforcement_is_active() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence.verify_foreign_key_enforcement().unwrap();
}

#[test]
fn test_generated_ids_are_alphanumeric_and_sized() {
    let id: String = generate_request_id();
    assert_eq!(id.len(), REQUEST_ID_LENGTH);
    assert!(id.chars().all(char::is_alphanumeric));
}

#[test]
fn test_generated_ids_are_unique() {
    let first: String = generate_request_id();
    let second: String = generate_request_id();
    assert_ne!(first, second);
}
