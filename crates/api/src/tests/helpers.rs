// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{SubmitBookingRequest, SubmitConsultationRequest};
use salon_desk_domain::{ConsultationFile, FormAnswer, UPLOAD_PENDING_PREFIX};
use salon_desk_persistence::Persistence;
use salon_desk_usage::{Notification, NotificationDispatch};
use std::cell::RefCell;
use std::collections::BTreeMap;

pub fn create_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// Dispatcher that records every notification it is handed.
#[derive(Debug, Default)]
pub struct CountingDispatch {
    pub sent: RefCell<Vec<Notification>>,
}

impl NotificationDispatch for CountingDispatch {
    fn dispatch(&self, notification: &Notification) -> Result<(), String> {
        self.sent.borrow_mut().push(notification.clone());
        Ok(())
    }
}

/// Dispatcher that always fails, for exercising the best-effort path.
#[derive(Debug, Default)]
pub struct FailingDispatch;

impl NotificationDispatch for FailingDispatch {
    fn dispatch(&self, _notification: &Notification) -> Result<(), String> {
        Err(String::from("provider unavailable"))
    }
}

pub fn create_booking_request() -> SubmitBookingRequest {
    SubmitBookingRequest {
        client_name: String::from("Dana Fields"),
        client_email: String::from("dana@example.com"),
        client_phone: String::from("555-0101"),
        service: String::from("Balayage"),
        stylist_preference: String::from("Any stylist"),
        date_time_preference: String::from("Weekday mornings"),
        notes: Some(String::from("First visit")),
        waitlist_opt_in: false,
        submitted_by_provider: false,
    }
}

pub fn create_consultation_request() -> SubmitConsultationRequest {
    let mut form_data: BTreeMap<String, FormAnswer> = BTreeMap::new();
    form_data.insert(
        String::from("hair-history"),
        FormAnswer::Text(String::from("Box dye last year")),
    );

    SubmitConsultationRequest {
        client_name: String::from("Riley Moreau"),
        client_email: String::from("riley@example.com"),
        client_phone: String::from("555-0202"),
        form_data,
        files: vec![ConsultationFile {
            field_id: String::from("inspiration"),
            url: format!("{UPLOAD_PENDING_PREFIX}inspo.jpg"),
            name: String::from("inspo.jpg"),
            size: 48_213,
        }],
    }
}
