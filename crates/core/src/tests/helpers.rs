// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test fixtures for aggregation tests.

use salon_desk_domain::{
    BookingRequest, BookingStatus, ClientInfo, ConsultationStatus, ConsultationSubmission,
    RawTimestamp,
};
use std::collections::BTreeMap;

pub fn booking(id: &str, status: BookingStatus, created_at: &str) -> BookingRequest {
    BookingRequest {
        id: id.to_string(),
        salon_id: String::from("salon-1"),
        client_name: String::from("Dana Reyes"),
        client_email: String::from("dana@example.com"),
        client_phone: String::from("555-0101"),
        service: String::from("Cut and color"),
        stylist_preference: String::from("Jess"),
        date_time_preference: String::from("Saturday morning"),
        notes: None,
        waitlist_opt_in: false,
        submitted_by_provider: false,
        status,
        created_at: RawTimestamp::Text(created_at.to_string()),
        updated_at: RawTimestamp::Text(created_at.to_string()),
    }
}

pub fn consultation(
    id: &str,
    status: ConsultationStatus,
    submitted_at: &str,
) -> ConsultationSubmission {
    ConsultationSubmission {
        id: id.to_string(),
        salon_id: String::from("salon-1"),
        client_info: ClientInfo {
            name: String::from("Mia Chen"),
            email: String::from("mia@example.com"),
            phone: String::from("555-0102"),
        },
        form_data: BTreeMap::new(),
        files: Vec::new(),
        status,
        submitted_at: RawTimestamp::Text(submitted_at.to_string()),
        created_at: RawTimestamp::Text(submitted_at.to_string()),
        updated_at: RawTimestamp::Text(submitted_at.to_string()),
    }
}
