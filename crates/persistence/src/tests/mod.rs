// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod initialization_tests;
mod usage_tests;

use salon_desk_domain::{
    BookingRequest, BookingStatus, ClientInfo, ConditionalRule, ConsultationFile,
    ConsultationStatus, ConsultationSubmission, FieldType, FormAnswer, FormField, RawTimestamp,
};
use std::collections::BTreeMap;

pub fn create_test_booking(id: &str, salon_id: &str) -> BookingRequest {
    BookingRequest {
        id: String::from(id),
        salon_id: String::from(salon_id),
        client_name: String::from("Dana Fields"),
        client_email: String::from("dana@example.com"),
        client_phone: String::from("555-0101"),
        service: String::from("Balayage"),
        stylist_preference: String::from("Any stylist"),
        date_time_preference: String::from("Weekday mornings"),
        notes: Some(String::from("First visit")),
        waitlist_opt_in: false,
        submitted_by_provider: false,
        status: BookingStatus::Pending,
        created_at: RawTimestamp::Text(String::from("2026-03-01T09:00:00+00:00")),
        updated_at: RawTimestamp::Text(String::from("2026-03-01T09:00:00+00:00")),
    }
}

pub fn create_test_consultation(id: &str, salon_id: &str) -> ConsultationSubmission {
    let mut form_data: BTreeMap<String, FormAnswer> = BTreeMap::new();
    form_data.insert(
        String::from("hair-history"),
        FormAnswer::Text(String::from("Box dye last year")),
    );
    form_data.insert(
        String::from("goals"),
        FormAnswer::List(vec![String::from("color"), String::from("cut")]),
    );

    ConsultationSubmission {
        id: String::from(id),
        salon_id: String::from(salon_id),
        client_info: ClientInfo {
            name: String::from("Riley Moreau"),
            email: String::from("riley@example.com"),
            phone: String::from("555-0202"),
        },
        form_data,
        files: vec![ConsultationFile {
            field_id: String::from("inspiration"),
            url: String::from("https://files.example.com/abc123"),
            name: String::from("inspo.jpg"),
            size: 48_213,
        }],
        status: ConsultationStatus::Pending,
        submitted_at: RawTimestamp::Text(String::from("2026-03-02T14:30:00+00:00")),
        created_at: RawTimestamp::Text(String::from("2026-03-02T14:30:00+00:00")),
        updated_at: RawTimestamp::Text(String::from("2026-03-02T14:30:00+00:00")),
    }
}

pub fn create_test_field(id: &str, order: i32) -> FormField {
    FormField {
        id: String::from(id),
        field_type: FieldType::Text,
        label: format!("Label for {id}"),
        required: false,
        order,
        options: Vec::new(),
        accept: None,
        conditional_rules: Vec::new(),
    }
}

pub fn create_test_select_field(id: &str, order: i32, rules: Vec<ConditionalRule>) -> FormField {
    FormField {
        id: String::from(id),
        field_type: FieldType::Select,
        label: format!("Label for {id}"),
        required: true,
        order,
        options: vec![String::from("yes"), String::from("no")],
        accept: None,
        conditional_rules: rules,
    }
}
