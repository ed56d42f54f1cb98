// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and their conversions to and from domain types.
//!
//! Timestamps are stored as RFC 3339 text and surfaced to the domain as
//! [`RawTimestamp::Text`] so every comparison still flows through the
//! normalizer. Structured columns (`form_data`, `files`, `options`,
//! `conditional_rules`) are JSON text.

use crate::diesel_schema::{
    booking_requests, consultation_form_fields, consultations, usage_metrics,
};
use crate::error::PersistenceError;
use diesel::prelude::*;
use salon_desk_domain::{
    BookingRequest, BookingStatus, ClientInfo, ConditionalRule, ConsultationFile,
    ConsultationStatus, ConsultationSubmission, FieldType, FormAnswer, FormField, RawTimestamp,
};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Renders a raw timestamp as RFC 3339 text for storage.
///
/// Timestamps that cannot be normalized are stored verbatim when textual,
/// so malformed input survives a round trip unchanged.
fn timestamp_to_text(ts: &RawTimestamp) -> String {
    match ts.normalized() {
        Some(dt) => dt.to_rfc3339(),
        None => match ts {
            RawTimestamp::Text(s) => s.clone(),
            RawTimestamp::Epoch { seconds, .. } => seconds.to_string(),
            RawTimestamp::Millis(ms) => ms.to_string(),
        },
    }
}

/// A `booking_requests` row.
#[derive(Debug, Clone, Queryable)]
pub struct BookingRow {
    pub id: String,
    pub salon_id: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service: String,
    pub stylist_preference: String,
    pub date_time_preference: String,
    pub notes: Option<String>,
    pub waitlist_opt_in: i32,
    pub submitted_by_provider: i32,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl BookingRow {
    /// Decodes this row into the domain type.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the stored status string is not a
    /// valid booking status.
    pub fn into_domain(self) -> Result<BookingRequest, PersistenceError> {
        let status = BookingStatus::from_str(&self.status)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
        Ok(BookingRequest {
            id: self.id,
            salon_id: self.salon_id,
            client_name: self.client_name,
            client_email: self.client_email,
            client_phone: self.client_phone,
            service: self.service,
            stylist_preference: self.stylist_preference,
            date_time_preference: self.date_time_preference,
            notes: self.notes,
            waitlist_opt_in: self.waitlist_opt_in != 0,
            submitted_by_provider: self.submitted_by_provider != 0,
            status,
            created_at: RawTimestamp::Text(self.created_at),
            updated_at: RawTimestamp::Text(self.updated_at),
        })
    }
}

/// An insertable `booking_requests` row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = booking_requests)]
pub struct NewBookingRow {
    pub id: String,
    pub salon_id: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service: String,
    pub stylist_preference: String,
    pub date_time_preference: String,
    pub notes: Option<String>,
    pub waitlist_opt_in: i32,
    pub submitted_by_provider: i32,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl NewBookingRow {
    /// Encodes a domain booking request for storage.
    #[must_use]
    pub fn from_domain(booking: &BookingRequest) -> Self {
        Self {
            id: booking.id.clone(),
            salon_id: booking.salon_id.clone(),
            client_name: booking.client_name.clone(),
            client_email: booking.client_email.clone(),
            client_phone: booking.client_phone.clone(),
            service: booking.service.clone(),
            stylist_preference: booking.stylist_preference.clone(),
            date_time_preference: booking.date_time_preference.clone(),
            notes: booking.notes.clone(),
            waitlist_opt_in: i32::from(booking.waitlist_opt_in),
            submitted_by_provider: i32::from(booking.submitted_by_provider),
            status: booking.status.as_str().to_string(),
            created_at: timestamp_to_text(&booking.created_at),
            updated_at: timestamp_to_text(&booking.updated_at),
        }
    }
}

/// A `consultations` row.
#[derive(Debug, Clone, Queryable)]
pub struct ConsultationRow {
    pub id: String,
    pub salon_id: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub form_data: String,
    pub files: String,
    pub status: String,
    pub submitted_at: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ConsultationRow {
    /// Decodes this row into the domain type.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the status string or one of the
    /// JSON columns cannot be decoded.
    pub fn into_domain(self) -> Result<ConsultationSubmission, PersistenceError> {
        let status = ConsultationStatus::from_str(&self.status)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
        let form_data: BTreeMap<String, FormAnswer> = serde_json::from_str(&self.form_data)?;
        let files: Vec<ConsultationFile> = serde_json::from_str(&self.files)?;
        Ok(ConsultationSubmission {
            id: self.id,
            salon_id: self.salon_id,
            client_info: ClientInfo {
                name: self.client_name,
                email: self.client_email,
                phone: self.client_phone,
            },
            form_data,
            files,
            status,
            submitted_at: RawTimestamp::Text(self.submitted_at),
            created_at: RawTimestamp::Text(self.created_at),
            updated_at: RawTimestamp::Text(self.updated_at),
        })
    }
}

/// An insertable `consultations` row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = consultations)]
pub struct NewConsultationRow {
    pub id: String,
    pub salon_id: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub form_data: String,
    pub files: String,
    pub status: String,
    pub submitted_at: String,
    pub created_at: String,
    pub updated_at: String,
}

impl NewConsultationRow {
    /// Encodes a domain consultation submission for storage.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if a JSON column cannot be encoded.
    pub fn from_domain(consultation: &ConsultationSubmission) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: consultation.id.clone(),
            salon_id: consultation.salon_id.clone(),
            client_name: consultation.client_info.name.clone(),
            client_email: consultation.client_info.email.clone(),
            client_phone: consultation.client_info.phone.clone(),
            form_data: serde_json::to_string(&consultation.form_data)?,
            files: serde_json::to_string(&consultation.files)?,
            status: consultation.status.as_str().to_string(),
            submitted_at: timestamp_to_text(&consultation.submitted_at),
            created_at: timestamp_to_text(&consultation.created_at),
            updated_at: timestamp_to_text(&consultation.updated_at),
        })
    }
}

/// A `consultation_form_fields` row.
#[derive(Debug, Clone, Queryable)]
pub struct FormFieldRow {
    pub row_id: i64,
    pub salon_id: String,
    pub field_id: String,
    pub field_type: String,
    pub label: String,
    pub required: i32,
    pub display_order: i32,
    pub options: Option<String>,
    pub accept: Option<String>,
    pub conditional_rules: Option<String>,
}

impl FormFieldRow {
    /// Decodes this row into the domain type.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the field type string or one of
    /// the JSON columns cannot be decoded.
    pub fn into_domain(self) -> Result<FormField, PersistenceError> {
        let field_type = FieldType::from_str(&self.field_type)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
        let options: Vec<String> = match self.options.as_deref() {
            Some(json) => serde_json::from_str(json)?,
            None => Vec::new(),
        };
        let conditional_rules: Vec<ConditionalRule> = match self.conditional_rules.as_deref() {
            Some(json) => serde_json::from_str(json)?,
            None => Vec::new(),
        };
        Ok(FormField {
            id: self.field_id,
            field_type,
            label: self.label,
            required: self.required != 0,
            order: self.display_order,
            options,
            accept: self.accept,
            conditional_rules,
        })
    }
}

/// An insertable `consultation_form_fields` row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = consultation_form_fields)]
pub struct NewFormFieldRow {
    pub salon_id: String,
    pub field_id: String,
    pub field_type: String,
    pub label: String,
    pub required: i32,
    pub display_order: i32,
    pub options: Option<String>,
    pub accept: Option<String>,
    pub conditional_rules: Option<String>,
}

impl NewFormFieldRow {
    /// Encodes a domain form field for storage under the given salon.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if a JSON column cannot be encoded.
    pub fn from_domain(salon_id: &str, field: &FormField) -> Result<Self, PersistenceError> {
        let options = if field.options.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&field.options)?)
        };
        let conditional_rules = if field.conditional_rules.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&field.conditional_rules)?)
        };
        Ok(Self {
            salon_id: salon_id.to_string(),
            field_id: field.id.clone(),
            field_type: field.field_type.as_str().to_string(),
            label: field.label.clone(),
            required: i32::from(field.required),
            display_order: field.order,
            options,
            accept: field.accept.clone(),
            conditional_rules,
        })
    }
}

/// An insertable `usage_metrics` row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = usage_metrics)]
pub struct NewUsageMetricRow {
    pub salon_id: String,
    pub kind: String,
    pub subject_id: String,
    pub occurred_at: String,
}

impl NewUsageMetricRow {
    /// Encodes a usage event for storage.
    #[must_use]
    pub fn from_event(event: &salon_desk_usage::UsageEvent) -> Self {
        Self {
            salon_id: event.salon_id.clone(),
            kind: event.kind.as_str().to_string(),
            subject_id: event.subject_id.clone(),
            occurred_at: event.occurred_at.to_rfc3339(),
        }
    }
}
