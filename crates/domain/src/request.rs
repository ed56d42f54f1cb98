// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking and consultation records, and the unified tagged union.
//!
//! Bookings and consultations live in independent collections with
//! independent id namespaces. Any code that handles both must branch on the
//! [`UnifiedRequest`] variant before touching type-specific fields; ids
//! alone are never a sufficient key.

use crate::status::{BookingStatus, ConsultationStatus, PriorityTable};
use crate::timestamp::RawTimestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel URL prefix marking a consultation file whose upload failed.
///
/// Such entries must never be rendered as working links.
pub const UPLOAD_PENDING_PREFIX: &str = "placeholder://upload-pending/";

/// A client booking request for one salon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Opaque identifier assigned by the persistence layer.
    pub id: String,
    /// The tenant salon this request belongs to.
    pub salon_id: String,
    /// The client's name.
    pub client_name: String,
    /// The client's email address.
    pub client_email: String,
    /// The client's phone number.
    pub client_phone: String,
    /// Free-text summary of the selected service(s).
    pub service: String,
    /// Free text or a provider name.
    pub stylist_preference: String,
    /// Free-text date/time preference.
    pub date_time_preference: String,
    /// Optional free-text notes.
    pub notes: Option<String>,
    /// Whether the client opted into the waitlist.
    pub waitlist_opt_in: bool,
    /// True when staff created the request on a client's behalf.
    pub submitted_by_provider: bool,
    /// Current status.
    pub status: BookingStatus,
    /// Creation timestamp (heterogeneous wire form).
    pub created_at: RawTimestamp,
    /// Last-modification timestamp (heterogeneous wire form).
    pub updated_at: RawTimestamp,
}

impl BookingRequest {
    /// The initial status for a new booking request.
    ///
    /// Provider-created requests start in `provider-requested`; everything
    /// else starts in `pending`.
    #[must_use]
    pub const fn initial_status(submitted_by_provider: bool) -> BookingStatus {
        if submitted_by_provider {
            BookingStatus::ProviderRequested
        } else {
            BookingStatus::Pending
        }
    }
}

/// Contact details embedded in a consultation submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// The client's name.
    pub name: String,
    /// The client's email address.
    pub email: String,
    /// The client's phone number.
    pub phone: String,
}

/// A single answer in a consultation form.
///
/// Untagged: free text serializes as a string, multi-select answers as an
/// array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormAnswer {
    /// A free-text answer.
    Text(String),
    /// A multi-value answer.
    List(Vec<String>),
}

impl FormAnswer {
    /// Returns true if this answer matches a conditional trigger value.
    ///
    /// Text answers match by equality; list answers match when they contain
    /// the trigger value.
    #[must_use]
    pub fn matches_trigger(&self, trigger_value: &str) -> bool {
        match self {
            Self::Text(s) => s == trigger_value,
            Self::List(values) => values.iter().any(|v| v == trigger_value),
        }
    }
}

/// A file attached to a consultation submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationFile {
    /// The form field this file answers.
    pub field_id: String,
    /// Download URL, or an upload-pending placeholder.
    pub url: String,
    /// Original file name.
    pub name: String,
    /// File size in bytes.
    pub size: i64,
}

impl ConsultationFile {
    /// Returns true if this entry is an unresolved upload placeholder
    /// rather than a valid link.
    #[must_use]
    pub fn is_upload_pending(&self) -> bool {
        self.url.starts_with(UPLOAD_PENDING_PREFIX)
    }
}

/// A virtual-consultation form submission for one salon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationSubmission {
    /// Opaque identifier assigned by the persistence layer.
    pub id: String,
    /// The tenant salon this submission belongs to.
    pub salon_id: String,
    /// The client's contact details.
    pub client_info: ClientInfo,
    /// Answers keyed by form field id.
    pub form_data: BTreeMap<String, FormAnswer>,
    /// Uploaded files.
    pub files: Vec<ConsultationFile>,
    /// Current status.
    pub status: ConsultationStatus,
    /// Submission timestamp (heterogeneous wire form).
    pub submitted_at: RawTimestamp,
    /// Creation timestamp (heterogeneous wire form).
    pub created_at: RawTimestamp,
    /// Last-modification timestamp (heterogeneous wire form).
    pub updated_at: RawTimestamp,
}

/// One element of the unified request queue.
///
/// The variant is the authoritative type tag: consumers must match on it
/// before accessing type-specific fields. Serialized form carries a
/// `requestType` discriminant of `"booking"` or `"consultation"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "requestType", rename_all = "camelCase")]
pub enum UnifiedRequest {
    /// A booking request.
    Booking(BookingRequest),
    /// A consultation submission.
    Consultation(ConsultationSubmission),
}

impl UnifiedRequest {
    /// Returns the type tag string (`"booking"` or `"consultation"`).
    #[must_use]
    pub const fn request_type(&self) -> &'static str {
        match self {
            Self::Booking(_) => "booking",
            Self::Consultation(_) => "consultation",
        }
    }

    /// Returns the record id.
    ///
    /// Ids are only unique within a variant's backing collection; use
    /// [`Self::request_type`] alongside the id when identifying an item.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Booking(b) => &b.id,
            Self::Consultation(c) => &c.id,
        }
    }

    /// Returns the wire string of the item's own status.
    #[must_use]
    pub const fn status_key(&self) -> &'static str {
        match self {
            Self::Booking(b) => b.status.as_str(),
            Self::Consultation(c) => c.status.as_str(),
        }
    }

    /// Returns the sort priority under the given table.
    #[must_use]
    pub const fn priority(&self, table: &PriorityTable) -> u8 {
        match self {
            Self::Booking(b) => table.booking(b.status),
            Self::Consultation(c) => table.consultation(c.status),
        }
    }

    /// Returns the normalized recency date used as the secondary sort key.
    ///
    /// Bookings use `created_at`; consultations use `submitted_at`.
    #[must_use]
    pub fn recency(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Booking(b) => b.created_at.normalized(),
            Self::Consultation(c) => c.submitted_at.normalized(),
        }
    }

    /// Returns the normalized last-modification date.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Booking(b) => b.updated_at.normalized(),
            Self::Consultation(c) => c.updated_at.normalized(),
        }
    }

    /// Returns the client's name.
    #[must_use]
    pub fn client_name(&self) -> &str {
        match self {
            Self::Booking(b) => &b.client_name,
            Self::Consultation(c) => &c.client_info.name,
        }
    }

    /// Returns the client's email address.
    #[must_use]
    pub fn client_email(&self) -> &str {
        match self {
            Self::Booking(b) => &b.client_email,
            Self::Consultation(c) => &c.client_info.email,
        }
    }

    /// Returns true if this item is in its vocabulary's `pending` state.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        match self {
            Self::Booking(b) => matches!(b.status, BookingStatus::Pending),
            Self::Consultation(c) => matches!(c.status, ConsultationStatus::Pending),
        }
    }
}
