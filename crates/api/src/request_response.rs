// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.
//!
//! These types define the wire contract. They use camelCase field names
//! to match the JSON the intake forms and admin dashboard exchange.

use salon_desk_domain::{
    BookingStatus, ConsultationFile, ConsultationStatus, FormAnswer, FormField, UnifiedRequest,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A public booking request submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBookingRequest {
    /// The client's name.
    pub client_name: String,
    /// The client's email address.
    pub client_email: String,
    /// The client's phone number.
    pub client_phone: String,
    /// The requested service, free text.
    pub service: String,
    /// Preferred stylist, free text.
    pub stylist_preference: String,
    /// Preferred date and time, free text.
    pub date_time_preference: String,
    /// Optional free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Whether the client opted into the waitlist.
    #[serde(default)]
    pub waitlist_opt_in: bool,
    /// Whether a provider created this request on the client's behalf.
    #[serde(default)]
    pub submitted_by_provider: bool,
}

/// Response to a booking request submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBookingResponse {
    /// The generated request ID.
    pub id: String,
    /// The status the request was created in.
    pub status: BookingStatus,
    /// A success message.
    pub message: String,
}

/// A public consultation submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitConsultationRequest {
    /// The client's name.
    pub client_name: String,
    /// The client's email address.
    pub client_email: String,
    /// The client's phone number.
    pub client_phone: String,
    /// Answers keyed by form field ID.
    #[serde(default)]
    pub form_data: BTreeMap<String, FormAnswer>,
    /// Uploaded file references, possibly upload-pending placeholders.
    #[serde(default)]
    pub files: Vec<ConsultationFile>,
}

/// Response to a consultation submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitConsultationResponse {
    /// The generated consultation ID.
    pub id: String,
    /// The status the consultation was created in.
    pub status: ConsultationStatus,
    /// A success message.
    pub message: String,
}

/// The merged, ordered, filtered request queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedRequestsResponse {
    /// The queue in priority order.
    pub requests: Vec<UnifiedRequest>,
    /// Number of items after filtering.
    pub total: usize,
}

/// The dashboard bucket view of the queue.
///
/// Buckets overlap; the same item may appear in more than one list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketedRequestsResponse {
    /// Items with status `pending`.
    pub pending: Vec<UnifiedRequest>,
    /// Items with status `provider-requested`.
    pub provider_requested: Vec<UnifiedRequest>,
    /// Items with status `contacted`.
    pub contacted: Vec<UnifiedRequest>,
    /// Non-pending items updated within the recency window.
    pub recently_completed: Vec<UnifiedRequest>,
}

/// A booking status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
    /// The target status.
    pub status: BookingStatus,
}

/// A consultation status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConsultationStatusRequest {
    /// The target status.
    pub status: ConsultationStatus,
}

/// Response to a status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusResponse {
    /// The ID of the changed record.
    pub id: String,
    /// The status it now carries.
    pub status: String,
    /// A success message.
    pub message: String,
}

/// A salon's consultation form schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchemaResponse {
    /// The fields in display order.
    pub fields: Vec<FormField>,
}

/// A wholesale form schema replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceFormSchemaRequest {
    /// The new fields. The previous schema is discarded entirely.
    pub fields: Vec<FormField>,
}

/// One usage counter in a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageCountInfo {
    /// The metered event kind.
    pub kind: String,
    /// How many events of this kind were recorded.
    pub count: i64,
}

/// A salon's usage summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummaryResponse {
    /// The salon the counts belong to.
    pub salon_id: String,
    /// Per-kind event counts. Kinds with no events are absent.
    pub counts: Vec<UsageCountInfo>,
}
