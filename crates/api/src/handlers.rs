// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for intake, the unified queue, status changes,
//! form schemas, and usage summaries.
//!
//! Handlers own the transaction script for each operation: validate
//! input, call the persistence adapter, run the pure queue engine, and
//! shape the response. Side effects of intake (usage metering and the
//! owner notification) are best-effort and never fail the submission.

use chrono::Utc;
use salon_desk::{
    FilterCriteria, RequestBuckets, filter_requests, merge_requests, partition_by_bucket,
};
use salon_desk_domain::{
    BookingRequest, BookingStatus, ClientInfo, ConsultationStatus, ConsultationSubmission,
    PriorityTable, RawTimestamp, UnifiedRequest, validate_client_info, validate_salon_id,
    validate_schema,
};
use salon_desk_persistence::{Persistence, generate_request_id};
use salon_desk_usage::{Notification, NotificationDispatch, UsageEvent, UsageKind};
use tracing::warn;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    AggregatedRequestsResponse, BucketedRequestsResponse, FormSchemaResponse,
    ReplaceFormSchemaRequest, SubmitBookingRequest, SubmitBookingResponse,
    SubmitConsultationRequest, SubmitConsultationResponse, UpdateStatusResponse, UsageCountInfo,
    UsageSummaryResponse,
};

/// Builds the unified request queue for a salon.
///
/// Bookings and consultations are fetched separately; if either fetch
/// fails the whole operation fails. A partially merged queue is never
/// returned. The merged queue is ordered by priority then recency, and
/// the criteria are applied after ordering.
///
/// # Errors
///
/// Returns an error if either source fetch fails.
pub fn aggregate_requests(
    persistence: &mut Persistence,
    salon_id: &str,
    criteria: &FilterCriteria,
    priorities: &PriorityTable,
) -> Result<AggregatedRequestsResponse, ApiError> {
    let bookings: Vec<BookingRequest> = persistence.bookings_for_salon(salon_id)?;
    let consultations: Vec<ConsultationSubmission> =
        persistence.consultations_for_salon(salon_id)?;

    let merged: Vec<UnifiedRequest> = merge_requests(bookings, consultations, priorities);
    let requests: Vec<UnifiedRequest> = filter_requests(&merged, criteria);
    let total: usize = requests.len();

    Ok(AggregatedRequestsResponse { requests, total })
}

/// Builds the dashboard bucket view of a salon's queue.
///
/// Buckets are computed over the unfiltered merged queue.
///
/// # Errors
///
/// Returns an error if either source fetch fails.
pub fn bucketed_requests(
    persistence: &mut Persistence,
    salon_id: &str,
    priorities: &PriorityTable,
    now: chrono::DateTime<Utc>,
) -> Result<BucketedRequestsResponse, ApiError> {
    let bookings: Vec<BookingRequest> = persistence.bookings_for_salon(salon_id)?;
    let consultations: Vec<ConsultationSubmission> =
        persistence.consultations_for_salon(salon_id)?;

    let merged: Vec<UnifiedRequest> = merge_requests(bookings, consultations, priorities);
    let buckets: RequestBuckets = partition_by_bucket(&merged, now);

    Ok(BucketedRequestsResponse {
        pending: buckets.pending,
        provider_requested: buckets.provider_requested,
        contacted: buckets.contacted,
        recently_completed: buckets.recently_completed,
    })
}

/// Accepts a public booking request submission.
///
/// Provider-created requests start in `provider-requested`, everything
/// else in `pending`. After the insert succeeds, a usage event is
/// recorded and one owner notification is dispatched; both are
/// best-effort and a failure in either never fails the submission.
///
/// # Errors
///
/// Returns an error if validation fails or the insert fails.
pub fn submit_booking_request(
    persistence: &mut Persistence,
    dispatch: &dyn NotificationDispatch,
    salon_id: &str,
    request: SubmitBookingRequest,
) -> Result<SubmitBookingResponse, ApiError> {
    validate_salon_id(salon_id).map_err(|e| translate_domain_error(&e))?;
    validate_client_info(&ClientInfo {
        name: request.client_name.clone(),
        email: request.client_email.clone(),
        phone: request.client_phone.clone(),
    })
    .map_err(|e| translate_domain_error(&e))?;

    let id: String = generate_request_id();
    let status: BookingStatus = BookingRequest::initial_status(request.submitted_by_provider);
    let now: RawTimestamp = RawTimestamp::from_datetime(Utc::now());

    let booking = BookingRequest {
        id: id.clone(),
        salon_id: salon_id.to_string(),
        client_name: request.client_name.clone(),
        client_email: request.client_email,
        client_phone: request.client_phone,
        service: request.service.clone(),
        stylist_preference: request.stylist_preference,
        date_time_preference: request.date_time_preference,
        notes: request.notes,
        waitlist_opt_in: request.waitlist_opt_in,
        submitted_by_provider: request.submitted_by_provider,
        status,
        created_at: now.clone(),
        updated_at: now,
    };

    persistence.insert_booking(&booking)?;

    record_intake_side_effects(
        persistence,
        dispatch,
        salon_id,
        UsageKind::BookingSubmitted,
        &id,
        "New booking request",
        &format!("{} requested {}", request.client_name, request.service),
    );

    Ok(SubmitBookingResponse {
        id,
        status,
        message: String::from("Booking request submitted"),
    })
}

/// Accepts a public consultation submission.
///
/// Consultations always start in `pending`. Files may carry
/// upload-pending placeholder URLs; they are stored as-is.
///
/// # Errors
///
/// Returns an error if validation fails or the insert fails.
pub fn submit_consultation(
    persistence: &mut Persistence,
    dispatch: &dyn NotificationDispatch,
    salon_id: &str,
    request: SubmitConsultationRequest,
) -> Result<SubmitConsultationResponse, ApiError> {
    validate_salon_id(salon_id).map_err(|e| translate_domain_error(&e))?;

    let client_info = ClientInfo {
        name: request.client_name.clone(),
        email: request.client_email,
        phone: request.client_phone,
    };
    validate_client_info(&client_info).map_err(|e| translate_domain_error(&e))?;

    let id: String = generate_request_id();
    let now: RawTimestamp = RawTimestamp::from_datetime(Utc::now());

    let consultation = ConsultationSubmission {
        id: id.clone(),
        salon_id: salon_id.to_string(),
        client_info,
        form_data: request.form_data,
        files: request.files,
        status: ConsultationStatus::Pending,
        submitted_at: now.clone(),
        created_at: now.clone(),
        updated_at: now,
    };

    persistence.insert_consultation(&consultation)?;

    record_intake_side_effects(
        persistence,
        dispatch,
        salon_id,
        UsageKind::ConsultationSubmitted,
        &id,
        "New consultation",
        &format!("{} submitted a consultation", request.client_name),
    );

    Ok(SubmitConsultationResponse {
        id,
        status: ConsultationStatus::Pending,
        message: String::from("Consultation submitted"),
    })
}

/// Records the usage event and dispatches the single owner notification
/// for a successful intake.
///
/// Both side effects are best-effort. Failures are logged and swallowed;
/// the submission has already been persisted and must not be failed
/// retroactively.
fn record_intake_side_effects(
    persistence: &mut Persistence,
    dispatch: &dyn NotificationDispatch,
    salon_id: &str,
    kind: UsageKind,
    subject_id: &str,
    subject: &str,
    body: &str,
) {
    let event = UsageEvent::new(salon_id.to_string(), kind, subject_id.to_string());
    if let Err(e) = persistence.record_usage(&event) {
        warn!(
            salon_id = %salon_id,
            subject_id = %subject_id,
            "Failed to record usage event: {e}"
        );
    }

    let notification = Notification {
        salon_id: salon_id.to_string(),
        recipient: format!("{salon_id}/owner"),
        subject: subject.to_string(),
        body: body.to_string(),
    };
    if let Err(reason) = dispatch.dispatch(&notification) {
        warn!(
            salon_id = %salon_id,
            subject_id = %subject_id,
            "Failed to dispatch notification: {reason}"
        );
    }
}

/// Changes the status of a booking request.
///
/// Any target status is accepted from any current status; the dashboard
/// is trusted to drive sensible transitions. `updated_at` is refreshed
/// to the current time.
///
/// # Errors
///
/// Returns an error if the request does not exist in this salon.
pub fn set_booking_status(
    persistence: &mut Persistence,
    salon_id: &str,
    booking_id: &str,
    status: BookingStatus,
) -> Result<UpdateStatusResponse, ApiError> {
    let updated_at: String = Utc::now().to_rfc3339();
    persistence.update_booking_status(salon_id, booking_id, status, &updated_at)?;

    Ok(UpdateStatusResponse {
        id: booking_id.to_string(),
        status: status.as_str().to_string(),
        message: String::from("Booking request status updated"),
    })
}

/// Changes the status of a consultation.
///
/// # Errors
///
/// Returns an error if the consultation does not exist in this salon.
pub fn set_consultation_status(
    persistence: &mut Persistence,
    salon_id: &str,
    consultation_id: &str,
    status: ConsultationStatus,
) -> Result<UpdateStatusResponse, ApiError> {
    let updated_at: String = Utc::now().to_rfc3339();
    persistence.update_consultation_status(salon_id, consultation_id, status, &updated_at)?;

    Ok(UpdateStatusResponse {
        id: consultation_id.to_string(),
        status: status.as_str().to_string(),
        message: String::from("Consultation status updated"),
    })
}

/// Retrieves a salon's consultation form schema.
///
/// An empty field list means no custom schema is configured; the
/// intake form falls back to its built-in default.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_form_schema(
    persistence: &mut Persistence,
    salon_id: &str,
) -> Result<FormSchemaResponse, ApiError> {
    let fields = persistence.form_schema(salon_id)?;
    Ok(FormSchemaResponse { fields })
}

/// Replaces a salon's consultation form schema wholesale.
///
/// The schema is validated before anything is written: field IDs and
/// orders must be unique, `select` fields need options, and every
/// conditional rule target must name a field in the schema.
///
/// # Errors
///
/// Returns an error if validation fails or the replace fails.
pub fn replace_form_schema(
    persistence: &mut Persistence,
    salon_id: &str,
    request: ReplaceFormSchemaRequest,
) -> Result<FormSchemaResponse, ApiError> {
    validate_salon_id(salon_id).map_err(|e| translate_domain_error(&e))?;
    validate_schema(&request.fields).map_err(|e| translate_domain_error(&e))?;

    persistence.replace_form_schema(salon_id, &request.fields)?;

    let fields = persistence.form_schema(salon_id)?;
    Ok(FormSchemaResponse { fields })
}

/// Retrieves a salon's usage summary.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_usage_summary(
    persistence: &mut Persistence,
    salon_id: &str,
) -> Result<UsageSummaryResponse, ApiError> {
    let mut counts: Vec<UsageCountInfo> = persistence
        .usage_counts(salon_id)?
        .into_iter()
        .map(|(kind, count)| UsageCountInfo {
            kind: kind.as_str().to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| a.kind.cmp(&b.kind));

    Ok(UsageSummaryResponse {
        salon_id: salon_id.to_string(),
        counts,
    })
}
