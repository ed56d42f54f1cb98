// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for SalonDesk.
//!
//! This crate defines the operations the presentation layer calls:
//! public intake of booking requests and consultations, the unified
//! admin queue with filtering and buckets, status changes, form schema
//! management, and usage summaries.
//!
//! Handlers are plain functions over the persistence adapter. HTTP
//! concerns (routing, status codes, JSON extraction) live in the server
//! crate; this crate's error type is transport-agnostic.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod handlers;
pub mod request_response;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;

pub use error::{ApiError, translate_domain_error};
pub use handlers::{
    aggregate_requests, bucketed_requests, get_form_schema, get_usage_summary,
    replace_form_schema, set_booking_status, set_consultation_status, submit_booking_request,
    submit_consultation,
};
pub use request_response::{
    AggregatedRequestsResponse, BucketedRequestsResponse, FormSchemaResponse,
    ReplaceFormSchemaRequest, SubmitBookingRequest, SubmitBookingResponse,
    SubmitConsultationRequest, SubmitConsultationResponse, UpdateBookingStatusRequest,
    UpdateConsultationStatusRequest, UpdateStatusResponse, UsageCountInfo, UsageSummaryResponse,
};
