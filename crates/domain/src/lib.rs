// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod form_schema;
mod request;
mod status;
mod timestamp;
mod validation;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;

pub use error::DomainError;
pub use form_schema::{
    ConditionalRule, FieldType, FormField, resolve_visible_fields, validate_schema,
};
pub use request::{
    BookingRequest, ClientInfo, ConsultationFile, ConsultationSubmission, FormAnswer,
    UPLOAD_PENDING_PREFIX, UnifiedRequest,
};
pub use status::{BookingStatus, ConsultationStatus, PriorityTable};
pub use timestamp::{RawTimestamp, UNKNOWN_DATE_LABEL, display_date, normalize_timestamp};
pub use validation::{validate_client_info, validate_salon_id};
