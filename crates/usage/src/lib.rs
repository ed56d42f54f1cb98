// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Usage metering and notification contracts for SalonDesk.
//!
//! Every new submission produces exactly one usage-metering increment and
//! at most one outbound notification. Both are best-effort side effects:
//! a metering or notification failure must never block the submission
//! itself from being recorded. Callers enforce that policy; this crate
//! only defines the types and the dispatch seam.

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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;

/// The billable event kinds tracked per salon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageKind {
    /// A public booking request was submitted.
    BookingSubmitted,
    /// A virtual-consultation form was submitted.
    ConsultationSubmitted,
}

impl UsageKind {
    /// Returns the wire string for this kind.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BookingSubmitted => "booking_submitted",
            Self::ConsultationSubmitted => "consultation_submitted",
        }
    }
}

impl FromStr for UsageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "booking_submitted" => Ok(Self::BookingSubmitted),
            "consultation_submitted" => Ok(Self::ConsultationSubmitted),
            _ => Err(format!("Unknown usage kind: {s}")),
        }
    }
}

/// One usage-metering increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEvent {
    /// The tenant salon the event bills against.
    pub salon_id: String,
    /// What happened.
    pub kind: UsageKind,
    /// The id of the record whose creation is being metered.
    pub subject_id: String,
    /// When the event occurred.
    pub occurred_at: DateTime<Utc>,
}

impl UsageEvent {
    /// Creates a new usage event stamped with the current time.
    #[must_use]
    pub fn new(salon_id: String, kind: UsageKind, subject_id: String) -> Self {
        Self {
            salon_id,
            kind,
            subject_id,
            occurred_at: Utc::now(),
        }
    }
}

/// An outbound notification to be dispatched after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The tenant salon the notification concerns.
    pub salon_id: String,
    /// Recipient address (email or phone, provider-dependent).
    pub recipient: String,
    /// Subject line or headline.
    pub subject: String,
    /// Message body.
    pub body: String,
}

/// Seam to the external email/SMS provider.
///
/// The provider integration itself is out of scope; implementations only
/// promise to attempt delivery once. Callers treat failure as loggable,
/// never fatal.
pub trait NotificationDispatch {
    /// Attempts to deliver one notification.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when delivery could not be
    /// attempted or was rejected by the provider.
    fn dispatch(&self, notification: &Notification) -> Result<(), String>;
}

/// Dispatcher that records the notification in the log and does nothing
/// else. Used in development and tests, and wherever no provider is
/// configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOnlyDispatch;

impl NotificationDispatch for LogOnlyDispatch {
    fn dispatch(&self, notification: &Notification) -> Result<(), String> {
        info!(
            salon_id = %notification.salon_id,
            recipient = %notification.recipient,
            subject = %notification.subject,
            "Notification dispatched (log only)"
        );
        Ok(())
    }
}
