// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request status vocabularies and the sort-priority table.
//!
//! Booking and consultation statuses are independent vocabularies that only
//! overlap conceptually (`contacted` and `reviewed` share a priority tier).
//! Status transitions are staff-initiated and unconstrained: any status in a
//! vocabulary is reachable from any other.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status states for a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    /// Newly submitted, nobody has acted on it yet.
    #[default]
    Pending,
    /// Staff reached out to the client.
    Contacted,
    /// An appointment was made.
    Booked,
    /// The request was closed without an appointment.
    NotBooked,
    /// Created by a provider on a client's behalf.
    ProviderRequested,
}

impl BookingStatus {
    /// Returns the wire string for this status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Contacted => "contacted",
            Self::Booked => "booked",
            Self::NotBooked => "not-booked",
            Self::ProviderRequested => "provider-requested",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "contacted" => Ok(Self::Contacted),
            "booked" => Ok(Self::Booked),
            "not-booked" => Ok(Self::NotBooked),
            "provider-requested" => Ok(Self::ProviderRequested),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status states for a consultation submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultationStatus {
    /// Newly submitted, not yet looked at.
    #[default]
    Pending,
    /// Staff reviewed the submission.
    Reviewed,
}

impl ConsultationStatus {
    /// Returns the wire string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
        }
    }
}

impl FromStr for ConsultationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "reviewed" => Ok(Self::Reviewed),
            _ => Err(DomainError::InvalidConsultationStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort-priority table for the unified request queue.
///
/// Higher values sort first. The table is an explicit value rather than
/// inline match arms so callers can override individual tiers without
/// touching the aggregation logic.
///
/// Defaults: `pending` 4, `provider-requested` 3, `contacted`/`reviewed` 2,
/// everything else (`booked`, `not-booked`) 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityTable {
    /// Priority for `pending` (both vocabularies).
    pub pending: u8,
    /// Priority for `provider-requested` bookings.
    pub provider_requested: u8,
    /// Priority for `contacted` bookings.
    pub contacted: u8,
    /// Priority for `reviewed` consultations. Shares the `contacted` tier
    /// by default.
    pub reviewed: u8,
    /// Priority for everything else (`booked`, `not-booked`).
    pub completed: u8,
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self {
            pending: 4,
            provider_requested: 3,
            contacted: 2,
            reviewed: 2,
            completed: 1,
        }
    }
}

impl PriorityTable {
    /// Returns the priority tier for a booking status.
    #[must_use]
    pub const fn booking(&self, status: BookingStatus) -> u8 {
        match status {
            BookingStatus::Pending => self.pending,
            BookingStatus::ProviderRequested => self.provider_requested,
            BookingStatus::Contacted => self.contacted,
            BookingStatus::Booked | BookingStatus::NotBooked => self.completed,
        }
    }

    /// Returns the priority tier for a consultation status.
    #[must_use]
    pub const fn consultation(&self, status: ConsultationStatus) -> u8 {
        match status {
            ConsultationStatus::Pending => self.pending,
            ConsultationStatus::Reviewed => self.reviewed,
        }
    }
}
