// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salon_desk_domain::UnifiedRequest;

/// Restricts the queue by the tagged-union discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestTypeFilter {
    /// Both bookings and consultations.
    #[default]
    All,
    /// Bookings only.
    Bookings,
    /// Consultations only.
    Consultations,
}

impl RequestTypeFilter {
    /// Parses the wire value (`all`, `bookings`, `consultations`).
    ///
    /// Unknown values fall back to `All`; the filter dropdown is
    /// permissive rather than strict.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "bookings" => Self::Bookings,
            "consultations" => Self::Consultations,
            _ => Self::All,
        }
    }

    const fn admits(self, request: &UnifiedRequest) -> bool {
        match self {
            Self::All => true,
            Self::Bookings => matches!(request, UnifiedRequest::Booking(_)),
            Self::Consultations => matches!(request, UnifiedRequest::Consultation(_)),
        }
    }
}

/// Filter criteria for the unified queue.
///
/// All criteria are conjunctive; an unset criterion admits everything.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring search. Matches name and email for all
    /// items; additionally service text and notes for bookings, and phone
    /// digits plus the literal phrase "virtual consultation" for
    /// consultations.
    pub search_term: Option<String>,
    /// Variant restriction.
    pub request_type: RequestTypeFilter,
    /// Literal status match against the item's own vocabulary. Selecting
    /// `contacted` does NOT also surface `reviewed` consultations; the two
    /// vocabularies only share a priority tier, never a filter value.
    pub status: Option<String>,
}

/// Applies filter criteria to an aggregated queue.
///
/// Filtering is pure and order-preserving (removal only), and therefore
/// idempotent: applying the same criteria twice yields the same result.
#[must_use]
pub fn filter_requests(
    requests: &[UnifiedRequest],
    criteria: &FilterCriteria,
) -> Vec<UnifiedRequest> {
    let needle: Option<String> = criteria
        .search_term
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    requests
        .iter()
        .filter(|request| criteria.request_type.admits(request))
        .filter(|request| {
            criteria
                .status
                .as_deref()
                .is_none_or(|status| request.status_key() == status)
        })
        .filter(|request| {
            needle
                .as_deref()
                .is_none_or(|needle| matches_search(request, needle))
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring match over an item's searchable text.
fn matches_search(request: &UnifiedRequest, needle: &str) -> bool {
    if request.client_name().to_lowercase().contains(needle)
        || request.client_email().to_lowercase().contains(needle)
    {
        return true;
    }

    match request {
        UnifiedRequest::Booking(b) => {
            b.service.to_lowercase().contains(needle)
                || b.notes
                    .as_deref()
                    .is_some_and(|notes| notes.to_lowercase().contains(needle))
        }
        UnifiedRequest::Consultation(c) => {
            c.client_info.phone.contains(needle) || "virtual consultation".contains(needle)
        }
    }
}
