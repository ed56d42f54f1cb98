// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use salon_desk_domain::DomainError;
use salon_desk_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into the API error contract.
///
/// Input-shaped failures become `InvalidInput`; schema validation
/// failures become `DomainRuleViolation`.
#[must_use]
pub fn translate_domain_error(err: &DomainError) -> ApiError {
    match err {
        DomainError::InvalidSalonId(_) => ApiError::InvalidInput {
            field: String::from("salonId"),
            message: err.to_string(),
        },
        DomainError::InvalidClientName(_) => ApiError::InvalidInput {
            field: String::from("clientName"),
            message: err.to_string(),
        },
        DomainError::InvalidClientEmail(_) => ApiError::InvalidInput {
            field: String::from("clientEmail"),
            message: err.to_string(),
        },
        DomainError::InvalidBookingStatus(_) | DomainError::InvalidConsultationStatus(_) => {
            ApiError::InvalidInput {
                field: String::from("status"),
                message: err.to_string(),
            }
        }
        DomainError::InvalidFieldType(_) => ApiError::InvalidInput {
            field: String::from("type"),
            message: err.to_string(),
        },
        DomainError::DuplicateFieldId(_)
        | DomainError::DuplicateFieldOrder { .. }
        | DomainError::MissingSelectOptions(_)
        | DomainError::UnknownRuleTarget { .. } => ApiError::DomainRuleViolation {
            rule: String::from("form_schema"),
            message: err.to_string(),
        },
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::BookingNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Booking request"),
                message: id,
            },
            PersistenceError::ConsultationNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Consultation"),
                message: id,
            },
            PersistenceError::NotFound(message) => Self::ResourceNotFound {
                resource_type: String::from("Resource"),
                message,
            },
            _ => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}
