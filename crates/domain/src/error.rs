// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Booking status string is not recognized.
    InvalidBookingStatus(String),
    /// Consultation status string is not recognized.
    InvalidConsultationStatus(String),
    /// Form field type string is not recognized.
    InvalidFieldType(String),
    /// Salon identifier is empty or invalid.
    InvalidSalonId(String),
    /// Client name is empty or invalid.
    InvalidClientName(String),
    /// Client email is empty or invalid.
    InvalidClientEmail(String),
    /// Two form fields share the same identifier.
    DuplicateFieldId(String),
    /// Two form fields share the same order value.
    DuplicateFieldOrder {
        /// The field with the colliding order value.
        field_id: String,
        /// The colliding order value.
        order: i32,
    },
    /// A select field was defined without any options.
    MissingSelectOptions(String),
    /// A conditional rule reveals a field that does not exist in the schema.
    UnknownRuleTarget {
        /// The field declaring the rule.
        field_id: String,
        /// The unknown field id the rule tries to reveal.
        target: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBookingStatus(s) => write!(f, "Invalid booking status: {s}"),
            Self::InvalidConsultationStatus(s) => {
                write!(f, "Invalid consultation status: {s}")
            }
            Self::InvalidFieldType(s) => write!(f, "Invalid field type: {s}"),
            Self::InvalidSalonId(msg) => write!(f, "Invalid salon id: {msg}"),
            Self::InvalidClientName(msg) => write!(f, "Invalid client name: {msg}"),
            Self::InvalidClientEmail(msg) => write!(f, "Invalid client email: {msg}"),
            Self::DuplicateFieldId(id) => write!(f, "Duplicate form field id: {id}"),
            Self::DuplicateFieldOrder { field_id, order } => {
                write!(f, "Form field '{field_id}' reuses order value {order}")
            }
            Self::MissingSelectOptions(id) => {
                write!(f, "Select field '{id}' has no options")
            }
            Self::UnknownRuleTarget { field_id, target } => {
                write!(
                    f,
                    "Conditional rule on field '{field_id}' reveals unknown field '{target}'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
