// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::request::ClientInfo;

/// Validates a tenant salon identifier.
///
/// # Errors
///
/// Returns an error if the identifier is empty or whitespace-only.
pub fn validate_salon_id(salon_id: &str) -> Result<(), DomainError> {
    if salon_id.trim().is_empty() {
        return Err(DomainError::InvalidSalonId(String::from(
            "Salon id cannot be empty",
        )));
    }
    Ok(())
}

/// Validates the contact details on a public submission.
///
/// This checks presence and gross shape only; deliverability is the
/// notification collaborator's problem.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The email is empty or has no `@`
pub fn validate_client_info(info: &ClientInfo) -> Result<(), DomainError> {
    if info.name.trim().is_empty() {
        return Err(DomainError::InvalidClientName(String::from(
            "Name cannot be empty",
        )));
    }

    if info.email.trim().is_empty() {
        return Err(DomainError::InvalidClientEmail(String::from(
            "Email cannot be empty",
        )));
    }
    if !info.email.contains('@') {
        return Err(DomainError::InvalidClientEmail(String::from(
            "Email must contain '@'",
        )));
    }

    Ok(())
}
