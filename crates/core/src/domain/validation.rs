// Input validation for queue and holder details

use crate::domain::error::{DomainError, Result};

pub const MAX_NAME_LEN: usize = 64;
pub const MAX_CONTACT_LEN: usize = 20;
pub const MAX_EMAIL_LEN: usize = 254;

pub fn validate_queue_name(name: &str) -> Result<()> {
    check_name(name).map_err(DomainError::InvalidQueueName)
}

pub fn validate_holder_name(name: &str) -> Result<()> {
    check_name(name).map_err(DomainError::InvalidHolderName)
}

/// Digits, spaces, `+` and `-` only
pub fn validate_contact_number(contact: &str) -> Result<()> {
    if contact.trim().is_empty() {
        return Err(DomainError::InvalidContactNumber(
            "contact number is empty".to_string(),
        ));
    }
    if contact.len() > MAX_CONTACT_LEN {
        return Err(DomainError::InvalidContactNumber(format!(
            "contact number too long (max {} chars)",
            MAX_CONTACT_LEN
        )));
    }
    if !contact
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-'))
    {
        return Err(DomainError::InvalidContactNumber(format!(
            "unexpected characters in '{}'",
            contact
        )));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<()> {
    if email.len() > MAX_EMAIL_LEN {
        return Err(DomainError::InvalidEmail(format!(
            "email too long (max {} chars)",
            MAX_EMAIL_LEN
        )));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(DomainError::InvalidEmail(format!(
            "'{}' is not an email address",
            email
        ))),
    }
}

fn check_name(name: &str) -> std::result::Result<(), String> {
    if name.trim().is_empty() {
        return Err("name is empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(format!("name too long (max {} chars)", MAX_NAME_LEN));
    }
    if name.chars().any(char::is_control) {
        return Err("name contains control characters".to_string());
    }
    Ok(())
}
