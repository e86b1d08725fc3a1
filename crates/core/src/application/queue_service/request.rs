// Queue Service request types

use crate::domain::validation::{
    validate_contact_number, validate_email, validate_holder_name, validate_queue_name,
};
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};

/// Create queue request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQueueRequest {
    pub name: String,
}

impl CreateQueueRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_queue_name(&self.name)
    }
}

/// Enroll request (holder details only; queue id and number are assigned)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollRequest {
    pub name: String,

    #[serde(default)]
    pub contact_number: Option<String>,

    #[serde(default)]
    pub email_id: Option<String>,
}

impl EnrollRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_number: None,
            email_id: None,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_holder_name(&self.name)?;
        if let Some(contact) = &self.contact_number {
            validate_contact_number(contact)?;
        }
        if let Some(email) = &self.email_id {
            validate_email(email)?;
        }
        Ok(())
    }
}
