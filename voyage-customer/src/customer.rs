use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voyage_core::{DomainError, DomainResult};

/// A customer owning bookings and packages. Identity is immutable after
/// creation; contact fields change only through [`ContactUpdate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub passport_number: String,
    pub created_at: DateTime<Utc>,
}

/// Fully-specified creation parameters (no builder).
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub passport_number: String,
}

/// Mutable-contact-fields patch; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactUpdate {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub passport_number: Option<String>,
}

impl ContactUpdate {
    /// Field-shape validation only; email uniqueness is the store's job.
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

impl Customer {
    pub fn new(params: CustomerParams) -> DomainResult<Self> {
        if params.name.trim().is_empty() {
            return Err(DomainError::invalid_input("name", "must not be empty"));
        }
        validate_email(&params.email)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: params.name,
            email: params.email,
            phone: params.phone,
            passport_number: params.passport_number,
            created_at: Utc::now(),
        })
    }

    /// Apply an already-validated contact patch.
    pub fn apply_contact_update(&mut self, update: ContactUpdate) {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(passport_number) = update.passport_number {
            self.passport_number = passport_number;
        }
    }
}

/// Basic RFC-shaped check: one `@`, non-empty local part, dotted domain.
/// Full RFC 5322 parsing stays the transport layer's problem.
pub fn validate_email(email: &str) -> DomainResult<()> {
    let shaped = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    };

    if shaped {
        Ok(())
    } else {
        Err(DomainError::invalid_input(
            "email",
            format!("not a valid address: {email}"),
        ))
    }
}
