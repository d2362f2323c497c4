use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voyage_core::{DomainError, DomainResult};

/// A named grouping of one customer's bookings under a single discount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPackage {
    pub id: Uuid,
    pub name: String,
    pub customer_id: Uuid,
    pub discount_percent: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageParams {
    pub name: String,
    pub customer_id: Uuid,
    pub discount_percent: f64,
}

/// Membership row of the package/booking many-to-many association,
/// unique per (package_id, booking_id) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageBooking {
    pub package_id: Uuid,
    pub booking_id: Uuid,
    pub added_at: DateTime<Utc>,
}

impl TravelPackage {
    pub fn new(params: PackageParams) -> DomainResult<Self> {
        if params.name.trim().is_empty() {
            return Err(DomainError::invalid_input("name", "must not be empty"));
        }
        // NaN fails the range check and is rejected with the rest.
        if !(0.0..=100.0).contains(&params.discount_percent) {
            return Err(DomainError::invalid_input(
                "discount_percent",
                format!("must be between 0 and 100, got {}", params.discount_percent),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: params.name,
            customer_id: params.customer_id,
            discount_percent: params.discount_percent,
            created_at: Utc::now(),
        })
    }
}
