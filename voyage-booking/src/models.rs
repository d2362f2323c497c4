use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voyage_core::money::Cents;
use voyage_core::{DomainError, DomainResult};

/// Hotel stays are bounded to a year.
pub const NIGHTS_MIN: u32 = 1;
pub const NIGHTS_MAX: u32 = 365;

/// Booking status in the lifecycle. CANCELLED and COMPLETED are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Completed => "COMPLETED",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }
}

/// Type discriminator of a booking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingType {
    Flight,
    Hotel,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatClass {
    Economy,
    Business,
    FirstClass,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Presidential,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightDetails {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub seat_class: SeatClass,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotelDetails {
    pub hotel_name: String,
    pub room_type: RoomType,
    pub nights: u32,
}

/// Type-specific payload of a booking. Chosen at creation, immutable
/// afterwards; the enum tag is the type discriminator, so a booking can
/// never carry the wrong extension or more than one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingDetails {
    Flight(FlightDetails),
    Hotel(HotelDetails),
}

impl BookingDetails {
    pub fn booking_type(&self) -> BookingType {
        match self {
            BookingDetails::Flight(_) => BookingType::Flight,
            BookingDetails::Hotel(_) => BookingType::Hotel,
        }
    }
}

/// A reserved flight or hotel stay owned by a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub booking_date: NaiveDate,
    pub total_price_cents: Cents,
    pub status: BookingStatus,
    pub details: BookingDetails,
    pub created_at: DateTime<Utc>,
}

/// Fully-specified parameters for a flight booking (no builder;
/// defaults like status=PENDING are applied inside the constructor).
#[derive(Debug, Clone, Deserialize)]
pub struct FlightBookingParams {
    pub customer_id: Uuid,
    pub booking_date: NaiveDate,
    pub total_price_cents: Cents,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub seat_class: SeatClass,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HotelBookingParams {
    pub customer_id: Uuid,
    pub booking_date: NaiveDate,
    pub total_price_cents: Cents,
    pub hotel_name: String,
    pub room_type: RoomType,
    pub nights: u32,
}

impl Booking {
    /// Validate and construct a PENDING flight booking. All-or-nothing:
    /// a failed check constructs nothing.
    pub fn flight(params: FlightBookingParams) -> DomainResult<Self> {
        require_non_empty("flight_number", &params.flight_number)?;
        require_non_empty("origin", &params.origin)?;
        require_non_empty("destination", &params.destination)?;

        Self::create(
            params.customer_id,
            params.booking_date,
            params.total_price_cents,
            BookingDetails::Flight(FlightDetails {
                flight_number: params.flight_number,
                origin: params.origin,
                destination: params.destination,
                seat_class: params.seat_class,
            }),
        )
    }

    /// Validate and construct a PENDING hotel booking.
    pub fn hotel(params: HotelBookingParams) -> DomainResult<Self> {
        require_non_empty("hotel_name", &params.hotel_name)?;
        if !(NIGHTS_MIN..=NIGHTS_MAX).contains(&params.nights) {
            return Err(DomainError::invalid_input(
                "nights",
                format!(
                    "must be between {NIGHTS_MIN} and {NIGHTS_MAX}, got {}",
                    params.nights
                ),
            ));
        }

        Self::create(
            params.customer_id,
            params.booking_date,
            params.total_price_cents,
            BookingDetails::Hotel(HotelDetails {
                hotel_name: params.hotel_name,
                room_type: params.room_type,
                nights: params.nights,
            }),
        )
    }

    fn create(
        customer_id: Uuid,
        booking_date: NaiveDate,
        total_price_cents: Cents,
        details: BookingDetails,
    ) -> DomainResult<Self> {
        if total_price_cents < 0 {
            return Err(DomainError::invalid_input(
                "total_price",
                format!("must not be negative, got {total_price_cents} cents"),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            customer_id,
            booking_date,
            total_price_cents,
            status: BookingStatus::Pending,
            details,
            created_at: Utc::now(),
        })
    }

    pub fn booking_type(&self) -> BookingType {
        self.details.booking_type()
    }
}

fn require_non_empty(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        Err(DomainError::invalid_input(field, "must not be empty"))
    } else {
        Ok(())
    }
}
