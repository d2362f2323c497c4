use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Booking, FlightBookingParams, HotelBookingParams};
use voyage_core::DomainResult;

/// Repository trait for booking data access. Status transitions must be
/// atomic check-and-set against the stored record: two concurrent
/// requests serialize, and the loser observes `InvalidStateTransition`.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create_flight_booking(&self, params: FlightBookingParams) -> DomainResult<Booking>;

    async fn create_hotel_booking(&self, params: HotelBookingParams) -> DomainResult<Booking>;

    async fn get_booking(&self, id: Uuid) -> DomainResult<Booking>;

    async fn confirm_booking(&self, id: Uuid) -> DomainResult<Booking>;

    async fn cancel_booking(&self, id: Uuid) -> DomainResult<Booking>;

    async fn complete_booking(&self, id: Uuid) -> DomainResult<Booking>;

    /// Deletes the booking together with its type-specific payload and
    /// every package membership row, as one unit.
    async fn delete_booking(&self, id: Uuid) -> DomainResult<()>;

    async fn list_customer_bookings(&self, customer_id: Uuid) -> DomainResult<Vec<Booking>>;
}
