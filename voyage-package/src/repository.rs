use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{PackageBooking, PackageParams, TravelPackage};
use crate::summary::PackageSummary;
use voyage_booking::Booking;
use voyage_core::DomainResult;

/// Repository trait for package data access and aggregation. Deleting a
/// package cascades to its membership rows only; member bookings live on.
#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn create_package(&self, params: PackageParams) -> DomainResult<TravelPackage>;

    async fn get_package(&self, id: Uuid) -> DomainResult<TravelPackage>;

    async fn delete_package(&self, id: Uuid) -> DomainResult<()>;

    /// Fails with `NotFound` for an unknown package or booking, and with
    /// `Conflict` when the pair already exists (re-adding is an error,
    /// not an idempotent no-op).
    async fn add_booking_to_package(
        &self,
        package_id: Uuid,
        booking_id: Uuid,
    ) -> DomainResult<PackageBooking>;

    async fn list_package_bookings(&self, package_id: Uuid) -> DomainResult<Vec<Booking>>;

    async fn list_customer_packages(&self, customer_id: Uuid) -> DomainResult<Vec<TravelPackage>>;

    /// Current totals over the package's membership, computed from one
    /// consistent snapshot.
    async fn package_summary(&self, package_id: Uuid) -> DomainResult<PackageSummary>;
}
