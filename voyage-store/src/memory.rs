use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use voyage_booking::{
    Booking, BookingRepository, FlightBookingParams, HotelBookingParams, TransitionAction,
};
use voyage_core::money::Cents;
use voyage_core::{DomainError, DomainResult};
use voyage_customer::{ContactUpdate, Customer, CustomerParams, CustomerRepository};
use voyage_package::{
    PackageBooking, PackageParams, PackageRepository, PackageSummary, TravelPackage,
};

use crate::app_config::StoreConfig;

#[derive(Default)]
struct State {
    customers: HashMap<Uuid, Customer>,
    bookings: HashMap<Uuid, Booking>,
    packages: HashMap<Uuid, TravelPackage>,
    memberships: Vec<PackageBooking>,
}

/// The referential-integrity layer over all entities: one lock guards
/// the whole store, so every operation is a single atomic critical
/// section. Reads see a consistent snapshot; mutations validate every
/// precondition before touching state, so a failed call changes nothing.
///
/// The booking's type-specific payload lives inside the `Booking` value
/// itself (tagged union), so "booking deleted without its extension" is
/// unrepresentable by construction; memberships are the only dependent
/// rows the cascade has to clean up.
pub struct MemoryStore {
    state: RwLock<State>,
    listing_limit: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            state: RwLock::new(State::default()),
            listing_limit: config.listing_limit,
        }
    }

    // A poisoned lock means a panic mid-operation elsewhere; the state
    // itself is still valid because mutations validate before writing.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Atomic check-and-set on one booking's status: current status is
    /// read and the new one committed under the same write-lock hold,
    /// so concurrent transition requests serialize and the loser gets
    /// `InvalidStateTransition` instead of a second silent success.
    fn transition(&self, id: Uuid, action: TransitionAction) -> DomainResult<Booking> {
        let mut state = self.write();
        let booking = state
            .bookings
            .get_mut(&id)
            .ok_or(DomainError::not_found("booking", id))?;

        booking.status = booking.status.apply(action)?;
        debug!(booking_id = %id, status = booking.status.as_str(), "booking transitioned");
        Ok(booking.clone())
    }

    fn insert_booking(&self, booking: Booking) -> DomainResult<Booking> {
        let mut state = self.write();
        if !state.customers.contains_key(&booking.customer_id) {
            return Err(DomainError::not_found("customer", booking.customer_id));
        }
        debug!(booking_id = %booking.id, customer_id = %booking.customer_id, "booking created");
        state.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    fn member_prices(state: &State, package_id: Uuid) -> Vec<Cents> {
        state
            .memberships
            .iter()
            .filter(|m| m.package_id == package_id)
            .filter_map(|m| state.bookings.get(&m.booking_id))
            .map(|b| b.total_price_cents)
            .collect()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for MemoryStore {
    async fn create_customer(&self, params: CustomerParams) -> DomainResult<Customer> {
        let customer = Customer::new(params)?;

        let mut state = self.write();
        if state
            .customers
            .values()
            .any(|c| c.email.eq_ignore_ascii_case(&customer.email))
        {
            return Err(DomainError::Conflict(format!(
                "email already registered: {}",
                customer.email
            )));
        }

        debug!(customer_id = %customer.id, "customer created");
        state.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn get_customer(&self, id: Uuid) -> DomainResult<Customer> {
        self.read()
            .customers
            .get(&id)
            .cloned()
            .ok_or(DomainError::not_found("customer", id))
    }

    async fn update_customer_contact(
        &self,
        id: Uuid,
        update: ContactUpdate,
    ) -> DomainResult<Customer> {
        update.validate()?;

        let mut state = self.write();
        if !state.customers.contains_key(&id) {
            return Err(DomainError::not_found("customer", id));
        }
        if let Some(email) = &update.email {
            if state
                .customers
                .values()
                .any(|c| c.id != id && c.email.eq_ignore_ascii_case(email))
            {
                return Err(DomainError::Conflict(format!(
                    "email already registered: {email}"
                )));
            }
        }

        let customer = state
            .customers
            .get_mut(&id)
            .ok_or(DomainError::not_found("customer", id))?;
        customer.apply_contact_update(update);
        Ok(customer.clone())
    }

    async fn delete_customer(&self, id: Uuid) -> DomainResult<()> {
        let mut state = self.write();
        if !state.customers.contains_key(&id) {
            return Err(DomainError::not_found("customer", id));
        }

        let bookings = state.bookings.values().filter(|b| b.customer_id == id).count();
        let packages = state.packages.values().filter(|p| p.customer_id == id).count();
        if bookings > 0 || packages > 0 {
            return Err(DomainError::Conflict(format!(
                "customer {id} still owns {bookings} booking(s) and {packages} package(s)"
            )));
        }

        state.customers.remove(&id);
        debug!(customer_id = %id, "customer deleted");
        Ok(())
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn create_flight_booking(&self, params: FlightBookingParams) -> DomainResult<Booking> {
        self.insert_booking(Booking::flight(params)?)
    }

    async fn create_hotel_booking(&self, params: HotelBookingParams) -> DomainResult<Booking> {
        self.insert_booking(Booking::hotel(params)?)
    }

    async fn get_booking(&self, id: Uuid) -> DomainResult<Booking> {
        self.read()
            .bookings
            .get(&id)
            .cloned()
            .ok_or(DomainError::not_found("booking", id))
    }

    async fn confirm_booking(&self, id: Uuid) -> DomainResult<Booking> {
        self.transition(id, TransitionAction::Confirm)
    }

    async fn cancel_booking(&self, id: Uuid) -> DomainResult<Booking> {
        self.transition(id, TransitionAction::Cancel)
    }

    async fn complete_booking(&self, id: Uuid) -> DomainResult<Booking> {
        self.transition(id, TransitionAction::Complete)
    }

    async fn delete_booking(&self, id: Uuid) -> DomainResult<()> {
        let mut state = self.write();
        state
            .bookings
            .remove(&id)
            .ok_or(DomainError::not_found("booking", id))?;
        state.memberships.retain(|m| m.booking_id != id);
        debug!(booking_id = %id, "booking deleted with its memberships");
        Ok(())
    }

    async fn list_customer_bookings(&self, customer_id: Uuid) -> DomainResult<Vec<Booking>> {
        let state = self.read();
        let mut bookings: Vec<Booking> = state
            .bookings
            .values()
            .filter(|b| b.customer_id == customer_id)
            .cloned()
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        bookings.truncate(self.listing_limit);
        Ok(bookings)
    }
}

#[async_trait]
impl PackageRepository for MemoryStore {
    async fn create_package(&self, params: PackageParams) -> DomainResult<TravelPackage> {
        let package = TravelPackage::new(params)?;

        let mut state = self.write();
        if !state.customers.contains_key(&package.customer_id) {
            return Err(DomainError::not_found("customer", package.customer_id));
        }

        debug!(package_id = %package.id, customer_id = %package.customer_id, "package created");
        state.packages.insert(package.id, package.clone());
        Ok(package)
    }

    async fn get_package(&self, id: Uuid) -> DomainResult<TravelPackage> {
        self.read()
            .packages
            .get(&id)
            .cloned()
            .ok_or(DomainError::not_found("package", id))
    }

    async fn delete_package(&self, id: Uuid) -> DomainResult<()> {
        let mut state = self.write();
        state
            .packages
            .remove(&id)
            .ok_or(DomainError::not_found("package", id))?;
        // Memberships die with the package; the member bookings do not.
        state.memberships.retain(|m| m.package_id != id);
        debug!(package_id = %id, "package deleted with its memberships");
        Ok(())
    }

    async fn add_booking_to_package(
        &self,
        package_id: Uuid,
        booking_id: Uuid,
    ) -> DomainResult<PackageBooking> {
        let mut state = self.write();
        if !state.packages.contains_key(&package_id) {
            return Err(DomainError::not_found("package", package_id));
        }
        if !state.bookings.contains_key(&booking_id) {
            return Err(DomainError::not_found("booking", booking_id));
        }
        if state
            .memberships
            .iter()
            .any(|m| m.package_id == package_id && m.booking_id == booking_id)
        {
            return Err(DomainError::Conflict(format!(
                "booking {booking_id} is already in package {package_id}"
            )));
        }

        let membership = PackageBooking {
            package_id,
            booking_id,
            added_at: Utc::now(),
        };
        state.memberships.push(membership.clone());
        debug!(package_id = %package_id, booking_id = %booking_id, "booking added to package");
        Ok(membership)
    }

    async fn list_package_bookings(&self, package_id: Uuid) -> DomainResult<Vec<Booking>> {
        let state = self.read();
        if !state.packages.contains_key(&package_id) {
            return Err(DomainError::not_found("package", package_id));
        }

        let mut bookings: Vec<Booking> = state
            .memberships
            .iter()
            .filter(|m| m.package_id == package_id)
            .filter_map(|m| state.bookings.get(&m.booking_id))
            .cloned()
            .collect();
        bookings.truncate(self.listing_limit);
        Ok(bookings)
    }

    async fn list_customer_packages(&self, customer_id: Uuid) -> DomainResult<Vec<TravelPackage>> {
        let state = self.read();
        let mut packages: Vec<TravelPackage> = state
            .packages
            .values()
            .filter(|p| p.customer_id == customer_id)
            .cloned()
            .collect();
        packages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        packages.truncate(self.listing_limit);
        Ok(packages)
    }

    async fn package_summary(&self, package_id: Uuid) -> DomainResult<PackageSummary> {
        // One read-lock hold covers the membership walk and the price
        // sum, so a concurrent cascade can never show through half-done.
        let state = self.read();
        let package = state
            .packages
            .get(&package_id)
            .ok_or(DomainError::not_found("package", package_id))?;

        Ok(package.summarize(&Self::member_prices(&state, package_id)))
    }
}
