use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::TravelPackage;
use voyage_core::money::{percentage_of, Cents};

/// Read-only projection over a package's current membership and current
/// booking prices. Never stored; recomputed on every call so it always
/// reflects the latest prices, discount, and membership. Bookings count
/// toward the totals regardless of status, CANCELLED included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageSummary {
    pub package_id: Uuid,
    pub booking_count: usize,
    pub total_before_discount_cents: Cents,
    pub discount_amount_cents: Cents,
    pub total_after_discount_cents: Cents,
}

impl TravelPackage {
    /// Fold the member prices into a summary. Discount and after-discount
    /// totals are each half-up rounded at cent granularity.
    pub fn summarize(&self, member_prices: &[Cents]) -> PackageSummary {
        let total: Cents = member_prices.iter().sum();
        PackageSummary {
            package_id: self.id,
            booking_count: member_prices.len(),
            total_before_discount_cents: total,
            discount_amount_cents: percentage_of(total, self.discount_percent),
            total_after_discount_cents: percentage_of(total, 100.0 - self.discount_percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PackageParams;

    fn package(discount: f64) -> TravelPackage {
        TravelPackage::new(PackageParams {
            name: "City break".to_string(),
            customer_id: Uuid::new_v4(),
            discount_percent: discount,
        })
        .unwrap()
    }

    #[test]
    fn test_ten_percent_over_two_bookings() {
        // 750.00 + 800.00 at 10% off
        let summary = package(10.0).summarize(&[75_000, 80_000]);
        assert_eq!(summary.booking_count, 2);
        assert_eq!(summary.total_before_discount_cents, 155_000);
        assert_eq!(summary.discount_amount_cents, 15_500);
        assert_eq!(summary.total_after_discount_cents, 139_500);
    }

    #[test]
    fn test_empty_package_is_all_zero() {
        let summary = package(25.0).summarize(&[]);
        assert_eq!(summary.booking_count, 0);
        assert_eq!(summary.total_before_discount_cents, 0);
        assert_eq!(summary.discount_amount_cents, 0);
        assert_eq!(summary.total_after_discount_cents, 0);
    }

    #[test]
    fn test_zero_and_full_discount() {
        let none = package(0.0).summarize(&[12_345]);
        assert_eq!(none.discount_amount_cents, 0);
        assert_eq!(none.total_after_discount_cents, 12_345);

        let full = package(100.0).summarize(&[12_345]);
        assert_eq!(full.discount_amount_cents, 12_345);
        assert_eq!(full.total_after_discount_cents, 0);
    }

    #[test]
    fn test_fractional_discount_rounds_half_up() {
        // 12.5% of 13.33 = 1.66625 -> 1.67; remainder 11.66375 -> 11.66
        let summary = package(12.5).summarize(&[1_333]);
        assert_eq!(summary.discount_amount_cents, 167);
        assert_eq!(summary.total_after_discount_cents, 1_166);
    }
}
