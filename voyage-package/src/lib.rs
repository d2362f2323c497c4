pub mod models;
pub mod repository;
pub mod summary;

pub use models::{PackageBooking, PackageParams, TravelPackage};
pub use repository::PackageRepository;
pub use summary::PackageSummary;
