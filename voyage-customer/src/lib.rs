pub mod customer;
pub mod repository;

pub use customer::{ContactUpdate, Customer, CustomerParams};
pub use repository::CustomerRepository;
