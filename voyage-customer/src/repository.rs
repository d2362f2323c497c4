use async_trait::async_trait;
use uuid::Uuid;

use crate::customer::{ContactUpdate, Customer, CustomerParams};
use voyage_core::DomainResult;

/// Repository trait for customer data access. Deleting a customer is
/// restricted while any booking or package still references it.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create_customer(&self, params: CustomerParams) -> DomainResult<Customer>;

    async fn get_customer(&self, id: Uuid) -> DomainResult<Customer>;

    async fn update_customer_contact(
        &self,
        id: Uuid,
        update: ContactUpdate,
    ) -> DomainResult<Customer>;

    async fn delete_customer(&self, id: Uuid) -> DomainResult<()>;
}
