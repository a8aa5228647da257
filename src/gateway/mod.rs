//! Remote data gateway: the dashboard's only path to the backend.

pub mod error;
pub mod http;
pub mod image;
pub mod wire;

use async_trait::async_trait;

use crate::model::{contract::Contract, employee::Employee};

pub use error::{GatewayError, GatewayResult};
pub use http::HttpGateway;
pub use image::ImageUpload;

/// Result of the combined detail fetch. Either half may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeWithContract {
    pub employee: Option<Employee>,
    pub contract: Option<Contract>,
}

#[async_trait]
pub trait EmployeeGateway: Send + Sync {
    async fn list_employees(&self) -> GatewayResult<Vec<Employee>>;

    /// `Ok(None)` when the backend answers 404.
    async fn get_employee(&self, id: &str) -> GatewayResult<Option<Employee>>;

    /// Never fails: a missing contract and a failed call both yield `None`.
    async fn get_active_contract(&self, employee_id: &str) -> Option<Contract>;

    async fn create_employee(
        &self,
        draft: &Employee,
        image: Option<&ImageUpload>,
    ) -> GatewayResult<Employee>;

    async fn update_employee(
        &self,
        id: &str,
        draft: &Employee,
        image: Option<&ImageUpload>,
    ) -> GatewayResult<Employee>;

    async fn delete_employee(&self, id: &str) -> GatewayResult<()>;

    /// Fetches the record and its active contract concurrently and waits for
    /// both.
    async fn get_employee_with_contract(&self, id: &str) -> GatewayResult<EmployeeWithContract> {
        let (employee, contract) =
            futures::join!(self.get_employee(id), self.get_active_contract(id));

        Ok(EmployeeWithContract {
            employee: employee?,
            contract,
        })
    }
}
