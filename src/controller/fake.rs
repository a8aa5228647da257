//! In-memory gateway for controller tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::gateway::{EmployeeGateway, GatewayError, GatewayResult, ImageUpload};
use crate::model::{contract::Contract, employee::Employee};

#[derive(Default)]
pub struct FakeGateway {
    employees: Mutex<Vec<Employee>>,
    contracts: Mutex<Vec<Contract>>,
    failure: Mutex<Option<StatusCode>>,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl FakeGateway {
    pub fn with(employees: Vec<Employee>) -> Self {
        Self {
            employees: Mutex::new(employees),
            ..Default::default()
        }
    }

    pub fn add_contract(&self, contract: Contract) {
        self.contracts.lock().unwrap().push(contract);
    }

    /// Every following call fails with `status`.
    pub fn fail_with(&self, status: StatusCode) {
        *self.failure.lock().unwrap() = Some(status);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> GatewayResult<()> {
        match *self.failure.lock().unwrap() {
            Some(status) => Err(GatewayError::Status(status)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EmployeeGateway for FakeGateway {
    async fn list_employees(&self) -> GatewayResult<Vec<Employee>> {
        self.check()?;
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn get_employee(&self, id: &str) -> GatewayResult<Option<Employee>> {
        self.check()?;
        Ok(self
            .employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn get_active_contract(&self, employee_id: &str) -> Option<Contract> {
        self.check().ok()?;
        self.contracts
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.emp_id == employee_id)
            .cloned()
    }

    async fn create_employee(
        &self,
        draft: &Employee,
        _image: Option<&ImageUpload>,
    ) -> GatewayResult<Employee> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        let mut employees = self.employees.lock().unwrap();
        let next = employees
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let created = Employee {
            id: next.to_string(),
            ..draft.clone()
        };
        employees.push(created.clone());
        Ok(created)
    }

    async fn update_employee(
        &self,
        id: &str,
        draft: &Employee,
        _image: Option<&ImageUpload>,
    ) -> GatewayResult<Employee> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        let mut employees = self.employees.lock().unwrap();
        let slot = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(GatewayError::Status(StatusCode::NOT_FOUND))?;
        *slot = draft.clone();
        Ok(slot.clone())
    }

    async fn delete_employee(&self, id: &str) -> GatewayResult<()> {
        self.check()?;
        self.employees.lock().unwrap().retain(|e| e.id != id);
        Ok(())
    }
}
