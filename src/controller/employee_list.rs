use thiserror::Error;
use tracing::{info, warn};

use crate::controller::employee_form::{EmployeeForm, FormError, FormMode};
use crate::controller::filter::filter_employees;
use crate::gateway::{EmployeeGateway, GatewayError};
use crate::model::employee::Employee;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Remote(#[from] GatewayError),
    #[error("employee {0} is not in the list")]
    UnknownEmployee(String),
}

/// The employees table: the fetched list, the search box and the
/// add/edit/delete actions.
///
/// The local list only changes after the backend confirmed the write. A
/// failed write leaves the list as it was and sets [`last_error`], which the
/// page shows as a dismissible banner.
///
/// [`last_error`]: EmployeeListController::last_error
pub struct EmployeeListController<G> {
    gateway: G,
    employees: Vec<Employee>,
    state: LoadState,
    query: String,
    last_error: Option<String>,
}

impl<G: EmployeeGateway> EmployeeListController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            employees: Vec::new(),
            state: LoadState::Loading,
            query: String::new(),
            last_error: None,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Rows to render for the current search query.
    pub fn filtered(&self) -> Vec<&Employee> {
        filter_employees(&self.employees, &self.query)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Fetches the full list. The table is only rendered in [`LoadState::Ready`].
    pub async fn load(&mut self) -> &LoadState {
        self.state = LoadState::Loading;

        self.state = match self.gateway.list_employees().await {
            Ok(employees) => {
                info!(count = employees.len(), "Employee list loaded");
                self.employees = employees;
                self.last_error = None;
                LoadState::Ready
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                LoadState::Failed(e.to_string())
            }
        };

        &self.state
    }

    /// Submits the dialog. Add mode issues one create call and appends the
    /// returned record; view mode issues one update call and replaces the
    /// record with the same id. Nothing is sent when validation fails.
    pub async fn save(&mut self, form: &EmployeeForm) -> Result<&Employee, SaveError> {
        if let Err(e) = form.validate() {
            warn!(error = %e, "Employee form rejected");
            self.last_error = Some(e.to_string());
            return Err(e.into());
        }

        let draft = form.draft();
        let result = match form.mode() {
            FormMode::Add => self.append(draft, form).await,
            FormMode::View => self.replace(draft, form).await,
        };

        match result {
            Ok(index) => {
                self.last_error = None;
                Ok(&self.employees[index])
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn append(&mut self, draft: &Employee, form: &EmployeeForm) -> Result<usize, SaveError> {
        let created = self.gateway.create_employee(draft, form.image()).await?;
        info!(id = %created.id, "Employee added");

        self.employees.push(created);
        Ok(self.employees.len() - 1)
    }

    async fn replace(&mut self, draft: &Employee, form: &EmployeeForm) -> Result<usize, SaveError> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == draft.id)
            .ok_or_else(|| SaveError::UnknownEmployee(draft.id.clone()))?;

        let updated = self
            .gateway
            .update_employee(&draft.id, draft, form.image())
            .await?;
        info!(id = %draft.id, "Employee updated");

        self.employees[index] = updated;
        Ok(index)
    }

    /// Removes the record only once the backend confirmed the delete.
    /// `None` when the id was not in the local list.
    pub async fn delete(&mut self, id: &str) -> Result<Option<Employee>, GatewayError> {
        if let Err(e) = self.gateway.delete_employee(id).await {
            self.last_error = Some(format!("Could not delete employee: {e}"));
            return Err(e);
        }

        let index = self.employees.iter().position(|e| e.id == id);
        if index.is_none() {
            warn!(id, "Deleted employee was not in the local list");
        }

        Ok(index.map(|index| {
            info!(id, "Employee deleted");
            self.employees.remove(index)
        }))
    }
}
