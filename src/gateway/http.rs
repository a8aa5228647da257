//! reqwest implementation of [`EmployeeGateway`].

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use tracing::{debug, error, instrument};

use crate::auth::Session;
use crate::gateway::wire::ApiEmployee;
use crate::gateway::{EmployeeGateway, GatewayError, GatewayResult, ImageUpload};
use crate::model::{contract::Contract, employee::Employee};

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    session: Option<Session>,
}

impl HttpGateway {
    /// `base_url` includes the API prefix, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: None,
        }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Appends `segments` to the base url, percent-encoding each one so an
    /// id cannot change the route.
    fn url(&self, segments: &[&str]) -> GatewayResult<Url> {
        let invalid = || GatewayError::InvalidBaseUrl(self.base_url.clone());

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session {
            Some(session) => request.bearer_auth(session.token()),
            None => request,
        }
    }

    fn ensure_success(response: Response) -> GatewayResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(GatewayError::Status(status))
        }
    }

    /// `employee` JSON part plus the optional `image` part.
    fn employee_form(draft: &Employee, image: Option<&ImageUpload>) -> GatewayResult<Form> {
        let payload = ApiEmployee::from(draft).blank_to_null();
        let json = serde_json::to_vec(&payload)?;

        let mut form = Form::new().part(
            "employee",
            Part::bytes(json)
                .file_name("employee.json")
                .mime_str("application/json")?,
        );

        if let Some(image) = image {
            form = form.part("image", image.to_part()?);
        }

        Ok(form)
    }

    #[instrument(skip(self))]
    pub async fn fetch_employees(&self) -> GatewayResult<Vec<Employee>> {
        let response = self
            .authorize(self.client.get(self.url(&["employees"])?))
            .send()
            .await?;

        let employees: Vec<ApiEmployee> = Self::ensure_success(response)?.json().await?;
        debug!(count = employees.len(), "Fetched employees");

        Ok(employees.into_iter().map(Employee::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn fetch_employee(&self, id: &str) -> GatewayResult<Option<Employee>> {
        let response = self
            .authorize(self.client.get(self.url(&["employees", id])?))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Employee not found");
            return Ok(None);
        }

        let employee: ApiEmployee = Self::ensure_success(response)?.json().await?;
        Ok(Some(employee.into()))
    }

    #[instrument(skip(self))]
    pub async fn fetch_active_contract(&self, employee_id: &str) -> GatewayResult<Option<Contract>> {
        let response = self
            .authorize(
                self.client
                    .get(self.url(&["employees", employee_id, "contracts", "active"])?),
            )
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("No active contract");
            return Ok(None);
        }

        let contract: Contract = Self::ensure_success(response)?.json().await?;
        Ok(Some(contract))
    }

    #[instrument(skip(self, draft, image), fields(has_image = image.is_some()))]
    pub async fn post_employee(
        &self,
        draft: &Employee,
        image: Option<&ImageUpload>,
    ) -> GatewayResult<Employee> {
        let form = Self::employee_form(draft, image)?;
        let response = self
            .authorize(self.client.post(self.url(&["employees"])?))
            .multipart(form)
            .send()
            .await?;

        let created: ApiEmployee = Self::ensure_success(response)?.json().await?;
        debug!(id = ?created.id, "Employee created");

        Ok(created.into())
    }

    #[instrument(skip(self, draft, image), fields(has_image = image.is_some()))]
    pub async fn put_employee(
        &self,
        id: &str,
        draft: &Employee,
        image: Option<&ImageUpload>,
    ) -> GatewayResult<Employee> {
        let form = Self::employee_form(draft, image)?;
        let response = self
            .authorize(self.client.put(self.url(&["employees", id])?))
            .multipart(form)
            .send()
            .await?;

        let updated: ApiEmployee = Self::ensure_success(response)?.json().await?;
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    pub async fn remove_employee(&self, id: &str) -> GatewayResult<()> {
        let response = self
            .authorize(self.client.delete(self.url(&["employees", id])?))
            .send()
            .await?;

        Self::ensure_success(response)?;
        Ok(())
    }
}

#[async_trait]
impl EmployeeGateway for HttpGateway {
    async fn list_employees(&self) -> GatewayResult<Vec<Employee>> {
        self.fetch_employees()
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching employees"))
    }

    async fn get_employee(&self, id: &str) -> GatewayResult<Option<Employee>> {
        self.fetch_employee(id)
            .await
            .inspect_err(|e| error!(error = %e, employee_id = id, "Error fetching employee"))
    }

    async fn get_active_contract(&self, employee_id: &str) -> Option<Contract> {
        match self.fetch_active_contract(employee_id).await {
            Ok(contract) => contract,
            Err(e) => {
                error!(error = %e, employee_id, "Error fetching active contract");
                None
            }
        }
    }

    async fn create_employee(
        &self,
        draft: &Employee,
        image: Option<&ImageUpload>,
    ) -> GatewayResult<Employee> {
        self.post_employee(draft, image)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating employee"))
    }

    async fn update_employee(
        &self,
        id: &str,
        draft: &Employee,
        image: Option<&ImageUpload>,
    ) -> GatewayResult<Employee> {
        self.put_employee(id, draft, image)
            .await
            .inspect_err(|e| error!(error = %e, employee_id = id, "Error updating employee"))
    }

    async fn delete_employee(&self, id: &str) -> GatewayResult<()> {
        self.remove_employee(id)
            .await
            .inspect_err(|e| error!(error = %e, employee_id = id, "Error deleting employee"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalised() {
        let gw = HttpGateway::new("http://localhost:8080/api/");
        assert_eq!(gw.base_url(), "http://localhost:8080/api");
        assert_eq!(
            gw.url(&["employees", "3"]).unwrap().as_str(),
            "http://localhost:8080/api/employees/3"
        );
    }

    #[test]
    fn ids_are_encoded_as_one_segment() {
        let gw = HttpGateway::new("http://localhost:8080/api");
        assert_eq!(
            gw.url(&["employees", "7/contracts/active"]).unwrap().as_str(),
            "http://localhost:8080/api/employees/7%2Fcontracts%2Factive"
        );
        assert_eq!(
            gw.url(&["employees", "a b?"]).unwrap().as_str(),
            "http://localhost:8080/api/employees/a%20b%3F"
        );
    }

    #[test]
    fn unusable_base_url_is_an_error() {
        let gw = HttpGateway::new("localhost:8080/api");
        assert!(matches!(
            gw.url(&["employees"]),
            Err(GatewayError::InvalidBaseUrl(_))
        ));
    }
}
