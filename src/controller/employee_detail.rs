use chrono::NaiveDate;
use tracing::warn;

use crate::controller::dashboard::tenure_years;
use crate::gateway::{EmployeeGateway, EmployeeWithContract};
use crate::model::{contract::Contract, employee::Employee};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Ready {
        employee: Employee,
        contract: Option<Contract>,
    },
    NotFound,
    /// The fetch failed. `fallback` is the row the list already had, if any,
    /// so the page can still show something.
    Failed {
        message: String,
        fallback: Option<Employee>,
    },
}

/// Detail page for one employee, backed by the combined record + active
/// contract fetch.
#[derive(Debug, Clone)]
pub struct EmployeeDetail {
    id: String,
    state: DetailState,
}

impl EmployeeDetail {
    pub async fn load<G>(gateway: &G, id: &str, known: Option<&Employee>) -> Self
    where
        G: EmployeeGateway + ?Sized,
    {
        let state = match gateway.get_employee_with_contract(id).await {
            Ok(EmployeeWithContract {
                employee: Some(employee),
                contract,
            }) => DetailState::Ready { employee, contract },
            Ok(EmployeeWithContract { employee: None, .. }) => DetailState::NotFound,
            Err(e) => {
                warn!(error = %e, employee_id = id, "Showing cached row for employee");
                DetailState::Failed {
                    message: e.to_string(),
                    fallback: known.cloned(),
                }
            }
        };

        Self {
            id: id.to_string(),
            state,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// The record to render: the fresh one, or the fallback after a failure.
    pub fn employee(&self) -> Option<&Employee> {
        match &self.state {
            DetailState::Ready { employee, .. } => Some(employee),
            DetailState::Failed { fallback, .. } => fallback.as_ref(),
            DetailState::NotFound => None,
        }
    }

    pub fn contract(&self) -> Option<&Contract> {
        match &self.state {
            DetailState::Ready { contract, .. } => contract.as_ref(),
            _ => None,
        }
    }

    pub fn tenure_years(&self, today: NaiveDate) -> Option<i64> {
        self.employee().and_then(|e| tenure_years(&e.date_in, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::fake::FakeGateway;
    use reqwest::StatusCode;

    fn sarah() -> Employee {
        Employee {
            id: "1".into(),
            full_name: "Sarah Johnson".into(),
            date_in: "2022-01-15".into(),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn ready_with_contract() {
        let gateway = FakeGateway::with(vec![sarah()]);
        gateway.add_contract(Contract {
            id: "10".into(),
            emp_id: "1".into(),
            contract_no: "C001".into(),
            ..Default::default()
        });

        let detail = EmployeeDetail::load(&gateway, "1", None).await;
        assert_eq!(detail.employee().unwrap().full_name, "Sarah Johnson");
        assert_eq!(detail.contract().unwrap().contract_no, "C001");

        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(detail.tenure_years(today), Some(4));
    }

    #[actix_web::test]
    async fn missing_contract_is_not_an_error() {
        let gateway = FakeGateway::with(vec![sarah()]);
        let detail = EmployeeDetail::load(&gateway, "1", None).await;

        assert!(matches!(detail.state(), DetailState::Ready { contract: None, .. }));
    }

    #[actix_web::test]
    async fn unknown_id_is_not_found() {
        let gateway = FakeGateway::with(vec![sarah()]);
        let detail = EmployeeDetail::load(&gateway, "42", None).await;

        assert_eq!(detail.state(), &DetailState::NotFound);
        assert!(detail.employee().is_none());
    }

    #[actix_web::test]
    async fn failure_falls_back_to_known_row() {
        let gateway = FakeGateway::with(vec![sarah()]);
        gateway.fail_with(StatusCode::BAD_GATEWAY);

        let known = sarah();
        let detail = EmployeeDetail::load(&gateway, "1", Some(&known)).await;

        match detail.state() {
            DetailState::Failed { message, .. } => assert!(message.contains("502")),
            other => panic!("unexpected state {other:?}"),
        }
        assert_eq!(detail.employee(), Some(&known));
        assert!(detail.contract().is_none());
    }
}
