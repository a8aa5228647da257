use chrono::NaiveDate;
use futures::future::join_all;
use tracing::debug;

use crate::controller::department::DepartmentDirectory;
use crate::gateway::EmployeeGateway;
use crate::model::employee::Employee;

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
}

/// Figures for the dashboard landing page, all derived from live data.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOverview {
    pub total_employees: usize,
    pub total_departments: usize,
    pub average_tenure_years: Option<f64>,
    /// Employees the backend reports an active contract for.
    pub with_contract: usize,
    /// (department name, employees), in directory order followed by names
    /// that only appear on employee records.
    pub department_distribution: Vec<(String, usize)>,
}

/// Asks the backend for every employee's active contract and counts the hits.
pub async fn count_active_contracts<G>(gateway: &G, employees: &[Employee]) -> usize
where
    G: EmployeeGateway + ?Sized,
{
    let contracts = join_all(
        employees
            .iter()
            .map(|e| gateway.get_active_contract(&e.id)),
    )
    .await;

    let count = contracts.iter().flatten().count();
    debug!(count, employees = employees.len(), "Counted active contracts");
    count
}

impl DashboardOverview {
    /// Fetches the contract count and computes the overview.
    pub async fn load<G>(
        gateway: &G,
        employees: &[Employee],
        departments: &DepartmentDirectory,
        today: NaiveDate,
    ) -> Self
    where
        G: EmployeeGateway + ?Sized,
    {
        let with_contract = count_active_contracts(gateway, employees).await;
        Self::compute(employees, departments, with_contract, today)
    }

    pub fn compute(
        employees: &[Employee],
        departments: &DepartmentDirectory,
        with_contract: usize,
        today: NaiveDate,
    ) -> Self {
        let mut distribution: Vec<(String, usize)> = departments
            .cards(employees)
            .into_iter()
            .map(|card| (card.department.name.clone(), card.employee_count))
            .collect();

        for employee in employees {
            let name = employee.department.trim();
            if name.is_empty() || distribution.iter().any(|(n, _)| n.eq_ignore_ascii_case(name)) {
                continue;
            }
            let count = employees
                .iter()
                .filter(|e| e.department.trim().eq_ignore_ascii_case(name))
                .count();
            distribution.push((name.to_string(), count));
        }

        let tenures: Vec<f64> = employees
            .iter()
            .filter_map(|e| tenure_days(&e.date_in, today))
            .map(|days| days as f64 / 365.25)
            .collect();

        let average_tenure_years = if tenures.is_empty() {
            None
        } else {
            Some(tenures.iter().sum::<f64>() / tenures.len() as f64)
        };

        Self {
            total_employees: employees.len(),
            total_departments: departments.departments().len(),
            average_tenure_years,
            with_contract,
            department_distribution: distribution,
        }
    }

    pub fn stat_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                title: "Total Employees",
                value: self.total_employees.to_string(),
            },
            StatCard {
                title: "Departments",
                value: self.total_departments.to_string(),
            },
            StatCard {
                title: "Avg. Tenure",
                value: self
                    .average_tenure_years
                    .map(|y| format!("{y:.1} yrs"))
                    .unwrap_or_else(|| "n/a".to_string()),
            },
            StatCard {
                title: "With Contract Data",
                value: self.with_contract.to_string(),
            },
        ]
    }
}

/// Days since `date_in` (YYYY-MM-DD). `None` for blank, malformed or future
/// dates.
pub fn tenure_days(date_in: &str, today: NaiveDate) -> Option<i64> {
    let joined = NaiveDate::parse_from_str(date_in.trim(), "%Y-%m-%d").ok()?;
    let days = (today - joined).num_days();
    (days >= 0).then_some(days)
}

/// Whole years since `date_in`.
pub fn tenure_years(date_in: &str, today: NaiveDate) -> Option<i64> {
    tenure_days(date_in, today).map(|days| (days as f64 / 365.25).floor() as i64)
}
