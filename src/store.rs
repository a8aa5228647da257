//! In-memory records behind the development backend.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::gateway::wire::ApiEmployee;
use crate::model::contract::Contract;

#[derive(Debug, Clone)]
pub struct StoredImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
struct Records {
    employees: Vec<ApiEmployee>,
    contracts: Vec<Contract>,
    images: HashMap<String, StoredImage>,
    next_employee_id: u64,
    next_contract_id: u64,
}

#[derive(Default)]
pub struct Store {
    records: RwLock<Records>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handful of employees with contracts, enough to click around.
    pub fn seeded() -> Self {
        let store = Self::new();
        let seed = [
            ("Sarah Johnson", "Female", "1985-05-15", "Engineering", "B001", "Bank A", "+1 (555) 123-4567", "Single", "2022-01-15", "Full Stack Development", "C001"),
            ("Michael Chen", "Male", "1980-11-30", "Engineering", "B002", "Bank B", "+1 (555) 987-6543", "Married", "2020-03-01", "Engineering Management", "C002"),
            ("Lisa Anderson", "Female", "1990-02-11", "Design", "B003", "Bank C", "+1 (555) 222-3333", "Single", "2021-03-01", "UX Research", "C003"),
            ("Robert Taylor", "Male", "1983-07-04", "Marketing", "B004", "Bank D", "+1 (555) 444-5555", "Married", "2019-06-10", "Brand Strategy", "C004"),
            ("Christopher Lee", "Male", "1987-09-21", "Sales", "B005", "Bank E", "+1 (555) 666-7777", "Divorced", "2020-09-01", "Enterprise Accounts", "C005"),
            ("Jennifer Garcia", "Female", "1982-12-02", "Human Resources", "B006", "Bank F", "+1 (555) 888-9999", "Married", "2018-02-20", "Talent Management", "C006"),
        ];

        for (i, (name, gender, birth_day, department, bank_account, bank, phone, marital, date_in, specialization, contract_no)) in
            seed.into_iter().enumerate()
        {
            let n = i + 1;
            let email = format!("{}@company.com", name.to_lowercase().replace(' ', "."));
            let end_year = date_in[..4].parse::<u32>().unwrap_or(2020) + 5;

            store.insert(
                ApiEmployee {
                    full_name: Some(name.to_string()),
                    gender: Some(gender.to_string()),
                    birth_day: Some(birth_day.to_string()),
                    department: Some(department.to_string()),
                    bank_account: Some(bank_account.to_string()),
                    bank: Some(bank.to_string()),
                    national_id: Some(format!("N{n:03}")),
                    address: Some(format!("{} Main St, City, Country", 100 + n)),
                    phone_no: Some(phone.to_string()),
                    zalo_no: Some(format!("Z{n:03}")),
                    email: Some(email),
                    marital_status: Some(marital.to_string()),
                    date_in: Some(date_in.to_string()),
                    specialization: Some(specialization.to_string()),
                    contract_no: Some(contract_no.to_string()),
                    start_date: Some(date_in.to_string()),
                    end_date: Some(format!("{end_year}{}", &date_in[4..])),
                    duration_value: Some("5".to_string()),
                    duration_type: Some("years".to_string()),
                    ..Default::default()
                },
                None,
            );
        }

        store
    }

    fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<ApiEmployee> {
        self.read().employees.clone()
    }

    pub fn get(&self, id: &str) -> Option<ApiEmployee> {
        self.read()
            .employees
            .iter()
            .find(|e| e.id.as_deref() == Some(id))
            .cloned()
    }

    /// Stores a new employee under a fresh id. Contract fields in the payload
    /// become the employee's active contract.
    pub fn insert(&self, mut employee: ApiEmployee, image: Option<StoredImage>) -> ApiEmployee {
        let mut records = self.write();
        records.next_employee_id += 1;
        let id = records.next_employee_id.to_string();

        employee.id = Some(id.clone());
        if let Some(image) = image {
            employee.image = Some(image_path(&id, &image.file_name));
            records.images.insert(id.clone(), image);
        }
        records.take_contract(&id, &mut employee);

        records.employees.push(employee.clone());
        employee
    }

    /// Full replace. `None` when the id is unknown.
    pub fn replace(
        &self,
        id: &str,
        mut employee: ApiEmployee,
        image: Option<StoredImage>,
    ) -> Option<ApiEmployee> {
        let mut records = self.write();
        let index = records
            .employees
            .iter()
            .position(|e| e.id.as_deref() == Some(id))?;

        employee.id = Some(id.to_string());
        if let Some(image) = image {
            employee.image = Some(image_path(id, &image.file_name));
            records.images.insert(id.to_string(), image);
        }
        records.take_contract(id, &mut employee);

        records.employees[index] = employee.clone();
        Some(employee)
    }

    /// Drops the employee with its contracts and image.
    pub fn remove(&self, id: &str) -> bool {
        let mut records = self.write();
        let before = records.employees.len();

        records.employees.retain(|e| e.id.as_deref() != Some(id));
        if records.employees.len() == before {
            return false;
        }

        records.contracts.retain(|c| c.emp_id != id);
        records.images.remove(id);
        true
    }

    /// The most recently stored contract of the employee.
    pub fn active_contract(&self, employee_id: &str) -> Option<Contract> {
        self.read()
            .contracts
            .iter()
            .rev()
            .find(|c| c.emp_id == employee_id)
            .cloned()
    }

    pub fn image(&self, employee_id: &str) -> Option<StoredImage> {
        self.read().images.get(employee_id).cloned()
    }
}

impl Records {
    fn take_contract(&mut self, employee_id: &str, employee: &mut ApiEmployee) {
        let contract_no = employee.contract_no.take();
        let start_date = employee.start_date.take();
        let end_date = employee.end_date.take();
        let duration_value = employee.duration_value.take();
        let duration_type = employee.duration_type.take();

        if contract_no.is_none() && start_date.is_none() && end_date.is_none() {
            return;
        }

        self.next_contract_id += 1;
        self.contracts.push(Contract {
            id: self.next_contract_id.to_string(),
            emp_id: employee_id.to_string(),
            contract_no: contract_no.unwrap_or_default(),
            duration_type: duration_type.unwrap_or_default(),
            duration_value: duration_value.unwrap_or_default(),
            start_date: start_date.unwrap_or_default(),
            end_date: end_date.unwrap_or_default(),
        });
    }
}

fn image_path(employee_id: &str, file_name: &str) -> String {
    format!("/images/{employee_id}/{file_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ApiEmployee {
        ApiEmployee {
            id: Some("ignored".into()),
            full_name: Some(name.into()),
            ..Default::default()
        }
    }

    #[test]
    fn insert_assigns_ids_and_splits_contract() {
        let store = Store::new();
        let created = store.insert(
            ApiEmployee {
                contract_no: Some("C100".into()),
                start_date: Some("2026-10-19".into()),
                ..named("Amy Park")
            },
            None,
        );

        assert_eq!(created.id.as_deref(), Some("1"));
        assert_eq!(created.contract_no, None);

        let contract = store.active_contract("1").unwrap();
        assert_eq!(contract.contract_no, "C100");
        assert_eq!(contract.emp_id, "1");
    }

    #[test]
    fn remove_drops_contracts_and_reports_unknown_ids() {
        let store = Store::seeded();
        assert!(store.active_contract("2").is_some());

        assert!(store.remove("2"));
        assert!(store.get("2").is_none());
        assert!(store.active_contract("2").is_none());
        assert!(!store.remove("2"));
    }

    #[test]
    fn replace_keeps_id_and_stores_image() {
        let store = Store::new();
        store.insert(named("Amy Park"), None);

        let image = StoredImage {
            file_name: "amy.png".into(),
            content_type: "image/png".into(),
            bytes: vec![1, 2],
        };
        let updated = store.replace("1", named("Amy Parker"), Some(image)).unwrap();

        assert_eq!(updated.id.as_deref(), Some("1"));
        assert_eq!(updated.full_name.as_deref(), Some("Amy Parker"));
        assert_eq!(updated.image.as_deref(), Some("/images/1/amy.png"));
        assert_eq!(store.image("1").unwrap().bytes, vec![1, 2]);
        assert!(store.replace("9", named("Nobody"), None).is_none());
    }
}
