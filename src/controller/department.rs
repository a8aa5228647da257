use thiserror::Error;
use tracing::info;

use crate::model::{department::Department, employee::Employee};

/// Seed departments: (name, manager, description).
pub const DEFAULT_DEPARTMENTS: &[(&str, &str, &str)] = &[
    (
        "Engineering",
        "Michael Chen",
        "Software development and technical infrastructure",
    ),
    ("Design", "Lisa Anderson", "Product design and user experience"),
    (
        "Marketing",
        "Robert Taylor",
        "Marketing campaigns and brand management",
    ),
    (
        "Sales",
        "Christopher Lee",
        "Sales operations and customer acquisition",
    ),
    (
        "Human Resources",
        "Jennifer Garcia",
        "Employee relations and talent management",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepartmentError {
    #[error("department name is required")]
    MissingName,
    #[error("department manager is required")]
    MissingManager,
    #[error("department {0} not found")]
    NotFound(String),
}

/// Values from the add/edit dialog. `None` leaves a field untouched on edit.
#[derive(Debug, Clone, Default)]
pub struct DepartmentDraft {
    pub name: Option<String>,
    pub manager: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentCard<'a> {
    pub department: &'a Department,
    pub employee_count: usize,
}

/// Departments live only in the dashboard; the backend has no endpoint for
/// them.
#[derive(Debug, Clone, Default)]
pub struct DepartmentDirectory {
    departments: Vec<Department>,
}

impl DepartmentDirectory {
    pub fn new(departments: Vec<Department>) -> Self {
        Self { departments }
    }

    pub fn with_defaults() -> Self {
        let departments = DEFAULT_DEPARTMENTS
            .iter()
            .enumerate()
            .map(|(i, (name, manager, description))| Department {
                id: (i + 1).to_string(),
                name: name.to_string(),
                manager: manager.to_string(),
                description: description.to_string(),
            })
            .collect();

        Self::new(departments)
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn get(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    fn next_id(&self) -> String {
        let max = self
            .departments
            .iter()
            .filter_map(|d| d.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    pub fn add(&mut self, draft: DepartmentDraft) -> Result<&Department, DepartmentError> {
        let name = non_blank(draft.name).ok_or(DepartmentError::MissingName)?;
        let manager = non_blank(draft.manager).ok_or(DepartmentError::MissingManager)?;

        let department = Department {
            id: self.next_id(),
            name,
            manager,
            description: draft.description.unwrap_or_default(),
        };
        info!(id = %department.id, name = %department.name, "Department added");

        self.departments.push(department);
        Ok(&self.departments[self.departments.len() - 1])
    }

    pub fn edit(&mut self, id: &str, draft: DepartmentDraft) -> Result<&Department, DepartmentError> {
        let department = self
            .departments
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| DepartmentError::NotFound(id.to_string()))?;

        if let Some(name) = draft.name {
            department.name = non_blank(Some(name)).ok_or(DepartmentError::MissingName)?;
        }
        if let Some(manager) = draft.manager {
            department.manager = non_blank(Some(manager)).ok_or(DepartmentError::MissingManager)?;
        }
        if let Some(description) = draft.description {
            department.description = description;
        }

        Ok(&*department)
    }

    pub fn remove(&mut self, id: &str) -> Result<Department, DepartmentError> {
        let index = self
            .departments
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| DepartmentError::NotFound(id.to_string()))?;

        let removed = self.departments.remove(index);
        info!(id, name = %removed.name, "Department removed");
        Ok(removed)
    }

    /// Cards with head counts taken from `employees`.
    pub fn cards<'a>(&'a self, employees: &[Employee]) -> Vec<DepartmentCard<'a>> {
        self.departments
            .iter()
            .map(|department| DepartmentCard {
                department,
                employee_count: department.employee_count(employees),
            })
            .collect()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_department(id: &str, department: &str) -> Employee {
        Employee {
            id: id.into(),
            department: department.into(),
            ..Default::default()
        }
    }

    #[test]
    fn counts_follow_the_employee_list() {
        let directory = DepartmentDirectory::with_defaults();
        let mut employees = vec![
            in_department("1", "Engineering"),
            in_department("2", "engineering"),
            in_department("3", "Design"),
        ];

        let count = |dir: &DepartmentDirectory, emps: &[Employee], name: &str| {
            dir.cards(emps)
                .into_iter()
                .find(|c| c.department.name == name)
                .map(|c| c.employee_count)
                .unwrap()
        };

        assert_eq!(count(&directory, &employees, "Engineering"), 2);
        assert_eq!(count(&directory, &employees, "Sales"), 0);

        employees.remove(0);
        assert_eq!(count(&directory, &employees, "Engineering"), 1);
    }

    #[test]
    fn add_requires_name_and_manager() {
        let mut directory = DepartmentDirectory::with_defaults();

        let missing_manager = DepartmentDraft {
            name: Some("Finance".into()),
            ..Default::default()
        };
        assert_eq!(
            directory.add(missing_manager).unwrap_err(),
            DepartmentError::MissingManager
        );

        let added = directory
            .add(DepartmentDraft {
                name: Some("Finance".into()),
                manager: Some("Amy Park".into()),
                description: None,
            })
            .unwrap();
        assert_eq!(added.id, "6");
        assert_eq!(added.description, "");
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut directory = DepartmentDirectory::with_defaults();
        directory.remove("2").unwrap();

        let added = directory
            .add(DepartmentDraft {
                name: Some("Legal".into()),
                manager: Some("Sam Reed".into()),
                description: None,
            })
            .unwrap();
        assert_eq!(added.id, "6");
        assert_eq!(directory.departments().len(), 5);
    }

    #[test]
    fn edit_merges_only_given_fields() {
        let mut directory = DepartmentDirectory::with_defaults();
        let edited = directory
            .edit(
                "3",
                DepartmentDraft {
                    manager: Some("Nina Ortiz".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(edited.name, "Marketing");
        assert_eq!(edited.manager, "Nina Ortiz");

        assert_eq!(
            directory.edit("99", DepartmentDraft::default()).unwrap_err(),
            DepartmentError::NotFound("99".into())
        );
    }
}
