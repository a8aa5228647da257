use serde::{Deserialize, Serialize};

use crate::model::employee::Employee;

/// A department card. The head count is derived from the employee list
/// whenever it is needed, see [`Department::employee_count`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    /// Free text, not linked to any user or employee.
    pub manager: String,
    pub description: String,
}

impl Department {
    pub fn employee_count(&self, employees: &[Employee]) -> usize {
        employees
            .iter()
            .filter(|e| e.department.trim().eq_ignore_ascii_case(self.name.trim()))
            .count()
    }
}
