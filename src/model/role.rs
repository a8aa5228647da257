use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum Role {
    Admin,
    #[strum(serialize = "HR Manager")]
    #[serde(rename = "HR Manager")]
    HrManager,
    Manager,
    Employee,
}

impl Role {
    /// Roles allowed to add, edit and remove employee records.
    pub fn can_manage_employees(&self) -> bool {
        matches!(self, Role::Admin | Role::HrManager)
    }
}
