use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::model::role::Role;

/// HR portal account. Read-only in the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub last_login: String,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumString, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_from_portal_json() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "2",
            "name": "Jennifer Garcia",
            "email": "jennifer.garcia@company.com",
            "role": "HR Manager",
            "status": "Active",
            "lastLogin": "2026-01-05 08:15 AM"
        }))
        .unwrap();

        assert_eq!(user.role, Role::HrManager);
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.last_login, "2026-01-05 08:15 AM");
    }
}
