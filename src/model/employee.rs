use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// An employee record as the dashboard holds it in memory.
///
/// Every value is kept as the opaque string the backend sent; dates and
/// numbers are not parsed here. An empty string means "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    pub id: String,
    pub full_name: String,
    pub gender: String,
    pub birthday: String,
    pub department: String,
    pub bank_account: String,
    pub bank: String,
    pub sin: String,
    pub ptin: String,
    pub national_id: String,
    pub address: String,
    pub phone: String,
    pub zalo_no: String,
    pub email: String,
    pub hobby: String,
    pub favorite_sport: String,
    pub marital_status: String,
    pub date_in: String,
    pub specialization: String,
    pub image: Option<String>,

    // contract fields, only sent when creating an employee
    pub contract_no: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration_value: Option<String>,
    pub duration_type: Option<String>,
}

impl Employee {
    /// Initials for the avatar fallback, e.g. "Sarah Johnson" -> "SJ".
    pub fn initials(&self) -> String {
        let initials: String = self
            .full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            "NA".to_string()
        } else {
            initials
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumString, EnumIter, AsRefStr)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumString, EnumIter, AsRefStr)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}
