//! Employee record as exchanged with the backend.
//!
//! The wire shape differs from [`Employee`] only in two field names
//! (`phoneNo`, `birthDay`) and in carrying `null` for absent values.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::employee::Employee;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
#[schema(
    example = json!({
        "id": "1",
        "fullName": "Sarah Johnson",
        "gender": "Female",
        "birthDay": "1985-05-15",
        "department": "Engineering",
        "bankAccount": "B001",
        "bank": "Bank A",
        "sin": "123-456-789",
        "ptin": "987-654-321",
        "nationalId": "N001",
        "address": "123 Main St, City, Country",
        "phoneNo": "+1 (555) 123-4567",
        "zaloNo": "Z001",
        "email": "sarah.johnson@company.com",
        "hobby": "Reading",
        "favoriteSport": "Tennis",
        "maritalStatus": "Single",
        "dateIn": "2022-01-15",
        "specialization": "Full Stack Development",
        "image": null
    })
)]
pub struct ApiEmployee {
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub birth_day: Option<String>,
    pub department: Option<String>,
    pub bank_account: Option<String>,
    pub bank: Option<String>,
    pub sin: Option<String>,
    pub ptin: Option<String>,
    pub national_id: Option<String>,
    pub address: Option<String>,
    pub phone_no: Option<String>,
    pub zalo_no: Option<String>,
    pub email: Option<String>,
    pub hobby: Option<String>,
    pub favorite_sport: Option<String>,
    pub marital_status: Option<String>,
    pub date_in: Option<String>,
    pub specialization: Option<String>,
    pub image: Option<String>,
    pub contract_no: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration_value: Option<String>,
    pub duration_type: Option<String>,
}

impl ApiEmployee {
    /// Replaces every empty string with `null`. The backend rejects blank
    /// dates and numbers, so this runs on every outgoing payload.
    pub fn blank_to_null(mut self) -> Self {
        for field in self.fields_mut() {
            if field.as_deref() == Some("") {
                *field = None;
            }
        }
        self
    }

    fn fields_mut(&mut self) -> [&mut Option<String>; 25] {
        [
            &mut self.id,
            &mut self.full_name,
            &mut self.gender,
            &mut self.birth_day,
            &mut self.department,
            &mut self.bank_account,
            &mut self.bank,
            &mut self.sin,
            &mut self.ptin,
            &mut self.national_id,
            &mut self.address,
            &mut self.phone_no,
            &mut self.zalo_no,
            &mut self.email,
            &mut self.hobby,
            &mut self.favorite_sport,
            &mut self.marital_status,
            &mut self.date_in,
            &mut self.specialization,
            &mut self.image,
            &mut self.contract_no,
            &mut self.start_date,
            &mut self.end_date,
            &mut self.duration_value,
            &mut self.duration_type,
        ]
    }
}

impl From<ApiEmployee> for Employee {
    fn from(api: ApiEmployee) -> Self {
        Employee {
            id: api.id.unwrap_or_default(),
            full_name: api.full_name.unwrap_or_default(),
            gender: api.gender.unwrap_or_default(),
            birthday: api.birth_day.unwrap_or_default(),
            department: api.department.unwrap_or_default(),
            bank_account: api.bank_account.unwrap_or_default(),
            bank: api.bank.unwrap_or_default(),
            sin: api.sin.unwrap_or_default(),
            ptin: api.ptin.unwrap_or_default(),
            national_id: api.national_id.unwrap_or_default(),
            address: api.address.unwrap_or_default(),
            phone: api.phone_no.unwrap_or_default(),
            zalo_no: api.zalo_no.unwrap_or_default(),
            email: api.email.unwrap_or_default(),
            hobby: api.hobby.unwrap_or_default(),
            favorite_sport: api.favorite_sport.unwrap_or_default(),
            marital_status: api.marital_status.unwrap_or_default(),
            date_in: api.date_in.unwrap_or_default(),
            specialization: api.specialization.unwrap_or_default(),
            image: api.image,
            contract_no: api.contract_no,
            start_date: api.start_date,
            end_date: api.end_date,
            duration_value: api.duration_value,
            duration_type: api.duration_type,
        }
    }
}

impl From<&Employee> for ApiEmployee {
    fn from(emp: &Employee) -> Self {
        ApiEmployee {
            id: Some(emp.id.clone()),
            full_name: Some(emp.full_name.clone()),
            gender: Some(emp.gender.clone()),
            birth_day: Some(emp.birthday.clone()),
            department: Some(emp.department.clone()),
            bank_account: Some(emp.bank_account.clone()),
            bank: Some(emp.bank.clone()),
            sin: Some(emp.sin.clone()),
            ptin: Some(emp.ptin.clone()),
            national_id: Some(emp.national_id.clone()),
            address: Some(emp.address.clone()),
            phone_no: Some(emp.phone.clone()),
            zalo_no: Some(emp.zalo_no.clone()),
            email: Some(emp.email.clone()),
            hobby: Some(emp.hobby.clone()),
            favorite_sport: Some(emp.favorite_sport.clone()),
            marital_status: Some(emp.marital_status.clone()),
            date_in: Some(emp.date_in.clone()),
            specialization: Some(emp.specialization.clone()),
            image: emp.image.clone(),
            contract_no: emp.contract_no.clone(),
            start_date: emp.start_date.clone(),
            end_date: emp.end_date.clone(),
            duration_value: emp.duration_value.clone(),
            duration_type: emp.duration_type.clone(),
        }
    }
}
