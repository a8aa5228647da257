use chrono::NaiveDate;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

use crate::controller::department::DEFAULT_DEPARTMENTS;
use crate::gateway::ImageUpload;
use crate::model::employee::{Employee, Gender, MaritalStatus};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Editing a record that already exists on the server.
    View,
    Add,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("full name is required")]
    MissingFullName,
    #[error("email is required")]
    MissingEmail,
}

/// How an input is rendered and what it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Email,
    Number,
    Select(Vec<String>),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum FormSection {
    #[strum(serialize = "Profile")]
    Profile,
    #[strum(serialize = "Personal Information")]
    Personal,
    #[strum(serialize = "Contact Information")]
    Contact,
    #[strum(serialize = "Financial Information")]
    Financial,
    #[strum(serialize = "Personal Interests")]
    Interests,
    #[strum(serialize = "Employment Details")]
    Employment,
    #[strum(serialize = "Contract")]
    Contract,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum EmployeeField {
    FullName,
    Department,
    Gender,
    Birthday,
    NationalId,
    Address,
    MaritalStatus,
    Phone,
    ZaloNo,
    Email,
    Sin,
    BankAccount,
    Bank,
    Ptin,
    Hobby,
    FavoriteSport,
    DateIn,
    Specialization,
    ContractNo,
    DurationValue,
    DurationType,
    StartDate,
    EndDate,
}

impl EmployeeField {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeField::FullName => "Full Name",
            EmployeeField::Department => "Department",
            EmployeeField::Gender => "Gender",
            EmployeeField::Birthday => "Birthday",
            EmployeeField::NationalId => "National ID",
            EmployeeField::Address => "Address",
            EmployeeField::MaritalStatus => "Marital Status",
            EmployeeField::Phone => "Phone Number",
            EmployeeField::ZaloNo => "Zalo Number",
            EmployeeField::Email => "Email",
            EmployeeField::Sin => "SIN",
            EmployeeField::BankAccount => "Bank Account",
            EmployeeField::Bank => "Bank",
            EmployeeField::Ptin => "PTIN",
            EmployeeField::Hobby => "Hobby",
            EmployeeField::FavoriteSport => "Favorite Sport",
            EmployeeField::DateIn => "Date In",
            EmployeeField::Specialization => "Specialization",
            EmployeeField::ContractNo => "Contract No",
            EmployeeField::DurationValue => "Contract Duration",
            EmployeeField::DurationType => "Duration Unit",
            EmployeeField::StartDate => "Contract Start",
            EmployeeField::EndDate => "Contract End",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            EmployeeField::Birthday
            | EmployeeField::DateIn
            | EmployeeField::StartDate
            | EmployeeField::EndDate => FieldKind::Date,
            EmployeeField::Email => FieldKind::Email,
            EmployeeField::DurationValue => FieldKind::Number,
            EmployeeField::Gender => FieldKind::Select(Gender::iter().map(|g| g.to_string()).collect()),
            EmployeeField::MaritalStatus => {
                FieldKind::Select(MaritalStatus::iter().map(|m| m.to_string()).collect())
            }
            EmployeeField::Department => {
                FieldKind::Select(DEFAULT_DEPARTMENTS.iter().map(|d| d.0.to_string()).collect())
            }
            EmployeeField::DurationType => FieldKind::Select(
                ["days", "months", "years"].iter().map(|s| s.to_string()).collect(),
            ),
            _ => FieldKind::Text,
        }
    }

    pub fn section(&self) -> FormSection {
        match self {
            Self::FullName | Self::Department => FormSection::Profile,
            Self::Gender
            | Self::Birthday
            | Self::NationalId
            | Self::Address
            | Self::MaritalStatus => FormSection::Personal,
            Self::Phone | Self::ZaloNo | Self::Email => FormSection::Contact,
            Self::Sin | Self::BankAccount | Self::Bank | Self::Ptin => FormSection::Financial,
            Self::Hobby | Self::FavoriteSport => FormSection::Interests,
            Self::DateIn | Self::Specialization => FormSection::Employment,
            Self::ContractNo
            | Self::DurationValue
            | Self::DurationType
            | Self::StartDate
            | Self::EndDate => FormSection::Contract,
        }
    }

    /// Contract fields only travel with a create request.
    pub fn is_contract_field(&self) -> bool {
        self.section() == FormSection::Contract
    }

    pub fn get<'a>(&self, employee: &'a Employee) -> &'a str {
        match self {
            EmployeeField::FullName => &employee.full_name,
            EmployeeField::Department => &employee.department,
            EmployeeField::Gender => &employee.gender,
            EmployeeField::Birthday => &employee.birthday,
            EmployeeField::NationalId => &employee.national_id,
            EmployeeField::Address => &employee.address,
            EmployeeField::MaritalStatus => &employee.marital_status,
            EmployeeField::Phone => &employee.phone,
            EmployeeField::ZaloNo => &employee.zalo_no,
            EmployeeField::Email => &employee.email,
            EmployeeField::Sin => &employee.sin,
            EmployeeField::BankAccount => &employee.bank_account,
            EmployeeField::Bank => &employee.bank,
            EmployeeField::Ptin => &employee.ptin,
            EmployeeField::Hobby => &employee.hobby,
            EmployeeField::FavoriteSport => &employee.favorite_sport,
            EmployeeField::DateIn => &employee.date_in,
            EmployeeField::Specialization => &employee.specialization,
            EmployeeField::ContractNo => employee.contract_no.as_deref().unwrap_or_default(),
            EmployeeField::DurationValue => employee.duration_value.as_deref().unwrap_or_default(),
            EmployeeField::DurationType => employee.duration_type.as_deref().unwrap_or_default(),
            EmployeeField::StartDate => employee.start_date.as_deref().unwrap_or_default(),
            EmployeeField::EndDate => employee.end_date.as_deref().unwrap_or_default(),
        }
    }

    pub fn set(&self, employee: &mut Employee, value: String) {
        let slot = match self {
            EmployeeField::FullName => &mut employee.full_name,
            EmployeeField::Department => &mut employee.department,
            EmployeeField::Gender => &mut employee.gender,
            EmployeeField::Birthday => &mut employee.birthday,
            EmployeeField::NationalId => &mut employee.national_id,
            EmployeeField::Address => &mut employee.address,
            EmployeeField::MaritalStatus => &mut employee.marital_status,
            EmployeeField::Phone => &mut employee.phone,
            EmployeeField::ZaloNo => &mut employee.zalo_no,
            EmployeeField::Email => &mut employee.email,
            EmployeeField::Sin => &mut employee.sin,
            EmployeeField::BankAccount => &mut employee.bank_account,
            EmployeeField::Bank => &mut employee.bank,
            EmployeeField::Ptin => &mut employee.ptin,
            EmployeeField::Hobby => &mut employee.hobby,
            EmployeeField::FavoriteSport => &mut employee.favorite_sport,
            EmployeeField::DateIn => &mut employee.date_in,
            EmployeeField::Specialization => &mut employee.specialization,
            EmployeeField::ContractNo => {
                employee.contract_no = Some(value);
                return;
            }
            EmployeeField::DurationValue => {
                employee.duration_value = Some(value);
                return;
            }
            EmployeeField::DurationType => {
                employee.duration_type = Some(value);
                return;
            }
            EmployeeField::StartDate => {
                employee.start_date = Some(value);
                return;
            }
            EmployeeField::EndDate => {
                employee.end_date = Some(value);
                return;
            }
        };
        *slot = value;
    }
}

/// Draft state behind the employee dialog.
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    mode: FormMode,
    original: Option<Employee>,
    draft: Employee,
    image: Option<ImageUpload>,
}

impl EmployeeForm {
    /// Blank form with today's date as join and contract start date.
    pub fn add(today: NaiveDate) -> Self {
        let today = today.format("%Y-%m-%d").to_string();
        let draft = Employee {
            gender: Gender::Other.to_string(),
            marital_status: MaritalStatus::Single.to_string(),
            date_in: today.clone(),
            start_date: Some(today),
            ..Default::default()
        };

        Self {
            mode: FormMode::Add,
            original: None,
            draft,
            image: None,
        }
    }

    pub fn edit(employee: Employee) -> Self {
        Self {
            mode: FormMode::View,
            original: Some(employee.clone()),
            draft: employee,
            image: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add New Employee",
            FormMode::View => "Employee Details",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add Employee",
            FormMode::View => "Save Changes",
        }
    }

    pub fn draft(&self) -> &Employee {
        &self.draft
    }

    pub fn get(&self, field: EmployeeField) -> &str {
        field.get(&self.draft)
    }

    pub fn set(&mut self, field: EmployeeField, value: impl Into<String>) {
        field.set(&mut self.draft, value.into());
    }

    /// Fields shown for the current mode, in display order.
    pub fn fields(&self) -> impl Iterator<Item = EmployeeField> + use<> {
        let mode = self.mode;
        EmployeeField::iter().filter(move |f| mode == FormMode::Add || !f.is_contract_field())
    }

    pub fn select_image(&mut self, image: ImageUpload) {
        self.image = Some(image);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn image(&self) -> Option<&ImageUpload> {
        self.image.as_ref()
    }

    pub fn image_preview(&self) -> Option<String> {
        self.image.as_ref().map(ImageUpload::preview_data_url)
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.draft.full_name.trim().is_empty() {
            return Err(FormError::MissingFullName);
        }
        if self.draft.email.trim().is_empty() {
            return Err(FormError::MissingEmail);
        }
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        self.image.is_some()
            || match &self.original {
                Some(original) => *original != self.draft,
                None => true,
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn add_mode_starts_with_defaults() {
        let form = EmployeeForm::add(today());
        assert_eq!(form.mode(), FormMode::Add);
        assert_eq!(form.get(EmployeeField::Gender), "Other");
        assert_eq!(form.get(EmployeeField::MaritalStatus), "Single");
        assert_eq!(form.get(EmployeeField::DateIn), "2026-10-19");
        assert_eq!(form.get(EmployeeField::StartDate), "2026-10-19");
        assert_eq!(form.get(EmployeeField::FullName), "");
        assert_eq!(form.title(), "Add New Employee");
    }

    #[test]
    fn name_and_email_are_required() {
        let mut form = EmployeeForm::add(today());
        assert_eq!(form.validate(), Err(FormError::MissingFullName));

        form.set(EmployeeField::FullName, "Daniel Wilson");
        assert_eq!(form.validate(), Err(FormError::MissingEmail));

        form.set(EmployeeField::Email, "   ");
        assert_eq!(form.validate(), Err(FormError::MissingEmail));

        form.set(EmployeeField::Email, "daniel.wilson@company.com");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn set_writes_through_to_the_draft() {
        let mut form = EmployeeForm::add(today());
        form.set(EmployeeField::Phone, "+1 555");
        form.set(EmployeeField::ContractNo, "C013");

        assert_eq!(form.draft().phone, "+1 555");
        assert_eq!(form.draft().contract_no.as_deref(), Some("C013"));
    }

    #[test]
    fn field_kinds_are_closed_over_the_schema() {
        assert_eq!(EmployeeField::Birthday.kind(), FieldKind::Date);
        assert_eq!(EmployeeField::Email.kind(), FieldKind::Email);
        assert_eq!(EmployeeField::DurationValue.kind(), FieldKind::Number);
        assert_eq!(EmployeeField::Address.kind(), FieldKind::Text);
        assert_eq!(
            EmployeeField::Gender.kind(),
            FieldKind::Select(vec!["Male".into(), "Female".into(), "Other".into()])
        );
        match EmployeeField::Department.kind() {
            FieldKind::Select(options) => assert!(options.contains(&"Human Resources".to_string())),
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn view_mode_hides_contract_fields() {
        let form = EmployeeForm::edit(Employee::default());
        assert!(form.fields().all(|f| !f.is_contract_field()));

        let add = EmployeeForm::add(today());
        assert!(add.fields().any(|f| f == EmployeeField::ContractNo));
    }

    #[test]
    fn edit_form_tracks_changes() {
        let emp = Employee {
            id: "4".into(),
            full_name: "Robert Taylor".into(),
            email: "robert.taylor@company.com".into(),
            ..Default::default()
        };
        let mut form = EmployeeForm::edit(emp);
        assert!(!form.is_dirty());

        form.set(EmployeeField::Hobby, "Chess");
        assert!(form.is_dirty());
    }

    #[test]
    fn image_selection_gives_a_preview() {
        let mut form = EmployeeForm::edit(Employee::default());
        assert!(form.image_preview().is_none());

        form.select_image(ImageUpload::new("me.png", vec![1, 2, 3]));
        assert!(form.image_preview().unwrap().starts_with("data:image/png;base64,"));
        assert!(form.is_dirty());

        form.clear_image();
        assert!(form.image().is_none());
    }
}
