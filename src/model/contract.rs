use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// The contract currently in force for one employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
#[schema(
    example = json!({
        "id": "1",
        "empId": "1",
        "contractNo": "C001",
        "durationType": "years",
        "durationValue": "5",
        "startDate": "2022-01-15",
        "endDate": "2027-01-15"
    })
)]
pub struct Contract {
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub emp_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub contract_no: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub duration_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub duration_value: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub end_date: String,
}

/// Blank contract values travel as `null`; they read back as empty strings.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Contract {
    /// "5 years", or whichever half of the duration is present.
    pub fn duration_label(&self) -> String {
        format!("{} {}", self.duration_value.trim(), self.duration_type.trim())
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_label_joins_value_and_type() {
        let c = Contract {
            duration_value: "5".into(),
            duration_type: "years".into(),
            ..Default::default()
        };
        assert_eq!(c.duration_label(), "5 years");
        assert_eq!(Contract::default().duration_label(), "");
    }

    #[test]
    fn null_values_decode_as_blank() {
        let c: Contract = serde_json::from_str(
            r#"{"id":"7","empId":"3","contractNo":"C1","durationType":null,"durationValue":null,"startDate":"2026-10-19","endDate":null}"#,
        )
        .unwrap();

        assert_eq!(c.contract_no, "C1");
        assert_eq!(c.start_date, "2026-10-19");
        assert_eq!(c.end_date, "");
        assert_eq!(c.duration_label(), "");
    }

    #[test]
    fn missing_keys_decode_as_blank() {
        let c: Contract = serde_json::from_str(r#"{"id":"1","contractNo":"C9"}"#).unwrap();
        assert_eq!(c.emp_id, "");
        assert_eq!(c.end_date, "");
    }
}
