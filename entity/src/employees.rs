use serde::{Deserialize, Serialize};

/// A stored employee record.
///
/// Serializes to `{"id": ..., "name": ..., "salary": ...}` in JSON and to an
/// `<employee>` element in XML. `salary` stays a number in JSON, never a
/// string. The store assigns `id`; payloads arriving without one deserialize
/// with an empty id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "employee")]
pub struct Model {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub salary: i64,
}

/// Inbound payload for create and replace requests. Carries no id: create
/// generates one, replace takes it from the request path.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub salary: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_preserves_fields() {
        let employees = vec![
            Model {
                id: "ID1".into(),
                name: "First Employee".into(),
                salary: 1000,
            },
            Model {
                id: "ID2".into(),
                name: "Second Employee".into(),
                salary: 2000,
            },
        ];
        let json = serde_json::to_string(&employees).unwrap();
        let parsed: Vec<Model> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, employees);
    }

    #[test]
    fn salary_serializes_as_integer() {
        let employee = Model {
            id: "ID2".into(),
            name: "Second Employee".into(),
            salary: 2000,
        };
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["salary"], serde_json::json!(2000));
        assert!(value["salary"].is_i64());
    }

    #[test]
    fn payload_without_id_deserializes() {
        let payload: NewEmployee =
            serde_json::from_str(r#"{"name": "X", "salary": 500}"#).unwrap();
        assert_eq!(payload.name, "X");
        assert_eq!(payload.salary, 500);
    }

    #[test]
    fn stray_id_in_payload_is_ignored() {
        let payload: NewEmployee =
            serde_json::from_str(r#"{"id": "ID9", "name": "X", "salary": 500}"#).unwrap();
        assert_eq!(payload.name, "X");
    }
}
