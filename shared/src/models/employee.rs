//! Employee Model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Employee entity (persisted record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub salary: f64,
}

/// Validated employee fields, ready to be written to the store
///
/// Only produced by the validator; `age` and `salary` are already coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeData {
    pub name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub salary: f64,
}

impl EmployeeData {
    /// Attach a store-assigned id
    pub fn with_id(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            age: self.age,
            email: self.email,
            role: self.role,
            salary: self.salary,
        }
    }
}

/// A numeric field as the client sent it: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Coerce to a finite number
    ///
    /// Text is trimmed first; blank text reads as `0`. Returns `None` when the
    /// text is not a decimal number or the value is not finite.
    pub fn to_number(&self) -> Option<f64> {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().ok()?
                }
            }
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for NumericInput {
    fn from(n: f64) -> Self {
        NumericInput::Number(n)
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        NumericInput::Text(s.to_string())
    }
}

/// Untrusted employee payload (create / update body)
///
/// Every field may be missing. Text fields only accept JSON strings and
/// numeric fields accept numbers or strings; any other JSON type is read as
/// missing so the validator reports it. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCandidate {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::numeric")]
    pub age: Option<NumericInput>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient::numeric")]
    pub salary: Option<NumericInput>,
}

mod lenient {
    use super::*;

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn numeric<'de, D>(deserializer: D) -> Result<Option<NumericInput>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64().map(NumericInput::Number),
            Value::String(s) => Some(NumericInput::Text(s)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_candidate_from_typed_json() {
        let candidate: EmployeeCandidate = serde_json::from_value(json!({
            "name": "Ana Silva",
            "age": 30,
            "email": "ana@example.com",
            "role": "Engineer",
            "salary": 5000
        }))
        .unwrap();

        assert_eq!(candidate.name.as_deref(), Some("Ana Silva"));
        assert_eq!(candidate.age, Some(NumericInput::Number(30.0)));
        assert_eq!(candidate.salary, Some(NumericInput::Number(5000.0)));
    }

    #[test]
    fn test_candidate_numeric_strings() {
        let candidate: EmployeeCandidate = serde_json::from_value(json!({
            "age": "30",
            "salary": "1500.50"
        }))
        .unwrap();

        assert_eq!(candidate.age, Some(NumericInput::Text("30".into())));
        assert_eq!(candidate.salary.unwrap().to_number(), Some(1500.5));
    }

    #[test]
    fn test_candidate_missing_and_null_fields() {
        let candidate: EmployeeCandidate =
            serde_json::from_value(json!({ "name": null })).unwrap();
        assert_eq!(candidate, EmployeeCandidate::default());
    }

    #[test]
    fn test_candidate_wrong_types_read_as_missing() {
        let candidate: EmployeeCandidate = serde_json::from_value(json!({
            "name": 12345,
            "age": true,
            "email": ["a@b.c"],
            "role": { "title": "Engineer" },
            "salary": false
        }))
        .unwrap();
        assert_eq!(candidate, EmployeeCandidate::default());
    }

    #[test]
    fn test_candidate_ignores_unknown_fields() {
        let candidate: EmployeeCandidate =
            serde_json::from_value(json!({ "id": 7, "name": "Bob", "team": "core" })).unwrap();
        assert_eq!(candidate.name.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_numeric_input_to_number() {
        assert_eq!(NumericInput::from(42.0_f64).to_number(), Some(42.0));
        assert_eq!(NumericInput::from(" 18 ").to_number(), Some(18.0));
        assert_eq!(NumericInput::from("").to_number(), Some(0.0));
        assert_eq!(NumericInput::from("1e3").to_number(), Some(1000.0));
        assert_eq!(NumericInput::from("abc").to_number(), None);
        assert_eq!(NumericInput::from("inf").to_number(), None);
        assert_eq!(NumericInput::from("NaN").to_number(), None);
    }

    #[test]
    fn test_employee_serialize() {
        let employee = EmployeeData {
            name: "Ana Silva".into(),
            age: 30,
            email: "ana@example.com".into(),
            role: "Engineer".into(),
            salary: 5000.0,
        }
        .with_id(1);

        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["age"], 30);
        assert_eq!(value["salary"].as_f64(), Some(5000.0));
        assert_eq!(value["email"], "ana@example.com");
    }
}
