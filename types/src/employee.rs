use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::validation::EmployeeInput;

/// Backend-assigned record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Absent until the backend has stored the record.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    #[serde(with = "salary")]
    pub salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
}

impl Employee {
    pub fn salary_display(&self) -> String {
        format_salary(self.salary)
    }

    /// Renders ISO dates as `Jan 05, 2024`; anything else is shown as stored.
    pub fn hire_date_display(&self) -> String {
        match self.hire_date.as_deref().map(str::trim) {
            None | Some("") => "-".to_string(),
            Some(raw) => raw
                .parse::<Date>()
                .map(|date| date.strftime("%b %d, %Y").to_string())
                .unwrap_or_else(|_| raw.to_string()),
        }
    }
}

/// A partial update. Absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
}

impl From<EmployeeInput> for EmployeePatch {
    fn from(input: EmployeeInput) -> Self {
        Self {
            salary: Some(input.salary()),
            name: Some(input.name().to_string()),
            email: Some(input.email().to_string()),
            position: Some(input.position().to_string()),
            department: Some(input.department().to_string()),
            hire_date: None,
        }
    }
}

/// Formats an amount the way an en-US locale would: `$1,234.5`.
pub fn format_salary(amount: f64) -> String {
    let rounded = format!("{:.3}", amount.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && (whole != "0" || !fraction.is_empty()) {
        "-"
    } else {
        ""
    };

    if fraction.is_empty() {
        format!("${sign}{grouped}")
    } else {
        format!("${sign}{grouped}.{fraction}")
    }
}

/// The backend stores whatever a client sent, so salaries may come back as
/// numeric strings.
mod salary {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use crate::validation::coerce_salary;

    pub fn serialize<S>(salary: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*salary)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => {
                coerce_salary(&s).ok_or_else(|| D::Error::custom(format!("invalid salary: {s:?}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_backend_document() {
        let employee: Employee = serde_json::from_value(json!({
            "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "name": "Ann",
            "email": "ann@x.com",
            "position": "Eng",
            "department": "R&D",
            "salary": "50000",
            "hire_date": "2024-01-05",
        }))
        .unwrap();

        assert_eq!(
            employee.id,
            Some(EmployeeId::new("65a1f0c2e4b0a1b2c3d4e5f6"))
        );
        assert_eq!(employee.salary, 50000.0);
        assert_eq!(employee.hire_date_display(), "Jan 05, 2024");
    }

    #[test]
    fn rejects_non_numeric_salary() {
        let result = serde_json::from_value::<Employee>(json!({
            "name": "Ann",
            "email": "ann@x.com",
            "position": "Eng",
            "department": "R&D",
            "salary": "lots",
        }));

        assert!(result.is_err());
    }

    #[test]
    fn omits_missing_id_when_encoding() {
        let employee = Employee {
            id: None,
            name: "Ann".into(),
            email: "ann@x.com".into(),
            position: "Eng".into(),
            department: "R&D".into(),
            salary: 1.0,
            hire_date: None,
        };

        let value = serde_json::to_value(&employee).unwrap();
        assert!(value.get("_id").is_none());
        assert!(value.get("hire_date").is_none());
    }

    #[test]
    fn hire_date_falls_back_to_raw_text() {
        let mut employee = Employee {
            id: None,
            name: "Ann".into(),
            email: "ann@x.com".into(),
            position: "Eng".into(),
            department: "R&D".into(),
            salary: 1.0,
            hire_date: Some("last spring".into()),
        };
        assert_eq!(employee.hire_date_display(), "last spring");

        employee.hire_date = None;
        assert_eq!(employee.hire_date_display(), "-");
    }

    #[test]
    fn formats_salaries() {
        assert_eq!(format_salary(0.0), "$0");
        assert_eq!(format_salary(950.0), "$950");
        assert_eq!(format_salary(50000.0), "$50,000");
        assert_eq!(format_salary(1234.5), "$1,234.5");
        assert_eq!(format_salary(1234567.891), "$1,234,567.891");
        assert_eq!(format_salary(-1200.0), "$-1,200");
    }
}
