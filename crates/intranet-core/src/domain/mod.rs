//! Domain entity types.
//!
//! These types represent the back-office entities independent of any
//! infrastructure concerns (database, HTTP, etc.). The `New*` variants
//! describe entities that have not been persisted yet; the repository
//! assigns the id.

use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Database ID (always present for persisted products).
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// A product that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// An employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Department the employee belongs to, if assigned.
    pub department_id: Option<i64>,
}

impl Employee {
    /// Display name, first then last.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An employee that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: Option<i64>,
}

/// An organizational department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
}

/// A department that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDepartment {
    pub name: String,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_full_name_joins_first_and_last() {
        let employee = Employee {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            department_id: None,
        };
        assert_eq!(employee.full_name(), "Ada Lovelace");
    }

    #[test]
    fn product_serializes_camel_case() {
        let product = Product {
            id: 7,
            name: "Stapler".to_string(),
            description: None,
            price: 4.5,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 7);
        assert!(json.get("description").is_some());
        assert_eq!(json["price"], 4.5);
    }
}
