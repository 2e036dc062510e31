//! Normalized output schema.

use serde::Serialize;

/// Fixed output header, in column order.
pub const OUTPUT_HEADER: [&str; 9] = [
    "name",
    "gender",
    "title",
    "department",
    "hire_date",
    "salary",
    "entity",
    "type",
    "received_date",
];

/// One normalized output row. Field order matches [`OUTPUT_HEADER`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub name: String,
    pub gender: String,
    pub title: String,
    pub department: String,
    /// `MM/DD/YYYY`.
    pub hire_date: String,
    /// Two-decimal amount, e.g. `1234.50`.
    pub salary: String,
    pub entity: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub received_date: String,
}

impl OutputRecord {
    /// Values in header order.
    pub fn values(&self) -> [&str; 9] {
        [
            &self.name,
            &self.gender,
            &self.title,
            &self.department,
            &self.hire_date,
            &self.salary,
            &self.entity,
            &self.entity_type,
            &self.received_date,
        ]
    }
}
