//! Semantic output fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six semantic output categories, each with its own transform
/// and option shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Name,
    Gender,
    Title,
    Department,
    HireDate,
    Salary,
}

impl FieldKind {
    /// All field kinds in elicitation order.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Name,
        FieldKind::Gender,
        FieldKind::Title,
        FieldKind::Department,
        FieldKind::HireDate,
        FieldKind::Salary,
    ];

    /// Key used in the mapping document and the output header.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Gender => "gender",
            FieldKind::Title => "title",
            FieldKind::Department => "department",
            FieldKind::HireDate => "hire_date",
            FieldKind::Salary => "salary",
        }
    }

    /// Operator-facing wording ("an employee's hire date").
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Gender => "gender",
            FieldKind::Title => "title",
            FieldKind::Department => "department",
            FieldKind::HireDate => "hire date",
            FieldKind::Salary => "salary",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_elicitation_order() {
        let keys: Vec<&str> = FieldKind::ALL.iter().map(|kind| kind.as_str()).collect();
        assert_eq!(
            keys,
            vec!["name", "gender", "title", "department", "hire_date", "salary"]
        );
    }
}
