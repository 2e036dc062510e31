//! Mapping document types.
//!
//! A [`MappingDocument`] records, for each [`FieldKind`], the ordered list of
//! source columns whose values are concatenated to form the field, and the
//! field-specific cleanup options. It also carries three scalar metadata
//! values copied onto every output row.
//!
//! # Storage Format
//!
//! The document serializes to a JSON object keyed by field name:
//!
//! ```json
//! {
//!   "name": { "columns": ["Last", "First"], "options": { "last_name_space": true } },
//!   "gender": { "columns": ["Sex"], "options": { "male_is": "M", "female_is": "F" } },
//!   "title": { "columns": ["JobTitle"], "options": { "remove_before": 2 } },
//!   "department": { "columns": ["Dept"], "options": {} },
//!   "hire_date": { "columns": ["HireDate"], "options": { "date_format": "%m/%d/%Y" } },
//!   "salary": { "columns": ["Pay"], "options": {} },
//!   "entity_name": "Austin ISD",
//!   "entity_type": "School District",
//!   "received_date": "7/22/2013"
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::field::FieldKind;

/// Suffix appended to the entity slug to form the output file name.
pub const OUTPUT_FILE_SUFFIX: &str = "-ready.csv";

/// Source columns and options for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping<O> {
    /// Source column names, concatenated in this order.
    pub columns: Vec<String>,
    /// Field-specific options.
    pub options: O,
}

impl<O> FieldMapping<O> {
    pub fn new(columns: Vec<String>, options: O) -> Self {
        Self { columns, options }
    }
}

/// Options for the name field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOptions {
    /// Raw names have no separator between surname and given name
    /// (e.g. `SMITH JOHN`).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub last_name_space: bool,
}

/// Options for the gender field: how each gender is encoded in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderOptions {
    pub male_is: String,
    pub female_is: String,
}

/// Character-stripping options shared by title and department.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripOptions {
    /// Number of leading characters to drop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_before: Option<usize>,
    /// Number of trailing characters to drop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_after: Option<usize>,
}

impl StripOptions {
    /// Build strip options from operator-entered counts. A count of zero
    /// means "do not strip" and leaves the key unset.
    pub fn from_counts(remove_before: usize, remove_after: usize) -> Self {
        Self {
            remove_before: (remove_before > 0).then_some(remove_before),
            remove_after: (remove_after > 0).then_some(remove_after),
        }
    }

    /// True when neither end is stripped.
    pub fn is_noop(&self) -> bool {
        self.remove_before.unwrap_or(0) == 0 && self.remove_after.unwrap_or(0) == 0
    }
}

/// Options for the hire date field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HireDateOptions {
    /// strptime-style pattern describing the source date text.
    pub date_format: String,
}

/// The salary field has no options; `$` and `,` are always removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryOptions {}

/// Options for any field, tagged by the shape they belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOptions {
    Name(NameOptions),
    Gender(GenderOptions),
    Strip(StripOptions),
    HireDate(HireDateOptions),
    Salary(SalaryOptions),
}

impl FieldOptions {
    /// Whether these options are the right shape for `kind`.
    pub fn kind_matches(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldOptions::Name(_), FieldKind::Name)
                | (FieldOptions::Gender(_), FieldKind::Gender)
                | (FieldOptions::Strip(_), FieldKind::Title | FieldKind::Department)
                | (FieldOptions::HireDate(_), FieldKind::HireDate)
                | (FieldOptions::Salary(_), FieldKind::Salary)
        )
    }
}

/// A configured field before it is placed into a [`MappingDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    pub columns: Vec<String>,
    pub options: FieldOptions,
}

/// Scalar metadata copied onto every output row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityMetadata {
    /// Display name of the reporting body (e.g. "Austin ISD").
    pub entity_name: String,
    /// Kind of body (e.g. "School District").
    pub entity_type: String,
    /// Date the data was received, kept as entered.
    pub received_date: String,
}

/// Complete mapping from a source spreadsheet shape to the output schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingDocument {
    pub name: FieldMapping<NameOptions>,
    pub gender: FieldMapping<GenderOptions>,
    pub title: FieldMapping<StripOptions>,
    pub department: FieldMapping<StripOptions>,
    pub hire_date: FieldMapping<HireDateOptions>,
    pub salary: FieldMapping<SalaryOptions>,
    pub entity_name: String,
    pub entity_type: String,
    pub received_date: String,
}

impl MappingDocument {
    /// Assemble a document from one entry per field kind.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingField`] when a kind has no entry and
    /// [`ModelError::OptionsMismatch`] when an entry carries options of the
    /// wrong shape.
    pub fn assemble(
        mut fields: BTreeMap<FieldKind, FieldEntry>,
        metadata: EntityMetadata,
    ) -> Result<Self> {
        let mut take = |kind: FieldKind| -> Result<FieldEntry> {
            let entry = fields
                .remove(&kind)
                .ok_or(ModelError::MissingField { field: kind })?;
            if entry.options.kind_matches(kind) {
                Ok(entry)
            } else {
                Err(ModelError::OptionsMismatch { field: kind })
            }
        };

        let name = take(FieldKind::Name)?;
        let gender = take(FieldKind::Gender)?;
        let title = take(FieldKind::Title)?;
        let department = take(FieldKind::Department)?;
        let hire_date = take(FieldKind::HireDate)?;
        let salary = take(FieldKind::Salary)?;

        Ok(Self {
            name: FieldMapping::new(name.columns, unwrap_name(name.options)),
            gender: FieldMapping::new(gender.columns, unwrap_gender(gender.options)),
            title: FieldMapping::new(title.columns, unwrap_strip(title.options)),
            department: FieldMapping::new(department.columns, unwrap_strip(department.options)),
            hire_date: FieldMapping::new(hire_date.columns, unwrap_hire_date(hire_date.options)),
            salary: FieldMapping::new(salary.columns, SalaryOptions {}),
            entity_name: metadata.entity_name,
            entity_type: metadata.entity_type,
            received_date: metadata.received_date,
        })
    }

    /// Ordered source columns configured for `kind`.
    pub fn columns(&self, kind: FieldKind) -> &[String] {
        match kind {
            FieldKind::Name => &self.name.columns,
            FieldKind::Gender => &self.gender.columns,
            FieldKind::Title => &self.title.columns,
            FieldKind::Department => &self.department.columns,
            FieldKind::HireDate => &self.hire_date.columns,
            FieldKind::Salary => &self.salary.columns,
        }
    }

    /// Check that every field references at least one column and that every
    /// referenced column exists in `header`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError::EmptyField`] or
    /// [`ModelError::UnknownColumn`] found, in field order.
    pub fn validate_against(&self, header: &[String]) -> Result<()> {
        let known: BTreeSet<&str> = header.iter().map(String::as_str).collect();
        for kind in FieldKind::ALL {
            let columns = self.columns(kind);
            if columns.is_empty() {
                return Err(ModelError::EmptyField { field: kind });
            }
            if let Some(column) = columns.iter().find(|c| !known.contains(c.as_str())) {
                return Err(ModelError::UnknownColumn {
                    field: kind,
                    column: column.clone(),
                });
            }
        }
        Ok(())
    }

    /// Output file name: entity name lower-cased with spaces replaced by
    /// underscores, suffixed with `-ready.csv`.
    pub fn output_file_name(&self) -> String {
        let slug = self.entity_name.to_lowercase().replace(' ', "_");
        format!("{slug}{OUTPUT_FILE_SUFFIX}")
    }
}

// Only called after `kind_matches` has accepted the options.
fn unwrap_name(options: FieldOptions) -> NameOptions {
    match options {
        FieldOptions::Name(options) => options,
        _ => NameOptions::default(),
    }
}

fn unwrap_gender(options: FieldOptions) -> GenderOptions {
    match options {
        FieldOptions::Gender(options) => options,
        _ => GenderOptions::default(),
    }
}

fn unwrap_strip(options: FieldOptions) -> StripOptions {
    match options {
        FieldOptions::Strip(options) => options,
        _ => StripOptions::default(),
    }
}

fn unwrap_hire_date(options: FieldOptions) -> HireDateOptions {
    match options {
        FieldOptions::HireDate(options) => options,
        _ => HireDateOptions::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_counts_of_zero_are_not_set() {
        let options = StripOptions::from_counts(0, 3);
        assert_eq!(options.remove_before, None);
        assert_eq!(options.remove_after, Some(3));
        assert!(StripOptions::from_counts(0, 0).is_noop());
    }

    #[test]
    fn options_shape_matches_kind() {
        let strip = FieldOptions::Strip(StripOptions::default());
        assert!(strip.kind_matches(FieldKind::Title));
        assert!(strip.kind_matches(FieldKind::Department));
        assert!(!strip.kind_matches(FieldKind::Salary));
        assert!(FieldOptions::Salary(SalaryOptions {}).kind_matches(FieldKind::Salary));
    }
}
