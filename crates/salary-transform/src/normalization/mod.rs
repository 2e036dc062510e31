//! Per-field value transforms.
//!
//! - `name`: separator repair and person-name normalization
//! - `gender`: literal-to-code mapping
//! - `strip`: leading/trailing character removal (title, department)
//! - `date`: hire date reformatting
//! - `salary`: currency cleanup

mod date;
mod gender;
mod name;
mod salary;
mod strip;

pub use date::{OUTPUT_DATE_FORMAT, normalize_hire_date};
pub use gender::{GenderMatch, classify_gender};
pub use name::{CanonicalNameNormalizer, NameNormalizer, normalize_name, prepare_name_input};
pub use salary::{format_salary, parse_salary};
pub use strip::strip_chars;
