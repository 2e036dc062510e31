//! Mapping document elicitation and storage.
//!
//! The [`MappingBuilder`] interviews an operator through a [`Prompter`] to
//! decide which source columns feed each output field and how each field is
//! cleaned up. The resulting [`MappingDocument`] is persisted by a
//! [`MappingRepository`] and replayed on later runs.
//!
//! Prompting is abstracted so the same interview can be driven by a terminal
//! or by a [`ScriptedPrompter`] holding pre-recorded answers.
//!
//! [`MappingDocument`]: salary_model::MappingDocument

pub mod builder;
pub mod columns;
pub mod error;
pub mod prompt;
pub mod repository;

pub use builder::{MappingBuilder, SAMPLE_ROWS};
pub use columns::parse_column_indices;
pub use error::{MappingError, PromptError, Result};
pub use prompt::{Prompter, ScriptedPrompter, parse_yes_no};
pub use repository::{DEFAULT_MAPPING_FILE, MappingRepository};
