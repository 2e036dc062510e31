//! Interactive mapping document builder.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use salary_model::{
    EntityMetadata, FieldEntry, FieldKind, FieldOptions, GenderOptions, HireDateOptions,
    MappingDocument, NameOptions, SalaryOptions, SourceRow, SourceTable, StripOptions,
};
use salary_transform::{collect_cells, normalize_hire_date};

use crate::columns::parse_column_indices;
use crate::error::Result;
use crate::prompt::Prompter;

/// Number of rows shown as examples for each field.
pub const SAMPLE_ROWS: usize = 10;

/// Walks an operator through mapping every output field.
pub struct MappingBuilder<'a, P: Prompter + ?Sized> {
    prompter: &'a mut P,
}

impl<'a, P: Prompter + ?Sized> MappingBuilder<'a, P> {
    pub fn new(prompter: &'a mut P) -> Self {
        Self { prompter }
    }

    /// Run the full interview over `table` and return the completed document.
    ///
    /// Fields are asked in [`FieldKind::ALL`] order, followed by the entity
    /// name, entity type and received date.
    ///
    /// # Errors
    ///
    /// Fails only when the prompter fails; invalid answers are re-asked.
    pub fn build(&mut self, table: &SourceTable) -> Result<MappingDocument> {
        let mut fields = BTreeMap::new();
        for kind in FieldKind::ALL {
            let columns = self.select_columns(kind, &table.header)?;
            self.show_examples(kind, &columns, &table.rows);
            let options = self.collect_options(kind, &columns, &table.rows)?;
            debug!(field = %kind, columns = columns.len(), "field mapped");
            fields.insert(kind, FieldEntry { columns, options });
        }
        let metadata = self.collect_metadata()?;
        let document = MappingDocument::assemble(fields, metadata)?;
        Ok(document)
    }

    fn select_columns(&mut self, kind: FieldKind, header: &[String]) -> Result<Vec<String>> {
        let listing: Vec<String> = header
            .iter()
            .enumerate()
            .map(|(idx, column)| format!("{idx}: {column}"))
            .collect();
        self.prompter.show(&listing.join("\n"));

        let prompt = format!(
            "Which column index(es) represent an employee's {}? (comma separated, in order)",
            kind.label()
        );
        loop {
            let answer = self.prompter.text(&prompt)?;
            match parse_column_indices(&answer, header) {
                Ok(indices) => {
                    return Ok(indices.into_iter().map(|idx| header[idx].clone()).collect());
                }
                Err(err) => self.prompter.show(&format!("{err}. Please try again.")),
            }
        }
    }

    fn show_examples(&mut self, kind: FieldKind, columns: &[String], rows: &[SourceRow]) {
        let mut text = format!("Examples for {}\n===\n", kind.label());
        if kind == FieldKind::Gender {
            let distinct: BTreeSet<String> =
                rows.iter().map(|row| collect_cells(row, columns)).collect();
            for value in distinct {
                text.push_str(&value);
                text.push('\n');
            }
        } else {
            for row in rows.iter().take(SAMPLE_ROWS) {
                let values: Vec<&str> = columns.iter().map(|column| row.get(column)).collect();
                text.push_str(&format!("{values:?}\n"));
            }
        }
        self.prompter.show(text.trim_end());
    }

    fn collect_options(
        &mut self,
        kind: FieldKind,
        columns: &[String],
        rows: &[SourceRow],
    ) -> Result<FieldOptions> {
        let options = match kind {
            FieldKind::Name => {
                let last_name_space = self.prompter.confirm(
                    "Is there no separator between the last and first name? E.g. SMITH JOHN (y/n)",
                )?;
                FieldOptions::Name(NameOptions { last_name_space })
            }
            FieldKind::Gender => {
                let male_is = self
                    .prompter
                    .text("How are men identified? E.g. 'M', 'Male'")?;
                let female_is = self
                    .prompter
                    .text("How are women identified? E.g. 'F', 'Female'")?;
                FieldOptions::Gender(GenderOptions { male_is, female_is })
            }
            FieldKind::Title | FieldKind::Department => FieldOptions::Strip(self.strip_options()?),
            FieldKind::HireDate => {
                let date_format = self.date_format(columns, rows)?;
                FieldOptions::HireDate(HireDateOptions { date_format })
            }
            FieldKind::Salary => {
                self.prompter
                    .show("Don't worry! Dollar signs and commas will be automatically removed.");
                FieldOptions::Salary(SalaryOptions {})
            }
        };
        Ok(options)
    }

    fn strip_options(&mut self) -> Result<StripOptions> {
        let strip = self
            .prompter
            .confirm("Do any characters need to be stripped from this string? (y/n)")?;
        if !strip {
            return Ok(StripOptions::default());
        }
        let before = self.prompter.count(
            "How many characters need to be removed from the beginning? (expects a number)",
        )?;
        let after = self
            .prompter
            .count("How many characters need to be removed from the end? (expects a number)")?;
        Ok(StripOptions::from_counts(before, after))
    }

    /// Ask for the hire date pattern and check it against the sample rows.
    /// A pattern that rejects a sample is only kept if the operator insists.
    fn date_format(&mut self, columns: &[String], rows: &[SourceRow]) -> Result<String> {
        loop {
            let format = self.prompter.text(
                "How is the date formatted? (strftime conventions, e.g. %m/%d/%Y for 7/22/2013)",
            )?;
            if format.trim().is_empty() {
                self.prompter.show("A date format is required.");
                continue;
            }
            let rejected = rows.iter().take(SAMPLE_ROWS).find_map(|row| {
                let value = collect_cells(row, columns);
                normalize_hire_date(&value, &format)
                    .err()
                    .map(|err| (value, err))
            });
            let Some((value, err)) = rejected else {
                return Ok(format);
            };
            self.prompter
                .show(&format!("'{value}' does not match '{format}': {err}"));
            if self.prompter.confirm("Keep this format anyway? (y/n)")? {
                return Ok(format);
            }
        }
    }

    fn collect_metadata(&mut self) -> Result<EntityMetadata> {
        let entity_name = self
            .prompter
            .text("Finally, what is the proper title for this entity? (e.g. Austin ISD)")?;
        let entity_type = self
            .prompter
            .text("What type of entity is this? (e.g. School District)")?;
        let received_date = self
            .prompter
            .text("When was this data received from the agency? (e.g. 7/22/2013)")?;
        Ok(EntityMetadata {
            entity_name,
            entity_type,
            received_date,
        })
    }
}
