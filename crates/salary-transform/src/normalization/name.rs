//! Person name normalization.
//!
//! Name handling is split in two. [`prepare_name_input`] repairs the
//! separator quirks seen in salary spreadsheets; a [`NameNormalizer`] then
//! turns the repaired text into the canonical display form. The normalizer
//! is a seam: tests and callers with their own name rules plug in a
//! different implementation.

use human_name::Name;

/// Turns a raw person name into its canonical display string.
pub trait NameNormalizer {
    /// `no_separator_hint` is true when the source has no separator between
    /// surname and given name and one was inserted at the first space.
    fn normalize_person_name(&self, raw: &str, no_separator_hint: bool) -> String;
}

/// Repair separator quirks before name parsing.
///
/// - A name with a comma but no space (`SMITH,JOHN`) gets a space after each
///   comma.
/// - With `no_separator`, the first space is replaced by `", "`, turning
///   `SMITH JOHN` into `SMITH, JOHN`. Only the first space is touched; a name
///   with no space is left alone.
pub fn prepare_name_input(value: &str, no_separator: bool) -> String {
    let mut name = value.to_string();
    if !name.contains(' ') && name.contains(',') {
        name = name.replace(',', ", ").trim().to_string();
    }
    if no_separator {
        if let Some(first_space) = name.find(' ') {
            name.replace_range(first_space..first_space + 1, ", ");
        }
    }
    name
}

/// Repair and normalize a collected name value.
pub fn normalize_name(value: &str, no_separator: bool, normalizer: &dyn NameNormalizer) -> String {
    let prepared = prepare_name_input(value, no_separator);
    normalizer.normalize_person_name(&prepared, no_separator)
}

/// Default name normalizer producing `Last, First Middle Suffix`.
///
/// Parsing is delegated to [`human_name`], which understands both
/// `Last, First Middle` and `First Middle Last` input, drops honorific
/// prefixes, recognises generational and professional suffixes, and name-cases
/// the parts (`McDonald`, `de la Vega`). Text it cannot parse as a person name
/// (a single word, an empty cell) is returned trimmed and unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalNameNormalizer;

impl NameNormalizer for CanonicalNameNormalizer {
    fn normalize_person_name(&self, raw: &str, _no_separator_hint: bool) -> String {
        match Name::parse(raw) {
            Some(name) => display_last_first(&name),
            None => raw.trim().to_string(),
        }
    }
}

fn display_last_first(name: &Name) -> String {
    let surname = name.surname();
    let generation = name.generational_suffix();

    // `display_full` is `Given Middle Surname[, Suffix]`.
    let full = name.display_full();
    let mut leading: &str = &full;
    if let Some(suffix) = generation
        && let Some(stripped) = leading
            .strip_suffix(suffix)
            .and_then(|rest| rest.strip_suffix(", "))
    {
        leading = stripped;
    }
    let given = leading.strip_suffix(surname).unwrap_or_default().trim();

    let mut out = surname.to_string();
    if !given.is_empty() {
        out.push_str(", ");
        out.push_str(given);
    }
    for suffix in [generation, name.honorific_suffix()].into_iter().flatten() {
        out.push(' ');
        out.push_str(suffix);
    }
    out
}
