use crate::errata_sync::domain::oval::Definition;
use std::collections::BTreeMap;

/// Mapping from issue year to the reference IDs issued that year.
///
/// Reference IDs keep encounter order within a bucket and duplicates
/// are preserved; the index claims no dedup policy.
pub type YearIndex = BTreeMap<String, Vec<String>>;

/// Groups definitions by the year portion of their advisory issue date.
///
/// Each definition with a parseable issue date contributes its primary
/// reference ID to exactly one bucket. Definitions without one are
/// silently skipped - not every definition carries a reference-tagged
/// issue date, and that is not an error. Never fails; an empty input
/// yields an empty index.
pub fn build_year_index(definitions: &[Definition]) -> YearIndex {
    let mut index = YearIndex::new();

    for definition in definitions {
        let date = definition.metadata.advisory.issued.date.trim();
        let Some(year) = extract_year(date) else {
            continue;
        };
        index
            .entry(year.to_string())
            .or_default()
            .push(definition.metadata.reference.ref_id.clone());
    }

    index
}

/// Takes the first `-`-delimited segment of a `YYYY-MM-DD` issue date.
/// Anything that is not four ASCII digits is treated as unparseable.
fn extract_year(date: &str) -> Option<&str> {
    let year = date.split('-').next()?;
    if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) {
        Some(year)
    } else {
        None
    }
}
