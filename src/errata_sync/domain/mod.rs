/// Domain models of the advisory corpus.
pub mod errata;
pub mod oval;
pub mod ref_id;
pub mod year_index;

pub use errata::Errata;
pub use oval::{Definition, OvalDefinitions};
pub use ref_id::normalize_ref_id;
pub use year_index::{build_year_index, YearIndex};
