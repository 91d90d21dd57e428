pub mod parse;
pub mod types;

pub use parse::{parse_query, ParsedFilter};
pub use types::{PropertyFilter, SortField, SortOrder};
