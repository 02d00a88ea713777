//! Terminal presentation helpers: warnings and aligned tables.

pub mod table;
pub mod warn;

pub use table::Table;
pub use warn::warn_print;
