//! Display formatting for the rendering surface
//!
//! Pure string formatting with no financial semantics: Indian-convention
//! digit grouping and word expansion of amounts and percentages. Shared
//! verbatim by every calculator.

mod currency;
mod words;

pub use currency::{format_inr, group_indian};
pub use words::{amount_in_words, percent_in_words};
