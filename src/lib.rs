pub mod output;

pub use output::{Format, csv_field, write_entries, write_sentences};
