//! Tabular input and output

pub mod output;
pub mod rows;

#[cfg(feature = "json")]
pub use output::write_json;
pub use output::{to_output_rows, write_csv, write_csv_file, OutputRow, OUTPUT_COLUMNS};
pub use rows::{read_rows, read_rows_from, BiopsyRow, ImagingRow, RadiologyRow};
