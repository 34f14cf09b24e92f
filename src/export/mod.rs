//! Export assembly: formatting, options, and the coordinator.

mod csv;
mod format;
mod options;

pub use csv::{CsvExporter, CsvExporterBuilder, ExportDocument};
pub use format::format_cell;
pub use options::{ExportOptions, DEFAULT_FILE_DELIMITER, DEFAULT_VALUE_DELIMITER};
