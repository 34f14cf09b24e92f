//! Export options.

use serde::{Deserialize, Serialize};

/// Default cell separator.
pub const DEFAULT_FILE_DELIMITER: &str = ",";

/// Default separator for multiple values within a single cell.
pub const DEFAULT_VALUE_DELIMITER: &str = "\t";

/// Options controlling the shape of an export.
///
/// All fields default to the values Protégé's CSV export uses: comma cell
/// separator, tab value separator, every flag off, empty trailer text.
/// Missing fields are filled from these defaults when deserializing a
/// partial configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Separates cells within a row.
    pub file_delimiter: String,
    /// Separates multiple values within one cell.
    pub value_delimiter: String,
    /// Prepend a header row with column labels.
    pub include_headers: bool,
    /// Include a column with each entity's kind.
    pub include_entity_types: bool,
    /// Render entities through the display renderer instead of raw IRIs.
    pub use_display_rendering: bool,
    /// Include a column listing each class's direct superclasses.
    pub include_superclasses: bool,
    /// Append a trailer block containing `trailer_text`.
    pub include_trailer_text: bool,
    /// Custom text for the trailer block.
    pub trailer_text: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            file_delimiter: DEFAULT_FILE_DELIMITER.to_string(),
            value_delimiter: DEFAULT_VALUE_DELIMITER.to_string(),
            include_headers: false,
            include_entity_types: false,
            use_display_rendering: false,
            include_superclasses: false,
            include_trailer_text: false,
            trailer_text: String::new(),
        }
    }
}
