use std::path::Path;

use crate::analysis::Analysis;
use crate::error::Result;

pub mod fitbod;

/// Trait for importing workout-log data from different file formats
pub trait ImportFormat {
    /// Check if this importer can handle the given file
    fn can_import(&self, file_path: &Path) -> bool;

    /// Import the file into an analysis
    fn import_file(&self, file_path: &Path) -> Result<Analysis>;

    /// Get the format name for this importer
    fn format_name(&self) -> &'static str;
}
