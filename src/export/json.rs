use std::io::Write;
use std::path::Path;

use super::{AnalysisDocument, ExportError};

/// Write an analysis document to a JSON file
pub fn write_analysis<P: AsRef<Path>>(
    document: &AnalysisDocument,
    output_path: P,
) -> Result<(), ExportError> {
    export_json(document, output_path)
}

/// Read an analysis document back from a JSON file
pub fn read_analysis<P: AsRef<Path>>(input_path: P) -> Result<AnalysisDocument, ExportError> {
    let content = std::fs::read_to_string(input_path)?;

    serde_json::from_str(&content).map_err(|e| ExportError::SerializationError(e.to_string()))
}

/// Export any serializable data structure to JSON
pub fn export_json<T, P>(data: &T, output_path: P) -> Result<(), ExportError>
where
    T: serde::Serialize,
    P: AsRef<Path>,
{
    let json_data = serde_json::to_string_pretty(data)
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;

    let mut file = std::fs::File::create(output_path)?;
    file.write_all(json_data.as_bytes())?;

    Ok(())
}
