// Library interface for liftrs modules
// This allows integration tests to access the core functionality

pub mod analysis;
pub mod charts;
pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;
pub mod similarity;

// Re-export commonly used types for convenience
pub use analysis::Analysis;
pub use charts::{muscle_progression, ChartPoint, ChartSeries};
pub use classify::MuscleClassifier;
pub use error::{ClassificationError, LiftrsError, ParseError, Result};
pub use export::AnalysisDocument;
pub use import::fitbod::FitbodImporter;
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{Exercise, Muscle, Set};
