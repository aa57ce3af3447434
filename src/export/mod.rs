//! Transport documents for the analysis results.
//!
//! The document types mirror the exercise collection as plain records
//! (RFC 3339 date string, name, muscle tag, `{reps, weight}` array) so an
//! external storage or HTTP layer can persist and replay an analysis
//! without touching the domain types directly.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::Analysis;
use crate::error::CalculationError;
use crate::models::{Exercise, Muscle, Set};

pub mod json;

/// Export format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Result<Self, ExportError> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Export and re-import errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Inbound document violated a domain invariant
    #[error("Invalid document: {0}")]
    InvalidDocument(#[from] CalculationError),
}

/// Plain transport form of one set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRecord {
    pub reps: u32,
    pub weight: Decimal,
}

/// Plain transport form of one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// RFC 3339 timestamp with its original UTC offset
    pub date: DateTime<FixedOffset>,

    pub name: String,

    /// Stable muscle tag, losslessly mapping back to the taxonomy
    pub muscle: Muscle,

    pub sets: Vec<SetRecord>,
}

/// Transport document wrapping a full analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDocument {
    pub exercises: Vec<ExerciseRecord>,
}

impl AnalysisDocument {
    /// Snapshot an analysis as plain records
    pub fn from_analysis(analysis: &Analysis) -> Self {
        Self {
            exercises: analysis
                .all()
                .iter()
                .map(|exercise| ExerciseRecord {
                    date: exercise.date,
                    name: exercise.name.clone(),
                    muscle: exercise.muscle,
                    sets: exercise
                        .sets
                        .iter()
                        .map(|set| SetRecord {
                            reps: set.reps,
                            weight: set.weight,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Rebuild the analysis from plain records.
    ///
    /// External data is validated fail-fast: an exercise record without
    /// sets cannot expose weight statistics and is rejected here rather
    /// than surfacing later as a calculation error.
    pub fn try_into_analysis(self) -> Result<Analysis, ExportError> {
        let mut exercises = Vec::with_capacity(self.exercises.len());

        for record in self.exercises {
            if record.sets.is_empty() {
                return Err(CalculationError::EmptySets { name: record.name }.into());
            }

            exercises.push(Exercise {
                date: record.date,
                name: record.name,
                muscle: record.muscle,
                sets: record
                    .sets
                    .into_iter()
                    .map(|set| Set {
                        reps: set.reps,
                        weight: set.weight,
                    })
                    .collect(),
            });
        }

        Ok(Analysis::new(exercises))
    }
}
