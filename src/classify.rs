//! Exercise-name to muscle-group classification.
//!
//! Maps free-text exercise names (user-entered, inconsistent, abbreviated)
//! to the fixed muscle taxonomy: a substring phase over a curated keyword
//! table, with a similarity-scored fallback for names no keyword occurs in.

use crate::error::ClassificationError;
use crate::models::Muscle;
use crate::similarity::sequence_ratio;

/// Minimum similarity ratio for the fuzzy fallback phase
const SIMILARITY_THRESHOLD: f64 = 0.75;

/// Curated keyword phrases and the muscle group each one marks.
///
/// Order is load-bearing: the substring phase returns the first phrase that
/// occurs in the input, so more specific phrases must precede more general
/// ones that could also match.
const KEYWORDS: &[(&str, Muscle)] = &[
    ("Crunch", Muscle::Abs),
    ("Russian Twist", Muscle::Abs),
    ("Leg Raise", Muscle::Abs),
    ("Flutter Kicks", Muscle::Abs),
    ("Sit-Up", Muscle::Abs),
    ("Side Bridge", Muscle::Abs),
    ("Scissor Kick", Muscle::Abs),
    ("Toe Touchers", Muscle::Abs),
    ("Pallof Press", Muscle::Abs),
    ("Cable Wood Chop", Muscle::Abs),
    ("Scissor Crossover Kick", Muscle::Abs),
    ("Plank", Muscle::Abs),
    ("Leg Pull-In", Muscle::Abs),
    ("Knee Raise", Muscle::Abs),
    ("Bird Dog", Muscle::Abs),
    ("Dead Bug", Muscle::Abs),
    ("Abs", Muscle::Abs),
    ("Tricep", Muscle::Triceps),
    ("Bench Dips", Muscle::Triceps),
    // "bell Curl" covers both Barbell Curl and Dumbbell Curl
    ("bell Curl", Muscle::Biceps),
    ("Bicep", Muscle::Biceps),
    ("Preacher Curls", Muscle::Biceps),
    ("bell Wrist Curl", Muscle::Forearms),
    ("Cable Crossover Fly", Muscle::Chest),
    ("Chest", Muscle::Chest),
    ("Bench Press", Muscle::Chest),
    ("Machine Fly", Muscle::Chest),
    ("Push Up", Muscle::Chest),
    ("Smith Machine Press", Muscle::Chest),
    ("Pulldown", Muscle::UpperBack),
    ("Cable Row", Muscle::UpperBack),
    ("Machine Row", Muscle::UpperBack),
    ("bell Row", Muscle::UpperBack),
    ("Pull Up", Muscle::UpperBack),
    ("Pull-Up", Muscle::UpperBack),
    ("Pullup", Muscle::UpperBack),
    ("Chin Up", Muscle::UpperBack),
    ("Smith Machine Row", Muscle::UpperBack),
    ("Shotgun Row", Muscle::UpperBack),
    ("Back Extension", Muscle::LowerBack),
    ("Superman", Muscle::LowerBack),
    ("Hip", Muscle::Glutes),
    ("Step Up", Muscle::Glutes),
    ("Leg Lift", Muscle::Glutes),
    ("Glute", Muscle::Glutes),
    ("Rack Pulls", Muscle::Glutes),
    ("Pull Through", Muscle::Glutes),
    ("Shoulder Press", Muscle::Shoulders),
    ("Lateral", Muscle::Shoulders),
    ("Face Pull", Muscle::Shoulders),
    ("Delt Fly", Muscle::Shoulders),
    ("One-Arm Upright Row", Muscle::Shoulders),
    ("Dumbbell Raise", Muscle::Shoulders),
    ("Barbell Shrug", Muscle::Trapezius),
    ("Neck", Muscle::Trapezius),
    ("Leg Press", Muscle::Quads),
    ("Leg Extension", Muscle::Quads),
    ("Lunge", Muscle::Quads),
    ("Squat", Muscle::Quads),
    ("Tuck Jump", Muscle::Quads),
    ("Mountain Climbers", Muscle::Quads),
    ("Burpee", Muscle::Quads),
    ("Leg Curl", Muscle::Hamstrings),
    ("Deadlift", Muscle::Hamstrings),
    ("Calf Raise", Muscle::Calves),
    ("Thigh Abductor", Muscle::Abductors),
    ("Clam", Muscle::Abductors),
    ("Thigh Adductor", Muscle::Adductors),
];

/// Classifier mapping a raw exercise name to a muscle group
///
/// Pure function over the name and the keyword table; repeated calls with
/// the same name always return the same result.
pub struct MuscleClassifier {
    keywords: Vec<(&'static str, Muscle)>,
}

impl MuscleClassifier {
    /// Create a classifier with the curated keyword table
    pub fn new() -> Self {
        Self {
            keywords: KEYWORDS.to_vec(),
        }
    }

    /// Create a classifier with a custom keyword table
    pub fn with_keywords(keywords: Vec<(&'static str, Muscle)>) -> Self {
        Self { keywords }
    }

    /// Classify an exercise name as the muscle group it works.
    ///
    /// The substring phase wins when any keyword occurs in the name
    /// (case-sensitive, first table entry wins). Otherwise every keyword is
    /// scored against the name and, among those at or above the similarity
    /// threshold, the one with the smallest `(ratio, keyword)` pair is
    /// selected — ties in ratio break to the alphabetically first keyword.
    pub fn classify(&self, name: &str) -> Result<Muscle, ClassificationError> {
        for (keyword, muscle) in &self.keywords {
            if name.contains(keyword) {
                return Ok(*muscle);
            }
        }

        let mut candidates = Vec::new();
        for (keyword, muscle) in &self.keywords {
            let ratio = sequence_ratio(keyword, name);
            if ratio >= SIMILARITY_THRESHOLD {
                candidates.push((ratio, *keyword, *muscle));
            }
        }

        candidates
            .into_iter()
            .min_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(b.1)))
            .map(|(ratio, keyword, muscle)| {
                tracing::debug!(exercise = name, keyword, ratio, "fuzzy-matched exercise name");
                muscle
            })
            .ok_or_else(|| ClassificationError {
                name: name.to_string(),
            })
    }
}

impl Default for MuscleClassifier {
    fn default() -> Self {
        Self::new()
    }
}
