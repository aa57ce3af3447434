use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CalculationError;

/// Muscle groups worked by an exercise
///
/// Closed taxonomy; each variant carries a stable string tag used for
/// serialization round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Muscle {
    #[serde(rename = "abs")]
    Abs,
    #[serde(rename = "triceps")]
    Triceps,
    #[serde(rename = "biceps")]
    Biceps,
    #[serde(rename = "forearms")]
    Forearms,
    #[serde(rename = "chest")]
    Chest,
    #[serde(rename = "upper back")]
    UpperBack,
    #[serde(rename = "lower back")]
    LowerBack,
    #[serde(rename = "glutes")]
    Glutes,
    #[serde(rename = "shoulders")]
    Shoulders,
    #[serde(rename = "trapezius")]
    Trapezius,
    #[serde(rename = "quads")]
    Quads,
    #[serde(rename = "hamstrings")]
    Hamstrings,
    #[serde(rename = "calves")]
    Calves,
    #[serde(rename = "abductors")]
    Abductors,
    #[serde(rename = "adductors")]
    Adductors,
}

impl Muscle {
    /// All muscle groups, in taxonomy order
    pub const ALL: [Muscle; 15] = [
        Muscle::Abs,
        Muscle::Triceps,
        Muscle::Biceps,
        Muscle::Forearms,
        Muscle::Chest,
        Muscle::UpperBack,
        Muscle::LowerBack,
        Muscle::Glutes,
        Muscle::Shoulders,
        Muscle::Trapezius,
        Muscle::Quads,
        Muscle::Hamstrings,
        Muscle::Calves,
        Muscle::Abductors,
        Muscle::Adductors,
    ];

    /// Stable string tag for this muscle group
    pub fn as_str(&self) -> &'static str {
        match self {
            Muscle::Abs => "abs",
            Muscle::Triceps => "triceps",
            Muscle::Biceps => "biceps",
            Muscle::Forearms => "forearms",
            Muscle::Chest => "chest",
            Muscle::UpperBack => "upper back",
            Muscle::LowerBack => "lower back",
            Muscle::Glutes => "glutes",
            Muscle::Shoulders => "shoulders",
            Muscle::Trapezius => "trapezius",
            Muscle::Quads => "quads",
            Muscle::Hamstrings => "hamstrings",
            Muscle::Calves => "calves",
            Muscle::Abductors => "abductors",
            Muscle::Adductors => "adductors",
        }
    }
}

impl std::fmt::Display for Muscle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Muscle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Muscle::ALL
            .iter()
            .find(|muscle| muscle.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Invalid muscle group: {}", s))
    }
}

/// One performed unit of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Set {
    /// Repetition count
    pub reps: u32,

    /// Weight used; zero marks a bodyweight set
    pub weight: Decimal,
}

/// One muscle-classified movement performed on a date, comprising the sets
/// recorded for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// When the exercise was performed
    pub date: DateTime<FixedOffset>,

    /// Exercise name as recorded in the log
    pub name: String,

    /// Muscle group the exercise works
    pub muscle: Muscle,

    /// Performed sets, in recorded order; never empty for loaded data
    pub sets: Vec<Set>,
}

impl Exercise {
    /// Weights across all sets, in set order
    pub fn weights(&self) -> Vec<Decimal> {
        self.sets.iter().map(|set| set.weight).collect()
    }

    /// Heaviest weight used across all sets
    pub fn maximum_weight(&self) -> Result<Decimal, CalculationError> {
        self.sets
            .iter()
            .map(|set| set.weight)
            .max()
            .ok_or_else(|| CalculationError::EmptySets {
                name: self.name.clone(),
            })
    }

    /// Mean weight across all sets
    pub fn average_weight(&self) -> Result<Decimal, CalculationError> {
        if self.sets.is_empty() {
            return Err(CalculationError::EmptySets {
                name: self.name.clone(),
            });
        }

        let total: Decimal = self.sets.iter().map(|set| set.weight).sum();
        Ok(total / Decimal::from(self.sets.len()))
    }

    /// An exercise whose heaviest recorded weight is zero was performed with
    /// bodyweight only
    pub fn is_bodyweight(&self) -> Result<bool, CalculationError> {
        Ok(self.maximum_weight()? == Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn test_date() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2020, 1, 1, 10, 0, 0)
            .unwrap()
    }

    fn exercise_with_weights(weights: &[Decimal]) -> Exercise {
        Exercise {
            date: test_date(),
            name: "Barbell Bench Press".to_string(),
            muscle: Muscle::Chest,
            sets: weights.iter().map(|w| Set { reps: 5, weight: *w }).collect(),
        }
    }

    #[test]
    fn test_muscle_serialization_tags() {
        let json = serde_json::to_string(&Muscle::UpperBack).unwrap();
        assert_eq!(json, "\"upper back\"");

        let deserialized: Muscle = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Muscle::UpperBack);
    }

    #[test]
    fn test_muscle_round_trip_all_variants() {
        for muscle in Muscle::ALL {
            let json = serde_json::to_string(&muscle).unwrap();
            let deserialized: Muscle = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, muscle);
        }
    }

    #[test]
    fn test_muscle_from_str() {
        assert_eq!("lower back".parse::<Muscle>().unwrap(), Muscle::LowerBack);
        assert_eq!("quads".parse::<Muscle>().unwrap(), Muscle::Quads);
        assert!("neck".parse::<Muscle>().is_err());
    }

    #[test]
    fn test_muscle_display_matches_tag() {
        for muscle in Muscle::ALL {
            assert_eq!(muscle.to_string(), muscle.as_str());
        }
    }

    #[test]
    fn test_derived_stats() {
        let exercise = exercise_with_weights(&[dec!(10), dec!(20)]);

        assert_eq!(exercise.maximum_weight().unwrap(), dec!(20));
        assert_eq!(exercise.average_weight().unwrap(), dec!(15));
        assert!(!exercise.is_bodyweight().unwrap());
    }

    #[test]
    fn test_bodyweight_detection() {
        let exercise = exercise_with_weights(&[dec!(0), dec!(0), dec!(0)]);
        assert!(exercise.is_bodyweight().unwrap());
    }

    #[test]
    fn test_empty_sets_is_an_error() {
        let exercise = exercise_with_weights(&[]);

        assert!(matches!(
            exercise.maximum_weight(),
            Err(CalculationError::EmptySets { .. })
        ));
        assert!(matches!(
            exercise.average_weight(),
            Err(CalculationError::EmptySets { .. })
        ));
    }

    #[test]
    fn test_weights_preserve_set_order() {
        let exercise = exercise_with_weights(&[dec!(30), dec!(10), dec!(20)]);
        assert_eq!(exercise.weights(), vec![dec!(30), dec!(10), dec!(20)]);
    }

    #[test]
    fn test_exercise_serialization_round_trip() {
        let exercise = exercise_with_weights(&[dec!(42.5)]);

        let json = serde_json::to_string(&exercise).unwrap();
        assert!(json.contains("\"muscle\":\"chest\""));

        let deserialized: Exercise = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, exercise);
    }
}
