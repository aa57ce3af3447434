//! Read-only queries over a loaded exercise collection.

use crate::models::{Exercise, Muscle};

/// Read-only view over an ordered exercise collection
///
/// Created once per load and never mutated afterwards; filtering returns
/// borrowed views in original order.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    exercises: Vec<Exercise>,
}

impl Analysis {
    /// Wrap an ordered exercise collection
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    /// All exercises, in load order
    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Exercises worked by the given muscle group, or all exercises when no
    /// filter is given; original relative order is preserved
    pub fn exercises(&self, muscle: Option<Muscle>) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|exercise| muscle.map_or(true, |m| exercise.muscle == m))
            .collect()
    }

    /// Number of loaded exercises
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the load produced no exercises
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone};
    use rust_decimal_macros::dec;

    use crate::models::Set;

    fn test_date(day: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2020, 1, day, 10, 0, 0)
            .unwrap()
    }

    fn exercise(day: u32, name: &str, muscle: Muscle) -> Exercise {
        Exercise {
            date: test_date(day),
            name: name.to_string(),
            muscle,
            sets: vec![Set {
                reps: 10,
                weight: dec!(20),
            }],
        }
    }

    fn test_analysis() -> Analysis {
        Analysis::new(vec![
            exercise(1, "Crunch", Muscle::Abs),
            exercise(1, "Tricep Extension", Muscle::Triceps),
            exercise(2, "Plank", Muscle::Abs),
        ])
    }

    #[test]
    fn test_filter_by_muscle() {
        let analysis = test_analysis();

        let abs = analysis.exercises(Some(Muscle::Abs));
        assert_eq!(abs.len(), 2);
        assert_eq!(abs[0].name, "Crunch");
        assert_eq!(abs[1].name, "Plank");

        let triceps = analysis.exercises(Some(Muscle::Triceps));
        assert_eq!(triceps.len(), 1);

        let chest = analysis.exercises(Some(Muscle::Chest));
        assert!(chest.is_empty());
    }

    #[test]
    fn test_no_filter_returns_all_in_order() {
        let analysis = test_analysis();

        let all = analysis.exercises(None);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Crunch");
        assert_eq!(all[1].name, "Tricep Extension");
        assert_eq!(all[2].name, "Plank");
    }

    #[test]
    fn test_filtering_does_not_mutate() {
        let analysis = test_analysis();
        let before = analysis.clone();

        analysis.exercises(Some(Muscle::Abs));
        analysis.exercises(None);

        assert_eq!(analysis, before);
        assert_eq!(analysis.len(), 3);
    }
}
