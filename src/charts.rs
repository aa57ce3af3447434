//! Progression series for downstream chart rendering.
//!
//! The core hands a renderer one line series per exercise name: the average
//! weight lifted on each date the exercise was performed. Rendering itself
//! lives outside this crate.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analysis::Analysis;
use crate::error::CalculationError;
use crate::models::Muscle;

/// One point in a progression series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// When the exercise was performed
    pub date: DateTime<FixedOffset>,

    /// Average weight across the sets performed that day
    pub value: Decimal,
}

/// Ordered-by-date line series for one exercise name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Exercise name, exactly as recorded
    pub name: String,

    /// Progression points, ascending by date
    pub points: Vec<ChartPoint>,
}

/// Build the progression series for one muscle group.
///
/// Bodyweight exercises are excluded (an average weight of zero carries no
/// progression signal). Names are grouped by exact string equality and the
/// series are ordered alphabetically by name.
pub fn muscle_progression(
    analysis: &Analysis,
    muscle: Muscle,
) -> Result<Vec<ChartSeries>, CalculationError> {
    let mut weighted = Vec::new();
    for exercise in analysis.exercises(Some(muscle)) {
        if !exercise.is_bodyweight()? {
            weighted.push(exercise);
        }
    }
    weighted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut series: Vec<ChartSeries> = Vec::new();
    for exercise in weighted {
        let point = ChartPoint {
            date: exercise.date,
            value: exercise.average_weight()?,
        };

        match series.last_mut() {
            Some(current) if current.name == exercise.name => current.points.push(point),
            _ => series.push(ChartSeries {
                name: exercise.name.clone(),
                points: vec![point],
            }),
        }
    }

    for line in &mut series {
        line.points.sort_by(|a, b| a.date.cmp(&b.date));
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    use crate::models::{Exercise, Set};

    fn test_date(day: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2020, 3, day, 18, 30, 0)
            .unwrap()
    }

    fn exercise(day: u32, name: &str, muscle: Muscle, weights: &[Decimal]) -> Exercise {
        Exercise {
            date: test_date(day),
            name: name.to_string(),
            muscle,
            sets: weights.iter().map(|w| Set { reps: 8, weight: *w }).collect(),
        }
    }

    #[test]
    fn test_series_per_name_sorted_alphabetically() {
        let analysis = Analysis::new(vec![
            exercise(1, "Machine Fly", Muscle::Chest, &[dec!(30)]),
            exercise(1, "Barbell Bench Press", Muscle::Chest, &[dec!(60), dec!(80)]),
            exercise(2, "Machine Fly", Muscle::Chest, &[dec!(35)]),
        ]);

        let series = muscle_progression(&analysis, Muscle::Chest).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Barbell Bench Press");
        assert_eq!(series[1].name, "Machine Fly");

        assert_eq!(series[0].points.len(), 1);
        assert_eq!(series[0].points[0].value, dec!(70));

        assert_eq!(series[1].points.len(), 2);
        assert_eq!(series[1].points[0].value, dec!(30));
        assert_eq!(series[1].points[1].value, dec!(35));
    }

    #[test]
    fn test_points_ordered_by_date() {
        let analysis = Analysis::new(vec![
            exercise(9, "Barbell Squat", Muscle::Quads, &[dec!(100)]),
            exercise(2, "Barbell Squat", Muscle::Quads, &[dec!(90)]),
        ]);

        let series = muscle_progression(&analysis, Muscle::Quads).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].points[0].value, dec!(90));
        assert_eq!(series[0].points[1].value, dec!(100));
    }

    #[test]
    fn test_bodyweight_exercises_are_excluded() {
        let analysis = Analysis::new(vec![
            exercise(1, "Push Up", Muscle::Chest, &[dec!(0), dec!(0)]),
            exercise(1, "Barbell Bench Press", Muscle::Chest, &[dec!(60)]),
        ]);

        let series = muscle_progression(&analysis, Muscle::Chest).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].name, "Barbell Bench Press");
    }

    #[test]
    fn test_other_muscles_are_excluded() {
        let analysis = Analysis::new(vec![
            exercise(1, "Barbell Squat", Muscle::Quads, &[dec!(100)]),
            exercise(1, "Barbell Bench Press", Muscle::Chest, &[dec!(60)]),
        ]);

        let series = muscle_progression(&analysis, Muscle::Quads).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].name, "Barbell Squat");
    }

    #[test]
    fn test_empty_sets_fail_fast() {
        let analysis = Analysis::new(vec![Exercise {
            date: test_date(1),
            name: "Barbell Squat".to_string(),
            muscle: Muscle::Quads,
            sets: Vec::new(),
        }]);

        assert!(matches!(
            muscle_progression(&analysis, Muscle::Quads),
            Err(CalculationError::EmptySets { .. })
        ));
    }
}
