//! Fitbod workout-log CSV export importer.
//!
//! Each row of the export is one performed set: date, exercise name, set
//! count, reps, weight and a warmup flag, followed by trailing fields that
//! are ignored. Loading is all-or-nothing: a malformed or unclassifiable
//! row aborts the import rather than silently dropping data.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use csv::ReaderBuilder;
use rust_decimal::Decimal;

use crate::analysis::Analysis;
use crate::classify::MuscleClassifier;
use crate::error::{ParseError, Result};
use crate::import::ImportFormat;
use crate::models::{Exercise, Muscle, Set};

/// Format of the parseable part of the export's date field, minus the
/// trailing timezone token handled separately
const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S";

/// One parsed per-set row, pre-grouping
#[derive(Debug)]
struct RawRecord {
    date: DateTime<FixedOffset>,
    name: String,
    muscle: Muscle,
    reps: u32,
    weight: Decimal,
}

/// Importer for the Fitbod workout-log CSV export
pub struct FitbodImporter {
    classifier: MuscleClassifier,
}

impl FitbodImporter {
    pub fn new() -> Self {
        Self {
            classifier: MuscleClassifier::new(),
        }
    }

    /// Import from an already-opened row source.
    ///
    /// Rows are parsed and classified, warmup sets dropped, the surviving
    /// records sorted by `(date, name)`, and contiguous runs sharing
    /// `(date, name, muscle)` folded into one exercise each.
    pub fn import_reader<R: Read>(&self, reader: R) -> Result<Analysis> {
        let mut records = self.load_records(reader)?;
        records.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));

        let exercises = group_records(records);
        tracing::debug!(exercises = exercises.len(), "import complete");

        Ok(Analysis::new(exercises))
    }

    fn load_records<R: Read>(&self, reader: R) -> Result<Vec<RawRecord>> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();

        for (index, row) in csv_reader.records().enumerate() {
            let row = row.map_err(ParseError::from)?;

            if row.len() < 6 {
                return Err(ParseError::ShortRow {
                    row: index + 1,
                    count: row.len(),
                }
                .into());
            }

            // Warmup sets carry a non-empty flag and are excluded entirely
            if !row[5].is_empty() {
                continue;
            }

            let date = parse_export_date(&row[0])?;
            let name = row[1].to_string();
            let muscle = self.classifier.classify(&name)?;
            let _set_count: u32 = parse_number(&row[2], "sets")?;
            let reps: u32 = parse_number(&row[3], "reps")?;
            let weight: Decimal = parse_number(&row[4], "weight")?;

            records.push(RawRecord {
                date,
                name,
                muscle,
                reps,
                weight,
            });
        }

        Ok(records)
    }
}

impl Default for FitbodImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportFormat for FitbodImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false)
    }

    fn import_file(&self, file_path: &Path) -> Result<Analysis> {
        let file = File::open(file_path)?;
        self.import_reader(file)
    }

    fn format_name(&self) -> &'static str {
        "Fitbod CSV"
    }
}

/// Fold sorted per-set records into exercises, one per contiguous run
/// sharing the same `(date, name, muscle)` key.
///
/// Grouping is over adjacency, not a full partition: the caller's sort
/// guarantees same-key rows are contiguous, and each key change starts a
/// new exercise.
fn group_records(records: Vec<RawRecord>) -> Vec<Exercise> {
    let mut exercises: Vec<Exercise> = Vec::new();

    for record in records {
        let set = Set {
            reps: record.reps,
            weight: record.weight,
        };

        match exercises.last_mut() {
            Some(current)
                if current.date == record.date
                    && current.name == record.name
                    && current.muscle == record.muscle =>
            {
                current.sets.push(set);
            }
            _ => exercises.push(Exercise {
                date: record.date,
                name: record.name,
                muscle: record.muscle,
                sets: vec![set],
            }),
        }
    }

    exercises
}

/// Parse the export's date field.
///
/// The field has the shape `"<parseable part> (<TZABBREV>)"`, e.g.
/// `"Wed Jan 01 2020 10:00:00 GMT+0000 (GMT)"`. The parseable part is
/// validated against its fixed character set, split into the local datetime
/// and the `<tzname><offset>` token, and combined into an offset-aware
/// timestamp.
fn parse_export_date(value: &str) -> std::result::Result<DateTime<FixedOffset>, ParseError> {
    let malformed = || ParseError::MalformedDate {
        value: value.to_string(),
    };

    let parseable = extract_parseable(value).ok_or_else(malformed)?;
    let (datetime_part, offset) = split_offset(parseable).ok_or_else(malformed)?;

    let naive =
        NaiveDateTime::parse_from_str(datetime_part, DATE_FORMAT).map_err(|_| malformed())?;

    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(malformed)
}

/// Validate the `"<parseable> (<ABBREV>)"` shape and return the parseable
/// part: `[A-Za-z0-9+: ]` characters followed by a parenthesized uppercase
/// timezone abbreviation.
fn extract_parseable(value: &str) -> Option<&str> {
    let rest = value.strip_suffix(')')?;
    let open = rest.rfind(" (")?;
    let (head, abbrev) = (&rest[..open], &rest[open + 2..]);

    if abbrev.is_empty() || !abbrev.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }

    let allowed =
        |c: char| c.is_ascii_alphanumeric() || c == '+' || c == ':' || c == ' ';
    if head.is_empty() || !head.chars().all(allowed) {
        return None;
    }

    Some(head)
}

/// Split the trailing `<tzname><offset>` token (e.g. `GMT+0000`) off the
/// datetime part and decode the offset.
fn split_offset(parseable: &str) -> Option<(&str, FixedOffset)> {
    let (datetime_part, tz_token) = parseable.rsplit_once(' ')?;

    let plus = tz_token.find('+')?;
    let (tz_name, offset_part) = tz_token.split_at(plus);
    if tz_name.is_empty() || !tz_name.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let digits: Vec<u32> = offset_part[1..]
        .chars()
        .filter(|c| *c != ':')
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()?;
    if digits.len() != 4 {
        return None;
    }

    let hours = (digits[0] * 10 + digits[1]) as i32;
    let minutes = (digits[2] * 10 + digits[3]) as i32;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(hours * 3600 + minutes * 60).map(|offset| (datetime_part, offset))
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    field: &'static str,
) -> std::result::Result<T, ParseError> {
    value.trim().parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    use crate::error::LiftrsError;

    fn import(data: &str) -> Result<Analysis> {
        FitbodImporter::new().import_reader(data.as_bytes())
    }

    #[test]
    fn test_parse_export_date() {
        let date = parse_export_date("Wed Jan 01 2020 10:00:00 GMT+0000 (GMT)").unwrap();

        let expected = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2020, 1, 1, 10, 0, 0)
            .unwrap();
        assert_eq!(date, expected);
    }

    #[test]
    fn test_parse_export_date_with_offset() {
        let date = parse_export_date("Sat Feb 01 2020 18:30:00 CET+0100 (CET)").unwrap();

        assert_eq!(date.offset().local_minus_utc(), 3600);
        let utc = date.naive_utc();
        assert_eq!(utc.format("%H:%M").to_string(), "17:30");
    }

    #[test]
    fn test_malformed_dates_are_rejected() {
        for value in [
            "Wed Jan 01 2020 10:00:00 GMT+0000",       // missing abbreviation
            "Wed Jan 01 2020 10:00:00 GMT+0000 (gmt)", // lowercase abbreviation
            "Wed Jan 01 2020 10:00:00 (GMT)",          // missing timezone token
            "2020-01-01T10:00:00Z",
            "",
        ] {
            assert!(
                matches!(parse_export_date(value), Err(ParseError::MalformedDate { .. })),
                "accepted: {:?}",
                value
            );
        }
    }

    #[test]
    fn test_rows_group_by_date_and_name() {
        let data = "\
Wed Jan 01 2020 10:00:00 GMT+0000 (GMT),Barbell Squat,1,5,100.0,,note
Wed Jan 01 2020 10:00:00 GMT+0000 (GMT),Barbell Squat,1,5,102.5,,note
Thu Jan 02 2020 10:00:00 GMT+0000 (GMT),Barbell Squat,1,5,105.0,,note
";
        let analysis = import(data).unwrap();

        assert_eq!(analysis.len(), 2);
        assert_eq!(analysis.all()[0].sets.len(), 2);
        assert_eq!(analysis.all()[0].sets[1].weight, dec!(102.5));
        assert_eq!(analysis.all()[1].sets.len(), 1);
    }

    #[test]
    fn test_records_are_sorted_by_date_then_name() {
        let data = "\
Thu Jan 02 2020 10:00:00 GMT+0000 (GMT),Barbell Squat,1,5,105.0,
Wed Jan 01 2020 10:00:00 GMT+0000 (GMT),Crunch,1,20,0.0,
Wed Jan 01 2020 10:00:00 GMT+0000 (GMT),Barbell Squat,1,5,100.0,
";
        let analysis = import(data).unwrap();

        let names: Vec<&str> = analysis.all().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Barbell Squat", "Crunch", "Barbell Squat"]);
        assert!(analysis.all()[0].date < analysis.all()[2].date);
    }

    #[test]
    fn test_warmup_rows_are_skipped() {
        let data = "\
Wed Jan 01 2020 10:00:00 GMT+0000 (GMT),Barbell Squat,1,5,60.0,warmup
Wed Jan 01 2020 10:00:00 GMT+0000 (GMT),Barbell Squat,1,5,100.0,
";
        let analysis = import(data).unwrap();

        assert_eq!(analysis.len(), 1);
        assert_eq!(analysis.all()[0].sets.len(), 1);
        assert_eq!(analysis.all()[0].sets[0].weight, dec!(100.0));
    }

    #[test]
    fn test_warmup_rows_skip_validation() {
        // The flag is checked before any field parsing, so an otherwise
        // malformed warmup row does not abort the load
        let data = "\
not a date,Mystery Movement,x,y,z,warmup
Wed Jan 01 2020 10:00:00 GMT+0000 (GMT),Barbell Squat,1,5,100.0,
";
        let analysis = import(data).unwrap();
        assert_eq!(analysis.len(), 1);
    }

    #[test]
    fn test_non_numeric_weight_aborts_load() {
        let data = "Wed Jan 01 2020 10:00:00 GMT+0000 (GMT),Barbell Squat,1,5,heavy,\n";

        match import(data) {
            Err(LiftrsError::Parse(ParseError::InvalidNumber { field, value })) => {
                assert_eq!(field, "weight");
                assert_eq!(value, "heavy");
            }
            other => panic!("expected InvalidNumber, got {:?}", other.map(|a| a.len())),
        }
    }

    #[test]
    fn test_non_numeric_set_count_aborts_load() {
        let data = "Wed Jan 01 2020 10:00:00 GMT+0000 (GMT),Barbell Squat,three,5,100.0,\n";

        assert!(matches!(
            import(data),
            Err(LiftrsError::Parse(ParseError::InvalidNumber { field: "sets", .. }))
        ));
    }

    #[test]
    fn test_unclassifiable_name_aborts_load() {
        let data = "Wed Jan 01 2020 10:00:00 GMT+0000 (GMT),Zzgxqw,1,5,100.0,\n";

        match import(data) {
            Err(LiftrsError::Classification(err)) => assert_eq!(err.name, "Zzgxqw"),
            other => panic!("expected classification error, got {:?}", other.map(|a| a.len())),
        }
    }

    #[test]
    fn test_short_row_aborts_load() {
        let data = "Wed Jan 01 2020 10:00:00 GMT+0000 (GMT),Barbell Squat,1,5\n";

        assert!(matches!(
            import(data),
            Err(LiftrsError::Parse(ParseError::ShortRow { row: 1, count: 4 }))
        ));
    }

    #[test]
    fn test_trailing_fields_are_ignored() {
        let data = "Wed Jan 01 2020 10:00:00 GMT+0000 (GMT),Barbell Squat,1,5,100.0,,extra,more,fields\n";

        let analysis = import(data).unwrap();
        assert_eq!(analysis.len(), 1);
    }

    #[test]
    fn test_can_import_csv_paths_only() {
        let importer = FitbodImporter::new();

        assert!(importer.can_import(Path::new("export.csv")));
        assert!(importer.can_import(Path::new("EXPORT.CSV")));
        assert!(!importer.can_import(Path::new("export.json")));
        assert!(!importer.can_import(Path::new("export")));
    }
}
