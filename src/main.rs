use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tabled::{Table, Tabled};

use liftrs::analysis::Analysis;
use liftrs::charts;
use liftrs::config::AppConfig;
use liftrs::export::{json as json_export, AnalysisDocument};
use liftrs::import::{fitbod::FitbodImporter, ImportFormat};
use liftrs::logging::{self, LogLevel};
use liftrs::models::{Exercise, Muscle};

/// liftrs - Strength Log Analysis CLI
///
/// A Rust-based tool for loading workout-log CSV exports, classifying
/// exercises by muscle group and charting weight progression over time.
#[derive(Parser)]
#[command(name = "liftrs")]
#[command(author = "liftrs Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Strength Log Analysis CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a workout-log CSV export and show a summary
    Import {
        /// Input file path (Fitbod CSV export)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List exercises, optionally filtered by muscle group
    List {
        /// Input file path (Fitbod CSV export)
        #[arg(short, long)]
        file: PathBuf,

        /// Muscle group to filter by (e.g. "chest", "upper back")
        #[arg(short, long)]
        muscle: Option<Muscle>,
    },

    /// Build progression chart series for a muscle group
    Chart {
        /// Input file path (Fitbod CSV export)
        #[arg(short, long)]
        file: PathBuf,

        /// Muscle group to chart
        #[arg(short, long)]
        muscle: Muscle,

        /// Output file path (stdout if not given)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the analysis as a JSON document
    Export {
        /// Input file path (Fitbod CSV export)
        #[arg(short, long)]
        file: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Table row for terminal display of one exercise
#[derive(Tabled)]
struct ExerciseRow {
    #[tabled(rename = "Date")]
    date: String,

    #[tabled(rename = "Exercise")]
    name: String,

    #[tabled(rename = "Muscle")]
    muscle: String,

    #[tabled(rename = "Sets")]
    sets: usize,

    #[tabled(rename = "Max")]
    max_weight: String,

    #[tabled(rename = "Avg")]
    avg_weight: String,
}

impl ExerciseRow {
    fn from_exercise(exercise: &Exercise) -> Result<Self> {
        let (max_weight, avg_weight) = if exercise.is_bodyweight()? {
            ("-".to_string(), "-".to_string())
        } else {
            (
                exercise.maximum_weight()?.to_string(),
                exercise.average_weight()?.round_dp(1).to_string(),
            )
        };

        Ok(Self {
            date: exercise.date.format("%Y-%m-%d").to_string(),
            name: exercise.name.clone(),
            muscle: exercise.muscle.to_string(),
            sets: exercise.sets.len(),
            max_weight,
            avg_weight,
        })
    }
}

fn load_analysis(file: &PathBuf) -> Result<Analysis> {
    let importer = FitbodImporter::new();
    let analysis = importer.import_file(file)?;

    Ok(analysis)
}

fn print_exercise_table(exercises: &[&Exercise]) -> Result<()> {
    let rows = exercises
        .iter()
        .map(|exercise| ExerciseRow::from_exercise(exercise))
        .collect::<Result<Vec<_>>>()?;

    println!("{}", Table::new(rows));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;

    // Verbosity flags override the configured log level
    config.log.level = match cli.verbose {
        0 => config.log.level,
        1 => LogLevel::Info,
        2 => LogLevel::Debug,
        _ => LogLevel::Trace,
    };
    logging::init_logging(&config.log)?;

    match cli.command {
        Commands::Import { file } => {
            println!("{}", "Importing workout log...".green().bold());

            let analysis = load_analysis(&file)?;

            println!("  File: {}", file.display());
            println!("  Exercises: {}", analysis.len());
            for muscle in Muscle::ALL {
                let count = analysis.exercises(Some(muscle)).len();
                if count > 0 {
                    println!("  {:<12} {}", format!("{}:", muscle), count);
                }
            }

            println!("{}", "✓ Import completed successfully".green());
        }

        Commands::List { file, muscle } => {
            let analysis = load_analysis(&file)?;
            let exercises = analysis.exercises(muscle);

            if exercises.is_empty() {
                println!("{}", "No exercises found".yellow());
            } else {
                print_exercise_table(&exercises)?;
            }
        }

        Commands::Chart { file, muscle, output } => {
            let analysis = load_analysis(&file)?;
            let series = charts::muscle_progression(&analysis, muscle)?;

            match output {
                Some(path) => {
                    json_export::export_json(&series, &path)?;
                    println!(
                        "{}",
                        format!("✓ Wrote {} series to {}", series.len(), path.display()).green()
                    );
                }
                None => println!("{}", serde_json::to_string_pretty(&series)?),
            }
        }

        Commands::Export { file, output } => {
            println!("{}", "Exporting analysis...".yellow().bold());

            let analysis = load_analysis(&file)?;
            let document = AnalysisDocument::from_analysis(&analysis);
            json_export::write_analysis(&document, &output)?;

            println!("  Output: {}", output.display());
            println!("{}", "✓ Export completed successfully".yellow());
        }
    }

    Ok(())
}
