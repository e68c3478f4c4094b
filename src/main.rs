//! FitCoach command-line interface.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitcoach::agent::AgentClient;
use fitcoach::export::{export_hevy_csv_to_file, generate_hevy_filename, HevyExportOptions};
use fitcoach::nutrition::{MealType, NutritionEntry, NutritionLog};
use fitcoach::progress::ProgressTracker;
use fitcoach::solar::{calculate_sun_times, Coordinates, DayKind};
use fitcoach::storage::config::{self, AppConfig};
use fitcoach::storage::{Database, SessionStore};
use fitcoach::workouts::{WorkoutSession, WorkoutSet};

#[derive(Parser)]
#[command(name = "fitcoach", version, about = "Fitness coaching toolkit")]
struct Cli {
    /// Database file (defaults to the application data directory)
    #[arg(long, global = true, env = "FITCOACH_DB")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show sunrise and sunset times
    Sun {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Latitude in degrees, defaults to the configured location
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in degrees, defaults to the configured location
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
    },
    /// Log a completed set
    LogSet {
        /// Exercise identifier
        exercise: String,
        /// Weight in kg
        weight: f64,
        /// Repetitions
        reps: u32,
        /// Rate of perceived exertion
        #[arg(long)]
        rpe: Option<f32>,
        /// Duration in seconds
        #[arg(long)]
        seconds: Option<u32>,
    },
    /// Show progress for one exercise, or all when omitted
    Progress {
        exercise: Option<String>,
    },
    /// Show the composite strength score
    Score,
    /// Save today's logged sets as a workout session
    Session {
        /// Workout name
        name: String,
        /// Workout notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Export workout history in Hevy CSV format
    Export {
        /// Output file
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Include the RPE column
        #[arg(long)]
        rpe: bool,
    },
    /// Chat with the coach
    Chat {
        message: String,
        /// Conversation to continue
        #[arg(long)]
        conversation: Option<String>,
        /// Use the multi-agent coach team
        #[arg(long)]
        team: bool,
    },
    /// Check backend health
    Health,
    /// Nutrition log
    Nutrition {
        #[command(subcommand)]
        command: NutritionCommand,
    },
}

#[derive(Subcommand)]
enum NutritionCommand {
    /// Log a food item for today
    Add {
        name: String,
        calories: u32,
        #[arg(long, default_value = "snack")]
        meal: MealType,
        #[arg(long, default_value_t = 0.0)]
        protein: f64,
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,
        #[arg(long, default_value_t = 0.0)]
        fat: f64,
    },
    /// Show a day's log
    Show {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = config::load_config().context("loading configuration")?;

    tracing::debug!("Starting FitCoach v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Sun { date, lat, lon } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let coords = Coordinates::new(
                lat.unwrap_or(config.location.latitude),
                lon.unwrap_or(config.location.longitude),
            );
            let times = calculate_sun_times(date, coords)?;
            match times.kind {
                DayKind::PolarNight => println!("{}: polar night", date),
                DayKind::PolarDay => println!("{}: polar day", date),
                DayKind::Normal => {}
            }
            println!("Sunrise: {}", times.sunrise.format("%H:%M %:z"));
            println!("Sunset:  {}", times.sunset.format("%H:%M %:z"));
            let length = times.day_length();
            println!(
                "Day length: {}h {:02}m",
                length.num_hours(),
                length.num_minutes() % 60
            );
        }
        Command::LogSet {
            exercise,
            weight,
            reps,
            rpe,
            seconds,
        } => {
            let db = open_database(&cli.db, &config)?;
            let mut set = WorkoutSet::new(exercise, weight, reps);
            set.rpe = rpe;
            set.duration = seconds;
            let progress = ProgressTracker::new(&db).log_set(&set)?;
            println!(
                "{}: {} sets, best {:.1} kg, est. 1RM {:.1} kg, trend {}",
                progress.exercise_id,
                progress.total_sets,
                progress.max_weight,
                progress.estimated_one_rep_max,
                progress.trend
            );
        }
        Command::Progress { exercise } => {
            let db = open_database(&cli.db, &config)?;
            let tracker = ProgressTracker::new(&db);
            let all = match exercise {
                Some(id) => vec![tracker.progress_for(&id)?],
                None => tracker.all_progress()?,
            };
            for p in all {
                println!(
                    "{:<20} sets {:>4}  max {:>6.1} kg  reps {:>3}  \
                     1RM {:>6.1} kg  volume {:>9.0} kg  {}",
                    p.exercise_id,
                    p.total_sets,
                    p.max_weight,
                    p.max_reps,
                    p.estimated_one_rep_max,
                    p.total_volume,
                    p.trend
                );
            }
        }
        Command::Score => {
            let db = open_database(&cli.db, &config)?;
            let score = ProgressTracker::new(&db).strength_score(Utc::now())?;
            println!("Strength score: {:.1} / 100", score.total);
            println!("  consistency {:.1} / 50", score.consistency);
            println!("  one-rep max {:.1} / 30", score.one_rep_max);
            println!("  volume      {:.1} / 20", score.volume);
        }
        Command::Session { name, notes } => {
            let db = open_database(&cli.db, &config)?;
            let tracker = ProgressTracker::new(&db);
            let today = Local::now().date_naive();

            let mut todays_sets = Vec::new();
            for id in tracker.tracked_exercises()? {
                todays_sets.extend(
                    tracker
                        .sets_for(&id)?
                        .into_iter()
                        .filter(|s| s.logged_at.with_timezone(&Local).date_naive() == today),
                );
            }
            todays_sets.sort_by_key(|s| s.logged_at);

            let store = SessionStore::new(&db);
            let pending = store.unsaved_sets(todays_sets)?;
            let Some(mut session) = WorkoutSession::from_sets(name, pending) else {
                bail!("no sets logged today that are not already in a session");
            };
            session.notes = notes;
            store.save(&session)?;
            println!(
                "Saved '{}': {} exercises, {} sets, {:.0} kg volume",
                session.name,
                session.exercises.len(),
                session.completed_set_count(),
                session.total_volume()
            );
        }
        Command::Export { output, rpe } => {
            let db = open_database(&cli.db, &config)?;
            let sessions = SessionStore::new(&db).all()?;
            let options = HevyExportOptions {
                include_rpe: rpe || config.export.include_rpe,
            };
            let path = output.unwrap_or_else(|| PathBuf::from(generate_hevy_filename(Utc::now())));
            export_hevy_csv_to_file(&sessions, &options, &path)?;
            println!("Exported {} sessions to {}", sessions.len(), path.display());
        }
        Command::Chat {
            message,
            conversation,
            team,
        } => {
            let client = AgentClient::from_settings(&config.agent)?;
            let reply = if team {
                client
                    .multi_agent_chat(&message, conversation.as_deref())
                    .await?
            } else {
                client.chat(&message, conversation.as_deref()).await?
            };
            match reply {
                Some(reply) => println!("{}", reply.reply),
                None => bail!("chat endpoint not available on {}", client.base_url()),
            }
        }
        Command::Health => {
            let client = AgentClient::from_settings(&config.agent)?;
            match client.health().await? {
                Some(status) if status.is_healthy() => println!("Backend OK ({})", status.status),
                Some(status) => bail!("backend unhealthy: {}", status.status),
                None => bail!("health endpoint not found on {}", client.base_url()),
            }
        }
        Command::Nutrition { command } => {
            let db = open_database(&cli.db, &config)?;
            let log = NutritionLog::new(&db);
            match command {
                NutritionCommand::Add {
                    name,
                    calories,
                    meal,
                    protein,
                    carbs,
                    fat,
                } => {
                    let entry =
                        NutritionEntry::new(name, meal, calories).with_macros(protein, carbs, fat);
                    let count = log.add_entry(Local::now().date_naive(), &entry)?;
                    println!("Logged {} ({} entries today)", entry.name, count);
                }
                NutritionCommand::Show { date } => {
                    let date = date.unwrap_or_else(|| Local::now().date_naive());
                    let day = log.day(date)?;
                    for entry in &day.entries {
                        println!(
                            "{:<10} {:<24} {:>5} kcal",
                            entry.meal, entry.name, entry.calories
                        );
                    }
                    let goals = log.goal_progress(date, &config.nutrition)?;
                    println!(
                        "Total: {} kcal ({:.0}%), P {:.0} g, C {:.0} g, F {:.0} g",
                        day.totals.calories,
                        goals.calories * 100.0,
                        day.totals.protein_g,
                        day.totals.carbs_g,
                        day.totals.fat_g
                    );
                }
            }
        }
    }

    Ok(())
}

fn open_database(path: &Option<PathBuf>, config: &AppConfig) -> Result<Database> {
    let path = match path {
        Some(p) => p.clone(),
        None if config.data_dir.as_os_str().is_empty() => config::get_database_path(),
        None => config.data_dir.join("fitcoach.db"),
    };
    Database::open(&path).with_context(|| format!("opening database {}", path.display()))
}
