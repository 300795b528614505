/// Main entry point for the quick-habit CLI
///
/// This file sets up logging, parses command line arguments, and forwards
/// user intents to the HabitTracker service. Rendering lives here; all
/// habit semantics live in the library.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use quick_habit::{
    CompletionOutcome, Habit, HabitTracker, JsonFileStore, StorageError, TrackerError,
};

/// Pick a writable default location for the habit file
fn default_data_path() -> PathBuf {
    let candidates = [
        dirs::data_dir().map(|p| p.join("quick-habit")),
        dirs::home_dir().map(|p| p.join(".quick-habit")),
        std::env::current_dir().ok().map(|p| p.join(".quick-habit")),
    ];

    for dir in candidates.iter().flatten() {
        if std::fs::create_dir_all(dir).is_ok() {
            return dir.join("habit.json");
        }
    }

    // Last resort
    let temp = std::env::temp_dir().join("quick-habit");
    tracing::warn!("Using temporary directory for habit data: {}", temp.display());
    temp.join("habit.json")
}

/// Command line arguments for the quick-habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the habit data file
    /// If not provided, uses a default location in the user's data directory
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the habit, streaks and this week's progress (default)
    Status,
    /// Create the habit (replaces an existing one)
    Create {
        /// Habit title
        #[arg(long)]
        title: String,
        /// Display emoji
        #[arg(long, default_value = "✨")]
        emoji: String,
    },
    /// Mark today as completed
    Done,
    /// Remove today's completion
    Undo,
    /// Toggle today's completion
    Toggle,
    /// Change the habit's title and/or emoji
    Edit {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        emoji: Option<String>,
    },
    /// Show the 7-day calendar strip
    Week,
    /// Delete the habit and all its history
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("quick_habit={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    let data_path = cli.data_file.unwrap_or_else(default_data_path);
    info!("Using habit data at: {}", data_path.display());

    let store = JsonFileStore::new(data_path)?;
    let mut tracker = match HabitTracker::open(store) {
        Ok(t) => t,
        Err(TrackerError::Storage(StorageError::Corrupt { path, reason })) => {
            eprintln!("The habit file at {} could not be read: {}", path, reason);
            eprintln!("Run `quick-habit reset --yes` to erase it and start over.");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    match cli.command.unwrap_or(Command::Status) {
        Command::Status => {
            let habit = require_habit(&tracker)?;
            print_status(habit);
        }
        Command::Create { title, emoji } => {
            let habit = tracker.create_habit(&title, &emoji)?;
            println!("Created habit: {} {}", habit.emoji, habit.title);
        }
        Command::Done => {
            match tracker.mark_today_complete()? {
                CompletionOutcome::Applied => {
                    let habit = require_habit(&tracker)?;
                    println!("Done! Current streak: {} days", habit.current_streak);
                }
                _ => println!("Already completed today."),
            }
        }
        Command::Undo => {
            match tracker.unmark_today_complete()? {
                CompletionOutcome::Applied => {
                    let habit = require_habit(&tracker)?;
                    println!("Unmarked today. Current streak: {} days", habit.current_streak);
                }
                _ => println!("Today was not completed."),
            }
        }
        Command::Toggle => {
            let result = tracker.toggle_today_completion()?;
            let habit = require_habit(&tracker)?;
            if result.now_completed {
                println!("Done! Current streak: {} days", habit.current_streak);
            } else {
                println!("Unmarked today. Current streak: {} days", habit.current_streak);
            }
        }
        Command::Edit { title, emoji } => {
            tracker.update_habit(title.as_deref(), emoji.as_deref())?;
            let habit = require_habit(&tracker)?;
            println!("Updated habit: {} {}", habit.emoji, habit.title);
        }
        Command::Week => {
            let habit = require_habit(&tracker)?;
            print_week(habit);
        }
        Command::Reset { yes } => {
            if !yes {
                eprintln!("This deletes the habit and all completion history.");
                eprintln!("Re-run with --yes to confirm.");
                std::process::exit(1);
            }
            tracker.reset_habit()?;
            println!("Habit erased.");
        }
    }

    Ok(())
}

fn require_habit<S: quick_habit::HabitStore>(
    tracker: &HabitTracker<S>,
) -> Result<&Habit, TrackerError> {
    tracker.habit().ok_or(TrackerError::NoHabit)
}

fn print_status(habit: &Habit) {
    let today = quick_habit::local_today();
    let stats = habit.stats(today);

    println!("{} {}", habit.emoji, habit.title);
    println!("  Current streak:  {} days", stats.current_streak);
    println!("  Best streak:     {} days", stats.best_streak);
    println!("  Completions:     {}", stats.total_completions);
    println!("  Completion rate: {}%", stats.completion_rate);
    println!();
    print_week(habit);
}

fn print_week(habit: &Habit) {
    let today = quick_habit::local_today();

    let mut names = String::new();
    let mut days = String::new();
    let mut marks = String::new();
    for status in habit.week_overview(today) {
        let name = quick_habit::day_name(status.date);
        let day = quick_habit::day_of_month(status.date);
        let mark = if status.is_completed {
            "✓"
        } else if status.is_future {
            " "
        } else if status.is_today {
            "·"
        } else {
            "✗"
        };
        if status.is_today {
            names.push_str(&format!("[{:>3}]", name));
            days.push_str(&format!("[{:>3}]", day));
            marks.push_str(&format!("[{:>3}]", mark));
        } else {
            names.push_str(&format!(" {:>3} ", name));
            days.push_str(&format!(" {:>3} ", day));
            marks.push_str(&format!(" {:>3} ", mark));
        }
    }
    println!("{}", names);
    println!("{}", days);
    println!("{}", marks);
}
