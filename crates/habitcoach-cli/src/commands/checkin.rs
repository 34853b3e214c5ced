//! Daily check-in command for CLI.

use chrono::{Local, NaiveDate};
use clap::Args;
use habitcoach_core::{check_in, LogNotes, Mood, StateFiles};

#[derive(Args)]
pub struct CheckinArgs {
    /// Habit ID
    pub id: String,
    /// Mood: happy, okay, stressed, or none (default: none)
    #[arg(long, default_value = "none")]
    pub mood: String,
    /// A small win worth remembering
    #[arg(long)]
    pub win: Option<String>,
    /// Something learned today
    #[arg(long)]
    pub learned: Option<String>,
    /// Check in for a specific date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub fn run(args: CheckinArgs) -> Result<(), Box<dyn std::error::Error>> {
    let files = StateFiles::open()?;
    let mut store = files.load();

    let mood = Mood::parse(&args.mood).ok_or(format!("unknown mood: {}", args.mood))?;
    let notes = match (args.win, args.learned) {
        (None, None) => None,
        (win, learned) => Some(LogNotes {
            win: win.unwrap_or_default(),
            learned: learned.unwrap_or_default(),
        }),
    };
    let today = args.date.unwrap_or_else(|| Local::now().date_naive());

    let habit = store
        .get(&args.id)
        .ok_or(format!("Habit not found: {}", args.id))?;
    let already_done = habit.completed_on(today);
    let updated = check_in(habit, mood, notes, today);
    store.replace(updated.clone())?;
    files.save(&store)?;

    if already_done {
        println!("Already checked in for {today}. Well done!");
    } else {
        println!(
            "Checked in: {} (streak {}, best {})",
            updated.name, updated.streak, updated.best_streak
        );
    }
    println!("{}", serde_json::to_string_pretty(&updated)?);
    Ok(())
}
