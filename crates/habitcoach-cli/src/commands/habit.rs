//! Habit management commands for CLI.

use chrono::Local;
use clap::Subcommand;
use habitcoach_core::{is_struggling, rescue, Difficulty, StateFiles};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Create {
        /// Habit name
        name: String,
        /// The tiny goal, e.g. "Drink one glass of water"
        goal: String,
        /// Difficulty: tiny, normal, or advanced (default: tiny)
        #[arg(long, default_value = "tiny")]
        difficulty: String,
        /// Why is this important?
        #[arg(long)]
        motivation: Option<String>,
    },
    /// List habits
    List,
    /// Get habit details
    Get {
        /// Habit ID
        id: String,
    },
    /// Rescue a struggling habit (reduce to a tiny step)
    Rescue {
        /// Habit ID
        id: String,
    },
    /// Delete a habit
    Delete {
        /// Habit ID
        id: String,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let files = StateFiles::open()?;
    let mut store = files.load();

    match action {
        HabitAction::Create {
            name,
            goal,
            difficulty,
            motivation,
        } => {
            let difficulty = Difficulty::parse(&difficulty)
                .ok_or(format!("unknown difficulty: {difficulty}"))?;
            let habit = store.create(&name, &goal, difficulty, motivation)?;
            println!("Habit planted: {}", habit.id);
            println!("{}", serde_json::to_string_pretty(habit)?);
            files.save(&store)?;
        }
        HabitAction::List => {
            println!("{}", serde_json::to_string_pretty(store.habits())?);
        }
        HabitAction::Get { id } => match store.get(&id) {
            Some(habit) => {
                println!("{}", serde_json::to_string_pretty(habit)?);
                let today = Local::now().date_naive();
                if is_struggling(habit, today) {
                    println!("Feeling stuck? Try: habitcoach-cli habit rescue {id}");
                }
            }
            None => println!("Habit not found: {id}"),
        },
        HabitAction::Rescue { id } => {
            let habit = store
                .get(&id)
                .ok_or(format!("Habit not found: {id}"))?
                .clone();
            let rescued = rescue(&habit);
            store.replace(rescued.clone())?;
            files.save(&store)?;
            println!("Habit rescued! We've made it even smaller to help you get back on track.");
            println!("{}", serde_json::to_string_pretty(&rescued)?);
        }
        HabitAction::Delete { id } => {
            store.delete(&id)?;
            files.save(&store)?;
            println!("Habit removed: {id}");
        }
    }
    Ok(())
}
