//! Habit library and curated plan commands for CLI.

use clap::Subcommand;
use habitcoach_core::{
    library::{barrier_solution, plan_by_id},
    StateFiles, HABIT_LIBRARY, HABIT_PLANS, TINY_HABITS,
};

#[derive(Subcommand)]
pub enum LibraryAction {
    /// Show popular starter habits
    Starters,
    /// Browse the full library by category
    Browse,
    /// List curated plans
    Plans,
    /// Adopt a curated plan (all-or-nothing)
    Adopt {
        /// Plan ID: sleep, focus, or fitness
        id: String,
    },
    /// Get a supportive suggestion for a barrier
    Barrier {
        /// Barrier keyword: forgot, no-time, tired, not-feeling-it
        keyword: String,
    },
}

pub fn run(action: LibraryAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LibraryAction::Starters => {
            println!("{}", serde_json::to_string_pretty(TINY_HABITS)?);
        }
        LibraryAction::Browse => {
            println!("{}", serde_json::to_string_pretty(HABIT_LIBRARY)?);
        }
        LibraryAction::Plans => {
            println!("{}", serde_json::to_string_pretty(HABIT_PLANS)?);
        }
        LibraryAction::Adopt { id } => {
            let plan = plan_by_id(&id).ok_or(format!("Plan not found: {id}"))?;
            let files = StateFiles::open()?;
            let mut store = files.load();
            let ids = store.adopt_plan(plan)?;
            files.save(&store)?;
            println!("{} plan added to your garden!", plan.title);
            for id in ids {
                println!("  {id}");
            }
        }
        LibraryAction::Barrier { keyword } => match barrier_solution(&keyword) {
            Some(suggestion) => println!("{suggestion}"),
            None => println!("No suggestion for '{keyword}'. Known barriers: forgot, no-time, tired, not-feeling-it"),
        },
    }
    Ok(())
}
