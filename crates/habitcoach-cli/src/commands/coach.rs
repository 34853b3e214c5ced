//! AI coach commands for CLI.

use clap::Subcommand;
use habitcoach_core::{habits_context, CoachClient, StateFiles};

#[derive(Subcommand)]
pub enum CoachAction {
    /// Ask the coach for advice
    Ask {
        /// Your message
        message: String,
    },
    /// Ask for a tiny version of one habit
    Shrink {
        /// Habit ID
        id: String,
    },
    /// Show the habit context the coach sees
    Context,
}

pub fn run(action: CoachAction) -> Result<(), Box<dyn std::error::Error>> {
    let files = StateFiles::open()?;
    let store = files.load();

    match action {
        CoachAction::Ask { message } => {
            let client = CoachClient::new(api_key());
            let runtime = tokio::runtime::Runtime::new()?;
            let reply = runtime.block_on(client.respond(&message, store.habits()));
            println!("{reply}");
        }
        CoachAction::Shrink { id } => {
            let habit = store
                .get(&id)
                .ok_or(format!("Habit not found: {id}"))?;
            let client = CoachClient::new(api_key());
            let runtime = tokio::runtime::Runtime::new()?;
            let suggestion = runtime.block_on(client.suggest_improvement(habit));
            println!("{}", serde_json::to_string_pretty(&suggestion)?);
        }
        CoachAction::Context => {
            println!("{}", habits_context(store.habits()));
        }
    }
    Ok(())
}

fn api_key() -> String {
    std::env::var("GEMINI_API_KEY")
        .or_else(|_| std::env::var("API_KEY"))
        .unwrap_or_default()
}
