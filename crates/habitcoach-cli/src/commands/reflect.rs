//! Weekly reflection commands for CLI.

use clap::Subcommand;
use habitcoach_core::{ReflectionAnswers, StateFiles};

#[derive(Subcommand)]
pub enum ReflectAction {
    /// Save a weekly reflection
    Save {
        /// What went well?
        #[arg(long)]
        went_well: String,
        /// What was the biggest challenge?
        #[arg(long)]
        challenge: String,
        /// One tiny improvement for next week?
        #[arg(long)]
        improvement: String,
    },
    /// List reflections, most recent first
    List,
}

pub fn run(action: ReflectAction) -> Result<(), Box<dyn std::error::Error>> {
    let files = StateFiles::open()?;
    let mut store = files.load();

    match action {
        ReflectAction::Save {
            went_well,
            challenge,
            improvement,
        } => {
            let saved = store.save_reflection(ReflectionAnswers {
                q1: went_well,
                q2: challenge,
                q3: improvement,
            });
            println!("Reflection saved: {}", saved.id);
            println!("{}", serde_json::to_string_pretty(saved)?);
            files.save(&store)?;
        }
        ReflectAction::List => {
            println!("{}", serde_json::to_string_pretty(store.reflections())?);
        }
    }
    Ok(())
}
