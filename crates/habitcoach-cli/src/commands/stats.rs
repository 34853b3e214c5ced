//! Statistics commands for CLI.

use chrono::Local;
use clap::Subcommand;
use habitcoach_core::{dashboard, library::science_tip, StateFiles};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Show the full dashboard snapshot as JSON
    Show,
    /// One-line summary of today's standing
    Summary,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let files = StateFiles::open()?;
    let store = files.load();
    let today = Local::now().date_naive();
    let stats = dashboard(store.habits(), today);

    match action {
        StatsAction::Show => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Summary => {
            println!(
                "Growth {} | 7d consistency {:.0}% | habits {}/3 | {} left today | mood: {}",
                stats.growth_score,
                stats.consistency_rate,
                stats.total_habits,
                stats.remaining_today,
                stats.dominant_mood.as_str(),
            );
            if let Some(win) = &stats.latest_win {
                println!("Latest win: \"{}\" — {}", win.win, win.habit_name);
            }
            // Rotate the tip with the day so it changes daily, not per call.
            let day_index = today.format("%j").to_string().parse::<usize>().unwrap_or(0);
            println!("Tip: {}", science_tip(day_index));
        }
    }
    Ok(())
}
