use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "habitcoach-cli", version, about = "Habit Coach CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Daily check-in
    Checkin {
        #[command(flatten)]
        args: commands::checkin::CheckinArgs,
    },
    /// Dashboard statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Weekly reflections
    Reflect {
        #[command(subcommand)]
        action: commands::reflect::ReflectAction,
    },
    /// Habit library and curated plans
    Library {
        #[command(subcommand)]
        action: commands::library::LibraryAction,
    },
    /// Talk to the AI coach
    Coach {
        #[command(subcommand)]
        action: commands::coach::CoachAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Checkin { args } => commands::checkin::run(args),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Reflect { action } => commands::reflect::run(action),
        Commands::Library { action } => commands::library::run(action),
        Commands::Coach { action } => commands::coach::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
