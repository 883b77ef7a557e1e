use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "drillzy", version, about = "Drillzy CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile management
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Intake survey
    Survey {
        #[command(subcommand)]
        action: commands::survey::SurveyAction,
    },
    /// Daily skill management
    Skill {
        #[command(subcommand)]
        action: commands::skill::SkillAction,
    },
    /// Streak and achievements
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Progress statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Skill history
    History {
        #[command(subcommand)]
        action: commands::history::HistoryAction,
    },
    /// Print a reminder message
    Remind,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Survey { action } => commands::survey::run(action),
        Commands::Skill { action } => commands::skill::run(action),
        Commands::Streak { action } => commands::streak::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::History { action } => commands::history::run(action),
        Commands::Remind => commands::remind::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
