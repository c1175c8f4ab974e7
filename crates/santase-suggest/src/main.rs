use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use santase_bot::BotFeatures;
use santase_suggest::config::{LoggingConfig, Scenario};
use santase_suggest::logging::{LoggingGuard, init_logging};
use santase_suggest::runner::{deal, suggest};

/// Move advisor for Santase positions.
#[derive(Debug, Parser)]
#[command(
    name = "santase-suggest",
    author,
    version,
    about = "Ask the rule-based Santase engine for its next move"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Override the tracing level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "FILE", global = true)]
    log_file: Option<PathBuf>,

    /// Log a JSON snapshot of every decision (forces SANTASE_DECISION_DETAILS).
    #[arg(long, global = true)]
    decision_details: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Suggest a move for the position described in a scenario file.
    Suggest {
        /// Path to the YAML (or .json) scenario.
        #[arg(short, long, value_name = "FILE")]
        scenario: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Deal a seeded opening position and print the engine's first move.
    Deal {
        #[arg(long, value_name = "SEED", default_value_t = 0)]
        seed: u64,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let Cli {
        command,
        log_level,
        log_file,
        decision_details,
    } = Cli::parse();
    let overrides = LogOverrides {
        level: log_level,
        file: log_file,
        decision_details,
    };

    match command {
        Command::Suggest { scenario, format } => {
            let path = scenario;
            let scenario = Scenario::from_path(&path)?;
            let (_guard, features) = overrides.install(scenario.logging.clone())?;
            let suggestion = suggest(&scenario, features)
                .with_context(|| format!("suggesting a move for {}", path.display()))?;
            match format {
                OutputFormat::Text => print!("{}", suggestion.render_text()),
                OutputFormat::Json => println!("{}", suggestion.to_json()?),
            }
        }
        Command::Deal { seed, format } => {
            let (_guard, features) = overrides.install(LoggingConfig::default())?;
            let dealt = deal(seed, features)
                .with_context(|| format!("dealing an opening position for seed {seed}"))?;
            match format {
                OutputFormat::Text => {
                    print!("{}", serde_yaml::to_string(&dealt.scenario)?);
                    println!("---");
                    print!("{}", dealt.suggestion.render_text());
                }
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "scenario": dealt.scenario,
                        "suggestion": dealt.suggestion,
                    }))?
                ),
            }
        }
    }

    Ok(())
}

struct LogOverrides {
    level: Option<String>,
    file: Option<PathBuf>,
    decision_details: bool,
}

impl LogOverrides {
    fn install(self, mut logging: LoggingConfig) -> anyhow::Result<(LoggingGuard, BotFeatures)> {
        if let Some(level) = self.level {
            logging.tracing_level = level;
        }
        if logging.level().is_none() {
            anyhow::bail!("unknown log level '{}'", logging.tracing_level);
        }
        if self.decision_details || BotFeatures::from_env().decision_details() {
            logging.decision_details = true;
        }
        let guard = init_logging(&logging, self.file.as_deref())?;
        if let Some(path) = guard.log_path.as_ref() {
            eprintln!("Log file: {}", path.display());
        }
        Ok((guard, BotFeatures::new(logging.decision_details)))
    }
}
