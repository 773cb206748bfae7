//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::commands;
use tdd_assert::output::OutputMode;

/// tdd-assert - Inspect assertion coercion and message formatting
#[derive(Parser, Debug)]
#[command(
    name = "tdd-assert",
    version,
    about = "Inspect assertion coercion and message formatting",
    long_about = "Evaluate values the way the tdd-assert engine does.\n\n\
                  Operands are JSON literals, the keyword `undefined`, or raw strings.\n\
                  Use `compare --assert` to run an equality assertion and exit non-zero on failure."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./tdd-assert.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare two values with loose and strict equality
    Compare {
        /// Left operand
        left: String,

        /// Right operand
        right: String,

        /// Evaluate this assertion through the engine
        #[arg(short, long, value_enum)]
        assert: Option<EqualityAssertion>,

        /// Override failure message for --assert
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Format a message template with key=value pairs
    Format {
        /// Template with {name} placeholders
        template: String,

        /// Replacement values as key=value
        pairs: Vec<String>,
    },

    /// Show the effective configuration
    Config,
}

/// Equality assertions available from the CLI
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EqualityAssertion {
    /// Loosely equal
    Equal,
    /// Loosely not equal
    NotEqual,
    /// Strictly equal
    StrictEqual,
    /// Strictly not equal
    NotStrictEqual,
}

impl EqualityAssertion {
    /// Name as spelled on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::NotEqual => "not-equal",
            Self::StrictEqual => "strict-equal",
            Self::NotStrictEqual => "not-strict-equal",
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Compare {
            left,
            right,
            assert,
            message,
        }) => commands::compare(
            &left,
            &right,
            assert,
            message.as_deref(),
            cli.config.as_deref(),
            output_mode,
        ),
        Some(Command::Format { template, pairs }) => {
            commands::format(&template, &pairs, output_mode)
        }
        Some(Command::Config) => commands::config(cli.config.as_deref(), output_mode),
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": tdd_assert::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("tdd-assert v{}", tdd_assert::VERSION);
                println!("\nRun 'tdd-assert --help' for usage");
            }
            Ok(())
        },
    }
}
