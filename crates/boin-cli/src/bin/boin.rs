use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use boin_cli::commands::{config_ops, query_ops, session_ops};

#[derive(Parser)]
#[command(name = "boin", about = "Find words from their vowels")]
struct Cli {
    /// Settings TOML to use instead of the built-in defaults
    #[arg(long, global = true)]
    settings: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List dictionary words matching a vowel sequence
    Query {
        /// Dictionary file (one `romaji,native` pair per line)
        dict_file: String,
        /// Typed vowels, e.g. "aai"
        input: String,
        /// Maximum number of candidates (default: candidates.max_results)
        #[arg(short, long)]
        n: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the vowel skeleton of romaji words
    Extract {
        #[arg(required = true)]
        words: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate a dictionary file
    Check {
        dict_file: String,
        /// Fail on duplicate romaji keys
        #[arg(long)]
        strict: bool,
    },
    /// Replay a keystroke script through an input session
    Replay {
        dict_file: String,
        /// Keys: a i u e o type a vowel, '<' deletes, '!' gives up
        keys: String,
        /// Pick this candidate index after the script
        #[arg(long, conflicts_with = "free_text")]
        pick: Option<usize>,
        /// After a script ending in '!', describe the wanted word
        #[arg(long)]
        free_text: Option<String>,
        /// Maximum number of candidates shown (default: candidates.max_results)
        #[arg(short, long)]
        n: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate { file: String },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boin=warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Some(file) = &cli.settings {
        config_ops::settings_load(file);
    }

    match cli.command {
        Command::Query {
            dict_file,
            input,
            n,
            json,
        } => query_ops::query_cmd(&dict_file, &input, n, json),
        Command::Extract { words, json } => query_ops::extract(&words, json),
        Command::Check { dict_file, strict } => query_ops::check(&dict_file, strict),
        Command::Replay {
            dict_file,
            keys,
            pick,
            free_text,
            n,
            json,
        } => session_ops::replay(&dict_file, &keys, pick, free_text.as_deref(), n, json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
