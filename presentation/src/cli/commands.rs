//! CLI command definitions

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// CLI arguments for the study-aid server
#[derive(Parser, Debug)]
#[command(name = "study-server")]
#[command(author, version, about = "Study aid API - summaries, quizzes, chat, plans and flashcards")]
#[command(long_about = r#"
study-server turns course material into study aids with a Gemini model.

It serves an HTTP API for:
1. PDF upload: extract the text of a course document
2. Analysis, quizzes and flashcards generated from that text
3. Chat about the document and day-by-day study plans

The Gemini API key is read from GEMINI_API_KEY (or [provider] api_key).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./study-aid.toml    Project-level config
3. ~/.config/study-aid/config.toml   Global config
Environment variables prefixed STUDY_AID_ override all files,
e.g. STUDY_AID_SERVER__BIND=0.0.0.0:8000

Example:
  study-server
  study-server --bind 0.0.0.0:8080 -vv
  study-server --list-models
"#)]
pub struct Cli {
    /// Address to listen on, overrides [server] bind
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the effective config, then exit
    #[arg(long)]
    pub show_config: bool,

    /// List the provider models that support content generation, then exit
    #[arg(long)]
    pub list_models: bool,
}

impl Cli {
    /// Default log filter for the given verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn,study_server=info,study_presentation=info",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "study-server",
            "--bind",
            "0.0.0.0:9000",
            "-vv",
            "--no-config",
            "--log-json",
        ]);
        assert_eq!(cli.bind, Some("0.0.0.0:9000".parse().unwrap()));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_config);
        assert!(cli.log_json);
        assert!(!cli.list_models);
        assert_eq!(cli.log_filter(), "debug");
    }

    #[test]
    fn test_default_filter() {
        let cli = Cli::parse_from(["study-server"]);
        assert!(cli.log_filter().starts_with("warn"));
        assert!(cli.bind.is_none());
    }
}
