//! sqlstring CLI
//!
//! Command-line tool for rendering SQL from JSON statement documents.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sqlstring::QuoteStyle;
use sqlstring_cli::{load_document, render_all};

/// Render SQL statements from JSON documents.
#[derive(Debug, Parser)]
#[command(name = "sqlstring")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Quote character for quoted literals (single or double).
    #[arg(short, long, env = "SQLSTRING_QUOTE", default_value = "single")]
    quote: QuoteStyle,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render every statement in a document, one per line.
    Render {
        /// Document path; reads stdin when omitted or `-`.
        file: Option<PathBuf>,

        /// Wrap the output in BEGIN/COMMIT TRANSACTION.
        #[arg(short, long)]
        transaction: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only SQL.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render { file, transaction } => {
            let statements = load_document(file.as_deref())?;
            info!(
                "Rendering {} statement(s) with {} quotes",
                statements.len(),
                cli.quote
            );
            for sql in render_all(&statements, cli.quote, transaction) {
                println!("{sql}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_parse_render_with_double_quotes() {
        let cli = Cli::try_parse_from([
            "sqlstring",
            "--quote",
            "double",
            "-v",
            "render",
            "doc.json",
            "--transaction",
        ])
        .unwrap();

        assert_eq!(cli.quote, QuoteStyle::Double);
        assert!(cli.verbose);
        let Commands::Render { file, transaction } = cli.command;
        assert_eq!(file, Some(PathBuf::from("doc.json")));
        assert!(transaction);
    }

    #[test]
    fn test_parse_rejects_unknown_quote_style() {
        let err = Cli::try_parse_from(["sqlstring", "--quote", "backtick", "render"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("unknown quote style 'backtick'"));
    }

    #[test]
    fn test_quote_style_from_env_and_default() {
        std::env::set_var("SQLSTRING_QUOTE", "\"");
        let from_env = Cli::try_parse_from(["sqlstring", "render"]).unwrap();
        let explicit = Cli::try_parse_from(["sqlstring", "-q", "single", "render"]).unwrap();
        std::env::remove_var("SQLSTRING_QUOTE");
        let default = Cli::try_parse_from(["sqlstring", "render", "-"]).unwrap();

        assert_eq!(from_env.quote, QuoteStyle::Double);
        assert_eq!(explicit.quote, QuoteStyle::Single);
        assert_eq!(default.quote, QuoteStyle::Single);
        let Commands::Render { file, transaction } = default.command;
        assert_eq!(file, Some(PathBuf::from("-")));
        assert!(!transaction);
    }
}
