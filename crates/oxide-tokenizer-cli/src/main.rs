//! oxide-tokenize CLI
//!
//! Command-line tool that tokenizes SQL and prints the classified tokens.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use futures::StreamExt;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_tokenizer::{to_csv, to_json, CancellationFlag, Token, Tokenizer};

/// Tokenize SQL into classified tokens.
#[derive(Parser)]
#[command(name = "oxide-tokenize")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL file to tokenize (stdin if not specified).
    input: Option<PathBuf>,

    /// Output format.
    #[arg(
        short,
        long,
        value_enum,
        env = "OXIDE_TOKENIZE_FORMAT",
        default_value = "text"
    )]
    format: Format,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Drop comment tokens from the output.
    #[arg(long)]
    skip_comments: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `TYPE: 'lexeme' (line:column) [CATEGORY]` line per token.
    Text,
    /// Pretty-printed JSON array.
    Json,
    /// CSV with a header row.
    Csv,
}

fn render(tokens: &[Token], format: Format) -> anyhow::Result<String> {
    let rendered = match format {
        Format::Text => tokens.iter().map(|token| format!("{token}\n")).collect(),
        Format::Json => {
            let mut json = to_json(tokens)?;
            json.push('\n');
            json
        }
        Format::Csv => to_csv(tokens),
    };
    Ok(rendered)
}

async fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut sql = String::new();
            tokio::io::stdin()
                .read_to_string(&mut sql)
                .await
                .context("Failed to read stdin")?;
            Ok(sql)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for tokens
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

    let sql = read_input(cli.input.as_ref()).await?;
    debug!(bytes = sql.len(), format = ?cli.format, "Read input");

    let cancel = CancellationFlag::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, stopping tokenizer");
                cancel.cancel();
            }
        })
    };

    let tokenizer = Tokenizer::new();
    let mut stream = tokenizer.tokenize_stream(&sql, cancel.clone());
    let mut tokens = Vec::new();
    while let Some(token) = stream.next().await {
        if cli.skip_comments && token.is_comment() {
            continue;
        }
        tokens.push(token);
    }
    interrupt.abort();

    if cancel.is_cancelled() {
        warn!(tokens = tokens.len(), "Tokenization cancelled, output is partial");
    }

    let rendered = render(&tokens, cli.format)?;
    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, rendered)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(tokens = tokens.len(), path = %path.display(), "Wrote tokens");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
