//! polarity — sentiment scoring CLI
//!
//! Thin consumer over the engine: takes free-form text, invokes `analyze`,
//! and renders the scores plus classification. Asynchrony and responsiveness
//! concerns live here (trivially, since the CLI is batch); the engine itself
//! stays synchronous.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use polarity::{Analyzer, Scores, SAMPLE_TEXTS};

/// Polarity sentiment scoring CLI
#[derive(Parser)]
#[command(name = "polarity")]
#[command(version = polarity::PKG_VERSION)]
#[command(about = "Lexicon-based sentiment polarity scoring")]
struct Args {
    /// Path to an alternate word<TAB>valence lexicon file
    #[arg(short, long, env = "POLARITY_LEXICON", global = true)]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a span of text
    Analyze {
        /// Text to analyze (or omit to read from stdin)
        text: Option<String>,
        /// Emit scores as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the bundled sample texts
    Samples {
        /// Score each sample instead of just listing them
        #[arg(long)]
        run: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let analyzer = match &args.lexicon {
        Some(path) => Analyzer::from_lexicon_path(path)?,
        None => Analyzer::embedded()?,
    };

    match args.command {
        Command::Analyze { text, json } => {
            let text = resolve_text(text)?;
            let scores = analyzer.analyze(&text);
            if json {
                print_json(&scores)?;
            } else {
                print_scores(&scores);
            }
        }

        Command::Samples { run } => {
            for (i, sample) in SAMPLE_TEXTS.iter().enumerate() {
                println!("{}. {sample}", i + 1);
                if run {
                    let scores = analyzer.analyze(sample);
                    println!(
                        "   {} (compound {:+.4})",
                        scores.classification(),
                        scores.compound
                    );
                }
            }
        }
    }

    Ok(())
}

/// Resolve text input from an optional CLI argument and/or stdin.
///
/// Combination rules:
/// - arg only → arg
/// - stdin only → stdin
/// - both → `"{arg}\n\n{stdin}"`
/// - neither → error (the engine accepts empty input; refusing it is this
///   layer's validation, matching the original UI's behavior)
fn resolve_text(arg: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    let stdin_is_pipe = !io::stdin().is_terminal();
    let stdin_text = if stdin_is_pipe {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        let trimmed = buf.trim().to_string();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    } else {
        None
    };

    match (arg, stdin_text) {
        (Some(a), Some(s)) => Ok(format!("{a}\n\n{s}")),
        (Some(a), None) => Ok(a),
        (None, Some(s)) => Ok(s),
        (None, None) => {
            Err("analyze: no input provided (pass text as argument or via stdin)".into())
        }
    }
}

fn print_scores(scores: &Scores) {
    println!("classification: {}", scores.classification());
    println!("confidence:     {:.3}", scores.compound.abs());
    println!("compound:       {:+.4}", scores.compound);
    println!("positive:       {:.3}", scores.positive);
    println!("negative:       {:.3}", scores.negative);
    println!("neutral:        {:.3}", scores.neutral);
}

fn print_json(scores: &Scores) -> Result<(), Box<dyn std::error::Error>> {
    let payload = serde_json::json!({
        "positive": scores.positive,
        "negative": scores.negative,
        "neutral": scores.neutral,
        "compound": scores.compound,
        "classification": scores.classification(),
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
