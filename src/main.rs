use std::fs::{self, File};
use std::process;
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use quote_quiz::{
    player::Player,
    quiz::{Quiz, config::QuizConfig, quotes::QuoteBook},
    trace,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const PLAY_USAGE: &str = "quote-quiz play [quotes.json]";
const TRACE_USAGE: &str = "quote-quiz trace <output.json> [quotes.json]";
const QUOTES_USAGE: &str = "quote-quiz quotes <output.json>";

/// Log file name, created in the system temp directory.
const LOG_FILE: &str = "quote-quiz.log";

fn run() -> Result<()> {
    init_logging()?;
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("play") => {
            let book = load_book(args.next().as_deref())?;
            play(book)
        }
        Some("trace") => {
            let output_path = args.next().context(TRACE_USAGE)?;
            let book = load_book(args.next().as_deref())?;
            write_trace(book, &output_path)
        }
        Some("quotes") => {
            let output_path = args.next().context(QUOTES_USAGE)?;
            export_quotes(&output_path)
        }
        _ => bail!(
            "Quote Quiz — finish the movie quote\n\nUsage:\n  {PLAY_USAGE}\n  {TRACE_USAGE}\n  {QUOTES_USAGE}\n\nLogs go to $TMPDIR/{LOG_FILE}; filter with QUOTE_QUIZ_LOG."
        ),
    }
}

/// The terminal belongs to the player, so logs are written to a file.
fn init_logging() -> Result<()> {
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("QUOTE_QUIZ_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_book(path: Option<&str>) -> Result<QuoteBook> {
    match path {
        Some(path) => QuoteBook::load(path),
        None => Ok(QuoteBook::builtin()),
    }
}

fn play(book: QuoteBook) -> Result<()> {
    info!(quotes = book.len(), "starting quiz");
    let quiz = Quiz::new(book, QuizConfig::load());
    let mut player = Player::new(quiz);
    player.play()
}

fn write_trace(book: QuoteBook, output_path: &str) -> Result<()> {
    let mut quiz = Quiz::new(book, QuizConfig::load());
    let frames = trace::scripted_round(&mut quiz);

    let output_json = serde_json::to_string_pretty(&frames)?;
    fs::write(output_path, &output_json)
        .with_context(|| format!("Failed to write {output_path}"))?;

    eprintln!("Traced {} frames -> {}", frames.len(), output_path);
    Ok(())
}

fn export_quotes(output_path: &str) -> Result<()> {
    let book = QuoteBook::builtin();
    let output_json = serde_json::to_string_pretty(book.quotes())?;
    fs::write(output_path, &output_json)
        .with_context(|| format!("Failed to write {output_path}"))?;

    eprintln!("Exported {} quotes -> {}", book.len(), output_path);
    Ok(())
}
