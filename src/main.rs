//! Prompt Library - search a CSV prompt library from the terminal
//!
//! This CLI tool provides three modes:
//! - **Search** (default): load the library, apply `--query` if given, and
//!   print the matching prompts as text, JSON or CSV
//! - **Interactive**: read search terms from stdin, debounced, and print the
//!   results after each settled term
//! - **Stats**: print a report of what the decoder kept and dropped
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Configuration/argument error |
//! | 3 | File I/O error or strict stats failure |
//! | 4 | Runtime error (unrecoverable) |

use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;
use std::thread;
use tokio::sync::mpsc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use prompt_library::cli::{Args, OutputFormat};
use prompt_library::csv_handler::{decode_with_stats, load_text, write_csv, write_json, PromptRecord};
use prompt_library::debounce::debounce;
use prompt_library::display::{render_record, ContentMode};
use prompt_library::error::PromptLibraryError;
use prompt_library::search::{Catalog, ResultsSummary};

/// Exit code for success
const EXIT_SUCCESS: u8 = 0;
/// Exit code for configuration/argument errors
const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for file I/O errors
const EXIT_IO_ERROR: u8 = 3;
/// Exit code for a failed `--stats --strict` check (same as IO error)
const EXIT_VALIDATION_FAILURE: u8 = 3;
/// Exit code for runtime errors (unrecoverable)
const EXIT_RUNTIME_ERROR: u8 = 4;

/// Capacity of the stdin-to-debouncer channel in interactive mode.
const INPUT_CHANNEL_CAPACITY: usize = 64;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    if let Err(e) = validate_args(&args) {
        eprintln!("Error: Configuration error: {}", e);
        eprintln!("  Hint: Use --help for usage information");
        return ExitCode::from(error_to_exit_code(&e));
    }

    match run(args).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        // Error message already printed in run()
        Err(e) => ExitCode::from(error_to_exit_code(&e)),
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Checks argument combinations, reporting failures as `InvalidArgument`.
fn validate_args(args: &Args) -> Result<(), PromptLibraryError> {
    args.validate().map_err(PromptLibraryError::InvalidArgument)
}

/// Dispatches to the selected mode.
async fn run(args: Args) -> Result<(), PromptLibraryError> {
    if args.stats {
        return run_stats_mode(&args);
    }

    let catalog = Catalog::load(&args.file).map_err(|e| {
        eprintln!("Error: Failed to load prompt library {:?}: {}", args.file, e);
        e
    })?;

    if args.interactive {
        run_interactive_mode(&args, catalog).await
    } else {
        run_search_mode(&args, catalog)
    }
}

/// Run in stats mode.
///
/// Decodes the library and prints how many lines and records were kept or dropped.
fn run_stats_mode(args: &Args) -> Result<(), PromptLibraryError> {
    eprintln!("Decoding file: {:?}", args.file);

    let text = load_text(&args.file).map_err(|e| {
        eprintln!("Error: Failed to read prompt library {:?}: {}", args.file, e);
        e
    })?;

    let (_, stats) = decode_with_stats(&text);
    println!("{}", stats);

    if args.strict && !stats.is_clean() {
        eprintln!(
            "Error: {} lines or records were dropped while decoding",
            stats.dropped()
        );
        return Err(PromptLibraryError::ValidationFailed(format!(
            "{} dropped",
            stats.dropped()
        )));
    }

    Ok(())
}

/// Run in search mode.
///
/// Applies `--query` once and writes the matching records to stdout or `--output`.
fn run_search_mode(args: &Args, mut catalog: Catalog) -> Result<(), PromptLibraryError> {
    if let Some(query) = &args.query {
        catalog.search(query);
    }
    let summary = catalog.summary();
    let results = catalog.view();

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                eprintln!("Error: Failed to create output file {:?}: {}", path, e);
                e
            })?;
            write_results(args, summary, &results, BufWriter::new(file))?;
            eprintln!("Wrote {} prompts to {:?}", results.len(), path);
        }
        None => write_results(args, summary, &results, io::stdout().lock())?,
    }

    Ok(())
}

/// Run in interactive mode.
///
/// Each stdin line is a new search term. Terms typed in quick succession are
/// debounced so only the last one is applied. Ends when stdin closes.
async fn run_interactive_mode(args: &Args, mut catalog: Catalog) -> Result<(), PromptLibraryError> {
    eprintln!(
        "{}. Type a search term and press Enter (empty line clears, Ctrl+D quits).",
        catalog.summary()
    );

    let (tx, input) = mpsc::channel::<String>(INPUT_CHANNEL_CAPACITY);
    let mut terms = debounce(input, args.debounce_delay());

    // Plain thread: tokio's stdin read cannot be cancelled and would hold up runtime shutdown.
    let reader = thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || read_terms(io::stdin().lock(), tx))?;

    let input_closed =
        apply_terms(&mut catalog, &mut terms, args.content_mode(), io::stdout()).await?;

    // When stdout went away first the reader may still be blocked; it dies with the process.
    if input_closed {
        reader
            .join()
            .map_err(|_| PromptLibraryError::Runtime("stdin reader panicked".to_string()))??;
    }

    Ok(())
}

/// Forwards each line of `input` as a search term until input ends or the receiver is gone.
fn read_terms<R: BufRead>(input: R, tx: mpsc::Sender<String>) -> io::Result<()> {
    for line in input.lines() {
        if tx.blocking_send(line?).is_err() {
            break;
        }
    }
    Ok(())
}

/// Applies each debounced term and prints the results.
///
/// Returns `Ok(true)` once the terms channel closes and `Ok(false)` if `out`
/// reports a broken pipe.
async fn apply_terms<W: Write>(
    catalog: &mut Catalog,
    terms: &mut mpsc::Receiver<String>,
    mode: ContentMode,
    mut out: W,
) -> Result<bool, PromptLibraryError> {
    while let Some(term) = terms.recv().await {
        catalog.search(&term);
        match write_text(catalog.summary(), &catalog.view(), mode, &mut out) {
            Ok(()) => {}
            Err(e) if is_broken_pipe(&e) => {
                debug!("stdout closed, leaving interactive mode");
                return Ok(false);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(true)
}

fn is_broken_pipe(error: &PromptLibraryError) -> bool {
    matches!(error, PromptLibraryError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
}

fn write_results<W: Write>(
    args: &Args,
    summary: ResultsSummary,
    results: &[&PromptRecord],
    out: W,
) -> Result<(), PromptLibraryError> {
    match args.format {
        OutputFormat::Text => write_text(summary, results, args.content_mode(), out),
        OutputFormat::Json => write_json(results, out),
        OutputFormat::Csv => write_csv(results, out),
    }
}

fn write_text<W: Write>(
    summary: ResultsSummary,
    results: &[&PromptRecord],
    mode: ContentMode,
    mut out: W,
) -> Result<(), PromptLibraryError> {
    writeln!(out, "{}", summary)?;
    if results.is_empty() {
        writeln!(out, "No prompts found.")?;
    }
    for (index, record) in results.iter().enumerate() {
        writeln!(out)?;
        write!(out, "{}", render_record(index, record, mode))?;
    }
    out.flush()?;
    Ok(())
}

/// Maps an error to the process exit code.
fn error_to_exit_code(error: &PromptLibraryError) -> u8 {
    match error {
        PromptLibraryError::InvalidArgument(_) => EXIT_CONFIG_ERROR,
        PromptLibraryError::ValidationFailed(_) => EXIT_VALIDATION_FAILURE,
        PromptLibraryError::Io(_) => EXIT_IO_ERROR,
        PromptLibraryError::Encoding(_) => EXIT_IO_ERROR,
        PromptLibraryError::Csv(_) => EXIT_IO_ERROR,
        PromptLibraryError::Json(_) => EXIT_IO_ERROR,
        PromptLibraryError::Runtime(_) => EXIT_RUNTIME_ERROR,
    }
}
