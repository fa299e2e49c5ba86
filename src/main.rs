// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, error, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use versecheck::app_config::{Config, LogLevel};
use versecheck::file_utils::FileManager;
use versecheck::validation::{ContentReview, ReviewAction, ReviewService};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate generated content against its genre
    Validate {
        /// Content file or directory to check
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,

        /// Genre the content was generated for (defaults to the config)
        #[arg(short, long)]
        genre: Option<String>,

        /// Print reviews as JSON
        #[arg(long)]
        json: bool,

        /// Also write the JSON reviews to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the quality score and its breakdown
    Score {
        /// Content file or directory to score
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,

        /// Print scores as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest improvements for the next generation attempt
    Suggest {
        /// Content file to inspect
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,
    },

    /// Rank candidate generations and name the best one
    Rank {
        /// Candidate files
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Genre the candidates were generated for (defaults to the config)
        #[arg(short, long)]
        genre: Option<String>,

        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions for versecheck
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// versecheck - content gate for AI-generated poetry
///
/// Checks that text generated for a poetry book is really poetry and not
/// narrative prose, scores it, and suggests improvements.
#[derive(Parser, Debug)]
#[command(name = "versecheck")]
#[command(version)]
#[command(about = "Content gate for AI-generated poetry")]
#[command(long_about = "versecheck validates generated content before it is packaged into a book.

EXAMPLES:
    versecheck validate poems.txt                      # Validate with the default genre
    versecheck validate -g \"Self Help\" chapter.md      # Non-poetry genres are skipped
    versecheck validate --json -o report.json drafts/  # Validate a directory, save JSON
    versecheck score poems.txt                         # Quality score and breakdown
    versecheck suggest poems.txt                       # Improvement suggestions
    versecheck rank draft1.txt draft2.txt draft3.txt   # Pick the best candidate
    versecheck completions bash > versecheck.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
// Filtering is left to log::max_level so the level can change after init
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", colour, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // The level is updated after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "versecheck", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it immediately
    if let Some(level) = cli.log_level {
        log::set_max_level(LogLevel::from(level).to_level_filter());
    }

    let config = load_config(&cli.config_path, cli.log_level)?;
    let service = ReviewService::with_config(config.review.clone(), config.validator.clone());

    match cli.command {
        Commands::Validate {
            input_path,
            genre,
            json,
            output,
        } => {
            let genre = genre.unwrap_or_else(|| config.default_genre.clone());
            run_validate(&service, &input_path, &genre, json, output.as_deref())
        }
        Commands::Score { input_path, json } => run_score(&service, &input_path, json),
        Commands::Suggest { input_path } => run_suggest(&service, &input_path),
        Commands::Rank { files, genre, json } => {
            let genre = genre.unwrap_or_else(|| config.default_genre.clone());
            run_rank(&service, &files, &genre, json)
        }
        Commands::Completions { .. } => Ok(()),
    }
}

// Load or create configuration, then apply the command line log level
fn load_config(config_path: &str, cli_log_level: Option<CliLogLevel>) -> Result<Config> {
    let (mut config, created) = Config::load_or_create(config_path)
        .with_context(|| format!("Failed to load config file: {}", config_path))?;

    if created {
        warn!("Config file not found at '{}', created default config.", config_path);
    }

    if let Some(level) = cli_log_level {
        config.log_level = level.into();
    }

    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if cli_log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

fn run_validate(
    service: &ReviewService,
    input_path: &Path,
    genre: &str,
    json: bool,
    output: Option<&Path>,
) -> Result<()> {
    let files = FileManager::collect_inputs(input_path)?;
    if files.is_empty() {
        warn!("No content files found in {:?}", input_path);
        return Ok(());
    }

    info!("Validating {} file(s) as '{}'", files.len(), genre);

    let mut reviews = Vec::with_capacity(files.len());
    for path in &files {
        let text = FileManager::read_to_string(path)?;
        let review = service.review(&text, genre);
        if !json {
            print_review(path, &review);
        }
        reviews.push(FileReview {
            path: path.display().to_string(),
            review,
        });
    }

    let report = serde_json::to_string_pretty(&reviews).context("Failed to serialize reviews")?;
    if json {
        println!("{}", report);
    }
    if let Some(output) = output {
        FileManager::write_to_file(output, &report)?;
        info!("Report written to {:?}", output);
    }

    let rejected = reviews
        .iter()
        .filter(|r| r.review.action == ReviewAction::Regenerate)
        .count();
    if rejected > 0 {
        error!("{} of {} file(s) need regenerating", rejected, reviews.len());
        return Err(anyhow!("{} of {} file(s) failed validation", rejected, reviews.len()));
    }

    info!("All {} file(s) passed", reviews.len());
    Ok(())
}

fn run_score(service: &ReviewService, input_path: &Path, json: bool) -> Result<()> {
    let files = FileManager::collect_inputs(input_path)?;

    for path in &files {
        let text = FileManager::read_to_string(path)?;
        let Some(breakdown) = service.validator().quality_breakdown(&text) else {
            warn!("No score available for {:?}", path);
            continue;
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        } else {
            println!("{}", path.display());
            println!("  {}", breakdown.summary());
            println!("  short lines       {:.2}", breakdown.short_lines.score);
            println!("  stanzas           {:.2}", breakdown.stanzas.score);
            println!("  poems             {:.2}", breakdown.poems.score);
            println!("  poetic focus      {:.2}", breakdown.poetic_focus.score);
            println!("  narrative penalty {:.2}", breakdown.narrative_penalty.score);
        }
    }

    Ok(())
}

fn run_suggest(service: &ReviewService, input_path: &Path) -> Result<()> {
    if !input_path.is_file() {
        return Err(anyhow!("Input file does not exist: {:?}", input_path));
    }

    let text = FileManager::read_to_string(input_path)?;
    for suggestion in service.validator().suggest_improvements(&text) {
        println!("- {}", suggestion);
    }

    Ok(())
}

fn run_rank(service: &ReviewService, files: &[PathBuf], genre: &str, json: bool) -> Result<()> {
    let texts = files
        .iter()
        .map(FileManager::read_to_string)
        .collect::<Result<Vec<String>>>()?;

    let ranked = service.rank_candidates(texts.as_slice(), genre);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        for (position, candidate) in ranked.iter().enumerate() {
            println!(
                "{}. {} - {}",
                position + 1,
                files[candidate.index].display(),
                candidate.review.summary()
            );
        }
    }

    match ranked.iter().find(|c| c.review.action != ReviewAction::Regenerate) {
        Some(best) => info!("Best candidate: {}", files[best.index].display()),
        None => warn!("No candidate is acceptable; regenerate the content"),
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct FileReview {
    path: String,
    review: ContentReview,
}

fn print_review(path: &Path, review: &ContentReview) {
    println!("{}", path.display());
    println!("  {}", review.summary());
    for message in &review.verdict.errors {
        println!("  error: {}", message);
    }
    for warning in &review.verdict.warnings {
        println!("  warning: {}", warning);
    }
    for recommendation in &review.verdict.recommendations {
        println!("  recommendation: {}", recommendation);
    }
}
