use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

use fitment::assessment::{calculate_score, load_assessment, validate_assessment, ScoreResult};
use fitment::config::Config;
use fitment::jobs::{load_catalogue, rank_jobs, JobCatalogue};
use fitment::saved::{filter_saved_jobs, get_saved_jobs_path, load_saved_jobs, save_saved_jobs};
use fitment::{browser, output, telemetry};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
    Tsv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an assessment submission
    Score {
        /// Submission file (.json, otherwise YAML)
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Refuse submissions that fail validation
        #[arg(long)]
        strict: bool,
    },
    /// Show every rule that contributed to a submission's scores
    Explain {
        file: PathBuf,
        #[arg(long)]
        strict: bool,
    },
    /// Rank job postings by fit against a submission
    Match {
        file: PathBuf,
        /// Job catalogue (defaults to jobs_file from config)
        #[arg(long)]
        jobs: Option<PathBuf>,
        /// Only rank saved jobs
        #[arg(long)]
        saved_only: bool,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        #[arg(long)]
        strict: bool,
    },
    /// Open a job posting in the browser
    Open {
        job_id: String,
        #[arg(long)]
        jobs: Option<PathBuf>,
    },
    /// Add a job to the saved list
    Save {
        job_id: String,
        #[arg(long)]
        jobs: Option<PathBuf>,
    },
    /// Remove a job from the saved list
    Unsave { job_id: String },
    /// List saved jobs
    Saved,
    /// List selectable core values
    Values,
}

#[derive(Parser, Debug)]
#[command(name = "fitment")]
#[command(about = "Assessment scoring and job fit CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/fitment/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Print the error chain and exit with `code`.
fn fail(code: i32, err: anyhow::Error) -> ! {
    eprintln!("Error: {:#}", err);
    std::process::exit(code);
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    let config_path = cli.config.map(PathBuf::from);
    let config = match fitment::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = fitment::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let directive = telemetry::log_directive(cli.verbose, config.log_level.as_deref());
    if let Err(e) = telemetry::init(directive) {
        eprintln!("Logging disabled: {}", e);
    }

    let use_colors = output::should_use_colors(config.colors);

    match cli.command {
        Commands::Score {
            file,
            format,
            strict,
        } => {
            let result = score_submission(&file, strict || config.strict);
            match format {
                Format::Text => println!("{}", output::format_scores(&result.scores, use_colors)),
                Format::Json => println!("{}", to_json(&result.scores)),
                Format::Tsv => println!("{}", output::format_scores_tsv(&result.scores)),
            }
        }
        Commands::Explain { file, strict } => {
            let result = score_submission(&file, strict || config.strict);
            println!("{}", output::format_breakdown(&result, use_colors));
        }
        Commands::Match {
            file,
            jobs,
            saved_only,
            format,
            strict,
        } => {
            let result = score_submission(&file, strict || config.strict);
            let catalogue = load_jobs(jobs.as_deref(), &config);
            let saved = load_saved();

            let candidates = if saved_only {
                filter_saved_jobs(&catalogue.jobs, &saved)
            } else {
                catalogue.jobs.iter().collect()
            };
            tracing::debug!(candidates = candidates.len(), saved_only, "ranking jobs");

            let ranked = rank_jobs(candidates, &result.scores);
            match format {
                Format::Text => {
                    println!("{}", output::format_match_table(&ranked, &saved, use_colors))
                }
                Format::Json => println!("{}", to_json(&ranked)),
                Format::Tsv => println!("{}", output::format_match_tsv(&ranked)),
            }
        }
        Commands::Open { job_id, jobs } => {
            let catalogue = load_jobs(jobs.as_deref(), &config);
            let job = match catalogue.find(&job_id) {
                Some(job) => job,
                None => fail(EXIT_INPUT, anyhow::anyhow!("Unknown job id '{}'", job_id)),
            };
            if let Err(e) = browser::open_job(job) {
                fail(EXIT_IO, e);
            }
            println!("Opening {} in browser", job.headline());
        }
        Commands::Save { job_id, jobs } => {
            let catalogue = load_jobs(jobs.as_deref(), &config);
            let job = match catalogue.find(&job_id) {
                Some(job) => job,
                None => fail(EXIT_INPUT, anyhow::anyhow!("Unknown job id '{}'", job_id)),
            };
            let mut saved = load_saved();
            saved.save(job.id.clone(), job.headline());
            store_saved(&saved);
            println!("Saved {}: {}", job.id, job.headline());
        }
        Commands::Unsave { job_id } => {
            let mut saved = load_saved();
            if saved.unsave(&job_id) {
                store_saved(&saved);
                println!("Removed {} from saved jobs", job_id);
            } else {
                println!("{} was not saved", job_id);
            }
        }
        Commands::Saved => {
            let saved = load_saved();
            println!("{}", output::format_saved_list(&saved, use_colors));
        }
        Commands::Values => {
            println!("{}", output::format_core_values(use_colors));
        }
    }

    tracing::debug!(elapsed = ?start_time.elapsed(), "done");
    std::process::exit(EXIT_SUCCESS);
}

/// Load, validate and score a submission. Validation findings are fatal in
/// strict mode and logged as warnings otherwise.
fn score_submission(path: &Path, strict: bool) -> ScoreResult {
    let assessment = load_assessment(path).unwrap_or_else(|e| fail(EXIT_INPUT, e));

    if let Err(errors) = validate_assessment(&assessment) {
        if strict {
            eprintln!("Submission errors in {}:", path.display());
            for error in &errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_INPUT);
        }
        for error in &errors {
            tracing::warn!(file = %path.display(), "{}", error);
        }
    }

    calculate_score(&assessment)
}

fn load_jobs(explicit: Option<&Path>, config: &Config) -> JobCatalogue {
    let path = match explicit.or(config.jobs_file.as_deref()) {
        Some(p) => p,
        None => {
            eprintln!("No job catalogue configured.");
            eprintln!("Pass --jobs <FILE> or add to ~/.config/fitment/config.yaml:");
            eprintln!("  jobs_file: /path/to/jobs.yaml");
            std::process::exit(EXIT_CONFIG);
        }
    };
    load_catalogue(path).unwrap_or_else(|e| fail(EXIT_INPUT, e))
}

fn load_saved() -> fitment::saved::SavedJobs {
    get_saved_jobs_path()
        .and_then(|path| load_saved_jobs(&path))
        .unwrap_or_else(|e| fail(EXIT_IO, e))
}

fn store_saved(saved: &fitment::saved::SavedJobs) {
    let result = get_saved_jobs_path().and_then(|path| save_saved_jobs(&path, saved));
    if let Err(e) = result {
        fail(EXIT_IO, e);
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| fail(EXIT_IO, anyhow::Error::new(e).context("Failed to encode JSON")))
}
