use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::warn;
use vitae::text::traits::KeywordExtractor;

mod config;

/// Vitae: resume / job-description matching.
///
/// Compares a resume against a job description, scores their lexical
/// similarity, lists the keywords the resume is missing, and prints
/// improvement suggestions.
#[derive(Parser)]
#[command(name = "vitae", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a resume against a job description
    Analyze {
        /// Path to the resume text file
        #[arg(long)]
        resume: PathBuf,

        /// Path to the job description text file
        #[arg(long)]
        job: PathBuf,

        /// Skip the section presence checklist
        #[arg(long)]
        no_sections: bool,

        /// Emit the report as JSON instead of formatted output
        #[arg(long)]
        json: bool,

        /// Max missing keywords to report (1-15)
        #[arg(long)]
        cap: Option<usize>,
    },

    /// Show the keywords extracted from a single document
    Keywords {
        /// Path to the document
        file: PathBuf,

        /// Use the ranked TF-IDF extractor instead of the whitespace split
        #[arg(long)]
        ranked: bool,

        /// How many ranked keywords to keep (ranked extractor only)
        #[arg(long, default_value = "25")]
        top: usize,
    },

    /// Check a resume for standard sections (email, education, skills, experience)
    Sections {
        /// Path to the resume
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vitae=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            resume,
            job,
            no_sections,
            json,
            cap,
        } => {
            let config = config::Config::load()?;
            let resume_text = read_document(&resume)?;
            let job_text = read_document(&job)?;

            let extractor = create_extractor(&config);
            let options = vitae::pipeline::analyze::AnalysisOptions {
                missing_cap: cap
                    .map(|c| c.clamp(config::MISSING_CAP_MIN, config::MISSING_CAP_MAX))
                    .unwrap_or(config.missing_cap),
                check_sections: !no_sections,
            };

            match vitae::pipeline::analyze::analyze(
                &resume_text,
                &job_text,
                extractor.as_ref(),
                &options,
            ) {
                Ok(report) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        vitae::output::terminal::display_report(&report);
                    }
                }
                // Empty input is a user-facing warning, not a failure
                Err(e) => {
                    warn!(error = %e, "Analysis not attempted");
                    println!("{} {e}", "Warning:".yellow().bold());
                    println!("Please provide both resume and job description text.");
                }
            }
        }

        Commands::Keywords { file, ranked, top } => {
            let config = config::Config::load()?;
            let text = read_document(&file)?;

            let extractor: Box<dyn KeywordExtractor> = if ranked {
                Box::new(vitae::text::ranked::RankedExtractor { top_n: top })
            } else {
                create_extractor(&config)
            };

            let mut keywords: Vec<String> = extractor.extract(&text).into_iter().collect();
            keywords.sort();
            vitae::output::terminal::display_keywords(&keywords);
        }

        Commands::Sections { file } => {
            let text = read_document(&file)?;
            let sections = vitae::analysis::sections::check_sections(&text);

            println!("\n{}", "=== Resume Sections ===".bold());
            vitae::output::terminal::display_sections(&sections);
            println!();
        }
    }

    Ok(())
}

/// Build the configured keyword extractor backend.
fn create_extractor(config: &config::Config) -> Box<dyn KeywordExtractor> {
    match config.extractor_backend {
        config::ExtractorBackend::Whitespace => {
            Box::new(vitae::text::traits::WhitespaceExtractor {
                permissive: config.permissive,
            })
        }
        config::ExtractorBackend::Ranked => {
            Box::new(vitae::text::ranked::RankedExtractor::default())
        }
    }
}

/// Read one input document from disk.
fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
