//! resume-ats: ATS-compatibility scoring for resumes and job descriptions

use clap::Parser;
use log::{debug, error, info};
use resume_ats::cli::{self, Cli, Commands, ConfigAction, OutputArgs};
use resume_ats::config::{Config, OutputFormat};
use resume_ats::error::{Result, ResumeAtsError};
use resume_ats::input::InputManager;
use resume_ats::output::formatter::{save_report_to_file, suggest_filename};
use resume_ats::output::{Report, ReportBody, ReportGenerator, ReportMetadata};
use resume_ats::processing::completeness::CompletenessReport;
use resume_ats::processing::estimator::RandomizedEstimator;
use resume_ats::processing::job_matcher::{JobMatchAnalyzer, ResumeTextLookup, SimulatedLookup};
use resume_ats::processing::resume_parser::ResumeTextAnalyzer;
use std::path::{Path, PathBuf};
use std::process;

const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];
const JOB_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Parse { resume, seed, output } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, DOCUMENT_EXTENSIONS)
                .map_err(|e| ResumeAtsError::InvalidInput(format!("Resume file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            debug!("Resume text length: {} characters", resume_text.chars().count());

            let seed = seed.or(config.scoring.seed);
            let mut estimator = match seed {
                Some(seed) => RandomizedEstimator::from_seed(seed),
                None => RandomizedEstimator::from_entropy(),
            };

            let analyzer = ResumeTextAnalyzer::new(&config.vocabulary)?;
            let parsed = analyzer.parse(&resume_text, &mut estimator);
            info!("Overall compatibility: {}%", parsed.overall_compatibility);

            let metadata = ReportMetadata::new(vec![resume.display().to_string()]).with_simulation(seed);
            let report = Report::new(ReportBody::ResumeAnalysis(parsed), metadata);
            emit_report(&report, &config, &output, &resume)
        }

        Commands::Match { job, resume, seed, output } => {
            info!("Starting job match analysis");

            cli::validate_file_extension(&job, JOB_EXTENSIONS)
                .map_err(|e| ResumeAtsError::InvalidInput(format!("Job description file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let job_text = input_manager.extract_text(&job).await?;

            let analyzer = JobMatchAnalyzer::new(&config.vocabulary);
            let mut sources = vec![job.display().to_string()];

            let report = match &resume {
                Some(resume_path) => {
                    cli::validate_file_extension(resume_path, DOCUMENT_EXTENSIONS)
                        .map_err(|e| ResumeAtsError::InvalidInput(format!("Resume file: {}", e)))?;

                    let resume_text = input_manager.extract_text(resume_path).await?;
                    sources.push(resume_path.display().to_string());

                    let analysis = analyzer.analyze(&job_text, &mut ResumeTextLookup::new(&resume_text));
                    Report::new(ReportBody::JobMatch(analysis), ReportMetadata::new(sources))
                }
                None if config.scoring.simulate_without_resume => {
                    let seed = seed.or(config.scoring.seed);
                    info!("No resume given, simulating keyword matches");
                    let analysis = match seed {
                        Some(seed) => analyzer.analyze(&job_text, &mut SimulatedLookup::from_seed(seed)),
                        None => analyzer.analyze(&job_text, &mut SimulatedLookup::from_entropy()),
                    };
                    Report::new(
                        ReportBody::JobMatch(analysis),
                        ReportMetadata::new(sources).with_simulation(seed),
                    )
                }
                None => {
                    info!("No resume given, reporting every keyword as missing");
                    let analysis = analyzer.analyze(&job_text, &mut ResumeTextLookup::new(""));
                    Report::new(ReportBody::JobMatch(analysis), ReportMetadata::new(sources))
                }
            };

            info!("Match score: {}%", report.headline_score());
            emit_report(&report, &config, &output, &job)
        }

        Commands::Score { resume, output } => {
            info!("Scoring resume completeness");

            let input_manager = InputManager::new();
            let record = input_manager.load_resume(&resume).await?;

            let completeness = CompletenessReport::from_resume(&record);
            info!(
                "Completeness: {}/{} points",
                completeness.total_score, completeness.max_score
            );

            let metadata = ReportMetadata::new(vec![resume.display().to_string()]);
            let report = Report::new(ReportBody::Completeness(completeness), metadata);
            emit_report(&report, &config, &output, &resume)
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    let rendered = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeAtsError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("# {}\n", path.display());
                    println!("{}", rendered);
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset to defaults: {}", path.display());
                }
            }
            Ok(())
        }
    }
}

/// Render a report in the requested format, print it, and optionally save it
fn emit_report(report: &Report, config: &Config, args: &OutputArgs, source: &Path) -> Result<()> {
    let format = match &args.output {
        Some(format) => cli::parse_output_format(format).map_err(ResumeAtsError::InvalidInput)?,
        None => config.output.format,
    };

    let generator = ReportGenerator::with_options(
        config.output.color_output && format == OutputFormat::Console,
        args.detailed || config.output.detailed,
        config.output.pretty_json,
        true,
    );
    let rendered = generator.generate_report(report, &format)?;
    println!("{}", rendered);

    if let Some(save_path) = &args.save {
        let target = if save_path.is_dir() {
            save_path.join(suggest_filename(&format, &source.to_string_lossy(), true))
        } else {
            save_path.clone()
        };

        // Saved console reports never carry ANSI escapes
        let content = if format == OutputFormat::Console && config.output.color_output {
            ReportGenerator::with_options(false, args.detailed || config.output.detailed, config.output.pretty_json, true)
                .generate_report(report, &format)?
        } else {
            rendered
        };

        save_report_to_file(&content, &target)?;
        info!("Report saved to {}", target.display());
    }

    Ok(())
}
