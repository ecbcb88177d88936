//! Resume analyzer: LLM-backed resume and job description analysis tool

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_analyzer::cli::{self, Cli, Commands, ConfigAction};
use resume_analyzer::config::{Config, OutputFormat};
use resume_analyzer::input::{FileType, InputManager, JobSource};
use resume_analyzer::llm::{AnalysisOutcome, GeminiClient, ModelFallback, PromptParams, PromptTemplates};
use resume_analyzer::output::{
    report_path, save_report_to_file, DashboardReport, ReportGenerator, ReportMetadata,
};
use resume_analyzer::processing::parse_analysis;
use resume_analyzer::{Result, ResumeAnalyzerError};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    // .env is optional; a missing file is not an error
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            model,
            offline,
            output,
            save,
            detailed,
        } => {
            let start = Instant::now();
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, FileType::supported_extensions())
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;

            let job_source = match (job, job_text) {
                (Some(path), _) => {
                    cli::validate_file_extension(&path, FileType::supported_extensions()).map_err(
                        |e| ResumeAnalyzerError::InvalidInput(format!("Job description file: {}", e)),
                    )?;
                    JobSource::File(path)
                }
                (None, Some(text)) => JobSource::Text(text),
                (None, None) => {
                    return Err(ResumeAnalyzerError::InvalidInput(
                        "A job description file or inline text is required".to_string(),
                    ))
                }
            };

            let output_format = resolve_format(output.as_deref(), &config)?;

            println!("🚀 Resume analysis");
            println!("📄 Resume: {}", resume.display());
            println!("💼 Job Description: {}", job_source.describe());

            let mut input_manager = InputManager::new().with_cache(config.input.enable_caching);
            let resume_text = input_manager.load_resume(&resume).await?;
            let job_content = input_manager.load_job_description(&job_source).await?;
            info!(
                "Extracted {} resume chars and {} job chars",
                resume_text.chars().count(),
                job_content.chars().count()
            );

            let outcome = if offline {
                println!("⚠️  Offline mode: using the built-in fallback analysis");
                AnalysisOutcome::fallback("Offline mode")
            } else {
                let client = GeminiClient::from_config(&config.llm)?;
                let mut fallback = ModelFallback::new(config.llm.models.clone());
                if let Some(model) = &model {
                    fallback = fallback.prefer(model);
                }

                let prompt = PromptTemplates::default().render_analysis(&PromptParams {
                    resume_content: resume_text.clone(),
                    job_content: job_content.clone(),
                });

                let spinner = analysis_spinner();
                let outcome = fallback.run(&client, &prompt).await;
                spinner.finish_and_clear();
                outcome
            };

            if let Some(reason) = &outcome.fallback_reason {
                warn!("Using fallback analysis: {}", reason);
            }

            let analysis = parse_analysis(&outcome.text);
            let metadata = ReportMetadata::new(resume.display().to_string(), job_source.describe())
                .with_previews(&resume_text, &job_content, &config.input)
                .with_outcome(&outcome)
                .with_processing_time(start.elapsed());

            let report = DashboardReport::new(analysis, metadata);
            emit_report(&report, output_format, save, detailed, &config)
        }

        Commands::Parse {
            analysis,
            output,
            save,
            detailed,
        } => {
            let start = Instant::now();
            cli::validate_file_extension(&analysis, &["txt", "md", "markdown"])
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Analysis file: {}", e)))?;
            let output_format = resolve_format(output.as_deref(), &config)?;

            let mut input_manager = InputManager::new().with_cache(false);
            let text = input_manager.load_analysis(&analysis).await?;

            let metadata = ReportMetadata::new(analysis.display().to_string(), "saved analysis")
                .with_processing_time(start.elapsed());
            let report = DashboardReport::new(parse_analysis(&text), metadata);
            emit_report(&report, output_format, save, detailed, &config)
        }

        Commands::Models => {
            println!("🤖 Model fallback order\n");
            for (index, model) in config.llm.models.iter().enumerate() {
                println!("  {}. {}", index + 1, model);
            }

            let key_status = if std::env::var(&config.llm.api_key_env).is_ok() {
                "set"
            } else {
                "not set"
            };
            println!("\nAPI endpoint: {}", config.llm.api_base_url);
            println!("API key ({}): {}", config.llm.api_key_env, key_status);
            Ok(())
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", rendered);
                Ok(())
            }
            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset: {}", config_path.display());
                Ok(())
            }
            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
                Ok(())
            }
        },
    }
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(format) => cli::parse_output_format(format).map_err(ResumeAnalyzerError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn emit_report(
    report: &DashboardReport,
    format: OutputFormat,
    save: Option<PathBuf>,
    detailed: bool,
    config: &Config,
) -> Result<()> {
    // Escape codes only belong on a terminal
    let use_colors = config.output.color_output && save.is_none();
    let generator = ReportGenerator::with_options(
        use_colors,
        detailed || config.output.detailed,
        config.output.pretty_json,
        config.output.include_metadata,
        true,
    );
    let content = generator.generate_report(report, &format)?;

    match save {
        Some(path) => {
            let path = report_path(&path, &format, &report.metadata.resume_source);
            save_report_to_file(&content, &path)?;
            println!("💾 Report saved to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn analysis_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message("Analyzing resume with Gemini...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
