mod catalog;
mod config;
mod export;
mod logger;
mod prompt;
mod questionnaire;
mod ui;
mod wizard;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

use config::{Config, ConfigError};
use export::{ExportError, PrintPdfRenderer};
use questionnaire::Questionnaire;
use ui::UiError;

#[derive(Parser)]
#[command(name = "vibe-prompt")]
#[command(about = "Build a website prompt for AI coding tools through a guided questionnaire")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory where text and PDF exports are written.
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Log file for the interactive wizard (defaults to <output-dir>/vibe-prompt.log).
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// TrueType font embedded in PDF exports so Japanese text renders.
    #[arg(long, global = true)]
    pdf_font: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a questionnaire saved as JSON without the interactive wizard.
    Compile {
        #[arg(long)]
        answers: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Prompt)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Print the compiled prompt to stdout.
    Prompt,
    /// Write `<project>_vibe_coding_prompt.txt`.
    Text,
    /// Write `<project>_vibe_coding_prompt.pdf`.
    Pdf,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("ログファイルを開けません: {path} ({source})")]
    Logger {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("回答ファイルを読み込めません: {path} ({source})")]
    ReadAnswers {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("回答ファイルの形式が正しくありません: {path} ({source})")]
    ParseAnswers {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Ui(#[from] UiError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::new(cli.output_dir, cli.log_file, cli.pdf_font)?;

    match cli.command {
        Some(Commands::Compile { answers, format }) => {
            logger::init_stderr();
            run_compile(&config, &answers, format)
        }
        None => {
            logger::init_file(config.log_file()).map_err(|source| AppError::Logger {
                path: config.log_file().display().to_string(),
                source,
            })?;
            tracing::info!(output_dir = %config.output_dir().display(), "starting wizard");
            ui::run(config)?;
            Ok(())
        }
    }
}

fn run_compile(config: &Config, answers: &Path, format: OutputFormat) -> Result<(), AppError> {
    let questionnaire = load_answers(answers)?;
    if questionnaire.project_name.trim().is_empty() {
        tracing::warn!(path = %answers.display(), "answers file has no project name");
    }

    let document = prompt::compile(&questionnaire);

    match format {
        OutputFormat::Prompt => println!("{}", document),
        OutputFormat::Text => {
            let today = chrono::Local::now().date_naive();
            let path = export::write_text_file(
                config.output_dir(),
                &questionnaire.project_name,
                &document,
                today,
            )?;
            println!("{}", path.display());
        }
        OutputFormat::Pdf => {
            let renderer = PrintPdfRenderer::new(config.pdf_font().map(Path::to_path_buf));
            let path = export::write_pdf(
                &renderer,
                config.output_dir(),
                &questionnaire.project_name,
                &document,
            )?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn load_answers(path: &Path) -> Result<Questionnaire, AppError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::ReadAnswers {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| AppError::ParseAnswers {
        path: path.display().to_string(),
        source,
    })
}
