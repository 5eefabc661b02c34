use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use truth_fusion::{
    EngineConfig, Modality, ModalityResult, RawSample, ScoringEngine, SessionInput, TextPolicy,
};

#[derive(Parser, Debug)]
#[command(
    name = "truth_cli",
    about = "Score raw session samples and fuse them into a truthfulness estimate"
)]
struct Cli {
    /// JSON engine configuration (defaults are used when omitted or unreadable)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Write the JSON report here instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a whole session and print the fused report
    Analyze {
        /// Raw PCM audio file
        #[arg(long)]
        audio: Option<PathBuf>,
        /// Raw video/image bytes
        #[arg(long)]
        video: Option<PathBuf>,
        /// Transcript text
        #[arg(long, conflicts_with = "text_file")]
        text: Option<String>,
        /// File containing the transcript
        #[arg(long)]
        text_file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = PolicyArg::Required)]
        text_policy: PolicyArg,
        /// Transcript scored in place of blank text with `--text-policy fallback`
        #[arg(long, default_value = "No transcript provided")]
        fallback_text: String,
    },
    /// Extract and score a single modality
    Score {
        #[arg(long, value_enum)]
        modality: ModalityArg,
        /// Sample file; the modality's default result is printed when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Fuse previously serialized modality results
    Fuse {
        #[arg(long)]
        voice: Option<PathBuf>,
        #[arg(long)]
        facial: Option<PathBuf>,
        #[arg(long)]
        text: Option<PathBuf>,
    },
    /// Print the effective configuration
    Config,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModalityArg {
    Voice,
    Facial,
    Text,
}

impl From<ModalityArg> for Modality {
    fn from(arg: ModalityArg) -> Self {
        match arg {
            ModalityArg::Voice => Modality::Voice,
            ModalityArg::Facial => Modality::Facial,
            ModalityArg::Text => Modality::Text,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Required,
    Optional,
    Fallback,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli
        .config
        .as_deref()
        .map(EngineConfig::load_from_file)
        .unwrap_or_default();
    let output = cli.output;

    match cli.command {
        Commands::Analyze {
            audio,
            video,
            text,
            text_file,
            text_policy,
            fallback_text,
        } => {
            let text = match text_file {
                Some(path) => Some(
                    fs::read_to_string(&path)
                        .with_context(|| format!("reading {}", path.display()))?,
                ),
                None => text,
            };
            let policy = match text_policy {
                PolicyArg::Required => TextPolicy::Required,
                PolicyArg::Optional => TextPolicy::Optional,
                PolicyArg::Fallback => TextPolicy::Fallback(fallback_text),
            };
            let input = SessionInput {
                voice: audio.as_deref().map(read_bytes).transpose()?,
                facial: video.as_deref().map(read_bytes).transpose()?,
                text,
                text_policy: policy,
            };
            run_analyze(config, &input, output)
        }
        Commands::Score { modality, input } => run_score(config, modality.into(), input, output),
        Commands::Fuse {
            voice,
            facial,
            text,
        } => run_fuse(config, voice, facial, text, output),
        Commands::Config => {
            emit(&config, output)?;
            Ok(ExitCode::from(0))
        }
    }
}

fn run_analyze(
    config: EngineConfig,
    input: &SessionInput,
    output: Option<PathBuf>,
) -> Result<ExitCode> {
    let engine = ScoringEngine::new(config);
    let report = engine
        .analyze_session(input)
        .context("analyzing session")?;
    emit(&report, output)?;
    Ok(ExitCode::from(0))
}

fn run_score(
    config: EngineConfig,
    modality: Modality,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<ExitCode> {
    let engine = ScoringEngine::new(config);
    let sample = match input {
        Some(path) if modality == Modality::Text => Some(RawSample::Text(
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?,
        )),
        Some(path) => Some(RawSample::Bytes(read_bytes(&path)?)),
        None => None,
    };

    let result = engine
        .extract_and_score(modality, sample.as_ref())
        .with_context(|| format!("scoring {} sample", modality))?;
    emit(&result, output)?;
    Ok(ExitCode::from(0))
}

fn run_fuse(
    config: EngineConfig,
    voice: Option<PathBuf>,
    facial: Option<PathBuf>,
    text: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<ExitCode> {
    let engine = ScoringEngine::new(config);
    let voice = voice.as_deref().map(read_result).transpose()?;
    let facial = facial.as_deref().map(read_result).transpose()?;
    let text = text.as_deref().map(read_result).transpose()?;

    let fused = engine
        .fuse(voice.as_ref(), facial.as_ref(), text.as_ref())
        .context("fusing modality results")?;
    emit(&fused, output)?;
    Ok(ExitCode::from(0))
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("reading {}", path.display()))
}

fn read_result(path: &Path) -> Result<ModalityResult> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

fn emit<T: Serialize>(value: &T, output: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    if let Some(path) = output {
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    } else {
        println!("{json}");
    }

    Ok(())
}
