//! batchscribe - transcribe audio files from the command line.
//!
//! Accepts a single audio file or a folder. Folder mode discovers all
//! supported audio files and transcribes them one at a time, continuing
//! past per-file failures; single-file mode exits non-zero on any error.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};

use batchscribe::clients::{
    ApiTranscriber, AzureClient, LocalTranscriber, OpenAIClient, TranscriptionService,
};
use batchscribe::config::{AzureOpenAIConfig, OpenAIConfig, Provider, WhisperModel};
use batchscribe::discovery::AudioFile;
use batchscribe::{batch, discovery, Error};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Transcribe audio files with a local Whisper model, OpenAI, or Azure OpenAI"
)]
struct Args {
    /// Audio file or folder of audio files to transcribe
    input: PathBuf,

    /// Directory transcripts are written to
    #[arg(long, alias = "output_dir", default_value = "transcripts")]
    output_dir: PathBuf,

    /// Transcription backend
    #[arg(long, value_enum, default_value_t = Provider::Local)]
    provider: Provider,

    /// Model identifier: Whisper size (tiny..large) for local, API model
    /// for openai, deployment name for azure
    #[arg(long)]
    model: Option<String>,

    /// Directory containing ggml model files (local provider only)
    #[arg(long, default_value = "models")]
    model_dir: PathBuf,
}

fn main() {
    // Credentials may live in a .env file next to the invocation.
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    // Validate the input path before any backend setup; constructing
    // the local backend loads the whole model into memory.
    if args.input.is_dir() {
        let files = discovery::discover(&args.input)?;
        if files.is_empty() {
            warn!(
                "No supported audio files found in {}",
                args.input.display()
            );
        } else {
            info!(
                "Found {} audio file(s) to process in {}",
                files.len(),
                args.input.display()
            );
        }

        let backend = build_backend(&args)?;
        let results = batch::run(
            files,
            backend.as_ref(),
            &args.output_dir,
            backend.vendor_tag(),
        )?;
        let failed = results.iter().filter(|r| !r.is_success()).count();
        info!(
            "All files processed: {} succeeded, {} failed",
            results.len() - failed,
            failed
        );
        Ok(())
    } else {
        if !args.input.exists() {
            return Err(Error::NotFound(format!(
                "input file not found: {}",
                args.input.display()
            )));
        }

        let backend = build_backend(&args)?;
        fs::create_dir_all(&args.output_dir)?;
        let file = AudioFile::new(args.input.clone());
        let output_path = batch::transcribe_to_file(
            &file,
            backend.as_ref(),
            &args.output_dir,
            backend.vendor_tag(),
        )?;
        info!("Transcript saved to: {}", output_path.display());
        Ok(())
    }
}

fn build_backend(args: &Args) -> Result<Box<dyn TranscriptionService>, Error> {
    match args.provider {
        Provider::Local => {
            let size = WhisperModel::parse(args.model.as_deref().unwrap_or("base"))?;
            let model_path = size.resolve_model_file(&args.model_dir)?;
            Ok(Box::new(LocalTranscriber::load(&model_path)?))
        }
        Provider::OpenAI => {
            let config = OpenAIConfig::from_env(args.model.clone())?;
            Ok(Box::new(ApiTranscriber::new(Box::new(OpenAIClient::new(
                config,
            )))))
        }
        Provider::Azure => {
            let config = AzureOpenAIConfig::from_env(args.model.clone())?;
            Ok(Box::new(ApiTranscriber::new(Box::new(AzureClient::new(
                config,
            )))))
        }
    }
}
