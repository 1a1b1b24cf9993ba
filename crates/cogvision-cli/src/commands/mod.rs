//! CLI command definitions and handlers.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cogvision_core::{ImageSource, VisionClient, VisionConfig};

use crate::output;

pub mod ocr;
pub mod recognize;
pub mod samples;

/// CogVision - Computer Vision OCR and domain recognition
#[derive(Parser)]
#[command(name = "cogvision")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Computer Vision endpoint base URL
    #[arg(long, global = true, env = "COMPUTER_VISION_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Computer Vision subscription key
    #[arg(long, global = true, env = "COMPUTER_VISION_SUBSCRIPTION_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Request timeout in seconds (HTTP client default when omitted)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Defaults to `samples` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recognize printed text in an image
    Ocr(ocr::OcrArgs),

    /// Recognize celebrities, landmarks or another domain model in an image
    Recognize(recognize::RecognizeArgs),

    /// Run the bundled OCR and domain recognition samples
    Samples(samples::SamplesArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let needs_client = matches!(
            self.command,
            Some(Commands::Ocr(_)) | Some(Commands::Recognize(_))
        );

        if needs_client {
            let client = self.vision_client()?;
            return match self.command {
                Some(Commands::Ocr(args)) => ocr::execute(args, &client).await,
                Some(Commands::Recognize(args)) => recognize::execute(args, &client).await,
                _ => Ok(()),
            };
        }

        // A sample run still validates and reports every call
        // when the endpoint or key is missing.
        let client = match self.vision_client() {
            Ok(client) => Some(client),
            Err(err) => {
                output::print_config_error(&err);
                None
            }
        };
        let args = match self.command {
            Some(Commands::Samples(args)) => args,
            _ => samples::SamplesArgs::default(),
        };
        samples::execute(args, client.as_ref()).await
    }

    /// Build the shared client from flags or the environment.
    fn vision_client(&self) -> Result<VisionClient> {
        let endpoint = self.endpoint.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "COMPUTER_VISION_ENDPOINT environment variable not set.\n\
                 Set it with: export COMPUTER_VISION_ENDPOINT=https://<region>.api.cognitive.microsoft.com"
            )
        })?;
        let key = self.key.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "COMPUTER_VISION_SUBSCRIPTION_KEY environment variable not set.\n\
                 Set it with: export COMPUTER_VISION_SUBSCRIPTION_KEY=your-key"
            )
        })?;

        let mut config = VisionConfig::new(endpoint, key);
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        let client = VisionClient::new(config).context("Invalid Computer Vision configuration")?;
        tracing::debug!(config = ?client.config(), "Created Vision client");
        Ok(client)
    }
}

/// Resolve the positional image argument, honoring `--url`.
pub fn resolve_source(image: &str, force_url: bool) -> ImageSource {
    if force_url {
        ImageSource::RemoteUrl(image.to_string())
    } else {
        ImageSource::detect(image)
    }
}
