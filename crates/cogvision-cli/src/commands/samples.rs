//! Bundled samples: OCR and celebrity/landmark recognition on known images.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, ValueEnum};
use cogvision_core::image::validate_source;
use cogvision_core::{DomainModel, ImageSource, Route, VisionClient, VisionError};
use dialoguer::Input;
use tracing::debug;

use crate::output;

const SAMPLE_DATA_URL: &str =
    "https://github.com/Azure-Samples/cognitive-services-sample-data-files/raw/master/ComputerVision/Images";

const PRINTED_TEXT_IMAGE: &str = "printed_text.jpg";
const CELEBRITIES_IMAGE: &str = "celebrities.jpg";
const LANDMARK_IMAGE: &str = "landmark.jpg";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SampleSet {
    /// OCR on a local and a remote printed-text image
    Ocr,
    /// Celebrities on a remote image, landmarks on a local image
    Domain,
    /// Both sets, OCR first
    All,
}

#[derive(Args)]
pub struct SamplesArgs {
    /// Which samples to run
    #[arg(long, value_enum, default_value_t = SampleSet::All)]
    pub only: SampleSet,

    /// Directory holding the local sample images
    #[arg(long, default_value = "Images")]
    pub images_dir: PathBuf,

    /// Exit without waiting for ENTER
    #[arg(long)]
    pub no_pause: bool,
}

impl Default for SamplesArgs {
    fn default() -> Self {
        Self {
            only: SampleSet::All,
            images_dir: PathBuf::from("Images"),
            no_pause: false,
        }
    }
}

/// One call in a sample run.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleCall {
    pub source: ImageSource,
    pub route: Route,
}

/// The calls a sample run makes, in order.
pub fn sample_plan(set: SampleSet, images_dir: &Path) -> Vec<SampleCall> {
    let mut plan = Vec::new();

    if matches!(set, SampleSet::Ocr | SampleSet::All) {
        plan.push(SampleCall {
            source: ImageSource::LocalPath(images_dir.join(PRINTED_TEXT_IMAGE)),
            route: Route::ocr(),
        });
        plan.push(SampleCall {
            source: ImageSource::RemoteUrl(format!("{}/{}", SAMPLE_DATA_URL, PRINTED_TEXT_IMAGE)),
            route: Route::ocr(),
        });
    }

    if matches!(set, SampleSet::Domain | SampleSet::All) {
        plan.push(SampleCall {
            source: ImageSource::RemoteUrl(format!("{}/{}", SAMPLE_DATA_URL, CELEBRITIES_IMAGE)),
            route: Route::domain(DomainModel::Celebrities),
        });
        plan.push(SampleCall {
            source: ImageSource::LocalPath(images_dir.join(LANDMARK_IMAGE)),
            route: Route::domain(DomainModel::Landmarks),
        });
    }

    plan
}

/// Run every call in the plan, one after another. Failures are reported
/// and do not stop later calls. Returns the number of successful calls.
///
/// Without a client each source is still validated, and calls that pass
/// validation fail with a configuration error.
pub async fn run_plan(plan: &[SampleCall], client: Option<&VisionClient>) -> usize {
    let mut succeeded = 0;

    for call in plan {
        output::print_step(&call.route.to_string(), &call.source.to_string());

        let result = match client {
            Some(client) => {
                output::with_spinner(
                    format!("Calling {}", call.route),
                    client.analyze(&call.source, &call.route),
                )
                .await
            }
            None => match validate_source(&call.source).await {
                Ok(()) => Err(VisionError::config("endpoint and subscription key are not configured")),
                Err(err) => Err(err),
            },
        };

        match result {
            Ok(document) => {
                output::print_response(&document);
                succeeded += 1;
            }
            Err(err) => output::print_failure(&err),
        }
    }

    succeeded
}

pub async fn execute(args: SamplesArgs, client: Option<&VisionClient>) -> Result<()> {
    let plan = sample_plan(args.only, &args.images_dir);

    match args.only {
        SampleSet::Ocr => output::print_heading("Performing OCR on the images:"),
        SampleSet::Domain => output::print_heading(
            "Recognize domain specific content (celebrities/landmarks) in images:",
        ),
        SampleSet::All => output::print_heading(
            "Performing OCR and domain specific recognition (celebrities/landmarks) on the images:",
        ),
    }

    let succeeded = run_plan(&plan, client).await;
    println!();
    output::print_summary(succeeded, plan.len());

    if !args.no_pause {
        let prompt = Input::<String>::new()
            .with_prompt("Press ENTER to exit")
            .allow_empty(true)
            .interact_text();
        if let Err(e) = prompt {
            debug!(error = %e, "Skipping exit prompt");
        }
    }

    Ok(())
}
