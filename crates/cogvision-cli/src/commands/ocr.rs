//! OCR command.

use anyhow::Result;
use clap::{ArgAction, Args};
use cogvision_core::{OcrOptions, Route, VisionClient};

use crate::output;

#[derive(Args)]
pub struct OcrArgs {
    /// Local image path or remote image URL
    pub image: String,

    /// Treat the image argument as a remote URL
    #[arg(long)]
    pub url: bool,

    /// Language code of the text, `unk` to auto-detect
    #[arg(long, default_value = "unk")]
    pub language: String,

    /// Detect and correct text orientation before recognition
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub detect_orientation: bool,
}

impl OcrArgs {
    fn route(&self) -> Route {
        Route::Ocr(OcrOptions {
            language: self.language.clone(),
            detect_orientation: self.detect_orientation,
        })
    }
}

pub async fn execute(args: OcrArgs, client: &VisionClient) -> Result<()> {
    let source = super::resolve_source(&args.image, args.url);
    let route = args.route();

    output::print_step("OCR", &source.to_string());
    let result = output::with_spinner(
        format!("Performing OCR on {}", source),
        client.analyze(&source, &route),
    )
    .await;

    match result {
        Ok(document) => {
            output::print_response(&document);
            Ok(())
        }
        Err(err) => {
            output::print_error_body(&err);
            Err(err.into())
        }
    }
}
