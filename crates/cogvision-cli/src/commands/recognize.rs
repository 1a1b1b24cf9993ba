//! Domain-specific recognition command.

use anyhow::Result;
use clap::Args;
use cogvision_core::{DomainModel, Route, VisionClient};

use crate::output;

#[derive(Args)]
pub struct RecognizeArgs {
    /// Domain model name (celebrities, landmarks, ...)
    pub domain: String,

    /// Local image path or remote image URL
    pub image: String,

    /// Treat the image argument as a remote URL
    #[arg(long)]
    pub url: bool,
}

pub async fn execute(args: RecognizeArgs, client: &VisionClient) -> Result<()> {
    let model: DomainModel = args.domain.parse()?;
    let source = super::resolve_source(&args.image, args.url);
    let route = Route::domain(model);

    output::print_step(&route.to_string(), &source.to_string());
    let result = output::with_spinner(
        format!("Running {} on {}", route, source),
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
