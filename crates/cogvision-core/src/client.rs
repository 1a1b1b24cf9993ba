//! Computer Vision API client.
//!
//! Sends one image per call, either as raw bytes or as a `{"url": ...}`
//! reference, and hands back the response document untouched.

use std::path::Path;

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::{VisionConfig, SUBSCRIPTION_KEY_HEADER};
use crate::error::{VisionError, VisionResult};
use crate::image::{read_image_bytes, validate_image_url, ImageSource};
use crate::route::Route;

const OCTET_STREAM: &str = "application/octet-stream";

/// Client for the Computer Vision REST API.
///
/// Holds one `reqwest::Client` so connections are reused across calls.
#[derive(Clone)]
pub struct VisionClient {
    config: VisionConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ImageUrlRequest<'a> {
    url: &'a str,
}

impl VisionClient {
    /// Create a client, building an HTTP client from the config's timeout.
    pub fn new(config: VisionConfig) -> VisionResult<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    /// Create a client around an existing HTTP client.
    pub fn with_http_client(config: VisionConfig, client: reqwest::Client) -> VisionResult<Self> {
        config.validate()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    /// Analyze an image from either kind of source.
    pub async fn analyze(&self, source: &ImageSource, route: &Route) -> VisionResult<Value> {
        match source {
            ImageSource::LocalPath(path) => self.analyze_from_file(path, route).await,
            ImageSource::RemoteUrl(url) => self.analyze_from_url(url, route).await,
        }
    }

    /// Upload a local image as an octet stream.
    pub async fn analyze_from_file(&self, path: &Path, route: &Route) -> VisionResult<Value> {
        let bytes = read_image_bytes(path).await?;
        let url = route.url(self.config.endpoint());

        debug!(url = %url, size = bytes.len(), path = %path.display(), "Uploading image");

        let response = self
            .client
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, self.config.subscription_key())
            .header(CONTENT_TYPE, OCTET_STREAM)
            .body(bytes)
            .send()
            .await?;

        self.read_document(response, route).await
    }

    /// Ask the service to fetch and analyze a remote image.
    pub async fn analyze_from_url(&self, image_url: &str, route: &Route) -> VisionResult<Value> {
        validate_image_url(image_url)?;
        let url = route.url(self.config.endpoint());

        debug!(url = %url, image_url, "Submitting image url");

        let response = self
            .client
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, self.config.subscription_key())
            .json(&ImageUrlRequest { url: image_url })
            .send()
            .await?;

        self.read_document(response, route).await
    }

    async fn read_document(&self, response: reqwest::Response, route: &Route) -> VisionResult<Value> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), route = %route, "Vision API returned an error status");
            return Err(VisionError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let document: Value = serde_json::from_str(&body)
            .map_err(|source| VisionError::MalformedResponse { source, body })?;

        info!(status = status.as_u16(), route = %route, "Vision API call completed");
        Ok(document)
    }
}
