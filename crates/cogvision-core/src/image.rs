//! Image sources: a local file or a remote URL.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{VisionError, VisionResult};

/// Where the image to analyze comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Image bytes read from the local filesystem and uploaded as an octet stream.
    LocalPath(PathBuf),
    /// Absolute URL the service downloads the image from.
    RemoteUrl(String),
}

impl ImageSource {
    /// Classify a user-supplied string.
    ///
    /// Anything that parses as an absolute URL with a host is remote;
    /// everything else (including `C:\...` style paths) is a local path.
    pub fn detect(input: &str) -> Self {
        if is_well_formed_absolute_url(input) {
            Self::RemoteUrl(input.to_string())
        } else {
            Self::LocalPath(PathBuf::from(input))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::RemoteUrl(_))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalPath(path) => write!(f, "{}", path.display()),
            Self::RemoteUrl(url) => write!(f, "{}", url),
        }
    }
}

/// Returns true for strings like `https://host/path`.
pub fn is_well_formed_absolute_url(input: &str) -> bool {
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return false;
    }
    match Url::parse(input) {
        // `http:/host` and `http:host` parse after normalization; require the
        // authority to be written out as given.
        Ok(url) => {
            url.has_host()
                && input
                    .get(url.scheme().len()..)
                    .is_some_and(|rest| rest.starts_with("://"))
        }
        Err(_) => false,
    }
}

/// Check a source without sending anything: the local file must exist,
/// the remote URL must be well formed.
pub async fn validate_source(source: &ImageSource) -> VisionResult<()> {
    match source {
        ImageSource::LocalPath(path) => match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_file() => Ok(()),
            _ => Err(VisionError::InvalidFilePath(path.clone())),
        },
        ImageSource::RemoteUrl(url) => validate_image_url(url),
    }
}

/// Reject strings that are not well-formed absolute URLs.
pub fn validate_image_url(input: &str) -> VisionResult<()> {
    if is_well_formed_absolute_url(input) {
        Ok(())
    } else {
        Err(VisionError::invalid_url(input))
    }
}

/// Read the whole image file into memory.
///
/// A path that does not name an existing regular file is a validation error,
/// not an IO error.
pub async fn read_image_bytes(path: &Path) -> VisionResult<Vec<u8>> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return Err(VisionError::InvalidFilePath(path.to_path_buf())),
    }

    Ok(tokio::fs::read(path).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_remote() {
        let src = ImageSource::detect("https://example.com/img.jpg");
        assert_eq!(src, ImageSource::RemoteUrl("https://example.com/img.jpg".to_string()));
        assert!(src.is_remote());
    }

    #[test]
    fn test_detect_local() {
        assert_eq!(
            ImageSource::detect("Images/printed_text.jpg"),
            ImageSource::LocalPath(PathBuf::from("Images/printed_text.jpg"))
        );
        assert!(!ImageSource::detect(r"C:\Images\landmark.jpg").is_remote());
    }

    #[test]
    fn test_well_formed_urls() {
        assert!(is_well_formed_absolute_url("https://example.com/img.jpg"));
        assert!(is_well_formed_absolute_url("http://127.0.0.1:8080/a.png"));
        assert!(!is_well_formed_absolute_url("not-a-url"));
        assert!(!is_well_formed_absolute_url(""));
        assert!(!is_well_formed_absolute_url("/relative/path.jpg"));
        assert!(!is_well_formed_absolute_url("https://example.com/a b.jpg"));
        assert!(!is_well_formed_absolute_url("http:/example.com/img.jpg"));
        assert!(!is_well_formed_absolute_url("http:example.com/img.jpg"));
        assert!(!is_well_formed_absolute_url(r"https:\\example.com\img.jpg"));
        assert!(is_well_formed_absolute_url("HTTPS://example.com/img.jpg"));
    }

    #[test]
    fn test_validate_image_url_error() {
        let err = validate_image_url("not-a-url").unwrap_err();
        assert!(matches!(err, VisionError::InvalidImageUrl(ref u) if u == "not-a-url"));
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let err = read_image_bytes(Path::new("missing.jpg")).await.unwrap_err();
        assert!(matches!(err, VisionError::InvalidFilePath(_)));
    }

    #[tokio::test]
    async fn test_validate_source() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(validate_source(&ImageSource::LocalPath(file.path().to_path_buf())).await.is_ok());
        assert!(validate_source(&ImageSource::LocalPath(PathBuf::from("missing.jpg")))
            .await
            .unwrap_err()
            .is_validation());
        assert!(validate_source(&ImageSource::RemoteUrl("https://example.com/a.jpg".to_string()))
            .await
            .is_ok());
        assert!(validate_source(&ImageSource::RemoteUrl("http:/example.com".to_string()))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_read_directory_is_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_image_bytes(dir.path()).await.unwrap_err();
        assert!(err.is_validation());
    }
}
