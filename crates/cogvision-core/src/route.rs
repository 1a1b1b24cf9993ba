//! Vision API routes.
//!
//! `POST {endpoint}/vision/v2.0/ocr?language=..&detectOrientation=..` for OCR,
//! `POST {endpoint}/vision/v2.0/models/{domain}/analyze` for domain models.

use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

use crate::error::VisionError;

const API_PREFIX: &str = "/vision/v2.0";

/// Query parameters of the OCR route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrOptions {
    /// BCP-47 language code, `unk` lets the service auto-detect.
    pub language: String,
    pub detect_orientation: bool,
}

impl Default for OcrOptions {
    fn default() -> Self {
        Self {
            language: "unk".to_string(),
            detect_orientation: true,
        }
    }
}

/// Specialized recognition model selected by path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainModel {
    Celebrities,
    Landmarks,
    /// Any other model name the service supports.
    Other(String),
}

impl DomainModel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Celebrities => "celebrities",
            Self::Landmarks => "landmarks",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for DomainModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainModel {
    type Err = VisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(VisionError::config(format!("invalid domain model name '{}'", s)));
        }
        Ok(match name.to_ascii_lowercase().as_str() {
            "celebrities" => Self::Celebrities,
            "landmarks" => Self::Landmarks,
            _ => Self::Other(name.to_string()),
        })
    }
}

/// Which analysis to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Ocr(OcrOptions),
    DomainModel(DomainModel),
}

impl Route {
    /// OCR with auto-detected language and orientation detection.
    pub fn ocr() -> Self {
        Self::Ocr(OcrOptions::default())
    }

    pub fn domain(model: DomainModel) -> Self {
        Self::DomainModel(model)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Ocr(_) => format!("{}/ocr", API_PREFIX),
            Self::DomainModel(model) => format!("{}/models/{}/analyze", API_PREFIX, model),
        }
    }

    pub fn query(&self) -> Option<String> {
        match self {
            Self::Ocr(opts) => Some(
                form_urlencoded::Serializer::new(String::new())
                    .append_pair("language", &opts.language)
                    .append_pair("detectOrientation", &opts.detect_orientation.to_string())
                    .finish(),
            ),
            Self::DomainModel(_) => None,
        }
    }

    /// Full request URL for the given endpoint base.
    pub fn url(&self, endpoint: &str) -> String {
        let base = endpoint.trim_end_matches('/');
        match self.query() {
            Some(query) => format!("{}{}?{}", base, self.path(), query),
            None => format!("{}{}", base, self.path()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ocr(_) => f.write_str("ocr"),
            Self::DomainModel(model) => write!(f, "{} recognition", model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocr_url() {
        assert_eq!(
            Route::ocr().url("https://api.example.com"),
            "https://api.example.com/vision/v2.0/ocr?language=unk&detectOrientation=true"
        );
    }

    #[test]
    fn test_ocr_custom_options() {
        let route = Route::Ocr(OcrOptions {
            language: "en".to_string(),
            detect_orientation: false,
        });
        assert_eq!(route.query().as_deref(), Some("language=en&detectOrientation=false"));
    }

    #[test]
    fn test_ocr_language_is_encoded() {
        let route = Route::Ocr(OcrOptions {
            language: "zh#x".to_string(),
            detect_orientation: true,
        });
        let url = url::Url::parse(&route.url("https://api.example.com")).unwrap();
        assert_eq!(url.fragment(), None);
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("language".to_string(), "zh#x".to_string()),
                ("detectOrientation".to_string(), "true".to_string()),
            ]
        );

        let route = Route::Ocr(OcrOptions {
            language: "en&detectOrientation=false".to_string(),
            detect_orientation: true,
        });
        let url = url::Url::parse(&route.url("https://api.example.com")).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].1, "en&detectOrientation=false");
        assert_eq!(pairs[1], ("detectOrientation".to_string(), "true".to_string()));
    }

    #[test]
    fn test_domain_url() {
        assert_eq!(
            Route::domain(DomainModel::Celebrities).url("https://api.example.com/"),
            "https://api.example.com/vision/v2.0/models/celebrities/analyze"
        );
        assert_eq!(
            Route::domain(DomainModel::Landmarks).path(),
            "/vision/v2.0/models/landmarks/analyze"
        );
    }

    #[test]
    fn test_parse_domain_model() {
        assert_eq!("celebrities".parse::<DomainModel>().unwrap(), DomainModel::Celebrities);
        assert_eq!("Landmarks".parse::<DomainModel>().unwrap(), DomainModel::Landmarks);
        assert_eq!(
            "brands".parse::<DomainModel>().unwrap(),
            DomainModel::Other("brands".to_string())
        );
        assert!("../ocr".parse::<DomainModel>().is_err());
        assert!("".parse::<DomainModel>().is_err());
    }
}
