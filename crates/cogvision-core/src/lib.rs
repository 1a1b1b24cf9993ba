//! CogVision Core Library
//!
//! Client for the Computer Vision OCR and domain-specific recognition
//! endpoints. Images go up either as raw bytes or as a remote URL; the
//! response comes back as an untyped JSON document.

pub mod client;
pub mod config;
pub mod error;
pub mod image;
pub mod render;
pub mod route;

pub use client::VisionClient;
pub use config::VisionConfig;
pub use error::{ErrorKind, VisionError, VisionResult};
pub use image::ImageSource;
pub use route::{DomainModel, OcrOptions, Route};
