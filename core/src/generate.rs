//! Client for the remote image-generation and image-edit service, plus the
//! prompt construction that feeds it.
//!
//! The service speaks JSON: `POST {base}/images/generate/` takes a free-text
//! prompt and an output size, `POST {base}/images/edit/` takes a prompt and a
//! base64 photo payload. Both answer with `{image: {base64Data, mimeType}}`.
//! Responses are validated before use — a non-2xx status or a missing/empty
//! payload field is a typed error, never an assumed-well-formed value.

use std::path::Path;
use std::time::Duration;

use base64::Engine;
use chronolens_types::TravelKind;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::era;

/// Default service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://toolkit.rork.com";

const USER_AGENT: &str = "ChronoLens v0.1.0";

/// All requests share one explicit timeout; the service can take a while to
/// render but must not hang a generation spinner forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Output size requested for landmark generations.
const OUTPUT_SIZE: &str = "1024x1024";

/// Errors from the image service client
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to build HTTP client")]
    BuildClient(#[source] reqwest::Error),

    #[error("image request failed")]
    Request(#[from] reqwest::Error),

    #[error("image service returned status {status}")]
    Status { status: StatusCode },

    #[error("malformed image response: {reason}")]
    MalformedResponse { reason: &'static str },
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire Types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    size: &'a str,
}

#[derive(Serialize)]
struct EditRequest<'a> {
    prompt: &'a str,
    images: Vec<EditImage<'a>>,
}

#[derive(Serialize)]
struct EditImage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    image: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    image: ImagePayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImagePayload {
    #[serde(default)]
    base64_data: String,
    #[serde(default)]
    mime_type: String,
}

/// A validated image payload returned by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub base64_data: String,
}

impl GeneratedImage {
    /// Inline data URI for direct display and for persisting in a
    /// [`chronolens_types::TravelRecord`].
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_data)
    }
}

impl TryFrom<ImagePayload> for GeneratedImage {
    type Error = GenerateError;

    fn try_from(payload: ImagePayload) -> Result<Self, GenerateError> {
        if payload.base64_data.is_empty() {
            return Err(GenerateError::MalformedResponse { reason: "empty image payload" });
        }
        if payload.mime_type.is_empty() {
            return Err(GenerateError::MalformedResponse { reason: "missing mime type" });
        }
        Ok(GeneratedImage {
            mime_type: payload.mime_type,
            base64_data: payload.base64_data,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the image service. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ImageClient {
    http: reqwest::Client,
    base_url: String,
}

impl ImageClient {
    pub fn new() -> Result<Self, GenerateError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, GenerateError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(GenerateError::BuildClient)?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Generate an image for a free-text prompt.
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenerateError> {
        let url = format!("{}/images/generate/", self.base_url);
        let request = GenerateRequest { prompt, size: OUTPUT_SIZE };

        let response = self.http.post(&url).json(&request).send().await?;
        Self::parse_response(response).await
    }

    /// Run a canned transformation over a base64-encoded photo.
    pub async fn edit(
        &self,
        prompt: &str,
        image_base64: &str,
    ) -> Result<GeneratedImage, GenerateError> {
        let url = format!("{}/images/edit/", self.base_url);
        let request = EditRequest {
            prompt,
            images: vec![EditImage { kind: "image", image: image_base64 }],
        };

        let response = self.http.post(&url).json(&request).send().await?;
        Self::parse_response(response).await
    }

    async fn parse_response(response: reqwest::Response) -> Result<GeneratedImage, GenerateError> {
        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Status { status });
        }

        let body: ImageResponse = response.json().await?;
        body.image.try_into()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Prompts
// ─────────────────────────────────────────────────────────────────────────────

/// Build the generation prompt for a landmark at a target year.
pub fn landmark_prompt(landmark_name: &str, year: i32, kind: TravelKind) -> String {
    match kind {
        TravelKind::Past => format!(
            "{landmark_name} in the year {year}, {} period, historically accurate \
             architecture and environment, photorealistic style",
            era::past_qualifier(year)
        ),
        TravelKind::Future => format!(
            "{landmark_name} in the year {year}, {}, futuristic architecture, advanced \
             technology, sustainable design, flying vehicles, holographic displays, \
             photorealistic sci-fi style",
            era::future_qualifier(year)
        ),
    }
}

/// The four canned photo transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Past,
    Future,
    Child,
    Elderly,
}

impl TransformKind {
    pub fn all() -> &'static [TransformKind] {
        &[
            TransformKind::Past,
            TransformKind::Future,
            TransformKind::Child,
            TransformKind::Elderly,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransformKind::Past => "Time Travel Back",
            TransformKind::Future => "Time Travel Forward",
            TransformKind::Child => "As a Child",
            TransformKind::Elderly => "As an Elder",
        }
    }

    /// Fixed transformation prompt sent to the edit endpoint.
    pub fn prompt(&self) -> &'static str {
        match self {
            TransformKind::Past => {
                "Transform this image to show how it looked 50-100 years ago. If it's a \
                 person, age them backwards to show their younger self. If it's a location, \
                 show historical architecture and vintage elements with sepia or old \
                 photography tones."
            }
            TransformKind::Future => {
                "Transform this image to show how it might look 50-100 years in the future. \
                 If it's a person, age them forward to show their elderly self. If it's a \
                 location, add futuristic architecture, advanced technology, and modern \
                 sustainable elements."
            }
            TransformKind::Child => {
                "Transform this person's image to show how they looked as a child (around \
                 5-10 years old). Maintain their facial features and characteristics but \
                 make them younger, smaller, with child-like proportions and innocent \
                 expressions."
            }
            TransformKind::Elderly => {
                "Transform this person's image to show how they will look as an elderly \
                 person (around 70-80 years old). Add natural aging effects like wrinkles, \
                 gray/white hair, age spots, and weathered skin while maintaining their \
                 core facial features."
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Photo helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Base64-encode raw photo bytes for the edit endpoint.
pub fn encode_photo(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Mime type guessed from a photo's file extension. Anything that is not
/// PNG is treated as JPEG.
pub fn photo_mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests;
