//! # Analysis Client
//!
//! Talks to the external video-analysis service. Nothing here goes through the
//! store: a UI calls the client directly and shows the outcome.
//!
//! ## Endpoints
//!
//! - `POST {api_base}/analyze/video/{template_id}`: multipart body, field
//!   `video` holding the file. 2xx answers with an [`AnalysisResult`]; any other
//!   status answers with `{"detail": "..."}`, surfaced as
//!   [`TalentError::Remote`].
//! - `GET {api_base}/templates`: reference templates to analyze against.
//!   Failure or an empty answer is recovered with [`fallback_templates`].
//!
//! Every call is one best-effort round trip. There is no retry, no timeout
//! and no cancellation; overlapping calls resolve independently.

use crate::config::TalentConfig;
use crate::error::{Result, TalentError, GENERIC_ANALYSIS_FAILURE};
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

/// Successful analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub session_id: String,
    /// Percentage, 0-100.
    pub overall_similarity: f64,
    pub total_frames: u64,
    /// Seconds.
    pub analysis_duration: f64,
    pub recommendations: Vec<String>,
    /// Any further fields the service sends.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// A reference template offered by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TemplateSummary {
    fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
        }
    }
}

/// Templates offered when the service cannot be reached or lists none.
pub fn fallback_templates() -> Vec<TemplateSummary> {
    vec![
        TemplateSummary::new("TEMPLATE-001", "Standard Squat", "Squat reference template"),
        TemplateSummary::new("TEMPLATE-002", "Push-Up", "Push-up reference"),
        TemplateSummary::new("TEMPLATE-003", "Vertical Jump", "Jump test"),
    ]
}

/// Parse the `/templates` body.
///
/// `templates` may be an object keyed by id (a missing name falls back to the
/// id) or an array of objects (a missing name falls back to `Template`).
fn parse_templates(body: &Value) -> Vec<TemplateSummary> {
    let text = |v: &Value, key: &str| v.get(key).and_then(Value::as_str).map(str::to_string);

    match body.get("templates") {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(id, t)| TemplateSummary {
                id: id.clone(),
                name: text(t, "name").unwrap_or_else(|| id.clone()),
                description: text(t, "description"),
            })
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|t| TemplateSummary {
                id: text(t, "id").unwrap_or_default(),
                name: text(t, "name").unwrap_or_else(|| "Template".to_string()),
                description: text(t, "description"),
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// A video file ready for upload.
#[derive(Debug, Clone)]
pub struct VideoUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl VideoUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a local file, refusing anything whose extension is not a video type.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content_type = video_mime(path).ok_or_else(|| {
            TalentError::Validation(format!("Not a video file: {}", path.display()))
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video".to_string());
        let bytes = std::fs::read(path)?;
        Ok(Self::new(file_name, content_type, bytes))
    }
}

fn video_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "mp4" => "video/mp4",
        "m4v" => "video/x-m4v",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "ogv" => "video/ogg",
        _ => return None,
    };
    Some(mime)
}

/// HTTP client for the analysis service.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    base: String,
    http: reqwest::Client,
}

impl AnalysisClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            base: api_base.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &TalentConfig) -> Self {
        Self::new(config.api_base())
    }

    pub fn api_base(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base)
            .map_err(|e| TalentError::Config(format!("Invalid API base '{}': {}", self.base, e)))?;
        url.path_segments_mut()
            .map_err(|_| TalentError::Config(format!("Invalid API base '{}'", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Upload `video` for comparison against `template_id`.
    pub async fn analyze(&self, template_id: &str, video: VideoUpload) -> Result<AnalysisResult> {
        if template_id.trim().is_empty() {
            return Err(TalentError::Validation(
                "Select a template to analyze against".to_string(),
            ));
        }
        if video.bytes.is_empty() {
            return Err(TalentError::Validation("Video file is empty".to_string()));
        }

        let url = self.endpoint(&["analyze", "video", template_id])?;
        debug!(%url, file = %video.file_name, size = video.bytes.len(), "uploading video");

        let part = Part::bytes(video.bytes)
            .file_name(video.file_name)
            .mime_str(&video.content_type)?;
        let form = Form::new().part("video", part);

        let response = self.http.post(url).multipart(form).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or_else(|| GENERIC_ANALYSIS_FAILURE.to_string());
            warn!(%status, %message, "analysis rejected");
            return Err(TalentError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        let result: AnalysisResult = serde_json::from_slice(&body)?;
        info!(
            session = %result.session_id,
            similarity = result.overall_similarity,
            "analysis complete"
        );
        Ok(result)
    }

    /// Fetch the service's template list.
    pub async fn fetch_templates(&self) -> Result<Vec<TemplateSummary>> {
        let url = self.endpoint(&["templates"])?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TalentError::Remote {
                status: status.as_u16(),
                message: format!("Template listing failed with {}", status),
            });
        }
        let body: Value = response.json().await?;
        Ok(parse_templates(&body))
    }

    /// [`fetch_templates`](Self::fetch_templates), substituting
    /// [`fallback_templates`] on failure or an empty answer.
    pub async fn templates_or_fallback(&self) -> Vec<TemplateSummary> {
        match self.fetch_templates().await {
            Ok(templates) if !templates.is_empty() => templates,
            Ok(_) => {
                warn!(base = %self.base, "service listed no templates, using samples");
                fallback_templates()
            }
            Err(err) => {
                warn!(base = %self.base, error = %err, "could not fetch templates, using samples");
                fallback_templates()
            }
        }
    }
}
