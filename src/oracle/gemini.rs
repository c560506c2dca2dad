use std::time::Duration;

use serde_json::{Value, json};

use crate::foundation::core::Complexity;
use crate::foundation::error::{StudioError, StudioResult};
use crate::oracle::PathOracle;
use crate::source::SourceImage;

/// Settings of the hosted generative model used as path oracle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Model name.
    pub model: String,
    /// API base URL, without trailing slash.
    pub endpoint: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Sampling temperature; low values give cleaner paths.
    pub temperature: f64,
    /// Nucleus sampling cutoff.
    pub top_p: f64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_owned(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_owned(),
            api_key_env: "API_KEY".to_owned(),
            temperature: 0.2,
            top_p: 0.8,
            timeout_secs: 120,
        }
    }
}

impl OracleConfig {
    /// Check sampling parameters and timeout.
    pub fn validate(&self) -> StudioResult<()> {
        if self.model.trim().is_empty() {
            return Err(StudioError::validation("oracle model must not be empty"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(StudioError::validation(format!(
                "oracle temperature must be in [0, 2], got {}",
                self.temperature
            )));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(StudioError::validation(format!(
                "oracle top_p must be in [0, 1], got {}",
                self.top_p
            )));
        }
        if self.timeout_secs == 0 {
            return Err(StudioError::validation("oracle timeout must be > 0"));
        }
        Ok(())
    }
}

/// Path oracle backed by the Gemini `generateContent` REST API.
pub struct GeminiOracle {
    cfg: OracleConfig,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl GeminiOracle {
    /// Create an oracle with an explicit API key.
    pub fn new(cfg: OracleConfig, api_key: impl Into<String>) -> StudioResult<Self> {
        cfg.validate()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| StudioError::transport(format!("build http client: {e}")))?;
        Ok(Self {
            cfg,
            api_key: api_key.into(),
            client,
        })
    }

    /// Create an oracle reading the API key from `cfg.api_key_env`.
    pub fn from_env(cfg: OracleConfig) -> StudioResult<Self> {
        let key = std::env::var(&cfg.api_key_env).map_err(|_| {
            StudioError::validation(format!(
                "environment variable {} is not set",
                cfg.api_key_env
            ))
        })?;
        Self::new(cfg, key)
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.cfg.endpoint.trim_end_matches('/'),
            self.cfg.model
        )
    }
}

impl PathOracle for GeminiOracle {
    #[tracing::instrument(skip(self, image), fields(model = %self.cfg.model))]
    fn generate(&self, image: &SourceImage, complexity: Complexity) -> StudioResult<String> {
        let body = request_body(&self.cfg, image, complexity);
        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| StudioError::transport(format!("oracle request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().unwrap_or_default();
            tracing::warn!(%status, "oracle returned an error status");
            return Err(StudioError::transport(format!(
                "oracle returned {status}: {}",
                detail.chars().take(200).collect::<String>()
            )));
        }

        let payload: Value = resp
            .json()
            .map_err(|e| StudioError::transport(format!("oracle response is not json: {e}")))?;
        extract_text(&payload)
    }
}

/// Instructions sent alongside the image.
pub fn complexity_prompt(complexity: Complexity) -> String {
    let level = complexity.get();
    format!(
        "TASK: Convert the main subject of the provided image into ONE SINGLE CONTINUOUS SVG PATH.\n\
         \n\
         ARTISTIC COMPLEXITY: Level {level} out of 10.\n\
         \n\
         LEVEL SPECIFIC RULES:\n\
         - Level 1: Extreme minimalism. Only the most basic outer silhouette. Use very few points.\n\
         - Level 5: Balanced artistic line. Captures the silhouette and the most important internal features with flowing curves.\n\
         - Level 10: Hyper-detailed masterpiece. Use an extremely long, intricate path that winds back and forth. \
         Use dense scribbling, loops, and micro-zigzags to simulate shading, fine textures, and every subtle detail of the original subject. \
         It should look like a complex professional ink drawing made with one continuous stroke.\n\
         \n\
         TECHNICAL CONSTRAINTS:\n\
         1. Output ONLY the raw 'd' attribute string (no tags, no quotes).\n\
         2. The path MUST be 100% continuous. Use 'M' only once at the beginning.\n\
         3. Coordinate system: 0 to 1000.\n\
         4. Provide no explanation or markdown. Just the path data.\n"
    )
}

pub(crate) fn request_body(cfg: &OracleConfig, image: &SourceImage, complexity: Complexity) -> Value {
    json!({
        "contents": [{
            "parts": [
                {
                    "inlineData": {
                        "mimeType": image.mime_type(),
                        "data": image.to_base64(),
                    }
                },
                { "text": complexity_prompt(complexity) }
            ]
        }],
        "generationConfig": {
            "temperature": cfg.temperature,
            "topP": cfg.top_p,
        }
    })
}

/// Concatenate the text parts of the first candidate.
pub(crate) fn extract_text(payload: &Value) -> StudioResult<String> {
    if let Some(reason) = payload
        .pointer("/promptFeedback/blockReason")
        .and_then(Value::as_str)
    {
        return Err(StudioError::synthesis(format!("prompt blocked: {reason}")));
    }

    let parts = payload
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
        .ok_or_else(|| StudioError::synthesis("oracle response has no candidates"))?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();
    let text = text.trim();
    if text.is_empty() {
        return Err(StudioError::synthesis("oracle response has no text"));
    }
    Ok(text.to_owned())
}

#[cfg(test)]
#[path = "../../tests/unit/oracle/gemini.rs"]
mod tests;
