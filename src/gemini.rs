use serde_json::{json, Value};

use crate::model::{LanguageModel, ModelError};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TEMPERATURE: f64 = 0.8;

/// Blocking client for the Google Generative Language API.
pub struct GeminiClient {
    api_key: String,

    /// model identifier, e.g. "gemini-1.5-flash"
    pub model: String,

    /// sampling temperature forwarded to the API
    pub temperature: f64,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Builds a client from the GOOGLE_API_KEY environment variable.
    pub fn from_env() -> Result<Self, ModelError> {
        let api_key = std::env::var("GOOGLE_API_KEY").map_err(|_| ModelError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }
}

impl LanguageModel for GeminiClient {
    fn invoke(&self, prompt: &str) -> Result<String, ModelError> {
        let url = format!(
            "{}{}:generateContent?key={}",
            BASE_URL, self.model, self.api_key
        );
        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": self.temperature }
        });

        let response = ureq::post(&url)
            .set("Content-Type", "application/json")
            .send_json(payload)
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => ModelError::Api { status: code },
                other => ModelError::Http(other),
            })?;

        let body: Value = response.into_json()?;
        let reply = extract_reply_text(&body)?;
        log::debug!("{} replied with {} bytes", self.model, reply.len());

        return Ok(reply);
    }
}

// The API may split the reply across several parts; they are concatenated in
// order. An empty text part is passed through, not treated as malformed.
fn extract_reply_text(body: &Value) -> Result<String, ModelError> {
    let parts = body
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| ModelError::Malformed("no candidates in reply".to_string()))?;

    let mut found_text = false;
    let mut reply = String::new();
    for part in parts {
        if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
            found_text = true;
            reply.push_str(text);
        }
    }

    if !found_text {
        return Err(ModelError::Malformed(
            "no text in reply candidates".to_string(),
        ));
    }

    Ok(reply)
}
