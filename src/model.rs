use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    #[error("model API returned an error: {status}")]
    Api { status: u16 },

    #[error("malformed model reply: {0}")]
    Malformed(String),

    #[error("GOOGLE_API_KEY environment variable not set")]
    MissingApiKey,
}

/// A handle to a generative language model: one prompt in, one raw reply out.
///
/// The reply is free-form text; callers own any structure they read into it.
/// Implementations may block for as long as the remote service takes — a
/// caller that needs bounded latency wraps `invoke` itself.
pub trait LanguageModel {
    fn invoke(&self, prompt: &str) -> Result<String, ModelError>;
}
