use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("GEMINI_API_KEY not set")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Gemini error: {0}")]
    Gemini(String),

    #[error("Gemini returned no text")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, AiError>;
