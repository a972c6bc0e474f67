use serde::{Deserialize, Serialize};
use thiserror::Error;

mod normalize;
pub mod shell;
mod variations;
pub mod web;

pub use normalize::{REPLACEMENTS, replace_terms};
pub use variations::{
    Variation, VariationKind, filter_stopwords, generate_abbreviations, generate_variations,
    initials, is_stopword,
};

#[derive(Debug, Error)]
pub enum AbbrevError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AbbrevError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Echoed term followed by a bulleted list
    #[default]
    Text,
    /// Pretty-printed JSON response
    Json,
}

/// One submission of the input form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TermRequest {
    #[serde(default)]
    pub term: String,
}

impl TermRequest {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    /// A blank submission does nothing.
    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermResponse {
    pub original: String,
    pub normalized: String,
    pub variations: Vec<Variation>,
}

impl TermResponse {
    pub fn abbreviations(&self) -> Vec<&str> {
        self.variations.iter().map(|v| v.text.as_str()).collect()
    }
}

/// Answer a submission, or `None` when there is nothing to answer.
pub fn respond(request: &TermRequest) -> Option<TermResponse> {
    if request.is_empty() {
        return None;
    }

    let variations = generate_variations(&request.term);
    let normalized = variations
        .first()
        .map(|v| v.text.clone())
        .unwrap_or_default();

    Some(TermResponse {
        original: request.term.clone(),
        normalized,
        variations,
    })
}

pub fn render_text(response: &TermResponse) -> String {
    let mut text = format!("Original term: {}\n", response.original);
    text.push_str("Generated abbreviations/variations:\n");
    for variation in &response.variations {
        text.push_str(&format!("- {}\n", variation));
    }
    text
}

pub fn render(response: &TermResponse, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(response)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(response)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` or `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
