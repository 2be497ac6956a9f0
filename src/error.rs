use thiserror::Error;

/// Custom error types for glossa
#[derive(Debug, Error)]
pub enum GlossaError {
    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    #[error("Unsupported language code '{0}'. Supported: vi, en, lo")]
    UnsupportedLanguage(String),

    #[error("Session data is corrupted: {0}")]
    CorruptedSession(String),

    #[error("Could not save session to {path}: {message}")]
    SessionWrite { path: String, message: String },

    #[error("HTTP client could not be built: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
