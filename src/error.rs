// Error type for the fallible edges of the crate (config I/O, name parsing).
// Diagnosis itself never fails; see error_formatter.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsDoctorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("Unknown error category: {0}. Supported: syntax, language, runtime, unsupported, limit")]
    UnknownCategory(String),
    #[error("Unknown language: {0}. Supported: python, java, cpp, go, ruby, text")]
    UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, JsDoctorError>;
