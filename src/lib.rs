//! Heuristic "is this really JavaScript?" detection and friendly diagnoses
//! for JavaScript parse and runtime failures.
//!
//! ```
//! use jsdoctor::{detect_language, format_runtime_error, Language};
//!
//! let result = detect_language("System.out.println(\"Hello\");");
//! assert_eq!(result.detected_language, Some(Language::Java));
//!
//! let diagnosis = format_runtime_error("TypeError: foo is not a function", None);
//! assert!(diagnosis.message.contains("foo"));
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod error_formatter;
pub mod patterns;
pub mod severity;
pub mod suggestions;

pub use config::JsDoctorConfig;
pub use detector::{detect_language, DetectionResult, Hint, LanguageDetector};
pub use error::{JsDoctorError, Result};
pub use error_formatter::{
    format_parse_error, format_runtime_error, format_runtime_failure, format_unsupported_error,
    ErrorCategory, ErrorFormatter, ExecutionError, FormattedError, Highlight,
};
pub use patterns::Language;
pub use severity::{error_severity, severity_for_category_name, Severity};
pub use suggestions::language_suggestion;
