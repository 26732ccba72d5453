// Severity mapper - coarse UI tier for each error category
use crate::error_formatter::ErrorCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks execution
    Error,
    /// Advisory
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn error_severity(category: ErrorCategory) -> Severity {
    match category {
        ErrorCategory::Syntax | ErrorCategory::Runtime => Severity::Error,
        ErrorCategory::Language | ErrorCategory::Unsupported => Severity::Warning,
        ErrorCategory::Limit => Severity::Info,
    }
}

/// Severity for a category given by name; unknown names are treated as errors.
pub fn severity_for_category_name(name: &str) -> Severity {
    name.parse::<ErrorCategory>()
        .map(error_severity)
        .unwrap_or(Severity::Error)
}
