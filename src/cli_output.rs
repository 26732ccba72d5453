// Output for the jsdoctor CLI: colored for terminals, plain for pipes, JSON for tools
use colored::Colorize;
use jsdoctor::{error_severity, DetectionResult, FormattedError, Severity};
use serde::Serialize;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Colors and symbols
    Human,
    Json,
    /// No colors (for pipes/logs)
    Plain,
}

impl OutputMode {
    /// Auto-detect output mode based on environment
    pub fn auto() -> Self {
        if std::env::var("JSDOCTOR_JSON").is_ok() {
            Self::Json
        } else if !io::stdout().is_terminal() {
            Self::Plain
        } else {
            Self::Human
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            "plain" | "text" => Some(Self::Plain),
            _ => None,
        }
    }
}

pub struct OutputWriter {
    mode: OutputMode,
}

impl OutputWriter {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Print a section header
    pub fn section(&self, title: &str) {
        match self.mode {
            OutputMode::Human => {
                println!();
                println!("{}", title.cyan().bold());
                println!("{}", "═".repeat(title.chars().count()).cyan());
            }
            OutputMode::Plain => {
                println!();
                println!("{}", title);
                println!("{}", "=".repeat(title.chars().count()));
            }
            OutputMode::Json => {}
        }
    }

    /// Print a key-value table
    pub fn table(&self, rows: &[(&str, String)]) {
        let max_key_len = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        match self.mode {
            OutputMode::Human => {
                for (key, value) in rows {
                    println!("  {:width$} │ {}", key.yellow(), value, width = max_key_len);
                }
            }
            OutputMode::Plain => {
                for (key, value) in rows {
                    println!("  {:width$} : {}", key, value, width = max_key_len);
                }
            }
            OutputMode::Json => {}
        }
    }

    pub fn detection(&self, result: &DetectionResult) {
        if self.mode == OutputMode::Json {
            self.emit_json(result);
            return;
        }

        self.section("Language Detection");
        let verdict = match result.detected_language {
            Some(lang) => lang.display_name().to_string(),
            None => "JavaScript".to_string(),
        };
        self.table(&[
            ("verdict", verdict),
            ("confidence", format!("{:.0}%", result.confidence * 100.0)),
        ]);

        for hint in &result.hints {
            self.line(
                Severity::Warning,
                &format!("line {}: \"{}\" - {}", hint.line, hint.snippet, hint.description),
            );
        }
        if let Some(suggestion) = &result.suggestion {
            println!();
            println!("  {}", suggestion);
        }
    }

    pub fn diagnosis(&self, formatted: &FormattedError) {
        if self.mode == OutputMode::Json {
            self.emit_json(formatted);
            return;
        }

        let severity = error_severity(formatted.category);
        self.section(&formatted.title);
        self.line(severity, &formatted.message);

        let mut rows = vec![
            ("category", formatted.category.to_string()),
            ("severity", severity.to_string()),
        ];
        if let Some(line) = formatted.line {
            rows.push(("line", line.to_string()));
        }
        if let Some(column) = formatted.column {
            rows.push(("column", column.to_string()));
        }
        self.table(&rows);

        for highlight in &formatted.highlights {
            self.line(Severity::Info, &format!("line {}: {}", highlight.line, highlight.message));
        }
        if let Some(suggestion) = &formatted.suggestion {
            println!();
            println!("  {}", suggestion);
        }
    }

    pub fn severity(&self, severity: Severity) {
        match self.mode {
            OutputMode::Json => self.emit_json(&severity),
            _ => self.line(severity, severity.as_str()),
        }
    }

    fn line(&self, severity: Severity, message: &str) {
        match (self.mode, severity) {
            (OutputMode::Human, Severity::Error) => println!("  {} {}", "✗".red(), message),
            (OutputMode::Human, Severity::Warning) => println!("  {} {}", "⚠".yellow(), message),
            (OutputMode::Human, Severity::Info) => println!("  {} {}", "ℹ".blue(), message),
            (OutputMode::Plain, _) => {
                println!("  [{}] {}", severity.as_str().to_uppercase(), message)
            }
            (OutputMode::Json, _) => {}
        }
    }

    fn emit_json<T: Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }
}
