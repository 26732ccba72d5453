// Language detector - is this source text plausibly JavaScript, or something else?
use crate::config::{JsDoctorConfig, MAX_HINTS};
use crate::patterns::{Language, JAVASCRIPT_CONFIRMERS, JS_COMMENT, LANGUAGE_PATTERNS};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{debug, warn};

const CONFIRMER_STEP: f64 = 0.2;
/// JS evidence alone never reaches certainty.
const CONFIRMER_CAP: f64 = 0.8;
/// Below this absolute score non-JS evidence is never enough to flag a mismatch.
const MISMATCH_FLOOR: f64 = 0.5;
const SNIPPET_CHARS: usize = 50;

/// A located match that points at a particular language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub snippet: String,
    pub language: Language,
    pub description: String,
    /// 1-based
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub is_likely_java_script: bool,
    /// `None` exactly when `is_likely_java_script` is true
    pub detected_language: Option<Language>,
    pub confidence: f64,
    pub hints: Vec<Hint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl DetectionResult {
    fn javascript(confidence: f64) -> Self {
        Self {
            is_likely_java_script: true,
            detected_language: None,
            confidence,
            hints: Vec::new(),
            suggestion: None,
        }
    }

    /// Hints rendered one per line as `Line N: "snippet" - description`
    pub fn render_hints(&self) -> String {
        self.hints
            .iter()
            .map(|h| format!("Line {}: \"{}\" - {}", h.line, h.snippet, h.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub struct LanguageDetector {
    max_input_bytes: usize,
    max_hints: usize,
}

impl LanguageDetector {
    pub fn new() -> Self {
        Self::with_config(&JsDoctorConfig::default())
    }

    pub fn with_config(config: &JsDoctorConfig) -> Self {
        Self {
            max_input_bytes: config.max_input_bytes.max(1),
            max_hints: config.max_hints.min(MAX_HINTS),
        }
    }

    /// Score `source` against the pattern catalog and pick at most one
    /// non-JavaScript language.
    pub fn detect(&self, source: &str) -> DetectionResult {
        if source.trim().is_empty() {
            return DetectionResult::javascript(1.0);
        }

        let code = self.bounded(source);

        let js_matches = JAVASCRIPT_CONFIRMERS
            .iter()
            .filter(|r| r.is_match(code))
            .count();
        let js_confidence = (js_matches as f64 * CONFIRMER_STEP).min(CONFIRMER_CAP);

        // Insertion-ordered so equal scores go to the language scored first
        let mut scores: Vec<(Language, f64)> = Vec::new();
        let mut hints = Vec::new();
        // Prose rules must not fire on a program's own comments
        let prose = strip_comments(code);

        for pattern in LANGUAGE_PATTERNS.iter() {
            let haystack: &str = match pattern.language {
                Language::Text => &prose,
                _ => code,
            };
            let Some(m) = pattern.regex.find(haystack) else {
                continue;
            };

            match scores.iter_mut().find(|(lang, _)| *lang == pattern.language) {
                Some((_, score)) => *score += pattern.weight,
                None => scores.push((pattern.language, pattern.weight)),
            }

            hints.push(Hint {
                snippet: snippet(m.as_str()),
                language: pattern.language,
                description: pattern.description.to_string(),
                line: line_number(haystack, m.start()),
            });
        }

        let mut best: Option<(Language, f64)> = None;
        for &(lang, score) in &scores {
            if best.map_or(true, |(_, max)| score > max) {
                best = Some((lang, score));
            }
        }

        let max_score = best.map(|(_, score)| score).unwrap_or(0.0);
        let non_js_confidence = (max_score / 2.0).min(1.0);
        let is_likely_js = js_confidence > non_js_confidence || max_score < MISMATCH_FLOOR;

        debug!(
            "Detection: best={:?} max_score={:.2} js_confidence={:.2} js={}",
            best.map(|(lang, _)| lang),
            max_score,
            js_confidence,
            is_likely_js
        );

        match best {
            Some((language, _)) if !is_likely_js => {
                hints.retain(|h| h.language == language);
                // Stable, so hints on the same line keep catalog order
                hints.sort_by_key(|h| h.line);
                hints.truncate(self.max_hints);

                DetectionResult {
                    is_likely_java_script: false,
                    detected_language: Some(language),
                    confidence: non_js_confidence,
                    hints,
                    suggestion: Some(language.suggestion().to_string()),
                }
            }
            _ => DetectionResult::javascript(js_confidence.max(1.0 - non_js_confidence)),
        }
    }

    fn bounded<'a>(&self, source: &'a str) -> &'a str {
        if source.len() <= self.max_input_bytes {
            return source;
        }

        let mut end = self.max_input_bytes;
        while !source.is_char_boundary(end) {
            end -= 1;
        }
        warn!(
            "Source is {} bytes, only scanning the first {}",
            source.len(),
            end
        );
        &source[..end]
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify `source` with the default configuration.
pub fn detect_language(source: &str) -> DetectionResult {
    LanguageDetector::new().detect(source)
}

fn snippet(matched: &str) -> String {
    let trimmed = matched.trim();
    if trimmed.chars().count() > SNIPPET_CHARS {
        let head: String = trimmed.chars().take(SNIPPET_CHARS).collect();
        format!("{}...", head)
    } else {
        trimmed.to_string()
    }
}

/// Replace each comment with a space, keeping its newlines so line numbers hold.
fn strip_comments(code: &str) -> Cow<'_, str> {
    if !code.contains("//") && !code.contains("/*") {
        return Cow::Borrowed(code);
    }

    JS_COMMENT.replace_all(code, |caps: &regex::Captures<'_>| {
        let newlines = caps[0].matches('\n').count();
        format!(" {}", "\n".repeat(newlines))
    })
}

fn line_number(code: &str, offset: usize) -> usize {
    code[..offset].matches('\n').count() + 1
}
