// Error formatter - turns raw parser/interpreter failures into friendly diagnoses
//
// Every entry point here is total: whatever the input, the caller gets back a
// renderable FormattedError. Rule catalogs are first-match, so specific
// signatures must stay above generic ones.
use crate::config::JsDoctorConfig;
use crate::detector::{DetectionResult, LanguageDetector};
use crate::error::JsDoctorError;
use crate::patterns::Language;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Malformed JavaScript
    Syntax,
    /// Valid code, wrong language
    Language,
    /// Parses fine, fails while running
    Runtime,
    /// Valid JavaScript the sandbox can't fully emulate
    Unsupported,
    /// Stopped by a step-count or call-depth bound
    Limit,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Syntax => "syntax",
            ErrorCategory::Language => "language",
            ErrorCategory::Runtime => "runtime",
            ErrorCategory::Unsupported => "unsupported",
            ErrorCategory::Limit => "limit",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCategory {
    type Err = JsDoctorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "syntax" => Ok(ErrorCategory::Syntax),
            "language" => Ok(ErrorCategory::Language),
            "runtime" => Ok(ErrorCategory::Runtime),
            "unsupported" => Ok(ErrorCategory::Unsupported),
            "limit" => Ok(ErrorCategory::Limit),
            _ => Err(JsDoctorError::UnknownCategory(s.to_string())),
        }
    }
}

/// Failure reported by the external parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub line: usize,
    pub message: String,
}

/// The one render-ready shape every diagnosis path converges to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedError {
    pub category: ErrorCategory,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<Highlight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_error: Option<String>,
}

impl FormattedError {
    fn new(category: ErrorCategory, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category,
            title: title.into(),
            message: message.into(),
            suggestion: None,
            line: None,
            column: None,
            highlights: Vec::new(),
            original_error: None,
        }
    }

    fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Location {
    line: Option<usize>,
    column: Option<usize>,
}

impl Location {
    fn phrase(&self) -> String {
        match (self.line, self.column) {
            (Some(line), Some(column)) => format!(" on line {}, column {}", line, column),
            (Some(line), None) => format!(" on line {}", line),
            _ => String::new(),
        }
    }
}

enum SuggestionText {
    Fixed(&'static str),
    Computed(fn(&Captures<'_>) -> String),
}

struct SyntaxRule {
    regex: Regex,
    title: &'static str,
    message: fn(&Captures<'_>, Location) -> String,
    suggestion: SuggestionText,
}

fn syntax_rule(
    pattern: &str,
    title: &'static str,
    message: fn(&Captures<'_>, Location) -> String,
    suggestion: SuggestionText,
) -> SyntaxRule {
    SyntaxRule {
        regex: Regex::new(pattern).unwrap(),
        title,
        message,
        suggestion,
    }
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn is_smart_quote(c: &str) -> bool {
    matches!(c, "\u{2018}" | "\u{2019}" | "\u{201C}" | "\u{201D}")
}

lazy_static! {
    static ref SYNTAX_RULES: Vec<SyntaxRule> = {
        use SuggestionText::*;
        vec![
            syntax_rule(
                r"(?i)unterminated string",
                "Unclosed string",
                |_, loc| format!("A string{} is missing its closing quote.", loc.phrase()),
                Fixed("Close the string with the same quote it starts with. Use backticks (`) if the text spans several lines."),
            ),
            syntax_rule(
                r"(?i)unterminated template",
                "Unclosed template literal",
                |_, loc| format!("A template literal{} is missing its closing backtick.", loc.phrase()),
                Fixed("Add a closing backtick (`) at the end of the template literal."),
            ),
            syntax_rule(
                r"(?i)unterminated (?:regular expression|regexp)",
                "Unclosed regular expression",
                |_, loc| format!("A regular expression{} is missing its closing slash.", loc.phrase()),
                Fixed("End the regular expression with `/`. If you meant to divide, put spaces around the `/`."),
            ),
            syntax_rule(
                r"(?i)unterminated comment",
                "Unclosed comment",
                |_, loc| format!("A block comment{} is never closed.", loc.phrase()),
                Fixed("Close block comments with `*/`, or use `//` for single-line comments."),
            ),
            syntax_rule(
                r"(?i)unexpected end of (?:input|file)|unexpected token \(?'?eof'?\)?|unexpected eof",
                "Unexpected end of code",
                |_, loc| format!("Your code ended before a statement was finished{}.", loc.phrase()),
                Fixed("Check that every `(`, `{` and `[` has a matching closing bracket."),
            ),
            syntax_rule(
                r"Identifier '([^']+)' has already been declared",
                "Duplicate declaration",
                |caps, loc| format!("`{}` is declared more than once{}.", group(caps, 1), loc.phrase()),
                Computed(|caps| {
                    let name = group(caps, 1);
                    format!(
                        "Rename one of the `{0}` variables, or drop `let`/`const` to reassign the existing `{0}`.",
                        name
                    )
                }),
            ),
            syntax_rule(
                r"'return' outside of function|Illegal return statement",
                "return outside a function",
                |_, loc| format!("A `return` statement{} is not inside a function.", loc.phrase()),
                Fixed("Only use `return` inside a function body. At the top level, use `console.log()` to show a value."),
            ),
            syntax_rule(
                r"Unexpected keyword '([^']+)'",
                "Unexpected keyword",
                |caps, loc| format!("The keyword `{}` can't be used here{}.", group(caps, 1), loc.phrase()),
                Computed(|caps| {
                    format!(
                        "`{}` is a reserved JavaScript keyword. Check the statement around it, or rename any variable that uses it.",
                        group(caps, 1)
                    )
                }),
            ),
            syntax_rule(
                r"The keyword '([^']+)' is reserved|Unexpected (?:strict mode )?reserved word",
                "Reserved word",
                |caps, loc| match caps.get(1) {
                    Some(word) => format!("`{}` is a reserved word and can't be used as a name{}.", word.as_str(), loc.phrase()),
                    None => format!("A reserved word is used as a name{}.", loc.phrase()),
                },
                Fixed("Pick a different variable or function name."),
            ),
            syntax_rule(
                r"Assigning to rvalue|Invalid left-hand side",
                "Invalid assignment",
                |_, loc| format!("Something that can't hold a value is being assigned to{}.", loc.phrase()),
                Fixed("To compare two values use `===`. A single `=` assigns, and needs a variable on its left."),
            ),
            syntax_rule(
                r"(?i)missing semicolon",
                "Missing semicolon",
                |_, loc| format!("Two statements run together{}.", loc.phrase()),
                Fixed("Put each statement on its own line, or separate them with `;`."),
            ),
            syntax_rule(
                r"(?i)invalid regular expression",
                "Invalid regular expression",
                |_, loc| format!("A regular expression{} is not valid.", loc.phrase()),
                Fixed("Check the regular expression for unbalanced brackets or an unknown flag."),
            ),
            syntax_rule(
                r"(?i)invalid number|identifier directly after number|invalid or unexpected number",
                "Invalid number",
                |_, loc| format!("A number{} is written in a way JavaScript can't read.", loc.phrase()),
                Fixed("Variable names can't start with a digit, and numbers use `.` (not `,`) for decimals."),
            ),
            syntax_rule(
                r"Unexpected character '(.)'",
                "Unexpected character",
                |caps, loc| format!("The character `{}` isn't valid JavaScript here{}.", group(caps, 1), loc.phrase()),
                Computed(|caps| {
                    let c = group(caps, 1);
                    if is_smart_quote(c) {
                        "This is a curly \"smart\" quote, often pasted from a word processor. Replace it with a straight quote (' or \").".to_string()
                    } else {
                        format!("Remove `{}`, or check that it belongs inside a string or comment.", c)
                    }
                }),
            ),
            syntax_rule(
                r"Unexpected token(?:\s+'?([^'\s(]+)'?)?",
                "Unexpected token",
                |caps, loc| match caps.get(1) {
                    Some(token) => format!("JavaScript didn't expect `{}`{}.", token.as_str(), loc.phrase()),
                    None => format!("JavaScript found something it didn't expect{}.", loc.phrase()),
                },
                Fixed("Look for a missing or extra bracket or comma just before this point."),
            ),
        ]
    };

    /// Acorn-style "(line:column)" suffix
    static ref TRAILING_LOCATION: Regex = Regex::new(r"\((\d+):(\d+)\)\s*$").unwrap();
    static ref NOT_A_FUNCTION: Regex = Regex::new(r"([\w$.\[\]]+) is not a function").unwrap();
    static ref READ_PROPERTY: Regex = Regex::new(r"(?:reading|property) '([^']+)'").unwrap();
}

pub struct ErrorFormatter {
    detector: LanguageDetector,
}

impl ErrorFormatter {
    pub fn new() -> Self {
        Self {
            detector: LanguageDetector::new(),
        }
    }

    pub fn with_config(config: &JsDoctorConfig) -> Self {
        Self {
            detector: LanguageDetector::with_config(config),
        }
    }

    /// Diagnose a parse failure. Wrong-language input is reported before
    /// any syntax signature is tried.
    pub fn format_parse_error(&self, error: &ExecutionError, source: &str) -> FormattedError {
        let detection = self.detector.detect(source);
        if let (false, Some(language)) = (detection.is_likely_java_script, detection.detected_language) {
            return language_mismatch(language, &detection);
        }

        let loc = parse_location(error);

        for rule in SYNTAX_RULES.iter() {
            let Some(caps) = rule.regex.captures(&error.message) else {
                continue;
            };

            debug!("Syntax signature matched: {}", rule.title);
            let suggestion = match &rule.suggestion {
                SuggestionText::Fixed(text) => text.to_string(),
                SuggestionText::Computed(build) => build(&caps),
            };

            let mut formatted = FormattedError::new(ErrorCategory::Syntax, rule.title, (rule.message)(&caps, loc))
                .with_suggestion(suggestion);
            formatted.line = loc.line;
            formatted.column = loc.column;
            formatted.original_error = Some(error.message.clone());
            return formatted;
        }

        let detail = error.message.trim();
        let message = match (loc.line, detail.is_empty()) {
            (Some(line), false) => format!("There is a syntax error on line {}: {}", line, detail),
            (Some(line), true) => format!("There is a syntax error on line {}.", line),
            (None, false) => format!("There is a syntax error in your code: {}", detail),
            (None, true) => "There is a syntax error in your code.".to_string(),
        };

        let mut formatted = FormattedError::new(ErrorCategory::Syntax, "Syntax error", message)
            .with_suggestion("Check for a missing bracket or quote near the reported line.");
        formatted.line = loc.line;
        formatted.column = loc.column;
        formatted.original_error = Some(error.message.clone());
        formatted
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn language_mismatch(language: Language, detection: &DetectionResult) -> FormattedError {
    let (title, message) = match language {
        Language::Text => (
            "This looks like plain text, not code".to_string(),
            "The input reads like English prose rather than JavaScript code.".to_string(),
        ),
        _ => (
            format!("This looks like {} code", language.display_name()),
            format!(
                "The code appears to be written in {}, but this tool only runs JavaScript.",
                language.display_name()
            ),
        ),
    };

    let mut formatted = FormattedError::new(ErrorCategory::Language, title, message);
    formatted.suggestion = detection.suggestion.clone();
    formatted.line = detection.hints.first().map(|h| h.line);
    formatted.highlights = detection
        .hints
        .iter()
        .map(|h| Highlight {
            line: h.line,
            message: h.description.clone(),
        })
        .collect();
    formatted.original_error = Some(detection.render_hints());
    formatted
}

/// Explicit positions win; otherwise fall back to a "(line:column)" suffix
fn parse_location(error: &ExecutionError) -> Location {
    let embedded = TRAILING_LOCATION.captures(&error.message).map(|caps| {
        (
            group(&caps, 1).parse::<usize>().ok(),
            group(&caps, 2).parse::<usize>().ok(),
        )
    });
    let (line, column) = embedded.unwrap_or((None, None));

    Location {
        line: error.line.or(line),
        column: error.column.or(column),
    }
}

/// Diagnose a parse failure with the default configuration.
pub fn format_parse_error(error: &ExecutionError, source: &str) -> FormattedError {
    ErrorFormatter::new().format_parse_error(error, source)
}

/// Diagnose a failure raised while the program was running.
pub fn format_runtime_error(message: &str, line: Option<usize>) -> FormattedError {
    let lower = message.to_lowercase();

    let mut formatted = if lower.contains("step limit")
        || lower.contains("maximum steps")
        || lower.contains("too many steps")
    {
        FormattedError::new(
            ErrorCategory::Limit,
            "Step limit reached",
            "Your program ran for too many steps and was stopped. This usually means a loop never ends.",
        )
        .with_suggestion(
            "Check for an infinite loop: make sure each loop's condition eventually becomes false, \
             for example that the counter actually changes.",
        )
    } else if lower.contains("call stack")
        || lower.contains("call depth")
        || lower.contains("too much recursion")
        || lower.contains("recursion limit")
    {
        FormattedError::new(
            ErrorCategory::Limit,
            "Too much recursion",
            "Functions called each other too many times and the program was stopped. \
             This usually means a function keeps calling itself forever.",
        )
        .with_suggestion(
            "Check for infinite recursion: make sure your recursive function has a base case that stops calling itself.",
        )
    } else if lower.contains("is not a function") {
        let name = NOT_A_FUNCTION
            .captures(message)
            .map(|caps| group(&caps, 1).to_string())
            .unwrap_or_else(|| "This value".to_string());
        FormattedError::new(
            ErrorCategory::Runtime,
            "Not a function",
            format!("`{}` is not a function, so it can't be called with ().", name),
        )
        .with_suggestion(format!(
            "Check the spelling of `{}` and make sure it holds a function before calling it.",
            name
        ))
    } else if lower.contains("cannot read") || lower.contains("undefined") {
        let message = match READ_PROPERTY.captures(message) {
            Some(caps) => format!(
                "Your code tried to read `{}` from a value that is `undefined` or `null`.",
                group(&caps, 1)
            ),
            None => "Your code tried to use a property of a value that is `undefined` or `null`.".to_string(),
        };
        FormattedError::new(ErrorCategory::Runtime, "Undefined value", message).with_suggestion(
            "Make sure the variable is assigned before you use it, and check the spelling of property names.",
        )
    } else {
        let text = if message.trim().is_empty() {
            "An unknown error occurred while running your code."
        } else {
            message
        };
        FormattedError::new(ErrorCategory::Runtime, "Runtime error", text)
    };

    formatted.line = line;
    formatted.original_error = Some(message.to_string());
    formatted
}

/// Same as [`format_runtime_error`] for an error value from the interpreter.
pub fn format_runtime_failure(error: &dyn std::error::Error, line: Option<usize>) -> FormattedError {
    format_runtime_error(&error.to_string(), line)
}

/// Guidance for a JavaScript feature the sandbox only partly emulates.
/// Names are matched case-insensitively.
pub fn format_unsupported_error(feature: &str) -> FormattedError {
    let name = feature.trim();

    let (title, message, suggestion) = match name.to_lowercase().as_str() {
        "settimeout" | "setinterval" | "timers" => (
            "Timers are simulated",
            "Code scheduled with setTimeout or setInterval runs without real delays here, so timing may differ from a browser.",
            "Call the function directly to follow each step, or use a loop for repeated work.",
        ),
        "promise" | "promises" => (
            "Promises are only partly supported",
            "Promise callbacks may not run in the same order as in a browser.",
            "Try writing the logic with plain function calls first, then add promises once it works.",
        ),
        "async" | "await" | "async/await" => (
            "async/await is only partly supported",
            "Asynchronous functions are stepped through as if they were synchronous.",
            "Write the function without async/await to see every step clearly.",
        ),
        "fetch" | "xmlhttprequest" => (
            "Network requests are not available",
            "This sandbox can't reach the network, so fetch and XMLHttpRequest calls won't return data.",
            "Replace the request with a hard-coded array or object holding sample data.",
        ),
        "import" | "require" | "modules" | "module" => (
            "Modules are not supported",
            "Code can't load other files or packages with import or require.",
            "Put all your code in a single file and define any helpers yourself.",
        ),
        "localstorage" | "sessionstorage" => (
            "Browser storage is not available",
            "localStorage and sessionStorage don't exist in this sandbox.",
            "Keep the data in a regular variable or object instead.",
        ),
        "document" | "window" | "dom" => (
            "The page (DOM) is not available",
            "There is no web page here, so document and window can't be used.",
            "Use `console.log()` to show results instead of changing the page.",
        ),
        "eval" => (
            "eval is not supported",
            "Running code from a string with eval isn't possible in this visualizer.",
            "Write the code directly instead of building it as a string.",
        ),
        _ => {
            let shown = if name.is_empty() { "This feature" } else { name };
            return FormattedError::new(
                ErrorCategory::Unsupported,
                format!("`{}` may not be supported", shown),
                format!("`{}` may not behave as expected in this visualizer.", shown),
            )
            .with_suggestion("If the result looks wrong, try rewriting that part without it.");
        }
    };

    FormattedError::new(ErrorCategory::Unsupported, title, message).with_suggestion(suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_mismatch_short_circuits() {
        let error = ExecutionError::new("Unexpected token (1:4)");
        let formatted = format_parse_error(&error, "def hello():\n  print('hi')");

        assert_eq!(formatted.category, ErrorCategory::Language);
        assert_eq!(formatted.title, "This looks like Python code");
        assert!(formatted.suggestion.is_some());
        assert_eq!(formatted.line, Some(1));
        assert_eq!(formatted.highlights.len(), 2);
        assert_eq!(formatted.highlights[0].message, "Python function definition (def ...:)");

        let original = formatted.original_error.unwrap();
        assert!(original.starts_with("Line 1: \"def hello():\" - Python function definition"));
        assert!(original.contains("\nLine 2: \"print(\" - Python print() call"));
    }

    #[test]
    fn test_plain_text_title() {
        let source = "I want to learn JavaScript. Can you help me write a program?";
        let formatted = format_parse_error(&ExecutionError::new("Unexpected token"), source);
        assert_eq!(formatted.category, ErrorCategory::Language);
        assert_eq!(formatted.title, "This looks like plain text, not code");
    }

    #[test]
    fn test_unterminated_string() {
        let error = ExecutionError::new("Unterminated string constant").at(3, 12);
        let formatted = format_parse_error(&error, "let s = 'oops;");

        assert_eq!(formatted.category, ErrorCategory::Syntax);
        assert_eq!(formatted.title, "Unclosed string");
        assert!(formatted.message.contains("on line 3, column 12"));
        assert_eq!(formatted.line, Some(3));
        assert_eq!(formatted.column, Some(12));
        assert_eq!(formatted.original_error.as_deref(), Some("Unterminated string constant"));
    }

    #[test]
    fn test_location_recovered_from_message() {
        let error = ExecutionError::new("Unexpected token (4:7)");
        let formatted = format_parse_error(&error, "let x = ;");

        assert_eq!(formatted.title, "Unexpected token");
        assert_eq!(formatted.line, Some(4));
        assert_eq!(formatted.column, Some(7));
        assert!(formatted.message.starts_with("JavaScript found something it didn't expect"));
    }

    #[test]
    fn test_explicit_location_wins() {
        let error = ExecutionError {
            message: "Unexpected token (4:7)".to_string(),
            line: Some(2),
            column: None,
        };
        let loc = parse_location(&error);
        assert_eq!(loc.line, Some(2));
        assert_eq!(loc.column, Some(7));
    }

    #[test]
    fn test_specific_rule_beats_generic() {
        // Both the EOF rule and the generic token rule match this message
        let error = ExecutionError::new("Unexpected token (EOF)");
        let formatted = format_parse_error(&error, "function f() {");
        assert_eq!(formatted.title, "Unexpected end of code");
    }

    #[test]
    fn test_quoted_eof_is_end_of_code() {
        for raw in ["Unexpected token 'EOF'", "Unexpected token (EOF)", "unexpected token eof"] {
            let formatted = format_parse_error(&ExecutionError::new(raw), "if (x) {");
            assert_eq!(formatted.title, "Unexpected end of code", "{}", raw);
        }
    }

    #[test]
    fn test_duplicate_declaration_names_identifier() {
        let error = ExecutionError::new("Identifier 'count' has already been declared").at(2, 4);
        let formatted = format_parse_error(&error, "let count = 1;\nlet count = 2;");

        assert_eq!(formatted.title, "Duplicate declaration");
        assert!(formatted.message.contains("`count`"));
        assert!(formatted.suggestion.unwrap().contains("`count`"));
    }

    #[test]
    fn test_smart_quote_suggestion() {
        let error = ExecutionError::new("Unexpected character '\u{201C}' (1:12)");
        let formatted = format_parse_error(&error, "console.log(\u{201C}hi\u{201D});");

        assert_eq!(formatted.title, "Unexpected character");
        assert!(formatted.suggestion.unwrap().contains("smart"));
    }

    #[test]
    fn test_unknown_parse_error_falls_back() {
        let formatted = format_parse_error(&ExecutionError::new("Something odd").at(5, 1), "let a = 1;");
        assert_eq!(formatted.category, ErrorCategory::Syntax);
        assert_eq!(formatted.title, "Syntax error");
        assert!(formatted.message.contains("line 5"));

        let empty = format_parse_error(&ExecutionError::default(), "");
        assert_eq!(empty.title, "Syntax error");
        assert!(!empty.message.is_empty());
    }

    #[test]
    fn test_runtime_not_a_function() {
        let formatted = format_runtime_error("TypeError: foo is not a function", Some(3));
        assert_eq!(formatted.category, ErrorCategory::Runtime);
        assert_eq!(formatted.title, "Not a function");
        assert!(formatted.message.contains("`foo`"));
        assert_eq!(formatted.line, Some(3));
    }

    #[test]
    fn test_runtime_step_limit() {
        let formatted = format_runtime_error("Maximum step limit exceeded", None);
        assert_eq!(formatted.category, ErrorCategory::Limit);
        assert!(formatted.suggestion.unwrap().contains("infinite loop"));
    }

    #[test]
    fn test_runtime_call_depth() {
        let formatted = format_runtime_error("RangeError: Maximum call stack size exceeded", None);
        assert_eq!(formatted.category, ErrorCategory::Limit);
        assert!(formatted.suggestion.unwrap().contains("infinite recursion"));
    }

    #[test]
    fn test_runtime_cannot_read() {
        let formatted = format_runtime_error(
            "TypeError: Cannot read properties of undefined (reading 'length')",
            None,
        );
        assert_eq!(formatted.title, "Undefined value");
        assert!(formatted.message.contains("`length`"));
    }

    #[test]
    fn test_runtime_priority_order() {
        // "undefined" appears, but "not a function" is checked first
        let formatted = format_runtime_error("TypeError: undefined is not a function", None);
        assert_eq!(formatted.title, "Not a function");
    }

    #[test]
    fn test_unmatched_runtime_messages_pass_through() {
        for raw in [
            "ReferenceError: total is not defined",
            "TypeError: Assignment to constant variable.",
        ] {
            let formatted = format_runtime_error(raw, None);
            assert_eq!(formatted.category, ErrorCategory::Runtime);
            assert_eq!(formatted.title, "Runtime error");
            assert_eq!(formatted.message, raw);
        }
    }

    #[test]
    fn test_runtime_passthrough() {
        let formatted = format_runtime_error("Custom failure", Some(9));
        assert_eq!(formatted.category, ErrorCategory::Runtime);
        assert_eq!(formatted.message, "Custom failure");

        let empty = format_runtime_error("", None);
        assert!(!empty.message.is_empty());
    }

    #[test]
    fn test_runtime_failure_from_error_value() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "bar is not a function");
        let formatted = format_runtime_failure(&err, None);
        assert!(formatted.message.contains("`bar`"));
    }

    #[test]
    fn test_unsupported_known_and_unknown() {
        let timers = format_unsupported_error("setTimeout");
        assert_eq!(timers.category, ErrorCategory::Unsupported);
        assert_eq!(timers.title, "Timers are simulated");

        let fetch = format_unsupported_error("fetch");
        assert_eq!(fetch.title, "Network requests are not available");

        // Lookup ignores case and surrounding whitespace
        assert_eq!(format_unsupported_error("  SETTIMEOUT ").title, "Timers are simulated");
        assert_eq!(format_unsupported_error("LocalStorage").title, "Browser storage is not available");

        let unknown = format_unsupported_error("WebAssembly");
        assert_eq!(unknown.category, ErrorCategory::Unsupported);
        assert!(unknown.message.contains("may not behave as expected"));
    }

    #[test]
    fn test_category_round_trip_names() {
        assert_eq!("limit".parse::<ErrorCategory>().unwrap(), ErrorCategory::Limit);
        assert!("fatal".parse::<ErrorCategory>().is_err());
        assert_eq!(serde_json::to_string(&ErrorCategory::Unsupported).unwrap(), "\"unsupported\"");
    }
}
