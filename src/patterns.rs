// Pattern catalog - weighted signatures of languages that are not JavaScript,
// plus the signals that say "this really is JavaScript".
//
// Both tables are scanned in declaration order. The classifier's tie-break
// depends on it, so keep new rows appended to the block of their language.
use crate::error::JsDoctorError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the classifier can report instead of JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Java,
    Cpp,
    Go,
    Ruby,
    /// Plain English prose rather than code
    Text,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::Go,
        Language::Ruby,
        Language::Text,
    ];

    /// Stable lowercase identifier, same as the serialized form
    pub fn id(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Ruby => "ruby",
            Language::Text => "text",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Language {
    type Err = JsDoctorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "cpp" | "c++" | "c" | "c/c++" => Ok(Language::Cpp),
            "go" | "golang" => Ok(Language::Go),
            "ruby" | "rb" => Ok(Language::Ruby),
            "text" | "prose" | "plain text" => Ok(Language::Text),
            _ => Err(JsDoctorError::UnknownLanguage(s.to_string())),
        }
    }
}

/// One weighted rule: a single match means "probably `language`" with
/// strength `weight` (0.0 - 1.0).
#[derive(Debug)]
pub struct LanguagePattern {
    pub regex: Regex,
    pub language: Language,
    pub description: &'static str,
    pub weight: f64,
}

fn rule(pattern: &str, language: Language, description: &'static str, weight: f64) -> LanguagePattern {
    LanguagePattern {
        regex: Regex::new(pattern).unwrap(),
        language,
        description,
        weight,
    }
}

lazy_static! {
    pub static ref LANGUAGE_PATTERNS: Vec<LanguagePattern> = {
        use Language::*;
        vec![
            // Python
            rule(r"(?m)^[ \t]*def[ \t]+\w+[ \t]*\(.*\)[ \t]*(?:->[^:\n]+)?:", Python, "Python function definition (def ...:)", 0.9),
            rule(r"(?m)^[ \t]*from[ \t]+[\w.]+[ \t]+import[ \t]+", Python, "Python 'from ... import' statement", 0.9),
            rule(r"(?m)^[ \t]*import[ \t]+[\w.]+(?:[ \t]+as[ \t]+\w+)?[ \t]*$", Python, "Python import statement", 0.5),
            rule(r"(?m)^[ \t]*(?:if|elif|while|for)[ \t]+[^(\n][^\n]*:[ \t]*$", Python, "Block header ending with a colon", 0.6),
            rule(r"\belif\b", Python, "Python 'elif' keyword", 0.8),
            rule(r"(?m)^[ \t]*class[ \t]+\w+(?:\([^)\n]*\))?[ \t]*:[ \t]*$", Python, "Python class definition", 0.8),
            rule(r"__name__[ \t]*==[ \t]*['\x22]__main__['\x22]", Python, "Python main guard", 1.0),
            rule(r"\blambda[ \t]+[\w, ]*:", Python, "Python lambda expression", 0.7),
            rule(r"\bprint[ \t]*\(", Python, "Python print() call", 0.3),
            rule(r"\b(?:True|False|None)\b", Python, "Python literal (True/False/None)", 0.3),
            rule(r"\bself\.\w+", Python, "Python 'self.' attribute access", 0.3),
            // Java
            rule(r"System\.out\.print(?:ln|f)?[ \t]*\(", Java, "Java console output (System.out.println)", 1.0),
            rule(r"\bpublic[ \t]+static[ \t]+void[ \t]+main[ \t]*\([ \t]*String", Java, "Java main method", 1.0),
            rule(r"\b(?:public|private|protected)[ \t]+(?:static[ \t]+)?(?:final[ \t]+)?(?:void|class|int|String|boolean|double)\b", Java, "Java access modifier", 0.8),
            rule(r"(?m)^[ \t]*import[ \t]+java\.", Java, "Java standard library import", 1.0),
            rule(r"\b(?:String|boolean)[ \t]+\w+[ \t]*=", Java, "Typed variable declaration", 0.5),
            rule(r"\b(?:ArrayList|HashMap|List|Map)<\w+", Java, "Java generic collection", 0.7),
            rule(r"@Override\b", Java, "Java @Override annotation", 0.9),
            // C / C++
            rule(r"(?m)^[ \t]*#include[ \t]*[<\x22]", Cpp, "C/C++ #include directive", 1.0),
            rule(r"(?m)^[ \t]*using[ \t]+namespace[ \t]+\w+[ \t]*;", Cpp, "C++ 'using namespace'", 1.0),
            rule(r"\bstd::\w+", Cpp, "C++ std:: namespace", 0.9),
            rule(r"\bcout[ \t]*<<|\bcin[ \t]*>>", Cpp, "C++ stream I/O (cout/cin)", 0.9),
            rule(r"\bint[ \t]+main[ \t]*\(", Cpp, "C/C++ main function", 0.9),
            rule(r"\bprintf[ \t]*\(", Cpp, "C printf() call", 0.6),
            rule(r"\b(?:malloc|free|sizeof)[ \t]*\(", Cpp, "C memory management", 0.6),
            rule(r"(?m)^[ \t]*(?:int|char|float|double|long|unsigned|void)[ \t]+\**\w+[ \t]*(?:=|;|\[)", Cpp, "C-style typed declaration", 0.4),
            rule(r"\w->\w", Cpp, "Pointer member access (->)", 0.3),
            // Go
            rule(r"(?m)^[ \t]*package[ \t]+\w+[ \t]*$", Go, "Go package clause", 0.9),
            rule(r"\bfunc[ \t]+(?:\(\w+[ \t]+\*?\w+\)[ \t]*)?\w+[ \t]*\(", Go, "Go function declaration (func)", 0.9),
            rule(r"\bfmt\.(?:Print|Println|Printf|Sprintf|Errorf)[ \t]*\(", Go, "Go fmt package call", 1.0),
            rule(r"\bif[ \t]+err[ \t]*!=[ \t]*nil\b", Go, "Go error check (err != nil)", 1.0),
            rule(r"\w[ \t]*:=", Go, "Go short variable declaration (:=)", 0.5),
            rule(r"(?m)^[ \t]*import[ \t]*\([ \t]*$", Go, "Go grouped import", 0.8),
            rule(r"\bgo[ \t]+func\b|\bdefer[ \t]+\w+", Go, "Go goroutine or defer", 0.7),
            // Ruby
            rule(r"(?m)^[ \t]*def[ \t]+\w+[?!]?(?:[ \t]*\([^)\n]*\))?[ \t]*$", Ruby, "Ruby method definition", 0.6),
            rule(r"(?m)^[ \t]*end[ \t]*$", Ruby, "Ruby 'end' block terminator", 0.5),
            rule(r"(?m)^[ \t]*puts\b", Ruby, "Ruby puts output", 0.7),
            rule(r"\bdo[ \t]*\|[\w, ]+\|", Ruby, "Ruby block with parameters (do |x|)", 0.9),
            rule(r"(?m)^[ \t]*require(?:_relative)?[ \t]+['\x22]", Ruby, "Ruby require statement", 0.6),
            rule(r"#\{[^}\n]*\}", Ruby, "Ruby string interpolation (#{...})", 0.5),
            rule(r"(?m)^[ \t]*(?:unless|elsif)\b", Ruby, "Ruby 'unless'/'elsif' keyword", 0.8),
            rule(r"\battr_(?:accessor|reader|writer)\b", Ruby, "Ruby attribute macro", 0.9),
            // Plain text
            rule(r"(?m)^[A-Z][A-Za-z',]*(?:[ \t]+[A-Za-z',.;:!?-]+){4,}[.!?][\x22')]?[ \t]*$", Text, "Sentence of English prose", 0.6),
            rule(r"(?mi)^[ \t]*(?:dear|hello|hi|hey)[ \t]+\w+[ \t]*[,!]", Text, "Greeting or salutation", 0.5),
            rule(r"[a-z][.!?][ \t]+[A-Z][a-z]+[ \t]+[a-z]+[ \t]+[a-z]+", Text, "Several sentences in a row", 0.4),
            rule(r"(?m)^[^;{}()=<>/*\n]{80,}$", Text, "Long line without code punctuation", 0.4),
            rule(r"(?i)\b(?:I|we|you|they)[ \t]+(?:am|are|have|want|need|think|would|will|can)\b", Text, "Conversational phrase", 0.3),
            rule(r"(?i)\b(?:please|thanks|thank you|help me|explain)\b", Text, "Request-style wording", 0.3),
        ]
    };

    /// `//` line comments and `/* */` block comments
    pub static ref JS_COMMENT: Regex = Regex::new(r"(?s)//[^\n]*|/\*.*?\*/").unwrap();

    /// Distinctively-JavaScript signals; presence only, no weights.
    pub static ref JAVASCRIPT_CONFIRMERS: Vec<Regex> = [
        r"\b(?:const|let|var)[ \t]+[\w$]+[ \t]*=",
        r"=>",
        r"\bconsole\.(?:log|error|warn|info|debug|table)[ \t]*\(",
        r"\b(?:Math|JSON|Object|Array|Number|Promise|document|window)\.\w+[ \t]*\(",
        r"\.(?:map|filter|reduce|forEach|find|findIndex|some|every|includes)[ \t]*\(",
        r"\basync[ \t]+function\b|\bawait[ \t]+|\.then[ \t]*\(|\bnew[ \t]+Promise\b",
        r"===|!==",
        r"\$\{",
        r"\bfunction\b[ \t]*[\w$]*[ \t]*\(",
        r"\bmodule\.exports\b|\brequire[ \t]*\(|\bexport[ \t]+(?:default|const|function)\b",
        r"\btypeof[ \t]+\w",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}
