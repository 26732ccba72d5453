// Suggestion advisor - remediation text for code written in the wrong language
use crate::patterns::Language;

impl Language {
    /// Human-facing name used in titles and messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C/C++",
            Language::Go => "Go",
            Language::Ruby => "Ruby",
            Language::Text => "plain text",
        }
    }

    pub fn suggestion(&self) -> &'static str {
        language_suggestion(*self)
    }
}

/// Fixed advice for rewriting `language` as JavaScript.
pub fn language_suggestion(language: Language) -> &'static str {
    match language {
        Language::Python => {
            "This tool runs JavaScript. Write functions as `function name() { ... }` instead of `def name():`, \
             use `console.log()` instead of `print()`, and wrap blocks in curly braces instead of indentation."
        }
        Language::Java => {
            "This tool runs JavaScript. Use `console.log()` instead of `System.out.println()`, \
             declare variables with `let` or `const` instead of a type, and drop `public static void main`."
        }
        Language::Cpp => {
            "This tool runs JavaScript. Remove `#include` lines, use `console.log()` instead of `printf` or `cout`, \
             and declare variables with `let` or `const` instead of `int` or `char`."
        }
        Language::Go => {
            "This tool runs JavaScript. Write `function name() { ... }` instead of `func name()`, \
             use `console.log()` instead of `fmt.Println()`, and `let x = ...` instead of `x := ...`."
        }
        Language::Ruby => {
            "This tool runs JavaScript. Write `function name() { ... }` instead of `def ... end`, \
             use `console.log()` instead of `puts`, and `array.forEach(x => { ... })` instead of `each do |x|`."
        }
        Language::Text => {
            "This looks like a description rather than code. Try writing it as JavaScript, for example: \
             `const greeting = \"Hello\";` followed by `console.log(greeting);`"
        }
    }
}
