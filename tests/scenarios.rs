use jsdoctor::{
    detect_language, error_severity, format_parse_error, format_runtime_error,
    format_unsupported_error, ErrorCategory, ExecutionError, Language, Severity,
};

#[test]
fn plain_declarations_are_javascript() {
    let result = detect_language("const x = 5; let y = 10;");
    assert!(result.is_likely_java_script);
    assert_eq!(result.detected_language, None);
}

#[test]
fn python_function_gets_javascript_rewrite_advice() {
    let result = detect_language("def hello():\n  print('hi')");
    assert!(!result.is_likely_java_script);
    assert_eq!(result.detected_language, Some(Language::Python));

    let suggestion = result.suggestion.expect("python suggestion");
    assert!(suggestion.contains("function name()"));
    assert!(suggestion.contains("console.log()"));
}

#[test]
fn java_println_is_java() {
    let result = detect_language("System.out.println(\"Hello\");");
    assert_eq!(result.detected_language, Some(Language::Java));
}

#[test]
fn not_a_function_names_the_callee() {
    let formatted = format_runtime_error("TypeError: foo is not a function", None);
    assert_eq!(formatted.category, ErrorCategory::Runtime);
    assert!(formatted.title.to_lowercase().contains("not a function"));
    assert!(formatted.message.contains("foo"));
}

#[test]
fn step_limit_points_at_infinite_loop() {
    let formatted = format_runtime_error("Maximum step limit exceeded", None);
    assert_eq!(formatted.category, ErrorCategory::Limit);
    assert!(formatted.suggestion.unwrap().contains("infinite loop"));
}

#[test]
fn cpp_detection_displays_as_c_cpp() {
    assert_eq!(Language::Cpp.display_name(), "C/C++");

    let result = detect_language("#include <iostream>\nint main() {\n  std::cout << \"hi\";\n}");
    assert_eq!(result.detected_language, Some(Language::Cpp));
}

#[test]
fn other_languages_are_recognized() {
    let go = "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"hi\")\n}\n";
    assert_eq!(detect_language(go).detected_language, Some(Language::Go));

    let ruby = "[1, 2, 3].each do |n|\n  puts n\nend\n";
    assert_eq!(detect_language(ruby).detected_language, Some(Language::Ruby));

    let prose = "Hello there, I would like a program that adds two numbers together. Please explain how it works.";
    assert_eq!(detect_language(prose).detected_language, Some(Language::Text));
}

#[test]
fn js_only_signals_never_flag_a_language() {
    let samples = [
        "let total = 0;",
        "const add = (a, b) => a + b;",
        "console.log([1, 2, 3].map(n => n * 2));",
        "if (a === b) { console.log(`same ${a}`); }",
        "async function load() { await Promise.resolve(1); }",
    ];

    for sample in samples {
        let result = detect_language(sample);
        assert!(result.is_likely_java_script, "Flagged: {}", sample);
        assert_eq!(result.detected_language, None);
        assert!(result.hints.is_empty());
    }
}

#[test]
fn detected_language_iff_not_javascript() {
    let samples = [
        "",
        "let x = 1;",
        "def f():\n    return 1",
        "x := 5",
        "public class Main { public static void main(String[] args) {} }",
        "random words",
    ];

    for sample in samples {
        let result = detect_language(sample);
        assert_eq!(result.detected_language.is_none(), result.is_likely_java_script, "{}", sample);
        assert!(result.hints.len() <= 3);
        assert!((0.0..=1.0).contains(&result.confidence));
        if let Some(lang) = result.detected_language {
            assert!(result.hints.iter().all(|h| h.language == lang));
        }
    }
}

#[test]
fn detection_is_deterministic() {
    let code = "import os\nfrom sys import argv\nclass A:\n    def b(self):\n        print(None)\n";
    assert_eq!(detect_language(code), detect_language(code));
}

#[test]
fn formatters_are_total() {
    let messages = ["", "   ", "???", "Unexpected token", "\u{0}\u{1}", "(1:2)", "Unexpected character ''"];

    for message in messages {
        let parse = format_parse_error(&ExecutionError::new(message), message);
        assert!(!parse.title.is_empty());
        assert!(!parse.message.is_empty());

        let runtime = format_runtime_error(message, None);
        assert!(!runtime.title.is_empty());
        assert!(!runtime.message.is_empty());
    }
}

#[test]
fn severity_covers_every_category() {
    let expected = [
        (ErrorCategory::Syntax, Severity::Error),
        (ErrorCategory::Language, Severity::Warning),
        (ErrorCategory::Runtime, Severity::Error),
        (ErrorCategory::Unsupported, Severity::Warning),
        (ErrorCategory::Limit, Severity::Info),
    ];
    for (category, severity) in expected {
        assert_eq!(error_severity(category), severity);
    }
    assert_eq!(error_severity(format_unsupported_error("fetch").category), Severity::Warning);
}

#[test]
fn diagnosis_serializes_with_ui_field_names() {
    let formatted = format_parse_error(
        &ExecutionError::new("Unexpected token"),
        "System.out.println(\"Hello\");",
    );
    let json = serde_json::to_value(&formatted).unwrap();
    assert_eq!(json["category"], "language");
    assert!(json["originalError"].is_string());
    assert_eq!(json["highlights"][0]["line"], 1);

    let detection = serde_json::to_value(detect_language("puts 'hi'\nputs 'there'\nend")).unwrap();
    assert_eq!(detection["isLikelyJavaScript"], false);
    assert_eq!(detection["detectedLanguage"], "ruby");
}

#[test]
fn commented_javascript_keeps_its_syntax_diagnosis() {
    let source = "/*\nCalculate the total price of all items in the shopping cart. Then apply a discount.\n*/\nfunction total(items) {\n  return items.reduce((a, b) => a + b, 0);\n}\n";
    assert!(detect_language(source).is_likely_java_script);

    let formatted = format_parse_error(&ExecutionError::new("Unexpected token (5:3)"), source);
    assert_eq!(formatted.category, ErrorCategory::Syntax);
    assert_eq!(formatted.title, "Unexpected token");
    assert_eq!(formatted.line, Some(5));
}

#[test]
fn equal_scores_keep_catalog_order() {
    assert_eq!(detect_language("end\nimport os\n").detected_language, Some(Language::Python));
}
