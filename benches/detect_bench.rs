use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jsdoctor::{detect_language, format_parse_error, ExecutionError};

const JS_SOURCE: &str = r#"
function fib(n) {
    if (n <= 1) return n;
    return fib(n - 1) + fib(n - 2);
}
const results = [1, 2, 3, 4, 5].map(n => fib(n));
console.log(`fib: ${results.join(", ")}`);
"#;

const PYTHON_SOURCE: &str = r#"
def fib(n):
    if n <= 1:
        return n
    return fib(n - 1) + fib(n - 2)

if __name__ == "__main__":
    print([fib(n) for n in range(10)])
"#;

fn bench_detect(c: &mut Criterion) {
    c.bench_function("detect_javascript", |b| b.iter(|| detect_language(black_box(JS_SOURCE))));
    c.bench_function("detect_python", |b| b.iter(|| detect_language(black_box(PYTHON_SOURCE))));

    let large = JS_SOURCE.repeat(500);
    c.bench_function("detect_large_javascript", |b| b.iter(|| detect_language(black_box(&large))));
}

fn bench_format(c: &mut Criterion) {
    let error = ExecutionError::new("Unexpected token (3:5)");
    c.bench_function("format_parse_error", |b| {
        b.iter(|| format_parse_error(black_box(&error), black_box(JS_SOURCE)))
    });
}

criterion_group!(benches, bench_detect, bench_format);
criterion_main!(benches);
