//! Performance benchmarks for html2text.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use html2text::{convert, convert_with_options, decode_entities, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
    <style>body { font-family: sans-serif; }</style>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Sample Article Title</h1>
        <p>This is the first paragraph of the article. It contains some meaningful
        content &amp; a <a href="https://example.com/more?a=1&amp;b=2">link</a>.</p>
        <p>Here is a second paragraph with more content &copy; 2024.</p>
        <ul>
            <li>Related article 1</li>
            <li>Related article 2</li>
        </ul>
    </article>
    <script>window.analytics = { enabled: true };</script>
</body>
</html>
"#;

fn bench_convert_default(c: &mut Criterion) {
    c.bench_function("convert_default", |b| {
        b.iter(|| convert(black_box(SAMPLE_HTML)));
    });
}

fn bench_convert_with_options(c: &mut Criterion) {
    let options = Options {
        unix_line_breaks: true,
        links_inner_text: true,
        list_support: true,
        ..Options::default()
    };

    c.bench_function("convert_with_options", |b| {
        b.iter(|| convert_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

fn bench_decode_entities(c: &mut Criterion) {
    let text = "fish &amp; chips &copy; &#8268; &#x204D; Tom & Jerry &neither; ".repeat(50);

    c.bench_function("decode_entities", |b| {
        b.iter(|| decode_entities(black_box(&text)));
    });
}

/// Throughput on repeated documents of growing size
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for copies in [1usize, 10, 100] {
        let html = SAMPLE_HTML.repeat(copies);
        let size_kb = html.len() / 1024;
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("convert", format!("{copies}x ({size_kb}KB)")),
            &html,
            |b, html| {
                b.iter(|| convert(black_box(html)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_convert_default,
    bench_convert_with_options,
    bench_decode_entities,
    bench_scaling
);
criterion_main!(benches);
