//! Performance benchmarks for contact extraction.
//!
//! These benchmarks measure the matchers over page text of increasing size,
//! with and without link classification, and the static HTML parse used as
//! the render fallback.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dispatch::fetcher::static_page;
use dispatch::{ContactKind, Extractor, KindSet};
use std::hint::black_box;

const PARAGRAPH: &str = "Our team is available Monday to Friday. Write to sales@acme.io \
    or support@help.acme.io, or call +44 20 7946 0958 during office hours. \
    Order numbers such as 2024-0001 are not phone numbers. \
    Visit https://acme.io/blog/2024/10/16/launch for the full story.\n";

fn page_text(paragraphs: usize) -> String {
    PARAGRAPH.repeat(paragraphs)
}

fn page_links(count: usize) -> Vec<String> {
    let hosts = [
        "https://acme.io/about",
        "https://instagram.com/acme",
        "https://wa.me/442079460958",
        "https://linkedin.com/company/acme",
        "https://cdn.acme.io/assets",
    ];
    (0..count)
        .map(|i| format!("{}?ref={}", hosts[i % hosts.len()], i))
        .collect()
}

fn page_html(paragraphs: usize) -> String {
    let mut html = String::from("<html><head><script>var x = 1;</script></head><body>");
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<p>{}</p><a href=\"/page/{}\">more</a><a href=\"https://twitter.com/acme{}\">t</a>",
            PARAGRAPH.trim_end(),
            i,
            i
        ));
    }
    html.push_str("</body></html>");
    html
}

/// Benchmark full extraction as page text grows.
fn bench_extract_all_kinds(c: &mut Criterion) {
    let extractor = Extractor::all_kinds();
    let mut group = c.benchmark_group("extract_all_kinds");

    for paragraphs in [10, 100, 1000] {
        let text = page_text(paragraphs);
        let links = page_links(paragraphs);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(paragraphs),
            &(text, links),
            |b, (text, links)| {
                b.iter(|| extractor.extract(black_box(text), black_box(links.iter())));
            },
        );
    }

    group.finish();
}

/// Benchmark an email-only harvester, which skips the phone scan.
fn bench_extract_emails_only(c: &mut Criterion) {
    let extractor = Extractor::new(KindSet::only([ContactKind::Email]));
    let text = page_text(1000);

    c.bench_function("extract_emails_only", |b| {
        b.iter(|| extractor.extract(black_box(&text), std::iter::empty::<&str>()));
    });
}

/// Benchmark the static HTML parse used when rendering is unavailable.
fn bench_static_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("static_parse");

    for paragraphs in [10, 100] {
        let html = page_html(paragraphs);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(paragraphs),
            &html,
            |b, html| {
                b.iter(|| static_page::parse(black_box(html), "https://acme.io/"));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_all_kinds,
    bench_extract_emails_only,
    bench_static_parse
);
criterion_main!(benches);
