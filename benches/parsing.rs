//! Benchmarks for chatsift parsing.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatsift::parser::ExportParser;
use chatsift::parsers::WhatsAppParser;

fn generate_export(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let hour = i % 24;
        let minute = i % 60;
        let body = match i % 4 {
            0 => format!("check https://example.com/page/{i}"),
            1 => "see <attached: photo.jpg>".to_string(),
            2 => format!("two links http://a.com/{i} and https://b.com/{i}"),
            _ => format!("plain message number {i}"),
        };
        lines.push(format!("24/08/25, {hour:02}:{minute:02} - {sender}: {body}"));
    }
    lines.join("\n")
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("whatsapp_parse");

    for count in [100, 1_000, 10_000] {
        let export = generate_export(count);
        group.throughput(Throughput::Bytes(export.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &export, |b, export| {
            let parser = WhatsAppParser::new();
            b.iter(|| parser.parse_str(black_box(export)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parsing);
criterion_main!(benches);
