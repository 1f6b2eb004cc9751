use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snaker::{rewrite_all, to_snake_case};

fn sample_buffer() -> String {
    let line = "let itemCount = discount(itemCount) + recount.itemCount_total;\n";
    line.repeat(2_000)
}

fn bench_rewrite(c: &mut Criterion) {
    let buffer = sample_buffer();

    c.bench_function("plan 4k occurrences", |b| {
        b.iter(|| rewrite_all(black_box(&buffer), "itemCount", "item_count"))
    });

    let plan = rewrite_all(&buffer, "itemCount", "item_count");
    c.bench_function("apply plan", |b| b.iter(|| plan.apply(black_box(&buffer))));
}

fn bench_convert(c: &mut Criterion) {
    c.bench_function("to_snake_case", |b| {
        b.iter(|| to_snake_case(black_box("getHTTPResponseCodeForXMLRequest")))
    });
}

criterion_group!(benches, bench_rewrite, bench_convert);
criterion_main!(benches);
