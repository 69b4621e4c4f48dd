use criterion::{Criterion, criterion_group, criterion_main};
use mdhtml_engine::{document_to_element_tree, markdown_to_html, segment};
mod common;

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);

    group.bench_function("segment", |b| {
        b.iter(|| {
            let blocks = segment(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    group.bench_function("element_tree", |b| {
        b.iter(|| {
            let tree = document_to_element_tree(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(tree);
        });
    });

    group.bench_function("markdown_to_html", |b| {
        b.iter(|| {
            let html = markdown_to_html(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(html);
        });
    });

    group.finish();
}

fn bench_document_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_sizes");
    group.sample_size(10);

    for sections in [10, 100, 1000] {
        let content = common::generate_sectioned_document(sections);
        group.bench_function(format!("sections_{sections}"), |b| {
            b.iter(|| {
                let html = markdown_to_html(std::hint::black_box(&content)).unwrap();
                std::hint::black_box(html);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_document_sizes);
criterion_main!(benches);
