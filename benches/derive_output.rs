use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zoom_template::core::composer::{derive_output, TemplateComposer};
use zoom_template::core::constants::DEFAULT_TEMPLATE;

fn make_template(repeats: usize) -> String {
    let mut template = String::with_capacity(DEFAULT_TEMPLATE.len() * repeats);
    for _ in 0..repeats {
        template.push_str(DEFAULT_TEMPLATE);
    }
    template
}

fn bench_derive_output(c: &mut Criterion) {
    let link = "https://us02web.zoom.us/j/81234567890?pwd=abcdefghijklmnop";

    for &repeats in &[1usize, 16usize] {
        let template = make_template(repeats);
        let mut group = c.benchmark_group(format!("derive_output_x{}", repeats));
        group.throughput(Throughput::Bytes(template.len() as u64));

        group.bench_function(BenchmarkId::new("with_link", repeats), |b| {
            b.iter(|| derive_output(&template, link))
        });
        group.bench_function(BenchmarkId::new("blank_link", repeats), |b| {
            b.iter(|| derive_output(&template, "   "))
        });

        // Keystroke-by-keystroke typing of the link, as the link field does.
        group.bench_function(BenchmarkId::new("typing", repeats), |b| {
            b.iter(|| {
                let mut composer = TemplateComposer::with_template(template.as_str());
                let mut typed = String::new();
                for c in link.chars() {
                    typed.push(c);
                    composer.set_link_value(typed.as_str());
                }
                composer
            })
        });

        group.finish();
    }
}

criterion_group!(benches, bench_derive_output);
criterion_main!(benches);
