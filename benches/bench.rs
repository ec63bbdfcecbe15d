// Criterion benchmarks for Idea Forge

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use idea_forge::core::{calculate_budget_distribution, district_info, ideas_prompt, assistant_prompt, District};
use idea_forge::models::Profile;
use idea_forge::services::{DocumentExporter, ExportCapability};

fn create_profile(district: District) -> Profile {
    Profile {
        name: "Bench User".to_string(),
        district,
        qualifications: "B.E. Electrical Engineering".to_string(),
        budget: 350_000.0,
        interests: "solar installations, electronics repair".to_string(),
    }
}

fn bench_budget_distribution(c: &mut Criterion) {
    c.bench_function("budget_distribution", |b| {
        b.iter(|| calculate_budget_distribution(black_box(100_000.0)));
    });
}

fn bench_district_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("district_lookup");

    for name in ["Ariyalur", "Tiruchirappalli", "Virudhunagar", "Unknown"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| district_info(black_box(name)));
        });
    }

    group.finish();
}

fn bench_prompts(c: &mut Criterion) {
    let profile = create_profile(District::Coimbatore);

    c.bench_function("ideas_prompt", |b| {
        b.iter(|| ideas_prompt(black_box(&profile)));
    });

    c.bench_function("assistant_prompt", |b| {
        b.iter(|| assistant_prompt(black_box(&profile), black_box("How should I price installations?")));
    });
}

fn bench_document_export(c: &mut Criterion) {
    let exporter = DocumentExporter::new(ExportCapability::detect(true));
    let profile = create_profile(District::Madurai);
    let distribution = calculate_budget_distribution(profile.budget);
    let ideas = "1. Rooftop solar installer\n2. Inverter repair shop\n3. Jasmine cold-chain\n".repeat(20);

    c.bench_function("build_document", |b| {
        b.iter(|| exporter.build_document(black_box(&profile), black_box(&ideas), &distribution));
    });
}

criterion_group!(
    benches,
    bench_budget_distribution,
    bench_district_lookup,
    bench_prompts,
    bench_document_export
);
criterion_main!(benches);
