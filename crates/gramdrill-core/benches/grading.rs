use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gramdrill_core::engine::{grade, normalize, Tier};
use gramdrill_core::model::{BankItems, FillBlankItem, QuestionBank, UserResponse};

fn make_bank(n: usize) -> QuestionBank {
    let items = (0..n)
        .map(|i| FillBlankItem {
            sentence: format!("Sentence {i} has a ___ in it."),
            answer: format!("word{i}"),
        })
        .collect();
    QuestionBank {
        id: "bench".into(),
        name: "Bench".into(),
        items: BankItems::FillBlank(items),
    }
}

fn make_responses(n: usize) -> Vec<Option<UserResponse>> {
    (0..n)
        .map(|i| Some(UserResponse::Text(format!("  Word{i} "))))
        .collect()
}

fn bench_grade(c: &mut Criterion) {
    let mut group = c.benchmark_group("grade");

    for n in [4usize, 64, 1024] {
        let bank = make_bank(n);
        let responses = make_responses(n);
        group.bench_function(format!("fill_blank_n={n}"), |b| {
            b.iter(|| grade(black_box(&bank), black_box(&responses)))
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box("  My Friend And I Went To The Movies.  ")))
    });

    c.bench_function("tier_for_percentage", |b| {
        b.iter(|| Tier::for_percentage(black_box(67)))
    });
}

criterion_group!(benches, bench_grade, bench_normalize);
criterion_main!(benches);
