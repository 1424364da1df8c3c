use criterion::{black_box, criterion_group, criterion_main, Criterion};

use diagnost_core::area::{classify, AreaNames};
use diagnost_core::model::{AnswerSet, Difficulty, Question, Quiz};
use diagnost_core::scoring::score;

fn make_quiz(questions: usize, areas: usize) -> Quiz {
    Quiz {
        id: "bench".into(),
        course: "cpa".into(),
        section: "FAR".into(),
        title: "Bench".into(),
        description: String::new(),
        time_limit_minutes: 35,
        passing_score: 70,
        questions: (0..questions)
            .map(|i| Question {
                id: format!("q{i}"),
                prompt: "bench".into(),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct_answer: i % 4,
                area: format!("area-{}", i % areas),
                topic: None,
                difficulty: Difficulty::Medium,
                explanation: String::new(),
            })
            .collect(),
    }
}

fn make_answers(questions: usize) -> AnswerSet {
    (0..questions)
        .map(|i| if i % 5 == 0 { None } else { Some((i * 7) % 4) })
        .collect()
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let names = AreaNames::new();

    for (questions, areas) in [(25, 5), (100, 8), (1000, 20)] {
        let quiz = make_quiz(questions, areas);
        let answers = make_answers(questions);
        group.bench_function(format!("questions={questions},areas={areas}"), |b| {
            b.iter(|| score(black_box(&quiz), black_box(&answers), 120, &names))
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let quiz = make_quiz(1000, 50);
    let result = score(&quiz, &make_answers(1000), 0, &AreaNames::new());

    c.bench_function("classify/50_areas", |b| {
        b.iter(|| classify(black_box(&result.area_scores)))
    });
}

criterion_group!(benches, bench_score, bench_classify);
criterion_main!(benches);
