use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cusp_box::ParamBox;
use cusp_word::construct_word;

fn bench_word_construction(c: &mut Criterion) {
    let code: String = std::iter::repeat("011111")
        .take(10)
        .collect::<String>();
    let bx = ParamBox::build(&code).expect("valid boxcode");
    let word = "NgmGMgnGgMGNgmG";
    c.bench_function("construct_word_15_letters", |b| {
        b.iter(|| construct_word(black_box(&bx.cover), black_box(word)))
    });
}

criterion_group!(benches, bench_word_construction);
criterion_main!(benches);
