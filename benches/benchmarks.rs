use criterion::{BenchmarkId,black_box, criterion_group, criterion_main, Criterion};

use anatree::*;
use anatree::test::*;

pub fn histogram_benchmark(c: &mut Criterion) {
    let alphabet = get_test_alphabet();

    c.bench_with_input(BenchmarkId::new("histogram_word_6_chars","alphabet"), &alphabet, |b, alphabet| b.iter(||{
        "houses".histogram(&alphabet)
    }));

    c.bench_with_input(BenchmarkId::new("histogram_sentence_34_chars","alphabet"), &alphabet, |b, alphabet| b.iter(||{
        "the lazy dog jumped over the quick brown fox".histogram(&alphabet)
    }));
}

pub fn build_benchmark(c: &mut Criterion) {
    c.bench_function("build_vocabulary", |b| b.iter(|| {
        AnagramIndex::build(get_test_alphabet(), black_box(TEST_VOCABULARY), 0)
    }));
}

pub fn query_benchmark(c: &mut Criterion) {
    let index = get_test_vocabulary_index();

    c.bench_with_input(BenchmarkId::new("anagrams","tinsel"), &index, |b, index| b.iter(||{
        index.anagrams(black_box("tinsel")).len()
    }));

    c.bench_with_input(BenchmarkId::new("anagrams_with_unknown","ton"), &index, |b, index| b.iter(||{
        index.anagrams_with_unknown(black_box("ton"), 0, 3).len()
    }));

    c.bench_with_input(BenchmarkId::new("partial_anagrams","dormitory"), &index, |b, index| b.iter(||{
        index.partial_anagrams(black_box("dormitory"), 0).len()
    }));

    c.bench_with_input(BenchmarkId::new("multi_anagrams","dormitory"), &index, |b, index| b.iter(||{
        index.multi_anagrams(black_box("dormitory"), 0, 0, false)
    }));
}

criterion_group!(benches, histogram_benchmark, build_benchmark, query_benchmark);
criterion_main!(benches);
