use criterion::Criterion;

use bench_util::{bench_inputs2, configure_criterion, gen_word_pairs};

fn bench_fmul(c: &mut Criterion) {
    let pairs = gen_word_pairs(1024, 0x4242);

    let mut group = c.benchmark_group("fmul/normal");
    bench_inputs2(&mut group, &pairs, fpu32::fmul, |x, y| x * y);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_fmul(&mut c);
    c.final_summary();
}
