use criterion::Criterion;

use bench_util::{bench_inputs, configure_criterion, gen_int_range_words, gen_words};

fn bench_ffloor(c: &mut Criterion) {
    let fractional = gen_int_range_words(1024, 0x9abc);
    let full = gen_words(1024, 0xdef0);

    let mut group = c.benchmark_group("ffloor/in_range");
    bench_inputs(&mut group, &fractional, fpu32::ffloor, |x| x.floor());
    group.finish();

    // mostly large exponents, exercising the pass-through shortcut
    let mut group = c.benchmark_group("ffloor/full_range");
    bench_inputs(&mut group, &full, fpu32::ffloor, |x| x.floor());
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_ffloor(&mut c);
    c.final_summary();
}
