use fixed_uint::{UInt32, UInt64, UInt128};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_div_mod(c: &mut Criterion) {
    let dividend32 = UInt32::MAX;
    let divisor32 = UInt32::from(7u32);

    c.bench_function("uint32 div_mod", |b| {
        b.iter(|| black_box(dividend32).div_mod(black_box(divisor32)))
    });

    let dividend64 = UInt64::MAX;
    let divisor64 = UInt64::from(3u64);

    c.bench_function("uint64 div_mod", |b| {
        b.iter(|| black_box(dividend64).div_mod(black_box(divisor64)))
    });

    let dividend128 = UInt128::MAX;
    let divisor128 = UInt128::as_unsigned(0, 0x1_0000_0001);

    c.bench_function("uint128 div_mod", |b| {
        b.iter(|| black_box(dividend128).div_mod(black_box(divisor128)))
    });
}

criterion_group!(benches, bench_div_mod);
criterion_main!(benches);
