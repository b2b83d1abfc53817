use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use refblas::{level1, level2, level3, Diag, Side, Transpose, Uplo};
use refblas_core::SplitMix64;

fn bench_ddot(c: &mut Criterion) {
    let mut group = c.benchmark_group("ddot");
    let mut rng = SplitMix64::new(1);
    for &n in &[64, 256, 1024, 4096, 16384] {
        let x = rng.vec_f64(n);
        let y = rng.vec_f64(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| level1::ddot(n, &x, 1, &y, 1));
        });
    }
    group.finish();
}

fn bench_daxpy(c: &mut Criterion) {
    let mut group = c.benchmark_group("daxpy");
    let mut rng = SplitMix64::new(2);
    for &n in &[64, 256, 1024, 4096, 16384] {
        let x = rng.vec_f64(n);
        let mut y = rng.vec_f64(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                y.fill(0.0);
                level1::daxpy(n, 2.0, &x, 1, &mut y, 1);
            });
        });
    }
    group.finish();
}

fn bench_dgemv(c: &mut Criterion) {
    let mut group = c.benchmark_group("dgemv");
    let mut rng = SplitMix64::new(3);
    for &n in &[32, 128, 512] {
        let a = rng.vec_f64(n * n);
        let x = rng.vec_f64(n);
        let mut y = vec![0.0; n];
        for trans in [Transpose::NoTrans, Transpose::Trans] {
            let id = BenchmarkId::new(format!("{trans:?}"), n);
            group.bench_with_input(id, &n, |b, &n| {
                b.iter(|| level2::dgemv(trans, n, n, 1.0, &a, n, &x, 1, 0.0, &mut y, 1));
            });
        }
    }
    group.finish();
}

fn bench_dgemm(c: &mut Criterion) {
    let mut group = c.benchmark_group("dgemm");
    let mut rng = SplitMix64::new(4);
    for &n in &[32, 64, 128, 256] {
        let a = rng.vec_f64(n * n);
        let b = rng.vec_f64(n * n);
        let mut c_mat = vec![0.0; n * n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| {
                level3::dgemm(
                    Transpose::NoTrans,
                    Transpose::NoTrans,
                    n,
                    n,
                    n,
                    1.0,
                    &a,
                    n,
                    &b,
                    n,
                    0.0,
                    &mut c_mat,
                    n,
                )
                .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_dtrsm(c: &mut Criterion) {
    let mut group = c.benchmark_group("dtrsm");
    let mut rng = SplitMix64::new(5);
    for &n in &[32, 64, 128] {
        let mut a = rng.vec_f64(n * n);
        for i in 0..n {
            a[i + i * n] += n as f64;
        }
        let b0 = rng.vec_f64(n * n);
        let mut b_mat = b0.clone();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| {
                b_mat.copy_from_slice(&b0);
                level3::dtrsm(
                    Side::Left,
                    Uplo::Lower,
                    Transpose::NoTrans,
                    Diag::NonUnit,
                    n,
                    n,
                    1.0,
                    &a,
                    n,
                    &mut b_mat,
                    n,
                );
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ddot, bench_daxpy, bench_dgemv, bench_dgemm, bench_dtrsm);
criterion_main!(benches);
