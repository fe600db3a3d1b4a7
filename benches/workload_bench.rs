use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use memprobe::matmul::{Matrix, input_matrix, multiply_into};
use memprobe::pointer_chase::{NodePool, shuffled_permutation};
use memprobe::rng::Lcg;
use memprobe::seq_scan::{fill, scan};

fn bench_seq_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("seq_scan");

    // L1-sized, L3-sized and DRAM-sized working sets
    for elements in [4 * 1024, 512 * 1024, 8 * 1024 * 1024] {
        let buffer = fill(elements).unwrap();
        group.throughput(Throughput::Bytes((elements * std::mem::size_of::<u32>()) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(elements), &buffer, |b, buffer| {
            b.iter(|| scan(black_box(buffer), 1));
        });
    }
    group.finish();
}

fn bench_pointer_chase(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_chase");

    for nodes in [4 * 1024, 256 * 1024, 1024 * 1024] {
        let perm = shuffled_permutation(nodes, &mut Lcg::default()).unwrap();
        let pool = NodePool::linked(&perm).unwrap();
        group.throughput(Throughput::Elements(10_000));
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &pool, |b, pool| {
            b.iter(|| pool.traverse(black_box(10_000)));
        });
    }
    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(20);

    for n in [64, 128, 256] {
        let a = input_matrix(n).unwrap();
        let b_mat = Matrix::identity(n).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut c_mat = Matrix::zeros(n).unwrap();
                multiply_into(black_box(&a), black_box(&b_mat), &mut c_mat);
                c_mat.diagonal_sum()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_seq_scan, bench_pointer_chase, bench_matmul);
criterion_main!(benches);
