mod utils;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use skyline_rtree::build_index_with_degree;
use utils::get_random_points;

pub fn construction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_random");

    for &size in [1_000, 10_000].iter() {
        let points = get_random_points(size, 17);
        println!("Benchmarking build of {} points", size);
        for degree in [4, 8, 16].iter() {
            group.bench_with_input(
                BenchmarkId::new(format!("rtree_build.{}", size), degree),
                degree,
                |b, &d| {
                    b.iter(|| {
                        build_index_with_degree(&points, d).unwrap();
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, construction_benchmark);
criterion_main!(benches);
