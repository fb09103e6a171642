//! 四叉树空间索引性能基准测试
//!
//! 数据为固定范围内均匀分布的 1x1 小矩形。
//! 查询结果按数据相等去重，复杂度与结果数的平方相关，所以区域查询规模较小。

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spindex::{Rectangle, SpatialIndex};

const BENCHMARK_SIZE: usize = 20_000;
const EXTENT: f64 = 1000.0;

/// 性能测试配置
struct BenchConfig {
    size: usize,
    max_items: usize,
    max_depth: usize,
    seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: BENCHMARK_SIZE,
            max_items: 10,
            max_depth: 20,
            seed: 42,
        }
    }
}

/// 生成测试数据
fn generate_test_data(count: usize, seed: u64) -> Vec<(Rectangle, u32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let x = rng.gen_range(0.0..EXTENT - 1.0);
            let y = rng.gen_range(0.0..EXTENT - 1.0);
            (Rectangle::new(x, y, x + 1.0, y + 1.0), i as u32)
        })
        .collect()
}

/// 生成查询矩形
fn generate_query_rects(count: usize, coverage_percent: f64, seed: u64) -> Vec<Rectangle> {
    let mut rng = StdRng::seed_from_u64(seed + 1000);

    // 根据覆盖率计算查询矩形的大小
    let query_size = EXTENT * (coverage_percent / 100.0).sqrt();

    (0..count)
        .map(|_| {
            let x = rng.gen_range(0.0..(EXTENT - query_size));
            let y = rng.gen_range(0.0..(EXTENT - query_size));
            Rectangle::new(x, y, x + query_size, y + query_size)
        })
        .collect()
}

fn build_index(config: &BenchConfig, data: &[(Rectangle, u32)]) -> SpatialIndex<u32> {
    let mut index = SpatialIndex::builder()
        .bbox(Rectangle::new(0.0, 0.0, EXTENT, EXTENT))
        .max_items(config.max_items)
        .max_depth(config.max_depth)
        .build()
        .expect("benchmark extent is valid");
    for (rect, item) in data {
        index.insert(*item, *rect);
    }
    index
}

/// 插入性能测试
fn bench_insert(c: &mut Criterion) {
    let config = BenchConfig::default();
    let test_data = generate_test_data(config.size, config.seed);

    c.bench_function("insert", |b| {
        b.iter(|| build_index(&config, &test_data));
    });
}

/// 单条目查询性能测试
fn bench_intersect_item(c: &mut Criterion) {
    let config = BenchConfig::default();
    let test_data = generate_test_data(config.size, config.seed);
    let index = build_index(&config, &test_data);

    c.bench_function("intersect_item", |b| {
        b.iter(|| {
            test_data
                .iter()
                .map(|(rect, _)| index.intersect(*rect).len())
                .sum::<usize>()
        });
    });
}

/// 区域查询性能测试
fn bench_intersect_area(c: &mut Criterion) {
    let config = BenchConfig::default();
    let test_data = generate_test_data(config.size, config.seed);
    let index = build_index(&config, &test_data);

    for (name, coverage) in [("intersect_0.1%", 0.1), ("intersect_1%", 1.0)] {
        let queries = generate_query_rects(100, coverage, config.seed);

        c.bench_function(name, |b| {
            b.iter(|| {
                queries
                    .iter()
                    .map(|query| index.intersect(*query).len())
                    .sum::<usize>()
            });
        });
    }
}

/// 删除全部数据性能测试
fn bench_remove_all(c: &mut Criterion) {
    let config = BenchConfig::default();
    let test_data = generate_test_data(config.size, config.seed);

    c.bench_function("remove_all", |b| {
        b.iter_batched(
            || build_index(&config, &test_data),
            |mut index| {
                for (rect, item) in &test_data {
                    index.remove(item, *rect).expect("entry was inserted");
                }
                index
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_intersect_item,
    bench_intersect_area,
    bench_remove_all
);
criterion_main!(benches);
