// Decorator chains: cost of walking boxed layers as the chain grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use design_patterns::decorator::{build_order, Pizza, ToppingKind};

fn benchmark_chain_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("decorator_chain");

    for depth in [1usize, 8, 64] {
        let toppings: Vec<ToppingKind> =
            ToppingKind::ALL.iter().copied().cycle().take(depth).collect();
        let pizza = build_order(&toppings).pizza;

        group.bench_with_input(BenchmarkId::new("cost", depth), &pizza, |b, pizza| {
            b.iter(|| black_box(pizza).cost())
        });

        group.bench_with_input(BenchmarkId::new("description", depth), &pizza, |b, pizza| {
            b.iter(|| black_box(pizza).description())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_chain_depth);
criterion_main!(benches);
