use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use baskets::{generate_association_rules, mine_frequent_patterns};

/// Generate synthetic transaction data.
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
fn generate_transactions(
    num_transactions: usize,
    num_items: u32,
    avg_transaction_size: usize,
) -> Vec<Vec<u32>> {
    let mut rng = rand::thread_rng();

    (0..num_transactions)
        .map(|_| {
            let random_factor: f64 = rng.r#gen();
            let size = ((avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize)
                .max(1)
                .min(num_items as usize);

            let mut transaction: Vec<u32> =
                (0..size).map(|_| rng.gen_range(0..num_items)).collect();
            transaction.sort_unstable();
            transaction.dedup();
            transaction
        })
        .collect()
}

/// Benchmark mining with different dataset sizes
fn bench_mining_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("mining_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
        ("xlarge_5000tx", 5000, 100, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size);
        let support = (num_tx / 10) as u64;

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &transactions,
            |b, tx| {
                b.iter(|| mine_frequent_patterns(black_box(tx), black_box(support)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark mining with different support thresholds
fn bench_mining_support_thresholds(c: &mut Criterion) {
    let mut group = c.benchmark_group("mining_support_thresholds");

    let transactions = generate_transactions(1000, 50, 10);

    for support in [50u64, 100, 200, 300, 500] {
        group.bench_with_input(
            BenchmarkId::from_parameter(support),
            &support,
            |b, &support| {
                b.iter(|| {
                    mine_frequent_patterns(black_box(&transactions), black_box(support)).unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark rule generation over a pre-mined pattern map
fn bench_rule_generation(c: &mut Criterion) {
    let transactions = generate_transactions(1000, 30, 8);
    let patterns = mine_frequent_patterns(&transactions, 50).unwrap();

    c.bench_function("rule_generation", |b| {
        b.iter(|| generate_association_rules(black_box(&patterns), black_box(0.5)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_mining_scaling,
    bench_mining_support_thresholds,
    bench_rule_generation
);
criterion_main!(benches);
