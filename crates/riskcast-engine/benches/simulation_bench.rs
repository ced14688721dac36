//! Simulation throughput benchmark.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rustc_hash::FxHashMap;

use riskcast_core::types::{Dataset, DistributionSpec, ModelConfig, ModelType, Value};
use riskcast_engine::SimulationRunner;

fn fixture() -> (Dataset, ModelConfig) {
    let columns = vec!["y".to_string(), "a".to_string(), "b".to_string()];
    let rows = (0..1_000)
        .map(|i| {
            let mut row: FxHashMap<String, Value> = FxHashMap::default();
            row.insert("y".into(), Value::Number(i as f64));
            row.insert("a".into(), Value::Number(i as f64 * 0.5));
            row.insert("b".into(), Value::Number(100.0 - i as f64 * 0.1));
            row
        })
        .collect();
    let dataset = Dataset::new(columns, rows);

    let mut distributions = FxHashMap::default();
    distributions.insert(
        "a".to_string(),
        DistributionSpec::Normal { mean: 250.0, std: 40.0 },
    );
    distributions.insert(
        "b".to_string(),
        DistributionSpec::Triangular { min: 0.0, mode: 50.0, max: 100.0 },
    );

    let config = ModelConfig {
        target_variable: "y".into(),
        input_variables: vec!["a".into(), "b".into()],
        uncertain_variables: vec!["a".into(), "b".into()],
        distributions,
        coefficients: FxHashMap::default(),
        model_type: ModelType::Linear,
        num_simulations: 100_000,
    };
    (dataset, config)
}

fn bench_simulation(c: &mut Criterion) {
    let (dataset, config) = fixture();
    let runner = SimulationRunner::new().with_seed(42);

    c.bench_function("simulate_100k_trials", |b| {
        b.iter(|| {
            let result = runner.run(black_box(&dataset), black_box(&config)).unwrap();
            black_box(result.outcomes.len())
        })
    });
}

criterion_group!(benches, bench_simulation);
criterion_main!(benches);
