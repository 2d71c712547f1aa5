//! Benchmark for the bridge call path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hashbridge::{BridgeAdapter, BridgeRegistry, Sha256Adapter, SHA256_OP};

fn bench_adapter_call(c: &mut Criterion) {
    let adapter = Sha256Adapter::new();
    let input = "benchmark input data for the sha256 adapter";

    c.bench_function("adapter_call", |b| {
        b.iter(|| adapter.call(black_box(Some(input))))
    });
}

fn bench_registry_invoke(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let registry = BridgeRegistry::with_defaults();

    c.bench_function("registry_invoke", |b| {
        b.iter(|| {
            rt.block_on(registry.invoke(SHA256_OP, black_box(Some("benchmark".to_string()))))
        })
    });
}

criterion_group!(benches, bench_adapter_call, bench_registry_invoke);
criterion_main!(benches);
