use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ordered_float::OrderedFloat;
use prio_heap::{BinaryHeap, PriorityQueue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_priorities(count: usize) -> Vec<OrderedFloat<f64>> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..count).map(|_| OrderedFloat(rng.gen_range(0.0..1_000.0))).collect()
}

fn bench_insert_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_extract");
    for &size in &[1_000usize, 10_000, 100_000] {
        let priorities = random_priorities(size);
        group.bench_with_input(BenchmarkId::new("binary_heap", size), &priorities, |b, priorities| {
            b.iter(|| {
                let mut heap = BinaryHeap::min();
                for &p in priorities {
                    heap.insert(p);
                }
                while let Some(p) = heap.extract_root() {
                    black_box(p);
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("priority_queue", size), &priorities, |b, priorities| {
            b.iter(|| {
                let mut queue = PriorityQueue::with_capacity(priorities.len());
                for (i, &p) in priorities.iter().enumerate() {
                    queue.enqueue(i, p);
                }
                while let Some(record) = queue.dequeue() {
                    black_box(record);
                }
            });
        });
    }
    group.finish();
}

fn bench_heapify(c: &mut Criterion) {
    let mut group = c.benchmark_group("heapify");
    for &size in &[1_000usize, 100_000] {
        let priorities = random_priorities(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &priorities, |b, priorities| {
            b.iter(|| {
                let heap = BinaryHeap::from_vec(priorities.clone(), prio_heap::MaxFirst);
                black_box(heap.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert_extract, bench_heapify);
criterion_main!(benches);
