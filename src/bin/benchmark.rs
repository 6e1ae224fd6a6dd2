use std::cmp::Reverse;
use std::collections::BinaryHeap as StdBinaryHeap;
use std::time::{Duration, Instant};

use ordered_float::OrderedFloat;
use prio_heap::{BinaryHeap, PriorityQueue};
use rand::Rng;

// Random priorities paired with their insertion index as payload
fn generate_random_records(count: usize) -> Vec<(usize, OrderedFloat<f64>)> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| (i, OrderedFloat(rng.gen_range(0.0..1_000.0))))
        .collect()
}

// Inserts everything, then extracts everything; returns the elapsed time
fn benchmark_heap(records: &[(usize, OrderedFloat<f64>)]) -> Duration {
    let start = Instant::now();
    let mut heap = BinaryHeap::max();
    for &(_, priority) in records {
        heap.insert(priority);
    }
    let mut extracted = 0;
    while heap.extract_root().is_some() {
        extracted += 1;
    }
    let duration = start.elapsed();
    assert_eq!(extracted, records.len());
    duration
}

fn benchmark_priority_queue(records: &[(usize, OrderedFloat<f64>)]) -> Duration {
    let start = Instant::now();
    let mut queue = PriorityQueue::with_capacity(records.len());
    for &(value, priority) in records {
        queue.enqueue(value, priority);
    }
    let mut extracted = 0;
    while queue.dequeue().is_some() {
        extracted += 1;
    }
    let duration = start.elapsed();
    assert_eq!(extracted, records.len());
    duration
}

fn benchmark_std(records: &[(usize, OrderedFloat<f64>)]) -> Duration {
    let start = Instant::now();
    let mut heap = StdBinaryHeap::with_capacity(records.len());
    for &(value, priority) in records {
        heap.push(Reverse((priority, value)));
    }
    let mut extracted = 0;
    while heap.pop().is_some() {
        extracted += 1;
    }
    let duration = start.elapsed();
    assert_eq!(extracted, records.len());
    duration
}

fn main() {
    env_logger::init();

    // Define input sizes to test
    let sizes = vec![1_000, 10_000, 100_000, 1_000_000];

    println!("=====================================================");
    println!("Benchmark: BinaryHeap / PriorityQueue vs std BinaryHeap");
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &sizes {
        println!("\nGenerating {} random records...", size);
        let records = generate_random_records(size);

        let heap_time = benchmark_heap(&records);
        let queue_time = benchmark_priority_queue(&records);
        let std_time = benchmark_std(&records);

        println!("  - BinaryHeap:      {:?}", heap_time);
        println!("  - PriorityQueue:   {:?}", queue_time);
        println!("  - std BinaryHeap:  {:?}", std_time);

        results.push((size, heap_time, queue_time, std_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15} | {:<10}",
        "Records", "Heap (ms)", "Queue (ms)", "std (ms)", "Queue/std"
    );
    println!("-----------------------------------------------------");

    for (size, heap_time, queue_time, std_time) in &results {
        let ratio = queue_time.as_secs_f64() / std_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<15} | {:<10.2}",
            size,
            heap_time.as_millis(),
            queue_time.as_millis(),
            std_time.as_millis(),
            ratio
        );
    }
}
