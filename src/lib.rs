mod error;
mod heap;
mod queue;

#[cfg(test)]
mod testing;

pub use error::EmptyQueueError;
pub use heap::{sort, BinaryHeap};
pub use queue::{drain_sorted, Queue};

#[cfg(test)]
fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

#[test]
fn bench_heap() {
    use rand::prelude::*;
    use std::cmp::Reverse;

    testing::init_test();
    let mut rng = SmallRng::seed_from_u64(1);

    const N: usize = 1 << 18;

    let values: Vec<i64> = (0..N).map(|_| rng.gen()).collect();
    let mut expected = values.clone();
    expected.sort_unstable();

    let mut std_heap = std::collections::BinaryHeap::with_capacity(N);
    bench("std::collections::BinaryHeap::push", 1, || {
        for &x in values.iter() {
            std_heap.push(Reverse(x));
        }
    });
    bench("std::collections::BinaryHeap::pop", 1, || {
        for &x in expected.iter() {
            assert_eq!(std_heap.pop(), Some(Reverse(x)));
        }
    });
    println!();

    let mut heap = BinaryHeap::with_capacity(N);
    bench("BinaryHeap::push", 4, || {
        for (len, &x) in values.iter().enumerate() {
            assert_eq!(heap.len(), len);
            heap.push(x);
        }
    });
    bench("BinaryHeap::pop", 4, || {
        for &x in expected.iter() {
            assert_eq!(heap.pop(), Ok(x));
        }
    });
    assert_eq!(heap.pop(), Err(EmptyQueueError));
    println!();

    let mut std_sorted = values.clone();
    bench("slice::sort_unstable", 3, || std_sorted.sort_unstable());
    let mut sorted = values.clone();
    bench("sort", 5, || sort(&mut sorted));
    assert_eq!(sorted, std_sorted);
}
