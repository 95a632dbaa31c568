use std::{collections::VecDeque, hint::black_box, time::Duration};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lineal::{ForwardList, IndexedList, Stack};
use rand::{rngs::SmallRng, Rng, SeedableRng};

const SIZES: [usize; 3] = [1_000usize, 10_000usize, 100_000usize];
const RANDOM_ACCESSES: usize = 1_000;

fn fill_indexed(n: usize) -> IndexedList<i32> {
    let mut list = IndexedList::new();
    for i in 0..n as i32 {
        list.append(i);
    }
    list
}

fn fill_forward(n: usize) -> ForwardList<i32> {
    let mut list = ForwardList::new();
    for i in 0..n as i32 {
        list.append(i);
    }
    list
}

// Доступ по индексу: голова, середина, хвост (в т.ч. отрицательный индекс)
fn bench_value_at_positions(c: &mut Criterion) {
    let mut g = c.benchmark_group("value_at_position");
    g.measurement_time(Duration::from_secs(5));

    for &size in SIZES.iter() {
        let indexed = fill_indexed(size);
        let forward = fill_forward(size);
        let positions = [
            ("head", 0isize),
            ("middle", size as isize / 2),
            ("near_tail", -2isize),
        ];

        for (label, index) in positions {
            g.bench_with_input(
                BenchmarkId::new(format!("IndexedList/{label}"), size),
                &index,
                |b, &i| b.iter(|| black_box(indexed.value_at(black_box(i)))),
            );
            g.bench_with_input(
                BenchmarkId::new(format!("ForwardList/{label}"), size),
                &index,
                |b, &i| b.iter(|| black_box(forward.value_at(black_box(i)))),
            );
        }
    }
    g.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut g = c.benchmark_group("value_at_random");
    g.measurement_time(Duration::from_secs(5));

    for &size in SIZES.iter() {
        let indexed = fill_indexed(size);
        let forward = fill_forward(size);
        let vec: Vec<i32> = (0..size as i32).collect();
        let mut rng = SmallRng::seed_from_u64(42);
        let indices: Vec<isize> = (0..RANDOM_ACCESSES)
            .map(|_| rng.gen_range(-(size as isize)..size as isize))
            .collect();

        g.throughput(Throughput::Elements(RANDOM_ACCESSES as u64));
        g.bench_with_input(BenchmarkId::new("IndexedList", size), &indices, |b, idx| {
            b.iter(|| {
                for &i in idx {
                    black_box(indexed.value_at(i).ok());
                }
            })
        });
        g.bench_with_input(BenchmarkId::new("ForwardList", size), &indices, |b, idx| {
            b.iter(|| {
                for &i in idx {
                    black_box(forward.value_at(i).ok());
                }
            })
        });
        g.bench_with_input(BenchmarkId::new("Vec", size), &indices, |b, idx| {
            b.iter(|| {
                for &i in idx {
                    let pos = if i < 0 { size as isize + i } else { i } as usize;
                    black_box(vec.get(pos));
                }
            })
        });
    }
    g.finish();
}

fn bench_append_pop(c: &mut Criterion) {
    let mut g = c.benchmark_group("append_then_pop_front");

    for &size in SIZES.iter() {
        g.throughput(Throughput::Elements(size as u64));
        g.bench_with_input(BenchmarkId::new("IndexedList", size), &size, |b, &n| {
            b.iter(|| {
                let mut list = fill_indexed(n);
                while let Ok(v) = list.pop(0) {
                    black_box(v);
                }
            })
        });
        g.bench_with_input(BenchmarkId::new("ForwardList", size), &size, |b, &n| {
            b.iter(|| {
                let mut list = fill_forward(n);
                while let Ok(v) = list.shift() {
                    black_box(v);
                }
            })
        });
        g.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |b, &n| {
            b.iter(|| {
                let mut d: VecDeque<i32> = (0..n as i32).collect();
                while let Some(v) = d.pop_front() {
                    black_box(v);
                }
            })
        });
    }
    g.finish();
}

fn bench_stack(c: &mut Criterion) {
    let mut g = c.benchmark_group("stack_push_pop");

    for &size in SIZES.iter() {
        g.throughput(Throughput::Elements(size as u64));
        g.bench_with_input(BenchmarkId::new("fixed", size), &size, |b, &n| {
            b.iter(|| {
                let mut stack = Stack::fixed(n);
                for i in 0..n {
                    let _ = black_box(stack.push(i));
                }
                while let Ok(v) = stack.pop() {
                    black_box(v);
                }
            })
        });
        g.bench_with_input(BenchmarkId::new("dynamic", size), &size, |b, &n| {
            b.iter(|| {
                let mut stack = Stack::dynamic();
                for i in 0..n {
                    let _ = black_box(stack.push(i));
                }
                while let Ok(v) = stack.pop() {
                    black_box(v);
                }
            })
        });
    }
    g.finish();
}

criterion_group!(
    benches,
    bench_value_at_positions,
    bench_random_access,
    bench_append_pop,
    bench_stack
);
criterion_main!(benches);
