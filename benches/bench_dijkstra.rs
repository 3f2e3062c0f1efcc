use std::cmp::Reverse;
use std::hash::BuildHasherDefault;
use std::ops::Index;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rustc_hash::FxHasher;

#[derive(Eq, PartialEq, Debug, Hash, Copy, Clone, Ord, PartialOrd)]
struct Position {
    row: usize,
    column: usize,
}

struct Field {
    rows: usize,
    columns: usize,
    costs: Box<[u32]>,
}

impl Index<Position> for Field {
    type Output = u32;

    fn index(&self, index: Position) -> &Self::Output {
        &self.costs[self.columns * index.row + index.column]
    }
}

impl Field {
    fn cell(&self, pos: Position) -> usize {
        self.columns * pos.row + pos.column
    }
}

// Moves up, down, left and right
fn for_each_neighbour(pos: Position, field: &Field, mut f: impl FnMut(Position)) {
    if pos.row > 0 {
        f(Position {
            row: pos.row - 1,
            ..pos
        });
    }
    if pos.row + 1 < field.rows {
        f(Position {
            row: pos.row + 1,
            ..pos
        });
    }
    if pos.column > 0 {
        f(Position {
            column: pos.column - 1,
            ..pos
        });
    }
    if pos.column + 1 < field.columns {
        f(Position {
            column: pos.column + 1,
            ..pos
        });
    }
}

mod std_dijkstra {
    use super::*;
    use std::collections::BinaryHeap;

    // Lazy deletion: stale entries stay in heap and are skipped when popped.
    pub(crate) fn find_distance(start: Position, target: Position, field: &Field) -> Option<u32> {
        let mut best = vec![u32::MAX; field.rows * field.columns];
        let mut available = BinaryHeap::new();
        best[field.cell(start)] = 0;
        available.push(Reverse((0u32, start)));
        while let Some(Reverse((distance, current))) = available.pop() {
            if current == target {
                return Some(distance);
            }
            if distance > best[field.cell(current)] {
                continue;
            }
            for_each_neighbour(current, field, |next| {
                let candidate = distance + field[next];
                let known = &mut best[field.cell(next)];
                if candidate < *known {
                    *known = candidate;
                    available.push(Reverse((candidate, next)));
                }
            });
        }
        None
    }
}

mod indexed_dijkstra {
    use super::*;
    use indexed_priority_queue::{IndexedPriorityQueue, MinComparator};
    use std::hash::BuildHasher;

    pub(crate) fn find_distance<S: BuildHasher + Default>(
        start: Position,
        target: Position,
        field: &Field,
    ) -> Option<u32> {
        let mut done = vec![false; field.rows * field.columns];
        let mut available: IndexedPriorityQueue<Position, u32, MinComparator, S> =
            IndexedPriorityQueue::with_comparator_and_hasher(MinComparator, S::default());
        available.push(start, 0).unwrap();
        while let Ok((current, distance)) = available.pop() {
            if current == target {
                return Some(distance);
            }
            done[field.cell(current)] = true;
            for_each_neighbour(current, field, |next| {
                if done[field.cell(next)] {
                    return;
                }
                let candidate = distance + field[next];
                match available.get_value(&next) {
                    None => available.push(next, candidate).unwrap(),
                    Some(&known) if candidate < known => {
                        available.change_value(&next, candidate).unwrap();
                    }
                    Some(_) => {}
                }
            });
        }
        None
    }
}

fn generate_field(size: usize) -> Field {
    const SEED: u64 = 546579634698731;
    use rand::prelude::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let dist = rand::distributions::Uniform::new_inclusive(1u32, 10u32);
    let vec: Vec<u32> = (0..size * size).map(|_| rng.sample(dist)).collect();
    Field {
        columns: size,
        rows: size,
        costs: vec.into(),
    }
}

fn find_distance_benchmark(c: &mut Criterion) {
    type FxState = BuildHasherDefault<FxHasher>;
    type StdState = std::collections::hash_map::RandomState;

    let field = generate_field(100);
    let start = Position { row: 0, column: 0 };
    // Both queues must agree before measuring them.
    for &end in &[10, 99] {
        let stop_at = Position {
            row: end,
            column: end,
        };
        assert_eq!(
            std_dijkstra::find_distance(start, stop_at, &field),
            indexed_dijkstra::find_distance::<StdState>(start, stop_at, &field)
        );
    }

    let mut group = c.benchmark_group("Dijkstra");
    for &end in &[1, 5, 10, 25, 45, 49, 99] {
        let stop_at = Position {
            row: end,
            column: end,
        };
        group.bench_with_input(
            BenchmarkId::new("STD BinaryHeap", end),
            &(start, stop_at, &field),
            |b, &i| b.iter(|| std_dijkstra::find_distance(i.0, i.1, i.2)),
        );
        group.bench_with_input(
            BenchmarkId::new("Indexed", end),
            &(start, stop_at, &field),
            |b, &i| b.iter(|| indexed_dijkstra::find_distance::<StdState>(i.0, i.1, i.2)),
        );
        group.bench_with_input(
            BenchmarkId::new("Indexed FxHash", end),
            &(start, stop_at, &field),
            |b, &i| b.iter(|| indexed_dijkstra::find_distance::<FxState>(i.0, i.1, i.2)),
        );
    }
    group.finish();
}

criterion_group!(benches, find_distance_benchmark);
criterion_main!(benches);
