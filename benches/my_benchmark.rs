use env_logger::Env;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use grid_astar::{prelude::*, search::OpenSet};
use log::warn;
use nanorand::{Rng, WyRand};

struct Map {
    grid: Grid,
    start: Point,
    goal: Point,
}

impl Map {
    pub fn new(width: usize, height: usize) -> Self {
        Map {
            grid: Grid::open(width, height),
            start: (width / 20, height / 10),
            goal: (width - width / 10, height - height / 3),
        }
    }

    pub fn new_random(width: usize, height: usize) -> Self {
        let mut rng = WyRand::new_seed(4);
        let mut map = Map::new(width, height);
        let (start, goal) = (map.start, map.goal);
        // 20% obstacles, keeping the endpoints free
        map.grid = Grid::from_fn(width, height, |p| {
            p != start && p != goal && rng.generate_range(0..10u8) < 2
        });
        map
    }

    fn find_path(&self) -> Result<Path<Point>, SearchError> {
        self.grid.find_path(self.start, self.goal)
    }
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to debug or trace to see every search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_find_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("Find Path");

    // Log to stdout
    init();

    for map_size in [128, 512] {
        let (width, height) = (map_size, map_size);

        let map = Map::new(width, height);
        let id = format!("Uniform Map, Map Size: ({}, {})", width, height);
        group.bench_function(&id, |b| b.iter(|| black_box(map.find_path())));

        let map = Map::new_random(width, height);
        if map.find_path().is_err() {
            warn!("no Path on the random {0}x{0} map, benchmarking a failing search", map_size);
        }
        let id = format!("Random Map, Map Size: ({}, {})", width, height);
        group.bench_function(&id, |b| b.iter(|| black_box(map.find_path())));
    }

    // For large maps, use a smaller sample size so they don't take 30+s per run.
    group.sample_size(10);

    let (width, height) = (1024, 1024);
    let map = Map::new_random(width, height);
    let id = format!("Large Random Map, Map Size: ({}, {})", width, height);
    group.bench_function(&id, |b| b.iter(|| black_box(map.find_path())));

    let config = SearchConfig::with_max_expansions(10_000);
    let id = format!(
        "Large Random Map, Expansion Limit, Map Size: ({}, {})",
        width, height
    );
    group.bench_function(&id, |b| {
        b.iter(|| black_box(map.grid.find_path_with_config(map.start, map.goal, config)))
    });
}

fn bench_open_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("Open Set");

    let mut rng = WyRand::new_seed(9);
    let costs: Vec<usize> = (0..10_000).map(|_| rng.generate_range(0..1000usize)).collect();

    group.bench_function("push and pop 10000", |b| {
        b.iter(|| {
            let mut open = OpenSet::with_capacity(costs.len());
            for (id, &f) in costs.iter().enumerate() {
                open.push(id, f);
            }
            while let Some(id) = open.pop() {
                black_box(id);
            }
        })
    });

    group.bench_function("decrease key 10000", |b| {
        b.iter(|| {
            let mut open = OpenSet::with_capacity(costs.len());
            for (id, &f) in costs.iter().enumerate() {
                open.push(id, f + 1000);
            }
            for (id, &f) in costs.iter().enumerate() {
                open.decrease_key(id, f);
            }
            black_box(open.len())
        })
    });
}

criterion_group!(benches, bench_find_path, bench_open_set);
criterion_main!(benches);
