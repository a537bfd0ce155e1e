//! CLI entry point: seed an in-memory store and run the default benchmark.
//!
//! Usage: `proxibench [row_count]` (default 10000 rows). Set `RUST_LOG=debug`
//! to see the computed bounding boxes.

use proxibench::{
    BenchConfig, BenchmarkRunner, MemoryStore, ProximityQueryService, SEOUL_REGION, seed_random,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let row_count = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .map_err(|_| format!("invalid row count: {arg}"))?,
        None => 10_000,
    };

    let mut store = MemoryStore::new();
    let mut rng = rand::rng();
    seed_random(&mut store, row_count, &SEOUL_REGION, &mut rng)?;
    log::info!("seeded {} points over the Seoul region", row_count);

    let runner = BenchmarkRunner::new(
        ProximityQueryService::new(store),
        BenchConfig::default(),
    );
    let report = runner.run()?;

    print!("{report}");

    if !report.all_verified() {
        return Err("benchmark finished with correctness defects".into());
    }
    Ok(())
}
