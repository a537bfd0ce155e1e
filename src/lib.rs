//! Benchmark harness comparing two geographic proximity search strategies:
//! an exact full-scan distance filter and a bounding-box range pre-filter
//! with exact refinement.
//!
//! ```rust
//! use proxibench::{
//!     BenchConfig, BenchmarkRunner, Item, MemoryStore, ProximityQueryService,
//! };
//!
//! let store = MemoryStore::with_items([Item::new(1, 37.5665, 126.9780)]);
//! let runner = BenchmarkRunner::new(ProximityQueryService::new(store), BenchConfig::default());
//!
//! let report = runner.run()?;
//! assert!(report.all_verified());
//! println!("{report}");
//! # Ok::<(), proxibench::ProxibenchError>(())
//! ```

pub mod benchmark;
pub mod error;
pub mod seed;
pub mod service;
pub mod spatial;
pub mod store;
pub mod types;

pub use benchmark::{
    BenchConfig, BenchmarkReport, BenchmarkRunner, DEFAULT_TRIALS, Strategy, StrategyReport,
    TrialRecord,
};
pub use error::{ProxibenchError, Result};
pub use seed::{SEOUL_REGION, SeedRegion, seed_random};
pub use service::ProximityQueryService;
pub use store::{MemoryStore, PointStore};
pub use types::{Item, Query};

pub use geo::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{
        BenchConfig, BenchmarkReport, BenchmarkRunner, Item, MemoryStore, Point, PointStore,
        ProximityQueryService, ProxibenchError, Query, Result, Strategy,
    };

    pub use crate::spatial::{circle_bounding_box, haversine_distance, is_within_radius};
}
