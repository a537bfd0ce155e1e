//! Random dataset seeding for benchmark runs.
//!
//! Generates uniformly distributed points over a rectangular region, with
//! coordinates rounded to 6 decimal places (~0.1 m resolution).

use rand::Rng;

use crate::error::{ProxibenchError, Result};
use crate::store::MemoryStore;
use crate::types::Item;

/// Rectangular seeding region in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedRegion {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

/// Seoul metropolitan area, the default benchmark region.
pub const SEOUL_REGION: SeedRegion = SeedRegion {
    lat_min: 37.45,
    lat_max: 37.7,
    lng_min: 126.8,
    lng_max: 127.1,
};

impl Default for SeedRegion {
    fn default() -> Self {
        SEOUL_REGION
    }
}

impl SeedRegion {
    pub fn validate(&self) -> Result<()> {
        if self.lat_min >= self.lat_max || self.lng_min >= self.lng_max {
            return Err(ProxibenchError::InvalidInput(format!(
                "seed region bounds out of order: lat [{}, {}], lng [{}, {}]",
                self.lat_min, self.lat_max, self.lng_min, self.lng_max
            )));
        }
        if !(-90.0..=90.0).contains(&self.lat_min)
            || !(-90.0..=90.0).contains(&self.lat_max)
            || !(-180.0..=180.0).contains(&self.lng_min)
            || !(-180.0..=180.0).contains(&self.lng_max)
        {
            return Err(ProxibenchError::InvalidInput(
                "seed region outside the lat/lng domain".to_string(),
            ));
        }
        Ok(())
    }
}

/// Fill `store` with `count` random points over `region`, ids 1..=count.
///
/// Coordinates are rounded to 6 decimal places (~0.1 m). Takes the RNG as a
/// parameter so callers can seed it for reproducible datasets.
pub fn seed_random<R: Rng>(
    store: &mut MemoryStore,
    count: usize,
    region: &SeedRegion,
    rng: &mut R,
) -> Result<usize> {
    region.validate()?;

    for id in 1..=count as i64 {
        let lat = round6(rng.random_range(region.lat_min..region.lat_max));
        let lng = round6(rng.random_range(region.lng_min..region.lng_max));
        store.insert(Item::with_label(id, lat, lng, format!("seed:{}", id)));
    }

    Ok(count)
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}
