//! The two proximity query strategies under comparison.

use crate::error::Result;
use crate::spatial;
use crate::store::PointStore;
use crate::types::{Item, Query};

/// Executes proximity queries against a [`PointStore`] using either an
/// unindexed exact scan or a bounding-box pre-filter.
///
/// Both strategies answer the same semantic question and must return the
/// same id-ascending result set for the same query and dataset; the
/// benchmark runner verifies this property rather than assuming it.
#[derive(Debug)]
pub struct ProximityQueryService<S: PointStore> {
    store: S,
}

impl<S: PointStore> ProximityQueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Full-scan exact filter: the store evaluates the great-circle distance
    /// predicate against every item. No bounding box involved, so no result
    /// outside the radius is possible by construction.
    pub fn query_without_index(&self, query: &Query) -> Result<Vec<Item>> {
        query.validate()?;
        self.store.scan_all_exact(&query.center, query.radius_meters)
    }

    /// Two-phase composite-index strategy: coarse rectangular range filter,
    /// then exact great-circle refinement.
    ///
    /// The bounding box is a superset of the query circle, so the range query
    /// over-fetches; the refinement drops the false positives while keeping
    /// the store's id-ascending order intact.
    pub fn query_with_composite_index(&self, query: &Query) -> Result<Vec<Item>> {
        query.validate()?;

        let bbox = spatial::circle_bounding_box(&query.center, query.radius_meters);
        log::debug!(
            "bounding box for radius {} m: lat [{}, {}], lng [{}, {}]",
            query.radius_meters,
            bbox.min().y,
            bbox.max().y,
            bbox.min().x,
            bbox.max().x,
        );

        let mut candidates = self.store.range_query(&bbox)?;
        candidates.retain(|item| {
            spatial::is_within_radius(&query.center, &item.position(), query.radius_meters)
        });

        Ok(candidates)
    }
}
