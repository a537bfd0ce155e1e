//! Point store abstraction and the in-memory reference implementation.
//!
//! The benchmark treats the store as an external collaborator: it only
//! depends on the two query contracts below, not on how the data is held.

use std::collections::BTreeMap;

use geo::Point;

use crate::error::Result;
use crate::spatial;
use crate::types::Item;

/// Read-side contract the query strategies are built on.
///
/// Both queries return items in ascending id order. Implementations signal
/// failures through [`crate::ProxibenchError::StoreUnavailable`]; errors
/// propagate to the caller unchanged.
pub trait PointStore {
    /// Exact great-circle filter evaluated over the full dataset.
    ///
    /// Models a full scan with a server-side distance predicate; no bounding
    /// box is involved, so no result outside the radius is possible.
    fn scan_all_exact(&self, center: &Point, radius_meters: f64) -> Result<Vec<Item>>;

    /// Inclusive rectangular range filter over the (lat, lng) window.
    ///
    /// No distance awareness: returns every item inside the box, including
    /// those outside the inscribed circle.
    fn range_query(&self, bbox: &geo::Rect) -> Result<Vec<Item>>;

    /// Number of stored items.
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// In-memory point store backed by a `BTreeMap` keyed on item id.
///
/// Map iteration order gives ascending ids for free, matching the ordering
/// contract of both query modes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: BTreeMap<i64, Item>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut store = Self::new();
        for item in items {
            store.insert(item);
        }
        store
    }

    /// Insert an item, replacing any existing item with the same id.
    pub fn insert(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.id, item)
    }

    pub fn get(&self, id: i64) -> Option<&Item> {
        self.items.get(&id)
    }
}

impl PointStore for MemoryStore {
    fn scan_all_exact(&self, center: &Point, radius_meters: f64) -> Result<Vec<Item>> {
        Ok(self
            .items
            .values()
            .filter(|item| spatial::is_within_radius(center, &item.position(), radius_meters))
            .cloned()
            .collect())
    }

    fn range_query(&self, bbox: &geo::Rect) -> Result<Vec<Item>> {
        Ok(self
            .items
            .values()
            .filter(|item| spatial::point_in_bbox(bbox, &item.position()))
            .cloned()
            .collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.items.len())
    }
}
