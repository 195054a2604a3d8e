//! Drop-target resolution.
//!
//! Each column that can receive a dragged task registers a rectangle. While
//! a drag is in progress the pointer position is resolved against those
//! rectangles to pick the hovered column.
//!
//! # Resolution Rule
//!
//! Only regions that contain the pointer are candidates. Among them the
//! region whose corners are, on average, closest to the pointer wins. Equal
//! distances go to the region registered first, which matches column
//! display order. A pointer outside every region resolves to nothing.

use tack_protocol::ColumnKey;

use crate::geometry::{Point, Rect};

/// The registered drop regions, in registration order.
///
/// # Examples
///
/// ```
/// use tack_engine::{DropRegions, Point, Rect};
///
/// let mut regions = DropRegions::new();
/// regions.register("todo", Rect::new(0.0, 0.0, 30.0, 20.0));
/// regions.register("done", Rect::new(30.0, 0.0, 30.0, 20.0));
///
/// assert_eq!(regions.resolve(Point::new(40.0, 5.0)).unwrap(), "done");
/// assert!(regions.resolve(Point::new(100.0, 5.0)).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DropRegions {
    regions: Vec<(ColumnKey, Rect)>,
}

impl DropRegions {
    /// Creates an empty set of regions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the region for a column.
    ///
    /// Registering a column again replaces its rectangle in place; the
    /// column keeps its original position in the tie-break order.
    pub fn register(&mut self, key: impl Into<ColumnKey>, rect: Rect) {
        let key = key.into();
        match self.regions.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, existing)) => *existing = rect,
            None => self.regions.push((key, rect)),
        }
    }

    /// Removes the region for a column, returning `true` if one existed.
    pub fn unregister(&mut self, key: &str) -> bool {
        let before = self.regions.len();
        self.regions.retain(|(existing, _)| existing.as_str() != key);
        self.regions.len() < before
    }

    /// Removes every region.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Returns the rectangle registered for a column.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(existing, _)| existing.as_str() == key)
            .map(|(_, rect)| *rect)
    }

    /// Returns the number of registered regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns `true` if no region is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterates over the regions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ColumnKey, &Rect)> {
        self.regions.iter().map(|(key, rect)| (key, rect))
    }

    /// Picks the column under `point`, if any.
    #[must_use]
    pub fn resolve(&self, point: Point) -> Option<&ColumnKey> {
        let mut best: Option<(&ColumnKey, f64)> = None;
        for (key, rect) in &self.regions {
            if !rect.contains(point) {
                continue;
            }
            let distance = rect.corner_distance(point);
            if best.is_none_or(|(_, closest)| distance < closest) {
                best = Some((key, distance));
            }
        }
        best.map(|(key, _)| key)
    }
}
