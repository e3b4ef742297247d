//! Radial placement of the client network: categories on a ring around the
//! viewport center, each category's entries on a smaller ring around it.
//! Pure and cheap (linear in total entry count); callers rerun it on every
//! resize rather than caching.

use super::model::{Category, Entry};
use super::palette::category_color;
use super::{
    ENTRY_SHRINK_BUCKET, ENTRY_SHRINK_STEP, MIN_ENTRY_RADIUS, MIN_ENTRY_SLOTS, NARROW_BREAKPOINT,
    NARROW_CENTER_Y, NARROW_ENTRY_RADIUS, NARROW_RING_RADIUS, RING_GROWTH_PER_CATEGORY, TAU,
    WIDE_CENTER_Y, WIDE_ENTRY_BASE, WIDE_ENTRY_MAX, WIDE_RING_BASE, WIDE_RING_MAX,
};
use palette::Srgba;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `radius` away from `self` at `angle` radians (0 = east).
    pub fn offset(self, radius: f64, angle: f64) -> Self {
        Self::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
}

impl Viewport {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    pub fn is_narrow(self) -> bool {
        self.width < NARROW_BREAKPOINT
    }

    pub fn center(self) -> Point {
        let y = if self.is_narrow() {
            NARROW_CENTER_Y
        } else {
            WIDE_CENTER_Y
        };
        Point::new(self.width / 2.0, y)
    }
}

pub fn ring_radius(viewport: Viewport, category_count: usize) -> f64 {
    if viewport.is_narrow() {
        NARROW_RING_RADIUS
    } else {
        (WIDE_RING_BASE + RING_GROWTH_PER_CATEGORY * category_count as f64).min(WIDE_RING_MAX)
    }
}

pub fn entry_radius(viewport: Viewport, entry_count: usize) -> f64 {
    if viewport.is_narrow() {
        NARROW_ENTRY_RADIUS
    } else {
        let shrunk =
            WIDE_ENTRY_BASE - ENTRY_SHRINK_STEP * (entry_count / ENTRY_SHRINK_BUCKET) as f64;
        shrunk.min(WIDE_ENTRY_MAX).max(MIN_ENTRY_RADIUS)
    }
}

/// Angular distance between neighbouring entries. Sparse categories are laid
/// out as if they had [`MIN_ENTRY_SLOTS`] members; the first entry always
/// sits due east of its category, with no phase offset.
pub fn entry_step(entry_count: usize) -> f64 {
    TAU / MIN_ENTRY_SLOTS.max(entry_count) as f64
}

#[derive(Debug, Clone)]
pub struct PlacedEntry<'a> {
    pub entry: &'a Entry,
    pub pos: Point,
}

#[derive(Debug, Clone)]
pub struct PlacedCategory<'a> {
    pub category: &'a Category,
    pub pos: Point,
    pub color: Srgba<f64>,
    pub entry_radius: f64,
    pub entries: Vec<PlacedEntry<'a>>,
}

#[derive(Debug, Clone)]
pub struct Layout<'a> {
    pub center: Point,
    pub ring_radius: f64,
    pub categories: Vec<PlacedCategory<'a>>,
}

impl Layout<'_> {
    /// Index pairs the view joins with connection paths: each category to the
    /// next, and the last back to the first to close the loop.
    pub fn connections(&self) -> Vec<(usize, usize)> {
        let n = self.categories.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n).map(|i| (i, (i + 1) % n)).collect()
    }
}

pub fn layout<'a>(categories: &'a [Category], viewport: Viewport) -> Layout<'a> {
    let center = viewport.center();
    let ring = ring_radius(viewport, categories.len());
    let count = categories.len();

    let placed = categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let angle = (i as f64 / count as f64) * TAU;
            let pos = center.offset(ring, angle);

            let entry_radius = entry_radius(viewport, category.entries.len());
            let step = entry_step(category.entries.len());
            let entries = category
                .entries
                .iter()
                .enumerate()
                .map(|(j, entry)| PlacedEntry {
                    entry,
                    pos: pos.offset(entry_radius, j as f64 * step),
                })
                .collect();

            PlacedCategory {
                category,
                pos,
                color: category_color(&category.id),
                entry_radius,
                entries,
            }
        })
        .collect();

    Layout {
        center,
        ring_radius: ring,
        categories: placed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Localized;
    use crate::network::model::{CategoryId, EntryId};
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn category(id: &str, entry_count: usize) -> Category {
        Category {
            id: CategoryId::new(id),
            name: Localized::new(id, id),
            entries: (0..entry_count)
                .map(|i| Entry {
                    id: EntryId::new(format!("{id}{i}")),
                    name: Localized::new(format!("{id} {i}"), format!("{id} {i}")),
                    logo: None,
                    description: None,
                })
                .collect(),
        }
    }

    fn categories(n: usize) -> Vec<Category> {
        (0..n).map(|i| category(&format!("cat{i}"), 3)).collect()
    }

    #[test]
    fn test_five_categories_wide_viewport() {
        let cats = categories(5);
        let result = layout(&cats, Viewport::new(1200.0));

        // min(230, 180 + 5 * 5) = 205, centered at (600, 300).
        assert_eq!(result.ring_radius, 205.0);
        assert_eq!(result.center, Point::new(600.0, 300.0));

        // Category 0 sits at angle 0, due east of the center.
        let first = &result.categories[0];
        assert!((first.pos.x - 805.0).abs() < EPS);
        assert!((first.pos.y - 300.0).abs() < EPS);

        // Category 2 of 5 sits at angle 4π/5.
        let third = &result.categories[2];
        let expected = result.center.offset(205.0, 4.0 * PI / 5.0);
        assert!((third.pos.x - expected.x).abs() < EPS);
        assert!((third.pos.y - expected.y).abs() < EPS);
    }

    #[test]
    fn test_categories_evenly_spaced_on_ring() {
        for n in [1, 2, 3, 5, 8, 12] {
            let cats = categories(n);
            let result = layout(&cats, Viewport::new(1024.0));

            for (i, placed) in result.categories.iter().enumerate() {
                let dist = placed.pos.distance(result.center);
                assert!(
                    (dist - result.ring_radius).abs() < EPS,
                    "category {i} of {n} off the ring: {dist}"
                );

                let angle = (placed.pos.y - result.center.y)
                    .atan2(placed.pos.x - result.center.x)
                    .rem_euclid(TAU);
                let expected = (i as f64 / n as f64) * TAU;
                assert!(
                    (angle - expected).rem_euclid(TAU).min(TAU - (angle - expected).rem_euclid(TAU))
                        < EPS,
                    "category {i} of {n} at angle {angle}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn test_ring_radius_is_viewport_monotonic() {
        let cats = categories(6);
        let narrow = layout(&cats, Viewport::new(320.0));
        let wide = layout(&cats, Viewport::new(1200.0));

        assert_eq!(narrow.ring_radius, NARROW_RING_RADIUS);
        assert!(wide.ring_radius >= narrow.ring_radius);
        assert_eq!(narrow.center.y, NARROW_CENTER_Y);
        assert_eq!(wide.center.y, WIDE_CENTER_Y);
    }

    #[test]
    fn test_ring_radius_capped() {
        let viewport = Viewport::new(1200.0);
        assert_eq!(ring_radius(viewport, 2), 190.0);
        assert_eq!(ring_radius(viewport, 10), 230.0);
        // Growth is capped at the maximum, however many categories exist.
        assert_eq!(ring_radius(viewport, 40), 230.0);
    }

    #[test]
    fn test_entry_radius_shrinks_with_count() {
        let viewport = Viewport::new(1200.0);

        // min(120, 150 - 10 * floor(count / 5))
        assert_eq!(entry_radius(viewport, 2), 120.0);
        assert_eq!(entry_radius(viewport, 3), 120.0);
        assert_eq!(entry_radius(viewport, 12), 120.0);
        assert_eq!(entry_radius(viewport, 20), 110.0);
        assert!(entry_radius(viewport, 12) <= entry_radius(viewport, 2));

        // Narrow viewports use the fixed smaller radius.
        assert_eq!(entry_radius(Viewport::new(320.0), 12), NARROW_ENTRY_RADIUS);
    }

    #[test]
    fn test_entry_radius_never_reaches_zero() {
        let viewport = Viewport::new(1200.0);
        assert_eq!(entry_radius(viewport, 500), MIN_ENTRY_RADIUS);
        assert!(entry_radius(viewport, 10_000) > 0.0);
    }

    #[test]
    fn test_entry_angular_spacing() {
        // Fewer than six entries still divide the circle into six slots.
        assert!((entry_step(3) - TAU / 6.0).abs() < EPS);
        assert!((entry_step(6) - TAU / 6.0).abs() < EPS);
        assert!((entry_step(9) - TAU / 9.0).abs() < EPS);

        let cats = vec![category("medical", 3)];
        let result = layout(&cats, Viewport::new(1200.0));
        let placed = &result.categories[0];
        assert_eq!(placed.entry_radius, 120.0);

        // Entry 0 due east of its category, entry 1 at 60 degrees.
        let east = placed.pos.offset(120.0, 0.0);
        assert!((placed.entries[0].pos.x - east.x).abs() < EPS);
        let at_60 = placed.pos.offset(120.0, PI / 3.0);
        assert!((placed.entries[1].pos.x - at_60.x).abs() < EPS);
        assert!((placed.entries[1].pos.y - at_60.y).abs() < EPS);

        // All entries lie on the entry ring around their parent.
        for entry in &placed.entries {
            assert!((entry.pos.distance(placed.pos) - 120.0).abs() < EPS);
        }
    }

    #[test]
    fn test_empty_inputs() {
        let result = layout(&[], Viewport::new(1200.0));
        assert!(result.categories.is_empty());
        assert!(result.connections().is_empty());

        let cats = vec![category("medical", 0)];
        let result = layout(&cats, Viewport::new(1200.0));
        assert!(result.categories[0].entries.is_empty());
    }

    #[test]
    fn test_connections_close_the_loop() {
        let cats = categories(5);
        let result = layout(&cats, Viewport::new(1200.0));
        assert_eq!(
            result.connections(),
            vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]
        );

        let one = layout(&cats[..1], Viewport::new(1200.0));
        assert!(one.connections().is_empty());
    }
}
