use std::f64::consts::PI;

pub mod layout;
pub mod model;
pub mod palette;

pub use layout::{Layout, PlacedCategory, PlacedEntry, Point, Viewport, layout};
pub use model::{Category, CategoryId, Dataset, Entry, EntryId, Selection};

pub const NARROW_BREAKPOINT: f64 = 768.0;
pub const NARROW_CENTER_Y: f64 = 250.0;
pub const WIDE_CENTER_Y: f64 = 300.0;

// Category ring: fixed on narrow viewports, grows slowly with the number of
// categories on wide ones so the ring fills out without leaving the viewport.
pub const NARROW_RING_RADIUS: f64 = 120.0;
pub const WIDE_RING_BASE: f64 = 180.0;
pub const WIDE_RING_MAX: f64 = 230.0;
pub const RING_GROWTH_PER_CATEGORY: f64 = 5.0;

// Entry ring: shrinks in steps as a category fills up, bounding visual density.
pub const NARROW_ENTRY_RADIUS: f64 = 80.0;
pub const WIDE_ENTRY_BASE: f64 = 150.0;
pub const WIDE_ENTRY_MAX: f64 = 120.0;
pub const ENTRY_SHRINK_STEP: f64 = 10.0;
pub const ENTRY_SHRINK_BUCKET: usize = 5;
// Floor so oversized categories cannot push the ring radius to zero.
pub const MIN_ENTRY_RADIUS: f64 = ENTRY_SHRINK_STEP;

// Sparse categories still get at least this many angular slots, so two or
// three entries don't bunch at extreme angles.
pub const MIN_ENTRY_SLOTS: usize = 6;

pub const TAU: f64 = 2.0 * PI;
