//! Canonical hex regions: rings, spirals, and the standard map shapes.
//!
//! Shapes collect into a [`GridStore`], a set of hexes keyed by the mixed
//! 64-bit key from [`Hex::key`]. The enumeration loops never visit a hex
//! twice, so the store is purely a convenient deduplicated container.

use std::collections::{hash_map, HashMap};

use itertools::Itertools;

use crate::coordinate::Hex;
use crate::direction::Direction;
use crate::layout::Layout;

/// Rings and spirals grow outward from a center; a negative radius has no
/// geometric meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("region radius must be non-negative, not {0}")]
pub struct InvalidRadius(pub i32);

impl Hex {
    /// The hexes at distance exactly `radius` from `self`, in walk order.
    ///
    /// Radius 0 is just `self`. A positive radius yields exactly
    /// `6 * radius` hexes: the walk starts at the corner reached by
    /// stepping [`Direction::Southwest`] `radius` times, then traces each
    /// of the six sides in direction index order, collecting before every
    /// step, so it closes the loop without revisiting the start.
    pub fn ring(self, radius: i32) -> Result<Vec<Hex>, InvalidRadius> {
        if radius < 0 {
            return Err(InvalidRadius(radius));
        }
        if radius == 0 {
            return Ok(vec![self]);
        }
        let mut hexes = Vec::with_capacity(6 * radius as usize);
        let mut hex = self + Direction::Southwest.delta() * radius;
        for side in Direction::iter() {
            for _ in 0..radius {
                hexes.push(hex);
                hex += side;
            }
        }
        Ok(hexes)
    }

    /// `self` followed by the rings at radius 1 through `radius`, inside
    /// out. As a set this equals [`GridStore::hexagon`] with the same
    /// center and radius.
    pub fn spiral(self, radius: i32) -> Result<Vec<Hex>, InvalidRadius> {
        if radius < 0 {
            return Err(InvalidRadius(radius));
        }
        let mut hexes = Vec::with_capacity(1 + 3 * radius as usize * (radius as usize + 1));
        hexes.push(self);
        for ring_radius in 1..=radius {
            hexes.extend(self.ring(ring_radius)?);
        }
        Ok(hexes)
    }
}

/// A deduplicated set of hexes keyed by [`Hex::key`].
///
/// Inserting a hex that is already present is a no-op, which lets region
/// generators and callers union overlapping shapes without bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridStore {
    hexes: HashMap<u64, Hex>,
}

impl GridStore {
    pub fn new() -> Self {
        GridStore::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        GridStore {
            hexes: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a hex, returning whether it was newly added.
    pub fn insert(&mut self, hex: Hex) -> bool {
        self.hexes.insert(hex.key(), hex).is_none()
    }

    #[inline]
    pub fn contains(&self, hex: Hex) -> bool {
        self.hexes.contains_key(&hex.key())
    }

    /// Look a hex up by its mixed key.
    #[inline]
    pub fn get(&self, key: u64) -> Option<Hex> {
        self.hexes.get(&key).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Iterate the stored hexes in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Hex> + '_ {
        self.hexes.values().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.hexes.keys().copied()
    }

    /// Every hex in the inclusive axial rectangle from `(q1, r1)` to
    /// `(q2, r2)`. Empty when either upper bound is below its lower bound.
    ///
    /// The shape draws as a parallelogram under both orientations, so no
    /// layout is involved.
    pub fn parallelogram(q1: i32, r1: i32, q2: i32, r2: i32) -> GridStore {
        (q1..=q2)
            .cartesian_product(r1..=r2)
            .map(|(q, r)| Hex::from_axial(q, r))
            .collect()
    }

    /// A right triangle with `side + 1` hexes along each edge, anchored at
    /// the axial origin. The iteration bounds depend on the layout's
    /// orientation so the triangle sits flush against the drawn axes.
    pub fn triangle(layout: Layout, side: i32) -> GridStore {
        let mut store = GridStore::new();
        for q in 0..=side {
            let rows = if layout.is_pointy_top() {
                0..=side - q
            } else {
                side - q..=side
            };
            for r in rows {
                store.insert(Hex::from_axial(q, r));
            }
        }
        store
    }

    /// The filled hexagon of the given radius around `center`:
    /// `1 + 3 * radius * (radius + 1)` hexes, every one within grid
    /// distance `radius`. Empty for a negative radius.
    pub fn hexagon(center: Hex, radius: i32) -> GridStore {
        let mut store = GridStore::new();
        for q in -radius..=radius {
            let low = (-radius).max(-q - radius);
            let high = radius.min(-q + radius);
            for r in low..=high {
                store.insert(center + Hex::from_axial(q, r));
            }
        }
        store
    }

    /// The hexes whose offset view under `layout`'s orientation family
    /// fills the column range `left..=right` and row range `top..=bottom`.
    ///
    /// Each row (pointy) or column (flat) shifts its counterpart range by
    /// half its index, arithmetic-shifted so negative indices floor the
    /// same way, keeping the drawn region visually rectangular.
    pub fn rectangle(layout: Layout, left: i32, right: i32, top: i32, bottom: i32) -> GridStore {
        let mut store = GridStore::new();
        if layout.is_pointy_top() {
            for r in top..=bottom {
                let r_offset = r >> 1;
                for q in (left - r_offset)..=(right - r_offset) {
                    store.insert(Hex::from_axial(q, r));
                }
            }
        } else {
            for q in left..=right {
                let q_offset = q >> 1;
                for r in (top - q_offset)..=(bottom - q_offset) {
                    store.insert(Hex::from_axial(q, r));
                }
            }
        }
        store
    }
}

impl Extend<Hex> for GridStore {
    fn extend<I: IntoIterator<Item = Hex>>(&mut self, iter: I) {
        for hex in iter {
            self.insert(hex);
        }
    }
}

impl FromIterator<Hex> for GridStore {
    fn from_iter<I: IntoIterator<Item = Hex>>(iter: I) -> Self {
        let mut store = GridStore::new();
        store.extend(iter);
        store
    }
}

impl IntoIterator for GridStore {
    type Item = Hex;
    type IntoIter = hash_map::IntoValues<u64, Hex>;

    fn into_iter(self) -> Self::IntoIter {
        self.hexes.into_values()
    }
}

impl<'a> IntoIterator for &'a GridStore {
    type Item = Hex;
    type IntoIter = std::iter::Copied<hash_map::Values<'a, u64, Hex>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hexes.values().copied()
    }
}
