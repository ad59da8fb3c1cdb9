use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Cube hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Constraint: `q + r + s == 0`. Only the axial pair is stored; `s` is
/// derived, so the constraint cannot be broken by arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hex {
    q: i32,
    r: i32,
}

/// Cube coordinates whose components do not sum to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cube coordinates ({q}, {r}, {s}) do not sum to zero")]
pub struct InvalidCoordinate {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl Hex {
    pub const ORIGIN: Hex = Hex::from_axial(0, 0);

    /// Construct from a full cube triple, validating the constraint.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, InvalidCoordinate> {
        if q + r + s != 0 {
            return Err(InvalidCoordinate { q, r, s });
        }
        Ok(Hex { q, r })
    }

    /// Construct from axial coordinates; `s` is always `-q - r`.
    #[inline]
    pub const fn from_axial(q: i32, r: i32) -> Self {
        Hex { q, r }
    }

    #[inline]
    pub fn q(self) -> i32 {
        self.q
    }

    #[inline]
    pub fn r(self) -> i32 {
        self.r
    }

    #[inline]
    pub fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Distance from the origin: `(|q| + |r| + |s|) / 2`.
    ///
    /// The sum is always even, so the division is exact.
    pub fn length(self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s().abs()) / 2
    }

    /// Number of hex steps between two cells.
    pub fn distance(self, other: Hex) -> i32 {
        (self - other).length()
    }

    /// The adjacent hex one step away.
    pub fn neighbor(self, direction: Direction) -> Hex {
        self + direction
    }

    /// The hex two edges over, across the vertex shared with the
    /// `direction` and `direction + 1` neighbors.
    pub fn diagonal_neighbor(self, direction: Direction) -> Hex {
        self + direction.diagonal()
    }

    /// Iterate over all six adjacent hexes, in direction-index order.
    pub fn neighbors(self) -> impl 'static + Iterator<Item = Hex> {
        Direction::iter().map(move |direction| self + direction)
    }

    /// Rotate one sextant (60°) leftward about the origin:
    /// `(q, r, s) → (-s, -q, -r)`.
    ///
    /// For rotation about another center, translate there and back.
    pub fn rotate_left(self) -> Hex {
        Hex::from_axial(-self.s(), -self.q)
    }

    /// Rotate one sextant (60°) rightward about the origin:
    /// `(q, r, s) → (-r, -s, -q)`.
    pub fn rotate_right(self) -> Hex {
        Hex::from_axial(-self.r, -self.s())
    }

    /// Mirror across the q axis: `(q, r, s) → (q, s, r)`.
    pub fn reflect_q(self) -> Hex {
        Hex::from_axial(self.q, self.s())
    }

    /// Mirror across the r axis: `(q, r, s) → (s, r, q)`.
    pub fn reflect_r(self) -> Hex {
        Hex::from_axial(self.s(), self.r)
    }

    /// Mirror across the s axis: `(q, r, s) → (r, q, s)`.
    pub fn reflect_s(self) -> Hex {
        Hex::from_axial(self.r, self.q)
    }

    /// A 64-bit key for the axial pair, suitable for hash-map storage.
    ///
    /// Mixes the golden-ratio constant with a murmur-style finalizer so
    /// neighboring cells land far apart. The inputs are sign-extended and
    /// reinterpreted as unsigned, keeping the full bit pattern of negative
    /// coordinates in play rather than collapsing them by magnitude.
    pub fn axial_key(q: i32, r: i32) -> u64 {
        const C1: u64 = 0x9E3779B97F4A7C15; // golden ratio
        const C2: u64 = 0xBF58476D1CE4E5B9;
        const C3: u64 = 0x94D049BB133111EB;

        let q64 = q as i64 as u64;
        let r64 = r as i64 as u64;

        let mut z = q64
            ^ r64
                .wrapping_add(C1)
                .wrapping_add(q64 << 6)
                .wrapping_add(q64 >> 2);
        z = (z ^ (z >> 30)).wrapping_mul(C2);
        z = (z ^ (z >> 27)).wrapping_mul(C3);
        z ^ (z >> 31)
    }

    /// [`axial_key`](Hex::axial_key) of this hex.
    #[inline]
    pub fn key(self) -> u64 {
        Hex::axial_key(self.q, self.r)
    }
}

/// `{}` prints the full triple as `q,r,s`; the sign-aware form `{:+}`
/// prints the compact `+q+r+s` used in grid dumps and tests.
impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.sign_plus() {
            write!(f, "{:+}{:+}{:+}", self.q, self.r, self.s())
        } else {
            write!(f, "{},{},{}", self.q, self.r, self.s())
        }
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Hex) -> Hex {
        Hex::from_axial(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, rhs: Hex) -> Hex {
        Hex::from_axial(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Neg for Hex {
    type Output = Hex;

    fn neg(self) -> Hex {
        Hex::from_axial(-self.q, -self.r)
    }
}

/// Scale all three components by an integer factor.
impl Mul<i32> for Hex {
    type Output = Hex;

    fn mul(self, factor: i32) -> Hex {
        Hex::from_axial(self.q * factor, self.r * factor)
    }
}

impl AddAssign<Direction> for Hex {
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs.delta();
    }
}

impl Add<Direction> for Hex {
    type Output = Hex;

    fn add(mut self, rhs: Direction) -> Hex {
        self += rhs;
        self
    }
}

impl SubAssign<Direction> for Hex {
    fn sub_assign(&mut self, rhs: Direction) {
        *self = *self - rhs.delta();
    }
}

impl Sub<Direction> for Hex {
    type Output = Hex;

    fn sub(mut self, rhs: Direction) -> Hex {
        self -= rhs;
        self
    }
}
