use crate::coordinate::Hex;

/// Slack allowed on `q + r + s` at construction.
///
/// Interpolation drifts a few ulps off zero and the line-drawing nudge is
/// on the order of 1e-6, so exact equality would reject working inputs.
const SUM_TOLERANCE: f64 = 1e-6;

/// Continuous cube coordinates: the pre-rounding counterpart of [`Hex`].
///
/// Produced by interpolation and by pixel-to-hex conversion; collapse back
/// to the grid with [`round`](FractionalHex::round). All three components
/// are stored because rounding compares their individual errors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FractionalHex {
    q: f64,
    r: f64,
    s: f64,
}

/// Fractional cube coordinates too far from the zero-sum plane.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("fractional cube coordinates ({q}, {r}, {s}) do not sum to zero")]
pub struct InvalidFractionalCoordinate {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalHex {
    /// Construct from a full cube triple, validating the constraint to
    /// within [`SUM_TOLERANCE`].
    pub fn new(q: f64, r: f64, s: f64) -> Result<Self, InvalidFractionalCoordinate> {
        if (q + r + s).abs() > SUM_TOLERANCE {
            return Err(InvalidFractionalCoordinate { q, r, s });
        }
        Ok(FractionalHex { q, r, s })
    }

    /// Construct from axial coordinates; `s` is derived as `-q - r`.
    pub fn from_axial(q: f64, r: f64) -> Self {
        FractionalHex { q, r, s: -q - r }
    }

    #[inline]
    pub fn q(self) -> f64 {
        self.q
    }

    #[inline]
    pub fn r(self) -> f64 {
        self.r
    }

    #[inline]
    pub fn s(self) -> f64 {
        self.s
    }

    /// Componentwise interpolation toward `other` at parameter `t`.
    pub fn lerp(self, other: FractionalHex, t: f64) -> FractionalHex {
        FractionalHex {
            q: lerp(self.q, other.q, t),
            r: lerp(self.r, other.r, t),
            s: lerp(self.s, other.s, t),
        }
    }

    /// The nearest on-grid hex.
    ///
    /// Rounds each component to the nearest integer, then recomputes the
    /// component with the largest rounding error from the other two so the
    /// cube constraint holds exactly. Tie-breaks fall through in q, r, s
    /// order: q is corrected only when its error strictly dominates both
    /// others, r only when its error strictly exceeds s's.
    pub fn round(self) -> Hex {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let mut s = self.s.round();
        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();
        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        } else {
            s = -q - r;
        }
        Hex::from_axial(q as i32, r as i32)
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        FractionalHex {
            q: hex.q() as f64,
            r: hex.r() as f64,
            s: hex.s() as f64,
        }
    }
}

// Keeps full precision at t == 1, unlike `a + (b - a) * t`.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

// Pushes points sitting exactly on a hex edge to a consistent side. The s
// component takes twice the opposite sign so the cube sum stays zero.
fn nudged(hex: Hex) -> FractionalHex {
    FractionalHex {
        q: hex.q() as f64 + 1e-6,
        r: hex.r() as f64 + 1e-6,
        s: hex.s() as f64 - 2e-6,
    }
}

impl Hex {
    /// Interpolate toward `other`, leaving the grid for fractional space.
    pub fn lerp(self, other: Hex, t: f64) -> FractionalHex {
        FractionalHex::from(self).lerp(FractionalHex::from(other), t)
    }

    /// The hexes approximating the straight segment to `other`.
    ///
    /// Returns `distance + 1` hexes including both endpoints; consecutive
    /// elements are always grid neighbors. Points that land exactly on an
    /// edge round by the tie-break rules of [`FractionalHex::round`]; use
    /// [`line_to_nudged`](Hex::line_to_nudged) to resolve them
    /// directionally instead.
    pub fn line_to(self, other: Hex) -> Vec<Hex> {
        self.line(other, false)
    }

    /// Like [`line_to`](Hex::line_to), with both endpoints nudged slightly
    /// off the lattice first so edge-crossing sample points fall
    /// deterministically into one hex.
    pub fn line_to_nudged(self, other: Hex) -> Vec<Hex> {
        self.line(other, true)
    }

    fn line(self, other: Hex, nudge: bool) -> Vec<Hex> {
        let n = self.distance(other);
        if n == 0 {
            return vec![self];
        }
        let (a, b) = if nudge {
            (nudged(self), nudged(other))
        } else {
            (FractionalHex::from(self), FractionalHex::from(other))
        };
        let step = 1.0 / n as f64;
        (0..=n).map(|i| a.lerp(b, step * i as f64).round()).collect()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn new_enforces_the_tolerance() {
        assert!(FractionalHex::new(0.1, 0.2, -0.3).is_ok());
        assert_eq!(
            FractionalHex::new(1.0, 1.0, 1.0),
            Err(InvalidFractionalCoordinate {
                q: 1.0,
                r: 1.0,
                s: 1.0
            })
        );
    }

    #[test]
    fn from_axial_derives_s() {
        let hex = FractionalHex::from_axial(0.25, -1.5);
        assert_eq!(hex.s(), 1.25);
    }

    #[test]
    fn round_recovers_lattice_points() {
        for q in -3..=3 {
            for r in -3..=3 {
                let hex = Hex::from_axial(q, r);
                assert_eq!(FractionalHex::from(hex).round(), hex);
            }
        }
    }

    #[test]
    fn round_corrects_the_worst_component() {
        // s has the largest error and is recomputed
        let hex = FractionalHex::new(0.3, 0.3, -0.6).unwrap();
        assert_eq!(hex.round(), Hex::ORIGIN);

        // q strictly dominates, so q is recomputed from r and s
        let hex = FractionalHex::new(1.5, -0.75, -0.75).unwrap();
        assert_eq!(hex.round(), Hex::new(2, -1, -1).unwrap());
    }

    #[test]
    fn round_tie_breaks_in_qrs_order() {
        // q and r tie: the q branch requires strict dominance, so r wins
        let hex = FractionalHex::new(0.5, 0.5, -1.0).unwrap();
        assert_eq!(hex.round(), Hex::new(1, 0, -1).unwrap());

        // r and s tie: the r branch requires strict excess, so s wins
        let hex = FractionalHex::new(1.0, -0.5, -0.5).unwrap();
        assert_eq!(hex.round(), Hex::new(1, -1, 0).unwrap());
    }

    #[test]
    fn lerp_hits_both_endpoints() {
        let a = Hex::from_axial(-2, 1);
        let b = Hex::from_axial(3, -4);
        assert_eq!(a.lerp(b, 0.0).round(), a);
        assert_eq!(a.lerp(b, 1.0).round(), b);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.q(), 0.5);
        assert_eq!(mid.r(), -1.5);
        assert_eq!(mid.s(), 1.0);
    }

    #[test]
    fn line_to_matches_the_reference_walk() {
        let line = Hex::ORIGIN.line_to(Hex::from_axial(1, -3));
        let expected: Vec<Hex> = [(0, 0), (0, -1), (1, -2), (1, -3)]
            .into_iter()
            .map(|(q, r)| Hex::from_axial(q, r))
            .collect();
        assert_eq!(line, expected);
    }

    #[test]
    fn line_endpoints_and_stepping() {
        let a = Hex::from_axial(-2, -1);
        let b = Hex::from_axial(3, -2);
        let line = a.line_to(b);
        assert_eq!(line.len() as i32, a.distance(b) + 1);
        assert_eq!(*line.first().unwrap(), a);
        assert_eq!(*line.last().unwrap(), b);
        for (prev, next) in line.iter().tuple_windows() {
            assert_eq!(prev.distance(*next), 1);
        }
    }

    #[test]
    fn zero_length_line_is_the_start_hex() {
        let hex = Hex::from_axial(4, -2);
        assert_eq!(hex.line_to(hex), vec![hex]);
        assert_eq!(hex.line_to_nudged(hex), vec![hex]);
    }

    #[test]
    fn nudge_resolves_edge_midpoints() {
        let a = Hex::ORIGIN;
        let b = Hex::from_axial(2, -1);
        // the t = 1/2 sample sits exactly on the edge between (1,-1,0)
        // and (1,0,-1); the plain walk tie-breaks to s-correction, the
        // nudged walk deterministically picks the high-q side
        assert_eq!(
            a.line_to(b),
            vec![a, Hex::from_axial(1, -1), b],
        );
        assert_eq!(
            a.line_to_nudged(b),
            vec![a, Hex::from_axial(1, 0), b],
        );
    }
}
