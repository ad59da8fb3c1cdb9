use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coordinate::Hex;

/// Column/row position under one of the four offset parity schemes.
///
/// The pair carries no scheme tag of its own: which hex it denotes depends
/// entirely on the [`OffsetScheme`] used to produce or consume it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OffsetCoord {
    pub col: i32,
    pub row: i32,
}

impl OffsetCoord {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        OffsetCoord { col, row }
    }
}

/// `{}` prints `col,row`; the sign-aware form `{:+}` prints `+col+row`.
impl fmt::Display for OffsetCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.sign_plus() {
            write!(f, "{:+}{:+}", self.col, self.row)
        } else {
            write!(f, "{},{}", self.col, self.row)
        }
    }
}

/// The four parity schemes for projecting cube coordinates onto a
/// column/row plane.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates-offset).
///
/// The q-schemes shift alternate columns (the flat-top family); the
/// r-schemes shift alternate rows (pointy-top). Odd schemes shove the odd
/// lines, even schemes the even ones. Text forms are kebab-case:
/// `odd-q`, `even-q`, `odd-r`, `even-r`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
    Serialize,
    Deserialize,
)]
#[display(style = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum OffsetScheme {
    OddQ,
    EvenQ,
    OddR,
    EvenR,
}

impl OffsetScheme {
    /// +1 when the even lines shift, -1 when the odd lines do.
    #[inline]
    fn shift(self) -> i32 {
        match self {
            OffsetScheme::OddQ | OffsetScheme::OddR => -1,
            OffsetScheme::EvenQ | OffsetScheme::EvenR => 1,
        }
    }

    /// True for the column-shifting (flat-top) family.
    #[inline]
    pub fn is_q_scheme(self) -> bool {
        matches!(self, OffsetScheme::OddQ | OffsetScheme::EvenQ)
    }

    /// True for the row-shifting (pointy-top) family.
    #[inline]
    pub fn is_r_scheme(self) -> bool {
        !self.is_q_scheme()
    }

    /// Project a hex onto this scheme's column/row plane.
    ///
    /// The parity test must be `& 1`, never `%`: truncated remainder gives
    /// -1 for negative operands, which would shift the wrong lines on the
    /// negative half of the grid. The shifted sum is always even, so the
    /// halving is exact.
    pub fn from_cube(self, hex: Hex) -> OffsetCoord {
        let shift = self.shift();
        if self.is_q_scheme() {
            OffsetCoord::new(hex.q(), hex.r() + (hex.q() + shift * (hex.q() & 1)) / 2)
        } else {
            OffsetCoord::new(hex.q() + (hex.r() + shift * (hex.r() & 1)) / 2, hex.r())
        }
    }

    /// The hex a column/row pair denotes under this scheme.
    ///
    /// Exact inverse of [`from_cube`](OffsetScheme::from_cube); both
    /// directions are total over all integer pairs.
    pub fn to_cube(self, coord: OffsetCoord) -> Hex {
        let shift = self.shift();
        if self.is_q_scheme() {
            Hex::from_axial(
                coord.col,
                coord.row - (coord.col + shift * (coord.col & 1)) / 2,
            )
        } else {
            Hex::from_axial(
                coord.col - (coord.row + shift * (coord.row & 1)) / 2,
                coord.row,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn odd_q_golden_vectors() {
        for (col, row, expect) in [
            (0, 0, "+0+0+0"),
            (0, -1, "+0-1+1"),
            (1, -1, "+1-1+0"),
            (1, 0, "+1+0-1"),
            (0, 1, "+0+1-1"),
            (-1, 0, "-1+1+0"),
            (-1, -1, "-1+0+1"),
            (2, 0, "+2-1-1"),
            (-2, 0, "-2+1+1"),
            (3, 0, "+3-1-2"),
            (-3, 0, "-3+2+1"),
            (-3, -3, "-3-1+4"),
        ] {
            let hex = OffsetScheme::OddQ.to_cube(OffsetCoord::new(col, row));
            assert_eq!(format!("{hex:+}"), expect, "col {col}, row {row}");
        }
    }

    #[test]
    fn even_q_golden_vectors() {
        for (col, row, expect) in [
            (0, 0, "+0+0+0"),
            (1, -1, "+1-2+1"),
            (1, 0, "+1-1+0"),
            (2, 0, "+2-1-1"),
            (3, 0, "+3-2-1"),
            (-1, 0, "-1+0+1"),
            (-2, 0, "-2+1+1"),
            (-3, 0, "-3+1+2"),
        ] {
            let hex = OffsetScheme::EvenQ.to_cube(OffsetCoord::new(col, row));
            assert_eq!(format!("{hex:+}"), expect, "col {col}, row {row}");
        }
    }

    #[test]
    fn r_schemes_transpose_the_q_schemes() {
        for (scheme, transpose) in [
            (OffsetScheme::OddQ, OffsetScheme::OddR),
            (OffsetScheme::EvenQ, OffsetScheme::EvenR),
        ] {
            for (col, row) in (-4..=4).cartesian_product(-4..=4) {
                let q_hex = scheme.to_cube(OffsetCoord::new(col, row));
                let r_hex = transpose.to_cube(OffsetCoord::new(row, col));
                assert_eq!(q_hex.q(), r_hex.r(), "col {col}, row {row}");
                assert_eq!(q_hex.r(), r_hex.q(), "col {col}, row {row}");
            }
        }
    }

    #[test]
    fn offset_round_trips_under_every_scheme() {
        let schemes = [
            OffsetScheme::OddQ,
            OffsetScheme::EvenQ,
            OffsetScheme::OddR,
            OffsetScheme::EvenR,
        ];
        for scheme in schemes {
            for (col, row) in (-8..=8).cartesian_product(-8..=8) {
                let coord = OffsetCoord::new(col, row);
                assert_eq!(
                    scheme.from_cube(scheme.to_cube(coord)),
                    coord,
                    "{scheme} col {col}, row {row}"
                );
            }
            for (q, r) in (-8..=8).cartesian_product(-8..=8) {
                let hex = Hex::from_axial(q, r);
                assert_eq!(
                    scheme.to_cube(scheme.from_cube(hex)),
                    hex,
                    "{scheme} q {q}, r {r}"
                );
            }
        }
    }

    #[test]
    fn scheme_families() {
        assert!(OffsetScheme::OddQ.is_q_scheme());
        assert!(OffsetScheme::EvenQ.is_q_scheme());
        assert!(OffsetScheme::OddR.is_r_scheme());
        assert!(OffsetScheme::EvenR.is_r_scheme());
    }

    #[test]
    fn scheme_text_round_trips() {
        assert_eq!(OffsetScheme::OddQ.to_string(), "odd-q");
        assert_eq!("even-r".parse::<OffsetScheme>().unwrap(), OffsetScheme::EvenR);
        assert!("odd_q".parse::<OffsetScheme>().is_err());
    }

    #[test]
    fn display_forms() {
        let coord = OffsetCoord::new(1, -3);
        assert_eq!(coord.to_string(), "1,-3");
        assert_eq!(format!("{coord:+}"), "+1-3");
    }
}
