use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coordinate::Hex;

/// Direction in a hexagonal coordinate system.
///
/// The six variants sit counter-clockwise from [`East`](Direction::East),
/// matching neighbor indices 0 through 5. The names assume the horizontal
/// (pointy-top) orientation; a flat-top layout rotates their screen meaning
/// by half a sextant, so use [`Layout::bearing`](crate::Layout::bearing) for
/// orientation-correct compass names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    Northeast,
    Northwest,
    West,
    Southwest,
    Southeast,
}

/// Compass names by direction index under a pointy-top layout.
pub(crate) const HORIZONTAL_BEARINGS: [&str; 6] = ["E", "NNE", "NNW", "W", "SSW", "SSE"];

/// Compass names by direction index under a flat-top layout.
pub(crate) const VERTICAL_BEARINGS: [&str; 6] = ["ESE", "ENE", "N", "WNW", "WSW", "S"];

/// Compass names by direction index on a TribeNet map (flat-top).
pub(crate) const TRIBENET_BEARINGS: [&str; 6] = ["SE", "NE", "N", "NW", "SW", "S"];

impl Direction {
    /// All six directions in index order, counter-clockwise from `East`.
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::Northeast,
        Direction::Northwest,
        Direction::West,
        Direction::Southwest,
        Direction::Southeast,
    ];

    /// Iterate through all `Direction`s, counter-clockwise from `East`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::East), |direction| {
            use Direction::*;

            match direction {
                East => Some(Northeast),
                Northeast => Some(Northwest),
                Northwest => Some(West),
                West => Some(Southwest),
                Southwest => Some(Southeast),
                Southeast => None,
            }
        })
    }

    /// This direction's index in `0..6`.
    #[inline]
    pub fn index(self) -> i32 {
        self as i32
    }

    /// The direction at an arbitrary integer index.
    ///
    /// The index is reduced into `0..6` first, so negative values wrap:
    /// `from_index(-1)` is `Southeast`.
    pub fn from_index(index: i32) -> Direction {
        Self::ALL[((6 + (index % 6)) % 6) as usize]
    }

    /// The direction pointing the opposite way.
    pub fn opposite(self) -> Direction {
        Self::from_index(self.index() + 3)
    }

    /// Unit step in cube coordinates.
    pub const fn delta(self) -> Hex {
        match self {
            Direction::East => Hex::from_axial(1, 0),
            Direction::Northeast => Hex::from_axial(1, -1),
            Direction::Northwest => Hex::from_axial(0, -1),
            Direction::West => Hex::from_axial(-1, 0),
            Direction::Southwest => Hex::from_axial(-1, 1),
            Direction::Southeast => Hex::from_axial(0, 1),
        }
    }

    /// Diagonal step in cube coordinates: across the vertex between this
    /// direction's neighbor and the next one counter-clockwise.
    pub const fn diagonal(self) -> Hex {
        match self {
            Direction::East => Hex::from_axial(2, -1),
            Direction::Northeast => Hex::from_axial(1, -2),
            Direction::Northwest => Hex::from_axial(-1, -1),
            Direction::West => Hex::from_axial(-2, 1),
            Direction::Southwest => Hex::from_axial(-1, 2),
            Direction::Southeast => Hex::from_axial(1, 1),
        }
    }
}

/// Parsing failed for a compass bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized compass bearing")]
pub struct ParseDirectionError;

/// Parse a compass bearing into a direction.
///
/// Accepts the vocabulary of every layout family — horizontal
/// (`E NNE NNW W SSW SSE`), vertical (`ESE ENE N WNW WSW S`), and TribeNet
/// (`SE NE N NW SW S`) — which agree wherever they share a name. Note that
/// the family determines the mapping: TribeNet's `"SE"` is the flat-top
/// rendering of index 0, the same edge the horizontal family calls `"E"`.
impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "E" | "ESE" | "SE" => Direction::East,
            "NNE" | "ENE" | "NE" => Direction::Northeast,
            "NNW" | "N" => Direction::Northwest,
            "W" | "WNW" | "NW" => Direction::West,
            "SSW" | "WSW" | "SW" => Direction::Southwest,
            "SSE" | "S" => Direction::Southeast,
            _ => return Err(ParseDirectionError),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_round_trip() {
        for (index, direction) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(direction.index(), index as i32);
            assert_eq!(Direction::from_index(index as i32), direction);
        }
    }

    #[test]
    fn negative_and_large_indices_wrap() {
        assert_eq!(Direction::from_index(-1), Direction::Southeast);
        assert_eq!(Direction::from_index(-6), Direction::East);
        assert_eq!(Direction::from_index(6), Direction::East);
        assert_eq!(Direction::from_index(13), Direction::Northeast);
        assert_eq!(Direction::from_index(-13), Direction::Southeast);
    }

    #[test]
    fn opposites_cancel() {
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::Northeast.opposite(), Direction::Southwest);
        assert_eq!(Direction::Northwest.opposite(), Direction::Southeast);
        for direction in Direction::iter() {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(direction.delta() + direction.opposite().delta(), Hex::ORIGIN);
        }
    }

    #[test]
    fn deltas_satisfy_the_cube_constraint() {
        for direction in Direction::iter() {
            let delta = direction.delta();
            assert_eq!(delta.q() + delta.r() + delta.s(), 0);
            assert_eq!(delta.length(), 1);
        }
    }

    #[test]
    fn diagonal_is_the_sum_of_adjacent_deltas() {
        for direction in Direction::iter() {
            let next = Direction::from_index(direction.index() + 1);
            assert_eq!(direction.diagonal(), direction.delta() + next.delta());
            assert_eq!(direction.diagonal().length(), 2);
        }
    }

    #[test]
    fn bearings_parse_per_family() {
        for (family, names) in [
            ("horizontal", HORIZONTAL_BEARINGS),
            ("vertical", VERTICAL_BEARINGS),
            ("tribenet", TRIBENET_BEARINGS),
        ] {
            for (index, name) in names.into_iter().enumerate() {
                assert_eq!(
                    name.parse::<Direction>(),
                    Ok(Direction::from_index(index as i32)),
                    "{family} {name}"
                );
            }
        }
    }

    #[test]
    fn tribenet_southeast_is_index_zero() {
        // flat-top maps render the index-0 edge to the lower right
        assert_eq!("SE".parse::<Direction>(), Ok(Direction::East));
        assert_eq!(Hex::ORIGIN + "SE".parse::<Direction>().unwrap(), Hex::from_axial(1, 0));
    }

    #[test]
    fn unknown_bearings_are_rejected() {
        for bad in ["", "X", "e", "NNE ", "north"] {
            assert_eq!(bad.parse::<Direction>(), Err(ParseDirectionError));
        }
    }
}
