//! Hexagonal-grid coordinate geometry.
//!
//! Cube and offset coordinates, pixel projection under pointy-top and
//! flat-top layouts, canonical region shapes, and the TribeNet sub-map
//! coordinate text format.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)

pub mod coordinate;
pub mod direction;
pub mod fractional;
pub mod layout;
pub mod offset;
pub mod point;
pub mod region;
pub mod tribenet;

pub use coordinate::{Hex, InvalidCoordinate};
pub use direction::Direction;
pub use fractional::FractionalHex;
pub use layout::{Layout, OrientationKind};
pub use offset::{OffsetCoord, OffsetScheme};
pub use point::Point;
pub use region::{GridStore, InvalidRadius};
pub use tribenet::{TribeNetCoord, TribeNetError};
