use std::f64::consts::PI;

use itertools::{Itertools, MinMaxResult};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::coordinate::Hex;
use crate::direction::{Direction, HORIZONTAL_BEARINGS, VERTICAL_BEARINGS};
use crate::fractional::FractionalHex;
use crate::offset::{OffsetCoord, OffsetScheme};
use crate::point::Point;

/// Projection coefficients for one hex orientation: forward (hex to
/// pixel), backward (pixel to hex), and the corner start angle in sixths
/// of a full turn.
#[derive(Clone, Copy, Debug)]
struct Orientation {
    f: [f64; 4],
    b: [f64; 4],
    start_angle: f64,
}

// There are exactly two orientations. The coefficients involve √3, which
// keeps them out of const context.
lazy_static! {
    static ref POINTY: Orientation = Orientation {
        f: [3f64.sqrt(), 3f64.sqrt() / 2.0, 0.0, 3.0 / 2.0],
        b: [3f64.sqrt() / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
        start_angle: 0.5,
    };
    static ref FLAT: Orientation = Orientation {
        f: [3.0 / 2.0, 0.0, 3f64.sqrt() / 2.0, 3f64.sqrt()],
        b: [2.0 / 3.0, 0.0, -1.0 / 3.0, 3f64.sqrt() / 3.0],
        start_angle: 0.0,
    };
}

/// Which of the two fixed hex orientations a layout draws with.
///
/// Text forms are lowercase: `pointy`, `flat`.
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
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrientationKind {
    /// Vertex up: horizontal rows, the r-offset family.
    Pointy,
    /// Edge up: vertical columns, the q-offset family.
    Flat,
}

impl OrientationKind {
    fn matrices(self) -> &'static Orientation {
        match self {
            OrientationKind::Pointy => &*POINTY,
            OrientationKind::Flat => &*FLAT,
        }
    }
}

/// A drawing configuration: orientation, per-axis size, origin
/// translation, and the offset parity scheme used for column/row views.
///
/// Orientation and parity scheme are independent fields. The customary
/// pairings (pointy-top with an r-scheme, flat-top with a q-scheme) are
/// merely the defaults of [`pointy`](Layout::pointy) and
/// [`flat`](Layout::flat); [`new`](Layout::new) accepts any combination.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    orientation: OrientationKind,
    size: Point,
    origin: Point,
    scheme: OffsetScheme,
}

impl Layout {
    pub const fn new(
        orientation: OrientationKind,
        size: Point,
        origin: Point,
        scheme: OffsetScheme,
    ) -> Self {
        Layout {
            orientation,
            size,
            origin,
            scheme,
        }
    }

    /// Pointy-top layout with the customary odd-r offset scheme.
    pub const fn pointy(size: Point, origin: Point) -> Self {
        Layout::new(OrientationKind::Pointy, size, origin, OffsetScheme::OddR)
    }

    /// Flat-top layout with the customary odd-q offset scheme.
    pub const fn flat(size: Point, origin: Point) -> Self {
        Layout::new(OrientationKind::Flat, size, origin, OffsetScheme::OddQ)
    }

    #[inline]
    pub fn orientation(&self) -> OrientationKind {
        self.orientation
    }

    #[inline]
    pub fn size(&self) -> Point {
        self.size
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn scheme(&self) -> OffsetScheme {
        self.scheme
    }

    #[inline]
    pub fn is_pointy_top(&self) -> bool {
        self.orientation == OrientationKind::Pointy
    }

    #[inline]
    pub fn is_flat_top(&self) -> bool {
        self.orientation == OrientationKind::Flat
    }

    /// The pixel at the center of a hex.
    pub fn hex_to_pixel(&self, hex: Hex) -> Point {
        let m = self.orientation.matrices();
        let q = hex.q() as f64;
        let r = hex.r() as f64;
        Point::new(
            self.origin.x + (m.f[0] * q + m.f[1] * r) * self.size.x,
            self.origin.y + (m.f[2] * q + m.f[3] * r) * self.size.y,
        )
    }

    /// The fractional hex enclosing a pixel.
    ///
    /// Untranslates, unscales, then applies the backward coefficients.
    pub fn pixel_to_fractional(&self, pixel: Point) -> FractionalHex {
        let m = self.orientation.matrices();
        let x = (pixel.x - self.origin.x) / self.size.x;
        let y = (pixel.y - self.origin.y) / self.size.y;
        let q = m.b[0] * x + m.b[1] * y;
        let r = m.b[2] * x + m.b[3] * y;
        FractionalHex::from_axial(q, r)
    }

    /// The on-grid hex enclosing a pixel.
    pub fn pixel_to_hex(&self, pixel: Point) -> Hex {
        self.pixel_to_fractional(pixel).round()
    }

    /// Offset of one corner from a hex's center pixel.
    ///
    /// Corners count counter-clockwise from the orientation's start angle.
    /// Indices outside `0..6` simply wrap through the trigonometry.
    pub fn corner_offset(&self, corner: i32) -> Point {
        let m = self.orientation.matrices();
        let angle = 2.0 * PI * (m.start_angle + corner as f64) / 6.0;
        Point::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// The six absolute corner pixels of a hex, in winding order.
    pub fn polygon_corners(&self, hex: Hex) -> [Point; 6] {
        let center = self.hex_to_pixel(hex);
        let mut corners = [Point::ORIGIN; 6];
        for (corner, slot) in corners.iter_mut().enumerate() {
            *slot = center + self.corner_offset(corner as i32);
        }
        corners
    }

    /// This layout's column/row view of a hex.
    #[inline]
    pub fn offset_from_hex(&self, hex: Hex) -> OffsetCoord {
        self.scheme.from_cube(hex)
    }

    /// The hex at a column/row position in this layout's view.
    #[inline]
    pub fn hex_from_offset(&self, coord: OffsetCoord) -> Hex {
        self.scheme.to_cube(coord)
    }

    /// Compass name of a direction under this orientation.
    ///
    /// Pointy-top layouts use `E NNE NNW W SSW SSE`; flat-top layouts use
    /// `ESE ENE N WNW WSW S`. [`Direction`]'s `FromStr` accepts both
    /// vocabularies back.
    pub fn bearing(&self, direction: Direction) -> &'static str {
        let names = match self.orientation {
            OrientationKind::Pointy => &HORIZONTAL_BEARINGS,
            OrientationKind::Flat => &VERTICAL_BEARINGS,
        };
        names[direction.index() as usize]
    }

    /// The extreme hexes of a set by this layout's offset view, ordered by
    /// (row, col): the top-left-most and bottom-right-most as drawn.
    ///
    /// `None` for an empty iterator; a lone hex is both extremes.
    pub fn bounds(&self, hexes: impl IntoIterator<Item = Hex>) -> Option<(Hex, Hex)> {
        let extremes = hexes.into_iter().minmax_by_key(|&hex| {
            let coord = self.offset_from_hex(hex);
            (coord.row, coord.col)
        });
        match extremes {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(hex) => Some((hex, hex)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        }
    }

    /// The hex drawn nearest the top-left corner: minimum row, then column.
    pub fn top_left(&self, hexes: impl IntoIterator<Item = Hex>) -> Option<Hex> {
        self.bounds(hexes).map(|(top_left, _)| top_left)
    }

    /// The hex drawn nearest the bottom-right corner: maximum row, then
    /// column.
    pub fn bottom_right(&self, hexes: impl IntoIterator<Item = Hex>) -> Option<Hex> {
        self.bounds(hexes).map(|(_, bottom_right)| bottom_right)
    }
}
