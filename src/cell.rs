//! Polygon cells and path extrusion
//!
//! A [`Cell`] is a named, ordered collection of simple polygons making
//! up one logical mask part. Cells are mutable only while a builder is
//! filling them; composition places sub-cell polygons verbatim (all
//! coordinates are absolute) and flattens eagerly, because downstream
//! EM-solver ingestion and boolean operations need flat polygon sets.
//!
//! [`FlexPath`] models an axis-aligned centerline of fixed width and
//! converts it to a filled outline. Interior right-angle joints are
//! filled by extending each segment half a width into the corner, which
//! reproduces the miter join of the original path model; ends are flush.

use geo::BooleanOps;
use geo_types::{Coord, LineString, MultiPolygon, Polygon};

/// Axis-aligned rectangle from two opposite corners, in either order.
pub fn rect(c1: (f64, f64), c2: (f64, f64)) -> Polygon<f64> {
    let (x0, x1) = (c1.0.min(c2.0), c1.0.max(c2.0));
    let (y0, y1) = (c1.1.min(c2.1), c1.1.max(c2.1));
    Polygon::new(
        LineString::from(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)]),
        vec![],
    )
}

/// Union of two polygon sets.
pub fn union(a: &[Polygon<f64>], b: &[Polygon<f64>]) -> Vec<Polygon<f64>> {
    let a = MultiPolygon::new(a.to_vec());
    let b = MultiPolygon::new(b.to_vec());
    a.union(&b).0
}

/// Polygons of `a` with the polygons of `b` cut away.
pub fn difference(a: &[Polygon<f64>], b: &[Polygon<f64>]) -> Vec<Polygon<f64>> {
    let a = MultiPolygon::new(a.to_vec());
    let b = MultiPolygon::new(b.to_vec());
    a.difference(&b).0
}

/// Axis-aligned bounding box as (min, max) corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Coord<f64>,
    pub max: Coord<f64>,
}

impl BoundingBox {
    fn cover(&mut self, c: Coord<f64>) {
        self.min.x = self.min.x.min(c.x);
        self.min.y = self.min.y.min(c.y);
        self.max.x = self.max.x.max(c.x);
        self.max.y = self.max.y.max(c.y);
    }

    /// Smallest box covering both operands.
    pub fn merge(&self, other: &BoundingBox) -> BoundingBox {
        let mut out = *self;
        out.cover(other.min);
        out.cover(other.max);
        out
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// A named, ordered collection of polygons for one mask part.
#[derive(Debug, Clone)]
pub struct Cell {
    name: String,
    polygons: Vec<Polygon<f64>>,
}

impl Cell {
    pub fn new(name: impl Into<String>) -> Self {
        Cell {
            name: name.into(),
            polygons: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add(&mut self, polygon: Polygon<f64>) {
        self.polygons.push(polygon);
    }

    pub fn extend(&mut self, polygons: impl IntoIterator<Item = Polygon<f64>>) {
        self.polygons.extend(polygons);
    }

    pub fn polygons(&self) -> &[Polygon<f64>] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Place `other` at identity (all coordinates are already absolute)
    /// and flatten its polygons into this cell. This is the only form of
    /// composition; no hierarchy survives.
    pub fn absorb(&mut self, other: Cell) {
        self.polygons.extend(other.polygons);
    }

    /// Bounding box over all polygon vertices; `None` for an empty cell.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut boxed: Option<BoundingBox> = None;
        for polygon in &self.polygons {
            for &c in &polygon.exterior().0 {
                match boxed.as_mut() {
                    Some(b) => b.cover(c),
                    None => boxed = Some(BoundingBox { min: c, max: c }),
                }
            }
        }
        boxed
    }
}

/// An axis-aligned path of constant width, built segment by segment and
/// converted to a filled outline.
#[derive(Debug, Clone)]
pub struct FlexPath {
    width: f64,
    points: Vec<Coord<f64>>,
}

impl FlexPath {
    pub fn new(start: (f64, f64), width: f64) -> Self {
        FlexPath {
            width,
            points: vec![Coord {
                x: start.0,
                y: start.1,
            }],
        }
    }

    /// Extend horizontally to absolute coordinate `x`.
    pub fn horizontal(mut self, x: f64) -> Self {
        let y = self.points.last().map(|c| c.y).unwrap_or(0.0);
        self.points.push(Coord { x, y });
        self
    }

    /// Extend vertically to absolute coordinate `y`.
    pub fn vertical(mut self, y: f64) -> Self {
        let x = self.points.last().map(|c| c.x).unwrap_or(0.0);
        self.points.push(Coord { x, y });
        self
    }

    /// Convert the centerline to a filled outline.
    ///
    /// Each segment becomes a rectangle of the path width, extended half
    /// a width past interior joints so the corner square is covered; the
    /// per-segment rectangles are then unioned into simple polygons.
    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        let half = self.width / 2.0;
        let last_segment = self.points.len().saturating_sub(2);
        let mut outline: Vec<Polygon<f64>> = Vec::new();

        for (i, pair) in self.points.windows(2).enumerate() {
            let (a, b) = (pair[0], pair[1]);
            let extend_start = i > 0;
            let extend_end = i < last_segment;

            let segment = if (a.y - b.y).abs() < f64::EPSILON {
                // horizontal
                let dir = (b.x - a.x).signum();
                let x0 = if extend_start { a.x - dir * half } else { a.x };
                let x1 = if extend_end { b.x + dir * half } else { b.x };
                rect((x0, a.y - half), (x1, a.y + half))
            } else {
                // vertical
                let dir = (b.y - a.y).signum();
                let y0 = if extend_start { a.y - dir * half } else { a.y };
                let y1 = if extend_end { b.y + dir * half } else { b.y };
                rect((a.x - half, y0), (a.x + half, y1))
            };

            outline = if outline.is_empty() {
                vec![segment]
            } else {
                union(&outline, &[segment])
            };
        }

        outline
    }
}
