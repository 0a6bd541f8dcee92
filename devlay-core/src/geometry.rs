/// Geometry primitives shared by projection, hulls and the overlay planner
use nalgebra::{Point2, Point3, Vector2};

/// A point on the canvas, in viewport pixels with y pointing down.
pub type ScreenPoint = Point2<i32>;

/// A model vertex in object-local units.
///
/// `x` and `z` span the ground plane, `y` is height. Heights follow the
/// scene convention where negative values are above the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub position: Point3<i32>,
}

impl Vertex {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn z(&self) -> i32 {
        self.position.z
    }
}

/// The decoded vertices of one animation frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    pub vertices: Vec<Vertex>,
}

impl Model {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    pub fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A copy of the model shifted by a fixed offset.
    pub fn translated(&self, dx: i32, dy: i32, dz: i32) -> Self {
        self.vertices
            .iter()
            .map(|v| {
                Vertex::new(
                    v.x().saturating_add(dx),
                    v.y().saturating_add(dy),
                    v.z().saturating_add(dz),
                )
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// The eight corners of an axis-aligned cube centred on the origin
    pub fn cube(half: i32) -> Self {
        let mut model = Self::with_capacity(8);
        for x in [-half, half] {
            for y in [-half, half] {
                for z in [-half, half] {
                    model.add_vertex(Vertex::new(x, y, z));
                }
            }
        }
        model
    }

    /// A square-based pyramid standing on the ground with its apex `height`
    /// units up.
    pub fn pyramid(half: i32, height: i32) -> Self {
        Self::from_vertices(vec![
            Vertex::new(-half, 0, -half),
            Vertex::new(half, 0, -half),
            Vertex::new(half, 0, half),
            Vertex::new(-half, 0, half),
            Vertex::new(0, -height, 0),
        ])
    }
}

impl From<Vec<Vertex>> for Model {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self::from_vertices(vertices)
    }
}

/// Twice the signed area of the triangle `o`, `a`, `b`.
///
/// Positive when `b` lies counter-clockwise of `o -> a` in a y-up frame.
pub(crate) fn cross(o: ScreenPoint, a: ScreenPoint, b: ScreenPoint) -> i64 {
    let oa: Vector2<i64> = (a - o).cast();
    let ob: Vector2<i64> = (b - o).cast();
    oa.x * ob.y - oa.y * ob.x
}

pub(crate) fn distance_squared(a: ScreenPoint, b: ScreenPoint) -> i64 {
    let d: Vector2<i64> = (b - a).cast();
    d.x * d.x + d.y * d.y
}

/// An axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }
}

/// A closed polygon on the canvas. The last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon {
    points: Vec<ScreenPoint>,
}

impl Polygon {
    pub fn new(points: Vec<ScreenPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ScreenPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<ScreenPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (ScreenPoint, ScreenPoint)> + '_ {
        let next = self.points.iter().cycle().skip(1);
        self.points.iter().copied().zip(next.copied())
    }

    /// Twice the signed (shoelace) area. Positive for counter-clockwise
    /// winding in a y-up frame, which is clockwise on the canvas.
    pub fn signed_area2(&self) -> i64 {
        self.edges()
            .map(|(a, b)| i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y))
            .sum()
    }

    /// Strictly convex: every turn goes the same way and none are straight.
    pub fn is_convex(&self) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut sign = 0i64;
        for i in 0..n {
            let turn = cross(
                self.points[i],
                self.points[(i + 1) % n],
                self.points[(i + 2) % n],
            );
            if turn == 0 || (sign != 0 && turn.signum() != sign) {
                return false;
            }
            sign = turn.signum();
        }
        true
    }

    /// Point-in-polygon test for convex polygons of either winding.
    /// Points on an edge count as inside.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        let mut sign = 0i64;
        for (a, b) in self.edges() {
            let side = cross(a, b, point).signum();
            if side == 0 {
                continue;
            }
            if sign != 0 && side != sign {
                return false;
            }
            sign = side;
        }
        true
    }

    pub fn bounds(&self) -> Option<Rect> {
        let first = self.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Rect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::new(vec![
            ScreenPoint::new(0, 0),
            ScreenPoint::new(10, 0),
            ScreenPoint::new(10, 10),
            ScreenPoint::new(0, 10),
        ])
    }

    #[test]
    fn test_cube_corners() {
        let cube = Model::cube(10);
        assert_eq!(cube.len(), 8);
        for v in &cube.vertices {
            assert_eq!(v.x().abs(), 10);
            assert_eq!(v.y().abs(), 10);
            assert_eq!(v.z().abs(), 10);
        }
    }

    #[test]
    fn test_pyramid_apex_is_above_ground() {
        let pyramid = Model::pyramid(20, 50);
        assert_eq!(pyramid.len(), 5);
        assert_eq!(pyramid.vertices[4].y(), -50);
    }

    #[test]
    fn test_translated() {
        let moved = Model::cube(1).translated(5, -1, 0);
        assert!(moved.vertices.iter().all(|v| v.x() >= 4 && v.y() <= 0));
    }

    #[test]
    fn test_translated_saturates() {
        let moved = Model::cube(1).translated(i32::MAX, i32::MIN, 0);
        assert!(moved.vertices.iter().all(|v| v.x() == i32::MAX && v.y() == i32::MIN));
    }

    #[test]
    fn test_square_area_and_convexity() {
        let poly = square();
        assert_eq!(poly.signed_area2(), 200);
        assert!(poly.is_convex());
        assert!(poly.contains(ScreenPoint::new(5, 5)));
        assert!(poly.contains(ScreenPoint::new(10, 5)));
        assert!(!poly.contains(ScreenPoint::new(11, 5)));
        assert_eq!(poly.bounds(), Some(Rect::new(0, 0, 11, 11)));
    }

    #[test]
    fn test_collinear_polygon_is_not_convex() {
        let poly = Polygon::new(vec![
            ScreenPoint::new(0, 0),
            ScreenPoint::new(5, 0),
            ScreenPoint::new(10, 0),
        ]);
        assert!(!poly.is_convex());
    }

    #[test]
    fn test_rect_center_and_contains() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.center(), ScreenPoint::new(25, 40));
        assert!(rect.contains(ScreenPoint::new(10, 20)));
        assert!(!rect.contains(ScreenPoint::new(40, 20)));
    }
}
