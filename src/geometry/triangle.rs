use geo::{Area, Centroid, Coord, LineString, Polygon};
use nalgebra::{Point2, Vector2};

fn point2_to_coord(p: &Point2<f64>) -> Coord {
    Coord { x: p.x, y: p.y }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Point2<f64>; 3],
}

impl Triangle {
    pub fn new(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Self {
        Triangle {
            vertices: [a, b, c],
        }
    }

    pub fn from_coords(coords: [(f64, f64); 3]) -> Self {
        Triangle {
            vertices: coords.map(|(x, y)| Point2::new(x, y)),
        }
    }

    pub fn side_from_height(height: f64) -> f64 {
        2.0 * height / 3.0_f64.sqrt()
    }

    /// Equilateral triangle resting on the x-axis with its base-left vertex at
    /// the origin. Vertices are ordered base-left, base-right, apex.
    pub fn equilateral_with_height(height: f64) -> Self {
        let side = Self::side_from_height(height);
        Triangle::new(
            Point2::origin(),
            Point2::new(side, 0.0),
            Point2::new(side / 2.0, height),
        )
    }

    pub fn translated(&self, dr: Vector2<f64>) -> Self {
        Triangle {
            vertices: self.vertices.map(|v| v + dr),
        }
    }

    pub fn as_polygon(&self) -> Polygon<f64> {
        let mut ring: Vec<Coord> = self.vertices.iter().map(point2_to_coord).collect();
        ring.push(point2_to_coord(&self.vertices[0]));
        Polygon::new(LineString::new(ring), vec![])
    }

    pub fn area(&self) -> f64 {
        self.as_polygon().unsigned_area()
    }

    pub fn centroid(&self) -> Point2<f64> {
        match self.as_polygon().centroid() {
            Some(c) => Point2::new(c.x(), c.y()),
            // Collinear vertices: fall back to the vertex mean.
            None => Point2::from(
                self.vertices
                    .iter()
                    .fold(Vector2::zeros(), |acc, v| acc + v.coords)
                    / 3.0,
            ),
        }
    }

    // Closed loop of vertices, for outline drawing.
    pub fn outline(&self) -> [Point2<f64>; 4] {
        let [a, b, c] = self.vertices;
        [a, b, c, a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_height_equilateral_area() {
        let t = Triangle::equilateral_with_height(1.0);
        assert_relative_eq!(t.area(), 1.0 / 3.0_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(format!("{:.3}", t.area()), "0.577");
    }

    #[test]
    fn equilateral_sides_match() {
        let t = Triangle::equilateral_with_height(1.0);
        let [a, b, c] = t.vertices;
        let ab = (b - a).norm();
        assert_relative_eq!((c - a).norm(), ab, epsilon = 1e-12);
        assert_relative_eq!((c - b).norm(), ab, epsilon = 1e-12);
        assert_relative_eq!(c.y, 1.0);
    }

    #[test]
    fn translation_preserves_area() {
        let t = Triangle::from_coords([(1.0, 0.0), (2.0, 0.0), (1.5, 1.0)]);
        let moved = t.translated(Vector2::new(0.2, 0.1));
        assert_relative_eq!(moved.area(), t.area(), epsilon = 1e-12);
        assert_relative_eq!(moved.vertices[0], Point2::new(1.2, 0.1), epsilon = 1e-12);
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let t = Triangle::from_coords([(1.0, 0.0), (3.0, 0.0), (2.0, 2.0)]);
        assert_relative_eq!(t.centroid(), Point2::new(2.0, 2.0 / 3.0), epsilon = 1e-12);
    }

    #[test]
    fn outline_is_closed() {
        let t = Triangle::equilateral_with_height(1.0);
        let outline = t.outline();
        assert_eq!(outline[0], outline[3]);
    }
}
