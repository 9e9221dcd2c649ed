//! The six panels sketching how Besicovitch's construction squeezes a set
//! containing a segment in every direction into arbitrarily small area.
//! These are illustrations, not a faithful construction.

pub mod limit_cloud;

use nalgebra::{Point2, Vector2};

use crate::{
    config::{construction::ConstructionSetup, ConfigError},
    geometry::{arange, direction_rays, line_segment::LineSegment, triangle::Triangle, Bounds},
};

pub const PANEL_BOUNDS: Bounds = Bounds::new((0.0, 4.0), (-0.5, 2.5));
pub const CAPTION_HEIGHT: f64 = -0.2;

pub fn ray_origin() -> Point2<f64> {
    Point2::new(2.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tint {
    Red,
    Green,
    Blue,
    // One of `of` evenly spaced palette colours.
    Palette { index: usize, of: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub triangle: Triangle,
    pub tint: Tint,
    pub alpha: f32,
}

impl Piece {
    fn new(triangle: Triangle, tint: Tint, alpha: f32) -> Self {
        Piece {
            triangle,
            tint,
            alpha,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RaySet {
    pub rays: Vec<LineSegment>,
    pub alpha: f32,
}

impl RaySet {
    pub fn empty() -> Self {
        RaySet {
            rays: vec![],
            alpha: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub title: String,
    pub caption: String,
    pub pieces: Vec<Piece>,
    pub rays: RaySet,
    pub points: Vec<Point2<f64>>,
}

impl Panel {
    // Sum of piece areas, counting overlaps more than once.
    pub fn total_area(&self) -> f64 {
        self.pieces.iter().map(|p| p.triangle.area()).sum()
    }
}

fn fan(angles_deg: Vec<f64>, length: f64, alpha: f32) -> RaySet {
    RaySet {
        rays: direction_rays(ray_origin(), &angles_deg, length),
        alpha,
    }
}

pub fn initial_triangle(setup: &ConstructionSetup) -> Panel {
    Panel {
        title: "Step 1: Initial Triangle".to_string(),
        caption: "Area = 1.732".to_string(),
        pieces: vec![Piece::new(
            Triangle::from_coords([(1.0, 0.0), (3.0, 0.0), (2.0, 2.0)]),
            Tint::Blue,
            0.7,
        )],
        rays: fan(vec![0.0, 60.0, 120.0], setup.ray_length, 0.5),
        points: vec![],
    }
}

fn split_pieces() -> [Triangle; 3] {
    [
        Triangle::from_coords([(1.0, 0.0), (2.0, 0.0), (1.5, 1.0)]),
        Triangle::from_coords([(2.0, 0.0), (3.0, 0.0), (2.5, 1.0)]),
        Triangle::from_coords([(1.5, 1.0), (2.5, 1.0), (2.0, 2.0)]),
    ]
}

const SPLIT_TINTS: [Tint; 3] = [Tint::Red, Tint::Green, Tint::Blue];

pub fn first_split(setup: &ConstructionSetup) -> Panel {
    Panel {
        title: "Step 2: Split into 3 Triangles".to_string(),
        caption: "Total Area = 1.732".to_string(),
        pieces: split_pieces()
            .into_iter()
            .zip(SPLIT_TINTS)
            .map(|(t, tint)| Piece::new(t, tint, 0.7))
            .collect(),
        rays: fan(arange(0.0, 180.0, 30.0), setup.ray_length, 0.5),
        points: vec![],
    }
}

pub fn overlap_shifts() -> [Vector2<f64>; 3] {
    [
        Vector2::new(0.2, 0.1),
        Vector2::new(-0.1, 0.2),
        Vector2::new(0.1, -0.1),
    ]
}

pub fn translated_overlap(setup: &ConstructionSetup) -> Panel {
    let pieces = split_pieces()
        .iter()
        .zip(overlap_shifts())
        .zip(SPLIT_TINTS)
        .map(|((t, dr), tint)| Piece::new(t.translated(dr), tint, 0.5))
        .collect();
    Panel {
        title: "Step 3: Translate to Create Overlap".to_string(),
        caption: "Effective Area < 1.732".to_string(),
        pieces,
        rays: fan(arange(0.0, 180.0, 15.0), setup.ray_length, 0.3),
        points: vec![],
    }
}

pub const GRID_COLUMNS: usize = 3;
pub const GRID_ROWS: usize = 4;

// Apex-up triangles on a staggered grid, alternate rows nudged right.
pub fn further_split() -> Panel {
    let mut pieces = Vec::with_capacity(GRID_COLUMNS * GRID_ROWS);
    for i in 0..GRID_COLUMNS {
        for j in 0..GRID_ROWS {
            let x = 0.5 + i as f64 + (j % 2) as f64 * 0.3;
            let y = 0.2 + j as f64 * 0.5;
            let triangle = Triangle::from_coords([(x, y), (x + 0.6, y), (x + 0.3, y + 0.6)]);
            pieces.push(Piece::new(
                triangle,
                Tint::Palette {
                    index: i,
                    of: GRID_COLUMNS,
                },
                0.4,
            ));
        }
    }
    Panel {
        title: "Step 4: Further Splitting".to_string(),
        caption: format!("{} small triangles", pieces.len()),
        pieces,
        rays: RaySet::empty(),
        points: vec![],
    }
}

pub const FAN_SIZE: usize = 20;
pub const FAN_STEP_DEG: f64 = 18.0;
pub const FAN_SPREAD_DEG: f64 = 10.0;

// Thin triangles with one vertex at the ray origin, spread around the full
// circle with lengths wobbling about 0.8.
pub fn thin_fan() -> Panel {
    let centre = ray_origin();
    let mut pieces = Vec::with_capacity(FAN_SIZE);
    let mut rays = Vec::with_capacity(FAN_SIZE);
    for i in 0..FAN_SIZE {
        let angle = (i as f64 * FAN_STEP_DEG).to_radians();
        let length = 0.8 + 0.4 * (i as f64 * 0.5).sin();
        let edge = LineSegment::from_polar(centre, angle, length);
        let far_edge = LineSegment::from_polar(centre, angle + FAN_SPREAD_DEG.to_radians(), length);
        pieces.push(Piece::new(
            Triangle::new(centre, edge.end, far_edge.end),
            Tint::Blue,
            0.1,
        ));
        rays.push(edge);
    }
    Panel {
        title: "Step 5: Many Overlapping Triangles".to_string(),
        caption: "High overlap, low effective area".to_string(),
        pieces,
        rays: RaySet { rays, alpha: 0.2 },
        points: vec![],
    }
}

pub fn limit_set(setup: &ConstructionSetup) -> Result<Panel, ConfigError> {
    Ok(Panel {
        title: "Step 6: Limit Set (Area → 0)".to_string(),
        caption: "Area < ε for any ε > 0".to_string(),
        pieces: vec![],
        rays: fan(arange(0.0, 180.0, 10.0), setup.limit_ray_length, 0.3),
        points: limit_cloud::limit_cloud(&setup.limit_cloud)?,
    })
}

/// All six panels, in reading order.
pub fn besicovitch_steps(setup: &ConstructionSetup) -> Result<Vec<Panel>, ConfigError> {
    Ok(vec![
        initial_triangle(setup),
        first_split(setup),
        translated_overlap(setup),
        further_split(),
        thin_fan(),
        limit_set(setup)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn six_panels_with_expected_piece_counts() {
        let panels = besicovitch_steps(&ConstructionSetup::default()).unwrap();
        let counts: Vec<usize> = panels.iter().map(|p| p.pieces.len()).collect();
        assert_eq!(counts, vec![1, 3, 3, 12, 20, 0]);
        assert_eq!(panels[5].points.len(), 500);
    }

    #[test]
    fn ray_counts_follow_angle_steps() {
        let setup = ConstructionSetup::default();
        assert_eq!(initial_triangle(&setup).rays.rays.len(), 3);
        assert_eq!(first_split(&setup).rays.rays.len(), 6);
        assert_eq!(translated_overlap(&setup).rays.rays.len(), 12);
        assert_eq!(thin_fan().rays.rays.len(), 20);
        assert_eq!(limit_set(&setup).unwrap().rays.rays.len(), 18);
    }

    #[test]
    fn split_covers_three_quarters_of_whole() {
        let setup = ConstructionSetup::default();
        let whole = initial_triangle(&setup).total_area();
        assert_relative_eq!(whole, 2.0, epsilon = 1e-12);
        assert_relative_eq!(first_split(&setup).total_area(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn translation_keeps_piece_areas() {
        let setup = ConstructionSetup::default();
        let split = first_split(&setup);
        let moved = translated_overlap(&setup);
        for (a, b) in split.pieces.iter().zip(&moved.pieces) {
            assert_relative_eq!(a.triangle.area(), b.triangle.area(), epsilon = 1e-12);
            assert_eq!(a.tint, b.tint);
        }
    }

    #[test]
    fn grid_triangles_fit_the_panel() {
        let panel = further_split();
        assert_eq!(panel.caption, "12 small triangles");
        for piece in &panel.pieces {
            assert_relative_eq!(piece.triangle.area(), 0.18, epsilon = 1e-12);
            for v in piece.triangle.vertices {
                assert!(PANEL_BOUNDS.contains(&v), "{} outside panel", v);
            }
        }
        assert_eq!(
            panel.pieces[5].tint,
            Tint::Palette {
                index: 1,
                of: GRID_COLUMNS
            }
        );
    }

    #[test]
    fn fan_pieces_start_at_origin() {
        let panel = thin_fan();
        for (piece, ray) in panel.pieces.iter().zip(&panel.rays.rays) {
            assert_eq!(piece.triangle.vertices[0], ray_origin());
            assert_eq!(piece.triangle.vertices[1], ray.end);
        }
        assert_relative_eq!(panel.rays.rays[0].length(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn panels_are_reproducible() {
        let setup = ConstructionSetup::default();
        assert_eq!(
            besicovitch_steps(&setup).unwrap(),
            besicovitch_steps(&setup).unwrap()
        );
    }
}
