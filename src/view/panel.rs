use bevy::prelude::*;
use nalgebra::Point2;

use crate::geometry::Bounds;

/// Maps a panel's plot coordinates onto a region of the window, keeping
/// equal aspect on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelFrame {
    pub bounds: Bounds,
    pub centre: Vec2,
    pub scale: f32,
}

impl PanelFrame {
    pub fn fit(bounds: Bounds, cell: Rect) -> Self {
        let scale = (cell.width() as f64 / bounds.width()).min(cell.height() as f64 / bounds.height());
        PanelFrame {
            bounds,
            centre: cell.center(),
            scale: scale as f32,
        }
    }

    pub fn transform_coord(&self, sd: f64) -> f32 {
        (sd * self.scale as f64) as f32
    }

    pub fn transformed_point(&self, p: &Point2<f64>) -> Vec2 {
        let r = p - self.bounds.centre();
        self.centre + Vec2::new(self.transform_coord(r.x), self.transform_coord(r.y))
    }

    pub fn screen_rect(&self) -> Rect {
        Rect::from_center_size(
            self.centre,
            Vec2::new(
                self.transform_coord(self.bounds.width()),
                self.transform_coord(self.bounds.height()),
            ),
        )
    }
}

/// Splits `area` into `n_rows` by `n_cols` cells, returned row by row from the
/// top-left, each shrunk by `padding` on every side.
pub fn grid_cells(area: Rect, n_cols: usize, n_rows: usize, padding: f32) -> Vec<Rect> {
    let cell_size = Vec2::new(area.width() / n_cols as f32, area.height() / n_rows as f32);
    let mut cells = Vec::with_capacity(n_cols * n_rows);
    for row in 0..n_rows {
        for col in 0..n_cols {
            let min = Vec2::new(
                area.min.x + col as f32 * cell_size.x,
                area.max.y - (row + 1) as f32 * cell_size.y,
            );
            cells.push(Rect::from_corners(min, min + cell_size).inflate(-padding));
        }
    }
    cells
}
