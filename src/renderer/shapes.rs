//! Shape generation for the grid
//!
//! Positions are canvas pixels, origin top-left, +y down.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{Cell, Snake};

/// Stroke width around each cell (px)
const STROKE_PX: f32 = 1.0;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// A cell as a stroked square: outline quad, then the fill inset by the stroke
pub fn cell(cell: Cell, cell_px: f32, fill: [f32; 4], stroke: [f32; 4]) -> Vec<Vertex> {
    let min = cell.as_vec2() * cell_px;
    let max = min + Vec2::splat(cell_px);
    let inset = Vec2::splat(STROKE_PX.min(cell_px / 4.0));

    let mut vertices = Vec::with_capacity(12);
    vertices.extend_from_slice(&rect(min, max, stroke));
    vertices.extend_from_slice(&rect(min + inset, max - inset, fill));
    vertices
}

/// Full frame: food first, then the snake with its head highlighted
pub fn scene(snake: &Snake, food: Cell, cell_px: u32) -> Vec<Vertex> {
    let px = cell_px as f32;
    let mut vertices = Vec::with_capacity((snake.len() + 1) * 12);

    vertices.extend(cell(food, px, colors::FOOD_FILL, colors::FOOD_STROKE));

    for (i, segment) in snake.iter().enumerate() {
        let fill = if i == 0 {
            colors::HEAD_FILL
        } else {
            colors::BODY_FILL
        };
        vertices.extend(cell(*segment, px, fill, colors::SNAKE_STROKE));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_cell_covers_its_square() {
        let v = cell(IVec2::new(2, 3), 20.0, colors::BODY_FILL, colors::SNAKE_STROKE);
        assert_eq!(v.len(), 12);
        let xs: Vec<f32> = v[..6].iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v[..6].iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 40.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 60.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 60.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 80.0);
        // Fill is inset
        assert_eq!(v[6].position, [41.0, 61.0]);
    }

    #[test]
    fn test_scene_colors() {
        let snake = Snake::from_cells([IVec2::new(5, 5), IVec2::new(4, 5)]).unwrap();
        let v = scene(&snake, IVec2::new(0, 0), 20);
        assert_eq!(v.len(), 36);
        assert_eq!(v[6].color, colors::FOOD_FILL);
        assert_eq!(v[18].color, colors::HEAD_FILL);
        assert_eq!(v[30].color, colors::BODY_FILL);
        assert_eq!(v[12].color, colors::SNAKE_STROKE);
    }
}
