//! Tile grid geometry and arrow-key navigation.

use crate::engine::command::Direction;
use crate::options::LayoutOptions;
use crate::renderer::Rect;

/// Pixel layout of the compound grid plus the focus viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    count: usize,
    columns: usize,
    padding: f32,
    tile_w: f32,
    tile_h: f32,
    focus: Rect,
}

impl GridLayout {
    /// Lay out `count` tiles according to `options`.
    ///
    /// Tile sizes are whole pixels; a zero column count is treated as one.
    #[must_use]
    pub fn new(options: &LayoutOptions, count: usize) -> Self {
        let columns = options.columns.max(1) as usize;
        let rows = count.div_ceil(columns).max(1);
        let width = options.window_width as f32;
        let height = options.window_height as f32;
        let padding = options.padding as f32;
        let margin = options.focus_margin as f32;

        let tile_w = ((width - padding * (columns as f32 + 1.0))
            / columns as f32)
            .floor()
            .max(0.0);
        let tile_h = ((height - padding * (rows as f32 + 1.0)) / rows as f32)
            .floor()
            .max(0.0);

        Self {
            count,
            columns,
            padding,
            tile_w,
            tile_h,
            focus: Rect::new(
                margin,
                margin,
                (width - 2.0 * margin).max(0.0),
                (height - 2.0 * margin).max(0.0),
            ),
        }
    }

    /// Number of tiles laid out.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Tiles per row.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Screen rectangle of tile `index`.
    #[must_use]
    pub fn tile_rect(&self, index: usize) -> Rect {
        let col = (index % self.columns) as f32;
        let row = (index / self.columns) as f32;
        Rect::new(
            self.padding + col * (self.tile_w + self.padding),
            self.padding + row * (self.tile_h + self.padding),
            self.tile_w,
            self.tile_h,
        )
    }

    /// Viewport of the single compound in focus mode.
    #[must_use]
    pub fn focus_rect(&self) -> Rect {
        self.focus
    }

    /// Move `index` one step in `direction`, staying put at grid edges.
    #[must_use]
    pub fn step(&self, index: usize, direction: Direction) -> usize {
        let col = index % self.columns;
        match direction {
            Direction::Left if col > 0 => index - 1,
            Direction::Right
                if col + 1 < self.columns && index + 1 < self.count =>
            {
                index + 1
            }
            Direction::Up if index >= self.columns => index - self.columns,
            Direction::Down if index + self.columns < self.count => {
                index + self.columns
            }
            _ => index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_grid() -> GridLayout {
        GridLayout::new(&LayoutOptions::default(), 20)
    }

    #[test]
    fn tiles_use_whole_pixels() {
        let grid = default_grid();
        assert_eq!(grid.tile_rect(0), Rect::new(14.0, 14.0, 303.0, 207.0));
        assert_eq!(grid.tile_rect(6), Rect::new(331.0, 235.0, 303.0, 207.0));
        let last = grid.tile_rect(19);
        assert_eq!((last.x, last.y), (1282.0, 677.0));
        assert!(last.x + last.w <= 1600.0);
        assert!(last.y + last.h <= 900.0);
    }

    #[test]
    fn focus_rect_is_inset() {
        assert_eq!(
            default_grid().focus_rect(),
            Rect::new(20.0, 20.0, 1560.0, 860.0)
        );
    }

    #[test]
    fn rows_follow_count() {
        let grid = GridLayout::new(&LayoutOptions::default(), 7);
        // Two rows share the height.
        assert_eq!(grid.tile_rect(0).h, 429.0);
        assert_eq!(grid.tile_rect(5).y, 14.0 + 429.0 + 14.0);
    }

    #[test]
    fn navigation_clamps_at_edges() {
        let grid = default_grid();
        assert_eq!(grid.step(0, Direction::Left), 0);
        assert_eq!(grid.step(0, Direction::Up), 0);
        assert_eq!(grid.step(4, Direction::Right), 4);
        assert_eq!(grid.step(5, Direction::Left), 5);
        assert_eq!(grid.step(17, Direction::Down), 17);

        assert_eq!(grid.step(0, Direction::Right), 1);
        assert_eq!(grid.step(0, Direction::Down), 5);
        assert_eq!(grid.step(12, Direction::Up), 7);
        assert_eq!(grid.step(12, Direction::Left), 11);
    }

    #[test]
    fn right_stops_at_last_compound_in_partial_row() {
        let grid = GridLayout::new(&LayoutOptions::default(), 7);
        assert_eq!(grid.step(6, Direction::Right), 6);
        assert_eq!(grid.step(2, Direction::Down), 2);
        assert_eq!(grid.step(1, Direction::Down), 6);
    }
}
