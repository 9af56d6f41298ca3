use crate::geom::{Point, Rect, Size};

/// Fixed cell grid laid over the work area for a given window size.
///
/// Cells are `size + margin` in both axes and start `margin` pixels in from
/// the work area's top-left corner. There is always at least one column and
/// one row, even when the window is larger than the area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementGrid {
    /// Top-left of cell (0, 0).
    pub origin: Point,
    /// Cell pitch.
    pub cell: Size,
    /// Number of columns.
    pub cols: u32,
    /// Number of rows.
    pub rows: u32,
}

impl PlacementGrid {
    /// Grid whose cells fit windows of `size` separated by `margin`.
    pub fn for_window(area: Rect, size: Size, margin: i32) -> Self {
        let cell = Size::new(size.w + margin, size.h + margin);
        Self {
            origin: Point::new(area.x + margin, area.y + margin),
            cell,
            cols: fit_count(area.w - margin, cell.w),
            rows: fit_count(area.h - margin, cell.h),
        }
    }

    /// Top-left corner of the cell at `(col, row)`.
    #[inline]
    pub fn cell_origin(&self, col: u32, row: u32) -> Point {
        Point::new(
            self.origin.x + col as i32 * self.cell.w,
            self.origin.y + row as i32 * self.cell.h,
        )
    }

    /// Candidate cells in placement priority order: column by column from
    /// the left, top to bottom within a column.
    pub fn candidates(&self) -> impl Iterator<Item = (u32, u32, Point)> + '_ {
        (0..self.cols)
            .flat_map(move |col| (0..self.rows).map(move |row| (col, row)))
            .map(move |(col, row)| (col, row, self.cell_origin(col, row)))
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Grids always have at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// How many `pitch`-sized cells fit in `span`, never fewer than one.
#[inline]
fn fit_count(span: i32, pitch: i32) -> u32 {
    if pitch <= 0 {
        return 1;
    }
    span.div_euclid(pitch).max(1) as u32
}
