//! Well-known edge coordinates for 1x1 parts, anchor-relative.

use pf_geom::Coordinate;

pub const UP: Coordinate = Coordinate::from_millis(500, 0, 0);
pub const RIGHT: Coordinate = Coordinate::from_millis(1000, 500, 0);
pub const DOWN: Coordinate = Coordinate::from_millis(500, 1000, 0);
pub const LEFT: Coordinate = Coordinate::from_millis(0, 500, 0);
pub const CENTER: Coordinate = Coordinate::from_millis(500, 500, 0);

/// Virtual anchor shared by every boundary route: "outside the system".
/// Its negative z keeps it fixed under placement transforms, so all
/// boundary parts meet at the same point and a traced path can terminate
/// there no matter where its parts sit on the grid.
pub const IO_ANCHOR: Coordinate = Coordinate::from_millis(500, 500, -1000);

/// Center of the cell `(col, row)` of a multi-cell part, anchor-relative.
pub fn cell_center(col: u32, row: u32) -> Coordinate {
    Coordinate::from_millis(col as i32 * 1000 + 500, row as i32 * 1000 + 500, 0)
}
