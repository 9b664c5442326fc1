use super::DrawablePath;
use crate::error::Result;
use crate::grid::{AxialCoord, Corner, Face, FaceMask, HexLayout, Region};
use crate::math::Point2;

/// Unsmoothed closed outline through every point of `polygon`.
#[must_use]
pub fn straight_path(polygon: &[Point2]) -> DrawablePath {
    let mut path = DrawablePath::new(false);
    let Some((first, rest)) = polygon.split_first() else {
        return path;
    };
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path.close();
    path
}

/// Straight outlines of several polygons, concatenated into one path.
#[must_use]
pub fn straight_paths(polygons: &[Vec<Point2>]) -> DrawablePath {
    let mut path = DrawablePath::new(false);
    for polygon in polygons {
        path.extend(straight_path(polygon));
    }
    path
}

/// Outline of one hexagon, starting and ending at its top corner.
///
/// Faces in `hidden` are skipped with a move instead of a line.
#[must_use]
pub fn hex_outline(layout: &HexLayout, coord: AxialCoord, hidden: FaceMask) -> DrawablePath {
    let corners = layout.corners(coord);
    let mut path = DrawablePath::new(false);
    path.move_to(corners[Corner::Top.index()]);
    for step in 1..=6 {
        let corner = Corner::ALL[step % 6];
        // The face ending at `corner` when walking counter-clockwise.
        let face = Face::ALL[(corner.index() + 1) % 6];
        let p = corners[corner.index()];
        if hidden.contains(face) {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path
}

/// Grid-aligned outline of a region: each member hexagon with the faces it
/// shares with other members hidden.
///
/// # Errors
///
/// Returns `GridError::TileOutOfRange` if a member is not addressable.
pub fn region_grid_outline(region: &Region, layout: &HexLayout) -> Result<DrawablePath> {
    region.ensure_addressable()?;
    let mut path = DrawablePath::new(false);
    for key in region.iter() {
        let tile = key.coord();
        let hidden: FaceMask = Face::ALL
            .into_iter()
            .filter(|face| region.contains(tile.neighbor(*face)))
            .collect();
        path.extend(hex_outline(layout, tile, hidden));
    }
    Ok(path)
}
