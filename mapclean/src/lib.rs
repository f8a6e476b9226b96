//! Cleanup for occupancy grids produced by a mapping robot.
//!
//! Raw maps leave unscanned space both inside unexplored rooms and outside the building. This
//! crate tells the two apart by flooding unscanned space from the edges of the map, then stamps
//! a one cell wall between the outside and every indoor cell it touches so planners cannot
//! route through open map edges.

pub mod boundary;
mod error;
pub mod flood;
pub mod grid;
pub mod pgm;

pub use boundary::{clear_outdoor, stamp_boundary};
pub use error::Error;
pub use flood::OutdoorFloodFiller;
pub use grid::{CellState, Direction, Edge, Grid, Point};

/// Run the full cleanup: mark outdoor space (growing the grid where a room touches the edge),
/// stamp the boundary walls and drop the outdoor working label again.
pub fn process(grid: Grid) -> Result<Grid, Error> {
    process_with(grid, OutdoorFloodFiller::new())
}

/// Same as [`process`] with a caller supplied flood filler
pub fn process_with(grid: Grid, mut filler: OutdoorFloodFiller) -> Result<Grid, Error> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let walls = grid.count(CellState::Border);

    let grid = filler.mark_outdoors(grid)?;
    log::trace!("after flood:\n{}", grid);

    let grid = stamp_boundary(grid)?;
    let grid = clear_outdoor(grid)?;

    log::info!(
        "processed {}x{} grid into {}x{}: {} growths, {} outdoor cells, {} border cells stamped",
        rows,
        cols,
        grid.rows(),
        grid.cols(),
        filler.growths(),
        filler.flooded(),
        grid.count(CellState::Border) - walls
    );

    Ok(grid)
}
