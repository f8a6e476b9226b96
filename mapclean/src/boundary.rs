use crate::{CellState, Error, Grid};

/// Turn every outdoor cell that touches indoor space (4-connected) into a border cell.
///
/// Runs in place. Indoor cells never change during the pass, so cells that were already
/// stamped cannot influence the decision for later ones.
pub fn stamp_boundary(mut grid: Grid) -> Result<Grid, Error> {
    let mut stamped = 0;

    for point in grid.points() {
        if grid.get(point)? != CellState::Outdoor {
            continue;
        }

        let facing_indoors = grid
            .neighbors_four(point)
            .any(|n| grid.get(n).is_ok_and(|c| c == CellState::Indoor));

        if facing_indoors {
            grid.set(point, CellState::Border)?;
            stamped += 1;
        }
    }

    log::debug!("stamped {} border cells", stamped);
    Ok(grid)
}

/// Turn the remaining outdoor cells back into unscanned ones
pub fn clear_outdoor(mut grid: Grid) -> Result<Grid, Error> {
    for point in grid.points() {
        if grid.get(point)? == CellState::Outdoor {
            grid.set(point, CellState::Unscanned)?;
        }
    }
    Ok(grid)
}
