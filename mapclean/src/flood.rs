use crate::{CellState, Direction, Edge, Error, Grid, Point};

/// Marks unscanned space that is connected to the outside of the map as [`CellState::Outdoor`].
///
/// The fill is seeded from the perimeter of the grid. When a perimeter cell is indoor space the
/// map was cropped right through a room, so the grid is grown by one outdoor line on that side
/// before the sweep continues.
#[derive(Debug)]
pub struct OutdoorFloodFiller {
    order: [Direction; 4],
    // pending cells, each one is already marked outdoor when pushed
    stack: Vec<Point>,
    growths: usize,
    flooded: usize,
}

impl Default for OutdoorFloodFiller {
    fn default() -> Self {
        Self::new()
    }
}

impl OutdoorFloodFiller {
    pub fn new() -> Self {
        Self::with_order(Direction::ALL)
    }

    /// Use a specific neighbour visiting order. The final classification does not depend on it.
    pub fn with_order(order: [Direction; 4]) -> Self {
        Self {
            order,
            stack: Vec::new(),
            growths: 0,
            flooded: 0,
        }
    }

    /// Number of lines added to the grid so far
    pub fn growths(&self) -> usize {
        self.growths
    }

    /// Number of cells reclassified as outdoor so far
    pub fn flooded(&self) -> usize {
        self.flooded
    }

    /// Sweep all four edges in [`Edge::SWEEP_ORDER`], growing the grid where needed
    pub fn mark_outdoors(&mut self, grid: Grid) -> Result<Grid, Error> {
        Edge::SWEEP_ORDER
            .into_iter()
            .try_fold(grid, |grid, edge| self.sweep_edge(grid, edge))
    }

    /// Flood from every cell of the outermost line on `edge`.
    ///
    /// An indoor cell on the line grows the grid on that edge and restarts the sweep against the
    /// new dimensions. The new line is entirely outdoor, so the restarted sweep floods into the
    /// former perimeter and cannot trigger another growth. Border cells on the line are left alone.
    pub fn sweep_edge(&mut self, mut grid: Grid, edge: Edge) -> Result<Grid, Error> {
        let mut grown = false;
        let mut index = 0;

        while let Some(point) = grid.edge_point(edge, index) {
            match grid.get(point)? {
                CellState::Unscanned | CellState::Outdoor => {
                    let marked = self.flood(&mut grid, point)?;
                    self.flooded += marked;
                }
                CellState::Indoor if !grown => {
                    log::debug!(
                        "indoor cell at ({}, {}) on the {} edge, growing {}x{} grid",
                        point.row,
                        point.col,
                        edge,
                        grid.rows(),
                        grid.cols()
                    );
                    grid = grid.grow(edge, CellState::Outdoor);
                    self.growths += 1;
                    grown = true;
                    index = 0;
                    continue;
                }
                CellState::Indoor | CellState::Border => {}
            }
            index += 1;
        }

        Ok(grid)
    }

    /// Mark every cell reachable from `seed` through unscanned cells as outdoor and return how
    /// many cells changed. The seed itself must be unscanned or outdoor, anything else is a no-op.
    pub fn flood(&mut self, grid: &mut Grid, seed: Point) -> Result<usize, Error> {
        let mut marked = 0;

        match grid.get(seed)? {
            CellState::Unscanned => {
                grid.set(seed, CellState::Outdoor)?;
                marked += 1;
            }
            CellState::Outdoor => {}
            CellState::Indoor | CellState::Border => return Ok(0),
        }

        self.stack.clear();
        self.stack.push(seed);

        while let Some(point) = self.stack.pop() {
            for direction in self.order {
                let Some(next) = grid.neighbor(point, direction) else {
                    continue;
                };
                if grid.get(next)? == CellState::Unscanned {
                    // mark before pushing so no cell is ever queued twice
                    grid.set(next, CellState::Outdoor)?;
                    marked += 1;
                    self.stack.push(next);
                }
            }
        }

        Ok(marked)
    }
}
