use std::{fmt::Display, str::FromStr};

use crate::Error;

/// Classification of a single grid cell
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CellState {
    /// The sensor never observed this cell
    #[default]
    Unscanned,
    /// Observed free space
    Indoor,
    /// A wall, either from the input or stamped around indoor space
    Border,
    /// Working label for unscanned space connected to the outside of the map. Never persisted.
    Outdoor,
}

impl Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CellState::Unscanned => "?",
                CellState::Indoor => ".",
                CellState::Border => "#",
                CellState::Outdoor => "~",
            }
        )
    }
}

impl TryFrom<char> for CellState {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '?' => Ok(CellState::Unscanned),
            '.' => Ok(CellState::Indoor),
            '#' => Ok(CellState::Border),
            '~' => Ok(CellState::Outdoor),
            _ => Err(Error::MalformedInput(format!("unknown cell character {:?}", c))),
        }
    }
}

/// One side of the grid
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// The order in which the perimeter is swept
    pub const SWEEP_ORDER: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Edge::Top => "top",
                Edge::Bottom => "bottom",
                Edge::Left => "left",
                Edge::Right => "right",
            }
        )
    }
}

/// A step to one of the 4-connected neighbours
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular occupancy grid, stored row-major in a single vec
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(rows: usize, columns: usize, fill: CellState) -> Self {
        Self {
            rows,
            columns,
            cells: vec![fill; rows * columns],
        }
    }

    /// Build a grid from row-major cells. Fails if the cell count does not match the dimensions.
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<CellState>) -> Result<Self, Error> {
        if cells.len() != rows * columns {
            return Err(Error::MalformedInput(format!(
                "expected {} cells for a {}x{} grid, got {}",
                rows * columns,
                rows,
                columns,
                cells.len()
            )));
        }

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.columns
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row < self.rows && point.col < self.columns
    }

    fn index(&self, point: Point) -> Result<usize, Error> {
        if !self.contains(point) {
            return Err(Error::OutOfBounds {
                row: point.row,
                col: point.col,
                rows: self.rows,
                cols: self.columns,
            });
        }
        Ok(point.row * self.columns + point.col)
    }

    pub fn get(&self, point: Point) -> Result<CellState, Error> {
        self.index(point).map(|i| self.cells[i])
    }

    pub fn set(&mut self, point: Point, state: CellState) -> Result<(), Error> {
        let i = self.index(point)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Returns a grid with one more row (top/bottom) or column (left/right) on the given edge.
    /// The new cells are set to `fill` and every existing cell keeps its semantic position, so
    /// growing at the top or left shifts all existing coordinates by one.
    pub fn grow(self, edge: Edge, fill: CellState) -> Grid {
        let (rows, columns) = match edge {
            Edge::Top | Edge::Bottom => (self.rows + 1, self.columns),
            Edge::Left | Edge::Right => (self.rows, self.columns + 1),
        };
        let (row_offset, col_offset) = match edge {
            Edge::Top => (1, 0),
            Edge::Left => (0, 1),
            Edge::Bottom | Edge::Right => (0, 0),
        };

        let mut cells = vec![fill; rows * columns];

        // copy row by row into the offset position of the new container
        for (row, old) in self.cells.chunks_exact(self.columns.max(1)).enumerate() {
            let start = (row + row_offset) * columns + col_offset;
            cells[start..start + old.len()].copy_from_slice(old);
        }

        Grid {
            rows,
            columns,
            cells,
        }
    }

    /// The neighbouring point in the given direction, if it lies inside the grid
    pub fn neighbor(&self, point: Point, direction: Direction) -> Option<Point> {
        let neighbor = match direction {
            Direction::Up if point.row > 0 => Point::new(point.row - 1, point.col),
            Direction::Down => Point::new(point.row + 1, point.col),
            Direction::Left if point.col > 0 => Point::new(point.row, point.col - 1),
            Direction::Right => Point::new(point.row, point.col + 1),
            _ => return None,
        };
        self.contains(neighbor).then_some(neighbor)
    }

    /// Returns the neighbouring points for the given point
    /// Only valid points inside the grid will be returned
    pub fn neighbors_four(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(point, direction))
    }

    /// The `index`-th cell of the outermost line on `edge`, for the current dimensions
    pub fn edge_point(&self, edge: Edge, index: usize) -> Option<Point> {
        if self.rows == 0 || self.columns == 0 {
            return None;
        }
        let point = match edge {
            Edge::Top => Point::new(0, index),
            Edge::Bottom => Point::new(self.rows - 1, index),
            Edge::Left => Point::new(index, 0),
            Edge::Right => Point::new(index, self.columns - 1),
        };
        self.contains(point).then_some(point)
    }

    /// All points in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |col| Point::new(row, col)))
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| **c == state).count()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks_exact(self.columns.max(1)) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parses the notation produced by `Display`, one line per row. Blank lines and surrounding
    /// whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = 0;
        let mut columns = None;
        let mut cells = Vec::new();

        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let before = cells.len();
            for c in line.chars() {
                cells.push(CellState::try_from(c)?);
            }
            let width = cells.len() - before;

            match columns {
                None => columns = Some(width),
                Some(expected) if expected != width => {
                    return Err(Error::MalformedInput(format!(
                        "row {} has {} cells, expected {}",
                        rows, width, expected
                    )))
                }
                Some(_) => {}
            }
            rows += 1;
        }

        Grid::from_cells(rows, columns.unwrap_or(0), cells)
    }
}
