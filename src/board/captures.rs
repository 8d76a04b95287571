//! Row and column run decomposition, shared by capture resolution and evaluation.

use once_cell::sync::Lazy;

use super::coord::Coord;
use super::side::Side;
use super::{Board, BOARD_SIZE};

/// Every row (top to bottom) followed by every column (left to right).
static LINES: Lazy<Vec<[Coord; BOARD_SIZE]>> = Lazy::new(|| {
    let rows = (0..BOARD_SIZE)
        .map(|row| std::array::from_fn(|col| Coord::new(row as u8, col as u8)));
    let cols = (0..BOARD_SIZE)
        .map(|col| std::array::from_fn(|row| Coord::new(row as u8, col as u8)));
    rows.chain(cols).collect()
});

/// What sits just beyond one end of a run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Boundary {
    Edge,
    Empty,
    Piece(Side),
}

impl From<Option<Side>> for Boundary {
    fn from(cell: Option<Side>) -> Self {
        match cell {
            Some(side) => Boundary::Piece(side),
            None => Boundary::Empty,
        }
    }
}

/// A maximal stretch of same-side pieces along one row or column.
#[derive(Debug)]
pub struct Run<'a> {
    pub side: Side,
    pub cells: &'a [Coord],
    pub before: Boundary,
    pub after: Boundary,
}

impl Run<'_> {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Both ends are pieces of `side`. The board edge does not count.
    pub fn is_sandwiched_by(&self, side: Side) -> bool {
        self.before == Boundary::Piece(side) && self.after == Boundary::Piece(side)
    }

    /// Flanked by the opponent on both ends, or by the opponent on one end and the edge
    /// on the other.
    pub fn is_captured(&self) -> bool {
        let opponent = Boundary::Piece(self.side.opposite());
        match (self.before, self.after) {
            (Boundary::Edge, Boundary::Edge) => false,
            (Boundary::Edge, after) => after == opponent,
            (before, Boundary::Edge) => before == opponent,
            (before, after) => before == opponent && after == opponent,
        }
    }
}

fn line_runs<'a>(board: &Board, line: &'a [Coord]) -> Vec<Run<'a>> {
    let mut runs = Vec::new();
    let mut start = 0;

    while start < line.len() {
        let side = match board.get(line[start]) {
            Some(side) => side,
            None => {
                start += 1;
                continue;
            }
        };

        let mut end = start;
        while end + 1 < line.len() && board.get(line[end + 1]) == Some(side) {
            end += 1;
        }

        let before = match start {
            0 => Boundary::Edge,
            _ => board.get(line[start - 1]).into(),
        };
        let after = if end + 1 == line.len() {
            Boundary::Edge
        } else {
            board.get(line[end + 1]).into()
        };

        runs.push(Run {
            side,
            cells: &line[start..=end],
            before,
            after,
        });
        start = end + 1;
    }

    runs
}

/// Every run on every row and column of the board.
pub fn runs(board: &Board) -> impl Iterator<Item = Run<'static>> + '_ {
    LINES.iter().flat_map(move |line| line_runs(board, line))
}

/// Cells that a capture pass would clear, sorted and deduplicated. A cell can belong to
/// a captured row run and a captured column run at the same time.
pub fn captured_cells(board: &Board) -> Vec<Coord> {
    let mut captured: Vec<Coord> = runs(board)
        .filter(Run::is_captured)
        .flat_map(|run| run.cells.iter().copied())
        .collect();
    captured.sort_unstable();
    captured.dedup();
    captured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coord::coords::*;
    use crate::flank_position;

    #[test]
    fn test_line_count() {
        assert_eq!(LINES.len(), 2 * BOARD_SIZE);
    }

    #[test]
    fn test_runs_on_top_row() {
        let board = flank_position! {
            AA.HHA.
            .......
            .......
            .......
            .......
            .......
            .......
        };
        let row_runs = line_runs(&board, &LINES[0]);
        assert_eq!(row_runs.len(), 3);

        assert_eq!(row_runs[0].side, Side::Triangle);
        assert_eq!(row_runs[0].cells, &[A7, B7]);
        assert_eq!(row_runs[0].before, Boundary::Edge);
        assert_eq!(row_runs[0].after, Boundary::Empty);

        assert_eq!(row_runs[1].side, Side::Circle);
        assert_eq!(row_runs[1].len(), 2);
        assert_eq!(row_runs[1].before, Boundary::Empty);
        assert_eq!(row_runs[1].after, Boundary::Piece(Side::Triangle));

        assert_eq!(row_runs[2].before, Boundary::Piece(Side::Circle));
        assert_eq!(row_runs[2].after, Boundary::Empty);
    }

    #[test]
    fn test_full_line_run_touches_both_edges() {
        let board = flank_position! {
            HHHHHHH
            .......
            .......
            .......
            .......
            .......
            .......
        };
        let row_runs = line_runs(&board, &LINES[0]);
        assert_eq!(row_runs.len(), 1);
        assert_eq!(row_runs[0].before, Boundary::Edge);
        assert_eq!(row_runs[0].after, Boundary::Edge);
        assert!(!row_runs[0].is_captured());
    }

    #[test]
    fn test_sandwiched_by_ignores_edges() {
        let board = flank_position! {
            HA.AHA.
            .......
            .......
            .......
            .......
            .......
            .......
        };
        let row_runs = line_runs(&board, &LINES[0]);
        // `H` at a7 touches the edge, `H` at e7 sits between two triangles
        assert!(!row_runs[0].is_sandwiched_by(Side::Triangle));
        assert!(row_runs[3].is_sandwiched_by(Side::Triangle));
    }
}
