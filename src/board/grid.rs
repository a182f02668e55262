//! Fixed-size grid of lights.

use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, ConfigError, Coord, GameRng};

/// A `rows x cols` grid of lights, `true` = lit.
///
/// Cells are stored row-major in one `Vec`. Dimensions are fixed at
/// construction and always positive.
///
/// Serializes as an array of rows, e.g. `[[false,true],[true,false]]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<bool>>", try_from = "Vec<Vec<bool>>")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Generate a random board.
    ///
    /// Every cell is an independent Bernoulli trial with probability
    /// `config.chance_lit_on_start` of being lit. The result may not be
    /// solvable.
    pub fn generate(config: &BoardConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let chance = config.chance_lit_on_start;
        let cells = (0..config.cell_count()).map(|_| rng.chance(chance)).collect();

        Ok(Self {
            rows: config.rows,
            cols: config.cols,
            cells,
        })
    }

    /// A board with every light off.
    pub fn unlit(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        Self::filled(rows, cols, false)
    }

    /// A board with every cell set to `lit`.
    pub fn filled(rows: usize, cols: usize, lit: bool) -> Result<Self, ConfigError> {
        BoardConfig::new(rows, cols).validate()?;
        Ok(Self {
            rows,
            cols,
            cells: vec![lit; rows * cols],
        })
    }

    /// Build from explicit rows. All rows must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, ConfigError> {
        let first = rows.first().ok_or(ConfigError::Empty)?;
        let cols = first.len();
        BoardConfig::new(rows.len(), cols).validate()?;

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ConfigError::Ragged {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.to_index(self.rows, self.cols).is_some()
    }

    /// Cell state at a coordinate, `None` if off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<bool> {
        coord
            .to_index(self.rows, self.cols)
            .map(|(row, col)| self.cells[row * self.cols + col])
    }

    /// Cell state by index, `None` if off the board.
    #[must_use]
    pub fn is_lit(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// One row of cells.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.cols)
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(<[bool]>::to_vec).collect()
    }

    /// Invert one in-range cell.
    pub(crate) fn toggle_at(&mut self, row: usize, col: usize) {
        let cell = &mut self.cells[row * self.cols + col];
        *cell = !*cell;
    }
}

impl From<Board> for Vec<Vec<bool>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl TryFrom<Vec<Vec<bool>>> for Board {
    type Error = ConfigError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

/// Renders `O` for lit and `.` for unlit, one row per line.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.iter_rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (col, &lit) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if lit { 'O' } else { '.' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_dimensions() {
        let mut rng = GameRng::new(42);
        let board = Board::generate(&BoardConfig::new(3, 7), &mut rng).unwrap();

        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 7);
        assert_eq!(board.cells().len(), 21);
        assert_eq!(board.to_rows().len(), 3);
        assert!(board.iter_rows().all(|row| row.len() == 7));
    }

    #[test]
    fn test_generate_is_seeded() {
        let config = BoardConfig::new(6, 6);
        let a = Board::generate(&config, &mut GameRng::new(5)).unwrap();
        let b = Board::generate(&config, &mut GameRng::new(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let mut rng = GameRng::new(1);
        assert_eq!(
            Board::generate(&BoardConfig::new(0, 3), &mut rng),
            Err(ConfigError::ZeroRows)
        );
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(vec![
            vec![false, false, false],
            vec![true, true, false],
            vec![false, false, false],
        ])
        .unwrap();

        assert_eq!(board.is_lit(1, 0), Some(true));
        assert_eq!(board.is_lit(1, 1), Some(true));
        assert_eq!(board.is_lit(1, 2), Some(false));
        assert_eq!(board.get(Coord::new(1, 1)), Some(true));
        assert_eq!(board.get(Coord::new(3, 0)), None);
        assert_eq!(board.row(1), Some(&[true, true, false][..]));
        assert_eq!(board.row(3), None);
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(Board::from_rows(vec![]), Err(ConfigError::Empty));
        assert_eq!(Board::from_rows(vec![vec![]]), Err(ConfigError::ZeroCols));
        assert_eq!(
            Board::from_rows(vec![vec![true, false], vec![true]]),
            Err(ConfigError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows(vec![vec![false, true], vec![true, false]]).unwrap();
        assert_eq!(board.to_string(), ". O\nO .");
    }

    #[test]
    fn test_serde_as_rows() {
        let board = Board::from_rows(vec![vec![true, false], vec![false, false]]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[[true,false],[false,false]]");

        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);

        assert!(serde_json::from_str::<Board>("[[true],[true,false]]").is_err());
    }

    #[test]
    fn test_is_lit_out_of_range() {
        let board = Board::unlit(2, 2).unwrap();
        assert_eq!(board.is_lit(2, 0), None);
        assert_eq!(board.is_lit(0, 2), None);
        assert_eq!(board.is_lit(5, 0), None);
        assert_eq!(board.is_lit(usize::MAX, usize::MAX), None);
        assert_eq!(board.is_lit(1, 1), Some(false));
    }
}
