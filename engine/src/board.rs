#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "-",
        }
    }
}

/// N×N grid in row-major order. One instance lives for a whole game and
/// is mutated in place by the search agents through the apply/undo pair;
/// it is never cloned during search.
#[derive(Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
    winner: Option<Mark>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "board size must be at least 1");
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
            winner: None,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Places `mark` on an empty cell and updates `winner` if the move
    /// completed a line. Returns false without mutating anything when the
    /// cell is already occupied; this is the only illegal-move guard.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> bool {
        if self.cells[index] != Mark::Empty {
            return false;
        }
        self.cells[index] = mark;
        if self.check_win(index, mark) {
            self.winner = Some(mark);
        }
        true
    }

    /// Reverts a simulated move. Clears `winner` unconditionally, so the
    /// agents must call this exactly once per applied move, in LIFO order
    /// matching the recursion.
    pub fn undo_move(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
        self.winner = None;
    }

    /// True when the row, column, or a full-length diagonal through
    /// `index` is entirely `mark`.
    ///
    /// Diagonal membership is decided by the index arithmetic
    /// `index % (size + 1)` / `index % (size - 1)`, which is exact for
    /// size 3 and kept as-is for larger boards.
    pub fn check_win(&self, index: usize, mark: Mark) -> bool {
        let size = self.size;

        let row = index / size;
        if self.cells[row * size..(row + 1) * size]
            .iter()
            .all(|&c| c == mark)
        {
            return true;
        }

        let col = index % size;
        if (0..size).all(|i| self.cells[col + i * size] == mark) {
            return true;
        }

        if index % (size + 1) == 0 && (0..size).all(|i| self.cells[i * (size + 1)] == mark) {
            return true;
        }

        if index % (size - 1) == 0
            && index != 0
            && index != size * size - 1
            && (0..size).all(|i| self.cells[(i + 1) * (size - 1)] == mark)
        {
            return true;
        }

        false
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|&c| c == Mark::Empty)
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Mark::Empty).count()
    }

    /// Indices of all empty cells, in ascending order. The agents rely on
    /// this ordering for their first-seen tie-break.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == Mark::Empty)
            .map(|(i, _)| i)
            .collect()
    }
}
